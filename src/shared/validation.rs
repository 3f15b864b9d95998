/**
 * Entity Validation
 *
 * Pure validation for stored entities. Each entity lists its rules as
 * `(field, message)` violations; nothing here touches the database.
 *
 * # Message Format
 *
 * A failed validation renders as
 * `<Entity> validation failed: <field>: <message>`, with several violations
 * joined by `", "` in the order the entity declares its fields.
 */

use std::fmt;

/// A single broken rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Stored field name (e.g. `firstName`)
    pub field: &'static str,
    /// Human-readable rule description
    pub message: &'static str,
}

impl Violation {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// All violations found on one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Entity name used in the message (`User`, `Entry`, ...)
    pub entity: &'static str,
    /// Violations in field declaration order, never empty
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Check whether a given field is among the violations
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.entity)?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Entities that can be checked before they are written
///
/// Implementors only list their violations; `validate` turns a non-empty
/// list into a [`ValidationFailure`].
pub trait Validate {
    /// Name used in the failure message
    const ENTITY: &'static str;

    /// Every rule this value currently breaks
    fn violations(&self) -> Vec<Violation>;

    fn validate(&self) -> Result<(), ValidationFailure> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                entity: Self::ENTITY,
                violations,
            })
        }
    }
}

/// Length in Unicode scalar values
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn contains_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}
