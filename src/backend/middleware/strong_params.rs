/**
 * Field-Shape Validation ("strong params")
 *
 * Every JSON route declares the fields it needs and the primitive kind of
 * each one. The declaration is checked before the handler runs; anything
 * that does not match is answered with 400 `Bad type`.
 *
 * # Matching Rules
 *
 * - The payload must be a JSON object
 * - Every declared field must be present with exactly its declared kind
 * - Objects, arrays and `null` never match any kind
 * - Extra fields are dropped from the sanitized result, not rejected
 *
 * Empty strings pass; emptiness is a business rule of each route.
 *
 * # Example
 *
 * ```text
 * declared: { email: String, password: String }
 *
 * {"email": "a@b.c", "password": "pw", "admin": true}  -> accepted, "admin" dropped
 * {"email": "a@b.c", "password": 5}                    -> Bad type
 * {"email": "a@b.c"}                                   -> Bad type
 * ```
 */

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::backend::error::BackendError;

/// Primitive kind a declared field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
}

impl FieldKind {
    /// Whether `value` is exactly this scalar kind
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldKind::String, Value::String(_))
                | (FieldKind::Number, Value::Number(_))
                | (FieldKind::Boolean, Value::Bool(_))
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// Why a payload failed the shape check
///
/// Only used for logging; clients always see `Bad type`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("field `{field}` is not a {expected}")]
    WrongKind {
        field: String,
        expected: &'static str,
    },
}

/// Check `payload` against the declared `fields`
///
/// The payload is consumed; on success only the declared fields are
/// returned.
pub fn check_shape(
    fields: &[(&str, FieldKind)],
    payload: Value,
) -> Result<Map<String, Value>, ShapeError> {
    let Value::Object(mut object) = payload else {
        return Err(ShapeError::NotAnObject);
    };

    let mut sanitized = Map::with_capacity(fields.len());
    for &(field, kind) in fields {
        let value = object
            .remove(field)
            .ok_or_else(|| ShapeError::MissingField(field.to_string()))?;
        if !kind.matches(&value) {
            return Err(ShapeError::WrongKind {
                field: field.to_string(),
                expected: kind.name(),
            });
        }
        sanitized.insert(field.to_string(), value);
    }

    Ok(sanitized)
}

/// Request bodies that declare their field shapes
///
/// `FIELDS` must name every field the type deserializes, using the wire
/// names.
pub trait DeclaredParams: DeserializeOwned + Send {
    const FIELDS: &'static [(&'static str, FieldKind)];
}

/// Extractor that runs the shape check and hands the handler a typed body
#[derive(Debug, Clone)]
pub struct StrongParams<T>(pub T);

impl<S, T> FromRequest<S> for StrongParams<T>
where
    S: Send + Sync,
    T: DeclaredParams,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected body on {}: {}", path, rejection.body_text());
                BackendError::BadType
            })?;

        let sanitized = check_shape(T::FIELDS, payload).map_err(|e| {
            tracing::warn!("Rejected body on {}: {}", path, e);
            BackendError::BadType
        })?;

        let params = serde_json::from_value(Value::Object(sanitized)).map_err(|e| {
            tracing::warn!("Rejected body on {}: {}", path, e);
            BackendError::BadType
        })?;

        Ok(StrongParams(params))
    }
}
