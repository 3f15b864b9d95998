//! Property-based tests

mod gate_proptest;
