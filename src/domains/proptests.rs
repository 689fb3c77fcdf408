//! Property-based tests for the rational number type.
