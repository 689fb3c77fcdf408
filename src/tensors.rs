//! Dense containers with entries in an arbitrary scalar ring.
pub mod matrix;
