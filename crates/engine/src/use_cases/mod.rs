//! Application use-cases.

pub mod encounter;
