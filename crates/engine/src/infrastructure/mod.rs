//! Infrastructure: ports, adapters, and injected randomness.

pub mod dice;
pub mod persistence;
pub mod ports;
