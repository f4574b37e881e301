//! Provider implementations.

pub mod bitnet;
