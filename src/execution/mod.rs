//! Request execution helpers shared by providers.

pub mod http;
