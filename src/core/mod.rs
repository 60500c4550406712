//! Application-facing boundary over the record collections.

pub mod services;
