//! Domain types, error taxonomy, and text transforms shared across the
//! sitio backend. No I/O lives here.

pub mod error;
pub mod text;
pub mod types;
