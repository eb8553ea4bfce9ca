// Utilities for the object storage command group
pub mod error;
