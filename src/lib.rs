pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod object_storage;
pub mod printer;
