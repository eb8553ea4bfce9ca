pub mod create;
pub mod get;
pub mod label;
pub mod regenerate_keys;
