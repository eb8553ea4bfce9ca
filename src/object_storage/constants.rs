// Paging defaults
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const MAX_PER_PAGE: u32 = 500;

// Tier used by `create` when `--tier-id` is not given
pub const DEFAULT_TIER_ID: i64 = 1;

pub const LABEL_SET_MESSAGE: &str = "object storage label has been set";
pub const DELETED_MESSAGE: &str = "object storage has been deleted";
