/// Application name
pub const APP_NAME: &str = "Pinwall";

/// Maximum board title length, in characters
pub const BOARD_TITLE_MAX: usize = 16;

/// Maximum post title length, in characters
pub const POST_TITLE_MAX: usize = 26;

/// Maximum number of pinned posts per board
pub const MAX_PINNED_POSTS: usize = 2;

/// How long a transient notice stays visible, in seconds
pub const NOTICE_TTL_SECS: u64 = 5;

/// Maximum accepted image upload size in bytes (5 MiB)
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// Storage key holding the serialized board collection
pub const BOARDS_KEY: &str = "boards";
