//! Process exit codes

/// Command completed (including a negative verification answer)
pub const OKAY: i32 = 0;

/// The command ran and the library rejected the operation
pub const FAILURE: i32 = 1;

/// The invocation itself was invalid (missing or malformed input, bad config)
pub const INVALID: i32 = -1;
