//! Exit code constants for the vsort CLI.
//!
//! - 0: Success
//! - 1: User error (bad options, invalid pattern/level, comparison error)
//! - 2: I/O failure (unreadable input, undecodable JSON, write failure)
//! - 3: Strict-mode failure (an invalid version was encountered)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad options, invalid pattern or level, or a comparison
/// error surfaced directly.
pub const USER_ERROR: i32 = 1;

/// I/O failure: an input source could not be read or decoded, or output
/// could not be written.
pub const IO_FAILURE: i32 = 2;

/// Strict-mode failure: an invalid version was encountered with --strict.
pub const STRICT_FAILURE: i32 = 3;
