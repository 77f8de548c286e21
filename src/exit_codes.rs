//! Exit code constants for the dockgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing template, unreadable project)
//! - 2: Validation failure (`validate --strict` found missing COPY sources)
//! - 3: Generator failure (model runner could not be started)
//! - 4: Write failure (output file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing template, or a project that cannot be scanned.
pub const USER_ERROR: i32 = 1;

/// Validation failure: COPY sources missing in strict mode.
pub const VALIDATION_FAILURE: i32 = 2;

/// Generator failure: the runner process could not be spawned or fed.
pub const GENERATOR_FAILURE: i32 = 3;

/// Write failure: the Dockerfile could not be persisted.
pub const WRITE_FAILURE: i32 = 4;
