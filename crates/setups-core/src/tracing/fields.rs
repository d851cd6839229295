//! Structured field names shared by the generator's spans and events.

/// Project name being generated.
pub const PROJECT: &str = "project";

/// Accepted license identifier.
pub const LICENSE: &str = "license";

/// License prompts answered before an allow-listed value was entered.
pub const LICENSE_ATTEMPTS: &str = "license_attempts";

/// Filesystem path of a directory or script.
pub const PATH: &str = "path";

/// Size of the rendered script in bytes.
pub const BYTES: &str = "bytes";
