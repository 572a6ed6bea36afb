//! Configuration keys and defaults
//!
//! Centralized location for environment variable names and their fallback values.

// =============================================================================
// Required Keys
// =============================================================================

/// Groq API key (required)
pub const KEY_GROQ_API_KEY: &str = "GROQ_API_KEY";

/// HuggingFace API key (required)
pub const KEY_HUGGINGFACE_API_KEY: &str = "HUGGINGFACE_API_KEY";

// =============================================================================
// Optional Keys
// =============================================================================

pub const KEY_AWS_REGION: &str = "AWS_REGION";
pub const KEY_APP_ENV: &str = "APP_ENV";
pub const KEY_DEBUG: &str = "DEBUG";
pub const KEY_LLM_PROVIDER: &str = "LLM_PROVIDER";
pub const KEY_DATABASE_URL: &str = "DATABASE_URL";
pub const KEY_REDIS_URL: &str = "REDIS_URL";
pub const KEY_S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";

// =============================================================================
// Defaults
// =============================================================================

/// Default AWS region
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Default deployment environment name
pub const DEFAULT_APP_ENV: &str = "development";

/// Default LLM backend name
pub const DEFAULT_LLM_PROVIDER: &str = "groq";

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Conventional name of the local environment file
pub const ENV_FILE_NAME: &str = ".env";

// =============================================================================
// Boolean Parsing
// =============================================================================

/// Values accepted as `true` (compared case-insensitively)
pub const TRUTHY_VALUES: &[&str] = &["true", "1", "yes", "on"];

/// Values accepted as `false` (compared case-insensitively)
pub const FALSY_VALUES: &[&str] = &["false", "0", "no", "off"];

/// Placeholder printed in place of secret values
pub const REDACTED: &str = "[REDACTED]";
