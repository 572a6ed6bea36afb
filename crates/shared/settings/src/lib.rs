//! Settings loader for the learning platform backend.
//!
//! Resolves API keys, region, deployment environment and feature flags from
//! the process environment (optionally layered over a `.env` file) into an
//! immutable [`Settings`] record. Build it once at startup and pass it by
//! reference to whatever needs it.
//!
//! ```no_run
//! use settings::Settings;
//!
//! let settings = Settings::load().expect("invalid configuration");
//! if settings.is_production() {
//!     // production-only wiring
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod source;

pub use config::{AppEnv, LlmProvider, Settings};
pub use error::{ConfigError, ConfigResult};
pub use source::EnvSource;
