//! Application settings resolved from environment variables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_AWS_REGION, DEFAULT_LLM_PROVIDER, FALSY_VALUES, KEY_APP_ENV,
    KEY_AWS_REGION, KEY_DATABASE_URL, KEY_DEBUG, KEY_GROQ_API_KEY, KEY_HUGGINGFACE_API_KEY,
    KEY_LLM_PROVIDER, KEY_REDIS_URL, KEY_S3_BUCKET_NAME, MAX_FILE_SIZE_BYTES, REDACTED,
    TRUTHY_VALUES,
};
use crate::error::{ConfigError, ConfigResult};
use crate::source::EnvSource;

// =============================================================================
// Deployment Environment
// =============================================================================

/// Deployment environment enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Staging,
    Production,
}

impl AppEnv {
    /// All recognized environments
    pub const ALL: [AppEnv; 3] = [AppEnv::Development, AppEnv::Staging, AppEnv::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Staging => "staging",
            AppEnv::Production => "production",
        }
    }
}

/// Matching ignores surrounding whitespace and case.
impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        AppEnv::ALL
            .into_iter()
            .find(|env| env.as_str() == normalized)
            .ok_or_else(|| {
                ConfigError::invalid(KEY_APP_ENV, s, "one of development, staging, production")
            })
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LLM Provider
// =============================================================================

/// Backend used for text generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Groq,
    Bedrock,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Groq => "groq",
            LlmProvider::Bedrock => "bedrock",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(LlmProvider::Groq),
            "bedrock" => Ok(LlmProvider::Bedrock),
            _ => Err(ConfigError::invalid(KEY_LLM_PROVIDER, s, "one of groq, bedrock")),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Resolved application settings.
///
/// Built once at startup via [`Settings::load`] and shared by reference;
/// there are no setters.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(skip_serializing)]
    groq_api_key: String,
    #[serde(skip_serializing)]
    huggingface_api_key: String,
    aws_region: String,
    app_env: AppEnv,
    debug: bool,
    llm_provider: LlmProvider,
    #[serde(skip_serializing)]
    database_url: Option<String>,
    #[serde(skip_serializing)]
    redis_url: Option<String>,
    s3_bucket_name: Option<String>,
    max_file_size: usize,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("groq_api_key", &REDACTED)
            .field("huggingface_api_key", &REDACTED)
            .field("aws_region", &self.aws_region)
            .field("app_env", &self.app_env)
            .field("debug", &self.debug)
            .field("llm_provider", &self.llm_provider)
            .field("database_url", &self.database_url.as_ref().map(|_| REDACTED))
            .field("redis_url", &self.redis_url.as_ref().map(|_| REDACTED))
            .field("s3_bucket_name", &self.s3_bucket_name)
            .field("max_file_size", &self.max_file_size)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment layered over `.env`.
    ///
    /// # Errors
    /// Fails if a required key is missing, an optional key is invalid, or
    /// the `.env` file exists but is malformed.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&EnvSource::discover()?)
    }

    /// Resolve settings from an explicit snapshot.
    pub fn load_from(source: &EnvSource) -> ConfigResult<Self> {
        let groq_api_key = required(source, KEY_GROQ_API_KEY)?;
        let huggingface_api_key = required(source, KEY_HUGGINGFACE_API_KEY)?;

        let aws_region = source
            .non_empty(KEY_AWS_REGION)
            .unwrap_or(DEFAULT_AWS_REGION)
            .to_string();
        let app_env: AppEnv = source
            .non_empty(KEY_APP_ENV)
            .unwrap_or(DEFAULT_APP_ENV)
            .parse()?;
        let debug = match source.non_empty(KEY_DEBUG) {
            Some(raw) => parse_bool(KEY_DEBUG, raw)?,
            None => false,
        };
        let llm_provider: LlmProvider = source
            .non_empty(KEY_LLM_PROVIDER)
            .unwrap_or(DEFAULT_LLM_PROVIDER)
            .parse()?;

        let settings = Self {
            groq_api_key,
            huggingface_api_key,
            aws_region,
            app_env,
            debug,
            llm_provider,
            database_url: optional(source, KEY_DATABASE_URL),
            redis_url: optional(source, KEY_REDIS_URL),
            s3_bucket_name: optional(source, KEY_S3_BUCKET_NAME),
            max_file_size: MAX_FILE_SIZE_BYTES,
        };

        if settings.is_production() && settings.debug {
            tracing::warn!("DEBUG is enabled in production");
        }
        tracing::debug!(
            app_env = %settings.app_env,
            aws_region = %settings.aws_region,
            llm_provider = %settings.llm_provider,
            debug = settings.debug,
            "Settings loaded"
        );

        Ok(settings)
    }

    pub fn groq_api_key(&self) -> &str {
        &self.groq_api_key
    }

    pub fn huggingface_api_key(&self) -> &str {
        &self.huggingface_api_key
    }

    pub fn aws_region(&self) -> &str {
        &self.aws_region
    }

    pub fn app_env(&self) -> AppEnv {
        self.app_env
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn llm_provider(&self) -> LlmProvider {
        self.llm_provider
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub fn s3_bucket_name(&self) -> Option<&str> {
        self.s3_bucket_name.as_deref()
    }

    /// Upload size ceiling in bytes.
    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }

    pub fn is_development(&self) -> bool {
        self.app_env == AppEnv::Development
    }

    pub fn is_staging(&self) -> bool {
        self.app_env == AppEnv::Staging
    }
}

fn required(source: &EnvSource, key: &str) -> ConfigResult<String> {
    source
        .non_empty(key)
        .map(str::to_string)
        .ok_or_else(|| ConfigError::missing(key))
}

fn optional(source: &EnvSource, key: &str) -> Option<String> {
    source.non_empty(key).map(str::to_string)
}

/// Parse a boolean flag, case-insensitively.
pub fn parse_bool(key: &str, raw: &str) -> ConfigResult<bool> {
    let value = raw.trim().to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&value.as_str()) {
        Ok(true)
    } else if FALSY_VALUES.contains(&value.as_str()) {
        Ok(false)
    } else {
        Err(ConfigError::invalid(key, raw, "a boolean (true/false, 1/0, yes/no, on/off)"))
    }
}
