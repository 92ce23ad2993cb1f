//! # Module Configuration
//!
//! Defines the input record for queue provisioning: queue names, visibility
//! timeout, retry threshold, retention period, and tags. Defaults are applied
//! at construction and deserialization time; validation runs before any
//! declaration is derived.
//!
//! Configuration can be constructed programmatically, loaded from a YAML,
//! JSON, or TOML file, or read from the `QUEUE_PROVISIONER_CONFIG`
//! environment variable (JSON).

use crate::error::{ConfigurationError, ValidationError};
use crate::QueueName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ============================================================================
// Provider Limits
// ============================================================================

// Validation ceilings are the provider-documented AWS SQS bounds; the module
// invents no bounds of its own.

/// Maximum visibility timeout accepted by the provider (12 hours)
pub const MAX_VISIBILITY_TIMEOUT_SECONDS: u32 = 43_200;

/// Minimum message retention accepted by the provider, in whole days
pub const MIN_MESSAGE_RETENTION_DAYS: u32 = 1;

/// Maximum message retention accepted by the provider, in whole days
pub const MAX_MESSAGE_RETENTION_DAYS: u32 = 14;

/// Minimum delivery-attempt threshold for a redrive policy
pub const MIN_MAX_RECEIVE_COUNT: u32 = 1;

/// Maximum delivery-attempt threshold for a redrive policy
pub const MAX_MAX_RECEIVE_COUNT: u32 = 1_000;

/// Maximum number of tags per queue
pub const MAX_TAG_COUNT: usize = 50;

/// Maximum tag key length
pub const MAX_TAG_KEY_LENGTH: usize = 128;

/// Maximum tag value length
pub const MAX_TAG_VALUE_LENGTH: usize = 256;

const DEFAULT_VISIBILITY_TIMEOUT_SECONDS: u32 = 600;
const DEFAULT_MAX_RECEIVE_COUNT: u32 = 3;
const DEFAULT_MESSAGE_RETENTION_DAYS: u32 = 14;

fn default_visibility_timeout() -> u32 {
    DEFAULT_VISIBILITY_TIMEOUT_SECONDS
}

fn default_max_receive_count() -> u32 {
    DEFAULT_MAX_RECEIVE_COUNT
}

fn default_message_retention_days() -> u32 {
    DEFAULT_MESSAGE_RETENTION_DAYS
}

// ============================================================================
// Configuration Record
// ============================================================================

/// Input record for one module evaluation
///
/// Omitted optional fields take their defaults before validation runs:
/// visibility timeout 600 seconds, max receive count 3, retention 14 days,
/// empty tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Name of the primary queue (unique within target account/region)
    pub queue_name: QueueName,

    /// Name of the dead-letter queue (unique, distinct from `queue_name`)
    pub dlq_name: QueueName,

    /// Duration a received-but-unacknowledged message stays hidden from
    /// other consumers, in seconds
    #[serde(
        default = "default_visibility_timeout",
        alias = "visibility_timeout"
    )]
    pub visibility_timeout_seconds: u32,

    /// Delivery attempts before a message is routed to the dead-letter queue
    #[serde(default = "default_max_receive_count")]
    pub max_receive_count: u32,

    /// Duration an unconsumed message is kept before automatic deletion,
    /// in whole days
    #[serde(default = "default_message_retention_days")]
    pub message_retention_days: u32,

    /// Tags applied to both queues (insertion order irrelevant)
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl ModuleConfig {
    /// Create new configuration with the stated defaults for every optional
    /// field
    pub fn new(queue_name: QueueName, dlq_name: QueueName) -> Self {
        Self {
            queue_name,
            dlq_name,
            visibility_timeout_seconds: DEFAULT_VISIBILITY_TIMEOUT_SECONDS,
            max_receive_count: DEFAULT_MAX_RECEIVE_COUNT,
            message_retention_days: DEFAULT_MESSAGE_RETENTION_DAYS,
            tags: BTreeMap::new(),
        }
    }

    /// Set visibility timeout in seconds
    pub fn with_visibility_timeout(mut self, seconds: u32) -> Self {
        self.visibility_timeout_seconds = seconds;
        self
    }

    /// Set maximum receive count before dead-letter routing
    pub fn with_max_receive_count(mut self, count: u32) -> Self {
        self.max_receive_count = count;
        self
    }

    /// Set message retention in whole days
    pub fn with_message_retention_days(mut self, days: u32) -> Self {
        self.message_retention_days = days;
        self
    }

    /// Add a tag applied to both queues
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Load configuration from file path
    ///
    /// The format is chosen by extension (`.yaml`/`.yml`, `.json`, `.toml`);
    /// unknown extensions are tried as JSON first, then YAML. The parsed
    /// record is validated before it is returned.
    ///
    /// # Errors
    /// - `ConfigurationError::FileNotFound` - Configuration file missing
    /// - `ConfigurationError::Parse` - Invalid YAML/JSON/TOML syntax
    /// - `ConfigurationError::Validation` - Record violates an invariant
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigurationError> {
        if !path.exists() {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigurationError::Parse {
                message: format!("Failed to read file: {}", e),
            })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: ModuleConfig = match extension.to_lowercase().as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents).map_err(|e| ConfigurationError::Parse {
                    message: format!("Invalid YAML: {}", e),
                })?
            }
            "json" => serde_json::from_str(&contents).map_err(|e| ConfigurationError::Parse {
                message: format!("Invalid JSON: {}", e),
            })?,
            "toml" => toml::from_str(&contents).map_err(|e| ConfigurationError::Parse {
                message: format!("Invalid TOML: {}", e),
            })?,
            _ => {
                // Try JSON first, then YAML
                serde_json::from_str(&contents)
                    .or_else(|_| serde_yaml::from_str(&contents))
                    .map_err(|e| ConfigurationError::Parse {
                        message: format!("Failed to parse as JSON or YAML: {}", e),
                    })?
            }
        };

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Expected format: JSON string in `QUEUE_PROVISIONER_CONFIG`
    pub fn load_from_env() -> Result<Self, ConfigurationError> {
        let config_str = std::env::var("QUEUE_PROVISIONER_CONFIG").map_err(|_| {
            ConfigurationError::SourceUnavailable(
                "QUEUE_PROVISIONER_CONFIG environment variable not set".to_string(),
            )
        })?;

        let config: ModuleConfig =
            serde_json::from_str(&config_str).map_err(|e| ConfigurationError::Parse {
                message: format!("Invalid JSON in QUEUE_PROVISIONER_CONFIG: {}", e),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the record against the data-model invariants
    ///
    /// Names are re-checked here because deserialization can construct the
    /// record without going through `QueueName::new`. Each failure names the
    /// offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        QueueName::with_field(self.queue_name.as_str(), "queue_name")?;
        QueueName::with_field(self.dlq_name.as_str(), "dlq_name")?;

        if self.queue_name == self.dlq_name {
            return Err(ValidationError::DuplicateName {
                field: "dlq_name".to_string(),
                name: self.dlq_name.as_str().to_string(),
            });
        }

        if self.visibility_timeout_seconds > MAX_VISIBILITY_TIMEOUT_SECONDS {
            return Err(ValidationError::OutOfRange {
                field: "visibility_timeout_seconds".to_string(),
                message: format!(
                    "must be at most {} seconds, got {}",
                    MAX_VISIBILITY_TIMEOUT_SECONDS, self.visibility_timeout_seconds
                ),
            });
        }

        if self.max_receive_count < MIN_MAX_RECEIVE_COUNT
            || self.max_receive_count > MAX_MAX_RECEIVE_COUNT
        {
            return Err(ValidationError::OutOfRange {
                field: "max_receive_count".to_string(),
                message: format!(
                    "must be {}-{}, got {}",
                    MIN_MAX_RECEIVE_COUNT, MAX_MAX_RECEIVE_COUNT, self.max_receive_count
                ),
            });
        }

        if self.message_retention_days < MIN_MESSAGE_RETENTION_DAYS
            || self.message_retention_days > MAX_MESSAGE_RETENTION_DAYS
        {
            return Err(ValidationError::OutOfRange {
                field: "message_retention_days".to_string(),
                message: format!(
                    "must be {}-{} days, got {}",
                    MIN_MESSAGE_RETENTION_DAYS,
                    MAX_MESSAGE_RETENTION_DAYS,
                    self.message_retention_days
                ),
            });
        }

        self.validate_tags()?;

        Ok(())
    }

    fn validate_tags(&self) -> Result<(), ValidationError> {
        if self.tags.len() > MAX_TAG_COUNT {
            return Err(ValidationError::OutOfRange {
                field: "tags".to_string(),
                message: format!(
                    "at most {} tags allowed, got {}",
                    MAX_TAG_COUNT,
                    self.tags.len()
                ),
            });
        }

        for (key, value) in &self.tags {
            if key.is_empty() {
                return Err(ValidationError::InvalidFormat {
                    field: "tags".to_string(),
                    message: "tag keys must be non-empty".to_string(),
                });
            }
            if key.len() > MAX_TAG_KEY_LENGTH {
                return Err(ValidationError::TooLong {
                    field: format!("tags.{}", key),
                    max_length: MAX_TAG_KEY_LENGTH,
                });
            }
            if value.len() > MAX_TAG_VALUE_LENGTH {
                return Err(ValidationError::TooLong {
                    field: format!("tags.{}", key),
                    max_length: MAX_TAG_VALUE_LENGTH,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
