//! # Queue Provisioner Core
//!
//! Declarative provisioning module for a message queue and its dead-letter
//! queue. The module maps a validated configuration record to resource
//! declarations consumed by an external provisioning engine, and projects the
//! identifiers that engine reports back into read-only module outputs.
//!
//! This crate contains no provider client: it never calls a queue API, holds
//! no state, and performs no retries. Evaluation is a pure function from
//! configuration to declarations; all resource mutation happens in the
//! external engine.
//!
//! ## Architecture
//!
//! - [`config`] - Module configuration record, defaults, and validation
//! - [`declaration`] - Typed resource declarations and fixed queue attributes
//! - [`plan`] - Evaluation of a configuration into an ordered resource plan
//! - [`outputs`] - Projection of engine apply reports into module outputs
//!
//! ## Usage
//!
//! ```rust
//! use queue_provisioner_core::{evaluate, ModuleConfig};
//!
//! # fn example() -> Result<(), queue_provisioner_core::ProvisionerError> {
//! let config = ModuleConfig::new("orders".parse()?, "orders-dlq".parse()?);
//! let plan = evaluate(&config)?;
//!
//! // Creation order: dead-letter queue, primary queue, redrive policy.
//! assert_eq!(plan.in_creation_order().len(), 3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard result type for provisioner operations
pub type ProvisionerResult<T> = Result<T, ProvisionerError>;

// ============================================================================
// Domain Identifier Types
// ============================================================================

/// Validated queue name following provider naming conventions
///
/// AWS SQS queue names are 1-80 characters of ASCII alphanumerics, hyphens,
/// and underscores. Names must be unique within the target account/region;
/// uniqueness against live state is the provisioning engine's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueueName(String);

impl QueueName {
    /// Maximum queue name length accepted by the provider
    pub const MAX_LENGTH: usize = 80;

    /// Create new queue name with validation
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_field(name, "queue_name")
    }

    /// Create new queue name, reporting failures against a caller-supplied
    /// field name
    ///
    /// The configuration record holds two queue names; validation errors must
    /// name the offending field (`queue_name` or `dlq_name`).
    pub fn with_field(name: impl Into<String>, field: &str) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max_length: Self::MAX_LENGTH,
            });
        }

        // Provider character set: ASCII alphanumeric, hyphens, underscores
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidCharacters {
                field: field.to_string(),
                invalid_chars: "non-alphanumeric except hyphens and underscores".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueueName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Stable identifier of a declared resource within a plan
///
/// Logical ids name the dependency edges between declarations and key the
/// apply report the external engine hands back after resource creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogicalId {
    /// Primary queue
    Queue,
    /// Dead-letter queue
    DeadLetterQueue,
    /// Redrive policy linking the primary queue to the dead-letter queue
    RedrivePolicy,
}

impl LogicalId {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::DeadLetterQueue => "dead_letter_queue",
            Self::RedrivePolicy => "redrive_policy",
        }
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogicalId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queue" => Ok(Self::Queue),
            "dead_letter_queue" => Ok(Self::DeadLetterQueue),
            "redrive_policy" => Ok(Self::RedrivePolicy),
            _ => Err(ParseError::InvalidFormat {
                expected: "queue, dead_letter_queue, or redrive_policy".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for validation, configuration, and output projection
pub mod error;

/// Module configuration record, defaults, and loading
pub mod config;

/// Typed resource declarations and fixed queue attributes
pub mod declaration;

/// Evaluation of a configuration into an ordered resource plan
pub mod plan;

/// Projection of engine apply reports into module outputs
pub mod outputs;

// Re-export key types for convenience
pub use config::ModuleConfig;
pub use declaration::{
    DeadLetterQueueDeclaration, Declaration, DeclaredResource, PrimaryQueueDeclaration,
    RedrivePolicyDeclaration,
};
pub use error::{ConfigurationError, OutputsError, ParseError, ProvisionerError, ValidationError};
pub use outputs::{ApplyReport, CreatedResource, ModuleOutputs};
pub use plan::{evaluate, ResourcePlan};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
