//! # Resource Declarations
//!
//! Typed descriptors for the resources this module declares: the primary
//! queue, its dead-letter queue, and the redrive policy linking them. The
//! external provisioning engine reconciles these against live infrastructure
//! on each apply; the module only states attributes and dependency edges.

use crate::{LogicalId, QueueName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Fixed Queue Attributes
// ============================================================================

/// Seconds in one day; retention is configured in whole days and declared in
/// seconds, converted by exact integer multiplication
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Delivery delay for the primary queue, fixed at zero
pub const QUEUE_DELAY_SECONDS: u32 = 0;

/// Maximum message size for the primary queue, fixed at the provider
/// ceiling of 256 KiB
pub const QUEUE_MAX_MESSAGE_SIZE_BYTES: u32 = 262_144;

/// Convert a retention period in whole days to seconds
pub fn retention_seconds(days: u32) -> u64 {
    u64::from(days) * SECONDS_PER_DAY
}

// ============================================================================
// Resource Descriptors
// ============================================================================

/// Declared primary queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryQueueDeclaration {
    pub name: QueueName,
    pub message_retention_seconds: u64,
    pub visibility_timeout_seconds: u32,
    pub delay_seconds: u32,
    pub max_message_size_bytes: u32,
    pub tags: BTreeMap<String, String>,
}

impl PrimaryQueueDeclaration {
    /// Create primary queue declaration with the fixed delay and message-size
    /// attributes
    pub fn new(
        name: QueueName,
        message_retention_seconds: u64,
        visibility_timeout_seconds: u32,
        tags: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name,
            message_retention_seconds,
            visibility_timeout_seconds,
            delay_seconds: QUEUE_DELAY_SECONDS,
            max_message_size_bytes: QUEUE_MAX_MESSAGE_SIZE_BYTES,
            tags,
        }
    }
}

/// Declared dead-letter queue
///
/// Carries no visibility-timeout field: the provider default applies to the
/// dead-letter queue and the declaration cannot express an override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadLetterQueueDeclaration {
    pub name: QueueName,
    pub message_retention_seconds: u64,
    pub tags: BTreeMap<String, String>,
}

impl DeadLetterQueueDeclaration {
    /// Create dead-letter queue declaration
    pub fn new(
        name: QueueName,
        message_retention_seconds: u64,
        tags: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name,
            message_retention_seconds,
            tags,
        }
    }
}

/// Declared redrive policy binding the primary queue to its dead-letter queue
///
/// The dead-letter queue is referenced by name and logical id; the provider
/// identifier (ARN) of the target exists only after the engine creates the
/// resource, so resolution is the engine's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedrivePolicyDeclaration {
    /// Queue the policy attaches to
    pub queue: QueueName,
    /// Dead-letter target queue
    pub dead_letter_queue: QueueName,
    /// Delivery attempts before a message is routed to the target
    pub max_receive_count: u32,
}

impl RedrivePolicyDeclaration {
    /// Link a primary queue declaration to a dead-letter queue declaration
    ///
    /// Taking both declarations keeps a policy over undeclared queues
    /// unrepresentable; the dependency edges follow from construction.
    pub fn link(
        queue: &PrimaryQueueDeclaration,
        dead_letter_queue: &DeadLetterQueueDeclaration,
        max_receive_count: u32,
    ) -> Self {
        Self {
            queue: queue.name.clone(),
            dead_letter_queue: dead_letter_queue.name.clone(),
            max_receive_count,
        }
    }
}

// ============================================================================
// Engine Boundary
// ============================================================================

/// Resource attributes carried by a declaration, tagged by kind for the
/// engine boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclaredResource {
    Queue(PrimaryQueueDeclaration),
    DeadLetterQueue(DeadLetterQueueDeclaration),
    RedrivePolicy(RedrivePolicyDeclaration),
}

impl DeclaredResource {
    /// Logical id of this resource within the plan
    pub fn logical_id(&self) -> LogicalId {
        match self {
            Self::Queue(_) => LogicalId::Queue,
            Self::DeadLetterQueue(_) => LogicalId::DeadLetterQueue,
            Self::RedrivePolicy(_) => LogicalId::RedrivePolicy,
        }
    }
}

/// One declaration as handed to the external engine: logical id, dependency
/// edges, and resource attributes
///
/// The two queue declarations carry no edge between each other and may be
/// created in parallel; the redrive policy depends on both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: LogicalId,
    pub depends_on: Vec<LogicalId>,
    #[serde(flatten)]
    pub resource: DeclaredResource,
}

impl Declaration {
    /// Wrap a resource with its dependency edges
    pub fn new(resource: DeclaredResource, depends_on: Vec<LogicalId>) -> Self {
        Self {
            id: resource.logical_id(),
            depends_on,
            resource,
        }
    }
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
