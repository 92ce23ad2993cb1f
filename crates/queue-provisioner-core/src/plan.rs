//! # Plan Evaluation
//!
//! Maps a validated configuration record to the resource plan consumed by
//! the external provisioning engine. Evaluation is a pure, synchronous,
//! single-pass function: no I/O, no locks, no retained state. If validation
//! fails, no declaration is produced.

use crate::config::ModuleConfig;
use crate::declaration::{
    retention_seconds, DeadLetterQueueDeclaration, Declaration, DeclaredResource,
    PrimaryQueueDeclaration, RedrivePolicyDeclaration,
};
use crate::error::ValidationError;
use crate::LogicalId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete resource plan for one module evaluation
///
/// Holds the three declarations; `in_creation_order` states the order and
/// dependency edges the engine must respect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub dead_letter_queue: DeadLetterQueueDeclaration,
    pub queue: PrimaryQueueDeclaration,
    pub redrive_policy: RedrivePolicyDeclaration,
}

impl ResourcePlan {
    /// Declarations in creation order: dead-letter queue, primary queue,
    /// redrive policy
    ///
    /// The queues carry no edge between each other and may be created in
    /// parallel. The redrive policy depends on both and is always last.
    pub fn in_creation_order(&self) -> Vec<Declaration> {
        vec![
            Declaration::new(
                DeclaredResource::DeadLetterQueue(self.dead_letter_queue.clone()),
                Vec::new(),
            ),
            Declaration::new(DeclaredResource::Queue(self.queue.clone()), Vec::new()),
            Declaration::new(
                DeclaredResource::RedrivePolicy(self.redrive_policy.clone()),
                vec![LogicalId::Queue, LogicalId::DeadLetterQueue],
            ),
        ]
    }
}

/// Evaluate a configuration record into a resource plan
///
/// Validation runs first; on failure the offending field is named and no
/// partial plan exists. Retention is converted from whole days to seconds by
/// exact integer multiplication.
///
/// # Errors
///
/// Returns `ValidationError` if the record violates a data-model invariant
/// (duplicate queue names, out-of-range numeric field, malformed tags).
pub fn evaluate(config: &ModuleConfig) -> Result<ResourcePlan, ValidationError> {
    config.validate()?;

    let retention = retention_seconds(config.message_retention_days);

    let dead_letter_queue = DeadLetterQueueDeclaration::new(
        config.dlq_name.clone(),
        retention,
        config.tags.clone(),
    );

    let queue = PrimaryQueueDeclaration::new(
        config.queue_name.clone(),
        retention,
        config.visibility_timeout_seconds,
        config.tags.clone(),
    );

    let redrive_policy =
        RedrivePolicyDeclaration::link(&queue, &dead_letter_queue, config.max_receive_count);

    debug!(
        queue = %queue.name,
        dead_letter_queue = %dead_letter_queue.name,
        retention_seconds = retention,
        max_receive_count = redrive_policy.max_receive_count,
        "Evaluated queue provisioning plan"
    );

    Ok(ResourcePlan {
        dead_letter_queue,
        queue,
        redrive_policy,
    })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
