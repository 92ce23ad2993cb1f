//! # Output Projection
//!
//! After the external engine applies a plan it reports provider-assigned
//! identifiers per logical id. This module maps that report into the
//! read-only `ModuleOutputs` projection by field-for-field passthrough.
//! A resource the engine never created has no outputs; projection fails
//! rather than exposing an undefined value.

use crate::error::OutputsError;
use crate::LogicalId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider-assigned identifiers of one created resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResource {
    /// Endpoint address of the resource
    pub url: String,
    /// Opaque provider resource identifier
    pub arn: String,
    /// Resource name as created
    pub name: String,
}

/// Apply report handed back by the external engine, keyed by logical id
///
/// Entries are absent for resources the engine did not create (for example
/// when an apply failed partway); the module has no further visibility into
/// provider failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    #[serde(default)]
    resources: BTreeMap<LogicalId, CreatedResource>,
}

impl ApplyReport {
    /// Create empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a created resource under its logical id
    pub fn with_resource(mut self, id: LogicalId, resource: CreatedResource) -> Self {
        self.resources.insert(id, resource);
        self
    }

    /// Get the created resource for a logical id, if any
    pub fn get(&self, id: LogicalId) -> Option<&CreatedResource> {
        self.resources.get(&id)
    }

    /// Check whether the report covers a logical id
    pub fn contains(&self, id: LogicalId) -> bool {
        self.resources.contains_key(&id)
    }
}

/// Read-only projection of created-queue identifiers
///
/// Populated only after the external engine completes resource creation;
/// every field is a field-for-field passthrough of the engine's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOutputs {
    pub queue_url: String,
    pub queue_arn: String,
    pub queue_name: String,
    pub dlq_url: String,
    pub dlq_arn: String,
    pub dlq_name: String,
}

impl ModuleOutputs {
    /// Project an apply report into module outputs
    ///
    /// # Errors
    ///
    /// Returns `OutputsError::ResourceNotCreated` naming the missing logical
    /// id when the report lacks either queue; callers can therefore never
    /// dereference an undefined output.
    pub fn project(report: &ApplyReport) -> Result<Self, OutputsError> {
        let queue = report
            .get(LogicalId::Queue)
            .ok_or(OutputsError::ResourceNotCreated {
                logical_id: LogicalId::Queue,
            })?;

        let dlq = report
            .get(LogicalId::DeadLetterQueue)
            .ok_or(OutputsError::ResourceNotCreated {
                logical_id: LogicalId::DeadLetterQueue,
            })?;

        Ok(Self {
            queue_url: queue.url.clone(),
            queue_arn: queue.arn.clone(),
            queue_name: queue.name.clone(),
            dlq_url: dlq.url.clone(),
            dlq_arn: dlq.arn.clone(),
            dlq_name: dlq.name.clone(),
        })
    }
}

#[cfg(test)]
#[path = "outputs_tests.rs"]
mod tests;
