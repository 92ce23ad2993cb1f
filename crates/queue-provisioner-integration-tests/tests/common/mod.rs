//! Shared helpers for integration tests.

use queue_provisioner_core::{ApplyReport, CreatedResource, LogicalId};
use std::path::PathBuf;

/// Write a configuration file into a temporary directory
#[allow(dead_code)]
pub fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Apply report covering both queues, as the engine would produce after a
/// successful apply
#[allow(dead_code)]
pub fn complete_report(queue_name: &str, dlq_name: &str) -> ApplyReport {
    ApplyReport::new()
        .with_resource(LogicalId::Queue, created(queue_name))
        .with_resource(LogicalId::DeadLetterQueue, created(dlq_name))
}

#[allow(dead_code)]
fn created(name: &str) -> CreatedResource {
    CreatedResource {
        url: format!("https://sqs.eu-west-1.amazonaws.com/123456789012/{}", name),
        arn: format!("arn:aws:sqs:eu-west-1:123456789012:{}", name),
        name: name.to_string(),
    }
}
