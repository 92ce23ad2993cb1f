//! Integration tests for apply-report projection.

mod common;

use common::complete_report;
use queue_provisioner_core::{
    ApplyReport, LogicalId, ModuleOutputs, OutputsError,
};

/// Outputs are a field-for-field passthrough of the engine report
#[test]
fn test_complete_report_projects_all_outputs() {
    let report = complete_report("orders", "orders-dlq");
    let outputs = ModuleOutputs::project(&report).unwrap();

    assert_eq!(outputs.queue_name, "orders");
    assert_eq!(outputs.dlq_name, "orders-dlq");
    assert_eq!(
        outputs.queue_url,
        "https://sqs.eu-west-1.amazonaws.com/123456789012/orders"
    );
    assert_eq!(
        outputs.dlq_arn,
        "arn:aws:sqs:eu-west-1:123456789012:orders-dlq"
    );
}

/// A failed apply leaves the report incomplete; projection must fail rather
/// than expose undefined outputs
#[test]
fn test_partial_apply_fails_projection() {
    let report: ApplyReport = serde_json::from_str(
        r#"{
            "resources": {
                "dead_letter_queue": {
                    "url": "https://sqs.eu-west-1.amazonaws.com/123456789012/orders-dlq",
                    "arn": "arn:aws:sqs:eu-west-1:123456789012:orders-dlq",
                    "name": "orders-dlq"
                }
            }
        }"#,
    )
    .unwrap();

    let err = ModuleOutputs::project(&report).unwrap_err();
    assert_eq!(
        err,
        OutputsError::ResourceNotCreated {
            logical_id: LogicalId::Queue
        }
    );
}

/// An empty report (apply never ran) projects nothing
#[test]
fn test_empty_report_fails_projection() {
    let err = ModuleOutputs::project(&ApplyReport::new()).unwrap_err();
    assert!(matches!(err, OutputsError::ResourceNotCreated { .. }));
}
