//! Tests for output projection.

use super::*;

fn queue_resource() -> CreatedResource {
    CreatedResource {
        url: "https://sqs.eu-west-1.amazonaws.com/123456789012/orders".to_string(),
        arn: "arn:aws:sqs:eu-west-1:123456789012:orders".to_string(),
        name: "orders".to_string(),
    }
}

fn dlq_resource() -> CreatedResource {
    CreatedResource {
        url: "https://sqs.eu-west-1.amazonaws.com/123456789012/orders-dlq".to_string(),
        arn: "arn:aws:sqs:eu-west-1:123456789012:orders-dlq".to_string(),
        name: "orders-dlq".to_string(),
    }
}

#[test]
fn test_projection_is_field_for_field_passthrough() {
    let report = ApplyReport::new()
        .with_resource(LogicalId::Queue, queue_resource())
        .with_resource(LogicalId::DeadLetterQueue, dlq_resource());

    let outputs = ModuleOutputs::project(&report).unwrap();

    assert_eq!(
        outputs.queue_url,
        "https://sqs.eu-west-1.amazonaws.com/123456789012/orders"
    );
    assert_eq!(outputs.queue_arn, "arn:aws:sqs:eu-west-1:123456789012:orders");
    assert_eq!(outputs.queue_name, "orders");
    assert_eq!(
        outputs.dlq_arn,
        "arn:aws:sqs:eu-west-1:123456789012:orders-dlq"
    );
    assert_eq!(outputs.dlq_name, "orders-dlq");
}

#[test]
fn test_projection_fails_when_queue_missing() {
    let report = ApplyReport::new().with_resource(LogicalId::DeadLetterQueue, dlq_resource());

    let err = ModuleOutputs::project(&report).unwrap_err();
    assert_eq!(
        err,
        OutputsError::ResourceNotCreated {
            logical_id: LogicalId::Queue
        }
    );
}

#[test]
fn test_projection_fails_when_dead_letter_queue_missing() {
    let report = ApplyReport::new().with_resource(LogicalId::Queue, queue_resource());

    let err = ModuleOutputs::project(&report).unwrap_err();
    assert_eq!(
        err,
        OutputsError::ResourceNotCreated {
            logical_id: LogicalId::DeadLetterQueue
        }
    );
}

#[test]
fn test_projection_ignores_redrive_policy_entry() {
    let report = ApplyReport::new()
        .with_resource(LogicalId::Queue, queue_resource())
        .with_resource(LogicalId::DeadLetterQueue, dlq_resource())
        .with_resource(
            LogicalId::RedrivePolicy,
            CreatedResource {
                url: String::new(),
                arn: String::new(),
                name: String::new(),
            },
        );

    assert!(ModuleOutputs::project(&report).is_ok());
}

#[test]
fn test_apply_report_parses_engine_json() {
    let report: ApplyReport = serde_json::from_str(
        r#"{
            "resources": {
                "queue": {
                    "url": "https://sqs.eu-west-1.amazonaws.com/123456789012/orders",
                    "arn": "arn:aws:sqs:eu-west-1:123456789012:orders",
                    "name": "orders"
                }
            }
        }"#,
    )
    .unwrap();

    assert!(report.contains(LogicalId::Queue));
    assert!(!report.contains(LogicalId::DeadLetterQueue));
}
