//! Tests for error types.

use super::*;

#[test]
fn test_validation_error_names_offending_field() {
    let err = ValidationError::OutOfRange {
        field: "max_receive_count".to_string(),
        message: "must be 1-1000, got 0".to_string(),
    };
    assert_eq!(err.field(), "max_receive_count");
    assert!(err.to_string().contains("max_receive_count"));
}

#[test]
fn test_duplicate_name_error_display() {
    let err = ValidationError::DuplicateName {
        field: "dlq_name".to_string(),
        name: "orders".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("dlq_name"));
    assert!(message.contains("orders"));
}

#[test]
fn test_outputs_error_names_logical_id() {
    let err = OutputsError::ResourceNotCreated {
        logical_id: LogicalId::DeadLetterQueue,
    };
    assert!(err.to_string().contains("dead_letter_queue"));
}

#[test]
fn test_no_provisioner_error_is_transient() {
    let errors: Vec<ProvisionerError> = vec![
        ValidationError::Required {
            field: "queue_name".to_string(),
        }
        .into(),
        ConfigurationError::SourceUnavailable("unset".to_string()).into(),
        OutputsError::ResourceNotCreated {
            logical_id: LogicalId::Queue,
        }
        .into(),
        ParseError::InvalidFormat {
            expected: "queue".to_string(),
            actual: "nope".to_string(),
        }
        .into(),
    ];

    for err in errors {
        assert!(!err.is_transient(), "{err} must not be transient");
    }
}

#[test]
fn test_configuration_error_wraps_validation() {
    let inner = ValidationError::Required {
        field: "queue_name".to_string(),
    };
    let err: ConfigurationError = inner.into();
    assert!(matches!(err, ConfigurationError::Validation(_)));
}
