//! Tests for domain identifier types.

use super::*;

// ============================================================================
// QueueName Tests
// ============================================================================

#[test]
fn test_queue_name_accepts_valid_names() {
    assert!(QueueName::new("orders").is_ok());
    assert!(QueueName::new("orders-dlq").is_ok());
    assert!(QueueName::new("orders_events_2024").is_ok());
    assert!(QueueName::new("Q").is_ok());
}

#[test]
fn test_queue_name_rejects_empty() {
    let result = QueueName::new("");
    assert!(matches!(
        result,
        Err(ValidationError::Required { field }) if field == "queue_name"
    ));
}

#[test]
fn test_queue_name_rejects_too_long() {
    let name = "q".repeat(QueueName::MAX_LENGTH + 1);
    let result = QueueName::new(name);
    assert!(matches!(
        result,
        Err(ValidationError::TooLong { max_length: 80, .. })
    ));
}

#[test]
fn test_queue_name_accepts_max_length() {
    let name = "q".repeat(QueueName::MAX_LENGTH);
    assert!(QueueName::new(name).is_ok());
}

#[test]
fn test_queue_name_rejects_invalid_characters() {
    for invalid in ["orders queue", "orders.fifo", "orders/dlq", "örders"] {
        let result = QueueName::new(invalid);
        assert!(
            matches!(result, Err(ValidationError::InvalidCharacters { .. })),
            "expected rejection for '{}'",
            invalid
        );
    }
}

#[test]
fn test_queue_name_with_field_reports_caller_field() {
    let result = QueueName::with_field("", "dlq_name");
    assert!(matches!(
        result,
        Err(ValidationError::Required { field }) if field == "dlq_name"
    ));
}

#[test]
fn test_queue_name_from_str_and_display() {
    let name: QueueName = "orders".parse().unwrap();
    assert_eq!(name.as_str(), "orders");
    assert_eq!(name.to_string(), "orders");
}

// ============================================================================
// LogicalId Tests
// ============================================================================

#[test]
fn test_logical_id_string_forms() {
    assert_eq!(LogicalId::Queue.as_str(), "queue");
    assert_eq!(LogicalId::DeadLetterQueue.as_str(), "dead_letter_queue");
    assert_eq!(LogicalId::RedrivePolicy.as_str(), "redrive_policy");
}

#[test]
fn test_logical_id_parses_from_str() {
    assert_eq!(
        "dead_letter_queue".parse::<LogicalId>().unwrap(),
        LogicalId::DeadLetterQueue
    );
    assert!("not_a_resource".parse::<LogicalId>().is_err());
}

#[test]
fn test_logical_id_serializes_as_snake_case() {
    let json = serde_json::to_string(&LogicalId::DeadLetterQueue).unwrap();
    assert_eq!(json, "\"dead_letter_queue\"");
}
