use super::*;

#[test]
fn test_insert_shifts_following_positions() {
    let op = EditOp::insert(1, 4, "abc".to_string());

    assert!(op.is_insert());
    assert_eq!(op.char_delta(), 3);
    assert_eq!(op.translate(2, Tracking::Positive), 2);
    assert_eq!(op.translate(5, Tracking::Negative), 8);
}

#[test]
fn test_insert_at_position_respects_tracking() {
    let op = EditOp::insert(1, 4, "xy".to_string());

    assert_eq!(op.translate(4, Tracking::Positive), 6);
    assert_eq!(op.translate(4, Tracking::Negative), 4);
}

#[test]
fn test_insert_counts_chars_not_bytes() {
    let op = EditOp::insert(1, 0, "变量".to_string());
    assert_eq!(op.char_delta(), 2);
    assert_eq!(op.translate(1, Tracking::Negative), 3);
}

#[test]
fn test_delete_collapses_inner_positions() {
    let op = EditOp::delete(2, 3, 7, "wxyz".to_string());

    assert!(!op.is_insert());
    assert_eq!(op.translate(1, Tracking::Positive), 1);
    assert_eq!(op.translate(3, Tracking::Positive), 3);
    assert_eq!(op.translate(5, Tracking::Negative), 3);
    assert_eq!(op.translate(7, Tracking::Negative), 3);
    assert_eq!(op.translate(10, Tracking::Positive), 6);
}

#[test]
fn test_edit_op_serializes() {
    let op = EditOp::insert(3, 0, "hi".to_string());
    let json = serde_json::to_string(&op).unwrap();
    let back: EditOp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, op);
}
