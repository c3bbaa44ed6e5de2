// Host-side tests for contact form validation and the notice it produces.

use portfolio_core::*;

#[test]
fn email_shape_check() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email(""));
}

#[test]
fn fields_are_trimmed() {
    let s = ContactSubmission::from_raw("  Ada ", " ada@example.com\n", "Hi", "\tHello ");
    assert_eq!(s.name, "Ada");
    assert_eq!(s.email, "ada@example.com");
    assert_eq!(s.message, "Hello");
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn blank_field_is_reported_before_bad_email() {
    let s = ContactSubmission::from_raw("   ", "not-an-email", "Hi", "Hello");
    assert_eq!(s.validate(), Err(FormError::MissingFields));
    let s = ContactSubmission::from_raw("Ada", "ada@example.com", "Hi", "");
    assert_eq!(s.validate(), Err(FormError::MissingFields));
}

#[test]
fn malformed_email_is_rejected() {
    let s = ContactSubmission::from_raw("Ada", "ada@example", "Hi", "Hello");
    assert_eq!(s.validate(), Err(FormError::InvalidEmail));
}

#[test]
fn error_messages_match_notice_text() {
    assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields");
    assert_eq!(
        FormError::InvalidEmail.to_string(),
        "Please enter a valid email address"
    );
}

#[test]
fn notice_for_each_outcome() {
    let ok = Notice::for_submission(&Ok(()));
    assert_eq!(ok.kind, NoticeKind::Success);
    assert_eq!(ok.message, SUCCESS_MESSAGE);
    assert_eq!(ok.class_name(), "notification notification-success");
    assert!(ok.inline_style().contains("#00875A"));

    let err = Notice::for_submission(&Err(FormError::InvalidEmail));
    assert_eq!(err.kind, NoticeKind::Error);
    assert_eq!(err.message, "Please enter a valid email address");
    assert_eq!(err.class_name(), "notification notification-error");
    assert!(err.inline_style().contains("#FF5630"));
    assert!(err.inline_style().contains("slideInRight"));
}

#[test]
fn keyframes_define_both_slides() {
    assert!(NOTICE_KEYFRAMES.contains("@keyframes slideInRight"));
    assert!(NOTICE_KEYFRAMES.contains("@keyframes slideOutRight"));
    assert!(NOTICE_EXIT_ANIMATION.starts_with("slideOutRight"));
}
