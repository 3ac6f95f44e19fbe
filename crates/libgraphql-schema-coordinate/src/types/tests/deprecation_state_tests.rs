use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Value;

#[test]
fn no_deprecated_annotation() {
    let annots = vec![DirectiveAnnotation::new("tag")];
    let state = DeprecationState::from(&annots);
    assert_eq!(state, DeprecationState::NotDeprecated);
    assert!(!state.is_deprecated());
}

#[test]
fn deprecated_with_reason() {
    let annots = vec![
        DirectiveAnnotation::new("tag"),
        DirectiveAnnotation::new("deprecated")
            .with_arg("reason", Value::String("Use `fullName`.".to_string())),
    ];
    assert_eq!(
        DeprecationState::from(&annots),
        DeprecationState::Deprecated("Use `fullName`."),
    );
}

#[test]
fn deprecated_without_reason_uses_default() {
    let annots = vec![DirectiveAnnotation::new("deprecated")];
    assert_eq!(
        DeprecationState::from(annots.as_slice()),
        DeprecationState::Deprecated(DEFAULT_DEPRECATION_REASON),
    );
}

/// A non-string `reason:` is not a usable reason; fall back to the default.
#[test]
fn deprecated_with_non_string_reason_uses_default() {
    let annots = vec![
        DirectiveAnnotation::new("deprecated").with_arg("reason", Value::Null),
    ];
    assert_eq!(
        DeprecationState::from(&annots),
        DeprecationState::Deprecated("No longer supported"),
    );
}
