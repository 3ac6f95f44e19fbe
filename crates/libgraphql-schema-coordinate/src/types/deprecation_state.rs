use crate::types::DirectiveAnnotation;
use crate::types::Value;

/// The reason reported for a `@deprecated` annotation that omits `reason:`.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Whether a schema element carries a `@deprecated` annotation, and if so,
/// why.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl DeprecationState<'_> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a [DirectiveAnnotation]> for DeprecationState<'a> {
    fn from(value: &'a [DirectiveAnnotation]) -> DeprecationState<'a> {
        let Some(directive_annot) = value.iter().find(|directive_annot| {
            directive_annot.directive_name() == "deprecated"
        }) else {
            return DeprecationState::NotDeprecated;
        };

        match directive_annot.args().get("reason") {
            Some(Value::String(reason)) => DeprecationState::Deprecated(reason.as_str()),
            _ => DeprecationState::Deprecated(DEFAULT_DEPRECATION_REASON),
        }
    }
}

impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(value: &'a Vec<DirectiveAnnotation>) -> DeprecationState<'a> {
        value.as_slice().into()
    }
}
