pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";
pub(crate) const WHITE_QUESTION: &str = "\u{2754}";
