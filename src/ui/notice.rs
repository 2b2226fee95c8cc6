//! Notice rendering into a message container.

use super::dom::Element;

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class rendered for this kind.
    pub fn alert_class(self) -> &'static str {
        match self {
            MessageKind::Success => "alert-success",
            MessageKind::Error => "alert-danger",
        }
    }

    /// Map a kind string to a message kind.
    ///
    /// Only the literal `"success"` maps to [`MessageKind::Success`];
    /// every other value falls back to the error style. The fallback is
    /// inherited from the original page scripts and kept as documented
    /// behavior.
    pub fn parse(kind: &str) -> Self {
        if kind == "success" {
            MessageKind::Success
        } else {
            MessageKind::Error
        }
    }
}

/// Replace the container's content with a styled notice.
///
/// `text` is interpolated into the markup without escaping. Callers must
/// sanitize any user-provided content before passing it here, or the
/// rendered markup can be injected into.
pub fn display<E: Element>(container: &mut E, kind: MessageKind, text: &str) {
    container.set_inner_html(&format!(
        "<div class=\"alert {}\">{}</div>",
        kind.alert_class(),
        text
    ));
}

/// Remove all content from the container. Idempotent.
pub fn clear<E: Element>(container: &mut E) {
    container.set_inner_html("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dom::testing::FakeElement;

    #[test]
    fn test_display_success_renders_success_class() {
        let mut container = FakeElement::default();
        display(&mut container, MessageKind::Success, "registered!");
        assert!(container.html.contains("alert-success"));
        assert!(container.html.contains("registered!"));
    }

    #[test]
    fn test_display_error_renders_danger_class() {
        let mut container = FakeElement::default();
        display(&mut container, MessageKind::Error, "something broke");
        assert!(container.html.contains("alert-danger"));
        assert!(container.html.contains("something broke"));
    }

    #[test]
    fn test_display_replaces_previous_content() {
        let mut container = FakeElement::default();
        display(&mut container, MessageKind::Error, "first");
        display(&mut container, MessageKind::Success, "second");
        assert!(!container.html.contains("first"));
        assert!(container.html.contains("second"));
    }

    #[test]
    fn test_clear_empties_container() {
        let mut container = FakeElement::default();
        display(&mut container, MessageKind::Success, "hello");
        clear(&mut container);
        assert!(container.html.is_empty());
        // Clearing again must stay empty.
        clear(&mut container);
        assert!(container.html.is_empty());
    }

    #[test]
    fn test_parse_success_literal() {
        assert_eq!(MessageKind::parse("success"), MessageKind::Success);
    }

    #[test]
    fn test_parse_unknown_kind_falls_back_to_error() {
        assert_eq!(MessageKind::parse("error"), MessageKind::Error);
        assert_eq!(MessageKind::parse("warning"), MessageKind::Error);
        assert_eq!(MessageKind::parse(""), MessageKind::Error);
        assert_eq!(MessageKind::parse("Success"), MessageKind::Error);
    }
}
