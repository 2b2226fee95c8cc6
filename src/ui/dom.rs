//! Document and element capability traits.

/// Errors from UI helper operations.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// No element with the given identifier exists. This indicates a
    /// mismatch between caller and markup and is never swallowed.
    #[error("no element with id {id:?}")]
    ElementNotFound {
        /// The identifier that failed to resolve.
        id: String,
    },
}

/// A mutable page element.
pub trait Element {
    /// Replace the element's entire content with the given markup.
    fn set_inner_html(&mut self, html: &str);

    /// The element's current content markup.
    fn inner_html(&self) -> &str;

    /// Enable or disable the element.
    fn set_disabled(&mut self, disabled: bool);

    /// Whether the element is currently disabled.
    fn disabled(&self) -> bool;
}

/// Element lookup capability of a document.
pub trait Document {
    type Elem: Element;

    /// Resolve an element by its identifier, if present.
    fn element_by_id(&mut self, id: &str) -> Option<&mut Self::Elem>;
}
