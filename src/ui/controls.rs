//! Button state toggling.

use super::dom::{Document, Element, UiError};

/// Enable or disable the element with the given id.
///
/// # Errors
///
/// Returns `UiError::ElementNotFound` when no element with `button_id`
/// exists. The failure indicates a caller/markup mismatch and must reach
/// the caller rather than being swallowed.
pub fn set_disabled<D: Document>(
    document: &mut D,
    button_id: &str,
    disabled: bool,
) -> Result<(), UiError> {
    let element = document
        .element_by_id(button_id)
        .ok_or_else(|| UiError::ElementNotFound {
            id: button_id.to_string(),
        })?;
    element.set_disabled(disabled);
    Ok(())
}
