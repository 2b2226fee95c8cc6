//! Input validation helpers.

/// Minimum length of a person's name after trimming whitespace.
pub const MIN_NAME_LENGTH: usize = 2;

/// Check whether a name is acceptable for registration.
///
/// A name is valid when, with leading and trailing whitespace removed,
/// it is at least [`MIN_NAME_LENGTH`] characters long. The check is on
/// characters, not bytes, so accented names count correctly.
///
/// # Example
/// ```
/// use face_console::validate::is_valid_name;
///
/// assert!(is_valid_name(" Jo "));
/// assert!(!is_valid_name("  a  "));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_character_name_is_valid() {
        assert!(is_valid_name("Jo"));
    }

    #[test]
    fn test_name_with_surrounding_whitespace_is_valid() {
        assert!(is_valid_name(" Jo "));
    }

    #[test]
    fn test_single_character_after_trim_is_invalid() {
        assert!(!is_valid_name("  a  "));
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("\t\n"));
    }

    #[test]
    fn test_longer_name_is_valid() {
        assert!(is_valid_name("Maria Clara"));
    }

    #[test]
    fn test_accented_two_character_name_is_valid() {
        assert!(is_valid_name("Zé"));
    }
}
