//! Character classes used by the scanner.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

pub const UNDERSCORE: char = '_';

/// Check if a character can appear in an identifier: any letter (general
/// category `L*`), or `_`.
#[inline]
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch == UNDERSCORE || ch.is_ascii_alphabetic();
    }
    ch.general_category_group() == GeneralCategoryGroup::Letter
}

/// Check if a character is a decimal digit (general category `Nd`).
#[inline]
pub fn is_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_digit();
    }
    ch.general_category() == GeneralCategory::DecimalNumber
}

/// Check if a character is whitespace (Unicode `White_Space`, line breaks included).
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('_'));
        assert!(is_letter('é'));
        assert!(is_letter('λ'));
        assert!(is_letter('名'));
        assert!(!is_letter('1'));
        assert!(!is_letter('$'));
        assert!(!is_letter('@'));
    }

    #[test]
    fn test_modifier_letters_are_letters() {
        // VERTICAL TILDE (Lm)
        assert!(is_letter('\u{2E2F}'));
        // MODIFIER LETTER SMALL H (Lm)
        assert!(is_letter('\u{02B0}'));
    }

    #[test]
    fn test_letter_numbers_are_not_letters() {
        // ROMAN NUMERAL TWELVE (Nl)
        assert!(!is_letter('\u{216B}'));
        assert!(!is_digit('\u{216B}'));
    }

    #[test]
    fn test_digits() {
        for ch in ['0', '5', '9', '\u{0661}', '\u{0966}', '\u{FF13}'] {
            assert!(is_digit(ch), "{ch:?}");
            assert!(!is_letter(ch), "{ch:?}");
        }
        // SUPERSCRIPT TWO (No)
        assert!(!is_digit('\u{00B2}'));
        assert!(!is_digit('a'));
    }

    #[test]
    fn test_white_space() {
        for ch in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{3000}'] {
            assert!(is_white_space(ch), "{ch:?}");
        }
        assert!(!is_white_space('x'));
        assert!(!is_white_space('\0'));
    }
}
