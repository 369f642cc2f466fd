use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize and trim a free-text cell.
///
/// Compatibility normalization folds non-breaking spaces, ligatures and
/// full-width forms into their plain equivalents, so values typed into a
/// spreadsheet compare equal to values typed by hand.
pub fn clean(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean("  Onshore \t"), "Onshore");
    }

    #[test]
    fn folds_non_breaking_space() {
        assert_eq!(clean("\u{a0}Both\u{a0}"), "Both");
        assert_eq!(clean("New\u{a0}Year"), "New Year");
    }

    #[test]
    fn folds_compatibility_forms() {
        assert_eq!(clean("\u{fb01}esta"), "fiesta");
        assert_eq!(clean("\u{ff2f}nshore"), "Onshore");
    }
}
