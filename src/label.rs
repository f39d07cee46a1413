// This is a part of jconv.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving an encoding family from a string label.

/// One of the three natively tabled encoding families.
///
/// The set is closed: every native conversion is routed through
/// [`Family::EucJp`], the pivot representation, and pairs outside the set
/// are handled by a delegate resource bound at open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// EUC-JP carrying JIS X 0213 (EUC-JISX0213). The pivot encoding.
    EucJp,
    /// Shift-JIS carrying JIS X 0213 (Shift_JISX0213).
    ShiftJis,
    /// UTF-8.
    Utf8,
}

impl Family {
    /// The preferred name of this family.
    pub fn name(&self) -> &'static str {
        match *self {
            Family::EucJp => "euc-jp",
            Family::ShiftJis => "shift_jis",
            Family::Utf8 => "utf-8",
        }
    }
}

/// Returns the native encoding family named by `label`, if any.
///
/// Matching is case-insensitive and treats `-` and `_` as the same
/// separator, so `"EUC-JP"`, `"euc_jp"` and `"eucJP"` all resolve to
/// [`Family::EucJp`].
pub fn family_from_label(label: &str) -> Option<Family> {
    let label = label.trim_matches(|c: char| c.is_ascii_whitespace());
    match &label.to_ascii_lowercase().replace('-', "_")[..] {
        "euc_jp" |
        "eucjp" |
        "eucj" |
        "euc_jisx0213" =>
            Some(Family::EucJp),
        "shift_jis" |
        "shiftjis" |
        "sjis" =>
            Some(Family::ShiftJis),
        "utf_8" |
        "utf8" =>
            Some(Family::Utf8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{family_from_label, Family};

    #[test]
    fn test_known_labels() {
        assert_eq!(family_from_label("euc-jp"), Some(Family::EucJp));
        assert_eq!(family_from_label("EUC_JISX0213"), Some(Family::EucJp));
        assert_eq!(family_from_label("eucJP"), Some(Family::EucJp));
        assert_eq!(family_from_label("Shift_JIS"), Some(Family::ShiftJis));
        assert_eq!(family_from_label("SJIS"), Some(Family::ShiftJis));
        assert_eq!(family_from_label("shift-jis"), Some(Family::ShiftJis));
        assert_eq!(family_from_label("UTF-8"), Some(Family::Utf8));
        assert_eq!(family_from_label("utf8"), Some(Family::Utf8));
        assert_eq!(family_from_label(" utf-8\n"), Some(Family::Utf8));
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(family_from_label(""), None);
        assert_eq!(family_from_label("latin-1"), None);
        assert_eq!(family_from_label("iso-2022-jp"), None);
        assert_eq!(family_from_label("euc-kr"), None);
        assert_eq!(family_from_label("utf-16"), None);
    }
}
