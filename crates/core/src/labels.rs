//! Codec between the stored label list and the editable string form.
//!
//! The editor shows labels as one `;`-delimited string; storage keeps them
//! as an ordered list of [`LabelItem`]. The conversion is lossy on purpose
//! for malformed input: empty segments and stray whitespace disappear.

use crate::account::LabelItem;

/// Separator inserted between labels when flattening to the editable form.
pub const LABEL_SEPARATOR: &str = "; ";

/// Flatten a label list into the editable string.
///
/// Each label's text is trimmed; labels that trim to nothing are dropped.
pub fn labels_to_string(items: &[LabelItem]) -> String {
    items
        .iter()
        .map(|item| item.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

/// Parse the editable string back into a label list.
///
/// Splits on `;`, trims each segment, and drops segments that trim to
/// nothing. Inverse of [`labels_to_string`] whenever every label has
/// non-empty trimmed text.
pub fn parse_labels(value: &str) -> Vec<LabelItem> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value
        .split(';')
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(LabelItem::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_trimmed_labels() {
        let items = vec![
            LabelItem::new("  work "),
            LabelItem::new("prod"),
            LabelItem::new("vpn"),
        ];
        assert_eq!(labels_to_string(&items), "work; prod; vpn");
    }

    #[test]
    fn drops_blank_labels_when_flattening() {
        let items = vec![
            LabelItem::new("a"),
            LabelItem::new("   "),
            LabelItem::new(""),
            LabelItem::new("b"),
        ];
        assert_eq!(labels_to_string(&items), "a; b");
    }

    #[test]
    fn parses_and_trims_segments() {
        let parsed = parse_labels(" one;  two ;three ");
        let texts: Vec<&str> = parsed.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn blank_input_parses_to_empty_list() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels("   ").is_empty());
    }

    #[test]
    fn separator_only_input_parses_to_empty_list() {
        assert!(parse_labels(";;;").is_empty());
        assert!(parse_labels(" ; ; ").is_empty());
    }

    #[test]
    fn round_trip_holds_for_clean_labels() {
        let items = vec![LabelItem::new("alpha"), LabelItem::new("beta gamma")];
        let parsed = parse_labels(&labels_to_string(&items));
        assert_eq!(parsed, items);
    }

    #[test]
    fn round_trip_strips_empty_entries() {
        let items = vec![
            LabelItem::new("alpha"),
            LabelItem::new("  "),
            LabelItem::new("beta"),
        ];
        let parsed = parse_labels(&labels_to_string(&items));
        let texts: Vec<&str> = parsed.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["alpha", "beta"]);
    }
}
