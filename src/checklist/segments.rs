//! Splitting item text into fixed text and fill-in blanks.
//!
//! An item's text is split on the blank separator. Non-empty pieces are
//! shown as-is; empty pieces become blank fields. `"Name:\t"` therefore
//! renders as the label `Name:` followed by one blank.
//!
//! Both a literal TAB character and the two-character escape `\t` act as
//! the separator, so templates typed in a single-line input field can still
//! carry blanks.

/// Two-character escape sequence accepted as a separator.
pub const BLANK_ESCAPE: &str = "\\t";

/// Literal separator character.
pub const BLANK_CHAR: char = '\t';

/// One piece of a rendered checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed display text
    Text(String),
    /// Empty fill-in field
    Blank,
}

impl Segment {
    /// Whether this segment is a fill-in field.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Splits item text into segments.
#[must_use]
pub fn split_segments(text: &str) -> Vec<Segment> {
    text.replace(BLANK_ESCAPE, "\t")
        .split(BLANK_CHAR)
        .map(|part| {
            if part.is_empty() {
                Segment::Blank
            } else {
                Segment::Text(part.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn test_label_then_blank() {
        assert_eq!(split_segments("Name:\t"), vec![text("Name:"), Segment::Blank]);
        assert_eq!(split_segments("Name:\\t"), vec![text("Name:"), Segment::Blank]);
    }

    #[test]
    fn test_plain_text_has_no_blanks() {
        assert_eq!(split_segments("Done"), vec![text("Done")]);
    }

    #[test]
    fn test_blank_between_labels() {
        assert_eq!(
            split_segments("From\\t\\tto\\t"),
            vec![text("From"), Segment::Blank, text("to"), Segment::Blank]
        );
    }

    #[test]
    fn test_backslash_t_in_text_is_a_separator() {
        // A path such as C:\temp loses its "\t" to the split
        assert_eq!(split_segments("C:\\temp"), vec![text("C:"), text("emp")]);
        assert_eq!(
            split_segments("Save to C:\\temp\\t"),
            vec![text("Save to C:"), text("emp"), Segment::Blank]
        );
    }

    #[test]
    fn test_empty_text_is_single_blank() {
        assert_eq!(split_segments(""), vec![Segment::Blank]);
    }
}
