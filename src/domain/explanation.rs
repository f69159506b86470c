// SPDX-License-Identifier: MPL-2.0
//! Parsing of the service's explanation text into a title and bullet points.
//!
//! The service answers with free-form text where the first non-blank line is
//! a heading and every following line is a bullet, usually prefixed with
//! `"* "`. Parsing is pure and deterministic.

/// Bullet marker stripped from the start of each point.
const BULLET_MARKER: &str = "* ";

/// A parsed explanation: a heading followed by ordered bullet points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub title: String,
    pub points: Vec<String>,
}

impl Explanation {
    /// Renders the explanation back to text, one bullet per line.
    ///
    /// Feeding the result to [`render`] yields an equal `Explanation`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = self.title.clone();
        for point in &self.points {
            text.push('\n');
            text.push_str(BULLET_MARKER);
            text.push_str(point);
        }
        text
    }
}

/// Parses explanation text.
///
/// Lines are split on `'\n'` only, so a carriage return stays part of its
/// line. Lines that are empty after trimming are dropped. Returns `None` when
/// no line remains. The first remaining line is kept verbatim as the title; the
/// others lose one leading `"* "` marker, if present.
#[must_use]
pub fn render(text: Option<&str>) -> Option<Explanation> {
    let mut lines = text?.split('\n').filter(|line| !line.trim().is_empty());

    let title = lines.next()?.to_string();
    let points = lines
        .map(|line| line.strip_prefix(BULLET_MARKER).unwrap_or(line).to_string())
        .collect();

    Some(Explanation { title, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_title_and_bullets() {
        let parsed = render(Some("Mnemonic Title\n* point one\n* point two\n\n"));
        assert_eq!(
            parsed,
            Some(Explanation {
                title: "Mnemonic Title".to_string(),
                points: vec!["point one".to_string(), "point two".to_string()],
            })
        );
    }

    #[test]
    fn empty_and_blank_inputs_yield_nothing() {
        assert_eq!(render(None), None);
        assert_eq!(render(Some("")), None);
        assert_eq!(render(Some("\n\n")), None);
        assert_eq!(render(Some("  \n\t\n   ")), None);
    }

    #[test]
    fn title_only() {
        let parsed = render(Some("\n\nJust a title\n")).expect("title expected");
        assert_eq!(parsed.title, "Just a title");
        assert!(parsed.points.is_empty());
    }

    #[test]
    fn unmarked_lines_are_kept_as_is() {
        let parsed = render(Some("Title\nplain line\n*no space\n* marked")).expect("parsed");
        assert_eq!(parsed.points, vec!["plain line", "*no space", "marked"]);
    }

    #[test]
    fn only_one_marker_is_stripped() {
        let parsed = render(Some("Title\n* * nested")).expect("parsed");
        assert_eq!(parsed.points, vec!["* nested"]);
    }

    #[test]
    fn title_is_not_stripped_of_marker() {
        let parsed = render(Some("* Title\n* point")).expect("parsed");
        assert_eq!(parsed.title, "* Title");
        assert_eq!(parsed.points, vec!["point"]);
    }

    #[test]
    fn blank_lines_between_points_are_dropped() {
        let parsed = render(Some("Title\n\n* a\n   \n* b\n")).expect("parsed");
        assert_eq!(parsed.points, vec!["a", "b"]);
    }

    #[test]
    fn carriage_returns_are_kept() {
        let parsed = render(Some("Title\r\n* a\r\n* b\r\n")).expect("parsed");
        assert_eq!(parsed.title, "Title\r");
        assert_eq!(parsed.points, vec!["a\r", "b\r"]);
    }

    #[test]
    fn lone_carriage_return_lines_are_blank() {
        let parsed = render(Some("Title\n\r\n* a")).expect("parsed");
        assert_eq!(parsed.points, vec!["a"]);
    }

    #[test]
    fn rendering_back_is_idempotent() {
        let inputs = [
            "Mnemonic Title\n* point one\n* point two\n\n",
            "Title\nplain\n*  padded\n* ",
            "  Indented title\n* * double",
            "Only title",
            "Title\n* x\r\r\n* y",
            "Title\r\n* a\r\n",
        ];
        for input in inputs {
            let first = render(Some(input)).expect("parsed");
            let second = render(Some(&first.to_text())).expect("reparsed");
            assert_eq!(first, second, "input: {input:?}");
        }
    }
}
