use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::HeadingLevel;

pub struct Heading;

impl Heading {
    /// Matches `#`, `##` or `###` followed by whitespace and the heading text.
    ///
    /// The marker run must start at column zero and be followed by at least
    /// one whitespace character, so `#title` and `#### title` do not match.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,3})\s+(.*)$").expect("Invalid heading regex"));

        let caps = re.captures(line)?;
        let level = HeadingLevel::from_marker_len(caps.get(1)?.as_str().len())?;
        Some((level, caps.get(2)?.as_str().trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# title", HeadingLevel::H1, "title")]
    #[case("## Sub title  ", HeadingLevel::H2, "Sub title")]
    #[case("###\tdeep", HeadingLevel::H3, "deep")]
    #[case("#   spaced", HeadingLevel::H1, "spaced")]
    fn recognises_headings(#[case] line: &str, #[case] level: HeadingLevel, #[case] text: &str) {
        assert_eq!(Heading::parse(line), Some((level, text)));
    }

    #[rstest]
    #[case("#title")]
    #[case("#### four")]
    #[case(" # indented")]
    #[case("plain text")]
    #[case("#")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(Heading::parse(line), None);
    }

    #[test]
    fn marker_followed_only_by_whitespace_is_empty_heading() {
        assert_eq!(Heading::parse("## "), Some((HeadingLevel::H2, "")));
    }
}
