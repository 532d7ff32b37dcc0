use std::sync::OnceLock;

use regex::Regex;

pub struct ListItem;

impl ListItem {
    /// Matches an unordered list item: optional indent, `-` or `*`,
    /// whitespace, then the item text. Returns the trimmed item text.
    pub fn parse(line: &str) -> Option<&str> {
        static LIST_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = LIST_ITEM_REGEX
            .get_or_init(|| Regex::new(r"^\s*[-*]\s+(.*)$").expect("Invalid list item regex"));

        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}
