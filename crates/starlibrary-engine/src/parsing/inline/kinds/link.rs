/// Inline link `[label](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const MIDDLE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
}
