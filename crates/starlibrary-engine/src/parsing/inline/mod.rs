//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and operates over the text
//! of inline-eligible blocks (paragraphs, headings, list item text). Code
//! block content never reaches this module.
//!
//! Parsing runs in two passes:
//! 1. Code spans are split out of the text. They are raw zones.
//! 2. Links are searched for only in the text left between code spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[a](b)` `` parses as a single CodeSpan,
//! not as a link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
