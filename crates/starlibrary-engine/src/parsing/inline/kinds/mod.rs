//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses link parsing
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = b"]("`, `CLOSE = b')'`
//!
//! The parser calls these constants; it never hardcodes `[` or `` ` ``.

pub mod code_span;
pub mod link;

pub use code_span::CodeSpan;
pub use link::Link;
