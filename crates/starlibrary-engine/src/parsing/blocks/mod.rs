//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (fence marker, blank, heading, list item, text)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` accumulates paragraph,
//!    list and code lines and emits `BlockNode`s when a buffer is flushed
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `HeadingLevel`)
//! - **`kinds`**: Block-specific types owning their syntax (CodeFence, Heading, ListItem, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Unterminated fences still produce a code block at end of input
//! - Parsing is total; unrecognised lines become paragraph text

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockNode, HeadingLevel};
