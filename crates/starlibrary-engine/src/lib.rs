pub mod io;
pub mod parsing;
pub mod render;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::IoError;
pub use parsing::{blocks::BlockNode, blocks::HeadingLevel, document_title, parse_markdown, parse_str};
pub use render::{markdown_to_html, render_html};
pub use site::{Note, SiteError, SiteOptions, build_site};
