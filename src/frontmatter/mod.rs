//! Frontmatter date editing for Markdown documents
//!
//! Finds the `---` delimited block at the top of a document and adds or
//! replaces its `date:` line. Nothing else in the document is touched: other
//! frontmatter lines keep their order and bytes, and the text after the
//! closing marker is copied verbatim. This is a line scanner, not a YAML
//! parser.

mod editor;

pub use editor::update_date;
