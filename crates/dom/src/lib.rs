//! Minimal read-only DOM for rendered-text extraction.
//!
//! Trees are either built by hand through [`Dom::append_element`] and friends, or parsed
//! from markup with [`parse_html`]. Once built, a tree is only read through [`NodeRef`]
//! views, which are cheap to copy and safe to share across threads.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]

mod parser;
mod printing;
mod tree;

pub use indextree::NodeId;
pub use parser::{parse_html, parse_html_file};
pub use tree::{Dom, DomNode, NodeKind, NodeRef};
