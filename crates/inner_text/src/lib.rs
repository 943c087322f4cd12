//! Rendered plain text of a DOM subtree.
//! Spec: HTML, The innerText getter
//!   <https://html.spec.whatwg.org/multipage/dom.html#the-innertext-idl-attribute>
//!
//! `inner_text(root)` is what a user would get by selecting the rendered content of `root`
//! and copying it: white space collapsed per CSS, line breaks around blocks and paragraphs,
//! `br` as a line feed, images as their alt text, and hidden content left out.
//!
//! Rendering is decided from tag names and attributes alone; there is no style cascade.
//! Table cells and rows get no tab/line-feed separators, and `select`/`option` are plain
//! inline content.
//!
//! ```ignore
//! let dom = dom::parse_html("<p>One</p><p>Two</p>")?;
//! assert_eq!(inner_text::inner_text(&dom.root()), "One\n\nTwo");
//! ```

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::module_name_repetitions,
    reason = "Operations are named after the collection steps they implement"
)]

pub mod collect;
mod item;
mod node;
mod options;
pub mod reduce;
pub mod render;
pub mod whitespace;

pub use item::Item;
pub use node::{NodeType, TreeNode};
pub use options::{DEFAULT_MAX_DEPTH, InnerTextOptions};

use log::debug;

/// Inner text of `node` with default options.
pub fn inner_text<N: TreeNode>(node: &N) -> String {
    inner_text_with(node, &InnerTextOptions::default())
}

/// Inner text of `node`.
pub fn inner_text_with<N: TreeNode>(node: &N, options: &InnerTextOptions) -> String {
    let items = collect_items(node, options);
    let item_count = items.len();
    let text = reduce::reduce(items);
    debug!(
        target: "inner_text",
        "<{}>: {item_count} items reduced to {} bytes",
        node.tag_name().unwrap_or("#document"),
        text.len()
    );
    text
}

/// The unreduced item list collected for `node` as the root of an inner text computation.
pub fn collect_items<N: TreeNode>(node: &N, options: &InnerTextOptions) -> Vec<Item> {
    collect::collect_with(node, true, false, options)
}
