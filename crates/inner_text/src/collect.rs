//! Rendered text collection steps.
//! Spec: HTML §3.2.7, The innerText getter, rendered text collection steps
//!   <https://html.spec.whatwg.org/multipage/dom.html#rendered-text-collection-steps>
//!
//! Each node yields a fresh item list built from its children's lists. Text is not
//! normalized where it is found: adjacent runs from sibling inline nodes are first merged,
//! and only block-level nodes (and the root) normalize the merged runs and seal the result
//! between `BlockStart`/`BlockEnd` so enclosing blocks leave it alone.
//!
//! Steps 6 and 7 (table cells and rows) are not implemented; they need computed styles.

use crate::item::Item;
use crate::node::{NodeType, TreeNode};
use crate::options::InnerTextOptions;
use crate::render::{
    is_being_rendered, is_block_level, is_caption, is_image, is_line_break, is_paragraph,
    is_preformatted,
};
use crate::whitespace::{normalize_preformatted, normalize_whitespace};
use log::{trace, warn};

/// Collect the items of `node` with default options.
///
/// `outer` marks the node `innerText` was asked about: it is never gated on visibility,
/// an image there is not padded, and its items are always merged. `pre` is true when an
/// ancestor already disabled white-space collapsing.
pub fn collect<N: TreeNode>(node: &N, outer: bool, pre: bool) -> Vec<Item> {
    collect_with(node, outer, pre, &InnerTextOptions::default())
}

/// Collect the items of `node`, stopping `options.max_depth` levels below it.
pub fn collect_with<N: TreeNode>(
    node: &N,
    outer: bool,
    pre: bool,
    options: &InnerTextOptions,
) -> Vec<Item> {
    collect_at_depth(node, outer, pre, 0, options)
}

fn collect_at_depth<N: TreeNode>(
    node: &N,
    outer: bool,
    pre: bool,
    depth: usize,
    options: &InnerTextOptions,
) -> Vec<Item> {
    match node.node_type() {
        // Text nodes are leaves even if the tree claims otherwise.
        NodeType::Text => {
            return vec![Item::text(node.character_data().unwrap_or_default())];
        }
        NodeType::Comment => return Vec::new(),
        NodeType::Document | NodeType::Element => {}
    }

    // A subtree that is not rendered contributes nothing, whatever its children hold.
    if !outer && !is_being_rendered(node) {
        trace!(
            target: "inner_text",
            "skipping non-rendered <{}>",
            node.tag_name().unwrap_or_default()
        );
        return Vec::new();
    }

    // A line feed sealed in its own scope so no collapsing pass ever touches it.
    if is_line_break(node) {
        return vec![Item::BlockStart, Item::text("\n"), Item::BlockEnd];
    }

    if is_image(node) {
        return image_replacement(node, outer);
    }

    let pre = pre || is_preformatted(node);
    let mut items = collect_children(node, pre, depth, options);

    if is_paragraph(node) {
        items = surround(items, &Item::PARAGRAPH_BREAK);
    }

    let block_level = is_block_level(node);
    if block_level || is_caption(node) {
        items = surround(items, &Item::LINE_BREAK);
    }

    if outer || block_level {
        items = merge_block(items, pre);
    }
    items
}

fn collect_children<N: TreeNode>(
    node: &N,
    pre: bool,
    depth: usize,
    options: &InnerTextOptions,
) -> Vec<Item> {
    if depth >= options.max_depth {
        if node.child_nodes().next().is_some() {
            warn!(
                target: "inner_text",
                "<{}> is nested {depth} levels deep; dropping its children",
                node.tag_name().unwrap_or("#document")
            );
        }
        return Vec::new();
    }
    let mut items = Vec::new();
    for child in node.child_nodes() {
        items.extend(collect_at_depth(&child, false, pre, depth.saturating_add(1), options));
    }
    items
}

/// Trim the ASCII white space and NUL bytes an attribute value may be padded with.
fn trim_attribute(value: &str) -> &str {
    value.trim_matches(|ch: char| ch.is_ascii_whitespace() || ch == '\0' || ch == '\u{0B}')
}

/// Images render as their `alt` text, or failing that their `src`.
///
/// Inside other content the value is padded with spaces so it does not glue to the
/// neighbouring words; the padding is collapsed later like any other space.
fn image_replacement<N: TreeNode>(node: &N, outer: bool) -> Vec<Item> {
    let value = node
        .attribute("alt")
        .or_else(|| node.attribute("src"))
        .map(trim_attribute)
        .unwrap_or_default();
    if outer {
        vec![Item::text(value)]
    } else {
        vec![Item::Text(format!(" {value} "))]
    }
}

fn surround(items: Vec<Item>, boundary: &Item) -> Vec<Item> {
    let mut out = Vec::with_capacity(items.len().saturating_add(2));
    out.push(boundary.clone());
    out.extend(items);
    out.push(boundary.clone());
    out
}

/// Normalize the pending run, if any, onto the end of `merged`.
fn flush(pending: &mut Option<String>, merged: &mut Vec<Item>, pre: bool) {
    let Some(run) = pending.take() else {
        return;
    };
    let text = if pre {
        normalize_preformatted(&run)
    } else {
        normalize_whitespace(&run)
    };
    merged.push(Item::Text(text));
}

/// Merge adjacent text runs, normalize each, and seal the result as one scope.
///
/// Scopes already sealed by a nested block or a `br` are copied through untouched,
/// including the text inside them, since that text has been normalized already.
pub fn merge_block(items: Vec<Item>, pre: bool) -> Vec<Item> {
    let mut merged = Vec::with_capacity(items.len().saturating_add(2));
    merged.push(Item::BlockStart);

    let mut pending: Option<String> = None;
    let mut nested = 0_usize;
    for item in items {
        if !item.is_text() {
            flush(&mut pending, &mut merged, pre);
        }
        if item == Item::BlockStart {
            nested = nested.saturating_add(1);
        }
        if nested > 0 {
            if item == Item::BlockEnd {
                nested = nested.saturating_sub(1);
            }
            merged.push(item);
            continue;
        }
        match item {
            Item::Text(text) => pending.get_or_insert_with(String::new).push_str(&text),
            other => merged.push(other),
        }
    }
    debug_assert_eq!(nested, 0, "unbalanced block markers in collected items");

    flush(&mut pending, &mut merged, pre);
    merged.push(Item::BlockEnd);
    trace!(target: "inner_text", "merged block into {} items", merged.len());
    merged
}
