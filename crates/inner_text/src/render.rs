//! Static rendering classification of elements.
//! Spec: HTML §15.3.1 Hidden elements, §15.3.3 Flow content, §15.3.8 Tables
//!   <https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements>
//!
//! No style information is consulted: whether an element is rendered or block-level is
//! decided from its tag name, a few attributes, and for `form` its parent's tag.

use crate::node::TreeNode;

/// Elements that never generate a box.
const NOT_RENDERED: &[&str] = &[
    "area", "base", "basefont", "datalist", "head", "link", "meta", "noembed", "noframes",
    "param", "rp", "script", "source", "style", "template", "track", "title",
];

/// Elements whose used `display` is block-level in the UA stylesheet.
const BLOCK_LEVEL: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "dialog", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hgroup", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// Elements whose text keeps its white space (`white-space: pre` and friends).
const PREFORMATTED: &[&str] = &["listing", "plaintext", "pre", "xmp", "textarea"];

/// Parents inside which a `form` is `display: none`.
const TABLE_STRUCTURE: &[&str] = &["table", "thead", "tbody", "tfoot", "tr"];

fn matches_ignore_ascii_case(name: &str, set: &[&str]) -> bool {
    set.iter().any(|candidate| name.eq_ignore_ascii_case(candidate))
}

fn tag_is<N: TreeNode>(node: &N, tag: &str) -> bool {
    node.tag_name().is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Whether `node` produces a box. Non-elements always count as rendered.
pub fn is_being_rendered<N: TreeNode>(node: &N) -> bool {
    let Some(tag) = node.tag_name() else {
        return true;
    };
    if matches_ignore_ascii_case(tag, NOT_RENDERED) {
        return false;
    }
    // `embed` is the one element the `hidden` attribute does not hide.
    if node.has_attribute("hidden") && !tag.eq_ignore_ascii_case("embed") {
        return false;
    }
    if tag.eq_ignore_ascii_case("input")
        && node
            .attribute("type")
            .is_some_and(|kind| kind.eq_ignore_ascii_case("hidden"))
    {
        return false;
    }
    if tag.eq_ignore_ascii_case("dialog") && !node.has_attribute("open") {
        return false;
    }
    if tag.eq_ignore_ascii_case("form") {
        // A detached form has no table parent, so it renders.
        let in_table = node.parent_node().is_some_and(|parent| {
            parent
                .tag_name()
                .is_some_and(|name| matches_ignore_ascii_case(name, TABLE_STRUCTURE))
        });
        if in_table {
            return false;
        }
    }
    true
}

pub fn is_block_level<N: TreeNode>(node: &N) -> bool {
    node.tag_name()
        .is_some_and(|tag| matches_ignore_ascii_case(tag, BLOCK_LEVEL))
}

/// Whether white-space collapsing is suppressed for `node` and its descendants.
pub fn is_preformatted<N: TreeNode>(node: &N) -> bool {
    node.tag_name()
        .is_some_and(|tag| matches_ignore_ascii_case(tag, PREFORMATTED))
}

pub(crate) fn is_line_break<N: TreeNode>(node: &N) -> bool {
    tag_is(node, "br")
}

pub(crate) fn is_paragraph<N: TreeNode>(node: &N) -> bool {
    tag_is(node, "p")
}

pub(crate) fn is_image<N: TreeNode>(node: &N) -> bool {
    tag_is(node, "img")
}

pub(crate) fn is_caption<N: TreeNode>(node: &N) -> bool {
    tag_is(node, "caption")
}
