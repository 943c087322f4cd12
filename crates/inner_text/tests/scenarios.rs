//! End-to-end behaviour of `inner_text` on parsed and hand-built documents.

mod common;

use anyhow::{Result, anyhow};
use common::init_logging;
use dom::{Dom, NodeRef, parse_html};
use inner_text::{InnerTextOptions, collect_items, inner_text, inner_text_with};
use serde_json::json;

const NO_ATTRS: [(&str, &str); 0] = [];

fn body(dom: &Dom) -> Result<NodeRef<'_>> {
    dom.elements_by_tag("body")
        .next()
        .ok_or_else(|| anyhow!("document has no body"))
}

fn first<'dom>(dom: &'dom Dom, tag: &str) -> Result<NodeRef<'dom>> {
    dom.elements_by_tag(tag)
        .next()
        .ok_or_else(|| anyhow!("no <{tag}> in document"))
}

fn body_text(html: &str) -> Result<String> {
    let dom = parse_html(html)?;
    Ok(inner_text(&body(&dom)?))
}

#[test]
fn spaces_collapse_inside_paragraph() -> Result<()> {
    init_logging();
    assert_eq!(body_text("<p>Hello   world</p>")?, "Hello world");
    Ok(())
}

#[test]
fn non_breaking_space_survives_collapsing() -> Result<()> {
    init_logging();
    assert_eq!(body_text("<p>Hello&nbsp; world</p>")?, "Hello\u{a0} world");
    assert_eq!(body_text("<p>&nbsp;&nbsp;x</p>")?, "\u{a0}\u{a0}x");
    Ok(())
}

#[test]
fn paragraphs_are_separated_by_a_blank_line() -> Result<()> {
    init_logging();
    assert_eq!(body_text("<p>One</p><p>Two</p>")?, "One\n\nTwo");
    Ok(())
}

#[test]
fn br_becomes_a_line_feed() -> Result<()> {
    init_logging();
    let dom = parse_html("<div>A<br>B</div>")?;
    assert_eq!(inner_text(&first(&dom, "div")?), "A\nB");
    Ok(())
}

#[test]
fn hidden_sibling_is_left_out() -> Result<()> {
    init_logging();
    assert_eq!(body_text("<div hidden>secret</div>visible")?, "visible");
    Ok(())
}

#[test]
fn outer_image_is_trimmed_and_unpadded() -> Result<()> {
    init_logging();
    let dom = parse_html(r#"<img alt=" a cat ">"#)?;
    assert_eq!(inner_text(&first(&dom, "img")?), "a cat");
    Ok(())
}

#[test]
fn div_trims_and_collapses() -> Result<()> {
    init_logging();
    let dom = parse_html("<div>  leading and trailing   spaces  </div>")?;
    assert_eq!(
        inner_text(&first(&dom, "div")?),
        "leading and trailing spaces"
    );
    Ok(())
}

#[test]
fn whole_document_skips_head() -> Result<()> {
    init_logging();
    let dom = parse_html("<title>Ignored</title><style>p {}</style><p>Hi <b>there</b></p>")?;
    assert_eq!(inner_text(&dom.root()), "Hi there");
    Ok(())
}

#[test]
fn comments_contribute_nothing() -> Result<()> {
    init_logging();
    assert_eq!(body_text("<span>a<!-- note -->b</span>")?, "ab");
    Ok(())
}

#[test]
fn unrendered_root_still_yields_its_text() -> Result<()> {
    init_logging();
    let dom = parse_html("<div hidden> secret  text </div><dialog>closed</dialog>")?;
    assert_eq!(inner_text(&first(&dom, "div")?), "secret text");
    assert_eq!(inner_text(&first(&dom, "dialog")?), "closed");
    Ok(())
}

#[test]
fn preformatted_root_keeps_spacing() -> Result<()> {
    init_logging();
    let dom = parse_html("<textarea>  a  b </textarea><xmp> <b>  c </b></xmp>")?;
    assert_eq!(inner_text(&first(&dom, "textarea")?), "  a  b ");
    assert_eq!(inner_text(&first(&dom, "xmp")?), " <b>  c </b>");
    Ok(())
}

#[test]
fn listing_and_plaintext_roots_keep_spacing() -> Result<()> {
    init_logging();
    let listing = parse_html("<listing>  a   b </listing>")?;
    assert_eq!(inner_text(&first(&listing, "listing")?), "  a   b ");
    // plaintext swallows the rest of the document as text.
    let plaintext = parse_html("<plaintext>  c   d </p>")?;
    assert_eq!(inner_text(&first(&plaintext, "plaintext")?), "  c   d </p>");
    Ok(())
}

/// Only block-level elements merge their own runs, so an inline preformatted element's
/// text is collapsed by the enclosing block like any other inline text.
#[test]
fn inline_preformatted_text_collapses_in_enclosing_block() -> Result<()> {
    init_logging();
    let cases = [
        ("<div id=r>x<textarea>  a   b  </textarea></div>", "x a b"),
        ("<div id=r><xmp>  a   b  </xmp></div>", "a b"),
        ("<div id=r><listing>\n  a   b  </listing></div>", "a b"),
        ("<div id=r><plaintext>  a   b  ", "a b"),
    ];
    for (html, expected) in cases {
        let dom = parse_html(html)?;
        let root = dom
            .element_by_id("r")
            .ok_or_else(|| anyhow!("no #r in {html:?}"))?;
        assert_eq!(inner_text(&root), expected, "{html:?}");
    }
    Ok(())
}

#[test]
fn inline_content_of_pre_keeps_spacing() -> Result<()> {
    init_logging();
    let dom = parse_html("<div id=r>x <pre><span>  a   b </span><em> c</em></pre></div>")?;
    let root = dom.element_by_id("r").ok_or_else(|| anyhow!("no #r"))?;
    assert_eq!(inner_text(&root), "x\n  a   b  c");
    Ok(())
}

#[test]
fn preformatting_reaches_nested_blocks() -> Result<()> {
    init_logging();
    let dom = parse_html("<pre><div> a   b </div>tail\r\n</pre>")?;
    assert_eq!(inner_text(&first(&dom, "pre")?), " a   b \ntail\n");
    Ok(())
}

#[test]
fn form_is_hidden_only_inside_table_structure() -> Result<()> {
    init_logging();
    let mut dom = Dom::new();
    let div = dom.append_element(dom.root_id(), "div", NO_ATTRS)?;
    dom.append_text(div, "a")?;
    let table = dom.append_element(div, "table", NO_ATTRS)?;
    let hidden_form = dom.append_element(table, "form", NO_ATTRS)?;
    dom.append_text(hidden_form, "in table")?;
    let form = dom.append_element(div, "form", NO_ATTRS)?;
    dom.append_text(form, "in div")?;
    dom.append_text(div, "b")?;

    let root = dom
        .node(div)
        .ok_or_else(|| anyhow!("appended div is missing"))?;
    assert_eq!(inner_text(&root), "a\nin div\nb");
    Ok(())
}

#[test]
fn hidden_embed_still_renders() -> Result<()> {
    init_logging();
    let mut dom = Dom::new();
    let span = dom.append_element(dom.root_id(), "span", NO_ATTRS)?;
    dom.append_text(span, "a ")?;
    let embed = dom.append_element(span, "embed", [("hidden", "")])?;
    dom.append_text(embed, "fallback")?;
    let input = dom.append_element(span, "input", [("type", "HIDDEN")])?;
    dom.append_text(input, "never")?;
    dom.append_text(span, " b")?;

    let root = dom
        .node(span)
        .ok_or_else(|| anyhow!("appended span is missing"))?;
    assert_eq!(inner_text(&root), "a fallback b");
    Ok(())
}

#[test]
fn children_of_text_nodes_are_ignored() -> Result<()> {
    init_logging();
    let mut dom = Dom::new();
    let div = dom.append_element(dom.root_id(), "div", NO_ATTRS)?;
    let text = dom.append_text(div, "shown")?;
    let stray = dom.append_element(text, "b", NO_ATTRS)?;
    dom.append_text(stray, "ignored")?;

    let root = dom
        .node(div)
        .ok_or_else(|| anyhow!("appended div is missing"))?;
    assert_eq!(inner_text(&root), "shown");
    Ok(())
}

#[test]
fn nesting_beyond_max_depth_is_dropped() -> Result<()> {
    init_logging();
    let mut dom = Dom::new();
    let top = dom.append_element(dom.root_id(), "div", NO_ATTRS)?;
    dom.append_text(top, "top")?;
    let mut parent = top;
    for _ in 0..600 {
        parent = dom.append_element(parent, "span", NO_ATTRS)?;
    }
    dom.append_text(parent, " deep")?;

    let root = dom
        .node(top)
        .ok_or_else(|| anyhow!("appended div is missing"))?;
    assert_eq!(inner_text(&root), "top");
    let generous = InnerTextOptions::default().with_max_depth(700);
    assert_eq!(inner_text_with(&root, &generous), "top deep");
    Ok(())
}

#[test]
fn collected_items_serialize_as_tagged_json() -> Result<()> {
    init_logging();
    let dom = parse_html("<div>A<br>B</div>")?;
    let items = collect_items(&first(&dom, "div")?, &InnerTextOptions::default());
    assert_eq!(
        serde_json::to_value(&items)?,
        json!([
            { "type": "block_start" },
            { "type": "required_break", "value": 1 },
            { "type": "text", "value": "A" },
            { "type": "block_start" },
            { "type": "text", "value": "\n" },
            { "type": "block_end" },
            { "type": "text", "value": "B" },
            { "type": "required_break", "value": 1 },
            { "type": "block_end" },
        ])
    );
    Ok(())
}
