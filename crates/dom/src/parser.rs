//! HTML front end: html5ever parses into an `RcDom`, which is then copied into a [`Dom`].

use crate::tree::Dom;
use anyhow::{Context as _, Result};
use html5ever::tendril::TendrilSink as _;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use indextree::NodeId;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::fs;
use std::path::Path;

/// Copy the html5ever tree below `document` into `dom`.
///
/// Uses an explicit work stack so arbitrarily deep markup cannot overflow the native stack.
/// Whitespace-only text is kept since it takes part in white-space processing later on.
fn walk_tree(document: &Handle, dom: &mut Dom) -> Result<()> {
    let mut pending: Vec<(Handle, NodeId)> = document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (Handle::clone(child), dom.root_id()))
        .collect();

    while let Some((handle, parent)) = pending.pop() {
        let node = match &handle.data {
            NodeData::Element { name, attrs, .. } => {
                let attrs_vec: Vec<(String, String)> = attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                dom.append_element(parent, &name.local, attrs_vec)?
            }
            NodeData::Text { contents } => dom.append_text(parent, contents.borrow().to_string())?,
            NodeData::Comment { contents } => dom.append_comment(parent, contents.to_string())?,
            // Doctypes and processing instructions carry nothing renderable.
            NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
                continue;
            }
        };
        pending.extend(
            handle
                .children
                .borrow()
                .iter()
                .rev()
                .map(|child| (Handle::clone(child), node)),
        );
    }
    Ok(())
}

/// Parse an HTML document.
///
/// The parser is error tolerant, so any input produces a tree; `<template>` contents stay
/// detached, as they are in a browser DOM.
///
/// # Errors
/// Returns an error if the html5ever sink fails to read the input or the tree cannot be built.
pub fn parse_html(html: &str) -> Result<Dom> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false,
            ..TreeBuilderOpts::default()
        },
        ..ParseOpts::default()
    };

    let rc_dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .context("html5ever failed to read input")?;

    let mut dom = Dom::new();
    walk_tree(&rc_dom.document, &mut dom)?;
    debug!(target: "dom", "parsed {} bytes into {} nodes", html.len(), dom.node_count());
    Ok(dom)
}

/// Read and parse an HTML file.
///
/// # Errors
/// Returns an error if the file cannot be read as UTF-8 or parsing fails.
pub fn parse_html_file(path: &Path) -> Result<Dom> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_html(&html)
}
