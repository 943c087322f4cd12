use core::fmt;

use super::tree::{Dom, NodeKind, NodeRef};

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{a0}' => out.push_str("\\u{a0}"),
            '\u{200b}' => out.push_str("\\u{200b}"),
            _ => out.push(ch),
        }
    }
    out
}

fn sorted_attrs(node: NodeRef<'_>) -> Vec<(&str, &str)> {
    let mut pairs: Vec<(&str, &str)> = node
        .attrs()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    pairs.sort_unstable_by(|left, right| left.0.cmp(right.0));
    pairs
}

fn node_to_json(node: NodeRef<'_>) -> Value {
    let children = || node.children().map(node_to_json).collect::<Vec<_>>();
    match node.kind() {
        NodeKind::Document => json!({ "type": "document", "children": children() }),
        NodeKind::Element { tag } => {
            let mut attrs_obj = Map::new();
            for (key, value) in sorted_attrs(node) {
                attrs_obj.insert(key.to_owned(), Value::String(value.to_owned()));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": children(),
            })
        }
        NodeKind::Text { text } => json!({ "type": "text", "text": text }),
        NodeKind::Comment { text } => json!({ "type": "comment", "text": text }),
    }
}

fn write_indent(formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        formatter.write_str("  ")?;
    }
    Ok(())
}

fn fmt_node(node: NodeRef<'_>, formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    write_indent(formatter, depth)?;
    match node.kind() {
        NodeKind::Document => writeln!(formatter, "#document")?,
        NodeKind::Element { tag } => {
            write!(formatter, "<{tag}")?;
            for (key, value) in sorted_attrs(node) {
                write!(formatter, " {key}=\"{}\"", escape_text(value))?;
            }
            writeln!(formatter, ">")?;
        }
        NodeKind::Text { text } => writeln!(formatter, "\"{}\"", escape_text(text))?,
        NodeKind::Comment { text } => writeln!(formatter, "<!--{}-->", escape_text(text))?,
    }
    for child in node.children() {
        fmt_node(child, formatter, depth.saturating_add(1))?;
    }
    if let NodeKind::Element { tag } = node.kind() {
        write_indent(formatter, depth)?;
        writeln!(formatter, "</{tag}>")?;
    }
    Ok(())
}

impl fmt::Debug for Dom {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "DOM")?;
        fmt_node(self.root(), formatter, 0)
    }
}

impl Dom {
    /// Build a deterministic JSON representation of the DOM.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Element: { "type":"element", "tag": "div", "attrs": {..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    /// - Comment: { "type":"comment", "text":"..." }
    pub fn to_json_value(&self) -> Value {
        node_to_json(self.root())
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_else(|_| String::from("{}"))
    }
}
