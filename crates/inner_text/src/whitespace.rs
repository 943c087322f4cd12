//! CSS white-space processing of a single merged text run.
//! Spec: CSS Text 3, §4.1.1 Phase I: Collapsing and Transformation
//!   <https://drafts.csswg.org/css-text/#white-space-rules>
//!
//! A run is everything between two block boundaries or forced breaks, so spaces at either end
//! can never sit next to more inline content and are trimmed outright.

const SEGMENT_BREAK: char = '\n';
const ZERO_WIDTH_SPACE: char = '\u{200B}';

#[inline]
fn is_space_tab(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// A CRLF pair is one segment break, whatever the source line endings were.
fn normalize_newlines(run: &str) -> String {
    run.replace("\r\n", "\n")
}

/// Spaces and tabs immediately preceding or following a segment break are removed.
fn strip_around_segment_breaks(run: &str) -> String {
    let mut out = String::with_capacity(run.len());
    let mut pending = String::new();
    let mut after_break = false;
    for ch in run.chars() {
        if ch == SEGMENT_BREAK {
            pending.clear();
            out.push(ch);
            after_break = true;
        } else if is_space_tab(ch) {
            if !after_break {
                pending.push(ch);
            }
        } else {
            out.push_str(&pending);
            pending.clear();
            out.push(ch);
            after_break = false;
        }
    }
    out.push_str(&pending);
    out
}

/// A segment break immediately following another one is removed.
fn collapse_segment_breaks(run: &str) -> String {
    let mut out = String::with_capacity(run.len());
    for ch in run.chars() {
        if ch == SEGMENT_BREAK && out.ends_with(SEGMENT_BREAK) {
            continue;
        }
        out.push(ch);
    }
    out
}

/// A segment break next to a zero-width space is removed, keeping the zero-width space.
fn remove_breaks_at_zero_width_space(run: &str) -> String {
    let mut out = String::with_capacity(run.len());
    let mut chars = run.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == SEGMENT_BREAK
            && (out.ends_with(ZERO_WIDTH_SPACE) || chars.peek() == Some(&ZERO_WIDTH_SPACE))
        {
            continue;
        }
        out.push(ch);
    }
    out
}

/// A space immediately following another space is removed.
fn collapse_spaces(run: &str) -> String {
    let mut out = String::with_capacity(run.len());
    for ch in run.chars() {
        if ch == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Apply white-space collapsing to one run of text.
///
/// Idempotent: the result contains no line feeds or tabs, no doubled spaces, and no
/// leading or trailing space. Non-breaking spaces are not collapsible and survive.
pub fn normalize_whitespace(run: &str) -> String {
    let lines = normalize_newlines(run);
    let stripped = strip_around_segment_breaks(&lines);
    let single_breaks = collapse_segment_breaks(&stripped);
    let without_zwsp_breaks = remove_breaks_at_zero_width_space(&single_breaks);
    // Remaining segment breaks and every tab become spaces.
    let spaced = without_zwsp_breaks.replace([SEGMENT_BREAK, '\t'], " ");
    collapse_spaces(&spaced).trim_matches(' ').to_owned()
}

/// Text in a preformatted context only has its line endings unified.
pub fn normalize_preformatted(run: &str) -> String {
    normalize_newlines(run)
}
