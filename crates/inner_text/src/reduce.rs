//! Final reduction of the root's item list into a string (innerText getter steps 3 to 6).

use crate::item::Item;
use core::iter;
use core::num::NonZeroUsize;

/// Turn a collected item list into the inner text.
///
/// Empty text and block markers carry nothing and are dropped first, so they neither
/// separate break runs nor count as content. Breaks leading or trailing the remaining list
/// are discarded; every other run of breaks becomes `max(n)` line feeds.
pub fn reduce(items: Vec<Item>) -> String {
    let significant: Vec<Item> = items
        .into_iter()
        .filter(|item| match item {
            Item::Text(text) => !text.is_empty(),
            Item::RequiredBreak(_) => true,
            Item::BlockStart | Item::BlockEnd => false,
        })
        .collect();

    let start = significant
        .iter()
        .position(|item| !item.is_break())
        .unwrap_or(significant.len());
    let end = significant
        .iter()
        .rposition(|item| !item.is_break())
        .map_or(start, |last| last.saturating_add(1));

    let mut out = String::new();
    let mut breaks: Option<NonZeroUsize> = None;
    for item in significant.get(start..end).unwrap_or_default() {
        match item {
            Item::RequiredBreak(count) => {
                breaks = Some(breaks.map_or(*count, |current| current.max(*count)));
            }
            Item::Text(text) => {
                if let Some(count) = breaks.take() {
                    out.extend(iter::repeat_n('\n', count.get()));
                }
                out.push_str(text);
            }
            Item::BlockStart | Item::BlockEnd => {}
        }
    }
    out
}
