//! Locating the embedded player-response blob in watch-page HTML.
//!
//! The blob is found by a text boundary heuristic rather than structural
//! HTML parsing, which is inherently fragile against upstream markup
//! changes. The heuristic lives behind [`PlayerLocator`] so it can be
//! swapped without touching the pipeline.

use std::sync::OnceLock;

use regex::Regex;

/// Strategy for finding the `ytInitialPlayerResponse` JSON text in a page.
pub trait PlayerLocator: Send + Sync {
    /// Return the JSON substring of the player response, or `None` when the
    /// page does not contain one.
    fn locate<'a>(&self, html: &'a str) -> Option<&'a str>;
}

/// Production locator: matches `ytInitialPlayerResponse = { ... } ;`
/// terminated by the first following `var meta`/`var head` declaration,
/// `</script` close, or newline.
///
/// The payload itself may contain semicolons and nested braces, so a naive
/// greedy match or brace counter would over- or under-capture; anchoring on
/// the first terminator after the opening brace is what the page format
/// actually guarantees today.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptBoundaryLocator;

fn boundary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?s)ytInitialPlayerResponse\s*=\s*(\{.+?\})\s*;\s*(?:var\s+(?:meta|head)|</script|\n)",
        )
        .expect("player boundary pattern is valid")
    })
}

impl PlayerLocator for ScriptBoundaryLocator {
    fn locate<'a>(&self, html: &'a str) -> Option<&'a str> {
        boundary_pattern()
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
