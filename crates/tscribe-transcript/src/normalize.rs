//! Caption flattening and text normalization.

use tscribe_models::CaptionEvent;

/// Flatten caption events into one raw string.
///
/// Events without segments (position-only markers) are discarded. Each
/// retained event's segment texts are joined with single spaces, then the
/// events themselves are joined with single spaces.
pub fn flatten_events(events: &[CaptionEvent]) -> String {
    events
        .iter()
        .filter_map(|event| event.segs.as_ref())
        .map(|segs| {
            segs.iter()
                .filter_map(|seg| seg.utf8.as_deref())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize flattened caption text.
///
/// Applied in order: strip the zero-width characters U+200B..=U+200D and
/// U+FEFF, then collapse every whitespace run to a single ASCII space.
/// Idempotent.
pub fn normalize_text(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}'))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
