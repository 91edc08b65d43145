use tracing::trace;

use crate::error::ParseError;
use crate::span::{Span, SpanKind};

/// An inline marker that wraps text in a typed span, e.g. `**bold**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

/// Delimiter passes, in the order they are applied.
///
/// Each pass only restructures spans still plain after the previous ones, so
/// emphasis does not nest.
pub const DELIMITERS: &[Delimiter] = &[
    Delimiter {
        marker: "**",
        kind: SpanKind::Bold,
    },
    Delimiter {
        marker: "_",
        kind: SpanKind::Italic,
    },
    Delimiter {
        marker: "`",
        kind: SpanKind::Code,
    },
];

/// Split one line of inline markdown into typed spans.
///
/// Images are extracted first, then links, then each delimiter in
/// [`DELIMITERS`]. Unbalanced link or image brackets are left as plain text,
/// an odd number of any delimiter is an error.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, ParseError> {
    let mut spans = Vec::new();
    if !text.is_empty() {
        spans.push(Span::Text(text.to_string()));
    }

    let spans = split_spans_link(split_spans_image(spans));

    DELIMITERS.iter().try_fold(spans, |spans, delimiter| {
        split_spans_delimiter(spans, delimiter.marker, delimiter.kind)
    })
}

/// Split every plain span on `delimiter`, alternating plain and `kind` spans.
///
/// Empty segments are dropped, so `**bold**` yields a single bold span.
pub fn split_spans_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, ParseError> {
    trace!(delimiter, ?kind, spans = spans.len(), "delimiter pass");

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let segments: Vec<&str> = text.split(delimiter).collect();
        // n delimiters give n + 1 segments
        if segments.len() % 2 == 0 {
            return Err(ParseError::UnterminatedInline { delimiter });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment = segment.to_string();
            if i % 2 == 0 {
                out.push(Span::Text(segment));
            } else {
                out.push(kind.wrap(segment, None));
            }
        }
    }
    Ok(out)
}

/// Replace `![alt](url)` inside plain spans with image spans.
pub fn split_spans_image(spans: Vec<Span>) -> Vec<Span> {
    split_spans_reference(spans, Reference::Image)
}

/// Replace `[text](url)` inside plain spans with link spans.
///
/// A bracket preceded by `!` is an image, not a link, so this must run after
/// [`split_spans_image`].
pub fn split_spans_link(spans: Vec<Span>) -> Vec<Span> {
    split_spans_reference(spans, Reference::Link)
}

/// All `(alt, url)` pairs of `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    extract(text, Reference::Image)
}

/// All `(text, url)` pairs of `[text](url)` in `text`, skipping images.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    extract(text, Reference::Link)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Image,
    Link,
}

impl Reference {
    fn span(self, label: &str, destination: &str) -> Span {
        match self {
            Reference::Image => Span::Image {
                alt: label.to_string(),
                url: destination.to_string(),
            },
            Reference::Link => Span::Link {
                text: label.to_string(),
                url: destination.to_string(),
            },
        }
    }
}

/// One matched reference, with byte offsets of the whole match.
struct Found<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    destination: &'a str,
}

fn extract(text: &str, reference: Reference) -> Vec<(&str, &str)> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(m) = find_reference(rest, reference) {
        found.push((m.label, m.destination));
        rest = &rest[m.end..];
    }
    found
}

fn split_spans_reference(spans: Vec<Span>, reference: Reference) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest = text.as_str();
        while let Some(m) = find_reference(rest, reference) {
            if m.start > 0 {
                out.push(Span::Text(rest[..m.start].to_string()));
            }
            out.push(reference.span(m.label, m.destination));
            rest = &rest[m.end..];
        }
        if !rest.is_empty() {
            out.push(Span::Text(rest.to_string()));
        }
    }
    out
}

/// Leftmost `[label](destination)` in `text` of the requested kind.
///
/// Images are the brackets directly preceded by `!`, links are all others.
fn find_reference(text: &str, reference: Reference) -> Option<Found<'_>> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(offset) = text[from..].find('[') {
        let open = from + offset;
        let bang = open > 0 && bytes[open - 1] == b'!';
        if bang == (reference == Reference::Image) {
            if let Some((end, label, destination)) = match_reference_at(text, open) {
                let start = if bang { open - 1 } else { open };
                return Some(Found {
                    start,
                    end,
                    label,
                    destination,
                });
            }
        }
        from = open + 1;
    }
    None
}

/// Match `[label](destination)` starting at the `[` at `open`.
///
/// The label may not contain brackets and the destination may not contain
/// parentheses. Returns the end offset, label and destination.
fn match_reference_at(text: &str, open: usize) -> Option<(usize, &str, &str)> {
    let bytes = text.as_bytes();

    let label_start = open + 1;
    let close = label_start
        + bytes[label_start..]
            .iter()
            .position(|&b| b == b'[' || b == b']')?;
    if bytes[close] != b']' || bytes.get(close + 1) != Some(&b'(') {
        return None;
    }

    let dest_start = close + 2;
    let dest_end = dest_start
        + bytes[dest_start..]
            .iter()
            .position(|&b| b == b'(' || b == b')')?;
    if bytes[dest_end] != b')' {
        return None;
    }

    Some((
        dest_end + 1,
        &text[label_start..close],
        &text[dest_start..dest_end],
    ))
}
