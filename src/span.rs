/// Inline text spans produced by the inline tokenizer.
///
/// Only links and images carry a destination, so the URL lives inside those
/// variants instead of being an optional field on every span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// The kind of a [`Span`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl Span {
    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Text(_) => SpanKind::Text,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// The visible text of the span. For images this is the alt text.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// The href/src target for links and images.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl SpanKind {
    /// Build a span of this kind around `text`.
    ///
    /// Links and images need a destination; a missing one becomes an empty URL.
    pub fn wrap(self, text: String, destination: Option<String>) -> Span {
        let url = destination.unwrap_or_default();
        match self {
            SpanKind::Text => Span::Text(text),
            SpanKind::Bold => Span::Bold(text),
            SpanKind::Italic => Span::Italic(text),
            SpanKind::Code => Span::Code(text),
            SpanKind::Link => Span::Link { text, url },
            SpanKind::Image => Span::Image { alt: text, url },
        }
    }
}
