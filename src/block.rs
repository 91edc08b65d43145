use crate::span::Span;

/// Structural role of a raw block, decided by [`crate::parser::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Block-level elements parsed from Markdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Span>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    Quote {
        content: Vec<Span>,
    },
    /// Fenced code, kept verbatim apart from leading whitespace.
    CodeBlock {
        content: String,
    },
    List(List),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::Quote { .. } => BlockKind::Quote,
            Block::CodeBlock { .. } => BlockKind::Code,
            Block::List(List { ordered: true, .. }) => BlockKind::OrderedList,
            Block::List(List { ordered: false, .. }) => BlockKind::UnorderedList,
        }
    }
}
