/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    /// Emphasized text. Content is kept raw; nothing inside the markers
    /// is processed further.
    Bold(String),
    /// One of the recognized detail labels ("Group Size:", "Trip Type:", ...),
    /// label text included verbatim.
    KeyDetail(String),
}

/// A single bullet item
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// Block-level elements converted from plan text
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { content: Vec<Span> },
    List { items: Vec<ListItem> },
}
