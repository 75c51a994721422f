//! Parsed markup content, the input side of the translation.
//!
//! Markup parsing itself happens upstream; these types describe the
//! already-parsed tree the translator walks. Block and inline elements
//! intentionally mirror what the render content model can express.

use url::Url;

/// A block-level markup element.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockMarkup {
    Paragraph(Vec<InlineMarkup>),
    Heading { level: u8, text: String },
    CodeListing { syntax: Option<String>, code: String },
    Aside { style: AsideStyle, content: Vec<BlockMarkup> },
    OrderedList(Vec<Vec<BlockMarkup>>),
    UnorderedList(Vec<Vec<BlockMarkup>>),
}

/// The kind of callout an aside renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsideStyle {
    Note,
    Important,
    Warning,
    Experiment,
    Tip,
}

impl AsideStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            AsideStyle::Note => "Note",
            AsideStyle::Important => "Important",
            AsideStyle::Warning => "Warning",
            AsideStyle::Experiment => "Experiment",
            AsideStyle::Tip => "Tip",
        }
    }
}

/// An inline markup element.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineMarkup {
    Text(String),
    Emphasis(Vec<InlineMarkup>),
    Strong(Vec<InlineMarkup>),
    CodeVoice(String),
    /// An inline image, referring to a bundle asset by logical name.
    Image { source: String, alt_text: Option<String> },
    /// A link with an optional authored title overriding the target's.
    Link { destination: Url, title: Option<String> },
    /// A link to a symbol by its path, e.g. `SlothCreator/Sloth/eat(_:)`.
    SymbolLink { destination: String },
}

impl InlineMarkup {
    pub fn text(text: impl Into<String>) -> Self {
        InlineMarkup::Text(text.into())
    }

    /// The plain-text rendition of this element, links flattened to their
    /// titles and images dropped.
    pub fn plain_text(&self) -> String {
        match self {
            InlineMarkup::Text(text) => text.clone(),
            InlineMarkup::Emphasis(children) | InlineMarkup::Strong(children) => {
                children.iter().map(InlineMarkup::plain_text).collect()
            }
            InlineMarkup::CodeVoice(code) => code.clone(),
            InlineMarkup::Image { .. } => String::new(),
            InlineMarkup::Link { destination, title } => {
                title.clone().unwrap_or_else(|| destination.to_string())
            }
            InlineMarkup::SymbolLink { destination } => destination.clone(),
        }
    }
}

/// A container of block-level markup, e.g. the body of a section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupContainer(pub Vec<BlockMarkup>);

impl MarkupContainer {
    pub fn new(elements: Vec<BlockMarkup>) -> Self {
        Self(elements)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A container holding a single paragraph of plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self(vec![BlockMarkup::Paragraph(vec![InlineMarkup::text(text)])])
    }
}
