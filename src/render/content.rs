//! Render content primitives: the inline and block elements of a page body.

use serde::{Deserialize, Serialize};

use super::references::RenderReferenceIdentifier;

/// An inline element of render content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderInlineContent {
    Text {
        text: String,
    },
    Emphasis {
        #[serde(rename = "inlineContent")]
        inline_content: Vec<RenderInlineContent>,
    },
    Strong {
        #[serde(rename = "inlineContent")]
        inline_content: Vec<RenderInlineContent>,
    },
    CodeVoice {
        code: String,
    },
    Image {
        identifier: RenderReferenceIdentifier,
    },
    /// A reference to another page or an external link, pointing into the
    /// enclosing node's references table.
    #[serde(rename_all = "camelCase")]
    Reference {
        identifier: RenderReferenceIdentifier,
        is_active: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        overriding_title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        overriding_title_inline_content: Option<Vec<RenderInlineContent>>,
    },
}

impl RenderInlineContent {
    pub fn text(text: impl Into<String>) -> Self {
        RenderInlineContent::Text { text: text.into() }
    }

    pub fn code_voice(code: impl Into<String>) -> Self {
        RenderInlineContent::CodeVoice { code: code.into() }
    }

    /// The reference identifier this element points at, if it is a
    /// reference or image.
    pub fn reference_identifier(&self) -> Option<&RenderReferenceIdentifier> {
        match self {
            RenderInlineContent::Reference { identifier, .. }
            | RenderInlineContent::Image { identifier } => Some(identifier),
            _ => None,
        }
    }
}

/// The callout style of a rendered aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderAsideStyle {
    Note,
    Important,
    Warning,
    Experiment,
    Tip,
}

/// One item of a rendered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderListItem {
    pub content: Vec<RenderBlockContent>,
}

/// A block element of render content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderBlockContent {
    #[serde(rename_all = "camelCase")]
    Paragraph {
        inline_content: Vec<RenderInlineContent>,
    },
    #[serde(rename_all = "camelCase")]
    Heading {
        level: u8,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        anchor: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    CodeListing {
        #[serde(skip_serializing_if = "Option::is_none")]
        syntax: Option<String>,
        code: Vec<String>,
    },
    Aside {
        style: RenderAsideStyle,
        content: Vec<RenderBlockContent>,
    },
    OrderedList {
        items: Vec<RenderListItem>,
    },
    UnorderedList {
        items: Vec<RenderListItem>,
    },
    /// One step of a tutorial, bundling body, caption, media, a code
    /// reference and an optional runtime preview.
    #[serde(rename_all = "camelCase")]
    Step {
        content: Vec<RenderBlockContent>,
        caption: Vec<RenderBlockContent>,
        #[serde(skip_serializing_if = "Option::is_none")]
        media: Option<RenderReferenceIdentifier>,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<RenderReferenceIdentifier>,
        #[serde(skip_serializing_if = "Option::is_none")]
        runtime_preview: Option<RenderReferenceIdentifier>,
    },
}

impl RenderBlockContent {
    pub fn paragraph(inline_content: Vec<RenderInlineContent>) -> Self {
        RenderBlockContent::Paragraph { inline_content }
    }
}

/// The inline content of the first paragraph in a block sequence.
///
/// Used to inline a page's abstract into a call-to-action.
pub fn first_paragraph(blocks: &[RenderBlockContent]) -> Vec<RenderInlineContent> {
    blocks
        .iter()
        .find_map(|block| match block {
            RenderBlockContent::Paragraph { inline_content } => Some(inline_content.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Every reference identifier mentioned anywhere in a block sequence.
pub fn collect_reference_identifiers(
    blocks: &[RenderBlockContent],
    into: &mut Vec<RenderReferenceIdentifier>,
) {
    fn walk_inline(inline: &RenderInlineContent, into: &mut Vec<RenderReferenceIdentifier>) {
        match inline {
            RenderInlineContent::Reference { identifier, .. }
            | RenderInlineContent::Image { identifier } => into.push(identifier.clone()),
            RenderInlineContent::Emphasis { inline_content }
            | RenderInlineContent::Strong { inline_content } => {
                for child in inline_content {
                    walk_inline(child, into);
                }
            }
            _ => {}
        }
    }

    for block in blocks {
        match block {
            RenderBlockContent::Paragraph { inline_content } => {
                for inline in inline_content {
                    walk_inline(inline, into);
                }
            }
            RenderBlockContent::Aside { content, .. } => {
                collect_reference_identifiers(content, into);
            }
            RenderBlockContent::OrderedList { items } | RenderBlockContent::UnorderedList { items } => {
                for item in items {
                    collect_reference_identifiers(&item.content, into);
                }
            }
            RenderBlockContent::Step { content, caption, media, code, runtime_preview } => {
                collect_reference_identifiers(content, into);
                collect_reference_identifiers(caption, into);
                into.extend(media.iter().cloned());
                into.extend(code.iter().cloned());
                into.extend(runtime_preview.iter().cloned());
            }
            RenderBlockContent::Heading { .. } | RenderBlockContent::CodeListing { .. } => {}
        }
    }
}
