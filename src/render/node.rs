//! The render node: one translated page, ready for serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::content::{RenderBlockContent, RenderInlineContent};
use super::metadata::{RenderHierarchy, RenderMetadata, RenderVariant};
use super::references::RenderReference;
use super::sections::{
    ContentRenderSection, RelationshipsRenderSection, RenderSection, TaskGroupRenderSection,
};
use crate::semantic::ResolvedTopicReference;

/// The kind of a render node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderNodeKind {
    Symbol,
    Article,
    Tutorial,
    Overview,
}

/// A translated documentation page.
///
/// The node is denormalized: everything the presentation layer needs to
/// draw the page, including every referenced asset, link and topic, is
/// contained in the node itself. Content never embeds another page's data
/// directly; it embeds a reference identifier that keys into
/// [`references`](Self::references).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub identifier: ResolvedTopicReference,
    pub kind: RenderNodeKind,
    pub metadata: RenderMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<RenderHierarchy>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Vec::is_empty")]
    pub abstract_content: Vec<RenderInlineContent>,
    /// Tutorial-style page sections, in presentation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<RenderSection>,
    /// Reference-style primary content, e.g. declaration and discussion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_content_sections: Vec<ContentRenderSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic_sections: Vec<TaskGroupRenderSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationship_sections: Vec<RelationshipsRenderSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_implementation_sections: Vec<TaskGroupRenderSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub see_also_sections: Vec<TaskGroupRenderSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_summary: Option<Vec<RenderBlockContent>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<RenderVariant>,
    /// Everything the page depends on, keyed by reference identifier.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub references: BTreeMap<String, RenderReference>,
}

impl RenderNode {
    /// An empty node for the given page and kind.
    pub fn new(identifier: ResolvedTopicReference, kind: RenderNodeKind) -> Self {
        Self {
            identifier,
            kind,
            metadata: RenderMetadata::default(),
            hierarchy: None,
            abstract_content: Vec::new(),
            sections: Vec::new(),
            primary_content_sections: Vec::new(),
            topic_sections: Vec::new(),
            relationship_sections: Vec::new(),
            default_implementation_sections: Vec::new(),
            see_also_sections: Vec::new(),
            deprecation_summary: None,
            variants: Vec::new(),
            references: BTreeMap::new(),
        }
    }
}
