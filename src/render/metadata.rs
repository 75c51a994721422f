//! Render node metadata: titles, roles, availability and presentation
//! variants.

use serde::{Deserialize, Serialize};

use super::references::ConformanceSection;

/// The presentation role of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Symbol,
    Article,
    CollectionGroup,
    Collection,
    Tutorial,
    Overview,
    SampleCode,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Symbol => "symbol",
            Role::Article => "article",
            Role::CollectionGroup => "collectionGroup",
            Role::Collection => "collection",
            Role::Tutorial => "tutorial",
            Role::Overview => "overview",
            Role::SampleCode => "sampleCode",
        }
    }
}

/// A module a symbol belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_modules: Option<Vec<String>>,
}

/// One platform row of a symbol's availability metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRenderItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduced_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_at: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_beta: bool,
}

/// A fragment of a rendered declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRenderFragment {
    pub kind: String,
    pub text: String,
}

/// A presentation tag attached to a page, e.g. "SPI".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTag {
    pub label: String,
}

/// The trait distinguishing one presentation variant from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantTrait {
    InterfaceLanguage(String),
}

/// One presentation variant of a page, e.g. its Swift rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderVariant {
    pub traits: Vec<VariantTrait>,
    pub paths: Vec<String>,
}

/// The breadcrumb hierarchy of a page: one or more root-to-page paths of
/// reference identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHierarchy {
    pub paths: Vec<Vec<String>>,
}

/// Metadata of a render node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The technology category a tutorial-type page belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_path_component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<RenderModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_module: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<AvailabilityRenderItem>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragments: Option<Vec<DeclarationRenderFragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigator_title: Option<Vec<DeclarationRenderFragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conformance: Option<ConformanceSection>,
    /// A formatted duration estimate, e.g. `"1hr 20min"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<RenderTag>,
}
