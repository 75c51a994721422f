//! Reference records: everything a render node depends on, keyed by a
//! stable identifier.
//!
//! Each record's identifier is both its key in the node's references table
//! and the string embedded in render content that points at it.

use serde::{Deserialize, Serialize};
use url::Url;

use super::content::RenderInlineContent;
use crate::context::DataAsset;

/// The stable identifier of a render reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderReferenceIdentifier(pub String);

impl RenderReferenceIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The sentinel identifier returned when an asset cannot be resolved.
    /// Callers must tolerate it pointing at nothing.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// The identifier used for an external link reference.
    pub fn for_external_link(url: &str) -> Self {
        Self(url.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A fully resolved reference to another documentation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRenderReference {
    pub identifier: RenderReferenceIdentifier,
    pub title: String,
    /// The presentation URL of the target page.
    pub url: String,
    #[serde(rename = "abstract", default, skip_serializing_if = "Vec::is_empty")]
    pub abstract_content: Vec<RenderInlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Conformance constraints decorating the target, attached after
    /// base resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conformance: Option<ConformanceSection>,
}

/// The constraints under which a symbol relationship holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConformanceSection {
    pub availability_prefix: String,
    pub conformance_prefix: String,
    pub constraints: Vec<RenderInlineContent>,
}

/// An image reference with its resolved asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub identifier: RenderReferenceIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    pub asset: DataAsset,
}

/// A video reference with its resolved asset and optional poster image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReference {
    pub identifier: RenderReferenceIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    pub asset: DataAsset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<RenderReferenceIdentifier>,
}

/// A code file shown alongside tutorial steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub identifier: RenderReferenceIdentifier,
    pub file_name: String,
    pub file_type: String,
    pub syntax: String,
    /// The file contents, split into lines.
    pub content: Vec<String>,
}

/// A link reference, typically external.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReference {
    pub identifier: RenderReferenceIdentifier,
    pub title: String,
    pub title_inline_content: Vec<RenderInlineContent>,
    pub url: String,
}

/// A downloadable file with its content checksum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadReference {
    pub identifier: RenderReferenceIdentifier,
    pub url: Url,
    pub sha512_checksum: String,
}

/// A development-environment requirement, e.g. a minimum Xcode version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XcodeRequirementReference {
    pub identifier: RenderReferenceIdentifier,
    pub title: String,
    pub url: Url,
}

/// Any record of a render node's references table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderReference {
    Topic(TopicRenderReference),
    /// A page reference that could not be resolved; presented with its
    /// best-known fallback title.
    #[serde(rename_all = "camelCase")]
    Unresolvable {
        identifier: RenderReferenceIdentifier,
        title: String,
    },
    Image(ImageReference),
    Video(VideoReference),
    File(FileReference),
    Link(LinkReference),
    Download(DownloadReference),
    XcodeRequirement(XcodeRequirementReference),
}

impl RenderReference {
    /// The identifier doubling as this record's references-table key.
    pub fn identifier(&self) -> &RenderReferenceIdentifier {
        match self {
            RenderReference::Topic(reference) => &reference.identifier,
            RenderReference::Unresolvable { identifier, .. } => identifier,
            RenderReference::Image(reference) => &reference.identifier,
            RenderReference::Video(reference) => &reference.identifier,
            RenderReference::File(reference) => &reference.identifier,
            RenderReference::Link(reference) => &reference.identifier,
            RenderReference::Download(reference) => &reference.identifier,
            RenderReference::XcodeRequirement(reference) => &reference.identifier,
        }
    }
}

impl From<TopicRenderReference> for RenderReference {
    fn from(reference: TopicRenderReference) -> Self {
        RenderReference::Topic(reference)
    }
}

impl From<ImageReference> for RenderReference {
    fn from(reference: ImageReference) -> Self {
        RenderReference::Image(reference)
    }
}

impl From<VideoReference> for RenderReference {
    fn from(reference: VideoReference) -> Self {
        RenderReference::Video(reference)
    }
}

impl From<FileReference> for RenderReference {
    fn from(reference: FileReference) -> Self {
        RenderReference::File(reference)
    }
}

impl From<LinkReference> for RenderReference {
    fn from(reference: LinkReference) -> Self {
        RenderReference::Link(reference)
    }
}

impl From<DownloadReference> for RenderReference {
    fn from(reference: DownloadReference) -> Self {
        RenderReference::Download(reference)
    }
}

impl From<XcodeRequirementReference> for RenderReference {
    fn from(reference: XcodeRequirementReference) -> Self {
        RenderReference::XcodeRequirement(reference)
    }
}
