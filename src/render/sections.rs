//! Render sections: the page-kind-specific building blocks of a node's
//! section list.

use serde::{Deserialize, Serialize};

use super::content::{RenderBlockContent, RenderInlineContent};
use super::references::RenderReferenceIdentifier;

/// The hero introduction of a tutorial, tutorial article or technology.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroRenderSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RenderBlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RenderReferenceIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<RenderReferenceIdentifier>,
    /// The intro backdrop: the video's poster when a video is attached,
    /// otherwise the image itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<RenderReferenceIdentifier>,
    /// A link into the content, e.g. "Get started" on a technology page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RenderInlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_in_minutes: Option<u32>,
    /// The name of the chapter the page belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xcode_requirement: Option<RenderReferenceIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_files: Option<RenderReferenceIdentifier>,
}

impl IntroRenderSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }
}

/// One chapter of a volume, with its tutorial references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRenderSection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RenderBlockContent>,
    pub tutorials: Vec<RenderReferenceIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RenderReferenceIdentifier>,
}

/// A volume of chapters on a technology page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRenderSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RenderReferenceIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<RenderBlockContent>>,
    pub chapters: Vec<ChapterRenderSection>,
}

/// The layout of a content-and-media pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentAndMediaLayout {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaPlacement {
    Leading,
    Trailing,
}

/// Prose paired with one media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAndMediaSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<ContentAndMediaLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RenderBlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<RenderReferenceIdentifier>,
    pub media_position: MediaPlacement,
}

/// One rendered tutorial section with its positional anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTutorialSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<RenderBlockContent>,
    /// The on-page fragment this section is reachable under. Assigned by
    /// positional correspondence with the page's landmark children.
    pub anchor: String,
}

/// The ordered tutorial sections of a tutorial page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialSectionsRenderSection {
    pub tasks: Vec<RenderTutorialSection>,
}

/// One answer choice of a rendered assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderChoice {
    pub content: Vec<RenderBlockContent>,
    pub is_correct: bool,
    pub justification: Vec<RenderBlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
}

/// One rendered multiple-choice assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderAssessment {
    pub title: Vec<RenderBlockContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RenderBlockContent>,
    pub choices: Vec<RenderChoice>,
}

/// The assessments quiz of a tutorial page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentsRenderSection {
    pub assessments: Vec<RenderAssessment>,
    pub anchor: String,
}

/// The anchor every assessments section renders under.
pub const ASSESSMENTS_ANCHOR: &str = "Check-Your-Understanding";

/// A teaser pointing at the next tutorial or article in a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToActionSection {
    pub title: String,
    #[serde(rename = "abstract", default, skip_serializing_if = "Vec::is_empty")]
    pub abstract_content: Vec<RenderInlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<RenderReferenceIdentifier>,
    pub action: RenderInlineContent,
    pub featured_eyebrow: String,
}

/// One tile of a resources section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTile {
    pub identifier: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RenderBlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RenderInlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<RenderReferenceIdentifier>,
}

/// The resources section of a technology page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesRenderSection {
    pub tiles: Vec<RenderTile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RenderBlockContent>,
}

/// A layout element of tutorial-article style body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentLayout {
    #[serde(rename_all = "camelCase")]
    FullWidth { content: Vec<RenderBlockContent> },
    #[serde(rename_all = "camelCase")]
    ContentAndMedia { content: ContentAndMediaSection },
    #[serde(rename_all = "camelCase")]
    Columns { content: Vec<ContentAndMediaSection> },
}

/// The body of a tutorial article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialArticleSection {
    pub content: Vec<ContentLayout>,
}

/// A titled run of block content, e.g. a symbol's discussion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRenderSection {
    pub kind: ContentSectionKind,
    pub content: Vec<RenderBlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSectionKind {
    Content,
    Declarations,
    Parameters,
    Returns,
}

/// A curated group of topic identifiers under a page.
///
/// Groups whose identifier list ends up empty are never rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroupRenderSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_content: Option<Vec<RenderInlineContent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion: Option<ContentRenderSection>,
    pub identifiers: Vec<String>,
    /// Whether the group was generated by automatic curation rather than
    /// authored.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub generated: bool,
}

/// A rendered group of symbol relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipsRenderSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub identifiers: Vec<String>,
}

/// A section of a tutorial-style page's section list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderSection {
    Hero(IntroRenderSection),
    Volume(VolumeRenderSection),
    Tasks(TutorialSectionsRenderSection),
    Assessments(AssessmentsRenderSection),
    CallToAction(CallToActionSection),
    Resources(ResourcesRenderSection),
    ArticleBody(TutorialArticleSection),
}
