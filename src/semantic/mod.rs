//! The semantic model: parsed, validated documentation content.
//!
//! [`Semantic`] is the closed set of node kinds the translator can
//! receive. Top-level page kinds (symbol, article, tutorial, tutorial
//! article, technology) translate into whole render nodes; the remaining
//! variants are substructures reached while walking a page.
//!
//! All values here are immutable input. The translator never mutates
//! them, it only produces render output and side tables from them.

mod markup;
mod reference;

pub use markup::{AsideStyle, BlockMarkup, InlineMarkup, MarkupContainer};
pub use reference::{
    ConstraintKind, GenericConstraint, ResolvedTopicReference, ResourceReference, SourceLanguage,
    TOPIC_URL_SCHEME, TopicReference, UnresolvedTopicReference, url_has_topic_scheme,
};

use std::collections::HashMap;

use url::Url;

/// A semantic value of any kind.
///
/// The variant set is closed: the dispatcher matches exhaustively over it,
/// so adding a variant forces a new translator arm at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Semantic {
    Symbol(Box<Symbol>),
    Article(Box<Article>),
    TutorialArticle(Box<TutorialArticle>),
    Tutorial(Box<Tutorial>),
    Technology(Box<Technology>),
    Volume(Volume),
    Chapter(Chapter),
    Intro(Intro),
    ContentAndMedia(ContentAndMedia),
    Step(Step),
    Steps(Steps),
    TutorialSection(TutorialSection),
    Assessments(Assessments),
    MultipleChoice(MultipleChoice),
    Choice(Choice),
    Justification(Justification),
    Tile(Tile),
    Resources(Resources),
    Stack(Stack),
    ImageMedia(ImageMedia),
    VideoMedia(VideoMedia),
    Code(Code),
    MarkupContainer(MarkupContainer),
    MarkupSequence(Vec<InlineMarkup>),
    TutorialReference(TutorialReference),
    ResolvedTopicReference(ResolvedTopicReference),
    Comment(Comment),
    DeprecationSummary(DeprecationSummary),
}

/// An image asset with optional alternative text.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMedia {
    pub source: ResourceReference,
    pub alt_text: Option<String>,
}

/// A video asset with an optional poster image.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMedia {
    pub source: ResourceReference,
    pub poster: Option<ResourceReference>,
}

/// Either an image or a video.
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image(ImageMedia),
    Video(VideoMedia),
}

/// The introduction of a tutorial, tutorial article, or technology page.
#[derive(Debug, Clone, PartialEq)]
pub struct Intro {
    pub title: String,
    pub content: MarkupContainer,
    pub image: Option<ImageMedia>,
    pub video: Option<VideoMedia>,
}

/// A reference from a chapter to a tutorial or tutorial article.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialReference {
    pub topic: TopicReference,
}

/// A chapter groups tutorials inside a volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub name: String,
    pub content: MarkupContainer,
    pub image: Option<ImageMedia>,
    pub topic_references: Vec<TutorialReference>,
}

/// A volume groups chapters inside a technology.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub name: Option<String>,
    pub image: Option<ImageMedia>,
    pub content: Option<MarkupContainer>,
    pub chapters: Vec<Chapter>,
}

/// How a content-and-media pair is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAndMediaLayout {
    Horizontal,
    Vertical,
}

/// Which side the media sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPosition {
    Leading,
    Trailing,
}

/// Prose paired with a single media item.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAndMedia {
    pub layout: Option<ContentAndMediaLayout>,
    pub title: Option<String>,
    pub eyebrow: Option<String>,
    pub content: MarkupContainer,
    pub media: Option<Media>,
    pub media_position: MediaPosition,
}

/// A horizontal stack of content-and-media groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub content_and_media: Vec<ContentAndMedia>,
}

/// A code file attached to a tutorial step.
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    /// The bundle file holding the code contents.
    pub file_reference: ResourceReference,
    /// The display name of the file, e.g. `"ContentView.swift"`.
    pub file_name: String,
    /// An optional preview asset showing the result of running the code.
    pub preview: Option<Media>,
}

/// One step of a tutorial section.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub content: MarkupContainer,
    pub caption: MarkupContainer,
    pub media: Option<Media>,
    pub code: Option<Code>,
}

/// An element of a steps container: a step or free-form markup between steps.
#[derive(Debug, Clone, PartialEq)]
pub enum StepsItem {
    Step(Step),
    Markup(BlockMarkup),
}

/// The ordered steps of a tutorial section.
#[derive(Debug, Clone, PartialEq)]
pub struct Steps {
    pub content: Vec<StepsItem>,
}

/// A layout element of tutorial-article style content.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupLayout {
    Markup(MarkupContainer),
    ContentAndMedia(ContentAndMedia),
    Stack(Stack),
}

/// One titled section of a tutorial, with introduction and steps.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialSection {
    pub title: String,
    pub introduction: Vec<MarkupLayout>,
    pub steps: Option<Steps>,
}

/// The justification shown after answering an assessment choice.
#[derive(Debug, Clone, PartialEq)]
pub struct Justification {
    pub content: MarkupContainer,
    pub reaction: Option<String>,
}

/// One possible answer of a multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub content: MarkupContainer,
    pub is_correct: bool,
    pub justification: Justification,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoice {
    pub question_phrasing: MarkupContainer,
    pub content: MarkupContainer,
    pub choices: Vec<Choice>,
}

/// The assessments quiz at the end of a tutorial.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessments {
    pub questions: Vec<MultipleChoice>,
}

/// The well-known tiles of a resources section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileIdentifier {
    Documentation,
    SampleCode,
    Downloads,
    Videos,
    Forums,
}

impl TileIdentifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileIdentifier::Documentation => "documentation",
            TileIdentifier::SampleCode => "sampleCode",
            TileIdentifier::Downloads => "downloads",
            TileIdentifier::Videos => "videos",
            TileIdentifier::Forums => "forums",
        }
    }

    /// The call-to-action title used when a tile link has no authored title.
    pub fn default_call_to_action(&self) -> &'static str {
        match self {
            TileIdentifier::Documentation => "View more",
            TileIdentifier::SampleCode => "View sample code",
            TileIdentifier::Downloads => "View downloads",
            TileIdentifier::Videos => "Watch videos",
            TileIdentifier::Forums => "View forums",
        }
    }
}

/// One tile of a resources section.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub identifier: TileIdentifier,
    pub title: String,
    pub destination: Option<Url>,
    pub content: MarkupContainer,
}

/// The resources section of a technology page.
#[derive(Debug, Clone, PartialEq)]
pub struct Resources {
    pub content: MarkupContainer,
    pub tiles: Vec<Tile>,
}

/// An environment requirement for following a tutorial.
#[derive(Debug, Clone, PartialEq)]
pub struct XcodeRequirement {
    pub title: String,
    pub destination: Url,
}

/// A full tutorial page.
#[derive(Debug, Clone, PartialEq)]
pub struct Tutorial {
    pub intro: Intro,
    pub duration_minutes: Option<u32>,
    pub requirements: Vec<XcodeRequirement>,
    /// A downloadable archive of the project files used in the tutorial.
    pub project_files: Option<ResourceReference>,
    pub sections: Vec<TutorialSection>,
    pub assessments: Option<Assessments>,
    pub call_to_action_image: Option<ImageMedia>,
}

/// A tutorial-style article page.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialArticle {
    pub title: Option<String>,
    pub intro: Option<Intro>,
    pub duration_minutes: Option<u32>,
    pub content: Vec<MarkupLayout>,
    pub assessments: Option<Assessments>,
    pub call_to_action_image: Option<ImageMedia>,
}

/// A technology overview page, the root of a tutorial hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    pub intro: Intro,
    pub volumes: Vec<Volume>,
    pub resources: Option<Resources>,
}

/// A link inside an authored task group.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskGroupLink {
    /// A general link; must use the documentation scheme unless external
    /// links are allowed in the enclosing section.
    Link(Url),
    /// A symbol link by path.
    SymbolLink(String),
}

/// One authored task group: a heading plus curated links.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskGroup {
    pub heading: Option<String>,
    pub abstract_content: Option<Vec<InlineMarkup>>,
    pub discussion: Option<MarkupContainer>,
    pub links: Vec<TaskGroupLink>,
}

/// An authored Topics or See Also section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedSection {
    pub task_groups: Vec<TaskGroup>,
}

/// Where an automatically generated task group renders relative to
/// by-kind automatic curation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionPreference {
    Top,
    Bottom,
}

/// A task group generated by an upstream phase rather than authored.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomaticTaskGroup {
    pub title: String,
    pub references: Vec<ResolvedTopicReference>,
    pub position: PositionPreference,
}

/// A free-form article page.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub abstract_section: Option<Vec<InlineMarkup>>,
    pub discussion: Option<MarkupContainer>,
    pub topics: Option<GroupedSection>,
    pub see_also: Option<GroupedSection>,
    pub automatic_task_groups: Vec<AutomaticTaskGroup>,
}

/// One fragment of a symbol declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationFragment {
    pub kind: FragmentKind,
    pub spelling: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Keyword,
    Identifier,
    TypeIdentifier,
    GenericParameter,
    Text,
}

/// A documented parameter of a function-like symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub content: MarkupContainer,
}

/// Platform availability of a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityItem {
    pub platform_name: String,
    pub introduced: Option<String>,
    pub deprecated: Option<String>,
    pub unconditionally_unavailable: bool,
}

/// The kind of a relationship group between symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    InheritsFrom,
    InheritedBy,
    ConformsTo,
    ConformingTypes,
}

impl RelationshipKind {
    /// The fixed order relationship sections render in.
    pub fn section_order(&self) -> u8 {
        match self {
            RelationshipKind::InheritsFrom => 1,
            RelationshipKind::InheritedBy => 2,
            RelationshipKind::ConformsTo => 3,
            RelationshipKind::ConformingTypes => 4,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            RelationshipKind::InheritsFrom => "Inherits From",
            RelationshipKind::InheritedBy => "Inherited By",
            RelationshipKind::ConformsTo => "Conforms To",
            RelationshipKind::ConformingTypes => "Conforming Types",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::InheritsFrom => "inheritsFrom",
            RelationshipKind::InheritedBy => "inheritedBy",
            RelationshipKind::ConformsTo => "conformsTo",
            RelationshipKind::ConformingTypes => "conformingTypes",
        }
    }
}

/// One group of related symbols, e.g. everything a protocol is adopted by.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipGroup {
    pub kind: RelationshipKind,
    pub destinations: Vec<TopicReference>,
}

/// All relationships of a symbol, with per-destination constraint and
/// fallback-title side tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationships {
    pub groups: Vec<RelationshipGroup>,
    pub constraints: HashMap<TopicReference, Vec<GenericConstraint>>,
    pub target_fallbacks: HashMap<TopicReference, String>,
}

/// One group of default implementations provided for a requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplementationGroup {
    pub heading: String,
    pub references: Vec<TopicReference>,
}

/// The default implementations attached to a protocol requirement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultImplementations {
    pub groups: Vec<ImplementationGroup>,
    pub target_fallbacks: HashMap<TopicReference, String>,
}

/// The origin a symbol's documentation was inherited from.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolOrigin {
    pub identifier: String,
    pub display_name: String,
}

/// A documented symbol page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Symbol {
    pub title: String,
    /// The symbol kind identifier with optional namespace, e.g.
    /// `"swift.struct"`.
    pub kind_identifier: String,
    pub role_heading: Option<String>,
    pub external_id: Option<String>,
    pub module_name: Option<String>,
    /// Modules that extend the symbol's module with this symbol.
    pub bystander_modules: Option<Vec<String>>,
    pub extended_module: Option<String>,
    pub is_required: bool,
    pub abstract_section: Option<Vec<InlineMarkup>>,
    pub discussion: Option<MarkupContainer>,
    pub declaration: Option<Vec<DeclarationFragment>>,
    pub sub_heading: Option<Vec<DeclarationFragment>>,
    pub navigator: Option<Vec<DeclarationFragment>>,
    pub parameters: Vec<Parameter>,
    pub returns: Option<MarkupContainer>,
    pub availability: Vec<AvailabilityItem>,
    pub relationships: Relationships,
    pub default_implementations: DefaultImplementations,
    pub topics: Option<GroupedSection>,
    pub see_also: Option<GroupedSection>,
    pub automatic_task_groups: Vec<AutomaticTaskGroup>,
    pub deprecated_summary: Option<MarkupContainer>,
    pub origin: Option<SymbolOrigin>,
}

/// An authored comment; never rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub text: String,
}

/// A deprecation-summary marker; folded into symbol pages, never rendered
/// on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DeprecationSummary {
    pub content: MarkupContainer,
}
