//! Collaborator interfaces the translator consumes.
//!
//! The translator never builds or mutates a topic graph, resolves links,
//! or reads bundles on its own; it queries these narrow seams. Real
//! implementations live upstream, test doubles live in the test suites.

mod asset;
mod bundle;
mod cache;
mod renderer;

pub use asset::{AssetContext, DataAsset, is_image_extension, is_video_extension};
pub use bundle::{BundleInfo, ModuleAvailability, PlatformVersion};
pub use cache::{PrerenderedCache, PrerenderedContent};
pub use renderer::{ContentRenderer, ReferenceDependencies};

use url::Url;

use crate::Result;
use crate::semantic::{
    ResolvedTopicReference, Semantic, SourceLanguage, TopicReference, UnresolvedTopicReference,
};

/// The kind of a node in the topic graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Module,
    Structure,
    Class,
    Enumeration,
    Protocol,
    TypeAlias,
    Function,
    Method,
    Property,
    Variable,
    Initializer,
    Case,
    Article,
    CollectionGroup,
    Tutorial,
    TutorialArticle,
    Technology,
    Volume,
    Chapter,
    /// A landmark inside a page, e.g. one rendered tutorial section.
    OnPageLandmark,
}

impl NodeKind {
    /// The plural title used when curating children of this kind into an
    /// automatic task group.
    pub fn group_title(&self) -> &'static str {
        match self {
            NodeKind::Module => "Modules",
            NodeKind::Structure => "Structures",
            NodeKind::Class => "Classes",
            NodeKind::Enumeration => "Enumerations",
            NodeKind::Protocol => "Protocols",
            NodeKind::TypeAlias => "Type Aliases",
            NodeKind::Function => "Functions",
            NodeKind::Method => "Methods",
            NodeKind::Property => "Properties",
            NodeKind::Variable => "Variables",
            NodeKind::Initializer => "Initializers",
            NodeKind::Case => "Enumeration Cases",
            NodeKind::Article => "Articles",
            NodeKind::CollectionGroup => "Topics",
            NodeKind::Tutorial => "Tutorials",
            NodeKind::TutorialArticle => "Articles",
            NodeKind::Technology => "Technologies",
            NodeKind::Volume => "Volumes",
            NodeKind::Chapter => "Chapters",
            NodeKind::OnPageLandmark => "Sections",
        }
    }

    /// The fixed order automatic task groups render in.
    pub(crate) fn curation_order(&self) -> usize {
        const ORDER: &[NodeKind] = &[
            NodeKind::Module,
            NodeKind::Class,
            NodeKind::Protocol,
            NodeKind::Structure,
            NodeKind::Enumeration,
            NodeKind::Case,
            NodeKind::Initializer,
            NodeKind::Property,
            NodeKind::Variable,
            NodeKind::Method,
            NodeKind::Function,
            NodeKind::TypeAlias,
            NodeKind::Article,
            NodeKind::CollectionGroup,
            NodeKind::Tutorial,
            NodeKind::TutorialArticle,
            NodeKind::Technology,
            NodeKind::Volume,
            NodeKind::Chapter,
            NodeKind::OnPageLandmark,
        ];
        ORDER.iter().position(|kind| kind == self).unwrap_or(ORDER.len())
    }

    /// Whether children of this kind take part in automatic curation.
    pub(crate) fn is_curatable(&self) -> bool {
        !matches!(self, NodeKind::OnPageLandmark | NodeKind::Volume | NodeKind::Chapter)
    }
}

/// One node of the topic graph: a reference plus its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicNode {
    pub reference: ResolvedTopicReference,
    pub kind: NodeKind,
}

/// A semantic value registered in the topic graph, with its graph kind and
/// the source languages it is available in.
#[derive(Debug, Clone)]
pub struct DocumentationEntity {
    pub semantic: Semantic,
    pub kind: NodeKind,
    pub available_source_languages: Vec<SourceLanguage>,
}

/// The signal a traversal callback returns for each visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Keep descending below this node.
    Continue,
    /// Do not descend below this node.
    Stop,
}

/// The outcome of resolving a topic reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionResult {
    Resolved(ResolvedTopicReference),
    Unresolved(UnresolvedTopicReference),
}

/// Options for breadcrumb path computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathOptions {
    /// Prefer paths that start at a technology root over shorter paths.
    pub prefer_technology_root: bool,
}

/// Read-only queries against the topic graph built by upstream phases.
///
/// Implementations may be shared by many concurrent page translations and
/// must therefore be immutable from the translator's point of view.
pub trait TopicGraph {
    /// Resolves a reference in the scope of a parent page.
    fn resolve(
        &self,
        reference: &TopicReference,
        in_scope: &ResolvedTopicReference,
    ) -> ResolutionResult;

    /// The entity registered for a resolved reference.
    ///
    /// Failing to find an entity for a reference this graph itself produced
    /// is an upstream invariant violation, reported as [`Error::NotFound`].
    ///
    /// [`Error::NotFound`]: crate::Error::NotFound
    fn entity(&self, reference: &ResolvedTopicReference) -> Result<&DocumentationEntity>;

    /// The children of a page, in curation order.
    fn children(&self, of: &ResolvedTopicReference) -> Vec<TopicNode>;

    /// The children of a page restricted to one kind.
    fn children_of_kind(&self, of: &ResolvedTopicReference, kind: NodeKind) -> Vec<TopicNode> {
        self.children(of)
            .into_iter()
            .filter(|child| child.kind == kind)
            .collect()
    }

    /// The parents a page is curated under.
    fn parents(&self, of: &ResolvedTopicReference) -> Vec<ResolvedTopicReference>;

    /// Visits nodes breadth-first starting below `from`, until the callback
    /// stops the descent or the graph is exhausted.
    fn traverse_breadth_first(
        &self,
        from: &ResolvedTopicReference,
        visit: &mut dyn FnMut(&TopicNode) -> Traversal,
    );

    /// All breadcrumb paths from a root to the given page, ordered from
    /// most-preferred to least. Paths contain the page's ancestors, root
    /// first, excluding the page itself; a page that is itself a root has
    /// a single empty path.
    fn paths_to(
        &self,
        reference: &ResolvedTopicReference,
        options: PathOptions,
    ) -> Vec<Vec<ResolvedTopicReference>>;

    /// The presentation title of a page, if known.
    fn title_for(&self, reference: &ResolvedTopicReference) -> Option<String>;

    /// The language of the symbol that curated the page, if any.
    fn interface_language_for(
        &self,
        reference: &ResolvedTopicReference,
    ) -> Option<SourceLanguage>;

    /// Canonicalizes a logical asset name in the scope of a page, returning
    /// the asset's registered path or `None` when the name is unknown.
    fn identifier_for_asset_name(
        &self,
        name: &str,
        in_scope: &ResolvedTopicReference,
    ) -> Option<String>;

    /// Resolves an asset path against the bundle's asset index.
    fn resolve_asset(&self, name: &str, in_scope: &ResolvedTopicReference) -> Option<DataAsset>;
}

/// Raw data access for bundle files.
pub trait DataProvider {
    /// Reads the raw bytes behind a resolved asset URL.
    fn contents_of_url(&self, url: &Url) -> std::io::Result<Vec<u8>>;
}
