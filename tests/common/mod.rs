//! Shared in-memory collaborators for the integration suites.
//!
//! `TestGraph` implements the topic-graph queries over hand-built nodes
//! and edges; `TestProvider` serves asset bytes from a map; `TestRenderer`
//! resolves render references from registered titles.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use docbeam::context::{
    BundleInfo, ContentRenderer, DataAsset, DataProvider, DocumentationEntity, NodeKind,
    PathOptions, PrerenderedCache, PrerenderedContent, ReferenceDependencies, ResolutionResult,
    TopicGraph, TopicNode, Traversal,
};
use docbeam::render::{RenderReferenceIdentifier, TopicRenderReference};
use docbeam::semantic::{
    Chapter, ImageMedia, Intro, MarkupContainer, ResolvedTopicReference, ResourceReference,
    Semantic, SourceLanguage, Technology, TopicReference, Tutorial, TutorialReference,
    TutorialSection, Volume,
};
use docbeam::translator::RenderNodeTranslator;
use docbeam::url::Url;
use docbeam::{Error, Result};

pub const BUNDLE: &str = "org.example.docs";

/// A topic reference inside the test bundle.
pub fn topic(path: &str) -> ResolvedTopicReference {
    ResolvedTopicReference::new(BUNDLE, path)
}

/// A file URL for provider-backed asset bytes.
pub fn asset_url(name: &str) -> Url {
    Url::parse(&format!("file:///assets/{name}")).expect("valid asset URL")
}

/// An asset with a single variant served by the test provider.
pub fn asset(name: &str) -> DataAsset {
    DataAsset::single(asset_url(name))
}

/// An in-memory topic graph.
#[derive(Default)]
pub struct TestGraph {
    entities: HashMap<ResolvedTopicReference, DocumentationEntity>,
    children: HashMap<ResolvedTopicReference, Vec<TopicNode>>,
    parents: HashMap<ResolvedTopicReference, Vec<ResolvedTopicReference>>,
    titles: HashMap<ResolvedTopicReference, String>,
    interface_languages: HashMap<ResolvedTopicReference, SourceLanguage>,
    assets: HashMap<String, DataAsset>,
}

impl TestGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a page with its semantic value, graph kind and title.
    pub fn add_page(
        &mut self,
        reference: &ResolvedTopicReference,
        kind: NodeKind,
        semantic: Semantic,
        title: &str,
    ) {
        self.entities.insert(
            reference.clone(),
            DocumentationEntity {
                semantic,
                kind,
                available_source_languages: vec![SourceLanguage::swift()],
            },
        );
        self.titles.insert(reference.clone(), title.to_string());
    }

    pub fn set_languages(
        &mut self,
        reference: &ResolvedTopicReference,
        languages: Vec<SourceLanguage>,
    ) {
        self.entities
            .get_mut(reference)
            .expect("page registered before languages")
            .available_source_languages = languages;
    }

    pub fn set_interface_language(
        &mut self,
        reference: &ResolvedTopicReference,
        language: SourceLanguage,
    ) {
        self.interface_languages.insert(reference.clone(), language);
    }

    /// Adds a curation edge. The child must already be registered so its
    /// kind is known.
    pub fn add_edge(&mut self, parent: &ResolvedTopicReference, child: &ResolvedTopicReference) {
        let kind = self
            .entities
            .get(child)
            .expect("child registered before edge")
            .kind;
        self.children
            .entry(parent.clone())
            .or_default()
            .push(TopicNode { reference: child.clone(), kind });
        self.parents
            .entry(child.clone())
            .or_default()
            .push(parent.clone());
    }

    /// Registers an on-page landmark child carrying an anchor fragment.
    pub fn add_landmark(&mut self, page: &ResolvedTopicReference, fragment: &str) {
        let reference = page.with_fragment(fragment);
        self.children
            .entry(page.clone())
            .or_default()
            .push(TopicNode { reference, kind: NodeKind::OnPageLandmark });
    }

    pub fn add_asset(&mut self, path: &str, asset: DataAsset) {
        self.assets.insert(path.to_string(), asset);
    }

    fn all_paths_to(&self, reference: &ResolvedTopicReference) -> Vec<Vec<ResolvedTopicReference>> {
        match self.parents.get(reference) {
            None => vec![Vec::new()],
            Some(parents) if parents.is_empty() => vec![Vec::new()],
            Some(parents) => parents
                .iter()
                .flat_map(|parent| {
                    self.all_paths_to(parent).into_iter().map(|mut path| {
                        path.push(parent.clone());
                        path
                    })
                })
                .collect(),
        }
    }

    fn kind_of(&self, reference: &ResolvedTopicReference) -> Option<NodeKind> {
        self.entities.get(reference).map(|entity| entity.kind)
    }
}

impl TopicGraph for TestGraph {
    fn resolve(
        &self,
        reference: &TopicReference,
        _in_scope: &ResolvedTopicReference,
    ) -> ResolutionResult {
        match reference {
            TopicReference::Resolved(resolved) => ResolutionResult::Resolved(resolved.clone()),
            TopicReference::Unresolved(unresolved) => {
                let url = &unresolved.topic_url;
                if url.scheme() == "doc" {
                    if let Some(host) = url.host_str() {
                        let candidate = ResolvedTopicReference::new(host, url.path());
                        if self.entities.contains_key(&candidate) {
                            return ResolutionResult::Resolved(candidate);
                        }
                    }
                }
                ResolutionResult::Unresolved(unresolved.clone())
            }
        }
    }

    fn entity(&self, reference: &ResolvedTopicReference) -> Result<&DocumentationEntity> {
        self.entities
            .get(reference)
            .ok_or_else(|| Error::NotFound(reference.absolute_string()))
    }

    fn children(&self, of: &ResolvedTopicReference) -> Vec<TopicNode> {
        self.children.get(of).cloned().unwrap_or_default()
    }

    fn parents(&self, of: &ResolvedTopicReference) -> Vec<ResolvedTopicReference> {
        self.parents.get(of).cloned().unwrap_or_default()
    }

    fn traverse_breadth_first(
        &self,
        from: &ResolvedTopicReference,
        visit: &mut dyn FnMut(&TopicNode) -> Traversal,
    ) {
        let mut queue: VecDeque<TopicNode> = VecDeque::new();
        match self.kind_of(from) {
            Some(kind) => {
                let node = TopicNode { reference: from.clone(), kind };
                if visit(&node) == Traversal::Continue {
                    queue.extend(self.children(from));
                }
            }
            None => queue.extend(self.children(from)),
        }

        while let Some(node) = queue.pop_front() {
            if visit(&node) == Traversal::Continue {
                queue.extend(self.children(&node.reference));
            }
        }
    }

    fn paths_to(
        &self,
        reference: &ResolvedTopicReference,
        options: PathOptions,
    ) -> Vec<Vec<ResolvedTopicReference>> {
        let mut paths = self.all_paths_to(reference);
        paths.sort_by_key(|path| {
            let starts_at_technology = path
                .first()
                .and_then(|root| self.kind_of(root))
                .map(|kind| kind == NodeKind::Technology)
                .unwrap_or(false);
            let technology_rank = if options.prefer_technology_root && starts_at_technology {
                0
            } else {
                1
            };
            (technology_rank, path.len())
        });
        paths
    }

    fn title_for(&self, reference: &ResolvedTopicReference) -> Option<String> {
        self.titles.get(reference).cloned()
    }

    fn interface_language_for(
        &self,
        reference: &ResolvedTopicReference,
    ) -> Option<SourceLanguage> {
        self.interface_languages.get(reference).cloned()
    }

    fn identifier_for_asset_name(
        &self,
        name: &str,
        _in_scope: &ResolvedTopicReference,
    ) -> Option<String> {
        self.assets.contains_key(name).then(|| name.to_string())
    }

    fn resolve_asset(&self, name: &str, _in_scope: &ResolvedTopicReference) -> Option<DataAsset> {
        self.assets.get(name).cloned()
    }
}

/// Serves asset bytes from memory; URLs listed in `unreadable` fail with
/// an I/O error.
#[derive(Default)]
pub struct TestProvider {
    pub files: HashMap<Url, Vec<u8>>,
    pub unreadable: Vec<Url>,
}

impl TestProvider {
    pub fn add_file(&mut self, name: &str, bytes: &[u8]) {
        self.files.insert(asset_url(name), bytes.to_vec());
    }

    pub fn mark_unreadable(&mut self, name: &str) {
        self.unreadable.push(asset_url(name));
    }
}

impl DataProvider for TestProvider {
    fn contents_of_url(&self, url: &Url) -> std::io::Result<Vec<u8>> {
        if self.unreadable.contains(url) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("unreadable: {url}"),
            ));
        }
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, format!("missing: {url}")))
    }
}

/// Resolves render references from registered titles, with optional
/// injected dependencies per reference.
#[derive(Default)]
pub struct TestRenderer {
    pub titles: HashMap<String, String>,
    pub dependencies: HashMap<String, ReferenceDependencies>,
}

impl TestRenderer {
    pub fn set_title(&mut self, reference: &ResolvedTopicReference, title: &str) {
        self.titles
            .insert(reference.absolute_string(), title.to_string());
    }

    pub fn set_dependencies(
        &mut self,
        reference: &ResolvedTopicReference,
        dependencies: ReferenceDependencies,
    ) {
        self.dependencies
            .insert(reference.absolute_string(), dependencies);
    }
}

impl ContentRenderer for TestRenderer {
    fn render_reference(
        &self,
        reference: &ResolvedTopicReference,
        dependencies: &mut ReferenceDependencies,
    ) -> TopicRenderReference {
        let key = reference.absolute_string();
        if let Some(injected) = self.dependencies.get(&key) {
            dependencies.topic_references.extend(injected.topic_references.iter().cloned());
            dependencies.link_references.extend(injected.link_references.iter().cloned());
        }
        TopicRenderReference {
            identifier: RenderReferenceIdentifier::new(&key),
            title: self
                .titles
                .get(&key)
                .cloned()
                .unwrap_or_else(|| reference.last_path_component().to_string()),
            url: reference.presentation_path(),
            abstract_content: Vec::new(),
            role: None,
            kind: None,
            conformance: None,
        }
    }
}

/// A pre-rendered content cache backed by maps.
#[derive(Default)]
pub struct TestCache {
    pub content: HashMap<ResolvedTopicReference, PrerenderedContent>,
    pub assets: HashMap<String, DataAsset>,
}

impl PrerenderedCache for TestCache {
    fn content_for(&self, reference: &ResolvedTopicReference) -> Option<PrerenderedContent> {
        self.content.get(reference).cloned()
    }

    fn asset_named(&self, name: &str, _bundle_identifier: &str) -> Option<DataAsset> {
        self.assets.get(name).cloned()
    }
}

/// Everything a page translation needs, wired together.
#[derive(Default)]
pub struct TestBundle {
    pub graph: TestGraph,
    pub provider: TestProvider,
    pub renderer: TestRenderer,
    pub cache: Option<TestCache>,
    pub info: Option<BundleInfo>,
}

impl TestBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> BundleInfo {
        self.info
            .clone()
            .unwrap_or_else(|| BundleInfo::new(BUNDLE, "Example Docs"))
    }

    pub fn translator<'a>(
        &'a self,
        info: &'a BundleInfo,
        reference: ResolvedTopicReference,
    ) -> RenderNodeTranslator<'a> {
        RenderNodeTranslator::new(
            &self.graph,
            info,
            reference,
            &self.provider,
            self.cache.as_ref().map(|cache| cache as &dyn PrerenderedCache),
            &self.renderer,
        )
    }
}

/// A curated learning path: technology -> volume -> chapter -> three
/// tutorials, each with one section and a matching on-page landmark.
pub struct TutorialFixture {
    pub bundle: TestBundle,
    pub technology: ResolvedTopicReference,
    pub volume: ResolvedTopicReference,
    pub chapter: ResolvedTopicReference,
    pub tutorials: Vec<ResolvedTopicReference>,
}

pub fn tutorial_semantic(title: &str, minutes: u32, section_title: &str) -> Tutorial {
    Tutorial {
        intro: Intro {
            title: title.to_string(),
            content: MarkupContainer::paragraph(format!("Learn about {title}.")),
            image: None,
            video: None,
        },
        duration_minutes: Some(minutes),
        requirements: Vec::new(),
        project_files: None,
        sections: vec![TutorialSection {
            title: section_title.to_string(),
            introduction: Vec::new(),
            steps: None,
        }],
        assessments: None,
        call_to_action_image: None,
    }
}

pub fn tutorial_fixture() -> TutorialFixture {
    let mut bundle = TestBundle::new();

    let technology = topic("/tutorials/swiftui");
    let volume = topic("/tutorials/swiftui/volume-1");
    let chapter = topic("/tutorials/swiftui/chapter-1");
    let tutorials = vec![
        topic("/tutorials/swiftui/creating-views"),
        topic("/tutorials/swiftui/building-lists"),
        topic("/tutorials/swiftui/handling-input"),
    ];
    let titles = ["Creating Views", "Building Lists", "Handling Input"];
    let section_titles = ["Create the project", "Build the list", "Handle user input"];

    let chapter_semantic = Chapter {
        name: "Essentials".to_string(),
        content: MarkupContainer::paragraph("The essentials of the framework."),
        image: None,
        topic_references: tutorials
            .iter()
            .map(|tutorial| TutorialReference {
                topic: TopicReference::Resolved(tutorial.clone()),
            })
            .collect(),
    };
    let volume_semantic = Volume {
        name: Some("SwiftUI Essentials".to_string()),
        image: None,
        content: None,
        chapters: vec![chapter_semantic.clone()],
    };
    let technology_semantic = Technology {
        name: "SwiftUI".to_string(),
        intro: Intro {
            title: "Meet SwiftUI".to_string(),
            content: MarkupContainer::paragraph("Build declarative interfaces."),
            image: Some(ImageMedia {
                source: ResourceReference::new(BUNDLE, "intro.png"),
                alt_text: Some("SwiftUI hero".to_string()),
            }),
            video: None,
        },
        volumes: vec![volume_semantic.clone()],
        resources: None,
    };

    bundle.graph.add_page(
        &technology,
        NodeKind::Technology,
        Semantic::Technology(Box::new(technology_semantic)),
        "Meet SwiftUI",
    );
    bundle.graph.add_page(
        &volume,
        NodeKind::Volume,
        Semantic::Volume(volume_semantic),
        "SwiftUI Essentials",
    );
    bundle.graph.add_page(
        &chapter,
        NodeKind::Chapter,
        Semantic::Chapter(chapter_semantic),
        "Essentials",
    );
    for ((tutorial, title), section_title) in
        tutorials.iter().zip(titles).zip(section_titles)
    {
        bundle.graph.add_page(
            tutorial,
            NodeKind::Tutorial,
            Semantic::Tutorial(Box::new(tutorial_semantic(title, 25, section_title))),
            title,
        );
        bundle.renderer.set_title(tutorial, title);
    }

    bundle.graph.add_edge(&technology, &volume);
    bundle.graph.add_edge(&volume, &chapter);
    for tutorial in &tutorials {
        bundle.graph.add_edge(&chapter, tutorial);
    }
    for (tutorial, section_title) in tutorials.iter().zip(section_titles) {
        let fragment = section_title.replace(' ', "-");
        bundle.graph.add_landmark(tutorial, &fragment);
    }

    bundle.graph.add_asset("intro.png", asset("intro.png"));
    bundle.renderer.set_title(&technology, "Meet SwiftUI");
    bundle.renderer.set_title(&volume, "SwiftUI Essentials");
    bundle.renderer.set_title(&chapter, "Essentials");

    TutorialFixture {
        bundle,
        technology,
        volume,
        chapter,
        tutorials,
    }
}
