//! The translation engine: a visitor that converts semantic values into
//! render-tree values.
//!
//! [`RenderNodeTranslator`] is created once per page, exclusively owns
//! that page's translation state (collected references, constraint map,
//! reference tables), and is threaded by mutable borrow through every
//! nested translator call. Translation is lossy: source markup syntax is
//! not recoverable from the produced render node.

mod availability;
mod content;
mod curation;
mod hierarchy;
mod media;
mod pages;
mod references;
mod state;
mod tutorials;

pub use content::RenderContentCompiler;
pub use state::ReferenceTables;

use std::collections::HashMap;

use crate::Result;
use crate::context::{
    AssetContext, BundleInfo, ContentRenderer, DataProvider, PrerenderedCache, TopicGraph,
};
use crate::render::{
    AvailabilityRenderItem, RenderBlockContent, RenderInlineContent, RenderNode,
    RenderReferenceIdentifier, RenderTree,
};
use crate::semantic::{
    GenericConstraint, ResolvedTopicReference, ResourceReference, Semantic, TopicReference,
    UnresolvedTopicReference,
};

/// A visitor which converts a semantic value into its render-tree
/// equivalent.
///
/// The dispatcher carries no assembly logic of its own:
/// [`visit`](RenderNodeTranslator::visit) matches on the concrete variant
/// and routes to exactly one translator. The match is exhaustive over the
/// closed variant set, so an unhandled variant is a compile error rather
/// than a runtime condition.
pub struct RenderNodeTranslator<'a> {
    pub(crate) context: &'a dyn TopicGraph,
    pub(crate) bundle: &'a BundleInfo,
    pub(crate) data_provider: &'a dyn DataProvider,
    pub(crate) prerendered: Option<&'a dyn PrerenderedCache>,
    pub(crate) renderer: &'a dyn ContentRenderer,
    /// The page being translated.
    pub(crate) identifier: ResolvedTopicReference,

    /// Resolved topic references seen during the walk, in discovery order,
    /// duplicates allowed. Materialized into the references table at the
    /// end of the page translation.
    pub(crate) collected_topic_references: Vec<ResolvedTopicReference>,
    /// Topic references that could not be resolved inside the bundle.
    pub(crate) collected_unresolved_references: Vec<UnresolvedTopicReference>,
    /// Generic constraints collected per relationship destination.
    pub(crate) collected_constraints: HashMap<TopicReference, Vec<GenericConstraint>>,
    /// The typed reference tables of this pass.
    pub(crate) tables: ReferenceTables,
    /// Default-availability rows cached per bundle module.
    pub(crate) bundle_availability: HashMap<String, Vec<AvailabilityRenderItem>>,
}

impl<'a> RenderNodeTranslator<'a> {
    /// Creates a translator for one page.
    pub fn new(
        context: &'a dyn TopicGraph,
        bundle: &'a BundleInfo,
        identifier: ResolvedTopicReference,
        data_provider: &'a dyn DataProvider,
        prerendered: Option<&'a dyn PrerenderedCache>,
        renderer: &'a dyn ContentRenderer,
    ) -> Self {
        Self {
            context,
            bundle,
            data_provider,
            prerendered,
            renderer,
            identifier,
            collected_topic_references: Vec::new(),
            collected_unresolved_references: Vec::new(),
            collected_constraints: HashMap::new(),
            tables: ReferenceTables::default(),
            bundle_availability: HashMap::new(),
        }
    }

    /// The page this translator renders.
    pub fn identifier(&self) -> &ResolvedTopicReference {
        &self.identifier
    }

    /// The typed reference tables accumulated so far.
    pub fn reference_tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// The topic references collected so far, in discovery order.
    pub fn collected_topic_references(&self) -> &[ResolvedTopicReference] {
        &self.collected_topic_references
    }

    /// Translates a semantic value of any kind.
    ///
    /// Returns `Ok(None)` for values that never materialize (comments,
    /// deprecation-summary markers, chapters without tutorials) and for
    /// uncurated tutorial-type pages. Errors indicate upstream invariant
    /// violations and terminate the page translation.
    pub fn visit(&mut self, semantic: &Semantic) -> Result<Option<RenderTree>> {
        match semantic {
            Semantic::Symbol(symbol) => pages::symbol::translate(symbol, self)
                .map(|node| Some(RenderTree::Node(Box::new(node)))),
            Semantic::Article(article) => pages::article::translate(article, self)
                .map(|node| Some(RenderTree::Node(Box::new(node)))),
            Semantic::Tutorial(tutorial) => pages::tutorial::translate(tutorial, self)
                .map(|node| node.map(|node| RenderTree::Node(Box::new(node)))),
            Semantic::TutorialArticle(article) => pages::tutorial_article::translate(article, self)
                .map(|node| node.map(|node| RenderTree::Node(Box::new(node)))),
            Semantic::Technology(technology) => pages::technology::translate(technology, self)
                .map(|node| Some(RenderTree::Node(Box::new(node)))),
            Semantic::Volume(volume) => {
                Ok(Some(RenderTree::Volume(tutorials::translate_volume(volume, self))))
            }
            Semantic::Chapter(chapter) => {
                Ok(tutorials::translate_chapter(chapter, self).map(RenderTree::Chapter))
            }
            Semantic::Intro(intro) => {
                Ok(Some(RenderTree::Intro(tutorials::translate_intro(intro, self))))
            }
            Semantic::ContentAndMedia(content_and_media) => Ok(Some(RenderTree::ContentAndMedia(
                tutorials::translate_content_and_media(content_and_media, self),
            ))),
            Semantic::Step(step) => {
                Ok(Some(RenderTree::Blocks(tutorials::translate_step(step, self))))
            }
            Semantic::Steps(steps) => {
                Ok(Some(RenderTree::Blocks(tutorials::translate_steps(steps, self))))
            }
            Semantic::TutorialSection(section) => Ok(Some(RenderTree::TutorialSection(
                tutorials::translate_tutorial_section(section, self),
            ))),
            Semantic::Assessments(assessments) => Ok(Some(RenderTree::Assessments(
                tutorials::translate_assessments(assessments, self),
            ))),
            Semantic::MultipleChoice(question) => Ok(Some(RenderTree::Assessment(
                tutorials::translate_multiple_choice(question, self),
            ))),
            Semantic::Choice(choice) => {
                Ok(Some(RenderTree::Choice(tutorials::translate_choice(choice, self))))
            }
            Semantic::Justification(justification) => Ok(Some(RenderTree::Blocks(
                tutorials::translate_justification(justification, self),
            ))),
            Semantic::Tile(tile) => {
                Ok(Some(RenderTree::Tile(tutorials::translate_tile(tile, self))))
            }
            Semantic::Resources(resources) => Ok(Some(RenderTree::Resources(
                tutorials::translate_resources(resources, self),
            ))),
            Semantic::Stack(stack) => {
                Ok(Some(RenderTree::Stack(tutorials::translate_stack(stack, self))))
            }
            Semantic::ImageMedia(image) => Ok(Some(RenderTree::Reference(
                tutorials::translate_image_media(image, self),
            ))),
            Semantic::VideoMedia(video) => Ok(Some(RenderTree::Reference(
                tutorials::translate_video_media(video, self),
            ))),
            Semantic::Code(code) => {
                Ok(Some(RenderTree::Reference(tutorials::translate_code(code, self))))
            }
            Semantic::MarkupContainer(container) => {
                Ok(Some(RenderTree::Blocks(self.visit_markup_container(container))))
            }
            Semantic::MarkupSequence(inlines) => {
                Ok(Some(RenderTree::Inlines(self.visit_markup_sequence(inlines))))
            }
            Semantic::TutorialReference(reference) => Ok(Some(RenderTree::Reference(
                tutorials::translate_tutorial_reference(reference, self),
            ))),
            Semantic::ResolvedTopicReference(reference) => Ok(Some(RenderTree::Reference(
                tutorials::translate_resolved_topic_reference(reference, self),
            ))),
            Semantic::Comment(_) => Ok(None),
            Semantic::DeprecationSummary(_) => Ok(None),
        }
    }

    /// A fresh content compiler scoped to this page.
    pub(crate) fn content_compiler(&self) -> RenderContentCompiler<'a> {
        RenderContentCompiler::new(
            self.context,
            self.bundle,
            self.prerendered,
            self.identifier.clone(),
        )
    }

    /// Folds a compiler's side tables back into the translation state.
    /// Every compiler constructed during a page walk must end up here.
    pub(crate) fn merge_compiler(&mut self, compiler: RenderContentCompiler<'_>) {
        self.collected_topic_references
            .extend(compiler.collected_topic_references);
        self.tables.merge(compiler.tables);
    }

    /// Compiles a block container, merging discovered references back
    /// into the translation state.
    pub(crate) fn visit_markup_container(
        &mut self,
        container: &crate::semantic::MarkupContainer,
    ) -> Vec<RenderBlockContent> {
        let mut compiler = self.content_compiler();
        let content = compiler.visit_container(container);
        self.merge_compiler(compiler);
        content
    }

    /// Compiles a sequence of inline markup, merging discovered references
    /// back into the translation state.
    pub(crate) fn visit_markup_sequence(
        &mut self,
        inlines: &[crate::semantic::InlineMarkup],
    ) -> Vec<RenderInlineContent> {
        let mut compiler = self.content_compiler();
        let content = compiler.visit_inlines(inlines);
        self.merge_compiler(compiler);
        content
    }

    /// Compiles a single link through a scoped compiler.
    pub(crate) fn visit_link(
        &mut self,
        link: &url::Url,
        default_title: Option<&str>,
    ) -> RenderInlineContent {
        let mut compiler = self.content_compiler();
        let action = compiler.visit_link(link, default_title);
        self.merge_compiler(compiler);
        action
    }

    /// Registers a media reference against this translation's tables.
    pub(crate) fn register_render_reference(
        &mut self,
        media: Option<&ResourceReference>,
        poster: Option<&ResourceReference>,
        alt_text: Option<&str>,
        asset_context: AssetContext,
    ) -> RenderReferenceIdentifier {
        let registrar = media::MediaRegistrar {
            context: self.context,
            bundle: self.bundle,
            prerendered: self.prerendered,
            data_provider: Some(self.data_provider),
            identifier: &self.identifier,
        };
        registrar.register(&mut self.tables, media, poster, alt_text, asset_context)
    }

    /// Merges every typed reference table into the node's references map.
    /// Called exactly once, at the end of a page translation.
    pub(crate) fn merge_reference_tables(&self, node: &mut RenderNode) {
        self.tables.drain_into(node);
    }
}

/// Translates one top-level page, returning its render node.
///
/// Returns `Ok(None)` when the page is an uncurated tutorial-type page or
/// a content kind that never materializes on its own.
pub fn translate_page(
    semantic: &Semantic,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<Option<RenderNode>> {
    Ok(translator.visit(semantic)?.and_then(RenderTree::into_node))
}
