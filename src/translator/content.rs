//! The markup-to-render compiler.
//!
//! Converts parsed markup into render content primitives, discovering
//! topic, link and image references as a side effect of each visit. A
//! compiler is constructed fresh wherever isolation between sections is
//! needed; the caller merges its side tables back into the translation
//! afterward and must never drop them.

use tracing::debug;

use super::media::MediaRegistrar;
use super::state::ReferenceTables;
use crate::context::{AssetContext, BundleInfo, PrerenderedCache, ResolutionResult, TopicGraph};
use crate::render::{
    LinkReference, RenderAsideStyle, RenderBlockContent, RenderInlineContent, RenderListItem,
    RenderReferenceIdentifier,
};
use crate::semantic::{
    AsideStyle, BlockMarkup, InlineMarkup, MarkupContainer, ResolvedTopicReference,
    ResourceReference, TopicReference, UnresolvedTopicReference, url_has_topic_scheme,
};
use crate::util::url_readable_fragment;

/// Compiles markup into render content while collecting the references
/// the content mentions.
pub struct RenderContentCompiler<'a> {
    context: &'a dyn TopicGraph,
    bundle: &'a BundleInfo,
    prerendered: Option<&'a dyn PrerenderedCache>,
    identifier: ResolvedTopicReference,
    /// Resolved topic references discovered while compiling.
    pub collected_topic_references: Vec<ResolvedTopicReference>,
    /// Reference tables populated while compiling (images and links).
    pub tables: ReferenceTables,
}

impl<'a> RenderContentCompiler<'a> {
    pub fn new(
        context: &'a dyn TopicGraph,
        bundle: &'a BundleInfo,
        prerendered: Option<&'a dyn PrerenderedCache>,
        identifier: ResolvedTopicReference,
    ) -> Self {
        Self {
            context,
            bundle,
            prerendered,
            identifier,
            collected_topic_references: Vec::new(),
            tables: ReferenceTables::default(),
        }
    }

    /// Compiles a block container into render block content.
    pub fn visit_container(&mut self, container: &MarkupContainer) -> Vec<RenderBlockContent> {
        container
            .0
            .iter()
            .flat_map(|block| self.visit_block(block))
            .collect()
    }

    /// Compiles one block element. Degenerate elements produce no output.
    pub fn visit_block(&mut self, block: &BlockMarkup) -> Vec<RenderBlockContent> {
        match block {
            BlockMarkup::Paragraph(inlines) => {
                vec![RenderBlockContent::paragraph(self.visit_inlines(inlines))]
            }
            BlockMarkup::Heading { level, text } => vec![RenderBlockContent::Heading {
                level: *level,
                text: text.clone(),
                anchor: Some(url_readable_fragment(text)),
            }],
            BlockMarkup::CodeListing { syntax, code } => vec![RenderBlockContent::CodeListing {
                syntax: syntax.clone(),
                code: crate::util::split_lines(code),
            }],
            BlockMarkup::Aside { style, content } => {
                let content = content.iter().flat_map(|block| self.visit_block(block)).collect();
                vec![RenderBlockContent::Aside {
                    style: aside_style(*style),
                    content,
                }]
            }
            BlockMarkup::OrderedList(items) => vec![RenderBlockContent::OrderedList {
                items: self.visit_list_items(items),
            }],
            BlockMarkup::UnorderedList(items) => vec![RenderBlockContent::UnorderedList {
                items: self.visit_list_items(items),
            }],
        }
    }

    /// Compiles a sequence of inline elements.
    pub fn visit_inlines(&mut self, inlines: &[InlineMarkup]) -> Vec<RenderInlineContent> {
        inlines
            .iter()
            .flat_map(|inline| self.visit_inline(inline))
            .collect()
    }

    /// Compiles one inline element. Images that resolve to no asset are
    /// dropped.
    pub fn visit_inline(&mut self, inline: &InlineMarkup) -> Vec<RenderInlineContent> {
        match inline {
            InlineMarkup::Text(text) => vec![RenderInlineContent::text(text)],
            InlineMarkup::Emphasis(children) => vec![RenderInlineContent::Emphasis {
                inline_content: self.visit_inlines(children),
            }],
            InlineMarkup::Strong(children) => vec![RenderInlineContent::Strong {
                inline_content: self.visit_inlines(children),
            }],
            InlineMarkup::CodeVoice(code) => vec![RenderInlineContent::code_voice(code)],
            InlineMarkup::Image { source, alt_text } => {
                let media = ResourceReference::new(&self.bundle.identifier, source);
                let registrar = MediaRegistrar {
                    context: self.context,
                    bundle: self.bundle,
                    prerendered: self.prerendered,
                    data_provider: None,
                    identifier: &self.identifier,
                };
                let identifier = registrar.register(
                    &mut self.tables,
                    Some(&media),
                    None,
                    alt_text.as_deref(),
                    AssetContext::Display,
                );
                if identifier.is_empty() {
                    Vec::new()
                } else {
                    vec![RenderInlineContent::Image { identifier }]
                }
            }
            InlineMarkup::Link { destination, title } => {
                vec![self.visit_link(destination, title.as_deref())]
            }
            InlineMarkup::SymbolLink { destination } => vec![self.visit_symbol_link(destination)],
        }
    }

    /// Compiles a link, resolving it through the topic graph.
    ///
    /// Resolved links are collected for later materialization. Links
    /// outside the documentation scheme become external link references,
    /// deduplicated by identifier with the first-seen title kept.
    /// Unresolvable documentation links render inactive, as plain text.
    pub fn visit_link(
        &mut self,
        link: &url::Url,
        overriding_title: Option<&str>,
    ) -> RenderInlineContent {
        let overriding_title_inline_content =
            overriding_title.map(|title| vec![RenderInlineContent::text(title)]);

        let unresolved = UnresolvedTopicReference::new(link.clone());
        match self
            .context
            .resolve(&TopicReference::Unresolved(unresolved), &self.bundle.root_reference)
        {
            ResolutionResult::Resolved(resolved) => {
                let identifier = RenderReferenceIdentifier::new(resolved.absolute_string());
                self.collected_topic_references.push(resolved);
                RenderInlineContent::Reference {
                    identifier,
                    is_active: true,
                    overriding_title: overriding_title.map(str::to_string),
                    overriding_title_inline_content,
                }
            }
            ResolutionResult::Unresolved(_) if !url_has_topic_scheme(link) => {
                let identifier = RenderReferenceIdentifier::for_external_link(link.as_str());
                if self.tables.links.contains_key(identifier.as_str()) {
                    // Already seen: reuse the reference, keep the override.
                    RenderInlineContent::Reference {
                        identifier,
                        is_active: true,
                        overriding_title: overriding_title.map(str::to_string),
                        overriding_title_inline_content,
                    }
                } else {
                    let title = overriding_title
                        .map(str::to_string)
                        .unwrap_or_else(|| link.to_string());
                    let title_inline_content = overriding_title_inline_content
                        .unwrap_or_else(|| vec![RenderInlineContent::text(link.to_string())]);
                    self.tables.links.insert(
                        identifier.as_str().to_string(),
                        LinkReference {
                            identifier: identifier.clone(),
                            title,
                            title_inline_content,
                            url: link.to_string(),
                        },
                    );
                    RenderInlineContent::Reference {
                        identifier,
                        is_active: true,
                        overriding_title: None,
                        overriding_title_inline_content: None,
                    }
                }
            }
            ResolutionResult::Unresolved(_) => {
                // An unresolvable documentation link could break routing
                // downstream; render it inactive as plain text.
                debug!(link = %link, "unresolvable documentation link rendered as text");
                RenderInlineContent::text(link.path())
            }
        }
    }

    /// Compiles a symbol link. Unresolvable symbol paths render inactive,
    /// in code voice.
    pub fn visit_symbol_link(&mut self, destination: &str) -> RenderInlineContent {
        let topic_url = format!(
            "{}://{}/{}",
            crate::semantic::TOPIC_URL_SCHEME,
            self.bundle.identifier,
            destination.trim_start_matches('/')
        );
        let resolution = url::Url::parse(&topic_url).ok().map(|url| {
            self.context.resolve(
                &TopicReference::Unresolved(UnresolvedTopicReference::new(url)),
                &self.bundle.root_reference,
            )
        });

        match resolution {
            Some(ResolutionResult::Resolved(resolved)) => {
                let identifier = RenderReferenceIdentifier::new(resolved.absolute_string());
                self.collected_topic_references.push(resolved);
                RenderInlineContent::Reference {
                    identifier,
                    is_active: true,
                    overriding_title: None,
                    overriding_title_inline_content: None,
                }
            }
            _ => {
                debug!(symbol = destination, "unresolvable symbol link rendered as code voice");
                RenderInlineContent::code_voice(destination)
            }
        }
    }

    fn visit_list_items(&mut self, items: &[Vec<BlockMarkup>]) -> Vec<RenderListItem> {
        items
            .iter()
            .map(|item| RenderListItem {
                content: item.iter().flat_map(|block| self.visit_block(block)).collect(),
            })
            .collect()
    }
}

fn aside_style(style: AsideStyle) -> RenderAsideStyle {
    match style {
        AsideStyle::Note => RenderAsideStyle::Note,
        AsideStyle::Important => RenderAsideStyle::Important,
        AsideStyle::Warning => RenderAsideStyle::Warning,
        AsideStyle::Experiment => RenderAsideStyle::Experiment,
        AsideStyle::Tip => RenderAsideStyle::Tip,
    }
}
