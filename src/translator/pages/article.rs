//! Translates a free-form article page into a render node.

use std::collections::HashSet;

use super::super::curation;
use super::super::hierarchy::reference_hierarchy;
use super::super::RenderNodeTranslator;
use crate::context::PathOptions;
use crate::render::{
    ContentRenderSection, ContentSectionKind, RenderBlockContent, RenderInlineContent,
    RenderModule, RenderNode, RenderNodeKind, RenderVariant, TaskGroupRenderSection,
    VariantTrait,
};
use crate::semantic::{Article, PositionPreference, ResolvedTopicReference, Semantic};
use crate::Result;

pub(crate) fn translate(
    article: &Article,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<RenderNode> {
    let mut node = RenderNode::new(translator.identifier.clone(), RenderNodeKind::Article);
    let mut compiler = translator.content_compiler();

    node.metadata.title = Some(article.title.clone());

    // Detect the article's modules from its breadcrumbs.
    let modules = breadcrumb_modules(translator);
    if !modules.is_empty() {
        node.metadata.modules = modules
            .into_iter()
            .map(|name| RenderModule { name, related_modules: None })
            .collect();
    }

    let entity_kind = translator.context.entity(&translator.identifier)?.kind;

    node.hierarchy = reference_hierarchy(translator);

    // The article presents in the language of the symbol that curated it.
    if let Some(language) = translator.context.interface_language_for(&translator.identifier) {
        node.variants = vec![RenderVariant {
            traits: vec![VariantTrait::InterfaceLanguage(language.id)],
            paths: vec![translator.identifier.presentation_path()],
        }];
    }

    node.abstract_content = match &article.abstract_section {
        Some(abstract_section) => translator.visit_markup_sequence(abstract_section),
        None => vec![RenderInlineContent::text("No overview available.")],
    };

    if let Some(discussion) = &article.discussion {
        let discussion_content = translator.visit_markup_container(discussion);
        // Articles get a hardcoded overview heading unless the discussion
        // already opens with one.
        let heading = match discussion_content.first() {
            Some(RenderBlockContent::Heading { .. }) => None,
            _ => Some("Overview".to_string()),
        };
        node.primary_content_sections.push(ContentRenderSection {
            kind: ContentSectionKind::Content,
            content: discussion_content,
            heading,
        });
    }

    // Topic sections assemble in a fixed order: authored task groups,
    // "top" automatic groups, by-kind fallback curation, "bottom"
    // automatic groups.
    if let Some(topics) = &article.topics {
        if !topics.task_groups.is_empty() {
            node.topic_sections.extend(curation::render_groups(
                translator,
                &mut compiler,
                topics,
                false,
            ));
        }
    }

    if !article.automatic_task_groups.is_empty() {
        node.topic_sections.extend(curation::render_automatic_task_groups(
            &mut compiler,
            &article.automatic_task_groups,
            PositionPreference::Top,
        ));
    }

    let has_authored_topics = article
        .topics
        .as_ref()
        .map(|topics| !topics.task_groups.is_empty())
        .unwrap_or(false);
    if !has_authored_topics && article.automatic_task_groups.is_empty() {
        let already_curated: HashSet<String> = node
            .topic_sections
            .iter()
            .flat_map(|section| section.identifiers.iter().cloned())
            .collect();
        for (title, references) in curation::automatic_curation_groups(translator, &already_curated)
        {
            compiler
                .collected_topic_references
                .extend(references.iter().cloned());
            node.topic_sections.push(TaskGroupRenderSection {
                title: Some(title),
                abstract_content: None,
                discussion: None,
                identifiers: references
                    .iter()
                    .map(ResolvedTopicReference::absolute_string)
                    .collect(),
                generated: false,
            });
        }
    }

    if !article.automatic_task_groups.is_empty() {
        node.topic_sections.extend(curation::render_automatic_task_groups(
            &mut compiler,
            &article.automatic_task_groups,
            PositionPreference::Bottom,
        ));
    }

    if node.topic_sections.is_empty() {
        // Collections and groups carry no eyebrow; plain articles do.
        node.metadata.role_heading = Some("Article".to_string());
    }
    node.metadata.role = Some(translator.renderer.role_for_article(article, entity_kind));

    // Authored See Also, then the generated sibling group.
    if let Some(see_also) = &article.see_also {
        if !see_also.task_groups.is_empty() {
            node.see_also_sections.extend(curation::render_groups(
                translator,
                &mut compiler,
                see_also,
                true,
            ));
        }
    }

    let already_listed: HashSet<String> = node
        .see_also_sections
        .iter()
        .flat_map(|section| section.identifiers.iter().cloned())
        .collect();
    if let Some((title, references)) = curation::automatic_see_also(translator, &already_listed) {
        compiler
            .collected_topic_references
            .extend(references.iter().cloned());
        node.see_also_sections.push(TaskGroupRenderSection {
            title: Some(title),
            abstract_content: None,
            discussion: None,
            identifiers: references
                .iter()
                .map(ResolvedTopicReference::absolute_string)
                .collect(),
            generated: true,
        });
    }

    translator.merge_compiler(compiler);
    node.references = translator.create_topic_render_references();
    translator.merge_reference_tables(&mut node);

    Ok(node)
}

/// The modules of the symbols found along the article's breadcrumbs,
/// deduplicated, in breadcrumb order.
fn breadcrumb_modules(translator: &RenderNodeTranslator<'_>) -> Vec<String> {
    let graph = translator.context;
    let paths = graph.paths_to(&translator.identifier, PathOptions::default());

    let mut seen = HashSet::new();
    let mut modules = Vec::new();
    for path in paths {
        let module = path.iter().find_map(|ancestor| {
            let entity = graph.entity(ancestor).ok()?;
            match &entity.semantic {
                Semantic::Symbol(symbol) => symbol.module_name.clone(),
                _ => None,
            }
        });
        if let Some(module) = module {
            if seen.insert(module.clone()) {
                modules.push(module);
            }
        }
    }
    modules
}
