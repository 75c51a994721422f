//! Translates a technology overview page into a render node.

use super::super::hierarchy::technology_hierarchy;
use super::super::tutorials;
use super::super::RenderNodeTranslator;
use crate::context::{NodeKind, TopicNode, Traversal};
use crate::render::{RenderNode, RenderNodeKind, RenderSection};
use crate::semantic::{Semantic, Technology};
use crate::{Error, Result};

pub(crate) fn translate(
    technology: &Technology,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<RenderNode> {
    let mut node = RenderNode::new(translator.identifier.clone(), RenderNodeKind::Overview);

    node.metadata.title = Some(technology.intro.title.clone());
    node.metadata.category = Some(technology.name.clone());
    node.metadata.category_path_component =
        Some(translator.identifier.last_path_component().to_string());
    node.metadata.estimated_time = total_estimated_duration(translator);
    node.metadata.role = Some(translator.renderer.role(NodeKind::Technology));

    let mut intro = tutorials::translate_intro(&technology.intro, translator);
    if let Some(first_tutorial) = first_tutorial(translator) {
        if let Ok(url) = url::Url::parse(&first_tutorial.reference.absolute_string()) {
            intro.action = Some(translator.visit_link(&url, Some("Get started")));
        }
    }
    node.sections.push(RenderSection::Hero(intro));

    for volume in &technology.volumes {
        node.sections
            .push(RenderSection::Volume(tutorials::translate_volume(volume, translator)));
    }

    if let Some(resources) = &technology.resources {
        node.sections.push(RenderSection::Resources(
            tutorials::translate_resources(resources, translator),
        ));
    }

    // The overview's own breadcrumb path, without volume and chapter crumbs.
    let hierarchy = technology_hierarchy(translator, true)?.ok_or_else(|| {
        Error::InvalidHierarchy(format!(
            "technology page {} is not reachable from a technology root",
            translator.identifier
        ))
    })?;
    node.hierarchy = Some(hierarchy.hierarchy);

    node.references = translator.create_topic_render_references();
    translator.merge_reference_tables(&mut node);
    Ok(node)
}

/// Sums the duration estimates of every timed page below the technology
/// and formats the total.
fn total_estimated_duration(translator: &RenderNodeTranslator<'_>) -> Option<String> {
    let graph = translator.context;
    let mut total_minutes: Option<u32> = None;

    graph.traverse_breadth_first(&translator.identifier, &mut |node| {
        if let Ok(entity) = graph.entity(&node.reference) {
            let duration = match &entity.semantic {
                Semantic::Tutorial(tutorial) => tutorial.duration_minutes,
                Semantic::TutorialArticle(article) => article.duration_minutes,
                _ => None,
            };
            if let Some(minutes) = duration {
                total_minutes = Some(total_minutes.unwrap_or(0) + minutes);
            }
        }
        Traversal::Continue
    });

    total_minutes.and_then(|minutes| translator.renderer.format_estimated_duration(minutes))
}

/// The first tutorial of the technology: first volume, first chapter,
/// first child.
fn first_tutorial(translator: &RenderNodeTranslator<'_>) -> Option<TopicNode> {
    let volume = translator
        .context
        .children_of_kind(&translator.identifier, NodeKind::Volume)
        .into_iter()
        .next()?;
    let chapter = translator.context.children(&volume.reference).into_iter().next()?;
    translator.context.children(&chapter.reference).into_iter().next()
}
