//! Translates a tutorial article page into a render node.

use tracing::debug;

use super::super::hierarchy::technology_hierarchy;
use super::super::tutorials;
use super::super::RenderNodeTranslator;
use crate::context::{NodeKind, PathOptions};
use crate::render::{
    IntroRenderSection, RenderNode, RenderNodeKind, RenderSection, TutorialArticleSection,
};
use crate::semantic::{Semantic, TutorialArticle};
use crate::{Error, Result};

/// Translates a tutorial article.
///
/// Returns `Ok(None)` when the article is not curated under a technology
/// root, mirroring tutorial pages.
pub(crate) fn translate(
    article: &TutorialArticle,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<Option<RenderNode>> {
    let Some(hierarchy) = technology_hierarchy(translator, false)? else {
        debug!(page = %translator.identifier, "tutorial article is not curated, skipping");
        return Ok(None);
    };

    let technology_entity = translator.context.entity(&hierarchy.technology)?;
    let Semantic::Technology(technology) = &technology_entity.semantic else {
        return Err(Error::InvalidHierarchy(format!(
            "technology root {} does not hold a technology page",
            hierarchy.technology
        )));
    };
    let technology_name = technology.name.clone();

    let mut node = RenderNode::new(translator.identifier.clone(), RenderNodeKind::Article);
    node.metadata.title = article
        .title
        .clone()
        .or_else(|| article.intro.as_ref().map(|intro| intro.title.clone()));
    node.metadata.category = Some(technology_name);
    node.metadata.category_path_component =
        Some(hierarchy.technology.last_path_component().to_string());
    node.metadata.role = Some(translator.renderer.role(NodeKind::TutorialArticle));
    node.hierarchy = Some(hierarchy.hierarchy.clone());

    let mut intro = match &article.intro {
        Some(intro) => tutorials::translate_intro(intro, translator),
        // Skipping an authored intro is allowed; render an empty one.
        None => IntroRenderSection::new(""),
    };
    if let Some(minutes) = article.duration_minutes {
        intro.estimated_time_in_minutes = Some(minutes);
    }
    node.sections.push(RenderSection::Hero(intro));

    let layouts = tutorials::translate_markup_layouts(&article.content, translator);
    node.sections
        .push(RenderSection::ArticleBody(TutorialArticleSection { content: layouts }));

    if let Some(assessments) = &article.assessments {
        node.sections.push(RenderSection::Assessments(
            tutorials::translate_assessments(assessments, translator),
        ));
    }

    let technology_paths = translator.context.paths_to(
        &translator.identifier,
        PathOptions { prefer_technology_root: true },
    );
    if let Some(path) = technology_paths.first() {
        if path.len() >= 2 {
            let volume = path[path.len() - 2].clone();
            if let Some(call_to_action) = tutorials::call_to_action(
                article.call_to_action_image.as_ref(),
                &volume,
                translator,
            )? {
                node.sections.push(RenderSection::CallToAction(call_to_action));
            }
        }
    }

    node.references = translator.create_topic_render_references();
    translator.merge_reference_tables(&mut node);
    Ok(Some(node))
}
