//! Translates a tutorial page into a render node.

use tracing::debug;

use super::super::hierarchy::technology_hierarchy;
use super::super::tutorials;
use super::super::RenderNodeTranslator;
use crate::context::{AssetContext, NodeKind, PathOptions};
use crate::render::{
    RenderNode, RenderNodeKind, RenderReferenceIdentifier, RenderSection,
    XcodeRequirementReference,
};
use crate::semantic::{Semantic, Tutorial};
use crate::{Error, Result};

/// Translates a tutorial.
///
/// Returns `Ok(None)` when the tutorial is not curated under a technology
/// root: uncurated pages have no hierarchy and cannot render. Upstream
/// has already warned about them.
pub(crate) fn translate(
    tutorial: &Tutorial,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<Option<RenderNode>> {
    let Some(hierarchy) = technology_hierarchy(translator, false)? else {
        debug!(page = %translator.identifier, "tutorial is not curated, skipping");
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

    let mut node = RenderNode::new(translator.identifier.clone(), RenderNodeKind::Tutorial);
    node.metadata.title = Some(tutorial.intro.title.clone());
    node.metadata.role = Some(translator.renderer.role(NodeKind::Tutorial));
    node.hierarchy = Some(hierarchy.hierarchy.clone());
    node.metadata.category = Some(technology_name);
    node.metadata.category_path_component =
        Some(hierarchy.technology.last_path_component().to_string());

    let mut intro = tutorials::translate_intro(&tutorial.intro, translator);
    intro.estimated_time_in_minutes = tutorial.duration_minutes;

    if let Some(chapter) = translator.context.parents(&translator.identifier).first() {
        intro.chapter = translator.context.title_for(chapter);
    }

    // Surface the first requirement in the intro, if one is declared.
    if let Some(requirement) = tutorial.requirements.first() {
        let identifier = RenderReferenceIdentifier::new(&requirement.title);
        translator.tables.requirements.insert(
            requirement.title.clone(),
            XcodeRequirementReference {
                identifier: identifier.clone(),
                title: requirement.title.clone(),
                url: requirement.destination.clone(),
            },
        );
        intro.xcode_requirement = Some(identifier);
    }

    if let Some(project_files) = &tutorial.project_files {
        intro.project_files = Some(translator.register_render_reference(
            Some(project_files),
            None,
            None,
            AssetContext::Download,
        ));
    }

    node.sections.push(RenderSection::Hero(intro));

    let sections = tutorials::translate_tutorial_sections(&tutorial.sections, translator)?;
    node.sections.push(RenderSection::Tasks(sections));

    if let Some(assessments) = &tutorial.assessments {
        node.sections.push(RenderSection::Assessments(
            tutorials::translate_assessments(assessments, translator),
        ));
    }

    // A curated tutorial sits under technology -> volume -> chapter, so the
    // second-to-last ancestor of the preferred path is the volume.
    let technology_paths = translator.context.paths_to(
        &translator.identifier,
        PathOptions { prefer_technology_root: true },
    );
    if let Some(path) = technology_paths.first() {
        if path.len() >= 2 {
            let volume = path[path.len() - 2].clone();
            if let Some(call_to_action) = tutorials::call_to_action(
                tutorial.call_to_action_image.as_ref(),
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
