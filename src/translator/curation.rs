//! Task-group curation: authored groups, automatically generated groups,
//! by-kind automatic curation and see-also synthesis.

use std::collections::HashSet;

use super::content::RenderContentCompiler;
use super::RenderNodeTranslator;
use crate::render::{
    ContentRenderSection, ContentSectionKind, RenderInlineContent, TaskGroupRenderSection,
};
use crate::semantic::{
    AutomaticTaskGroup, GroupedSection, PositionPreference, ResolvedTopicReference,
    TaskGroupLink, url_has_topic_scheme,
};

/// Renders the authored task groups of a Topics or See Also section.
///
/// Each group's links resolve through the shared content compiler; groups
/// whose identifier list ends up empty are dropped, never rendered.
pub(crate) fn render_groups(
    translator: &mut RenderNodeTranslator<'_>,
    compiler: &mut RenderContentCompiler<'_>,
    section: &GroupedSection,
    allow_external_links: bool,
) -> Vec<TaskGroupRenderSection> {
    let mut sections = Vec::new();

    for group in &section.task_groups {
        let abstract_content = group
            .abstract_content
            .as_ref()
            .map(|content| translator.visit_markup_sequence(content));

        let discussion = group.discussion.as_ref().map(|discussion| ContentRenderSection {
            kind: ContentSectionKind::Content,
            content: translator.visit_markup_container(discussion),
            heading: Some("Discussion".to_string()),
        });

        let identifiers: Vec<String> = group
            .links
            .iter()
            .filter_map(|link| resolve_group_link(compiler, link, allow_external_links))
            .collect();

        // A group without any resolvable links is omitted entirely.
        if identifiers.is_empty() {
            continue;
        }

        sections.push(TaskGroupRenderSection {
            title: group.heading.clone(),
            abstract_content,
            discussion,
            identifiers,
            generated: false,
        });
    }

    sections
}

fn resolve_group_link(
    compiler: &mut RenderContentCompiler<'_>,
    link: &TaskGroupLink,
    allow_external_links: bool,
) -> Option<String> {
    let action = match link {
        TaskGroupLink::Link(url) => {
            if !allow_external_links && !url_has_topic_scheme(url) {
                return None;
            }
            compiler.visit_link(url, None)
        }
        TaskGroupLink::SymbolLink(path) => compiler.visit_symbol_link(path),
    };

    match action {
        RenderInlineContent::Reference { identifier, .. } => Some(identifier.0),
        _ => None,
    }
}

/// Renders automatically generated task groups with the given position
/// preference, collecting their references through the compiler.
pub(crate) fn render_automatic_task_groups(
    compiler: &mut RenderContentCompiler<'_>,
    groups: &[AutomaticTaskGroup],
    position: PositionPreference,
) -> Vec<TaskGroupRenderSection> {
    groups
        .iter()
        .filter(|group| group.position == position)
        .map(|group| {
            compiler
                .collected_topic_references
                .extend(group.references.iter().cloned());
            TaskGroupRenderSection {
                title: Some(group.title.clone()),
                abstract_content: None,
                discussion: None,
                identifiers: group
                    .references
                    .iter()
                    .map(ResolvedTopicReference::absolute_string)
                    .collect(),
                generated: true,
            }
        })
        .collect()
}

/// Synthesizes by-kind task groups from the page's graph children,
/// filtering out identifiers that earlier sections already curated.
/// Groups that empty out after the filter are dropped.
pub(crate) fn automatic_curation_groups(
    translator: &RenderNodeTranslator<'_>,
    already_curated: &HashSet<String>,
) -> Vec<(String, Vec<ResolvedTopicReference>)> {
    let children = translator.context.children(&translator.identifier);

    let mut groups: Vec<(crate::context::NodeKind, Vec<ResolvedTopicReference>)> = Vec::new();
    for child in children {
        if !child.kind.is_curatable() {
            continue;
        }
        if already_curated.contains(&child.reference.absolute_string()) {
            continue;
        }
        match groups.iter_mut().find(|(kind, _)| *kind == child.kind) {
            Some((_, references)) => references.push(child.reference),
            None => groups.push((child.kind, vec![child.reference])),
        }
    }

    groups.sort_by_key(|(kind, _)| kind.curation_order());
    groups
        .into_iter()
        .map(|(kind, references)| (kind.group_title().to_string(), references))
        .collect()
}

/// Synthesizes a see-also group from the page's siblings under its first
/// parent, excluding the page itself and anything already listed.
pub(crate) fn automatic_see_also(
    translator: &RenderNodeTranslator<'_>,
    already_listed: &HashSet<String>,
) -> Option<(String, Vec<ResolvedTopicReference>)> {
    let parent = translator.context.parents(&translator.identifier).into_iter().next()?;

    let siblings: Vec<ResolvedTopicReference> = translator
        .context
        .children(&parent)
        .into_iter()
        .filter(|sibling| sibling.kind.is_curatable())
        .map(|sibling| sibling.reference)
        .filter(|reference| *reference != translator.identifier)
        .filter(|reference| !already_listed.contains(&reference.absolute_string()))
        .collect();

    if siblings.is_empty() {
        return None;
    }

    let title = translator
        .context
        .title_for(&parent)
        .unwrap_or_else(|| "Related Documentation".to_string());
    Some((title, siblings))
}
