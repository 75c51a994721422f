//! Translates a symbol page into a render node.

use std::collections::HashSet;

use super::super::availability::{render_availability, sorted_languages};
use super::super::curation;
use super::super::hierarchy::reference_hierarchy;
use super::super::RenderNodeTranslator;
use crate::render::{
    ContentRenderSection, ContentSectionKind, DeclarationRenderFragment, RenderBlockContent,
    RenderInlineContent, RenderModule, RenderNode, RenderNodeKind, RenderVariant,
    RelationshipsRenderSection, TaskGroupRenderSection, VariantTrait,
};
use crate::semantic::{
    DeclarationFragment, FragmentKind, PositionPreference, ResolvedTopicReference, Symbol,
    TopicReference,
};
use crate::context::NodeKind;
use crate::Result;

pub(crate) fn translate(
    symbol: &Symbol,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<RenderNode> {
    let entity = translator.context.entity(&translator.identifier)?;
    let entity_kind = entity.kind;
    let available_languages = entity.available_source_languages.clone();

    let mut node = RenderNode::new(translator.identifier.clone(), RenderNodeKind::Symbol);
    let mut compiler = translator.content_compiler();

    if let Some(module_name) = &symbol.module_name {
        node.metadata.modules = vec![RenderModule {
            name: module_name.clone(),
            related_modules: symbol.bystander_modules.clone(),
        }];
    }
    node.metadata.extended_module = symbol.extended_module.clone();

    node.metadata.platforms = if symbol.availability.is_empty() {
        symbol
            .module_name
            .as_deref()
            .map(|module_name| translator.default_availability(module_name).unwrap_or_default())
            .unwrap_or_default()
    } else {
        render_availability(&symbol.availability, &translator.bundle.current_platforms)
    };

    node.metadata.required = symbol.is_required;
    node.metadata.role = Some(translator.renderer.role(entity_kind));
    node.metadata.role_heading = symbol.role_heading.clone();
    node.metadata.title = Some(symbol.title.clone());
    node.metadata.external_id = symbol.external_id.clone();
    // Strip the optional namespace, e.g. "swift.struct" presents as "struct".
    node.metadata.symbol_kind = symbol
        .kind_identifier
        .rsplit('.')
        .next()
        .map(str::to_string);
    node.metadata.conformance = translator.renderer.conformance_section(
        &TopicReference::Resolved(translator.identifier.clone()),
        &translator.collected_constraints,
    );
    node.metadata.fragments = symbol.sub_heading.as_ref().map(|fragments| render_fragments(fragments));
    node.metadata.navigator_title = symbol.navigator.as_ref().map(|fragments| render_fragments(fragments));
    node.metadata.tags = translator.renderer.tags(&translator.identifier);

    // Presentation variants, primary language first, then alphabetical.
    node.variants = sorted_languages(&available_languages)
        .into_iter()
        .map(|language| RenderVariant {
            traits: vec![VariantTrait::InterfaceLanguage(language.id)],
            paths: vec![translator.identifier.presentation_path()],
        })
        .collect();

    let identifier = translator.identifier.clone();
    translator.collected_topic_references.push(identifier);

    node.hierarchy = reference_hierarchy(translator);

    node.abstract_content = symbol_abstract(symbol, translator, entity_kind);

    // Primary content: declaration, parameters, return value, discussion.
    if let Some(declaration) = &symbol.declaration {
        let code = declaration
            .iter()
            .map(|fragment| fragment.spelling.clone())
            .collect::<String>();
        node.primary_content_sections.push(ContentRenderSection {
            kind: ContentSectionKind::Declarations,
            content: vec![RenderBlockContent::CodeListing {
                syntax: None,
                code: vec![code],
            }],
            heading: None,
        });
    }

    if !symbol.parameters.is_empty() {
        let mut content = Vec::new();
        for parameter in &symbol.parameters {
            content.push(RenderBlockContent::paragraph(vec![
                RenderInlineContent::code_voice(&parameter.name),
            ]));
            content.extend(translator.visit_markup_container(&parameter.content));
        }
        node.primary_content_sections.push(ContentRenderSection {
            kind: ContentSectionKind::Parameters,
            content,
            heading: Some("Parameters".to_string()),
        });
    }

    if let Some(returns) = &symbol.returns {
        node.primary_content_sections.push(ContentRenderSection {
            kind: ContentSectionKind::Returns,
            content: translator.visit_markup_container(returns),
            heading: Some("Return Value".to_string()),
        });
    }

    if let Some(discussion) = &symbol.discussion {
        let discussion_content = translator.visit_markup_container(discussion);
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

    node.relationship_sections = relationship_sections(symbol, translator);
    node.default_implementation_sections = default_implementation_sections(symbol, translator);

    // Topic sections: authored groups, "top" automatic groups, by-kind
    // automatic curation of uncurated children, "bottom" automatic groups.
    if let Some(topics) = &symbol.topics {
        if !topics.task_groups.is_empty() {
            node.topic_sections.extend(curation::render_groups(
                translator,
                &mut compiler,
                topics,
                false,
            ));
        }
    }

    if !symbol.automatic_task_groups.is_empty() {
        node.topic_sections.extend(curation::render_automatic_task_groups(
            &mut compiler,
            &symbol.automatic_task_groups,
            PositionPreference::Top,
        ));
    }

    let already_curated: HashSet<String> = node
        .topic_sections
        .iter()
        .flat_map(|section| section.identifiers.iter().cloned())
        .collect();
    for (title, references) in curation::automatic_curation_groups(translator, &already_curated) {
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

    if !symbol.automatic_task_groups.is_empty() {
        node.topic_sections.extend(curation::render_automatic_task_groups(
            &mut compiler,
            &symbol.automatic_task_groups,
            PositionPreference::Bottom,
        ));
    }

    // See Also: the authored section first, then generated siblings.
    if let Some(see_also) = &symbol.see_also {
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

    if let Some(deprecated_summary) = &symbol.deprecated_summary {
        node.deprecation_summary = Some(translator.visit_markup_container(deprecated_summary));
    }

    translator.merge_compiler(compiler);
    node.references = translator.create_topic_render_references();
    translator.merge_reference_tables(&mut node);

    Ok(node)
}

/// The abstract of a symbol page: authored content, an inherited-doc
/// placeholder, or the bundle-appropriate default.
fn symbol_abstract(
    symbol: &Symbol,
    translator: &mut RenderNodeTranslator<'_>,
    entity_kind: NodeKind,
) -> Vec<RenderInlineContent> {
    // Inherited symbols without an authored abstract point back at their
    // origin instead of repeating its documentation.
    if !translator.bundle.inherit_docs {
        if let (Some(origin), None) = (&symbol.origin, &symbol.abstract_section) {
            return vec![
                RenderInlineContent::text("Inherited from "),
                RenderInlineContent::code_voice(&origin.display_name),
                RenderInlineContent::text("."),
            ];
        }
    }

    match &symbol.abstract_section {
        Some(abstract_section) => translator.visit_markup_sequence(abstract_section),
        None => {
            if translator.bundle.is_generated && entity_kind == NodeKind::Module {
                // Undocumented module pages of generated bundles get an
                // empty abstract.
                vec![RenderInlineContent::text("")]
            } else {
                vec![RenderInlineContent::text("No overview available.")]
            }
        }
    }
}

fn render_fragments(fragments: &[DeclarationFragment]) -> Vec<DeclarationRenderFragment> {
    fragments
        .iter()
        .map(|fragment| DeclarationRenderFragment {
            kind: fragment_kind(fragment.kind).to_string(),
            text: fragment.spelling.clone(),
        })
        .collect()
}

fn fragment_kind(kind: FragmentKind) -> &'static str {
    match kind {
        FragmentKind::Keyword => "keyword",
        FragmentKind::Identifier => "identifier",
        FragmentKind::TypeIdentifier => "typeIdentifier",
        FragmentKind::GenericParameter => "genericParameter",
        FragmentKind::Text => "text",
    }
}

/// Builds the relationship sections: groups in their declared section
/// order, destinations within a group ordered by resolved title,
/// case-sensitively.
fn relationship_sections(
    symbol: &Symbol,
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<RelationshipsRenderSection> {
    if symbol.relationships.groups.is_empty() {
        return Vec::new();
    }

    let mut eligible_groups: Vec<_> = symbol.relationships.groups.iter().collect();
    eligible_groups.sort_by_key(|group| group.kind.section_order());

    let mut sections = Vec::new();
    for group in eligible_groups {
        // Destination -> resolved presentation title.
        let mut destinations: Vec<(TopicReference, String)> = Vec::new();

        for destination in &group.destinations {
            if let Some(constraints) = symbol.relationships.constraints.get(destination) {
                translator
                    .collected_constraints
                    .insert(destination.clone(), constraints.clone());
            }

            match destination {
                TopicReference::Resolved(resolved) => {
                    let title = translator
                        .context
                        .title_for(resolved)
                        .unwrap_or_else(|| resolved.last_path_component().to_string());
                    translator.collected_topic_references.push(resolved.clone());
                    destinations.push((destination.clone(), title));
                }
                TopicReference::Unresolved(unresolved) => {
                    // Keep the destination presentable with its fallback
                    // title, when one was recorded.
                    let Some(title) = symbol.relationships.target_fallbacks.get(destination)
                    else {
                        continue;
                    };
                    let reference =
                        translator.collect_unresolvable_reference(unresolved, title);
                    destinations.push((
                        TopicReference::Unresolved(reference),
                        title.clone(),
                    ));
                }
            }
        }

        destinations.sort_by(|left, right| left.1.cmp(&right.1));

        let section = RelationshipsRenderSection {
            kind: group.kind.as_str().to_string(),
            title: group.kind.heading().to_string(),
            identifiers: destinations
                .iter()
                .map(|(reference, _)| reference.absolute_string())
                .collect(),
        };
        sections.push(section);
    }

    sections
}

/// Builds the default-implementations sections, collecting every
/// implementation reference and its constraints along the way.
fn default_implementation_sections(
    symbol: &Symbol,
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<TaskGroupRenderSection> {
    if symbol.default_implementations.groups.is_empty() {
        return Vec::new();
    }

    for group in &symbol.default_implementations.groups {
        for reference in &group.references {
            match reference {
                TopicReference::Resolved(resolved) => {
                    translator.collected_topic_references.push(resolved.clone());
                    if let Some(constraints) = symbol.relationships.constraints.get(reference) {
                        translator
                            .collected_constraints
                            .insert(reference.clone(), constraints.clone());
                    }
                }
                TopicReference::Unresolved(unresolved) => {
                    if let Some(title) =
                        symbol.default_implementations.target_fallbacks.get(reference)
                    {
                        let collected =
                            translator.collect_unresolvable_reference(unresolved, title);
                        if let Some(constraints) = symbol.relationships.constraints.get(reference)
                        {
                            translator.collected_constraints.insert(
                                TopicReference::Unresolved(collected),
                                constraints.clone(),
                            );
                        }
                    }
                }
            }
        }
    }

    symbol
        .default_implementations
        .groups
        .iter()
        .map(|group| TaskGroupRenderSection {
            title: Some(group.heading.clone()),
            abstract_content: None,
            discussion: None,
            identifiers: group
                .references
                .iter()
                .map(TopicReference::absolute_string)
                .collect(),
            generated: false,
        })
        .collect()
}
