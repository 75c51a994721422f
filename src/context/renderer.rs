//! The content-renderer collaborator: pure formatting helpers the
//! translator delegates to.

use std::collections::HashMap;

use super::NodeKind;
use crate::render::{
    ConformanceSection, LinkReference, RenderInlineContent, RenderTag, Role, TopicRenderReference,
};
use crate::semantic::{Article, GenericConstraint, ResolvedTopicReference, TopicReference};

/// References discovered while rendering a single topic reference:
/// the links and topics that reference itself depends on.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDependencies {
    pub topic_references: Vec<ResolvedTopicReference>,
    pub link_references: Vec<LinkReference>,
}

/// Renders small pieces of documentation content: roles, durations,
/// topic render references and conformance data.
///
/// Implementations are pure functions over their inputs; the translator
/// never hands them mutable state.
pub trait ContentRenderer {
    /// Produces the render reference for a resolved page, recording any
    /// references it depends on in `dependencies`.
    fn render_reference(
        &self,
        reference: &ResolvedTopicReference,
        dependencies: &mut ReferenceDependencies,
    ) -> TopicRenderReference;

    /// The presentation role for a page of the given kind.
    fn role(&self, kind: NodeKind) -> Role {
        match kind {
            NodeKind::Technology => Role::Overview,
            NodeKind::Tutorial => Role::Tutorial,
            NodeKind::TutorialArticle | NodeKind::Article => Role::Article,
            NodeKind::CollectionGroup => Role::CollectionGroup,
            _ => Role::Symbol,
        }
    }

    /// The role of a free-form article: articles that curate other pages
    /// present as collection groups.
    fn role_for_article(&self, article: &Article, kind: NodeKind) -> Role {
        let curates = article
            .topics
            .as_ref()
            .map(|topics| !topics.task_groups.is_empty())
            .unwrap_or(false);
        if curates { Role::CollectionGroup } else { self.role(kind) }
    }

    /// Formats a duration in minutes for presentation, e.g. `"1hr 20min"`.
    fn format_estimated_duration(&self, minutes: u32) -> Option<String> {
        if minutes == 0 {
            return None;
        }
        let hours = minutes / 60;
        let remainder = minutes % 60;
        Some(match (hours, remainder) {
            (0, m) => format!("{m}min"),
            (h, 0) => format!("{h}hr"),
            (h, m) => format!("{h}hr {m}min"),
        })
    }

    /// Synthesizes the conformance section for a reference from the
    /// constraints collected during the walk, if any were recorded for it.
    fn conformance_section(
        &self,
        reference: &TopicReference,
        collected_constraints: &HashMap<TopicReference, Vec<GenericConstraint>>,
    ) -> Option<ConformanceSection> {
        let constraints = collected_constraints.get(reference)?;
        if constraints.is_empty() {
            return None;
        }

        let mut rendered = Vec::new();
        for (index, constraint) in constraints.iter().enumerate() {
            if index > 0 {
                let separator = if index + 1 == constraints.len() { " and " } else { ", " };
                rendered.push(RenderInlineContent::text(separator));
            }
            rendered.push(RenderInlineContent::code_voice(&constraint.left_type_name));
            rendered.push(RenderInlineContent::text(format!(" {} ", constraint.kind.spelling())));
            rendered.push(RenderInlineContent::code_voice(&constraint.right_type_name));
        }

        Some(ConformanceSection {
            availability_prefix: "Available when".to_string(),
            conformance_prefix: "Conforms when".to_string(),
            constraints: rendered,
        })
    }

    /// Presentation tags attached to a page.
    fn tags(&self, _reference: &ResolvedTopicReference) -> Vec<RenderTag> {
        Vec::new()
    }
}
