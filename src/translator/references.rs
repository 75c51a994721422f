//! Topic reference materialization.
//!
//! After a page walk completes, every collected topic reference is
//! expanded into a fully resolved reference record. The pre-rendered
//! cache is consulted first; on a miss the content renderer resolves the
//! reference live. The pass enforces the completeness invariant: any
//! topic reference embedded anywhere in render content ends up as a key
//! of the final references table.

use std::collections::BTreeMap;

use tracing::trace;

use super::RenderNodeTranslator;
use crate::context::ReferenceDependencies;
use crate::render::{RenderReference, RenderReferenceIdentifier, TopicRenderReference};
use crate::semantic::{ResolvedTopicReference, TopicReference, UnresolvedTopicReference};

impl RenderNodeTranslator<'_> {
    /// Materializes the collected topic references into the final
    /// references table for one page.
    ///
    /// Dependencies of a reference are materialized with a single further
    /// lookup level; they do not trigger materialization of their own
    /// dependencies. Dependency link references merge into the page's
    /// link table. Constraint annotations are attached after base
    /// resolution. The same input state always yields the same table.
    pub(crate) fn create_topic_render_references(&mut self) -> BTreeMap<String, RenderReference> {
        let mut render_references = BTreeMap::new();

        let collected = std::mem::take(&mut self.collected_topic_references);
        for reference in &collected {
            let (mut render_reference, dependencies) = self.resolve_with_dependencies(reference);

            for link in dependencies.link_references {
                self.tables
                    .links
                    .insert(link.identifier.as_str().to_string(), link);
            }

            for dependency in &dependencies.topic_references {
                // One further lookup level only; dependency dependencies
                // are discarded.
                let (dependency_reference, _) = self.resolve_with_dependencies(dependency);
                render_references.insert(
                    dependency.absolute_string(),
                    RenderReference::Topic(dependency_reference),
                );
            }

            if let Some(conformance) = self.renderer.conformance_section(
                &TopicReference::Resolved(reference.clone()),
                &self.collected_constraints,
            ) {
                render_reference.conformance = Some(conformance);
            }

            render_references.insert(
                reference.absolute_string(),
                RenderReference::Topic(render_reference),
            );
        }
        self.collected_topic_references = collected;

        for unresolved in &self.collected_unresolved_references {
            let identifier =
                RenderReferenceIdentifier::new(unresolved.topic_url.to_string());
            let title = unresolved
                .title
                .clone()
                .unwrap_or_else(|| unresolved.topic_url.to_string());
            render_references.insert(
                identifier.as_str().to_string(),
                RenderReference::Unresolvable { identifier, title },
            );
        }

        render_references
    }

    /// Two-tier resolution of one topic reference: pre-rendered content
    /// first, live rendering on a miss. Live results are not written back
    /// into the cache.
    fn resolve_with_dependencies(
        &self,
        reference: &ResolvedTopicReference,
    ) -> (TopicRenderReference, ReferenceDependencies) {
        if let Some(prerendered) = self
            .prerendered
            .and_then(|cache| cache.content_for(reference))
        {
            trace!(reference = %reference, "materialized from pre-rendered content");
            return (prerendered.reference, prerendered.dependencies);
        }

        let mut dependencies = ReferenceDependencies::default();
        let render_reference = self.renderer.render_reference(reference, &mut dependencies);
        (render_reference, dependencies)
    }

    /// Records an unresolvable reference with its best fallback title so
    /// it still materializes as an entry in the references table.
    pub(crate) fn collect_unresolvable_reference(
        &mut self,
        destination: &UnresolvedTopicReference,
        title: &str,
    ) -> UnresolvedTopicReference {
        let reference =
            UnresolvedTopicReference::with_title(destination.topic_url.clone(), title);
        self.collected_unresolved_references.push(reference.clone());
        reference
    }
}
