//! Breadcrumb hierarchy computation.
//!
//! Paths come from the topic graph; every breadcrumb reference seen here
//! is collected for materialization so hierarchy entries always resolve
//! in the final references table.

use super::RenderNodeTranslator;
use crate::context::{NodeKind, PathOptions};
use crate::render::RenderHierarchy;
use crate::semantic::ResolvedTopicReference;
use crate::{Error, Result};

/// The hierarchy of a tutorial-type page, anchored at a technology root.
#[derive(Debug, Clone)]
pub(crate) struct TechnologyHierarchy {
    pub technology: ResolvedTopicReference,
    pub hierarchy: RenderHierarchy,
}

/// Computes the hierarchy of a page reachable from a technology root.
///
/// Returns `Ok(None)` when no path leads back to a technology root: the
/// page is uncurated and cannot render. `omitting_chapters` drops volume
/// and chapter crumbs, which technology overview pages do not display.
pub(crate) fn technology_hierarchy(
    translator: &mut RenderNodeTranslator<'_>,
    omitting_chapters: bool,
) -> Result<Option<TechnologyHierarchy>> {
    let paths = translator.context.paths_to(
        &translator.identifier,
        PathOptions { prefer_technology_root: true },
    );

    for path in paths {
        // The technology root is the first crumb, or the page itself when
        // the path is empty (the technology's own page).
        let technology = match path.first() {
            Some(root) => root.clone(),
            None => translator.identifier.clone(),
        };
        if translator.context.entity(&technology)?.kind != NodeKind::Technology {
            continue;
        }

        let mut crumbs = Vec::with_capacity(path.len());
        for crumb in &path {
            if omitting_chapters {
                let kind = translator.context.entity(crumb)?.kind;
                if matches!(kind, NodeKind::Volume | NodeKind::Chapter) {
                    continue;
                }
            }
            translator.collected_topic_references.push(crumb.clone());
            crumbs.push(crumb.absolute_string());
        }

        return Ok(Some(TechnologyHierarchy {
            technology,
            hierarchy: RenderHierarchy { paths: vec![crumbs] },
        }));
    }

    Ok(None)
}

/// Computes the hierarchy of a reference-style page (symbol or article)
/// from every breadcrumb path the graph knows, most-preferred first.
pub(crate) fn reference_hierarchy(
    translator: &mut RenderNodeTranslator<'_>,
) -> Option<RenderHierarchy> {
    let paths = translator
        .context
        .paths_to(&translator.identifier, PathOptions::default());
    if paths.is_empty() {
        return None;
    }

    let mut hierarchy_paths = Vec::with_capacity(paths.len());
    for path in paths {
        let mut crumbs = Vec::with_capacity(path.len());
        for crumb in path {
            crumbs.push(crumb.absolute_string());
            translator.collected_topic_references.push(crumb);
        }
        hierarchy_paths.push(crumbs);
    }

    Some(RenderHierarchy { paths: hierarchy_paths })
}

/// Checks that two positionally paired lists line up, surfacing the
/// mismatch as a fatal hierarchy error instead of a silent misalignment.
pub(crate) fn check_positional_correspondence(
    what: &str,
    rendered: usize,
    landmarks: usize,
) -> Result<()> {
    if rendered == landmarks {
        Ok(())
    } else {
        Err(Error::InvalidHierarchy(format!(
            "{what}: {rendered} rendered sections but {landmarks} on-page landmarks"
        )))
    }
}
