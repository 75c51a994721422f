//! Availability rendering: per-platform rows, default availability
//! fallback, and beta marking against the current platforms.

use std::collections::HashMap;

use super::RenderNodeTranslator;
use crate::context::{ModuleAvailability, PlatformVersion};
use crate::render::AvailabilityRenderItem;
use crate::semantic::{AvailabilityItem, SourceLanguage};

impl RenderNodeTranslator<'_> {
    /// The default availability rows for a bundle module, used when a
    /// symbol declares none of its own. Rows are computed once per module
    /// and cached for the rest of the translation.
    pub(crate) fn default_availability(
        &mut self,
        module_name: &str,
    ) -> Option<Vec<AvailabilityRenderItem>> {
        let cache_key = format!("{}:{module_name}", self.bundle.identifier);
        if let Some(cached) = self.bundle_availability.get(&cache_key) {
            return Some(cached.clone());
        }

        let module_availability = self.bundle.default_availability.get(module_name)?;
        let rendered: Vec<AvailabilityRenderItem> = module_availability
            .iter()
            .map(|availability| AvailabilityRenderItem {
                name: availability.platform_name.clone(),
                introduced_at: Some(availability.platform_version.clone()),
                deprecated_at: None,
                is_beta: is_module_beta(availability, &self.bundle.current_platforms),
            })
            .collect();

        self.bundle_availability.insert(cache_key, rendered.clone());
        Some(rendered)
    }
}

/// Renders a symbol's declared availability rows.
///
/// Items without an introduced version and items that are unconditionally
/// unavailable are filtered out; rows sort alphabetically by platform.
pub(crate) fn render_availability(
    items: &[AvailabilityItem],
    current_platforms: &HashMap<String, PlatformVersion>,
) -> Vec<AvailabilityRenderItem> {
    let mut rendered: Vec<AvailabilityRenderItem> = items
        .iter()
        .filter(|item| !item.unconditionally_unavailable)
        .filter(|item| item.introduced.is_some())
        .map(|item| AvailabilityRenderItem {
            name: item.platform_name.clone(),
            introduced_at: item.introduced.clone(),
            deprecated_at: item.deprecated.clone(),
            is_beta: item
                .introduced
                .as_deref()
                .map(|version| is_beta_version(&item.platform_name, version, current_platforms))
                .unwrap_or(false),
        })
        .collect();
    rendered.sort_by(|left, right| left.name.cmp(&right.name));
    rendered
}

/// A module is beta on a platform when the platform itself is in beta and
/// the module was introduced in exactly that platform version.
fn is_module_beta(
    availability: &ModuleAvailability,
    current_platforms: &HashMap<String, PlatformVersion>,
) -> bool {
    is_beta_version(
        &availability.platform_name,
        &availability.platform_version,
        current_platforms,
    )
}

fn is_beta_version(
    platform_name: &str,
    version: &str,
    current_platforms: &HashMap<String, PlatformVersion>,
) -> bool {
    // A platform version needs at least two components (e.g. 10.15) to be
    // comparable.
    let Some(introduced) = parse_version(version) else {
        return false;
    };
    let Some(current) = current_platforms.get(platform_name) else {
        return false;
    };
    if !current.beta {
        return false;
    }
    parse_version(&current.version) == Some(introduced)
}

/// Parses a version string into a triplet, defaulting the patch number to
/// zero. Returns `None` for strings with fewer than two components.
fn parse_version(version: &str) -> Option<(u32, u32, u32)> {
    let mut components = version.split('.');
    let major: u32 = components.next()?.parse().ok()?;
    let minor: u32 = components.next()?.parse().ok()?;
    let patch: u32 = match components.next() {
        Some(patch) => patch.parse().ok()?,
        None => 0,
    };
    Some((major, minor, patch))
}

/// Orders presentation languages with the primary language first, then
/// alphabetically by identifier.
pub(crate) fn sorted_languages(languages: &[SourceLanguage]) -> Vec<SourceLanguage> {
    let mut sorted = languages.to_vec();
    sorted.sort_by(|left, right| match (left.is_primary(), right.is_primary()) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => left.id.cmp(&right.id),
    });
    sorted
}
