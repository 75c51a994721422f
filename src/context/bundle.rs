//! Static facts about the documentation bundle being rendered.

use std::collections::HashMap;

use crate::semantic::ResolvedTopicReference;

/// A platform version an availability entry can be matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersion {
    /// Version string, e.g. `"13.0"` or `"13.0.1"`.
    pub version: String,
    /// Whether this platform release is in beta.
    pub beta: bool,
}

/// Default availability declared for one module of the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleAvailability {
    pub platform_name: String,
    pub platform_version: String,
}

/// Bundle-wide information threaded through every page translation.
#[derive(Debug, Clone)]
pub struct BundleInfo {
    /// The bundle identifier, e.g. `"com.example.slothcreator"`.
    pub identifier: String,
    /// The bundle's display name.
    pub display_name: String,
    /// The reference links are resolved against when no better scope exists.
    pub root_reference: ResolvedTopicReference,
    /// Default availability per module name, used when a symbol declares none.
    pub default_availability: HashMap<String, Vec<ModuleAvailability>>,
    /// The platforms the documentation is being built against.
    pub current_platforms: HashMap<String, PlatformVersion>,
    /// Whether the bundle was generated without authored documentation.
    /// Generated bundles get different placeholder abstracts.
    pub is_generated: bool,
    /// Whether symbols inherit documentation from the symbol they came from.
    pub inherit_docs: bool,
}

impl BundleInfo {
    /// A bundle with the given identifier and display name and no default
    /// availability or platform information.
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            root_reference: ResolvedTopicReference::new(identifier.clone(), "/documentation"),
            identifier,
            display_name: display_name.into(),
            default_availability: HashMap::new(),
            current_platforms: HashMap::new(),
            is_generated: false,
            inherit_docs: false,
        }
    }
}
