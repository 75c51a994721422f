//! The optional pre-rendered content cache.
//!
//! When a previous build (or an earlier phase of this one) already
//! computed a render reference for a page, the translator reuses it
//! instead of resolving the page again. The cache is read-only here:
//! live computation never writes back into it.

use super::asset::DataAsset;
use super::renderer::ReferenceDependencies;
use crate::render::TopicRenderReference;
use crate::semantic::ResolvedTopicReference;

/// A previously computed render reference together with the references
/// it depends on.
#[derive(Debug, Clone)]
pub struct PrerenderedContent {
    pub reference: TopicRenderReference,
    pub dependencies: ReferenceDependencies,
}

/// Read-only access to pre-rendered content.
pub trait PrerenderedCache {
    /// The pre-rendered reference for a page, if one exists.
    fn content_for(&self, reference: &ResolvedTopicReference) -> Option<PrerenderedContent>;

    /// A pre-resolved asset by logical name, if one exists.
    fn asset_named(&self, name: &str, bundle_identifier: &str) -> Option<DataAsset>;
}
