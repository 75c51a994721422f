//! The media registrar: resolves logical assets and registers typed
//! references for them.

use tracing::debug;

use super::state::ReferenceTables;
use crate::context::{
    AssetContext, BundleInfo, DataAsset, DataProvider, PrerenderedCache, TopicGraph,
    is_image_extension, is_video_extension,
};
use crate::render::{
    DownloadReference, ImageReference, RenderReferenceIdentifier, VideoReference,
};
use crate::semantic::{ResolvedTopicReference, ResourceReference};
use crate::util::sha512_hex;

/// Registers media references against a set of reference tables.
///
/// Shared between the page translator and the content compiler, which
/// accumulate into different tables. The compiler carries no data
/// provider, so it never produces download references.
pub(crate) struct MediaRegistrar<'a, 'b> {
    pub context: &'a dyn TopicGraph,
    pub bundle: &'a BundleInfo,
    pub prerendered: Option<&'a dyn PrerenderedCache>,
    pub data_provider: Option<&'a dyn DataProvider>,
    pub identifier: &'b ResolvedTopicReference,
}

impl MediaRegistrar<'_, '_> {
    /// Resolves a logical asset and registers a typed reference for it,
    /// returning the reference identifier to embed in render content.
    ///
    /// Unresolvable assets yield the empty sentinel identifier; callers
    /// must tolerate a reference that points at nothing. A failed byte
    /// read during download registration aborts only that registration,
    /// returning the identifier produced so far.
    pub fn register(
        &self,
        tables: &mut ReferenceTables,
        media: Option<&ResourceReference>,
        poster: Option<&ResourceReference>,
        alt_text: Option<&str>,
        asset_context: AssetContext,
    ) -> RenderReferenceIdentifier {
        let mut media_reference = RenderReferenceIdentifier::empty();

        let Some(original) = media else {
            return media_reference;
        };
        let Some(path) = self
            .context
            .identifier_for_asset_name(&original.path, self.identifier)
        else {
            debug!(asset = %original.path, "unknown asset name, emitting empty reference");
            return media_reference;
        };

        let media = ResourceReference::new(&original.bundle_identifier, path);
        let file_extension = media.file_extension().to_string();

        if is_image_extension(&file_extension) {
            if let Some(asset) = self.resolve_asset(&media.path) {
                media_reference = RenderReferenceIdentifier::new(&media.path);
                // If no alt text has been provided and this image has been
                // registered previously, keep the registered alt text.
                let alt_text = alt_text
                    .map(str::to_string)
                    .or_else(|| tables.images.get(&media.path).and_then(|image| image.alt_text.clone()));
                tables.images.insert(
                    media.path.clone(),
                    ImageReference {
                        identifier: media_reference.clone(),
                        alt_text,
                        asset,
                    },
                );
            }
        }

        if is_video_extension(&file_extension) {
            if let Some(asset) = self.resolve_asset(&media.path) {
                media_reference = RenderReferenceIdentifier::new(&media.path);
                // Register the poster first so its identifier is valid by
                // the time the video reference is stored.
                let poster = poster
                    .map(|poster| self.register(tables, Some(poster), None, None, AssetContext::Display));
                tables.videos.insert(
                    media.path.clone(),
                    VideoReference {
                        identifier: media_reference.clone(),
                        alt_text: alt_text.map(str::to_string),
                        asset,
                        poster,
                    },
                );
            }
        }

        if asset_context == AssetContext::Download {
            if let Some(asset) = self.resolve_asset(&media.path) {
                media_reference = RenderReferenceIdentifier::new(&media.path);
                let Some(provider) = self.data_provider else {
                    return media_reference;
                };
                let Some(download_url) = asset.default_variant() else {
                    return media_reference;
                };
                let download_data = match provider.contents_of_url(download_url) {
                    Ok(data) => data,
                    Err(error) => {
                        debug!(asset = %media.path, %error, "download asset unreadable, keeping partial reference");
                        return media_reference;
                    }
                };
                tables.downloads.insert(
                    media.path.clone(),
                    DownloadReference {
                        identifier: media_reference.clone(),
                        url: download_url.clone(),
                        sha512_checksum: sha512_hex(&download_data),
                    },
                );
            }
        }

        media_reference
    }

    /// Two-tier asset lookup: the pre-rendered store wins over live
    /// resolution against the bundle's asset index.
    fn resolve_asset(&self, path: &str) -> Option<DataAsset> {
        self.prerendered
            .and_then(|cache| cache.asset_named(path, &self.bundle.identifier))
            .or_else(|| self.context.resolve_asset(path, self.identifier))
    }
}
