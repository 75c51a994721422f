//! Resolved bundle assets and file-extension classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// A resolved asset with one or more platform/scale variants.
///
/// Variant keys are trait strings such as `"1x"`, `"2x"` or `"dark"`;
/// the map is ordered so the default variant is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAsset {
    pub variants: BTreeMap<String, Url>,
}

impl DataAsset {
    pub fn new(variants: BTreeMap<String, Url>) -> Self {
        Self { variants }
    }

    /// An asset with a single unnamed variant.
    pub fn single(url: Url) -> Self {
        let mut variants = BTreeMap::new();
        variants.insert("1x".to_string(), url);
        Self { variants }
    }

    /// The URL of the first variant, the one used when no trait matches.
    pub fn default_variant(&self) -> Option<&Url> {
        self.variants.values().next()
    }
}

/// The context an asset is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetContext {
    /// Shown inline on the page.
    Display,
    /// Offered as a download.
    Download,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "heic"];
const VIDEO_EXTENSIONS: &[&str] = &["mov", "mp4", "m4v", "avi"];

/// Whether a file extension denotes a supported image format.
pub fn is_image_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| extension.eq_ignore_ascii_case(ext))
}

/// Whether a file extension denotes a supported video format.
pub fn is_video_extension(extension: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| extension.eq_ignore_ascii_case(ext))
}
