//! The typed reference tables accumulated during one page translation.

use std::collections::HashMap;

use crate::render::{
    DownloadReference, FileReference, ImageReference, LinkReference, RenderNode,
    VideoReference, XcodeRequirementReference,
};

/// The six per-kind reference tables of a translation pass.
///
/// Keys are stable identifiers (asset paths, external URLs, requirement
/// titles). Inserting under an existing key overwrites; the one exception,
/// alt-text preservation for images, is handled at registration time by
/// the media registrar.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub images: HashMap<String, ImageReference>,
    pub videos: HashMap<String, VideoReference>,
    pub files: HashMap<String, FileReference>,
    pub links: HashMap<String, LinkReference>,
    pub requirements: HashMap<String, XcodeRequirementReference>,
    pub downloads: HashMap<String, DownloadReference>,
}

impl ReferenceTables {
    /// Merges another set of tables into this one. Later entries win on
    /// key collisions.
    pub fn merge(&mut self, other: ReferenceTables) {
        self.images.extend(other.images);
        self.videos.extend(other.videos);
        self.files.extend(other.files);
        self.links.extend(other.links);
        self.requirements.extend(other.requirements);
        self.downloads.extend(other.downloads);
    }

    /// Copies every table into the node's references map, in a fixed
    /// order; later tables overwrite earlier ones on key collisions.
    pub fn drain_into(&self, node: &mut RenderNode) {
        for (key, reference) in &self.files {
            node.references.insert(key.clone(), reference.clone().into());
        }
        for (key, reference) in &self.images {
            node.references.insert(key.clone(), reference.clone().into());
        }
        for (key, reference) in &self.videos {
            node.references.insert(key.clone(), reference.clone().into());
        }
        for (key, reference) in &self.requirements {
            node.references.insert(key.clone(), reference.clone().into());
        }
        for (key, reference) in &self.downloads {
            node.references.insert(key.clone(), reference.clone().into());
        }
        for (key, reference) in &self.links {
            node.references.insert(key.clone(), reference.clone().into());
        }
    }
}
