//! Topic and resource references used throughout the semantic model.
//!
//! A [`ResolvedTopicReference`] identifies one page in a documentation
//! bundle. Its absolute string doubles as the key under which the page
//! appears in a render node's references table, so it must be stable
//! across runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// The URL scheme used by in-bundle documentation links.
pub const TOPIC_URL_SCHEME: &str = "doc";

/// A reference to a known page in a documentation bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTopicReference {
    /// The identifier of the bundle the page belongs to.
    pub bundle_identifier: String,
    /// The absolute path of the page inside the bundle, starting with `/`.
    pub path: String,
    /// An optional on-page fragment.
    pub fragment: Option<String>,
}

impl ResolvedTopicReference {
    /// Creates a reference to a page at the given bundle path.
    pub fn new(bundle_identifier: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bundle_identifier: bundle_identifier.into(),
            path: path.into(),
            fragment: None,
        }
    }

    /// Returns a copy of this reference pointing at an on-page fragment.
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Self {
        Self {
            fragment: Some(fragment.into()),
            ..self.clone()
        }
    }

    /// The stable string form of this reference, used as a references-table
    /// key and embedded in render content.
    pub fn absolute_string(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!(
                "{TOPIC_URL_SCHEME}://{}{}#{fragment}",
                self.bundle_identifier, self.path
            ),
            None => format!("{TOPIC_URL_SCHEME}://{}{}", self.bundle_identifier, self.path),
        }
    }

    /// The last path component, e.g. `"creating-views"` for
    /// `/tutorials/swiftui/creating-views`.
    pub fn last_path_component(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// The path used when presenting this page, lowercased for routing.
    pub fn presentation_path(&self) -> String {
        self.path.to_lowercase()
    }
}

impl fmt::Display for ResolvedTopicReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.absolute_string())
    }
}

/// A topic reference that could not be resolved against the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedTopicReference {
    /// The URL as it appeared in the source content.
    pub topic_url: Url,
    /// A fallback title to present when the target is unknown.
    pub title: Option<String>,
}

impl UnresolvedTopicReference {
    pub fn new(topic_url: Url) -> Self {
        Self { topic_url, title: None }
    }

    pub fn with_title(topic_url: Url, title: impl Into<String>) -> Self {
        Self {
            topic_url,
            title: Some(title.into()),
        }
    }
}

/// Either a resolved or an unresolved topic reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopicReference {
    Resolved(ResolvedTopicReference),
    Unresolved(UnresolvedTopicReference),
}

impl TopicReference {
    /// The resolved reference, if this reference is resolved.
    pub fn as_resolved(&self) -> Option<&ResolvedTopicReference> {
        match self {
            TopicReference::Resolved(resolved) => Some(resolved),
            TopicReference::Unresolved(_) => None,
        }
    }

    /// The stable string form used for reference-table keys.
    pub fn absolute_string(&self) -> String {
        match self {
            TopicReference::Resolved(resolved) => resolved.absolute_string(),
            TopicReference::Unresolved(unresolved) => unresolved.topic_url.to_string(),
        }
    }
}

/// Returns whether the URL uses the in-bundle documentation scheme.
pub fn url_has_topic_scheme(url: &Url) -> bool {
    url.scheme() == TOPIC_URL_SCHEME
}

/// A reference to a logical asset (image, video, file) inside a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReference {
    /// The identifier of the bundle the asset belongs to.
    pub bundle_identifier: String,
    /// The logical path of the asset, relative to the bundle's asset index.
    pub path: String,
}

impl ResourceReference {
    pub fn new(bundle_identifier: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bundle_identifier: bundle_identifier.into(),
            path: path.into(),
        }
    }

    /// The asset's file extension, or an empty string when it has none.
    pub fn file_extension(&self) -> &str {
        match self.path.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => "",
        }
    }
}

/// A source language a documentation page is available in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLanguage {
    /// The language identifier, e.g. `"swift"`.
    pub id: String,
    /// The language display name, e.g. `"Swift"`.
    pub name: String,
}

impl SourceLanguage {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    /// The primary language of the documentation ecosystem; always sorted
    /// first among presentation variants.
    pub fn swift() -> Self {
        Self::new("swift", "Swift")
    }

    pub fn objective_c() -> Self {
        Self::new("occ", "Objective-C")
    }

    pub fn is_primary(&self) -> bool {
        self.id == "swift"
    }
}

/// A generic constraint attached to a symbol relationship, e.g.
/// `Element conforms to Equatable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericConstraint {
    pub kind: ConstraintKind,
    /// The constrained type parameter, e.g. `"Element"`.
    pub left_type_name: String,
    /// The type the parameter is constrained to, e.g. `"Equatable"`.
    pub right_type_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    Conformance,
    Superclass,
    SameType,
}

impl ConstraintKind {
    /// The verb phrase joining the two type names in rendered text.
    pub fn spelling(&self) -> &'static str {
        match self {
            ConstraintKind::Conformance => "conforms to",
            ConstraintKind::Superclass => "inherits",
            ConstraintKind::SameType => "is",
        }
    }
}
