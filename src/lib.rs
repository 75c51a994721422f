//! # docbeam
//!
//! A library that converts a documentation bundle's parsed semantic model
//! into a denormalized render tree: a serializable, presentation-ready
//! representation consumed by a rendering frontend.
//!
//! ## Features
//!
//! - Translate symbol, article, tutorial, tutorial-article and technology
//!   pages into [`RenderNode`] values
//! - Collect and deduplicate every topic, media, link, file and download
//!   reference discovered during the walk into the node's references table
//! - Reuse pre-rendered content through an optional read-only cache
//! - Curate topic and see-also sections from authored and automatically
//!   generated task groups, preserving authored order
//!
//! ## Architecture
//!
//! Translation is a single-threaded, depth-first walk per page. The
//! [`RenderNodeTranslator`] owns the page's mutable translation state and
//! dispatches each semantic variant to its translator; section translators
//! recurse through the markup compiler and the media registrar, all
//! accumulating into the same state. A final materialization pass expands
//! the collected topic references into the node's references table, which
//! guarantees that every reference identifier embedded in content has a
//! matching entry.
//!
//! The crate performs no markup parsing, link resolution or bundle I/O of
//! its own; those arrive through the narrow collaborator traits in
//! [`context`].

pub mod context;
pub mod error;
pub mod render;
pub mod semantic;
pub mod translator;
pub(crate) mod util;

pub use error::{Error, Result};
pub use render::{RenderNode, RenderNodeKind, RenderReference, RenderTree};
pub use translator::{RenderNodeTranslator, translate_page};

// Topic and asset URLs in the public API use the `url` crate's types.
pub use url;
