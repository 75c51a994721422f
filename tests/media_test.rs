//! Media registration tests.
//!
//! Exercises extension classification, alt-text merging, poster
//! registration and the empty-sentinel degradation for unknown assets.

mod common;

use common::*;

use docbeam::render::RenderTree;
use docbeam::semantic::{ImageMedia, ResourceReference, Semantic, VideoMedia};
use proptest::prelude::*;

fn image(source: &str, alt_text: Option<&str>) -> Semantic {
    Semantic::ImageMedia(ImageMedia {
        source: ResourceReference::new(BUNDLE, source),
        alt_text: alt_text.map(str::to_string),
    })
}

fn media_bundle(assets: &[&str]) -> TestBundle {
    let mut bundle = TestBundle::new();
    for name in assets {
        bundle.graph.add_asset(name, asset(name));
    }
    bundle
}

#[test]
fn test_image_registration_returns_path_identifier() {
    let bundle = media_bundle(&["cat.png"]);
    let info = bundle.info();
    let mut translator = bundle.translator(&info, topic("/documentation/pets"));

    let tree = translator.visit(&image("cat.png", Some("A cat"))).unwrap().unwrap();
    let RenderTree::Reference(identifier) = tree else {
        panic!("image media yields a reference identifier");
    };
    assert_eq!(identifier.as_str(), "cat.png");

    let stored = &translator.reference_tables().images["cat.png"];
    assert_eq!(stored.alt_text.as_deref(), Some("A cat"));
}

#[test]
fn test_second_registration_without_alt_text_preserves_first() {
    let bundle = media_bundle(&["cat.png"]);
    let info = bundle.info();
    let mut translator = bundle.translator(&info, topic("/documentation/pets"));

    translator.visit(&image("cat.png", Some("A cat"))).unwrap();
    translator.visit(&image("cat.png", None)).unwrap();

    let stored = &translator.reference_tables().images["cat.png"];
    assert_eq!(
        stored.alt_text.as_deref(),
        Some("A cat"),
        "a registration without alt text preserves the stored alt text"
    );
}

#[test]
fn test_second_registration_with_alt_text_overwrites() {
    let bundle = media_bundle(&["cat.png"]);
    let info = bundle.info();
    let mut translator = bundle.translator(&info, topic("/documentation/pets"));

    translator.visit(&image("cat.png", Some("A cat"))).unwrap();
    translator.visit(&image("cat.png", Some("A sleepy cat"))).unwrap();

    let stored = &translator.reference_tables().images["cat.png"];
    assert_eq!(stored.alt_text.as_deref(), Some("A sleepy cat"));
}

#[test]
fn test_video_registers_poster_before_itself() {
    let bundle = media_bundle(&["demo.mov", "poster.png"]);
    let info = bundle.info();
    let mut translator = bundle.translator(&info, topic("/documentation/pets"));

    let tree = translator
        .visit(&Semantic::VideoMedia(VideoMedia {
            source: ResourceReference::new(BUNDLE, "demo.mov"),
            poster: Some(ResourceReference::new(BUNDLE, "poster.png")),
        }))
        .unwrap()
        .unwrap();
    let RenderTree::Reference(identifier) = tree else {
        panic!("video media yields a reference identifier");
    };
    assert_eq!(identifier.as_str(), "demo.mov");

    let tables = translator.reference_tables();
    let video = &tables.videos["demo.mov"];
    assert_eq!(video.poster.as_ref().map(|id| id.as_str()), Some("poster.png"));
    assert!(
        tables.images.contains_key("poster.png"),
        "the poster image is registered in its own right"
    );
}

#[test]
fn test_unknown_asset_yields_empty_sentinel() {
    let bundle = media_bundle(&[]);
    let info = bundle.info();
    let mut translator = bundle.translator(&info, topic("/documentation/pets"));

    let tree = translator.visit(&image("missing.png", None)).unwrap().unwrap();
    let RenderTree::Reference(identifier) = tree else {
        panic!("image media yields a reference identifier");
    };
    assert!(identifier.is_empty(), "unresolvable assets degrade to the sentinel");
    assert!(translator.reference_tables().images.is_empty());
}

#[test]
fn test_unsupported_extension_registers_nothing_for_display() {
    let bundle = media_bundle(&["archive.zip"]);
    let info = bundle.info();
    let mut translator = bundle.translator(&info, topic("/documentation/pets"));

    let tree = translator.visit(&image("archive.zip", None)).unwrap().unwrap();
    let RenderTree::Reference(identifier) = tree else {
        panic!("image media yields a reference identifier");
    };
    assert!(identifier.is_empty());
    assert!(translator.reference_tables().images.is_empty());
    assert!(translator.reference_tables().downloads.is_empty());
}

proptest! {
    /// Across any sequence of registrations of the same image, the stored
    /// alt text is the most recent one that was actually provided.
    #[test]
    fn prop_alt_text_keeps_last_provided(
        alts in prop::collection::vec(prop::option::of("[a-z]{1,12}"), 1..8)
    ) {
        let bundle = media_bundle(&["cat.png"]);
        let info = bundle.info();
        let mut translator = bundle.translator(&info, topic("/documentation/pets"));

        for alt in &alts {
            translator.visit(&image("cat.png", alt.as_deref())).unwrap();
        }

        let expected = alts.iter().rev().find_map(|alt| alt.clone());
        let stored = translator.reference_tables().images["cat.png"].alt_text.clone();
        prop_assert_eq!(stored, expected);
    }
}
