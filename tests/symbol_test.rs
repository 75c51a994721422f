//! Symbol page translation tests: variants, availability, abstracts,
//! relationships and curation.

mod common;

use std::collections::HashMap;

use common::*;

use docbeam::context::{ModuleAvailability, NodeKind, PlatformVersion};
use docbeam::render::{RenderInlineContent, RenderReference, VariantTrait};
use docbeam::semantic::{
    Article, AvailabilityItem, ConstraintKind, GenericConstraint, GroupedSection,
    MarkupContainer, RelationshipGroup, RelationshipKind, Relationships,
    ResolvedTopicReference, Semantic, SourceLanguage, Symbol, SymbolOrigin, TaskGroup,
    TaskGroupLink, TopicReference, UnresolvedTopicReference,
};
use docbeam::translate_page;
use docbeam::url::Url;

struct SymbolFixture {
    bundle: TestBundle,
    module: ResolvedTopicReference,
    sloth: ResolvedTopicReference,
    sibling: ResolvedTopicReference,
    children: Vec<ResolvedTopicReference>,
}

fn placeholder_article(title: &str) -> Semantic {
    Semantic::Article(Box::new(Article {
        title: title.to_string(),
        abstract_section: None,
        discussion: None,
        topics: None,
        see_also: None,
        automatic_task_groups: Vec::new(),
    }))
}

fn base_symbol() -> Symbol {
    Symbol {
        title: "Sloth".to_string(),
        kind_identifier: "swift.struct".to_string(),
        module_name: Some("SlothCreator".to_string()),
        ..Symbol::default()
    }
}

fn symbol_fixture() -> SymbolFixture {
    let mut bundle = TestBundle::new();

    let module = topic("/documentation/slothcreator");
    let sloth = topic("/documentation/slothcreator/sloth");
    let sibling = topic("/documentation/slothcreator/habitat");
    let children = vec![
        topic("/documentation/slothcreator/sloth/eat"),
        topic("/documentation/slothcreator/sloth/food"),
    ];

    bundle.graph.add_page(
        &module,
        NodeKind::Module,
        Semantic::Symbol(Box::new(Symbol {
            title: "SlothCreator".to_string(),
            kind_identifier: "swift.module".to_string(),
            module_name: Some("SlothCreator".to_string()),
            ..Symbol::default()
        })),
        "SlothCreator",
    );
    bundle.graph.add_page(
        &sloth,
        NodeKind::Structure,
        Semantic::Symbol(Box::new(base_symbol())),
        "Sloth",
    );
    bundle.graph.add_page(&sibling, NodeKind::Structure, placeholder_article("Habitat"), "Habitat");
    bundle.graph.add_page(&children[0], NodeKind::Method, placeholder_article("eat"), "eat(_:)");
    bundle.graph.add_page(&children[1], NodeKind::Structure, placeholder_article("Food"), "Food");

    bundle.graph.add_edge(&module, &sloth);
    bundle.graph.add_edge(&module, &sibling);
    bundle.graph.add_edge(&sloth, &children[0]);
    bundle.graph.add_edge(&sloth, &children[1]);

    for (reference, title) in [
        (&module, "SlothCreator"),
        (&sloth, "Sloth"),
        (&sibling, "Habitat"),
        (&children[0], "eat(_:)"),
        (&children[1], "Food"),
    ] {
        bundle.renderer.set_title(reference, title);
    }

    SymbolFixture { bundle, module, sloth, sibling, children }
}

fn translate_symbol(fixture: &SymbolFixture, symbol: Symbol) -> docbeam::RenderNode {
    let info = fixture.bundle.info();
    let mut translator = fixture.bundle.translator(&info, fixture.sloth.clone());
    translate_page(&Semantic::Symbol(Box::new(symbol)), &mut translator)
        .unwrap()
        .unwrap()
}

#[test]
fn test_language_variants_put_primary_language_first() {
    let mut fixture = symbol_fixture();
    fixture.bundle.graph.set_languages(
        &fixture.sloth,
        vec![
            SourceLanguage::objective_c(),
            SourceLanguage::new("data", "Data"),
            SourceLanguage::swift(),
        ],
    );

    let node = translate_symbol(&fixture, base_symbol());

    let languages: Vec<&str> = node
        .variants
        .iter()
        .map(|variant| match &variant.traits[0] {
            VariantTrait::InterfaceLanguage(id) => id.as_str(),
        })
        .collect();
    assert_eq!(
        languages,
        vec!["swift", "data", "occ"],
        "the primary language leads, the rest sort by identifier"
    );
}

#[test]
fn test_availability_rows_filter_and_sort() {
    let fixture = symbol_fixture();

    let mut symbol = base_symbol();
    symbol.availability = vec![
        AvailabilityItem {
            platform_name: "macOS".to_string(),
            introduced: Some("10.15".to_string()),
            deprecated: None,
            unconditionally_unavailable: false,
        },
        AvailabilityItem {
            platform_name: "watchOS".to_string(),
            introduced: None,
            deprecated: None,
            unconditionally_unavailable: false,
        },
        AvailabilityItem {
            platform_name: "tvOS".to_string(),
            introduced: Some("13.0".to_string()),
            deprecated: None,
            unconditionally_unavailable: true,
        },
        AvailabilityItem {
            platform_name: "iOS".to_string(),
            introduced: Some("13.0".to_string()),
            deprecated: None,
            unconditionally_unavailable: false,
        },
    ];

    let node = translate_symbol(&fixture, symbol);
    let names: Vec<&str> = node
        .metadata
        .platforms
        .iter()
        .map(|platform| platform.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["iOS", "macOS"],
        "rows without an introduced version or marked unavailable are dropped"
    );
}

#[test]
fn test_default_availability_fallback_marks_beta() {
    let mut fixture = symbol_fixture();

    let mut info = fixture.bundle.info();
    info.default_availability.insert(
        "SlothCreator".to_string(),
        vec![ModuleAvailability {
            platform_name: "iOS".to_string(),
            platform_version: "13.0".to_string(),
        }],
    );
    info.current_platforms.insert(
        "iOS".to_string(),
        PlatformVersion { version: "13.0".to_string(), beta: true },
    );
    fixture.bundle.info = Some(info);

    let node = translate_symbol(&fixture, base_symbol());

    assert_eq!(node.metadata.platforms.len(), 1);
    assert_eq!(node.metadata.platforms[0].name, "iOS");
    assert_eq!(node.metadata.platforms[0].introduced_at.as_deref(), Some("13.0"));
    assert!(node.metadata.platforms[0].is_beta);
}

#[test]
fn test_symbol_kind_strips_namespace() {
    let fixture = symbol_fixture();
    let node = translate_symbol(&fixture, base_symbol());
    assert_eq!(node.metadata.symbol_kind.as_deref(), Some("struct"));
}

#[test]
fn test_inherited_symbols_get_origin_abstract() {
    let fixture = symbol_fixture();

    let mut symbol = base_symbol();
    symbol.origin = Some(SymbolOrigin {
        identifier: "s:SlothKit5SlothV".to_string(),
        display_name: "SlothKit.Sloth".to_string(),
    });

    let node = translate_symbol(&fixture, symbol);
    assert_eq!(
        node.abstract_content,
        vec![
            RenderInlineContent::text("Inherited from "),
            RenderInlineContent::code_voice("SlothKit.Sloth"),
            RenderInlineContent::text("."),
        ]
    );
}

#[test]
fn test_generated_bundle_abstract_defaults() {
    let mut fixture = symbol_fixture();
    let mut info = fixture.bundle.info();
    info.is_generated = true;
    fixture.bundle.info = Some(info);

    // A non-module symbol gets the placeholder text.
    let node = translate_symbol(&fixture, base_symbol());
    assert_eq!(
        node.abstract_content,
        vec![RenderInlineContent::text("No overview available.")]
    );

    // An undocumented module page gets an empty abstract instead.
    let module_symbol = Symbol {
        title: "SlothCreator".to_string(),
        kind_identifier: "swift.module".to_string(),
        module_name: Some("SlothCreator".to_string()),
        ..Symbol::default()
    };
    let info = fixture.bundle.info();
    let mut translator = fixture.bundle.translator(&info, fixture.module.clone());
    let node = translate_page(&Semantic::Symbol(Box::new(module_symbol)), &mut translator)
        .unwrap()
        .unwrap();
    assert_eq!(node.abstract_content, vec![RenderInlineContent::text("")]);
}

#[test]
fn test_relationship_sections_order_and_constraints() {
    let fixture = symbol_fixture();

    let mut symbol = base_symbol();
    let legacy_url = Url::parse(&format!("doc://{BUNDLE}/documentation/legacy/nest")).unwrap();
    let legacy = TopicReference::Unresolved(UnresolvedTopicReference::new(legacy_url.clone()));

    let mut constraints = HashMap::new();
    constraints.insert(
        TopicReference::Resolved(fixture.sibling.clone()),
        vec![GenericConstraint {
            kind: ConstraintKind::Conformance,
            left_type_name: "Element".to_string(),
            right_type_name: "Equatable".to_string(),
        }],
    );
    let mut target_fallbacks = HashMap::new();
    target_fallbacks.insert(legacy.clone(), "Legacy Nest".to_string());

    symbol.relationships = Relationships {
        groups: vec![
            RelationshipGroup {
                kind: RelationshipKind::ConformsTo,
                destinations: vec![
                    TopicReference::Resolved(fixture.sibling.clone()),
                    TopicReference::Resolved(fixture.children[1].clone()),
                    legacy.clone(),
                ],
            },
            RelationshipGroup {
                kind: RelationshipKind::InheritsFrom,
                destinations: vec![TopicReference::Resolved(fixture.module.clone())],
            },
        ],
        constraints,
        target_fallbacks,
    };

    let node = translate_symbol(&fixture, symbol);

    let titles: Vec<&str> = node
        .relationship_sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Inherits From", "Conforms To"],
        "groups render in their declared section order"
    );

    // Within a group, destinations order by resolved title: Food,
    // Habitat, Legacy Nest.
    assert_eq!(
        node.relationship_sections[1].identifiers,
        vec![
            fixture.children[1].absolute_string(),
            fixture.sibling.absolute_string(),
            legacy_url.to_string(),
        ]
    );

    // The unresolvable destination materializes with its fallback title.
    match node.references.get(legacy_url.as_str()) {
        Some(RenderReference::Unresolvable { title, .. }) => assert_eq!(title, "Legacy Nest"),
        other => panic!("expected an unresolvable reference, got {other:?}"),
    }

    // Collected constraints decorate the destination's reference record.
    match node.references.get(&fixture.sibling.absolute_string()) {
        Some(RenderReference::Topic(reference)) => {
            let conformance = reference.conformance.as_ref().expect("constraints attach");
            assert_eq!(conformance.availability_prefix, "Available when");
        }
        other => panic!("expected a topic reference, got {other:?}"),
    }
}

#[test]
fn test_topic_curation_deduplicates_authored_children() {
    let fixture = symbol_fixture();

    let mut symbol = base_symbol();
    symbol.topics = Some(GroupedSection {
        task_groups: vec![TaskGroup {
            heading: Some("Feeding".to_string()),
            abstract_content: None,
            discussion: None,
            links: vec![TaskGroupLink::SymbolLink(
                "documentation/slothcreator/sloth/eat".to_string(),
            )],
        }],
    });

    let node = translate_symbol(&fixture, symbol);

    let titles: Vec<Option<&str>> = node
        .topic_sections
        .iter()
        .map(|section| section.title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![Some("Feeding"), Some("Structures")],
        "children already curated by hand never reappear in by-kind groups"
    );
    assert_eq!(
        node.topic_sections[1].identifiers,
        vec![fixture.children[1].absolute_string()]
    );
}

#[test]
fn test_generated_see_also_lists_siblings() {
    let fixture = symbol_fixture();
    let node = translate_symbol(&fixture, base_symbol());

    let generated = node
        .see_also_sections
        .iter()
        .find(|section| section.generated)
        .expect("symbols get a generated see-also from their siblings");
    assert_eq!(generated.title.as_deref(), Some("SlothCreator"));
    assert_eq!(
        generated.identifiers,
        vec![fixture.sibling.absolute_string()],
        "the page itself never appears in its own see-also"
    );
}

#[test]
fn test_deprecation_summary_is_carried() {
    let fixture = symbol_fixture();

    let mut symbol = base_symbol();
    symbol.deprecated_summary = Some(MarkupContainer::paragraph("Use Hammock instead."));

    let node = translate_symbol(&fixture, symbol);
    let summary = node.deprecation_summary.expect("summary renders");
    assert_eq!(summary.len(), 1);
}
