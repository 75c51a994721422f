//! Curation tests: authored task groups, automatic groups, by-kind
//! fallback curation and see-also synthesis on article pages.

mod common;

use common::*;

use docbeam::context::NodeKind;
use docbeam::render::Role;
use docbeam::semantic::{
    Article, AutomaticTaskGroup, GroupedSection, InlineMarkup, PositionPreference,
    ResolvedTopicReference, Semantic, TaskGroup, TaskGroupLink,
};
use docbeam::translate_page;
use docbeam::url::Url;

struct ArticleFixture {
    bundle: TestBundle,
    article: ResolvedTopicReference,
    siblings: Vec<ResolvedTopicReference>,
    children: Vec<ResolvedTopicReference>,
}

fn empty_article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        abstract_section: None,
        discussion: None,
        topics: None,
        see_also: None,
        automatic_task_groups: Vec::new(),
    }
}

/// An article curated under a collection, with two siblings and two
/// children of different kinds.
fn article_fixture() -> ArticleFixture {
    let mut bundle = TestBundle::new();

    let parent = topic("/documentation/sloths");
    let article = topic("/documentation/sloths/care");
    let siblings = vec![
        topic("/documentation/sloths/feeding"),
        topic("/documentation/sloths/habitat"),
    ];
    let children = vec![
        topic("/documentation/sloths/care/washing"),
        topic("/documentation/sloths/care/brush"),
    ];

    bundle.graph.add_page(
        &parent,
        NodeKind::CollectionGroup,
        Semantic::Article(Box::new(empty_article("Sloths"))),
        "Sloths",
    );
    bundle.graph.add_page(
        &article,
        NodeKind::Article,
        Semantic::Article(Box::new(empty_article("Caring for Sloths"))),
        "Caring for Sloths",
    );
    for (sibling, title) in siblings.iter().zip(["Feeding", "Habitat"]) {
        bundle.graph.add_page(
            sibling,
            NodeKind::Article,
            Semantic::Article(Box::new(empty_article(title))),
            title,
        );
        bundle.renderer.set_title(sibling, title);
    }
    // One article child and one structure child, to exercise by-kind groups.
    bundle.graph.add_page(
        &children[0],
        NodeKind::Article,
        Semantic::Article(Box::new(empty_article("Washing"))),
        "Washing",
    );
    bundle.graph.add_page(
        &children[1],
        NodeKind::Structure,
        Semantic::Article(Box::new(empty_article("Brush"))),
        "Brush",
    );

    bundle.graph.add_edge(&parent, &article);
    for sibling in &siblings {
        bundle.graph.add_edge(&parent, sibling);
    }
    for child in &children {
        bundle.graph.add_edge(&article, child);
    }
    for child in &children {
        bundle.renderer.set_title(child, child.last_path_component());
    }

    ArticleFixture { bundle, article, siblings, children }
}

fn translate_article(fixture: &ArticleFixture, article: Article) -> docbeam::RenderNode {
    let info = fixture.bundle.info();
    let mut translator = fixture.bundle.translator(&info, fixture.article.clone());
    translate_page(&Semantic::Article(Box::new(article)), &mut translator)
        .unwrap()
        .unwrap()
}

#[test]
fn test_group_without_resolvable_links_is_dropped() {
    let fixture = article_fixture();

    let mut article = empty_article("Caring for Sloths");
    article.topics = Some(GroupedSection {
        task_groups: vec![TaskGroup {
            heading: Some("Ghosts".to_string()),
            abstract_content: None,
            discussion: None,
            links: vec![TaskGroupLink::SymbolLink("documentation/unknown".to_string())],
        }],
    });

    let node = translate_article(&fixture, article);
    assert!(
        node.topic_sections.is_empty(),
        "a group with zero resolvable identifiers never renders"
    );
    // With no topic sections at all the article keeps its plain eyebrow.
    assert_eq!(node.metadata.role_heading.as_deref(), Some("Article"));
    assert_eq!(node.metadata.role, Some(Role::CollectionGroup));
}

#[test]
fn test_topic_section_assembly_order() {
    let fixture = article_fixture();

    let mut article = empty_article("Caring for Sloths");
    article.topics = Some(GroupedSection {
        task_groups: vec![TaskGroup {
            heading: Some("Care Guides".to_string()),
            abstract_content: Some(vec![InlineMarkup::text("The guides.")]),
            discussion: None,
            links: vec![TaskGroupLink::SymbolLink(
                "documentation/sloths/feeding".to_string(),
            )],
        }],
    });
    article.automatic_task_groups = vec![
        AutomaticTaskGroup {
            title: "Beginner".to_string(),
            references: vec![fixture.siblings[1].clone()],
            position: PositionPreference::Top,
        },
        AutomaticTaskGroup {
            title: "Advanced".to_string(),
            references: vec![fixture.children[0].clone()],
            position: PositionPreference::Bottom,
        },
    ];

    let node = translate_article(&fixture, article);
    let titles: Vec<Option<&str>> = node
        .topic_sections
        .iter()
        .map(|section| section.title.as_deref())
        .collect();

    // Authored first, then "top" automatic groups; automatic groups
    // suppress by-kind fallback; "bottom" groups close the list.
    assert_eq!(
        titles,
        vec![Some("Care Guides"), Some("Beginner"), Some("Advanced")]
    );
    assert!(!node.topic_sections[0].generated);
    assert!(node.topic_sections[1].generated);
    assert!(node.topic_sections[2].generated);

    // Curated identifiers all materialize.
    for section in &node.topic_sections {
        for identifier in &section.identifiers {
            assert!(node.references.contains_key(identifier));
        }
    }

    assert!(node.metadata.role_heading.is_none());
}

#[test]
fn test_by_kind_fallback_when_nothing_is_curated() {
    let fixture = article_fixture();
    let node = translate_article(&fixture, empty_article("Caring for Sloths"));

    let titles: Vec<Option<&str>> = node
        .topic_sections
        .iter()
        .map(|section| section.title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![Some("Structures"), Some("Articles")],
        "children group by kind in the fixed curation order"
    );

    assert_eq!(
        node.topic_sections[1].identifiers,
        vec![fixture.children[0].absolute_string()]
    );
    assert_eq!(
        node.topic_sections[0].identifiers,
        vec![fixture.children[1].absolute_string()]
    );
    assert_eq!(node.metadata.role, Some(Role::Article));
}

#[test]
fn test_see_also_authored_then_generated_siblings() {
    let fixture = article_fixture();

    let mut article = empty_article("Caring for Sloths");
    article.see_also = Some(GroupedSection {
        task_groups: vec![TaskGroup {
            heading: Some("Elsewhere".to_string()),
            abstract_content: None,
            discussion: None,
            links: vec![TaskGroupLink::Link(
                Url::parse("https://example.com/guide").unwrap(),
            )],
        }],
    });

    let node = translate_article(&fixture, article);

    assert_eq!(node.see_also_sections.len(), 2);
    assert_eq!(node.see_also_sections[0].title.as_deref(), Some("Elsewhere"));
    assert!(!node.see_also_sections[0].generated);
    assert_eq!(
        node.see_also_sections[0].identifiers,
        vec!["https://example.com/guide".to_string()],
        "see-also groups may carry external links"
    );

    let generated = &node.see_also_sections[1];
    assert!(generated.generated);
    assert_eq!(generated.title.as_deref(), Some("Sloths"));
    let expected: Vec<String> = fixture
        .siblings
        .iter()
        .map(ResolvedTopicReference::absolute_string)
        .collect();
    assert_eq!(
        generated.identifiers, expected,
        "generated see-also lists the siblings, never the page itself"
    );

    for identifier in &generated.identifiers {
        assert!(node.references.contains_key(identifier));
    }
}

#[test]
fn test_abstract_and_discussion_defaults() {
    let fixture = article_fixture();

    let node = translate_article(&fixture, empty_article("Caring for Sloths"));
    assert_eq!(
        node.abstract_content,
        vec![docbeam::render::RenderInlineContent::text("No overview available.")]
    );

    let mut article = empty_article("Caring for Sloths");
    article.discussion = Some(docbeam::semantic::MarkupContainer::paragraph("Some prose."));
    let node = translate_article(&fixture, article);
    assert_eq!(
        node.primary_content_sections[0].heading.as_deref(),
        Some("Overview"),
        "discussions that do not open with a heading get the default one"
    );
}
