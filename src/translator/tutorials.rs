//! Section translators for tutorial-style substructures.
//!
//! One translator per substructure. Each is a plain function over the
//! semantic value and the mutable translation state; recursion into
//! nested content goes through the markup compiler and the media
//! registrar.

use tracing::debug;

use super::RenderNodeTranslator;
use super::hierarchy;
use crate::context::{AssetContext, NodeKind, ResolutionResult, Traversal};
use crate::render::{
    ASSESSMENTS_ANCHOR, AssessmentsRenderSection, CallToActionSection, ChapterRenderSection,
    ContentAndMediaLayout, ContentAndMediaSection, ContentLayout, FileReference,
    IntroRenderSection, MediaPlacement, RenderAssessment, RenderBlockContent, RenderChoice,
    RenderInlineContent, RenderReferenceIdentifier, RenderTile, RenderTutorialSection,
    ResourcesRenderSection, TutorialSectionsRenderSection, VolumeRenderSection, first_paragraph,
};
use crate::semantic::{
    Assessments, Chapter, Choice, Code, ContentAndMedia, ImageMedia, Intro, Justification,
    MarkupContainer, MarkupLayout, Media, MultipleChoice, Resources, ResolvedTopicReference,
    Semantic, Stack, Step, Steps, StepsItem, Tile, TutorialReference, TutorialSection,
    VideoMedia, Volume,
};
use crate::util::{split_lines, url_readable_fragment};
use crate::{Error, Result};

pub(crate) fn translate_image_media(
    image: &ImageMedia,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderReferenceIdentifier {
    translator.register_render_reference(
        Some(&image.source),
        None,
        image.alt_text.as_deref(),
        AssetContext::Display,
    )
}

pub(crate) fn translate_video_media(
    video: &VideoMedia,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderReferenceIdentifier {
    translator.register_render_reference(
        Some(&video.source),
        video.poster.as_ref(),
        None,
        AssetContext::Display,
    )
}

pub(crate) fn translate_media(
    media: &Media,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderReferenceIdentifier {
    match media {
        Media::Image(image) => translate_image_media(image, translator),
        Media::Video(video) => translate_video_media(video, translator),
    }
}

/// Translates an intro. The background image falls back from the video's
/// poster to the image's own source; that order is significant.
pub(crate) fn translate_intro(
    intro: &Intro,
    translator: &mut RenderNodeTranslator<'_>,
) -> IntroRenderSection {
    let mut section = IntroRenderSection::new(&intro.title);
    section.content = translator.visit_markup_container(&intro.content);

    section.image = intro
        .image
        .as_ref()
        .map(|image| translate_image_media(image, translator));
    section.video = intro
        .video
        .as_ref()
        .map(|video| translate_video_media(video, translator));

    section.background_image = intro
        .video
        .as_ref()
        .and_then(|video| video.poster.as_ref())
        .map(|poster| {
            translator.register_render_reference(Some(poster), None, None, AssetContext::Display)
        })
        .or_else(|| {
            intro.image.as_ref().map(|image| {
                translator.register_render_reference(
                    Some(&image.source),
                    None,
                    None,
                    AssetContext::Display,
                )
            })
        });

    section
}

/// Translates a chapter, or nothing when the chapter has no tutorial
/// references. Chapters without tutorials are invisible, not empty.
pub(crate) fn translate_chapter(
    chapter: &Chapter,
    translator: &mut RenderNodeTranslator<'_>,
) -> Option<ChapterRenderSection> {
    if chapter.topic_references.is_empty() {
        return None;
    }

    Some(ChapterRenderSection {
        name: chapter.name.clone(),
        content: translator.visit_markup_container(&chapter.content),
        tutorials: chapter
            .topic_references
            .iter()
            .map(|reference| translate_tutorial_reference(reference, translator))
            .collect(),
        image: chapter
            .image
            .as_ref()
            .map(|image| translate_image_media(image, translator)),
    })
}

pub(crate) fn translate_volume(
    volume: &Volume,
    translator: &mut RenderNodeTranslator<'_>,
) -> VolumeRenderSection {
    VolumeRenderSection {
        name: volume.name.clone(),
        image: volume
            .image
            .as_ref()
            .map(|image| translate_image_media(image, translator)),
        content: volume
            .content
            .as_ref()
            .map(|content| translator.visit_markup_container(content)),
        chapters: volume
            .chapters
            .iter()
            .filter_map(|chapter| translate_chapter(chapter, translator))
            .collect(),
    }
}

pub(crate) fn translate_tutorial_reference(
    reference: &TutorialReference,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderReferenceIdentifier {
    match translator
        .context
        .resolve(&reference.topic, &translator.bundle.root_reference)
    {
        ResolutionResult::Resolved(resolved) => {
            translate_resolved_topic_reference(&resolved, translator)
        }
        ResolutionResult::Unresolved(unresolved) => {
            // Record the miss so the identifier still materializes as an
            // unresolvable entry in the references table.
            let identifier =
                RenderReferenceIdentifier::new(unresolved.topic_url.to_string());
            translator.collected_unresolved_references.push(unresolved);
            identifier
        }
    }
}

pub(crate) fn translate_resolved_topic_reference(
    reference: &ResolvedTopicReference,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderReferenceIdentifier {
    translator.collected_topic_references.push(reference.clone());
    RenderReferenceIdentifier::new(reference.absolute_string())
}

pub(crate) fn translate_content_and_media(
    content_and_media: &ContentAndMedia,
    translator: &mut RenderNodeTranslator<'_>,
) -> ContentAndMediaSection {
    let media = content_and_media
        .media
        .as_ref()
        .map(|media| translate_media(media, translator));

    ContentAndMediaSection {
        layout: content_and_media.layout.map(|layout| match layout {
            crate::semantic::ContentAndMediaLayout::Horizontal => ContentAndMediaLayout::Horizontal,
            crate::semantic::ContentAndMediaLayout::Vertical => ContentAndMediaLayout::Vertical,
        }),
        title: content_and_media.title.clone(),
        eyebrow: content_and_media.eyebrow.clone(),
        content: translator.visit_markup_container(&content_and_media.content),
        media,
        media_position: match content_and_media.media_position {
            crate::semantic::MediaPosition::Leading => MediaPlacement::Leading,
            crate::semantic::MediaPosition::Trailing => MediaPlacement::Trailing,
        },
    }
}

pub(crate) fn translate_stack(
    stack: &Stack,
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<ContentAndMediaSection> {
    stack
        .content_and_media
        .iter()
        .map(|content_and_media| translate_content_and_media(content_and_media, translator))
        .collect()
}

/// Reads a code file through the data provider and registers a file
/// reference holding its lines.
///
/// An unreadable or non-UTF-8 file aborts only this registration and
/// yields the empty identifier.
pub(crate) fn translate_code(
    code: &Code,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderReferenceIdentifier {
    let file_type = match code.file_name.rsplit_once('.') {
        Some((_, extension)) => extension.to_string(),
        None => String::new(),
    };

    let Some(asset) = translator
        .context
        .resolve_asset(&code.file_reference.path, &translator.identifier)
    else {
        debug!(file = %code.file_reference.path, "code file not in asset index");
        return RenderReferenceIdentifier::empty();
    };
    let Some(url) = asset.default_variant() else {
        return RenderReferenceIdentifier::empty();
    };
    let contents = match translator.data_provider.contents_of_url(url) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(_) => {
                debug!(file = %code.file_reference.path, "code file is not UTF-8");
                return RenderReferenceIdentifier::empty();
            }
        },
        Err(error) => {
            debug!(file = %code.file_reference.path, %error, "code file unreadable");
            return RenderReferenceIdentifier::empty();
        }
    };

    let identifier = RenderReferenceIdentifier::new(&code.file_reference.path);
    translator.tables.files.insert(
        code.file_reference.path.clone(),
        FileReference {
            identifier: identifier.clone(),
            file_name: code.file_name.clone(),
            file_type: file_type.clone(),
            syntax: file_type,
            content: split_lines(&contents),
        },
    );
    identifier
}

/// Translates a step into a single step block bundling body, caption,
/// media, code reference and the optional runtime preview derived from
/// the code's preview asset.
pub(crate) fn translate_step(
    step: &Step,
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<RenderBlockContent> {
    let content = translator.visit_markup_container(&step.content);
    let caption = translator.visit_markup_container(&step.caption);

    let media = step
        .media
        .as_ref()
        .map(|media| translate_media(media, translator));
    let code = step
        .code
        .as_ref()
        .map(|code| translate_code(code, translator));

    let runtime_preview = step.code.as_ref().and_then(|code| {
        code.preview.as_ref().map(|preview| match preview {
            Media::Image(image) => translator.register_render_reference(
                Some(&image.source),
                None,
                image.alt_text.as_deref(),
                AssetContext::Display,
            ),
            Media::Video(video) => translator.register_render_reference(
                Some(&video.source),
                None,
                None,
                AssetContext::Display,
            ),
        })
    });

    vec![RenderBlockContent::Step {
        content,
        caption,
        media,
        code,
        runtime_preview,
    }]
}

pub(crate) fn translate_steps(
    steps: &Steps,
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<RenderBlockContent> {
    steps
        .content
        .iter()
        .flat_map(|item| match item {
            StepsItem::Step(step) => translate_step(step, translator),
            StepsItem::Markup(block) => {
                translator.visit_markup_container(&MarkupContainer(vec![block.clone()]))
            }
        })
        .collect()
}

pub(crate) fn translate_markup_layouts(
    layouts: &[MarkupLayout],
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<ContentLayout> {
    layouts
        .iter()
        .map(|layout| match layout {
            MarkupLayout::Markup(container) => ContentLayout::FullWidth {
                content: translator.visit_markup_container(container),
            },
            MarkupLayout::ContentAndMedia(content_and_media) => ContentLayout::ContentAndMedia {
                content: translate_content_and_media(content_and_media, translator),
            },
            MarkupLayout::Stack(stack) => ContentLayout::Columns {
                content: translate_stack(stack, translator),
            },
        })
        .collect()
}

/// Translates a tutorial section. The anchor assigned here is provisional;
/// the tutorial page translator overwrites it with the positionally
/// corresponding on-page landmark fragment.
pub(crate) fn translate_tutorial_section(
    section: &TutorialSection,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderTutorialSection {
    let content = translate_markup_layouts(&section.introduction, translator);
    let steps = section
        .steps
        .as_ref()
        .map(|steps| translate_steps(steps, translator))
        .unwrap_or_default();

    RenderTutorialSection {
        title: section.title.clone(),
        content,
        steps,
        anchor: url_readable_fragment(&section.title),
    }
}

pub(crate) fn translate_justification(
    justification: &Justification,
    translator: &mut RenderNodeTranslator<'_>,
) -> Vec<RenderBlockContent> {
    translator.visit_markup_container(&justification.content)
}

pub(crate) fn translate_choice(
    choice: &Choice,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderChoice {
    RenderChoice {
        content: translator.visit_markup_container(&choice.content),
        is_correct: choice.is_correct,
        justification: translate_justification(&choice.justification, translator),
        reaction: choice.justification.reaction.clone(),
    }
}

pub(crate) fn translate_multiple_choice(
    question: &MultipleChoice,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderAssessment {
    RenderAssessment {
        title: translator.visit_markup_container(&question.question_phrasing),
        content: translator.visit_markup_container(&question.content),
        choices: question
            .choices
            .iter()
            .map(|choice| translate_choice(choice, translator))
            .collect(),
    }
}

pub(crate) fn translate_assessments(
    assessments: &Assessments,
    translator: &mut RenderNodeTranslator<'_>,
) -> AssessmentsRenderSection {
    AssessmentsRenderSection {
        assessments: assessments
            .questions
            .iter()
            .map(|question| translate_multiple_choice(question, translator))
            .collect(),
        anchor: ASSESSMENTS_ANCHOR.to_string(),
    }
}

pub(crate) fn translate_tile(
    tile: &Tile,
    translator: &mut RenderNodeTranslator<'_>,
) -> RenderTile {
    let action = tile.destination.as_ref().map(|destination| {
        translator.visit_link(destination, Some(tile.identifier.default_call_to_action()))
    });

    RenderTile {
        identifier: tile.identifier.as_str().to_string(),
        title: tile.title.clone(),
        content: translator.visit_markup_container(&tile.content),
        action,
        media: None,
    }
}

pub(crate) fn translate_resources(
    resources: &Resources,
    translator: &mut RenderNodeTranslator<'_>,
) -> ResourcesRenderSection {
    ResourcesRenderSection {
        tiles: resources
            .tiles
            .iter()
            .map(|tile| translate_tile(tile, translator))
            .collect(),
        content: translator.visit_markup_container(&resources.content),
    }
}

/// Builds the tutorial-sections section of a tutorial page and attaches
/// anchors by positional correspondence with the page's on-page landmark
/// children. A length mismatch between the two lists is a correctness
/// bug, reported as a fatal hierarchy error.
pub(crate) fn translate_tutorial_sections(
    sections: &[TutorialSection],
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<TutorialSectionsRenderSection> {
    let mut tasks: Vec<RenderTutorialSection> = sections
        .iter()
        .map(|section| translate_tutorial_section(section, translator))
        .collect();

    let landmarks = translator
        .context
        .children_of_kind(&translator.identifier, NodeKind::OnPageLandmark);
    hierarchy::check_positional_correspondence(
        &translator.identifier.absolute_string(),
        tasks.len(),
        landmarks.len(),
    )?;

    for (task, landmark) in tasks.iter_mut().zip(&landmarks) {
        task.anchor = landmark.reference.fragment.clone().unwrap_or_default();
    }

    Ok(TutorialSectionsRenderSection { tasks })
}

/// Generates a call to action pointing at the page that follows the
/// current one in the enclosing volume's breadth-first order. The last
/// page of a volume produces none.
pub(crate) fn call_to_action(
    image: Option<&ImageMedia>,
    volume: &ResolvedTopicReference,
    translator: &mut RenderNodeTranslator<'_>,
) -> Result<Option<CallToActionSection>> {
    // All tutorials and tutorial articles of the learning path, in order.
    let mut surrounding_topics = Vec::new();
    translator.context.traverse_breadth_first(volume, &mut |node| {
        if matches!(node.kind, NodeKind::Tutorial | NodeKind::TutorialArticle) {
            surrounding_topics.push(node.clone());
        }
        Traversal::Continue
    });

    let next_topic = surrounding_topics
        .iter()
        .position(|topic| topic.reference == translator.identifier)
        .and_then(|position| surrounding_topics.get(position + 1));
    let Some(next_topic) = next_topic else {
        return Ok(None);
    };
    let next_topic = next_topic.clone();

    let entity = translator.context.entity(&next_topic.reference)?;
    let (title, abstract_markup) = match &entity.semantic {
        Semantic::Tutorial(tutorial) => (
            tutorial.intro.title.clone(),
            Some(tutorial.intro.content.clone()),
        ),
        Semantic::TutorialArticle(article) => (
            article
                .title
                .clone()
                .or_else(|| article.intro.as_ref().map(|intro| intro.title.clone()))
                .unwrap_or_default(),
            article.intro.as_ref().map(|intro| intro.content.clone()),
        ),
        _ => {
            return Err(Error::InvalidHierarchy(format!(
                "call-to-action target {} is not a tutorial or tutorial article",
                next_topic.reference
            )));
        }
    };

    let (overriding_title, eyebrow) = match next_topic.kind {
        NodeKind::Tutorial => ("Get started", "Tutorial"),
        _ => ("Read article", "Article"),
    };

    let reference =
        translate_resolved_topic_reference(&next_topic.reference, translator);
    let abstract_content = abstract_markup
        .map(|markup| first_paragraph(&translator.visit_markup_container(&markup)))
        .unwrap_or_default();
    let media = image.map(|image| translate_image_media(image, translator));

    Ok(Some(CallToActionSection {
        title,
        abstract_content,
        media,
        action: RenderInlineContent::Reference {
            identifier: reference,
            is_active: true,
            overriding_title: Some(overriding_title.to_string()),
            overriding_title_inline_content: Some(vec![RenderInlineContent::text(
                overriding_title,
            )]),
        },
        featured_eyebrow: eyebrow.to_string(),
    }))
}
