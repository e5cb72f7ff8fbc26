// SPDX-License-Identifier: MPL-2.0
//! Built-in story shown when no story file is configured.

use super::{Counter, Cover, Gallery, Milestone, Page, PageKind, Story};
use chrono::NaiveDate;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Directory the built-in gallery images are read from, relative to the
/// working directory.
pub const DEFAULT_IMAGES_DIR: &str = "images";

const GALLERY_IMAGES: [&str; 8] = [
    "Snapchat-261752186.jpg",
    "Snapchat-1679300968.jpg",
    "Snapchat-217559804.jpg",
    "Snapchat-1230080118.jpg",
    "Snapchat-1681876362.jpg",
    "Snapchat-1389843033.jpg",
    "Snapchat-1754831128.jpg",
    "Snapchat-1220852962~2.jpg",
];

const PAGE_KINDS: [PageKind; 4] = [
    PageKind::Cover,
    PageKind::Journey,
    PageKind::TimeTogether,
    PageKind::Gallery,
];

/// Number of pages of the built-in story.
pub const PAGE_COUNT: NonZeroUsize = non_zero(PAGE_KINDS.len());

/// Index of the built-in gallery page.
pub const GALLERY_PAGE: usize = 3;

/// Number of images of the built-in gallery.
pub const IMAGE_COUNT: NonZeroUsize = non_zero(GALLERY_IMAGES.len());

const _: () = assert!(matches!(PAGE_KINDS[GALLERY_PAGE], PageKind::Gallery));

const fn non_zero(count: usize) -> NonZeroUsize {
    match NonZeroUsize::new(count) {
        Some(count) => count,
        None => panic!("built-in story section is empty"),
    }
}

const COVER_WORDS: [&str; 5] = ["sunshine", "soulmate", "everything", "love", "world"];

const TIMELINE: [(&str, &str, &str); 6] = [
    ("July, 2024", "Our Journey Began", "❤️"),
    ("Yet To Happen", "First Movie Together", "🎬"),
    ("10 July, 2024", "First Hug", "🤗"),
    ("Loading....", "First Trip Together", "✈️"),
    ("08 August, 2024", "First Fight & Patch-up", "💬"),
    ("25 December, 2024", "First Christmas Together", "🎄"),
];

/// Default title of a page of the given kind.
#[must_use]
pub fn page_title(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Cover => "Our Special Story",
        PageKind::Journey => "Our Journey",
        PageKind::TimeTogether => "Our Time Together",
        PageKind::Gallery => "Our Moments",
    }
}

pub(super) fn pages() -> Vec<Page> {
    PAGE_KINDS
        .into_iter()
        .map(|kind| Page {
            kind,
            title: page_title(kind).to_string(),
        })
        .collect()
}

pub(super) fn cover() -> Cover {
    Cover {
        greeting: "Hey Cutiepie, you are my".to_string(),
        words: COVER_WORDS.iter().map(|w| w.to_string()).collect(),
        photo: None,
    }
}

pub(super) fn timeline() -> Vec<Milestone> {
    TIMELINE
        .iter()
        .map(|(date, event, emoji)| Milestone {
            date: date.to_string(),
            event: event.to_string(),
            emoji: emoji.to_string(),
        })
        .collect()
}

pub(super) fn counters() -> Vec<Counter> {
    // Both literals are valid calendar dates.
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Counter {
            label: "As Friends".to_string(),
            since: date(2025, 4, 1),
        },
        Counter {
            label: "As a Couple".to_string(),
            since: date(2024, 7, 1),
        },
    ]
}

pub(super) fn gallery() -> Gallery {
    Gallery {
        directory: PathBuf::from(DEFAULT_IMAGES_DIR),
        images: GALLERY_IMAGES.iter().map(|i| i.to_string()).collect(),
    }
}

impl Default for Story {
    fn default() -> Self {
        Self {
            pages: pages(),
            cover: cover(),
            timeline: timeline(),
            counters: counters(),
            gallery: gallery(),
        }
    }
}
