// SPDX-License-Identifier: MPL-2.0
//! Story content: the ordered pages and what each of them shows.
//!
//! A story is either the built-in one or read from a `story.toml` file.
//! Every section of the file is optional and falls back to the built-in
//! content, so a file can override only the gallery or only the counters.
//!
//! ```toml
//! [[pages]]
//! kind = "cover"
//!
//! [[pages]]
//! kind = "gallery"
//! title = "Our Moments"
//!
//! [cover]
//! greeting = "Hey you, you are my"
//! words = ["sunshine", "world"]
//!
//! [[counters]]
//! label = "As a Couple"
//! since = "2024-07-01"
//!
//! [gallery]
//! directory = "photos"
//! images = ["first.jpg", "second.jpg"]
//! ```

pub mod defaults;

use crate::config::Config;
use crate::error::{Error, Result, StoryError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the config directory when no story path is given.
pub const STORY_FILE: &str = "story.toml";

/// The kind of content a page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Cover,
    Journey,
    TimeTogether,
    Gallery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub kind: PageKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub greeting: String,
    pub words: Vec<String>,
    /// Photo file name, looked up in the gallery directory.
    pub photo: Option<String>,
}

/// One entry of the journey timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Free text, e.g. "10 July, 2024" or "Yet To Happen".
    pub date: String,
    pub event: String,
    #[serde(default)]
    pub emoji: String,
}

/// A running duration counter ("As Friends" since a date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub label: String,
    pub since: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub directory: PathBuf,
    pub images: Vec<String>,
}

/// Complete, validated presentation content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub pages: Vec<Page>,
    pub cover: Cover,
    pub timeline: Vec<Milestone>,
    pub counters: Vec<Counter>,
    pub gallery: Gallery,
}

// =============================================================================
// File Format
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoryFile {
    pages: Option<Vec<PageEntry>>,
    cover: Option<CoverEntry>,
    timeline: Option<Vec<Milestone>>,
    counters: Option<Vec<CounterEntry>>,
    gallery: Option<GalleryEntry>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    kind: PageKind,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CoverEntry {
    greeting: Option<String>,
    words: Option<Vec<String>>,
    photo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CounterEntry {
    label: String,
    since: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GalleryEntry {
    directory: Option<PathBuf>,
    images: Option<Vec<String>>,
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, StoryError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| StoryError::InvalidDate(raw.to_string()))
}

impl Story {
    /// Parses a story from TOML text. Relative gallery directories are
    /// resolved against `base_dir`.
    pub fn from_toml(content: &str, base_dir: &Path) -> Result<Self> {
        let file: StoryFile = toml::from_str(content)?;
        let story = Self::from_file(file, base_dir)?;
        story.validate()?;
        Ok(story)
    }

    fn from_file(file: StoryFile, base_dir: &Path) -> std::result::Result<Self, StoryError> {
        let pages = match file.pages {
            Some(entries) => entries
                .into_iter()
                .map(|entry| Page {
                    kind: entry.kind,
                    title: entry
                        .title
                        .unwrap_or_else(|| defaults::page_title(entry.kind).to_string()),
                })
                .collect(),
            None => defaults::pages(),
        };

        let default_cover = defaults::cover();
        let cover = match file.cover {
            Some(entry) => Cover {
                greeting: entry.greeting.unwrap_or(default_cover.greeting),
                words: entry.words.unwrap_or(default_cover.words),
                photo: entry.photo,
            },
            None => default_cover,
        };

        let counters = match file.counters {
            Some(entries) => entries
                .into_iter()
                .map(|entry| {
                    parse_date(&entry.since).map(|since| Counter {
                        label: entry.label,
                        since,
                    })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?,
            None => defaults::counters(),
        };

        let default_gallery = defaults::gallery();
        let gallery = match file.gallery {
            Some(entry) => Gallery {
                directory: entry
                    .directory
                    .map(|dir| base_dir.join(dir))
                    .unwrap_or(default_gallery.directory),
                images: entry.images.unwrap_or(default_gallery.images),
            },
            None => default_gallery,
        };

        Ok(Self {
            pages,
            cover,
            timeline: file.timeline.unwrap_or_else(defaults::timeline),
            counters,
            gallery,
        })
    }

    /// Checks the structural rules the presentation relies on.
    pub fn validate(&self) -> std::result::Result<(), StoryError> {
        if self.pages.is_empty() {
            return Err(StoryError::NoPages);
        }
        match self.count_pages(PageKind::Gallery) {
            0 => return Err(StoryError::MissingGalleryPage),
            1 => {}
            _ => return Err(StoryError::DuplicateGalleryPage),
        }
        if self.gallery.images.is_empty() {
            return Err(StoryError::EmptyGallery);
        }
        if self.count_pages(PageKind::Cover) > 0 && self.cover.words.is_empty() {
            return Err(StoryError::EmptyCoverWords);
        }
        Ok(())
    }

    fn count_pages(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|page| page.kind == kind).count()
    }

    /// Index of the gallery page. A validated story has exactly one.
    #[must_use]
    pub fn gallery_page_index(&self) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.kind == PageKind::Gallery)
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Full path of the gallery image at `index`.
    #[must_use]
    pub fn image_path(&self, index: usize) -> Option<PathBuf> {
        self.gallery
            .images
            .get(index)
            .map(|name| self.gallery.directory.join(name))
    }

    /// Full path of the cover photo, if one is configured.
    #[must_use]
    pub fn cover_photo_path(&self) -> Option<PathBuf> {
        self.cover
            .photo
            .as_ref()
            .map(|name| self.gallery.directory.join(name))
    }

    /// Replaces the gallery directory (used by `--images` and the config).
    pub fn set_images_dir(&mut self, dir: PathBuf) {
        self.gallery.directory = dir;
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads a story file.
pub fn load_from_path(path: &Path) -> Result<Story> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Story::from_toml(&content, base_dir)
}

/// Where the story shown at startup comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorySource {
    BuiltIn,
    File(PathBuf),
}

/// Resolves the story for this run.
///
/// Precedence is: explicit path (CLI), `[story] path` from the settings,
/// `story.toml` in the config directory, built-in story. A file that cannot
/// be loaded falls back to the built-in story with an i18n warning key.
/// The image directory override applies last, on whichever story was chosen.
pub fn resolve(
    cli_path: Option<PathBuf>,
    cli_images_dir: Option<PathBuf>,
    config: &Config,
    config_dir: Option<PathBuf>,
) -> (Story, StorySource, Option<String>) {
    let candidate = cli_path
        .or_else(|| config.story.path.clone())
        .or_else(|| {
            config_dir
                .map(|dir| dir.join(STORY_FILE))
                .filter(|path| path.exists())
        });

    let (mut story, source, warning) = match candidate {
        Some(path) => match load_from_path(&path) {
            Ok(story) => (story, StorySource::File(path), None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to built-in story");
                let key = match &err {
                    Error::Story(story_err) => story_err.i18n_key(),
                    _ => "notification-story-load-error",
                };
                (Story::default(), StorySource::BuiltIn, Some(key.to_string()))
            }
        },
        None => (Story::default(), StorySource::BuiltIn, None),
    };

    if let Some(dir) = cli_images_dir.or_else(|| config.story.images_dir.clone()) {
        story.set_images_dir(dir);
    }

    (story, source, warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoryConfig;
    use tempfile::tempdir;

    #[test]
    fn built_in_story_ends_on_gallery() {
        let story = Story::default();
        assert!(story.validate().is_ok());
        assert_eq!(story.pages.len(), 4);
        assert_eq!(story.gallery_page_index(), Some(3));
        assert_eq!(story.gallery.images.len(), 8);
        assert_eq!(story.timeline.len(), 6);
        assert_eq!(story.cover.words.len(), 5);
    }

    #[test]
    fn built_in_layout_constants_match_story() {
        let story = Story::default();
        assert_eq!(story.pages.len(), defaults::PAGE_COUNT.get());
        assert_eq!(story.gallery_page_index(), Some(defaults::GALLERY_PAGE));
        assert_eq!(story.gallery.images.len(), defaults::IMAGE_COUNT.get());
    }

    #[test]
    fn built_in_counters_use_fixed_dates() {
        let story = Story::default();
        assert_eq!(story.counters[0].label, "As Friends");
        assert_eq!(story.counters[0].since, parse_date("2025-04-01").unwrap());
        assert_eq!(story.counters[1].label, "As a Couple");
        assert_eq!(story.counters[1].since, parse_date("2024-07-01").unwrap());
    }

    #[test]
    fn empty_file_yields_built_in_story() {
        let story = Story::from_toml("", Path::new("/stories")).expect("empty story");
        assert_eq!(story, Story::default());
    }

    #[test]
    fn partial_file_overrides_only_given_sections() {
        let content = r#"
[gallery]
directory = "photos"
images = ["a.jpg", "b.jpg"]
"#;
        let story = Story::from_toml(content, Path::new("/stories")).expect("valid story");

        assert_eq!(story.gallery.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(story.gallery.directory, PathBuf::from("/stories/photos"));
        assert_eq!(story.pages, defaults::pages());
        assert_eq!(story.counters, defaults::counters());
    }

    #[test]
    fn absolute_gallery_directory_is_kept() {
        let content = "[gallery]\ndirectory = \"/srv/pictures\"\n";
        let story = Story::from_toml(content, Path::new("/stories")).expect("valid story");
        assert_eq!(story.gallery.directory, PathBuf::from("/srv/pictures"));
    }

    #[test]
    fn page_titles_default_per_kind() {
        let content = r#"
[[pages]]
kind = "time-together"

[[pages]]
kind = "gallery"
title = "Photos"
"#;
        let story = Story::from_toml(content, Path::new(".")).expect("valid story");
        assert_eq!(story.pages[0].title, "Our Time Together");
        assert_eq!(story.pages[1].title, "Photos");
        assert_eq!(story.gallery_page_index(), Some(1));
    }

    #[test]
    fn story_without_gallery_is_rejected() {
        let content = "[[pages]]\nkind = \"cover\"\n";
        assert_eq!(
            Story::from_toml(content, Path::new(".")),
            Err(Error::Story(StoryError::MissingGalleryPage))
        );
    }

    #[test]
    fn story_with_two_galleries_is_rejected() {
        let content = "[[pages]]\nkind = \"gallery\"\n\n[[pages]]\nkind = \"gallery\"\n";
        assert_eq!(
            Story::from_toml(content, Path::new(".")),
            Err(Error::Story(StoryError::DuplicateGalleryPage))
        );
    }

    #[test]
    fn story_with_empty_page_list_is_rejected() {
        assert_eq!(
            Story::from_toml("pages = []\n", Path::new(".")),
            Err(Error::Story(StoryError::NoPages))
        );
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let content = "[gallery]\nimages = []\n";
        assert_eq!(
            Story::from_toml(content, Path::new(".")),
            Err(Error::Story(StoryError::EmptyGallery))
        );
    }

    #[test]
    fn cover_without_words_is_rejected() {
        let content = "[cover]\nwords = []\n";
        assert_eq!(
            Story::from_toml(content, Path::new(".")),
            Err(Error::Story(StoryError::EmptyCoverWords))
        );
    }

    #[test]
    fn invalid_counter_date_is_rejected() {
        let content = "[[counters]]\nlabel = \"Soon\"\nsince = \"next spring\"\n";
        assert_eq!(
            Story::from_toml(content, Path::new(".")),
            Err(Error::Story(StoryError::InvalidDate("next spring".into())))
        );
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        assert!(matches!(
            Story::from_toml("pages = = 1", Path::new(".")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn image_path_joins_gallery_directory() {
        let story = Story::default();
        assert_eq!(
            story.image_path(0),
            Some(PathBuf::from("images").join("Snapchat-261752186.jpg"))
        );
        assert_eq!(story.image_path(8), None);
    }

    #[test]
    fn resolve_without_any_source_uses_built_in_story() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (story, source, warning) = resolve(
            None,
            None,
            &Config::default(),
            Some(temp_dir.path().to_path_buf()),
        );
        assert_eq!(story, Story::default());
        assert_eq!(source, StorySource::BuiltIn);
        assert!(warning.is_none());
    }

    #[test]
    fn resolve_finds_story_in_config_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(STORY_FILE);
        fs::write(&path, "[gallery]\nimages = [\"only.jpg\"]\n").expect("write story");

        let (story, source, warning) = resolve(
            None,
            None,
            &Config::default(),
            Some(temp_dir.path().to_path_buf()),
        );
        assert_eq!(story.gallery.images, vec!["only.jpg"]);
        assert_eq!(source, StorySource::File(path));
        assert!(warning.is_none());
    }

    #[test]
    fn resolve_prefers_cli_path_over_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let cli_story = temp_dir.path().join("cli.toml");
        let config_story = temp_dir.path().join("config.toml");
        fs::write(&cli_story, "[gallery]\nimages = [\"cli.jpg\"]\n").expect("write story");
        fs::write(&config_story, "[gallery]\nimages = [\"config.jpg\"]\n").expect("write story");

        let config = Config {
            story: StoryConfig {
                path: Some(config_story),
                images_dir: None,
            },
            ..Config::default()
        };

        let (story, _, _) = resolve(Some(cli_story), None, &config, None);
        assert_eq!(story.gallery.images, vec!["cli.jpg"]);
    }

    #[test]
    fn resolve_falls_back_with_warning_on_invalid_story() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[gallery]\nimages = []\n").expect("write story");

        let (story, source, warning) = resolve(Some(path), None, &Config::default(), None);
        assert_eq!(story, Story::default());
        assert_eq!(source, StorySource::BuiltIn);
        assert_eq!(warning.as_deref(), Some("error-story-empty-gallery"));
    }

    #[test]
    fn resolve_falls_back_with_warning_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.toml");

        let (_, source, warning) = resolve(Some(path), None, &Config::default(), None);
        assert_eq!(source, StorySource::BuiltIn);
        assert_eq!(warning.as_deref(), Some("notification-story-load-error"));
    }

    #[test]
    fn images_dir_override_applies_last() {
        let config = Config {
            story: StoryConfig {
                path: None,
                images_dir: Some(PathBuf::from("/from/config")),
            },
            ..Config::default()
        };

        let (story, _, _) = resolve(None, Some(PathBuf::from("/from/cli")), &config, None);
        assert_eq!(story.gallery.directory, PathBuf::from("/from/cli"));

        let (story, _, _) = resolve(None, None, &config, None);
        assert_eq!(story.gallery.directory, PathBuf::from("/from/config"));
    }
}
