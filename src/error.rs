// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Story(StoryError),
}

/// Specific error types for invalid story content.
/// Used to provide user-friendly, localized warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// The story declares no pages at all
    NoPages,

    /// No page of kind `gallery` was declared
    MissingGalleryPage,

    /// More than one page of kind `gallery` was declared
    DuplicateGalleryPage,

    /// The designated gallery page index lies outside the page list
    GalleryPageOutOfRange { index: usize, page_count: usize },

    /// The gallery has no images
    EmptyGallery,

    /// The cover page has no words to cycle through
    EmptyCoverWords,

    /// A counter start date is not a `YYYY-MM-DD` calendar date
    InvalidDate(String),
}

impl StoryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StoryError::NoPages => "error-story-no-pages",
            StoryError::MissingGalleryPage => "error-story-missing-gallery",
            StoryError::DuplicateGalleryPage => "error-story-duplicate-gallery",
            StoryError::GalleryPageOutOfRange { .. } => "error-story-gallery-out-of-range",
            StoryError::EmptyGallery => "error-story-empty-gallery",
            StoryError::EmptyCoverWords => "error-story-empty-words",
            StoryError::InvalidDate(_) => "error-story-invalid-date",
        }
    }
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryError::NoPages => write!(f, "Story has no pages"),
            StoryError::MissingGalleryPage => write!(f, "Story has no gallery page"),
            StoryError::DuplicateGalleryPage => {
                write!(f, "Story declares more than one gallery page")
            }
            StoryError::GalleryPageOutOfRange { index, page_count } => write!(
                f,
                "Gallery page {} is out of range for {} pages",
                index, page_count
            ),
            StoryError::EmptyGallery => write!(f, "Gallery has no images"),
            StoryError::EmptyCoverWords => write!(f, "Cover page has no words"),
            StoryError::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Story(e) => write!(f, "Story Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StoryError> for Error {
    fn from(err: StoryError) -> Self {
        Error::Story(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
