// SPDX-License-Identifier: MPL-2.0
//! Presentation cursor: which page is shown and which gallery image is selected.
//!
//! The cursor has two modes derived from its position. While the current page
//! is the gallery page, next/previous move between images and wrap around at
//! both ends. On every other page they move between pages and clamp at the
//! first and last page.

use crate::error::StoryError;
use std::num::NonZeroUsize;

/// What a cursor operation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Nothing moved (clamped at an edge, or a tick off the gallery page).
    None,
    /// The current page changed.
    Page { from: usize, to: usize },
    /// The selected gallery image changed.
    Image { from: usize, to: usize },
}

impl Navigation {
    /// Returns true if the selected image changed.
    #[must_use]
    pub fn changed_image(self) -> bool {
        matches!(self, Navigation::Image { .. })
    }
}

/// Tracks the current page and the selected gallery image.
///
/// # Example
///
/// ```
/// use story_deck::domain::navigation::PresentationCursor;
///
/// let mut cursor = PresentationCursor::new(4, 3, 8).unwrap();
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.on_gallery_page());
///
/// cursor.advance();
/// assert_eq!(cursor.moment_number(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationCursor {
    page_count: usize,
    gallery_page: usize,
    image_count: usize,
    current_page: usize,
    selected_image: usize,
}

impl PresentationCursor {
    /// Creates a cursor on the first page with the first image selected.
    pub fn new(
        page_count: usize,
        gallery_page: usize,
        image_count: usize,
    ) -> Result<Self, StoryError> {
        let pages = NonZeroUsize::new(page_count).ok_or(StoryError::NoPages)?;
        if gallery_page >= page_count {
            return Err(StoryError::GalleryPageOutOfRange {
                index: gallery_page,
                page_count,
            });
        }
        let images = NonZeroUsize::new(image_count).ok_or(StoryError::EmptyGallery)?;

        Ok(Self::from_layout(pages, gallery_page, images))
    }

    /// Creates a cursor for a layout whose counts are already known to be
    /// non-zero. A gallery index past the last page is clamped onto it.
    #[must_use]
    pub fn from_layout(
        page_count: NonZeroUsize,
        gallery_page: usize,
        image_count: NonZeroUsize,
    ) -> Self {
        Self {
            page_count: page_count.get(),
            gallery_page: gallery_page.min(page_count.get() - 1),
            image_count: image_count.get(),
            current_page: 0,
            selected_image: 0,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    #[must_use]
    pub fn gallery_page(&self) -> usize {
        self.gallery_page
    }

    /// Returns true while next/previous act on gallery images.
    #[must_use]
    pub fn on_gallery_page(&self) -> bool {
        self.current_page == self.gallery_page
    }

    /// 1-based number of the selected image, as shown under the photo.
    #[must_use]
    pub fn moment_number(&self) -> usize {
        self.selected_image + 1
    }

    /// Moves forward: next image on the gallery page, next page elsewhere.
    pub fn advance(&mut self) -> Navigation {
        if self.on_gallery_page() {
            self.step_image_forward()
        } else {
            let to = (self.current_page + 1).min(self.page_count - 1);
            self.move_to_page(to)
        }
    }

    /// Moves backward: previous image on the gallery page, previous page elsewhere.
    pub fn retreat(&mut self) -> Navigation {
        if self.on_gallery_page() {
            let to = (self.selected_image + self.image_count - 1) % self.image_count;
            self.move_to_image(to)
        } else {
            let to = self.current_page.saturating_sub(1);
            self.move_to_page(to)
        }
    }

    /// Timer-driven advance. Only moves the image, and only on the gallery page.
    pub fn tick(&mut self) -> Navigation {
        if self.on_gallery_page() {
            self.step_image_forward()
        } else {
            Navigation::None
        }
    }

    /// Jumps to a page, clamped to the page range.
    pub fn go_to_page(&mut self, page: usize) -> Navigation {
        let to = page.min(self.page_count - 1);
        self.move_to_page(to)
    }

    /// Selects an image directly, clamped to the gallery range.
    pub fn select_image(&mut self, image: usize) -> Navigation {
        let to = image.min(self.image_count - 1);
        self.move_to_image(to)
    }

    fn step_image_forward(&mut self) -> Navigation {
        let to = (self.selected_image + 1) % self.image_count;
        self.move_to_image(to)
    }

    fn move_to_page(&mut self, to: usize) -> Navigation {
        let from = self.current_page;
        if from == to {
            return Navigation::None;
        }
        self.current_page = to;
        Navigation::Page { from, to }
    }

    fn move_to_image(&mut self, to: usize) -> Navigation {
        let from = self.selected_image;
        if from == to {
            return Navigation::None;
        }
        self.selected_image = to;
        Navigation::Image { from, to }
    }
}
