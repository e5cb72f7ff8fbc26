// SPDX-License-Identifier: MPL-2.0
//! The running presentation: cursor, auto-advance lease and cover word cycle.
//!
//! The session is the only state the UI mutates. After every operation the
//! auto-advance lease is brought in line with the cursor: it is held exactly
//! while the gallery page is shown, and it is renewed whenever the selected
//! image changes so the next automatic step always waits a full interval.

use super::auto_advance::{AutoAdvance, Epoch};
use crate::domain::navigation::{Navigation, PresentationCursor, WordCycle};
use crate::error::{Result, StoryError};
use crate::story::{defaults, PageKind, Story};

#[derive(Debug, Clone)]
pub struct Session {
    cursor: PresentationCursor,
    auto_advance: AutoAdvance,
    words: Option<WordCycle>,
    kinds: Vec<PageKind>,
    closed: bool,
}

impl Session {
    /// Opens a session on the first page of a story.
    pub fn new(story: &Story) -> Result<Self> {
        story.validate()?;

        let gallery_page = story
            .gallery_page_index()
            .ok_or(StoryError::MissingGalleryPage)?;
        let cursor =
            PresentationCursor::new(story.pages.len(), gallery_page, story.gallery.images.len())?;
        Ok(Self::open(story, cursor))
    }

    /// Opens a session on the built-in story, whose layout is fixed at
    /// compile time.
    #[must_use]
    pub fn built_in() -> Self {
        let cursor = PresentationCursor::from_layout(
            defaults::PAGE_COUNT,
            defaults::GALLERY_PAGE,
            defaults::IMAGE_COUNT,
        );
        Self::open(&Story::default(), cursor)
    }

    fn open(story: &Story, cursor: PresentationCursor) -> Self {
        let words = WordCycle::new(story.cover.words.clone()).ok();

        let mut session = Self {
            cursor,
            auto_advance: AutoAdvance::new(),
            words,
            kinds: story.pages.iter().map(|page| page.kind).collect(),
            closed: false,
        };
        session.settle(Navigation::None);
        session
    }

    #[must_use]
    pub fn cursor(&self) -> &PresentationCursor {
        &self.cursor
    }

    /// Kind of the page currently displayed.
    #[must_use]
    pub fn current_kind(&self) -> PageKind {
        self.kinds[self.cursor.current_page()]
    }

    /// Current cover word, when the story has any.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.words.as_ref().map(WordCycle::current)
    }

    /// Epoch of the live auto-advance timer.
    #[must_use]
    pub fn auto_advance_epoch(&self) -> Option<Epoch> {
        self.auto_advance.live_epoch()
    }

    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.auto_advance.live_timers()
    }

    /// Whether the duration counters need a clock refresh.
    #[must_use]
    pub fn needs_clock(&self) -> bool {
        !self.closed && self.current_kind() == PageKind::TimeTogether
    }

    /// Whether the cover word should rotate.
    #[must_use]
    pub fn cycles_words(&self) -> bool {
        !self.closed
            && self.current_kind() == PageKind::Cover
            && self.words.as_ref().is_some_and(|words| words.len() > 1)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn next(&mut self) -> Navigation {
        if self.closed {
            return Navigation::None;
        }
        let navigation = self.cursor.advance();
        self.settle(navigation)
    }

    pub fn previous(&mut self) -> Navigation {
        if self.closed {
            return Navigation::None;
        }
        let navigation = self.cursor.retreat();
        self.settle(navigation)
    }

    pub fn go_to_page(&mut self, page: usize) -> Navigation {
        if self.closed {
            return Navigation::None;
        }
        let navigation = self.cursor.go_to_page(page);
        self.settle(navigation)
    }

    pub fn select_image(&mut self, image: usize) -> Navigation {
        if self.closed {
            return Navigation::None;
        }
        let navigation = self.cursor.select_image(image);
        self.settle(navigation)
    }

    /// Handles a tick from the auto-advance timer identified by `epoch`.
    /// Ticks from released timers are ignored.
    pub fn auto_advance(&mut self, epoch: Epoch) -> Navigation {
        if self.closed || !self.auto_advance.accept(epoch) {
            tracing::trace!(epoch = epoch.value(), "ignoring stale auto-advance tick");
            return Navigation::None;
        }
        let navigation = self.cursor.tick();
        self.settle(navigation)
    }

    /// Rotates the cover word. Only effective while the cover is displayed.
    pub fn cycle_word(&mut self) -> Option<&str> {
        if !self.cycles_words() {
            return None;
        }
        self.words.as_mut().map(|words| words.advance())
    }

    /// Tears the session down and releases the timer.
    pub fn close(&mut self) {
        self.closed = true;
        self.auto_advance.disarm();
    }

    fn settle(&mut self, navigation: Navigation) -> Navigation {
        match navigation {
            Navigation::Page { from, to } => {
                tracing::debug!(from, to, "page changed");
            }
            Navigation::Image { from, to } => {
                tracing::debug!(from, to, "gallery image changed");
            }
            Navigation::None => {}
        }

        self.auto_advance
            .sync(!self.closed && self.cursor.on_gallery_page());
        if navigation.changed_image() {
            self.auto_advance.restart();
        }
        navigation
    }
}
