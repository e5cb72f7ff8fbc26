// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the presentation session,
//! localization, and the Iced runtime.
//!
//! Startup resolves the config, the locale and the story, then opens a
//! `Session`. From then on every message goes through `update`, and the
//! timers are re-derived from the session in `subscription`.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, defaults::CLOCK_REFRESH_MS, Config};
use crate::domain::ui::{AdvanceInterval, WordCycleInterval};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::presentation::Session;
use crate::story::{self, Story, StorySource};
use crate::ui::pages::gallery::{self, GalleryImage};
use crate::ui::theming::{ColorScheme, ThemeMode};
use chrono::{DateTime, Utc};
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    story: Story,
    session: Session,
    images: Vec<GalleryImage>,
    cover_photo: Option<Handle>,
    colors: ColorScheme,
    theme_mode: ThemeMode,
    /// Resolved once at startup so `System` does not query the OS every frame.
    theme: Theme,
    advance_interval: AdvanceInterval,
    word_interval: WordCycleInterval,
    now: DateTime<Utc>,
    /// i18n key of the warning raised while loading config or story.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("theme_mode", &self.theme_mode)
            .field("advance_interval", &self.advance_interval)
            .field("warning", &self.warning)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 620;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
///
/// Close requests are handled by the app so the session can release its
/// timer before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and story, then opens the session on the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = Self::from_parts(
            flags,
            config,
            i18n,
            config_warning,
            paths::get_app_config_dir(),
        );
        (app, Task::none())
    }

    /// Builds the app from already loaded parts. A `story.toml` is looked up
    /// in `config_dir` when neither the flags nor the config name one. A
    /// story that cannot be presented is replaced by the built-in one.
    pub fn from_parts(
        flags: Flags,
        config: Config,
        i18n: I18n,
        config_warning: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let (story, source, story_warning) =
            story::resolve(flags.story_path, flags.images_dir, &config, config_dir);

        let (story, session, session_warning) = match Session::new(&story) {
            Ok(session) => (story, session, None),
            Err(err) => {
                tracing::warn!(error = %err, "story cannot be presented, using built-in story");
                let key = match &err {
                    Error::Story(story_err) => story_err.i18n_key(),
                    _ => "notification-story-load-error",
                };
                (Story::default(), Session::built_in(), Some(key.to_string()))
            }
        };

        let advance_interval = AdvanceInterval::new(
            config
                .slideshow
                .auto_advance_ms
                .unwrap_or(config::defaults::DEFAULT_AUTO_ADVANCE_MS),
        );
        let word_interval = WordCycleInterval::new(
            config
                .slideshow
                .word_cycle_ms
                .unwrap_or(config::defaults::DEFAULT_WORD_CYCLE_MS),
        );

        match &source {
            StorySource::BuiltIn => tracing::info!("presenting built-in story"),
            StorySource::File(path) => {
                tracing::info!(path = %path.display(), "presenting story file");
            }
        }
        tracing::info!(
            locale = %i18n.current_locale(),
            auto_advance_ms = advance_interval.value(),
            pages = story.pages.len(),
            images = story.gallery.images.len(),
            "session opened"
        );

        let images = gallery::load_images(&story);
        let cover_photo = story
            .cover_photo_path()
            .filter(|path| path.is_file())
            .map(Handle::from_path);
        let theme_mode = config.general.theme_mode;

        Self {
            i18n,
            images,
            cover_photo,
            colors: ColorScheme::for_mode(theme_mode),
            theme_mode,
            theme: theme_mode.iced_theme(),
            advance_interval,
            word_interval,
            now: Utc::now(),
            warning: session_warning.or(story_warning).or(config_warning),
            story,
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let auto_advance_sub = subscription::create_auto_advance_subscription(
            self.session.auto_advance_epoch(),
            self.advance_interval.as_duration(),
        );
        let clock_sub = subscription::create_clock_subscription(
            self.session.needs_clock(),
            Duration::from_millis(CLOCK_REFRESH_MS),
        );
        let word_sub = subscription::create_word_cycle_subscription(
            self.session.cycles_words(),
            self.word_interval.as_duration(),
        );

        Subscription::batch([event_sub, auto_advance_sub, clock_sub, word_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            now: &mut self.now,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            story: &self.story,
            session: &self.session,
            images: &self.images,
            cover_photo: self.cover_photo.as_ref(),
            now: self.now,
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Epoch;
    use crate::ui::controls;
    use std::fs;
    use tempfile::tempdir;

    fn app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        App::from_parts(Flags::default(), config, i18n, None, None)
    }

    fn epoch(app: &App) -> Epoch {
        app.session().auto_advance_epoch().expect("timer armed")
    }

    #[test]
    fn app_starts_on_cover() {
        let app = app();
        assert_eq!(app.session().cursor().current_page(), 0);
        assert_eq!(app.session().live_timers(), 0);
        assert_eq!(app.title(), "Our Special Story");
    }

    #[test]
    fn gallery_scenario_through_update() {
        let mut app = app();
        for _ in 0..3 {
            let _ = app.update(Message::Controls(controls::Message::Next));
        }
        assert_eq!(app.session().cursor().current_page(), 3);
        assert_eq!(app.session().live_timers(), 1);

        let _ = app.update(Message::Next);
        assert_eq!(app.session().cursor().selected_image(), 1);

        let live = epoch(&app);
        let _ = app.update(Message::AutoAdvance(live));
        assert_eq!(app.session().cursor().moment_number(), 3);
    }

    #[test]
    fn invalid_story_file_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("story.toml");
        fs::write(&path, "[gallery]\nimages = []\n").expect("write story");

        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let flags = Flags {
            story_path: Some(path),
            ..Flags::default()
        };
        let app = App::from_parts(flags, config, i18n, None, None);

        assert_eq!(app.warning(), Some("error-story-empty-gallery"));
        assert_eq!(app.session().cursor().image_count(), 8);
    }

    #[test]
    fn config_warning_is_kept_when_story_loads() {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let app = App::from_parts(
            Flags::default(),
            config,
            i18n,
            Some("notification-config-load-error".to_string()),
            None,
        );
        assert_eq!(app.warning(), Some("notification-config-load-error"));
    }

    #[test]
    fn auto_advance_interval_is_clamped() {
        let mut config = Config::default();
        config.slideshow.auto_advance_ms = Some(10);
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let app = App::from_parts(Flags::default(), config, i18n, None, None);
        assert_eq!(
            app.advance_interval.value(),
            config::defaults::MIN_AUTO_ADVANCE_MS
        );
    }

    #[test]
    fn story_is_looked_up_in_given_config_dir() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(story::STORY_FILE),
            "[[pages]]\nkind = \"gallery\"\n\n[gallery]\nimages = [\"a.jpg\", \"b.jpg\"]\n",
        )
        .expect("write story");

        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let app = App::from_parts(
            Flags::default(),
            config,
            i18n,
            None,
            Some(dir.path().to_path_buf()),
        );

        assert_eq!(app.session().cursor().page_count(), 1);
        assert_eq!(app.session().cursor().image_count(), 2);
        assert_eq!(app.warning(), None);
    }

    #[test]
    fn empty_config_dir_presents_built_in_story() {
        let dir = tempdir().expect("temp dir");
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let app = App::from_parts(
            Flags::default(),
            config,
            i18n,
            None,
            Some(dir.path().to_path_buf()),
        );

        assert_eq!(app.session().cursor().page_count(), 4);
        assert_eq!(app.session().cursor().image_count(), 8);
    }
}
