// SPDX-License-Identifier: MPL-2.0
//! Gallery page: the selected image and its "Moment n" caption.
//!
//! Image handles are created once when the story is loaded. A file that does
//! not exist gets no handle and is drawn as a placeholder carrying its name.

use crate::i18n::fluent::I18n;
use crate::story::Story;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Handle};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    ContentFit, Element, Length,
};

/// One gallery entry, resolved against the gallery directory.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub name: String,
    pub handle: Option<Handle>,
}

/// Resolves every gallery image of `story`.
pub fn load_images(story: &Story) -> Vec<GalleryImage> {
    story
        .gallery
        .images
        .iter()
        .enumerate()
        .map(|(index, name)| GalleryImage {
            name: name.clone(),
            handle: story.image_path(index).and_then(|path| {
                if path.is_file() {
                    Some(Handle::from_path(path))
                } else {
                    tracing::warn!(path = %path.display(), "gallery image not found");
                    None
                }
            }),
        })
        .collect()
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub title: &'a str,
    pub image: Option<&'a GalleryImage>,
    /// 1-based number shown under the image.
    pub moment: usize,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = super::title(ctx.title, ctx.colors.title_pink);

    let picture: Element<'a, Message> = match ctx.image {
        Some(GalleryImage {
            handle: Some(handle),
            ..
        }) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(sizing::GALLERY_WIDTH))
            .height(Length::Fixed(sizing::GALLERY_HEIGHT))
            .into(),
        other => placeholder(&ctx, other.map(|image| image.name.as_str())),
    };
    let picture = Container::new(picture)
        .width(Length::Fixed(sizing::GALLERY_WIDTH))
        .height(Length::Fixed(sizing::GALLERY_HEIGHT))
        .style(styles::container::photo_frame(false));

    let caption = Text::new(moment_label(ctx.i18n, ctx.moment))
        .size(typography::BODY_LG)
        .color(ctx.colors.text_primary);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(picture)
        .push(caption)
        .into()
}

fn placeholder<'a, Message: 'a>(ctx: &ViewContext<'a>, name: Option<&'a str>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("gallery-image-missing"))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        );
    if let Some(name) = name {
        content = content.push(
            Text::new(name)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card(ctx.colors))
        .into()
}

/// Caption under the gallery image, e.g. "Moment 3".
pub fn moment_label(i18n: &I18n, moment: usize) -> String {
    i18n.tr_with_args("gallery-moment", &[("number", moment.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_images_get_no_handle() {
        let dir = tempdir().expect("temp dir");
        let mut story = Story::default();
        story.set_images_dir(dir.path().to_path_buf());
        fs::write(dir.path().join(&story.gallery.images[2]), b"not really a jpeg")
            .expect("write image");

        let images = load_images(&story);

        assert_eq!(images.len(), story.gallery.images.len());
        assert!(images[2].handle.is_some());
        assert!(images[0].handle.is_none());
        assert_eq!(images[0].name, story.gallery.images[0]);
    }

    #[test]
    fn moment_label_uses_number() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(moment_label(&i18n, 1), "Moment 1");
        assert_eq!(moment_label(&i18n, 8), "Moment 8");
    }

    #[test]
    fn gallery_renders_placeholder() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let image = GalleryImage {
            name: "missing.jpg".to_string(),
            handle: None,
        };
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            title: "Our Moments",
            image: Some(&image),
            moment: 1,
        });
    }
}
