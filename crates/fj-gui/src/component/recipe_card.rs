//! Recipe card component for the browse grid.
//!
//! # Usage
//!
//! ```rust,ignore
//! RecipeCard::new("Tomato Soup", "Soup", Message::View(id))
//!     .image(Some(path))
//!     .entrance(0.4)
//!     .view()
//! ```

use std::path::PathBuf;

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Padding, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_MD, CARD_IMAGE_HEIGHT, CARD_WIDTH, ENTRANCE_OFFSET, FlavorColors, SPACING_MD,
    SPACING_SM, SPACING_XS, button_primary,
};

/// A card in the recipe grid.
pub struct RecipeCard<M> {
    title: String,
    category: String,
    image: Option<PathBuf>,
    entrance: f32,
    on_view: M,
}

impl<M: Clone + 'static> RecipeCard<M> {
    /// Create a fully entered card.
    pub fn new(title: impl Into<String>, category: impl Into<String>, on_view: M) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image: None,
            entrance: 1.0,
            on_view,
        }
    }

    /// Local image file; `None` draws a placeholder with the title as alt text.
    pub fn image(mut self, path: Option<PathBuf>) -> Self {
        self.image = path;
        self
    }

    /// Entrance progress (0.0 to 1.0).
    pub fn entrance(mut self, progress: f32) -> Self {
        self.entrance = progress.clamp(0.0, 1.0);
        self
    }

    /// Build the card element.
    pub fn view(self) -> Element<'static, M> {
        let progress = self.entrance;

        let picture: Element<'static, M> = match self.image {
            Some(path) => image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(CARD_IMAGE_HEIGHT))
                .opacity(progress)
                .into(),
            None => image_placeholder(self.title.clone(), CARD_IMAGE_HEIGHT),
        };

        let category = text(self.category)
            .size(11)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.extended_palette().primary.base.color, progress)),
            });

        let title = text(self.title).size(17).style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.extended_palette().background.base.text, progress)),
        });

        let view_button = button(
            row![lucide::book_open().size(14), text("View Recipe").size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .on_press(self.on_view)
        .padding([6.0, 12.0])
        .style(button_primary);

        let body = column![category, title, Space::new().height(SPACING_XS), view_button]
            .spacing(SPACING_XS)
            .padding(SPACING_MD);

        let card = container(column![picture, body].spacing(SPACING_SM))
            .width(Length::Fixed(CARD_WIDTH))
            .clip(true)
            .style(move |theme: &Theme| {
                let flavor = theme.flavor();
                container::Style {
                    background: Some(fade(flavor.background_elevated, progress).into()),
                    border: Border {
                        radius: BORDER_RADIUS_MD.into(),
                        width: 1.0,
                        color: fade(flavor.border_subtle, progress),
                    },
                    shadow: Shadow {
                        color: fade(flavor.shadow, progress),
                        offset: Vector::new(0.0, 2.0),
                        blur_radius: 8.0,
                    },
                    ..Default::default()
                }
            });

        // Cards slide up into place; the slot keeps its final height.
        let lift = ENTRANCE_OFFSET * (1.0 - progress);
        container(card)
            .padding(Padding::ZERO.top(lift).bottom(ENTRANCE_OFFSET - lift))
            .into()
    }
}

/// Box shown instead of a missing or remote image.
pub(crate) fn image_placeholder<M: 'static>(alt: String, height: f32) -> Element<'static, M> {
    container(
        column![lucide::eye_off().size(20), text(alt).size(12)]
            .spacing(SPACING_XS)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(height))
    .style(|theme: &Theme| {
        let flavor = theme.flavor();
        container::Style {
            background: Some(flavor.background_inset.into()),
            text_color: Some(flavor.text_muted),
            ..Default::default()
        }
    })
    .into()
}

fn fade(color: Color, progress: f32) -> Color {
    Color {
        a: color.a * progress,
        ..color
    }
}
