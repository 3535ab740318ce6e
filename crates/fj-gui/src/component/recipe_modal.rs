//! Recipe detail overlay.
//!
//! Stacks the detail panel over the base view with a scrim behind it.
//! Pressing the scrim reports [`PointerTarget::Scrim`]; pressing the panel
//! itself reports [`PointerTarget::Panel`], so callers can tell them apart.

use std::path::PathBuf;

use fj_browse::{DetailList, DetailView, PointerTarget};
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, space, stack,
    text,
};
use iced::{Alignment, ContentFit, Element, Length, Theme};
use iced_fonts::lucide;

use super::recipe_card::image_placeholder;
use crate::theme::{
    FlavorColors, MODAL_IMAGE_HEIGHT, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, button_ghost, container_modal,
};

/// Overlay the recipe `detail` on top of `base`.
///
/// # Arguments
///
/// * `base` - The page underneath
/// * `detail` - Content snapshot of the open recipe
/// * `image_path` - Local image file, if the recipe has one
/// * `on_close` - Close button message
/// * `on_pointer` - Message factory for pointer presses on the overlay
pub fn recipe_modal<'a, M: Clone + 'static>(
    base: Element<'a, M>,
    detail: &DetailView,
    image_path: Option<PathBuf>,
    on_close: M,
    on_pointer: impl Fn(PointerTarget) -> M,
) -> Element<'a, M> {
    let scrim = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.flavor().backdrop.into()),
                ..Default::default()
            }),
    )
    .on_press(on_pointer(PointerTarget::Scrim));

    let header = row![
        text(detail.title.clone())
            .size(22)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
        space::horizontal(),
        button(lucide::x().size(20))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let picture: Element<'static, M> = match image_path {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(MODAL_IMAGE_HEIGHT))
            .into(),
        None => image_placeholder(detail.image_alt.clone(), MODAL_IMAGE_HEIGHT),
    };

    let body = column![
        picture,
        section("Ingredients", lucide::list().size(16).into(), &detail.ingredients, false),
        section(
            "Instructions",
            lucide::list_ordered().size(16).into(),
            &detail.instructions,
            true,
        ),
    ]
    .spacing(SPACING_LG);

    let panel = container(
        column![header, scrollable(body).height(Length::Fill)].spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH))
    .max_height(720.0)
    .padding(SPACING_LG)
    .style(container_modal);

    let panel = mouse_area(panel).on_press(on_pointer(PointerTarget::Panel));

    stack![base, opaque(scrim), center(opaque(panel))].into()
}

/// A titled ingredient or instruction list.
fn section<M: 'static>(
    title: &'static str,
    icon: Element<'static, M>,
    list: &DetailList,
    numbered: bool,
) -> Element<'static, M> {
    let heading = row![icon, text(title).size(16)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    let entries: Vec<Element<'static, M>> = match list {
        DetailList::Placeholder(placeholder) => vec![
            text(*placeholder)
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.flavor().text_muted),
                })
                .into(),
        ],
        DetailList::Items(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let marker = if numbered {
                    format!("{}.", index + 1)
                } else {
                    "•".to_string()
                };
                row![
                    text(marker).size(14).width(Length::Fixed(24.0)),
                    text(item.clone()).size(14),
                ]
                .spacing(SPACING_XS)
                .into()
            })
            .collect(),
    };

    column![heading, column(entries).spacing(SPACING_XS)]
        .spacing(SPACING_SM)
        .into()
}
