//! Dismissible error banner.

use iced::widget::{button, container, row, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_MD, SPACING_SM, button_ghost, container_banner};

/// Banner with a message and a dismiss button.
pub fn error_banner<'a, M: Clone + 'a>(message: String, on_dismiss: M) -> Element<'a, M> {
    let icon = container(lucide::circle_alert().size(16)).style(|theme: &Theme| {
        container::Style {
            text_color: Some(theme.extended_palette().danger.base.color),
            ..Default::default()
        }
    });

    container(
        row![
            icon,
            text(message).size(14),
            space::horizontal(),
            button(lucide::x().size(14))
                .on_press(on_dismiss)
                .padding([4.0, 8.0])
                .style(button_ghost),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(container_banner)
    .into()
}
