//! Search box component.
//!
//! A text input with search icon and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, FlavorColors, button_ghost, text_input_default};

/// Creates a search input with clear button.
///
/// The clear button only appears while there is text.
///
/// # Example
///
/// ```rust,ignore
/// let search = search_box(
///     &filter.search_query,
///     "Search recipes...",
///     |text| Message::Browse(BrowseMessage::SearchChanged(text)),
///     Message::Browse(BrowseMessage::SearchCleared),
/// );
/// ```
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(16)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.flavor().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(Padding::new(10.0).left(8.0))
        .size(15)
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(36.0))
            .center_x(Length::Fixed(36.0))
            .center_y(Length::Shrink),
        container(input).width(Length::Fill),
    ]
    .align_y(iced::Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(
                container(lucide::x().size(16)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.flavor().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding([2.0, 4.0])
        .style(|theme: &Theme| {
            let flavor = theme.flavor();
            container::Style {
                background: Some(flavor.background_elevated.into()),
                border: Border {
                    color: flavor.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
