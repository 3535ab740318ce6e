//! Recipe browser page.
//!
//! Layout, top to bottom: header with the theme toggle, optional error
//! banner, search box, category chips, then the card grid. The detail
//! overlay is stacked on top while it is displayed.

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{RecipeCard, category_bar, error_banner, recipe_modal, search_box};
use crate::message::{BrowseMessage, Message, OverlayMessage};
use crate::state::AppState;
use crate::theme::{
    FlavorColors, GRID_COLUMNS, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_ghost,
};

/// Render the browser page.
pub fn view_browse(state: &AppState) -> Element<'_, Message> {
    let browser = &state.browser;

    let mut page = column![view_header(state)].spacing(SPACING_LG);

    if let Some(error) = &state.error {
        page = page.push(error_banner(error.user_message(), Message::DismissError));
    }

    page = page.push(search_box(
        &browser.filter().search_query,
        "Search recipes...",
        |query| Message::Browse(BrowseMessage::SearchChanged(query)),
        Message::Browse(BrowseMessage::SearchCleared),
    ));

    page = page.push(category_bar(
        browser.categories().options(),
        browser.categories().active(),
        |tag| Message::Browse(BrowseMessage::CategorySelected(tag)),
    ));

    page = page.push(view_summary(state));
    page = page.push(view_grid(state));

    let base: Element<'_, Message> = container(page)
        .padding(SPACING_XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match browser.overlay().detail() {
        Some(detail) if browser.overlay().is_displayed() => {
            let image = browser
                .overlay()
                .card()
                .and_then(|id| state.image_path(id))
                .map(std::path::Path::to_path_buf);
            recipe_modal(
                base,
                detail,
                image,
                Message::Overlay(OverlayMessage::CloseClicked),
                |target| Message::Overlay(OverlayMessage::PointerPressed(target)),
            )
        }
        _ => base,
    }
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let glyph = state.browser.theme().glyph();

    let title = column![
        text("FlavorJourney").size(28),
        text("Recipes from around the world")
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.flavor().text_muted),
            }),
    ]
    .spacing(SPACING_SM / 2.0);

    let toggle = button(text(glyph.as_str()).size(20))
        .on_press(Message::ToggleTheme)
        .padding([6.0, 10.0])
        .style(button_ghost);

    row![title, space::horizontal(), toggle]
        .align_y(Alignment::Center)
        .into()
}

fn view_summary(state: &AppState) -> Element<'_, Message> {
    let browser = &state.browser;
    let label = format!(
        "Showing {} of {} recipes",
        browser.visible_count(),
        browser.catalog().len()
    );

    text(label)
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.flavor().text_muted),
        })
        .into()
}

fn view_grid(state: &AppState) -> Element<'_, Message> {
    let browser = &state.browser;
    let cards: Vec<Element<'_, Message>> = browser
        .visible_cards()
        .map(|(id, card)| {
            RecipeCard::new(
                card.title.clone(),
                card.category.display_label(),
                Message::Overlay(OverlayMessage::ViewRecipe(id)),
            )
            .image(state.image_path(id).map(std::path::Path::to_path_buf))
            .entrance(browser.entrance_progress(id, state.frame))
            .view()
        })
        .collect();

    if cards.is_empty() {
        return view_empty();
    }

    let mut grid = column![].spacing(SPACING_MD);
    let mut cards = cards.into_iter().peekable();
    while cards.peek().is_some() {
        let mut line = row![].spacing(SPACING_LG);
        for element in cards.by_ref().take(GRID_COLUMNS) {
            line = line.push(element);
        }
        grid = grid.push(line);
    }

    scrollable(container(grid).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn view_empty() -> Element<'static, Message> {
    container(
        column![
            lucide::search_x().size(32),
            text("No recipes match your search.").size(16),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(SPACING_XL)
    .style(|theme: &Theme| container::Style {
        text_color: Some(theme.flavor().text_muted),
        ..Default::default()
    })
    .into()
}
