//! Category chip bar.
//!
//! One chip per category; exactly one of them is drawn active.

use fj_model::CategoryTag;
use iced::widget::{button, row, text};
use iced::{Element, Length};

use crate::theme::{SPACING_SM, button_chip};

/// A single category chip with active/inactive state.
///
/// # Example
/// ```ignore
/// CategoryChip::new("Italian", is_active, Message::SelectItalian).view()
/// ```
pub struct CategoryChip<M> {
    label: String,
    active: bool,
    on_select: M,
}

impl<M: Clone + 'static> CategoryChip<M> {
    /// Create a new chip.
    pub fn new(label: impl Into<String>, active: bool, on_select: M) -> Self {
        Self {
            label: label.into(),
            active,
            on_select,
        }
    }

    /// Build the chip element.
    pub fn view(self) -> Element<'static, M> {
        button(text(self.label).size(13))
            .on_press(self.on_select)
            .padding([6.0, 14.0])
            .style(button_chip(self.active))
            .into()
    }
}

/// Row of chips for `options`, with `active` highlighted.
pub fn category_bar<M: Clone + 'static>(
    options: &[CategoryTag],
    active: &CategoryTag,
    on_select: impl Fn(CategoryTag) -> M,
) -> Element<'static, M> {
    let chips = options.iter().map(|tag| {
        CategoryChip::new(tag.display_label(), tag == active, on_select(tag.clone())).view()
    });

    row(chips).spacing(SPACING_SM).width(Length::Fill).wrap().into()
}
