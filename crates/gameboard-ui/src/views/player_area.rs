//! Player area component.
//!
//! Lays out one player's health circle and cards row in the order the seat's
//! layout dictates, so the bottom player mirrors the top one.

use gameboard_core::PlayerArea;
use gameboard_core::layout::{CARDS_ROW_GAP, FIELD_SLOT_GAP, HEALTH_ROW_INSET, Row};
use gpui::{AnyElement, Context, IntoElement, div, prelude::*, px};

use crate::views::BoardView;
use crate::views::card_slot::{SlotWidth, render_card_slot};
use crate::views::health_circle::render_health_circle;

/// Render a player's area.
pub fn render_player_area(area: &PlayerArea, cx: &mut Context<BoardView>) -> impl IntoElement {
    let layout = area.layout();

    let mut rows: Vec<AnyElement> = Vec::with_capacity(layout.rows.len());
    for row in layout.rows {
        let element = match row {
            Row::Health => div()
                .py(px(HEALTH_ROW_INSET))
                .flex()
                .justify_center()
                .child(render_health_circle(area.health()))
                .into_any_element(),
            Row::Cards => render_cards_row(area, cx).into_any_element(),
        };
        rows.push(element);
    }

    div()
        .w_full()
        .flex()
        .flex_col()
        .children(rows)
}

/// West slot, field row, east slot.
fn render_cards_row(area: &PlayerArea, cx: &mut Context<BoardView>) -> impl IntoElement {
    let layout = area.layout();

    let mut fields: Vec<AnyElement> = Vec::with_capacity(layout.field_row.len());
    for kind in &layout.field_row {
        fields.push(render_card_slot(area.slot(*kind), SlotWidth::Fill, cx).into_any_element());
    }

    div()
        .w_full()
        .flex()
        .flex_row()
        .items_center()
        .gap(px(CARDS_ROW_GAP))
        .child(render_card_slot(area.slot(layout.west), SlotWidth::Fixed, cx))
        .child(
            div()
                .flex_1()
                .flex()
                .flex_row()
                .gap(px(FIELD_SLOT_GAP))
                .children(fields),
        )
        .child(render_card_slot(area.slot(layout.east), SlotWidth::Fixed, cx))
}
