//! Card slot component.
//!
//! Draws the resting outline, the hover glow on top of it at the ramp's
//! current alpha, and the slot label.

use gameboard_core::CardSlot;
use gameboard_core::slot::{SLOT_CORNER_ARC, SLOT_HEIGHT, SLOT_LABEL_SIZE, SLOT_WIDTH};
use gpui::{Context, ElementId, FontWeight, IntoElement, div, prelude::*, px};

use crate::theme;
use crate::views::BoardView;

/// How a slot takes horizontal space in its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotWidth {
    /// Preferred slot width.
    Fixed,
    /// Share the row equally with its siblings.
    Fill,
}

/// Render a single card slot.
pub fn render_card_slot(
    slot: &CardSlot,
    width: SlotWidth,
    cx: &mut Context<BoardView>,
) -> impl IntoElement {
    let id = slot.id();
    let alpha = slot.glow().alpha();
    let radius = px(SLOT_CORNER_ARC / 2.0);
    let label = slot.label();

    div()
        .id(ElementId::Name(id.key().into()))
        .relative()
        .h(px(SLOT_HEIGHT))
        .map(|this| match width {
            SlotWidth::Fixed => this.w(px(SLOT_WIDTH)).flex_none(),
            SlotWidth::Fill => this.flex_1(),
        })
        .rounded(radius)
        .border_2()
        .border_color(theme::color(slot.border_color()))
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .on_hover(cx.listener(move |view, hovered: &bool, _, cx| {
            view.on_slot_hover(id, *hovered, cx);
        }))
        .on_mouse_up(
            gpui::MouseButton::Left,
            cx.listener(move |view, _, _, cx| {
                view.on_slot_click(id, cx);
            }),
        )
        // Glow strokes, drawn over the outline
        .when(alpha > 0.0, |this| {
            this.child(
                div()
                    .absolute()
                    .inset_0()
                    .rounded(radius)
                    .border_4()
                    .border_color(theme::with_alpha(theme::color(slot.glow_color()), alpha)),
            )
        })
        .when(!label.is_empty(), |this| {
            this.child(
                div()
                    .text_size(px(SLOT_LABEL_SIZE))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme::text())
                    .child(label),
            )
        })
}
