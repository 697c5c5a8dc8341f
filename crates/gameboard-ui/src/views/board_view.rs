//! Root view for gameboard-ui.
//!
//! Stacks the top player, the center play area and the bottom player.
//! Owns the glow timers: one foreground task per animating slot, spawned when
//! the slot's ramp asks for it and ended when the ramp reports `Stopped`.

use gameboard_core::{BoardConfig, Panel, SlotId, TickOutcome};
use gpui::{
    AnyElement, Context, FocusHandle, Focusable, IntoElement, KeyDownEvent, Render, Window, div,
    prelude::*, px,
};

use crate::state::AppState;
use crate::theme;
use crate::views::message_dialog::render_message_dialog;
use crate::views::player_area::render_player_area;

/// Board window view.
pub struct BoardView {
    state: AppState,
    focus_handle: FocusHandle,
}

impl BoardView {
    pub fn new(config: &BoardConfig, cx: &mut Context<Self>) -> Self {
        Self {
            state: AppState::new(config),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Handle pointer entering or leaving a slot.
    pub fn on_slot_hover(&mut self, id: SlotId, hovered: bool, cx: &mut Context<Self>) {
        if self.state.set_hovered(id, hovered) {
            self.spawn_glow_timer(id, cx);
        }
        cx.notify();
    }

    /// Handle a left click on a slot.
    pub fn on_slot_click(&mut self, id: SlotId, cx: &mut Context<Self>) {
        if self.state.open_slot_message(id) {
            tracing::info!(event = "ui.message_dialog.opened", slot = %id);
            cx.notify();
        }
    }

    /// Handle the OK button in the message dialog.
    pub fn on_dialog_ok(&mut self, cx: &mut Context<Self>) {
        if let Some(slot) = self.state.dialog().slot() {
            tracing::info!(event = "ui.message_dialog.closed", slot = %slot);
        }
        self.state.close_dialog();
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.dialog().is_open() {
            return;
        }

        match event.keystroke.key.as_str() {
            "escape" | "enter" => self.on_dialog_ok(cx),
            _ => {}
        }
    }

    /// Tick the slot's glow on the UI thread until its ramp stops.
    fn spawn_glow_timer(&mut self, id: SlotId, cx: &mut Context<Self>) {
        let interval = self.state.tick_interval();
        tracing::debug!(
            event = "ui.glow_timer.started",
            slot = %id,
            interval_ms = interval.as_millis() as u64
        );

        cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            loop {
                cx.background_executor().timer(interval).await;

                let result = this.update(cx, |view, cx| {
                    let outcome = view.state.tick(id);
                    cx.notify();
                    outcome
                });

                match result {
                    Ok(TickOutcome::Continue) => {}
                    Ok(TickOutcome::Stopped) => {
                        tracing::debug!(event = "ui.glow_timer.stopped", slot = %id);
                        break;
                    }
                    Err(e) => {
                        tracing::debug!(
                            event = "ui.glow_timer.stopped",
                            slot = %id,
                            reason = "view_dropped",
                            error = ?e
                        );
                        break;
                    }
                }
            }
        })
        .detach();
    }
}

impl Focusable for BoardView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for BoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.state.layout().clone();

        let mut panels: Vec<AnyElement> = Vec::with_capacity(layout.panels.len());
        for panel in layout.panels {
            let element = match panel {
                Panel::Player(seat) => {
                    render_player_area(self.state.board().player(seat), cx).into_any_element()
                }
                // Center play area, empty for now
                Panel::PlayArea => div().flex_1().into_any_element(),
            };
            panels.push(element);
        }

        let message = self.state.dialog().message().map(str::to_string);

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .relative()
            .bg(theme::color(layout.background))
            .child(
                div()
                    .size_full()
                    .p(px(layout.padding))
                    .flex()
                    .flex_col()
                    .children(panels),
            )
            .when_some(message, |this, message| {
                this.child(render_message_dialog(&message, cx))
            })
    }
}
