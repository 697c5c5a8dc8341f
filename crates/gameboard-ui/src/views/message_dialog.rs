//! Modal message dialog shown after a slot click.

use gpui::{Context, IntoElement, div, prelude::*, px};

use crate::theme;
use crate::views::BoardView;

/// Render the click feedback dialog.
///
/// Overlay that dims the board, a message box, and an OK button. Escape and
/// Enter close it too (see `BoardView::on_key_down`).
pub fn render_message_dialog(message: &str, cx: &mut Context<BoardView>) -> impl IntoElement {
    let message = message.to_string();

    // Overlay background
    div()
        .id("message-dialog-overlay")
        .absolute()
        .inset_0()
        .bg(theme::overlay())
        .flex()
        .justify_center()
        .items_center()
        // Slots underneath get neither hover nor clicks while open
        .occlude()
        .child(
            div()
                .id("message-dialog-box")
                .w(px(320.0))
                .bg(theme::dialog_surface())
                .rounded_lg()
                .border_1()
                .border_color(theme::dialog_border())
                .flex()
                .flex_col()
                // Title bar
                .child(
                    div()
                        .px_4()
                        .py_3()
                        .border_b_1()
                        .border_color(theme::dialog_border())
                        .child(div().text_lg().text_color(theme::text()).child("Message")),
                )
                .child(
                    div()
                        .px_4()
                        .py_4()
                        .text_color(theme::text())
                        .child(message),
                )
                // Button row
                .child(
                    div()
                        .px_4()
                        .py_3()
                        .border_t_1()
                        .border_color(theme::dialog_border())
                        .flex()
                        .justify_end()
                        .child(
                            div()
                                .id("message-dialog-ok-btn")
                                .px_4()
                                .py_2()
                                .bg(theme::dialog_border())
                                .hover(|style| style.bg(gpui::rgb(0x555555)))
                                .rounded_md()
                                .cursor_pointer()
                                .on_mouse_up(
                                    gpui::MouseButton::Left,
                                    cx.listener(|view, _, _, cx| {
                                        view.on_dialog_ok(cx);
                                    }),
                                )
                                .child(div().text_color(theme::text()).child("OK")),
                        ),
                ),
        )
}
