//! gameboard-ui: GUI for GameBoard
//!
//! GPUI window showing both player areas with hover glow and click feedback.

use gameboard_core::BoardConfig;
use gameboard_core::logging::{init_logging, quiet_from_env};
use gpui::{
    App, AppContext, Application, Bounds, Focusable, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, px, size,
};

mod state;
mod theme;
mod views;

use views::BoardView;

fn main() {
    init_logging(quiet_from_env());

    let config = BoardConfig::load_or_default();
    tracing::info!(
        event = "ui.app.starting",
        title = config.window.title(),
        min_width = config.window.min_width(),
        min_height = config.window.min_height()
    );

    Application::new().run(move |cx: &mut App| {
        let min_size = size(
            px(config.window.min_width() as f32),
            px(config.window.min_height() as f32),
        );
        let bounds = Bounds::centered(None, min_size, cx);
        let title = SharedString::from(config.window.title().to_string());

        let result = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(min_size),
                titlebar: Some(TitlebarOptions {
                    title: Some(title),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| BoardView::new(&config, cx));
                window.focus(&view.focus_handle(cx));
                view
            },
        );

        if let Err(e) = result {
            tracing::error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
        }
    });
}
