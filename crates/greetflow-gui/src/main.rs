//! GreetFlow - Desktop greeting form
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use greetflow_gui::app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting GreetFlow");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(520.0, 680.0),
            min_size: Some(Size::new(420.0, 560.0)),
            ..Default::default()
        })
        .run()
}
