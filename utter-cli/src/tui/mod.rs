pub mod app;
pub mod event_handler;
pub mod events;
pub mod input_handler;
pub mod state;
pub mod ui;
pub mod widgets;

pub use app::TuiApp;
