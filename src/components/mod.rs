pub mod app;
pub mod chart_view;
pub mod signin_panel;

pub use app::App;
