pub mod app;
pub mod logging;
pub mod screens;
pub mod widgets;

pub use app::CalculatorApp;
