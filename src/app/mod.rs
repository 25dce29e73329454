pub mod app;
pub mod calc;
pub mod dashboard;
pub mod ui;

pub use app::App;
pub use dashboard::Dashboard;
