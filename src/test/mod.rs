mod api;
mod calc;
mod ui;
