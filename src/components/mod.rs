pub mod app;
pub mod command_view;
pub mod notification_panel;
pub mod predictor_view;
pub mod risk_badge;
