pub mod health_handler;
pub mod http_client;
pub mod ui_handler;
