pub mod config;
pub mod server;

mod handlers;
mod http_types;
mod server_state;
mod validation;
