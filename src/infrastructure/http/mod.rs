//! HTTP Infrastructure
//!
//! Axum 路由、处理器与服务器生命周期

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
