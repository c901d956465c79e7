//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the page, the renderer, and input.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod keys;
mod pointer;
mod polling;
mod reload;
mod render;
mod types;

pub use core::FolioApp;
