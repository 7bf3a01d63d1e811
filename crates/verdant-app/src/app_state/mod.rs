//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, orbit controls, and the
//! animation state.

mod core;
mod event_handler;
mod init;
mod interaction;
mod render;

pub use core::VerdantApp;
