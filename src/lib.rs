//! Agnet: a single-page client for the Agnet multimodal chat API.
//!
//! The orchestration core (session store, transcript, view router, API
//! client) is plain Rust; `ui` and `views` are the Dioxus layer over it.

pub mod api;
pub mod router;
pub mod session;
pub mod theme;
pub mod transcript;
pub mod types;
pub mod ui;
pub mod views;
