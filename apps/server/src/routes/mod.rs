//! HTTP route handlers

pub mod game;
pub mod levels;
pub mod settings;
pub mod words;
