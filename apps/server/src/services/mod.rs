//! Stateful services behind the routes.

pub mod dictionary;
pub mod game;
pub mod storage;
