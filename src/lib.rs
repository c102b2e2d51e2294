pub mod action;
pub mod app;
pub mod canvas;
pub mod chaos;
pub mod config;
pub mod display;
pub mod entropy;
pub mod error;
pub mod handlers;
pub mod invert;
pub mod record;
pub mod state;
pub mod store;
pub mod term;
pub mod update;
