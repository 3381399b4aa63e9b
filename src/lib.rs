pub mod app;
pub mod config;
pub mod math;
pub mod parse;
pub mod render;
pub mod scene;
