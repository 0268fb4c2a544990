pub mod cli;
pub mod controller;
pub mod error;
pub mod headless;
pub mod render;
pub mod script;
pub mod snapshot;
pub mod types;
pub mod utils;
pub mod view;
pub mod workout;
