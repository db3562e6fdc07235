mod commands;
mod interactive;
mod render;
mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
