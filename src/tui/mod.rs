pub mod app;
pub mod command_actions;
pub mod input;
pub mod render;
pub mod selection;
pub mod theme;

#[cfg(test)]
pub mod test_helpers;

pub use app::run;
