mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use actions::ControlAction;
pub use self::core::Sketchpad;
