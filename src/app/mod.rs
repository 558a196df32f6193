mod app_events;
mod app_render;
mod app_state;
mod input_field;
mod mouse_click;

pub use app_state::{App, OutputMode};
pub use input_field::InputField;
