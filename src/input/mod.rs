pub use keymap::{is_reverse, key_name, key_to_direction};
pub use steering::steer;

mod keymap;
mod steering;
