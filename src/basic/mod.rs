pub use dir::Dir;
pub use grid_point::GridPoint;
pub use point::Point;

mod dir;
mod grid_point;
mod point;
