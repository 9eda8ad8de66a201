use crate::basic::{GridPoint, Point};
use ggez::graphics::DrawParam;

/// Orthographic top-down view of the board. World units are cells,
/// the world origin is the center of the board and sits at the center
/// of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// World units that fit along the shorter side of the viewport
    view_size: f32,
    /// Physical size of the drawable area
    viewport: Point,
}

impl Camera {
    pub fn new(board_size: isize, width: f32, height: f32) -> Self {
        let mut camera = Self {
            view_size: board_size as f32,
            viewport: Point { x: 1., y: 1. },
        };
        camera.resize(width, height);
        camera
    }

    pub fn set_board_size(&mut self, board_size: isize) {
        self.view_size = board_size as f32;
    }

    /// Returns false and leaves the camera untouched when either
    /// dimension is empty (minimized window)
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if width <= 0. || height <= 0. {
            return false;
        }
        self.viewport = Point { x: width, y: height };
        true
    }

    pub fn viewport(&self) -> Point {
        self.viewport
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.viewport.x.min(self.viewport.y) / self.view_size
    }

    /// Visible world area as (width, height)
    pub fn view_extent(&self) -> (f32, f32) {
        let height = self.viewport.y / self.pixels_per_unit();
        (height * self.aspect(), height)
    }

    pub fn to_screen(&self, world: Point) -> Point {
        self.viewport / 2. + world * self.pixels_per_unit()
    }

    /// Maps meshes built in world units onto the screen
    pub fn world_param(&self) -> DrawParam {
        let ppu = self.pixels_per_unit();
        DrawParam::default()
            .dest(self.viewport / 2.)
            .scale([ppu, ppu])
    }

    /// Places a mesh built around the origin, one unit wide, on `cell`
    pub fn cell_param(&self, cell: GridPoint, board_size: isize) -> DrawParam {
        let ppu = self.pixels_per_unit();
        DrawParam::default()
            .dest(self.to_screen(cell_to_world(cell, board_size)))
            .scale([ppu, ppu])
    }
}

/// Center of `cell` in world units
pub fn cell_to_world(cell: GridPoint, board_size: isize) -> Point {
    let offset = board_size as f32 / 2. - 0.5;
    Point {
        x: cell.x as f32 - offset,
        y: cell.z as f32 - offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_cell_to_world_is_centered() {
        assert_close(cell_to_world(GridPoint { x: 0, z: 0 }, 8), Point { x: -3.5, y: -3.5 });
        assert_close(cell_to_world(GridPoint { x: 7, z: 7 }, 8), Point { x: 3.5, y: 3.5 });
        assert_close(cell_to_world(GridPoint { x: 1, z: 1 }, 3), Point { x: 0., y: 0. });
    }

    #[test]
    fn test_square_viewport_fits_board() {
        let camera = Camera::new(10, 800., 800.);
        assert_eq!(camera.pixels_per_unit(), 80.);
        assert_eq!(camera.view_extent(), (10., 10.));
        assert_close(
            camera.to_screen(cell_to_world(GridPoint { x: 0, z: 0 }, 10)),
            Point { x: 40., y: 40. },
        );
        assert_close(
            camera.to_screen(cell_to_world(GridPoint { x: 9, z: 9 }, 10)),
            Point { x: 760., y: 760. },
        );
    }

    #[test]
    fn test_wide_viewport_scales_horizontal_extent() {
        let camera = Camera::new(10, 1600., 800.);
        assert_eq!(camera.aspect(), 2.);
        assert_eq!(camera.view_extent(), (20., 10.));
        assert_close(camera.to_screen(Point { x: 0., y: 0. }), Point { x: 800., y: 400. });
    }

    #[test]
    fn test_tall_viewport_keeps_board_visible() {
        let camera = Camera::new(10, 400., 800.);
        assert_eq!(camera.view_extent(), (10., 20.));
    }

    #[test]
    fn test_zero_sized_resize_is_skipped() {
        let mut camera = Camera::new(10, 800., 600.);
        let before = camera;
        assert!(!camera.resize(0., 600.));
        assert!(!camera.resize(800., 0.));
        assert!(!camera.resize(0., 0.));
        assert_eq!(camera, before);
        assert!(camera.pixels_per_unit().is_finite());

        assert!(camera.resize(1000., 500.));
        assert_eq!(camera.viewport(), Point { x: 1000., y: 500. });
    }

    #[test]
    fn test_board_resize() {
        let mut camera = Camera::new(10, 800., 800.);
        camera.set_board_size(20);
        assert_eq!(camera.pixels_per_unit(), 40.);
    }
}
