use ggez::graphics::{Color, DrawMode, DrawParam, Mesh, Rect};
use ggez::Context;
use std::collections::VecDeque;

use super::camera::Camera;
use crate::basic::GridPoint;
use crate::error::{Error, ErrorConversion, Result};

/// Side of a snake or fruit cube, leaves a gap between neighbors
pub const CUBE_SIDE: f32 = 0.9;

/// A white unit square centered on the origin, tinted per instance
pub fn cube_mesh(ctx: &Context) -> Result<Mesh> {
    let half = CUBE_SIDE / 2.;
    Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        Rect::new(-half, -half, CUBE_SIDE, CUBE_SIDE),
        Color::WHITE,
    )
    .map_err(Error::from)
    .with_trace_step("cube_mesh")
}

/// One instance per segment, head first
pub fn snake_params<'a>(
    snake: &'a VecDeque<GridPoint>,
    board_size: isize,
    camera: &'a Camera,
    color: Color,
) -> impl Iterator<Item = DrawParam> + 'a {
    snake
        .iter()
        .map(move |&cell| camera.cell_param(cell, board_size).color(color))
}

pub fn fruit_param(
    fruit: Option<GridPoint>,
    board_size: isize,
    camera: &Camera,
    color: Color,
) -> Option<DrawParam> {
    fruit.map(|cell| camera.cell_param(cell, board_size).color(color))
}
