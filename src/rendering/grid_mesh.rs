use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::app::palette::Palette;
use crate::basic::Point;
use crate::error::{Error, ErrorConversion, Result};

// all meshes here are in world units, drawn with `Camera::world_param`

/// The floor the snake moves on
pub fn board_mesh(board_size: isize, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    let side = board_size as f32;
    let half = side / 2.;
    Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        Rect::new(-half, -half, side, side),
        palette.board_color,
    )
    .map_err(Error::from)
    .with_trace_step("board_mesh")
}

/// Lines between cells, including the outline of the board
pub fn grid_mesh(board_size: isize, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    let half = board_size as f32 / 2.;
    let mut builder = MeshBuilder::new();

    for i in 0..=board_size {
        let d = i as f32 - half;

        // vertical
        builder
            .line(
                &[Point { x: d, y: -half }, Point { x: d, y: half }],
                palette.grid_thickness,
                palette.grid_color,
            )
            .map_err(Error::from)
            .with_trace_step("grid_mesh")?;

        // horizontal
        builder
            .line(
                &[Point { x: -half, y: d }, Point { x: half, y: d }],
                palette.grid_thickness,
                palette.grid_color,
            )
            .map_err(Error::from)
            .with_trace_step("grid_mesh")?;
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}
