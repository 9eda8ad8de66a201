pub use camera::Camera;
pub use grid_mesh::{board_mesh, grid_mesh};
pub use snake_mesh::{cube_mesh, fruit_param, snake_params};

mod camera;
mod grid_mesh;
mod snake_mesh;

use crate::app::palette::Palette;
use crate::basic::Point;
use crate::error::Result;
use crate::game::GameState;
use ggez::graphics::{Canvas, DrawParam, InstanceArray, Mesh};
use ggez::Context;

/// Draws a `GameState`, owns everything that survives between frames
pub struct Scene {
    camera: Camera,
    board_size: isize,

    /// These meshes are always cached and only
    /// recalculated when the board size changes
    board_mesh: Option<Mesh>,
    grid_mesh: Option<Mesh>,

    cube_mesh: Mesh,
    snake_instances: InstanceArray,
}

impl Scene {
    pub fn new(board_size: isize, ctx: &Context) -> Result<Self> {
        let (width, height) = ctx.gfx.drawable_size();
        Ok(Self {
            camera: Camera::new(board_size, width, height),
            board_size,
            board_mesh: None,
            grid_mesh: None,
            cube_mesh: cube_mesh(ctx)?,
            snake_instances: InstanceArray::new(ctx, None),
        })
    }

    pub fn set_board_size(&mut self, board_size: isize) {
        if board_size != self.board_size {
            self.board_size = board_size;
            self.camera.set_board_size(board_size);
            // invalidate
            self.board_mesh = None;
            self.grid_mesh = None;
        }
    }

    /// Zero-sized viewports (minimized window) are ignored
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.camera.resize(width, height) {
            let Point { x, y } = self.camera.viewport();
            log::debug!(
                "viewport {}x{} shows {:?} cells",
                x,
                y,
                self.camera.view_extent()
            );
        } else {
            log::warn!("ignoring resize to {}x{}", width, height);
        }
    }

    pub fn draw(
        &mut self,
        state: &GameState,
        palette: &Palette,
        draw_grid: bool,
        canvas: &mut Canvas,
        ctx: &Context,
    ) -> Result {
        self.set_board_size(state.size);

        let world = self.camera.world_param();

        if self.board_mesh.is_none() {
            self.board_mesh = Some(board_mesh(self.board_size, palette, ctx)?);
        }
        if let Some(mesh) = &self.board_mesh {
            canvas.draw(mesh, world);
        }

        if draw_grid {
            if self.grid_mesh.is_none() {
                self.grid_mesh = Some(grid_mesh(self.board_size, palette, ctx)?);
            }
            if let Some(mesh) = &self.grid_mesh {
                canvas.draw(mesh, world);
            }
        }

        let snake_color = if state.alive {
            palette.snake_color
        } else {
            palette.crashed_color
        };
        self.snake_instances.set(snake_params(
            &state.snake,
            self.board_size,
            &self.camera,
            snake_color,
        ));
        canvas.draw_instanced_mesh(
            self.cube_mesh.clone(),
            &self.snake_instances,
            DrawParam::default(),
        );

        if let Some(param) =
            fruit_param(state.fruit, self.board_size, &self.camera, palette.fruit_color)
        {
            canvas.draw(&self.cube_mesh, param);
        }

        Ok(())
    }
}
