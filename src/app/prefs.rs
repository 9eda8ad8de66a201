use crate::error::{Error, ErrorConversion, Result};
use crate::game::{fits_initial_snake, TickSettings};
use ggez::conf::{WindowMode, WindowSetup};
use std::env;

pub struct Prefs {
    /// Side length of the square board in cells
    pub board_size: isize,
    pub tick: TickSettings,

    pub window_width: f32,
    pub window_height: f32,
    pub title: String,

    pub draw_grid: bool,
    pub display_status: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_size: 16,
            tick: TickSettings::default(),

            window_width: 800.,
            window_height: 800.,
            title: "Snake".to_string(),

            draw_grid: true,
            display_status: true,
        }
    }
}

// builder
impl Prefs {
    /// Overrides the board size
    pub const BOARD_SIZE_VAR: &'static str = "SNAKE_BOARD_SIZE";

    pub fn board_size(mut self, board_size: isize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn from_env() -> Result<Self> {
        let prefs = Self::default();
        match env::var(Self::BOARD_SIZE_VAR) {
            Ok(value) => {
                let size = parse_board_size(&value).with_trace_step(Self::BOARD_SIZE_VAR)?;
                Ok(prefs.board_size(size))
            }
            Err(_) => Ok(prefs),
        }
    }

    pub fn window_mode(&self) -> WindowMode {
        WindowMode::default()
            .dimensions(self.window_width, self.window_height)
            .resizable(true)
    }

    pub fn window_setup(&self) -> WindowSetup {
        WindowSetup::default().title(&self.title).vsync(true)
    }
}

fn parse_board_size(value: &str) -> Result<isize> {
    let size = value
        .trim()
        .parse::<isize>()
        .map_err(Error::from)
        .with_trace_step("parse_board_size")?;
    if !fits_initial_snake(size) {
        return Err(Error::config(format!(
            "board size {} is too small for the starting snake",
            size
        )));
    }
    Ok(size)
}
