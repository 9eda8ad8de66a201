use ggez::graphics::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

lazy_static! {
    static ref DEFAULT_CRASHED_COLOR: Color = Color::from_rgb(200, 60, 60);
}

pub struct Palette {
    pub background_color: Color,
    pub board_color: Color,

    pub grid_thickness: f32,
    pub grid_color: Color,

    pub snake_color: Color,
    pub crashed_color: Color,
    pub fruit_color: Color,
    pub text_color: Color,
}

impl Palette {
    /// Shades of gray, `0x2f2f2f` background and `0x3a3a3a` board
    pub fn dark() -> Self {
        Self {
            background_color: Color::from_rgb(0x2f, 0x2f, 0x2f),
            board_color: Color::from_rgb(0x3a, 0x3a, 0x3a),

            // in cells
            grid_thickness: 0.03,
            grid_color: gray!(0.3),

            snake_color: Color::from_rgb(0xb0, 0xb0, 0xb0),
            crashed_color: *DEFAULT_CRASHED_COLOR,
            fruit_color: Color::from_rgb(0xe0, 0xe0, 0xe0),
            text_color: Color::WHITE,
        }
    }
}
