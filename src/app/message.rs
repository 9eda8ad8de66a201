use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};
use ggez::Context;
use std::time::{Duration, Instant};

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Length, speed, paused or game over
    Status,
    /// Temporary info when toggling the grid
    Notification,
}

#[derive(Copy, Clone, Debug)]
pub enum Position {
    TopLeft,
    TopRight,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub margin: f32,
    pub font_size: f32,
    pub color: Color,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 20.;
    pub const DEFAULT_FONT_SIZE: f32 = 28.;
    /// Length of the linear fade at the end of a message's life
    const FADE: Duration = Duration::from_millis(200);

    pub fn new(text: String, position: Position, color: Color, duration: Option<Duration>) -> Self {
        Self {
            text,
            position,
            margin: Self::DEFAULT_MARGIN,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
            disappear: duration.map(|d| Instant::now() + d),
        }
    }

    /// Opacity at `now`, None once the message has expired
    fn alpha_at(&self, now: Instant) -> Option<f32> {
        match self.disappear {
            None => Some(1.),
            Some(deadline) => {
                let time_left = deadline.checked_duration_since(now)?;
                if time_left.is_zero() {
                    None
                } else if time_left < Self::FADE {
                    Some(time_left.as_secs_f32() / Self::FADE.as_secs_f32())
                } else {
                    Some(1.)
                }
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        self.alpha_at(Instant::now()).is_none()
    }

    pub fn draw(&self, canvas: &mut Canvas, ctx: &Context) {
        let alpha = match self.alpha_at(Instant::now()) {
            Some(alpha) => alpha,
            None => return,
        };
        let (width, _) = ctx.gfx.drawable_size();

        let (dest, h_align) = match self.position {
            Position::TopLeft => (Point { x: self.margin, y: self.margin }, TextAlign::Begin),
            Position::TopRight => (
                Point { x: width - self.margin, y: self.margin },
                TextAlign::End,
            ),
        };

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size))
            .set_layout(TextLayout { h_align, v_align: TextAlign::Begin });

        let mut color = self.color;
        color.a *= alpha;
        canvas.draw(&text, DrawParam::default().dest(dest).color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistent_message() {
        let message = Message::new("len 3".to_string(), Position::TopLeft, Color::WHITE, None);
        let later = Instant::now() + Duration::from_secs(3600);
        assert_eq!(message.alpha_at(later), Some(1.));
        assert!(!message.is_expired());
    }

    #[test]
    fn test_message_fades_then_expires() {
        let message = Message::new(
            "Grid on".to_string(),
            Position::TopRight,
            Color::WHITE,
            Some(Duration::from_secs(2)),
        );
        let deadline = message.disappear.unwrap();
        assert_eq!(message.alpha_at(deadline - Duration::from_secs(1)), Some(1.));
        let fading = message.alpha_at(deadline - Duration::from_millis(100)).unwrap();
        assert!((fading - 0.5).abs() < 1e-3, "{}", fading);
        assert_eq!(message.alpha_at(deadline), None);
        assert_eq!(message.alpha_at(deadline + Duration::from_millis(1)), None);
    }
}
