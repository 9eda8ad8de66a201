use std::collections::HashMap;
use std::time::Duration;

use ggez::event::EventHandler;
use ggez::graphics::Canvas;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};

use crate::app::control::{Control, State};
use crate::app::message::{Message, MessageID, Position};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::error::{ErrorConversion, Result};
use crate::game::{create_state_with, step, GameState};
use crate::input::{key_name, key_to_direction, steer};
use crate::random::ThreadRandom;
use crate::rendering::Scene;

pub mod control;
pub mod message;
pub mod palette;
pub mod prefs;

/// Owns the current `GameState` and replaces it with the next one
/// whenever a tick is due
pub struct App {
    state: GameState,
    control: Control,
    rng: ThreadRandom,

    prefs: Prefs,
    palette: Palette,
    scene: Scene,
    messages: HashMap<MessageID, Message>,
}

impl App {
    pub fn new(prefs: Prefs, ctx: &Context) -> Result<Self> {
        let mut rng = ThreadRandom::default();
        let state = create_state_with(prefs.board_size, prefs.tick, &mut rng);
        let scene = Scene::new(prefs.board_size, ctx).with_trace_step("App::new")?;
        log::info!(
            "new game on a {0}x{0} board, fruit at {1:?}",
            state.size,
            state.fruit
        );

        let mut app = Self {
            control: Control::new(state.tick.interval()),
            state,
            rng,
            prefs,
            palette: Palette::dark(),
            scene,
            messages: HashMap::new(),
        };
        app.update_status_message();
        Ok(app)
    }

    fn restart(&mut self) {
        self.state = create_state_with(self.prefs.board_size, self.prefs.tick, &mut self.rng);
        self.control.set_tick(self.state.tick.interval());
        self.control.play();
        log::info!("restarted, fruit at {:?}", self.state.fruit);
    }

    /// Perform a single tick
    fn advance(&mut self) {
        let next = step(&self.state, &mut self.rng);

        if next.tick.interval() != self.control.tick() {
            log::debug!("tick interval now {}ms", next.tick.tick_ms);
            self.control.set_tick(next.tick.interval());
        }
        if !next.alive {
            log::info!(
                "game over at {:?}, length {}",
                next.head() + next.next_dir,
                next.len()
            );
            self.control.game_over();
        }

        self.state = next;
    }

    /// Display a notification message in the top-right
    /// corner with limited duration, overwrite any previous
    /// notification message
    fn display_notification<S: ToString>(&mut self, text: S) {
        self.messages.insert(
            MessageID::Notification,
            Message::new(
                text.to_string(),
                Position::TopRight,
                self.palette.text_color,
                Some(Duration::from_secs(2)),
            ),
        );
    }

    fn update_status_message(&mut self) {
        if !self.prefs.display_status {
            self.messages.remove(&MessageID::Status);
            return;
        }

        let mut text = format!(
            "length: {}\ntick: {}ms",
            self.state.len(),
            self.state.tick.tick_ms
        );
        match self.control.state() {
            State::Playing => (),
            State::Paused => text.push_str("\npaused, space to resume"),
            State::GameOver => text.push_str("\ngame over, space to restart"),
        }

        self.messages.insert(
            MessageID::Status,
            Message::new(text, Position::TopLeft, self.palette.text_color, None),
        );
    }

    fn draw_messages(&mut self, canvas: &mut Canvas, ctx: &Context) {
        // remove the messages that have outlived their durations
        self.messages.retain(|_, message| !message.is_expired());
        for message in self.messages.values() {
            message.draw(canvas, ctx);
        }
    }
}

impl EventHandler<GameError> for App {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        while self.control.can_update() {
            self.advance();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.update_status_message();

        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        self.scene
            .draw(
                &self.state,
                &self.palette,
                self.prefs.draw_grid,
                &mut canvas,
                ctx,
            )
            .map_err(|e| GameError::RenderError(e.to_string()))?;
        self.draw_messages(&mut canvas, ctx);
        canvas.finish(ctx)
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        input: KeyInput,
        _repeated: bool,
    ) -> GameResult {
        let key = match input.keycode {
            Some(key) => key,
            None => return Ok(()),
        };

        match key {
            KeyCode::Space => match self.control.state() {
                State::GameOver => self.restart(),
                State::Playing => self.control.pause(),
                State::Paused => self.control.play(),
            },
            KeyCode::G => {
                self.prefs.draw_grid = !self.prefs.draw_grid;
                let text = if self.prefs.draw_grid {
                    "Grid on"
                } else {
                    "Grid off"
                };
                self.display_notification(text);
            }
            KeyCode::Escape => ctx.request_quit(),
            k => {
                if self.control.state() == State::Playing {
                    if let Some(dir) = key_name(k, input.mods).and_then(key_to_direction) {
                        self.state = steer(&self.state, dir);
                    }
                }
            }
        }
        Ok(())
    }

    fn resize_event(&mut self, _ctx: &mut Context, width: f32, height: f32) -> GameResult {
        self.scene.resize(width, height);
        Ok(())
    }
}
