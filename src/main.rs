#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::event::run;
use ggez::ContextBuilder;

use crate::app::{prefs::Prefs, App};
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod error;
mod fruit;
mod game;
mod input;
mod random;
mod rendering;

fn main() -> Result {
    env_logger::init();

    let prefs = Prefs::from_env().with_trace_step("main")?;

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(prefs.window_mode())
        .window_setup(prefs.window_setup())
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    let app = App::new(prefs, &ctx).with_trace_step("main")?;
    run(ctx, event_loop, app)
}
