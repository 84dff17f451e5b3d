//! LCD Pong host entry point
//!
//! Runs the game against a software framebuffer with emulated timer
//! interrupts. Usage: `lcd-pong [settings.json]`

use std::path::PathBuf;

use lcd_pong::audio::LogTone;
use lcd_pong::platform::{AutoPilot, Buttons, LogLed, Released, SharedLed};
use lcd_pong::render::FrameBuffer;
use lcd_pong::scheduler::{LogicTask, RenderTask, Shared, run};
use lcd_pong::sim::GameState;
use lcd_pong::{Error, Settings};

fn play<B: Buttons + Send>(settings: &Settings, buttons: B) -> Result<(), Error> {
    let shared = Shared::new(GameState::new());
    let led = SharedLed::new(LogLed::default());
    let mut logic = LogicTask::new(buttons, LogTone::default(), led.clone());
    let mut render = RenderTask::new(FrameBuffer::new(), led.clone());

    let summary = run(
        &shared,
        &mut logic,
        &mut render,
        settings.interrupt_period(),
        settings.run_ticks,
    );

    let state = shared.into_state();
    log::info!(
        "Final score {}:{} after {} ticks ({} frames, {} paddle contacts, {} wins, {} tones, {} wakeups)",
        state.scores.p1,
        state.scores.p2,
        summary.ticks,
        summary.frames,
        summary.contacts,
        summary.wins,
        logic.buzzer().generator().started,
        led.with(|l| l.wakeups),
    );

    if let Some(path) = &settings.frame_dump {
        render.display().write_ppm(path)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("LCD Pong (host) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    let result = if settings.autoplay {
        log::info!("Auto-pilot enabled with seed {}", settings.seed);
        play(&settings, AutoPilot::new(settings.seed))
    } else {
        play(&settings, Released)
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
