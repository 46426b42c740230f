//! Loading Animation entry point
//!
//! Usage: `loading-animation [SETTINGS_JSON]`, e.g.
//! `loading-animation '{"tick_period_ms": 10, "show_overlay": false}'`

use anyhow::Context as _;
use loading_animation::{Settings, app};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(json) => Settings::from_json(&json).context("invalid settings argument")?,
        None => Settings::default(),
    };
    log::info!(
        "Tick period {} ms, start delay {} ms",
        settings.tick_period_ms,
        settings.start_delay_ms
    );

    app::run(settings)
}
