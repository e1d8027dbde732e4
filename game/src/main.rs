use std::error::Error;

use engine::app::{AppConfig, run_game};
use engine::font::FontChain;
use engine::ui::Size;
use game::hangman_ui::SceneAssets;
use game::headful::HangmanApp;
use game::headful::audio::RodioSfx;
use game::settings::SettingsStore;
use game::sfx::{NullSfx, SfxPlayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HANGMAN_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = SettingsStore::from_env();
    let settings = store
        .load()
        .apply_env_overrides(|key| std::env::var(key).ok());
    info!(
        path = %store.path().display(),
        fps = settings.video.target_fps,
        muted = settings.audio.mute_all,
        "settings loaded"
    );

    let assets = SceneAssets::load(settings.assets.background_image.as_deref());

    let gain = settings.audio.effective_sfx_gain();
    let sfx: Box<dyn SfxPlayer> = if gain <= 0.0 {
        Box::new(NullSfx)
    } else {
        match RodioSfx::new(gain) {
            Ok(sfx) => Box::new(sfx),
            Err(err) => {
                warn!(error = %err, "audio unavailable, continuing silently");
                Box::new(NullSfx)
            }
        }
    };

    let config = AppConfig {
        title: "Hangman".to_string(),
        logical_size: Size::new(800.0, 600.0),
        desired_size: PhysicalSize::new(settings.video.window_width, settings.video.window_height),
        clamp_to_monitor: true,
        vsync: Some(settings.video.vsync),
        target_fps: settings.video.target_fps,
        fullscreen: settings.video.start_fullscreen,
        fonts: FontChain::from_sheets(settings.assets.font_sheets.iter().cloned()),
    };

    run_game(config, HangmanApp::new(settings, assets, sfx))?;
    Ok(())
}
