use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const MIN_FPS: u32 = 15;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioSettings {
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub mute_all: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            mute_all: false,
        }
    }
}

impl AudioSettings {
    pub fn clamp(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    pub fn effective_sfx_gain(self) -> f32 {
        if self.mute_all {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
    pub target_fps: u32,
    pub start_fullscreen: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            vsync: true,
            target_fps: 60,
            start_fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameplaySettings {
    pub parallax_enabled: bool,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            parallax_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssetSettings {
    pub background_image: Option<PathBuf>,
    /// Tried in order before the built-in block font.
    pub font_sheets: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HangmanSettings {
    #[serde(default)]
    pub audio: AudioSettings,
    #[serde(default)]
    pub video: VideoSettings,
    #[serde(default)]
    pub gameplay: GameplaySettings,
    #[serde(default)]
    pub assets: AssetSettings,
    /// Only ever set from `HANGMAN_SEED`.
    #[serde(skip)]
    pub seed: Option<u64>,
}

impl HangmanSettings {
    pub fn sanitized(mut self) -> Self {
        self.audio = self.audio.clamp();
        self.video.target_fps = self.video.target_fps.clamp(MIN_FPS, MAX_FPS);
        self.video.window_width = self.video.window_width.max(1);
        self.video.window_height = self.video.window_height.max(1);
        self
    }

    /// Overrides from the environment, read through `lookup` so tests never touch the process env.
    pub fn apply_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(mute) = lookup("HANGMAN_MUTE").and_then(|v| parse_flag(&v)) {
            self.audio.mute_all = mute;
        }
        if let Some(fps) = lookup("HANGMAN_FPS").and_then(|v| v.trim().parse::<u32>().ok()) {
            self.video.target_fps = fps;
        }
        if let Some(seed) = lookup("HANGMAN_SEED").and_then(|v| v.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }
        if let Some(full) = lookup("HANGMAN_FULLSCREEN").and_then(|v| parse_flag(&v)) {
            self.video.start_fullscreen = full;
        }
        self.sanitized()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("HANGMAN_SETTINGS_PATH") {
            return Self::new(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("hangman");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Never fails: a missing file or bad JSON yields defaults.
    pub fn load(&self) -> HangmanSettings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                info!(path = %self.path.display(), error = %err, "no settings file, using defaults");
                return HangmanSettings::default();
            }
        };
        match serde_json::from_slice::<HangmanSettings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "invalid settings file, using defaults");
                HangmanSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn sfx_gain_respects_mute() {
        let mut audio = AudioSettings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            mute_all: false,
        };
        assert!((audio.effective_sfx_gain() - 0.25).abs() < 1e-6);

        audio.mute_all = true;
        assert_eq!(audio.effective_sfx_gain(), 0.0);
    }

    #[test]
    fn sanitized_clamps_volumes_and_fps() {
        let settings = HangmanSettings {
            audio: AudioSettings {
                master_volume: 3.0,
                sfx_volume: -2.0,
                mute_all: false,
            },
            video: VideoSettings {
                target_fps: 1000,
                ..VideoSettings::default()
            },
            ..HangmanSettings::default()
        }
        .sanitized();

        assert_eq!(settings.audio.master_volume, 1.0);
        assert_eq!(settings.audio.sfx_volume, 0.0);
        assert_eq!(settings.video.target_fps, MAX_FPS);
    }

    #[test]
    fn serde_defaults_fill_missing_fields() {
        let parsed: HangmanSettings =
            serde_json::from_str(r#"{"video":{"target_fps":30},"assets":{"background_image":"bg.png"}}"#)
                .expect("settings JSON should parse");
        assert_eq!(parsed.video.target_fps, 30);
        assert_eq!(parsed.video.window_width, 800);
        assert_eq!(parsed.audio, AudioSettings::default());
        assert!(parsed.gameplay.parallax_enabled);
        assert_eq!(
            parsed.assets.background_image,
            Some(PathBuf::from("bg.png"))
        );
        assert!(parsed.assets.font_sheets.is_empty());
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let settings = HangmanSettings::default().apply_env_overrides(env(&[
            ("HANGMAN_MUTE", "yes"),
            ("HANGMAN_FPS", "5"),
            ("HANGMAN_SEED", "42"),
            ("HANGMAN_FULLSCREEN", "1"),
        ]));
        assert!(settings.audio.mute_all);
        assert_eq!(settings.video.target_fps, MIN_FPS);
        assert_eq!(settings.seed, Some(42));
        assert!(settings.video.start_fullscreen);
    }

    #[test]
    fn unparsable_env_values_are_ignored() {
        let settings = HangmanSettings::default()
            .apply_env_overrides(env(&[("HANGMAN_MUTE", "maybe"), ("HANGMAN_SEED", "x")]));
        assert!(!settings.audio.mute_all);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let store = SettingsStore::new("/nonexistent/hangman/settings.json");
        assert_eq!(store.load(), HangmanSettings::default());
    }

    #[test]
    fn invalid_file_loads_defaults() {
        let path = std::env::temp_dir().join(format!(
            "hangman-settings-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").expect("temp file should be writable");
        let loaded = SettingsStore::new(&path).load();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, HangmanSettings::default());
    }
}
