use lofty::config::ParsingMode;
use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/audiorecord/config.toml` or `~/.config/audiorecord/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AUDIORECORD__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub identity: IdentitySettings,
    pub decode: DecodeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentitySettings {
    /// Number of bytes fed to the hasher per read.
    pub chunk_size: usize,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self { chunk_size: 4096 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecodeSettings {
    /// How forgiving the tag decoder is with malformed input.
    pub parsing_mode: ParsingModeSetting,
    /// Whether embedded pictures are decoded at all.
    /// With this off every record reports "no artwork" to the thumbnail store.
    pub read_cover_art: bool,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            parsing_mode: ParsingModeSetting::BestAttempt,
            read_cover_art: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsingModeSetting {
    Strict,
    #[serde(alias = "best_attempt", alias = "bestattempt")]
    BestAttempt,
    Relaxed,
}

impl From<ParsingModeSetting> for ParsingMode {
    fn from(mode: ParsingModeSetting) -> Self {
        match mode {
            ParsingModeSetting::Strict => ParsingMode::Strict,
            ParsingModeSetting::BestAttempt => ParsingMode::BestAttempt,
            ParsingModeSetting::Relaxed => ParsingMode::Relaxed,
        }
    }
}
