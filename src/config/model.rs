//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box with
//! the original lesson's user record.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// The immutable user record shown by the profile exercise. Loaded once,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_name")]
    pub name: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    /// Rendered image size in pixels, applied to both dimensions.
    #[serde(default = "default_image_size")]
    pub image_size: u16,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            image_url: default_image_url(),
            image_size: default_image_size(),
        }
    }
}

fn default_user_name() -> String {
    "Hedy Lamarr".into()
}

fn default_image_url() -> String {
    "https://i.pinimg.com/736x/db/1f/9a/db1f9a3eaca4758faae5f83947fa807c.jpg".into()
}

fn default_image_size() -> u16 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_full_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.user.name, "Hedy Lamarr");
        assert_eq!(cfg.user.image_size, 120);
        assert_eq!(cfg.ui.tick_rate_ms, 50);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [user]
            name = "Ada Lovelace"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.user.name, "Ada Lovelace");
        assert_eq!(cfg.user.image_size, 120);
        assert!(cfg.user.image_url.starts_with("https://"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.user.name, cfg.user.name);
        assert_eq!(back.ui.tick_rate_ms, cfg.ui.tick_rate_ms);
    }
}
