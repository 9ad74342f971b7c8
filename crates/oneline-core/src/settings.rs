// ABOUTME: Layered settings: built-in defaults, a shared project file, a local user file.
// ABOUTME: Each layer can leave a value unset to defer to the layer below it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A boolean that may also be left unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TernaryBoolean {
    #[default]
    Unset,
    True,
    False,
}

impl TernaryBoolean {
    pub fn has_value(&self) -> bool {
        !self.is_unset()
    }

    pub fn is_unset(&self) -> bool {
        *self == TernaryBoolean::Unset
    }

    /// The value if set, `false` otherwise
    pub fn bool_value(&self) -> bool {
        *self == TernaryBoolean::True
    }

    /// `other` wins when it has a value
    pub fn overridden_by(self, other: TernaryBoolean) -> TernaryBoolean {
        if other.has_value() {
            other
        } else {
            self
        }
    }
}

impl From<bool> for TernaryBoolean {
    fn from(value: bool) -> Self {
        if value {
            TernaryBoolean::True
        } else {
            TernaryBoolean::False
        }
    }
}

impl From<Option<bool>> for TernaryBoolean {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TernaryBoolean::Unset, TernaryBoolean::from)
    }
}

impl From<TernaryBoolean> for Option<bool> {
    fn from(value: TernaryBoolean) -> Self {
        match value {
            TernaryBoolean::Unset => None,
            TernaryBoolean::True => Some(true),
            TernaryBoolean::False => Some(false),
        }
    }
}

/// One layer of settings. Unset values fall through to lower layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsLayer {
    /// Draw fields on one line at all
    #[serde(skip_serializing_if = "TernaryBoolean::is_unset")]
    pub enabled: TernaryBoolean,

    /// Separator lines between fields of one line
    #[serde(skip_serializing_if = "TernaryBoolean::is_unset")]
    pub draw_vertical_separator: TernaryBoolean,

    /// Separator lines between array rows
    #[serde(skip_serializing_if = "TernaryBoolean::is_unset")]
    pub draw_horizontal_separator: TernaryBoolean,

    /// Allow nested records to be expanded
    #[serde(skip_serializing_if = "TernaryBoolean::is_unset")]
    pub expandable: TernaryBoolean,
}

impl SettingsLayer {
    /// Built-in bottom layer: everything on
    pub fn defaults() -> Self {
        Self {
            enabled: TernaryBoolean::True,
            draw_vertical_separator: TernaryBoolean::True,
            draw_horizontal_separator: TernaryBoolean::True,
            expandable: TernaryBoolean::True,
        }
    }

    /// Load a layer from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let layer = toml::from_str(&content)?;
        Ok(layer)
    }

    /// Load a layer, treating a missing or broken file as an empty layer
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(layer) => layer,
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save the layer as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Merge `layers` from lowest to highest precedence
pub fn resolve<F>(layers: &[&SettingsLayer], get: F) -> TernaryBoolean
where
    F: Fn(&SettingsLayer) -> TernaryBoolean,
{
    layers
        .iter()
        .fold(TernaryBoolean::Unset, |acc, layer| acc.overridden_by(get(layer)))
}

/// Resolved view over defaults, the shared project layer and the local layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub shared: SettingsLayer,
    pub local: SettingsLayer,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Settings {
    pub const SHARED_FILE: &'static str = "oneline.toml";

    /// Shared layer lives next to the project (`<root>/oneline.toml`)
    pub fn shared_path(project_root: &Path) -> PathBuf {
        project_root.join(Self::SHARED_FILE)
    }

    /// Local layer lives in the user config dir (~/.config/oneline/local.toml)
    pub fn local_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("oneline").join("local.toml"))
    }

    /// Load both file-backed layers; missing files leave a layer empty
    pub fn load(project_root: &Path) -> Self {
        let shared = SettingsLayer::load_or_empty(&Self::shared_path(project_root));
        let local = Self::local_path()
            .map(|path| SettingsLayer::load_or_empty(&path))
            .unwrap_or_default();

        let settings = Self { shared, local };
        tracing::debug!(
            "Loaded settings: enabled={:?} vertical_separator={:?} horizontal_separator={:?}",
            settings.enabled(),
            settings.draw_vertical_separator(),
            settings.draw_horizontal_separator()
        );
        settings
    }

    pub fn save_shared(&self, project_root: &Path) -> Result<PathBuf, SettingsError> {
        let path = Self::shared_path(project_root);
        self.shared.save(&path)?;
        Ok(path)
    }

    pub fn save_local(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::local_path().ok_or_else(|| {
            SettingsError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.local.save(&path)?;
        Ok(path)
    }

    fn get<F>(&self, get: F) -> TernaryBoolean
    where
        F: Fn(&SettingsLayer) -> TernaryBoolean,
    {
        resolve(&[&SettingsLayer::defaults(), &self.shared, &self.local], get)
    }

    pub fn enabled(&self) -> TernaryBoolean {
        self.get(|layer| layer.enabled)
    }

    pub fn draw_vertical_separator(&self) -> TernaryBoolean {
        self.get(|layer| layer.draw_vertical_separator)
    }

    pub fn draw_horizontal_separator(&self) -> TernaryBoolean {
        self.get(|layer| layer.draw_horizontal_separator)
    }

    pub fn expandable(&self) -> TernaryBoolean {
        self.get(|layer| layer.expandable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ternary_conversions() {
        assert_eq!(TernaryBoolean::from(true), TernaryBoolean::True);
        assert_eq!(TernaryBoolean::from(None), TernaryBoolean::Unset);
        assert_eq!(Option::<bool>::from(TernaryBoolean::False), Some(false));
        assert!(!TernaryBoolean::Unset.has_value());
        assert!(!TernaryBoolean::Unset.bool_value());
        assert!(TernaryBoolean::True.bool_value());
    }

    #[test]
    fn defaults_are_all_true() {
        let settings = Settings::default();
        assert_eq!(settings.enabled(), TernaryBoolean::True);
        assert_eq!(settings.draw_vertical_separator(), TernaryBoolean::True);
        assert_eq!(settings.draw_horizontal_separator(), TernaryBoolean::True);
        assert_eq!(settings.expandable(), TernaryBoolean::True);
    }

    #[test]
    fn later_layers_override_only_when_set() {
        let settings = Settings {
            shared: SettingsLayer {
                enabled: TernaryBoolean::False,
                draw_vertical_separator: TernaryBoolean::False,
                ..SettingsLayer::default()
            },
            local: SettingsLayer {
                enabled: TernaryBoolean::True,
                ..SettingsLayer::default()
            },
        };

        assert_eq!(settings.enabled(), TernaryBoolean::True);
        assert_eq!(settings.draw_vertical_separator(), TernaryBoolean::False);
        assert_eq!(settings.draw_horizontal_separator(), TernaryBoolean::True);
    }

    #[test]
    fn resolve_with_no_layers_is_unset() {
        assert_eq!(resolve(&[], |layer| layer.enabled), TernaryBoolean::Unset);
    }

    #[test]
    fn test_layer_roundtrip() {
        let layer = SettingsLayer {
            enabled: TernaryBoolean::False,
            expandable: TernaryBoolean::True,
            ..SettingsLayer::default()
        };

        let temp_path = std::env::temp_dir()
            .join("oneline_settings_test")
            .join("layer.toml");
        layer.save(&temp_path).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        assert!(content.contains("enabled = false"));
        assert!(!content.contains("draw_vertical_separator"));

        let loaded = SettingsLayer::load(&temp_path).unwrap();
        assert_eq!(loaded, layer);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn broken_or_missing_files_load_empty() {
        let dir = std::env::temp_dir().join("oneline_settings_broken_test");
        std::fs::create_dir_all(&dir).unwrap();

        let broken = dir.join("broken.toml");
        std::fs::write(&broken, "enabled = \"maybe\"").unwrap();
        assert_eq!(SettingsLayer::load_or_empty(&broken), SettingsLayer::default());
        assert!(SettingsLayer::load(&broken).is_err());

        let missing = dir.join("missing.toml");
        assert_eq!(SettingsLayer::load_or_empty(&missing), SettingsLayer::default());

        let _ = std::fs::remove_file(&broken);
    }

    #[test]
    fn shared_settings_load_from_project_root() {
        let root = std::env::temp_dir().join("oneline_project_test");
        let settings = Settings {
            shared: SettingsLayer {
                draw_horizontal_separator: TernaryBoolean::False,
                ..SettingsLayer::default()
            },
            local: SettingsLayer::default(),
        };
        let path = settings.save_shared(&root).unwrap();
        assert!(path.ends_with("oneline.toml"));

        let loaded = Settings::load(&root);
        assert_eq!(loaded.shared, settings.shared);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_local_path() {
        if let Some(p) = Settings::local_path() {
            assert!(p.ends_with("oneline/local.toml"));
        }
    }
}
