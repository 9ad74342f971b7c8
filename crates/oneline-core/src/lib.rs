// ABOUTME: Shared settings for one-line field layout.
// ABOUTME: Resolves layered tri-state settings and the define symbols they imply.

pub mod defines;
pub mod settings;

pub use defines::{BuildTarget, DefineSymbols};
pub use settings::{Settings, SettingsError, SettingsLayer, TernaryBoolean};
