// ABOUTME: Compiler define symbols derived from resolved settings.
// ABOUTME: Rewrites a `;`-separated define list, keeping symbols it does not own.

use crate::Settings;

pub const DISABLED: &str = "ONE_LINE_DISABLED";
pub const VERTICAL_SEPARATOR_DISABLE: &str = "ONE_LINE_VERTICAL_SEPARATOR_DISABLE";
pub const HORIZONTAL_SEPARATOR_DISABLE: &str = "ONE_LINE_HORIZONTAL_SEPARATOR_DISABLE";

/// Platform the define list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    Unknown,
    Standalone,
    Android,
    Ios,
    WebGl,
}

/// Define symbols requested by a set of settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefineSymbols {
    requested: Vec<&'static str>,
}

impl DefineSymbols {
    /// Every symbol this library adds or removes
    pub const MANAGED: [&'static str; 3] =
        [DISABLED, VERTICAL_SEPARATOR_DISABLE, HORIZONTAL_SEPARATOR_DISABLE];

    /// A symbol is requested when its setting is explicitly false
    pub fn from_settings(settings: &Settings) -> Self {
        let switches = [
            (DISABLED, settings.enabled()),
            (VERTICAL_SEPARATOR_DISABLE, settings.draw_vertical_separator()),
            (HORIZONTAL_SEPARATOR_DISABLE, settings.draw_horizontal_separator()),
        ];

        let requested = switches
            .into_iter()
            .filter(|(_, value)| value.has_value() && !value.bool_value())
            .map(|(symbol, _)| symbol)
            .collect();
        Self { requested }
    }

    pub fn requested(&self) -> &[&'static str] {
        &self.requested
    }

    pub fn is_managed(symbol: &str) -> bool {
        Self::MANAGED.iter().any(|managed| *managed == symbol)
    }

    /// Drop managed and empty entries from `current`, then append the
    /// requested symbols
    pub fn apply(&self, current: &str) -> String {
        let mut defines: Vec<&str> = current
            .split(';')
            .filter(|define| !define.is_empty() && !Self::is_managed(define))
            .collect();
        defines.extend_from_slice(&self.requested);
        defines.join(";")
    }

    /// Like [`DefineSymbols::apply`], but refuses an unknown target
    pub fn apply_for_target(&self, target: BuildTarget, current: &str) -> Option<String> {
        if target == BuildTarget::Unknown {
            tracing::error!("can not determine current build target");
            return None;
        }

        let defines = self.apply(current);
        tracing::info!("Define symbols for {:?}: {}", target, defines);
        Some(defines)
    }
}
