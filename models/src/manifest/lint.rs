//! Soft limits Slack documents but does not currently enforce.

use super::App;

use std::fmt;

pub const MAX_SLASH_COMMAND_COUNT: usize = 5;
pub const MAX_SHORTCUT_COUNT: usize = 5;

/// A non-blocking finding about a manifest, anchored at a JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestWarning {
    pub pointer: &'static str,
    pub summary: String,
    pub detail: String,
}

impl fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.pointer, self.summary, self.detail)
    }
}

impl App {
    /// Warnings for manifests that exceed Slack's published entry limits.
    pub fn lint(&self) -> Vec<ManifestWarning> {
        let mut warnings = Vec::new();
        let Some(features) = &self.features else {
            return warnings;
        };

        let commands = features.slash_commands.as_ref().map_or(0, Vec::len);
        if commands > MAX_SLASH_COMMAND_COUNT {
            warnings.push(limit_warning(
                "/features/slash_commands",
                "slash commands",
                MAX_SLASH_COMMAND_COUNT,
                commands,
            ));
        }

        let shortcuts = features.shortcuts.as_ref().map_or(0, Vec::len);
        if shortcuts > MAX_SHORTCUT_COUNT {
            warnings.push(limit_warning(
                "/features/shortcuts",
                "shortcuts",
                MAX_SHORTCUT_COUNT,
                shortcuts,
            ));
        }

        warnings
    }
}

fn limit_warning(
    pointer: &'static str,
    noun: &str,
    limit: usize,
    actual: usize,
) -> ManifestWarning {
    ManifestWarning {
        pointer,
        summary: format!("More than {limit} {noun} are defined"),
        detail: format!(
            "{actual} {noun} exceed Slack's official limit of {limit}; this may work now but could be restricted in future updates."
        ),
    }
}
