//! CLI-specific configuration for the text menu.
use std::env;
use std::path::PathBuf;

/// CLI configuration.
///
/// Settings specific to the terminal front-end, separate from the runtime
/// configuration that shapes the roster itself.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Directory for rolling log files; `None` uses the platform data dir.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_COLOR` - Colored headings and messages (default: true)
    /// - `CLI_NAME_WIDTH` - Name column width in the character table (default: 15)
    /// - `ROSTER_LOG_DIR` - Log file directory (default: platform data dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(color) = read_env_bool("CLI_COLOR") {
            config.ui.color = color;
        }

        if let Some(width) = read_env::<usize>("CLI_NAME_WIDTH") {
            config.ui.name_width = width.max(UiConfig::MIN_NAME_WIDTH);
        }

        config.log_dir = env::var_os("ROSTER_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }

    /// Plain output, no ANSI styling.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.ui.color = false;
        self
    }
}

/// Display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub color: bool,
    /// Width of the name column in the character table.
    pub name_width: usize,
}

impl UiConfig {
    /// Narrowest name column; fits the "Name" header.
    pub const MIN_NAME_WIDTH: usize = 4;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            name_width: 15,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_table() {
        let config = CliConfig::default();
        assert!(config.ui.color);
        assert_eq!(config.ui.name_width, 15);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn without_color_only_touches_color() {
        let config = CliConfig::default().without_color();
        assert!(!config.ui.color);
        assert_eq!(config.ui.name_width, 15);
    }
}
