use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `meter.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Global settings applied to all indicators.
    pub global: GlobalConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
    /// Per-core CPU bars.
    pub cpu: IndicatorConfig,
    /// Memory breakdown bar.
    pub memory: IndicatorConfig,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            theme: ThemeConfig::default(),
            cpu: IndicatorConfig::with_colors(&["#89b4fa"]),
            memory: IndicatorConfig::with_colors(&["#a6e3a1", "#585b70"]),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// How often indicators are refreshed, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2_000,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme mode name: `"dark"` or `"light"`.
    pub style: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            style: "dark".to_string(),
        }
    }
}

/// Config block for a single bar indicator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Layer palette (hex strings), index 0 = first-drawn layer.
    pub colors: Vec<String>,
    /// Compact visual variant (smaller radii, filled cross-axis).
    pub mini: bool,
    /// Whether a header row sits above the bars.
    pub header: bool,
    /// Opaque layer-breakdown identifier, forwarded to the indicator.
    pub breakdown: Option<String>,
}

impl IndicatorConfig {
    pub fn with_colors(colors: &[&str]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_palettes() {
        let cfg = MeterConfig::default();
        assert_eq!(cfg.cpu.colors.len(), 1);
        assert_eq!(cfg.memory.colors.len(), 2);
        assert_eq!(cfg.theme.style, "dark");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: MeterConfig = toml::from_str(
            r#"
            [theme]
            style = "light"

            [cpu]
            mini = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.theme.style, "light");
        assert!(cfg.cpu.mini);
        // untouched sections keep their defaults
        assert_eq!(cfg.global.poll_interval_ms, 2_000);
        assert_eq!(cfg.memory.colors.len(), 2);
    }

    #[test]
    fn breakdown_passthrough() {
        let cfg: MeterConfig = toml::from_str(
            r#"
            [memory]
            breakdown = "used-allocated"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.memory.breakdown.as_deref(), Some("used-allocated"));
    }
}
