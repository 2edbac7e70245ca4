use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to the scan line's phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    #[default]
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

/// Shape of the scan line's motion over one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sweep top to bottom, then wrap back to the top
    #[default]
    Ramp,
    /// Sweep down and back up again
    PingPong,
    /// Stay centered and fade in and out
    Pulse,
}

impl Waveform {
    pub fn next(self) -> Self {
        match self {
            Waveform::Ramp => Waveform::PingPong,
            Waveform::PingPong => Waveform::Pulse,
            Waveform::Pulse => Waveform::Ramp,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Waveform::Ramp => "ramp",
            Waveform::PingPong => "ping-pong",
            Waveform::Pulse => "pulse",
        }
    }
}

/// What happens to the scan line once animation stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopBehavior {
    /// Keep drawing the line where it was
    #[default]
    Freeze,
    /// Stop drawing the line
    Hide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Length of one sweep in milliseconds
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
    #[serde(default)]
    pub waveform: Waveform,
    #[serde(default)]
    pub easing: EasingType,
    #[serde(default)]
    pub stop_behavior: StopBehavior,
    /// Frame rate requested from the host while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
            waveform: Waveform::default(),
            easing: EasingType::default(),
            stop_behavior: StopBehavior::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl AnimationConfig {
    /// Sweep period; a zero period is treated as 1ms
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms.max(1))
    }

    /// Interval between frames while animating
    pub fn tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }
}

/// How the scan area is derived from the surface bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Scan area width as a fraction of the bounds' width (portrait)
    #[serde(default = "default_width_ratio")]
    pub width_ratio: f64,
    /// Scan area height divided by its width
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    /// Scan area height as a fraction of the bounds' height (landscape)
    #[serde(default = "default_landscape_height_ratio")]
    pub landscape_height_ratio: f64,
    /// Distance between the scan area's edges and the line track
    #[serde(default)]
    pub track_inset: f64,
    /// Scan line thickness in surface units
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width_ratio: default_width_ratio(),
            aspect_ratio: default_aspect_ratio(),
            landscape_height_ratio: default_landscape_height_ratio(),
            track_inset: 0.0,
            line_thickness: default_line_thickness(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Darken everything outside the scan area
    #[serde(default = "default_true")]
    pub dim_backdrop: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            dim_backdrop: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "scanner-red", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "scanner-red".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Surface background
    pub background: Option<String>,
    /// Dimmed area outside the scan region
    pub backdrop: Option<String>,
    /// Scan area border
    pub border: Option<String>,
    /// Scan line
    pub line: Option<String>,
    /// Status bar background
    pub status_bg: Option<String>,
    /// Status bar text
    pub status_fg: Option<String>,
    /// Secondary text (idle indicator, key hints)
    pub muted: Option<String>,
    /// Accent color (running indicator)
    pub accent: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scanveil")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_period_ms() -> u64 {
    2000
}

fn default_animation_fps() -> u32 {
    60
}

fn default_width_ratio() -> f64 {
    0.8
}

fn default_aspect_ratio() -> f64 {
    0.75 // 4:3 scan window
}

fn default_landscape_height_ratio() -> f64 {
    0.75
}

fn default_line_thickness() -> f64 {
    1.0
}

fn default_tick_rate() -> u64 {
    100
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scanveil/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scanveil")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal is in the alternate screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("scanveil.log")
    }
}
