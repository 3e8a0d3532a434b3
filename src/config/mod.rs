//! Configuration management for DevOS
//!
//! This module handles loading, parsing, and validating configuration
//! from TOML files. It combines settings for window geometry, the initial
//! window layout, the viewport, and launcher key bindings.

use crate::decoration::DOT_INSET;
use crate::window::geometry::{Size, SizeLimits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration struct containing all DevOS settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesktopConfig {
    /// Window geometry and chrome settings
    #[serde(default)]
    pub window: WindowConfig,

    /// Initial staggered layout and stacking
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Simulated screen size
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Launcher key bindings
    #[serde(default)]
    pub bindings: BindingsConfig,

    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Window geometry and chrome configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Minimum window width (pixels)
    pub min_width: f64,

    /// Minimum window height (pixels)
    pub min_height: f64,

    /// Gap kept between a maximized window and the viewport edges (pixels)
    pub maximize_margin: f64,

    /// Title bar height (pixels)
    pub titlebar_height: f64,

    /// Edge length of the square corner resize handles (pixels), at most 16
    pub corner_size: f64,

    /// Thickness of the edge resize strips (pixels)
    pub border_width: f64,
}

/// Initial window layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Position of the first window
    pub origin_x: f64,
    pub origin_y: f64,

    /// Diagonal offset between consecutive windows (pixels)
    pub stagger: f64,

    /// Z-index of the first window; later windows count up from here
    pub base_z_index: u64,
}

/// Viewport (screen) configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

/// Key bindings configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BindingsConfig {
    pub open_terminal: String,
    pub open_projects: String,
    pub open_about: String,
    pub open_contact: String,
    pub open_ailab: String,
    pub open_blog: String,

    /// Close the active window
    pub close_window: String,

    /// Minimize the active window
    pub minimize_window: String,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable debug logging
    pub debug: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_width: 300.0,
            min_height: 200.0,
            maximize_margin: 20.0,
            titlebar_height: 40.0,
            corner_size: 16.0,
            border_width: 6.0,
        }
    }
}

impl WindowConfig {
    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 100.0,
            stagger: 30.0,
            base_z_index: 100,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl ViewportConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            open_terminal: "Super+1".to_string(),
            open_projects: "Super+2".to_string(),
            open_about: "Super+3".to_string(),
            open_contact: "Super+4".to_string(),
            open_ailab: "Super+5".to_string(),
            open_blog: "Super+6".to_string(),
            close_window: "Super+w".to_string(),
            minimize_window: "Super+m".to_string(),
        }
    }
}

impl BindingsConfig {
    /// All bindings with their config key, in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("open_terminal", self.open_terminal.as_str()),
            ("open_projects", self.open_projects.as_str()),
            ("open_about", self.open_about.as_str()),
            ("open_contact", self.open_contact.as_str()),
            ("open_ailab", self.open_ailab.as_str()),
            ("open_blog", self.open_blog.as_str()),
            ("close_window", self.close_window.as_str()),
            ("minimize_window", self.minimize_window.as_str()),
        ]
    }
}

impl DesktopConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Expand ~ to home directory
        let expanded_path = if path.to_string_lossy().starts_with('~') {
            let home = std::env::var("HOME").context("Failed to get HOME environment variable")?;
            Path::new(&home).join(path.strip_prefix("~").unwrap_or(path))
        } else {
            path.to_path_buf()
        };

        let contents = fs::read_to_string(&expanded_path)
            .with_context(|| format!("Failed to read config file: {}", expanded_path.display()))?;

        let config: DesktopConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", expanded_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let window = &self.window;

        if !is_positive(window.min_width) || !is_positive(window.min_height) {
            anyhow::bail!("Invalid minimum window size: both dimensions must be positive");
        }

        if !window.maximize_margin.is_finite() || window.maximize_margin < 0.0 {
            anyhow::bail!("Invalid maximize_margin: must be finite and not negative");
        }

        if !is_positive(window.titlebar_height) || window.titlebar_height >= window.min_height {
            anyhow::bail!(
                "Invalid titlebar_height: must be positive and smaller than min_height ({})",
                window.min_height
            );
        }

        if !is_positive(window.border_width)
            || !window.corner_size.is_finite()
            || window.corner_size < window.border_width
        {
            anyhow::bail!("Invalid resize handles: corner_size must be at least border_width > 0");
        }

        // A larger corner square would swallow clicks on the close dot
        if window.corner_size > DOT_INSET {
            anyhow::bail!(
                "Invalid corner_size {}: must not exceed {}",
                window.corner_size,
                DOT_INSET
            );
        }

        let layout = &self.layout;
        if ![layout.origin_x, layout.origin_y, layout.stagger]
            .iter()
            .all(|v| v.is_finite())
        {
            anyhow::bail!("Invalid layout: origin and stagger must be finite");
        }

        if !is_positive(self.viewport.width) || !is_positive(self.viewport.height) {
            anyhow::bail!("Invalid viewport: width and height must be positive");
        }

        for (name, binding) in self.bindings.entries() {
            if binding.trim().is_empty() {
                anyhow::bail!("Invalid key binding {}: must not be empty", name);
            }
        }

        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, contents).context("Failed to write configuration file")?;

        Ok(())
    }

    /// Merge a partial configuration into this one
    /// Non-default sections from the partial config override this config
    pub fn merge_partial(mut self, partial: DesktopConfig) -> Self {
        let default_config = DesktopConfig::default();

        if partial.window != default_config.window {
            self.window = partial.window;
        }
        if partial.layout != default_config.layout {
            self.layout = partial.layout;
        }
        if partial.viewport != default_config.viewport {
            self.viewport = partial.viewport;
        }
        if partial.bindings != default_config.bindings {
            self.bindings = partial.bindings;
        }
        if partial.general != default_config.general {
            self.general = partial.general;
        }

        self
    }
}

/// Finite and strictly positive; rejects NaN and infinity
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}


#[cfg(test)]
mod property_tests;
