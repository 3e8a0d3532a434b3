//! Window registry for the simulated desktop
//!
//! This module owns the authoritative window records:
//! - One record per application identity (fixed at startup, never destroyed)
//! - Lifecycle operations (open, close, minimize, focus)
//! - Z-order stacking through a private monotonic counter
//! - The derived "active app" used for focus highlighting
//!
//! Per-window pointer interaction lives in [`controller`], and the
//! coordinate math it relies on in [`geometry`].

use crate::config::LayoutConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod controller;
pub mod geometry;

pub use controller::{InteractionMode, WindowController, WindowRequest};
pub use geometry::{Point, Rectangle, ResizeDirection, ResizeStart, Size, SizeLimits};

/// Application identities known to the desktop, in dock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Terminal,
    Projects,
    About,
    Contact,
    Ailab,
    Blog,
}

impl AppId {
    pub const ALL: [AppId; 6] = [
        AppId::Terminal,
        AppId::Projects,
        AppId::About,
        AppId::Contact,
        AppId::Ailab,
        AppId::Blog,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::Terminal => "terminal",
            AppId::Projects => "projects",
            AppId::About => "about",
            AppId::Contact => "contact",
            AppId::Ailab => "ailab",
            AppId::Blog => "blog",
        }
    }

    /// Window title and dock label
    pub fn title(self) -> &'static str {
        match self {
            AppId::Terminal => "Terminal",
            AppId::Projects => "Projects",
            AppId::About => "About Me",
            AppId::Contact => "Contact",
            AppId::Ailab => "AI Lab",
            AppId::Blog => "Blog",
        }
    }

    pub fn initial_size(self) -> Size {
        match self {
            AppId::Terminal => Size::new(600.0, 400.0),
            AppId::Projects => Size::new(800.0, 600.0),
            AppId::About => Size::new(700.0, 500.0),
            AppId::Contact => Size::new(500.0, 400.0),
            AppId::Ailab => Size::new(800.0, 600.0),
            AppId::Blog => Size::new(900.0, 650.0),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppId::ALL
            .into_iter()
            .find(|app| app.as_str() == s)
            .ok_or_else(|| format!("unknown app: {}", s))
    }
}

/// Stable window identifier, one per app identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn for_app(app: AppId) -> Self {
        Self(format!("window-{}", app.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persistent per-app window state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u64,
    pub position: Point,
    pub size: Size,
}

impl WindowRecord {
    /// A window is painted only while open and not minimized
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::from_loc_and_size(self.position, self.size)
    }
}

/// Single source of truth for window lifecycle and stacking
#[derive(Debug, Clone)]
pub struct WindowRegistry {
    /// Records in dock order
    records: Vec<WindowRecord>,

    /// Last z-index handed out; only `bring_to_front` advances it
    highest_z_index: u64,
}

impl WindowRegistry {
    /// Create the fixed record set with staggered initial geometry, all closed
    pub fn new(layout: &LayoutConfig) -> Self {
        let records: Vec<WindowRecord> = AppId::ALL
            .into_iter()
            .enumerate()
            .map(|(index, app)| {
                let step = index as f64 * layout.stagger;
                WindowRecord {
                    id: WindowId::for_app(app),
                    app,
                    title: app.title().to_string(),
                    is_open: false,
                    is_minimized: false,
                    z_index: layout.base_z_index + index as u64,
                    position: Point::new(layout.origin_x + step, layout.origin_y + step),
                    size: app.initial_size(),
                }
            })
            .collect();

        let highest_z_index = layout.base_z_index + records.len() as u64;
        debug!(
            "🪟 Window registry created with {} records (highest z-index {})",
            records.len(),
            highest_z_index
        );

        Self {
            records,
            highest_z_index,
        }
    }

    /// Open (or restore) the window of `app` and bring it to front
    pub fn open_app(&mut self, app: AppId) -> bool {
        let Some(index) = self.records.iter().position(|r| r.app == app) else {
            debug!("open_app: no record for {}", app);
            return false;
        };

        let record = &mut self.records[index];
        if record.is_minimized {
            record.is_minimized = false;
        }
        if !record.is_open {
            record.is_open = true;
        }
        self.bring_to_front(index);
        debug!("Opened {} (z-index {})", app, self.highest_z_index);
        true
    }

    pub fn close_window(&mut self, id: &WindowId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.records[index].is_open = false;
                debug!("Closed window {}", id);
                true
            }
            None => {
                debug!("close_window: unknown window {}", id);
                false
            }
        }
    }

    pub fn minimize_window(&mut self, id: &WindowId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.records[index].is_minimized = true;
                debug!("Minimized window {}", id);
                true
            }
            None => {
                debug!("minimize_window: unknown window {}", id);
                false
            }
        }
    }

    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.bring_to_front(index);
                debug!("Focused window {} (z-index {})", id, self.highest_z_index);
                true
            }
            None => {
                debug!("focus_window: unknown window {}", id);
                false
            }
        }
    }

    pub fn update_position(&mut self, id: &WindowId, position: Point) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.records[index].position = position;
                true
            }
            None => false,
        }
    }

    pub fn update_size(&mut self, id: &WindowId, size: Size) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.records[index].size = size;
                true
            }
            None => false,
        }
    }

    /// App of the topmost visible window, recomputed on every call
    pub fn active_app(&self) -> Option<AppId> {
        self.records
            .iter()
            .filter(|r| r.is_visible())
            .max_by_key(|r| r.z_index)
            .map(|r| r.app)
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn get_by_app(&self, app: AppId) -> Option<&WindowRecord> {
        self.records.iter().find(|r| r.app == app)
    }

    /// All records in dock order
    pub fn records(&self) -> &[WindowRecord] {
        &self.records
    }

    /// Visible windows in paint order (bottom to top)
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.records.iter().filter(|r| r.is_visible()).collect();
        visible.sort_by_key(|r| r.z_index);
        visible
    }

    /// Topmost visible window whose rectangle contains `point`
    pub fn topmost_at(&self, point: Point) -> Option<&WindowRecord> {
        self.records
            .iter()
            .filter(|r| r.is_visible() && r.rect().contains_point(point))
            .max_by_key(|r| r.z_index)
    }

    pub fn highest_z_index(&self) -> u64 {
        self.highest_z_index
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    fn bring_to_front(&mut self, index: usize) {
        self.highest_z_index += 1;
        self.records[index].z_index = self.highest_z_index;
    }
}

#[cfg(test)]
mod tests;
