//! Window chrome layout and hit-testing
//!
//! Every window carries the same chrome: a title bar with three
//! traffic-light dots on the left (close, minimize, maximize), three header
//! buttons on the right (minimize, maximize, close), and eight resize
//! handles along the border. This module decides which part of the chrome
//! a pointer position lands on.

use crate::config::WindowConfig;
use crate::window::{Point, Rectangle, ResizeDirection};

/// Diameter of a traffic-light dot
const DOT_SIZE: f64 = 12.0;
/// Horizontal distance between dot origins
const DOT_SPACING: f64 = 20.0;
/// Left padding before the first dot; corner handles must not reach it
pub const DOT_INSET: f64 = 16.0;

/// Edge length of a header button
const BUTTON_SIZE: f64 = 16.0;
/// Horizontal distance between header button origins
const BUTTON_SPACING: f64 = 24.0;
/// Right padding after the last header button
const BUTTON_INSET: f64 = 16.0;

/// Action bound to a chrome control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationAction {
    Close,
    Minimize,
    ToggleMaximize,
}

/// What a pointer position on a window lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Bare title bar: starts a drag, double-click maximizes
    TitleBar,
    /// A dot or header button
    Button(DecorationAction),
    Resize(ResizeDirection),
    /// The panel area below the title bar
    Content,
}

/// Chrome geometry shared by all windows
#[derive(Debug, Clone)]
pub struct WindowChrome {
    titlebar_height: f64,
    corner_size: f64,
    border_width: f64,
}

impl WindowChrome {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            titlebar_height: config.titlebar_height,
            corner_size: config.corner_size,
            border_width: config.border_width,
        }
    }

    /// Area available to the mounted panel
    pub fn content_rect(&self, window: &Rectangle) -> Rectangle {
        Rectangle::new(
            window.x,
            window.y + self.titlebar_height,
            window.width,
            (window.height - self.titlebar_height).max(0.0),
        )
    }

    /// Window-local bounds of every chrome control
    pub fn controls(&self, window_width: f64) -> Vec<(DecorationAction, Rectangle)> {
        let dot_y = (self.titlebar_height - DOT_SIZE) / 2.0;
        let button_y = (self.titlebar_height - BUTTON_SIZE) / 2.0;
        let dots = [
            DecorationAction::Close,
            DecorationAction::Minimize,
            DecorationAction::ToggleMaximize,
        ];
        // Right to left: close is rightmost
        let buttons = [
            DecorationAction::Close,
            DecorationAction::ToggleMaximize,
            DecorationAction::Minimize,
        ];

        let mut controls = Vec::with_capacity(dots.len() + buttons.len());
        for (i, action) in dots.into_iter().enumerate() {
            let x = DOT_INSET + i as f64 * DOT_SPACING;
            controls.push((action, Rectangle::new(x, dot_y, DOT_SIZE, DOT_SIZE)));
        }
        for (i, action) in buttons.into_iter().enumerate() {
            let x = window_width - BUTTON_INSET - BUTTON_SIZE - i as f64 * BUTTON_SPACING;
            controls.push((action, Rectangle::new(x, button_y, BUTTON_SIZE, BUTTON_SIZE)));
        }
        controls
    }

    /// Resolve `point` (viewport coordinates) against a window's chrome.
    /// Resize handles win over controls, controls over the title bar.
    pub fn hit_test(&self, window: &Rectangle, point: Point) -> Option<HitTarget> {
        if !window.contains_point(point) {
            return None;
        }

        let local = Point::new(point.x - window.x, point.y - window.y);

        if let Some(direction) = self.resize_handle_at(window, local) {
            return Some(HitTarget::Resize(direction));
        }

        if local.y < self.titlebar_height {
            let control = self
                .controls(window.width)
                .into_iter()
                .find(|(_, bounds)| bounds.contains_point(local))
                .map(|(action, _)| HitTarget::Button(action));
            return Some(control.unwrap_or(HitTarget::TitleBar));
        }

        Some(HitTarget::Content)
    }

    fn resize_handle_at(&self, window: &Rectangle, local: Point) -> Option<ResizeDirection> {
        let corner = self.corner_size;
        let near_left = local.x < corner;
        let near_right = local.x >= window.width - corner;
        let near_top = local.y < corner;
        let near_bottom = local.y >= window.height - corner;

        match (near_left, near_right, near_top, near_bottom) {
            (true, _, true, _) => return Some(ResizeDirection::TopLeft),
            (_, true, true, _) => return Some(ResizeDirection::TopRight),
            (true, _, _, true) => return Some(ResizeDirection::BottomLeft),
            (_, true, _, true) => return Some(ResizeDirection::BottomRight),
            _ => {}
        }

        let border = self.border_width;
        if local.y < border {
            Some(ResizeDirection::Top)
        } else if local.y >= window.height - border {
            Some(ResizeDirection::Bottom)
        } else if local.x < border {
            Some(ResizeDirection::Left)
        } else if local.x >= window.width - border {
            Some(ResizeDirection::Right)
        } else {
            None
        }
    }
}
