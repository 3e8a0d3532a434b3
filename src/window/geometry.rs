//! Geometry engine for window drag, resize and maximize
//!
//! Pure coordinate math: nothing here knows about window records or
//! interaction state. All coordinates are viewport pixels with the origin
//! at the top-left corner.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or a delta between two points) in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Window or viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle for window positioning and sizing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_loc_and_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Half-open containment: the right and bottom borders are outside
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Lower bound applied to every computed window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: 300.0,
            min_height: 200.0,
        }
    }
}

impl SizeLimits {
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width),
            size.height.max(self.min_height),
        )
    }
}

/// Edge or corner used for resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::Top,
        ResizeDirection::Bottom,
        ResizeDirection::Left,
        ResizeDirection::Right,
        ResizeDirection::TopLeft,
        ResizeDirection::TopRight,
        ResizeDirection::BottomLeft,
        ResizeDirection::BottomRight,
    ];

    pub fn moves_left_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Left | ResizeDirection::TopLeft | ResizeDirection::BottomLeft
        )
    }

    pub fn moves_right_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Right | ResizeDirection::TopRight | ResizeDirection::BottomRight
        )
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Top | ResizeDirection::TopLeft | ResizeDirection::TopRight
        )
    }

    pub fn moves_bottom_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Bottom | ResizeDirection::BottomLeft | ResizeDirection::BottomRight
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResizeDirection::Top => "top",
            ResizeDirection::Bottom => "bottom",
            ResizeDirection::Left => "left",
            ResizeDirection::Right => "right",
            ResizeDirection::TopLeft => "top-left",
            ResizeDirection::TopRight => "top-right",
            ResizeDirection::BottomLeft => "bottom-left",
            ResizeDirection::BottomRight => "bottom-right",
        }
    }
}

/// Pointer and window geometry captured when a resize starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeStart {
    pub pointer: Point,
    pub position: Point,
    pub size: Size,
}

/// New window origin while dragging: the grab offset stays constant
pub fn drag_position(pointer: Point, offset: Point) -> Point {
    pointer - offset
}

/// Compute the window rectangle for a resize in `direction` with the
/// pointer now at `pointer`.
///
/// Right/bottom edges grow with the delta; left/top edges shrink with it and
/// move the origin so the opposite edge stays put. The origin shift comes
/// from the clamped size, so the anchored edge holds still even once the
/// minimum size is reached.
pub fn resize_rect(
    direction: ResizeDirection,
    start: &ResizeStart,
    pointer: Point,
    limits: &SizeLimits,
) -> Rectangle {
    let delta = pointer - start.pointer;

    let raw_width = if direction.moves_right_edge() {
        start.size.width + delta.x
    } else if direction.moves_left_edge() {
        start.size.width - delta.x
    } else {
        start.size.width
    };
    let raw_height = if direction.moves_bottom_edge() {
        start.size.height + delta.y
    } else if direction.moves_top_edge() {
        start.size.height - delta.y
    } else {
        start.size.height
    };

    let size = limits.clamp(Size::new(raw_width, raw_height));

    let x = if direction.moves_left_edge() {
        start.position.x + (start.size.width - size.width)
    } else {
        start.position.x
    };
    let y = if direction.moves_top_edge() {
        start.position.y + (start.size.height - size.height)
    } else {
        start.position.y
    };

    Rectangle::new(x, y, size.width, size.height)
}

/// Rectangle of a maximized window: the viewport inset by `margin` on every side
pub fn maximized_rect(viewport: Size, margin: f64, limits: &SizeLimits) -> Rectangle {
    let size = limits.clamp(Size::new(
        viewport.width - 2.0 * margin,
        viewport.height - 2.0 * margin,
    ));
    Rectangle::new(margin, margin, size.width, size.height)
}
