//! Per-window pointer interaction
//!
//! A `WindowController` exists while its window is visible. It turns
//! pointer input on the window's chrome into [`WindowRequest`]s that the
//! desktop applies to the registry, and it remembers the pre-maximize
//! geometry for restore.

use super::geometry::{self, Point, Rectangle, ResizeDirection, ResizeStart, Size, SizeLimits};
use super::WindowId;
use crate::config::WindowConfig;
use crate::decoration::{DecorationAction, HitTarget};
use log::debug;

/// Pointer-session state of one window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    Idle,
    /// Title-bar drag; `offset` is the pointer position relative to the window origin
    Dragging { offset: Point },
    Resizing {
        direction: ResizeDirection,
        start: ResizeStart,
    },
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "idle",
            InteractionMode::Dragging { .. } => "dragging",
            InteractionMode::Resizing { .. } => "resizing",
        }
    }
}

/// Changes a controller asks the registry to make
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowRequest {
    Focus,
    Move(Point),
    Resize(Size),
    Close,
    Minimize,
}

#[derive(Debug, Clone)]
pub struct WindowController {
    window_id: WindowId,
    mode: InteractionMode,

    /// Geometry saved when maximizing; `Some` while maximized
    restore_rect: Option<Rectangle>,

    limits: SizeLimits,
    maximize_margin: f64,
}

impl WindowController {
    pub fn new(window_id: WindowId, config: &WindowConfig) -> Self {
        Self {
            window_id,
            mode: InteractionMode::Idle,
            restore_rect: None,
            limits: config.size_limits(),
            maximize_margin: config.maximize_margin,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == InteractionMode::Idle
    }

    pub fn is_maximized(&self) -> bool {
        self.restore_rect.is_some()
    }

    /// Pointer pressed anywhere on the window. Focus always comes first;
    /// a drag starts only on the bare title bar, a resize only on a handle.
    pub fn pointer_down(
        &mut self,
        target: HitTarget,
        pointer: Point,
        current: Rectangle,
    ) -> Vec<WindowRequest> {
        match target {
            HitTarget::TitleBar => {
                self.mode = InteractionMode::Dragging {
                    offset: pointer - current.position(),
                };
                debug!("Window {} drag started", self.window_id);
            }
            HitTarget::Resize(direction) => {
                self.mode = InteractionMode::Resizing {
                    direction,
                    start: ResizeStart {
                        pointer,
                        position: current.position(),
                        size: current.size(),
                    },
                };
                debug!(
                    "Window {} resize started from {}",
                    self.window_id,
                    direction.as_str()
                );
            }
            HitTarget::Button(_) | HitTarget::Content => {}
        }

        vec![WindowRequest::Focus]
    }

    /// Pointer moved while this window holds the pointer capture
    pub fn pointer_move(&mut self, pointer: Point, current: Rectangle) -> Vec<WindowRequest> {
        match self.mode {
            InteractionMode::Idle => Vec::new(),
            InteractionMode::Dragging { offset } => {
                vec![WindowRequest::Move(geometry::drag_position(pointer, offset))]
            }
            InteractionMode::Resizing { direction, start } => {
                let rect = geometry::resize_rect(direction, &start, pointer, &self.limits);
                let mut requests = vec![WindowRequest::Resize(rect.size())];
                if rect.position() != current.position() {
                    requests.push(WindowRequest::Move(rect.position()));
                }
                requests
            }
        }
    }

    pub fn pointer_up(&mut self) {
        if !self.is_idle() {
            debug!("Window {} {} finished", self.window_id, self.mode.as_str());
        }
        self.mode = InteractionMode::Idle;
    }

    /// End any interaction without further geometry updates
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            debug!(
                "Window {} {} cancelled",
                self.window_id,
                self.mode.as_str()
            );
        }
        self.mode = InteractionMode::Idle;
    }

    /// Click on the window. Chrome buttons act without focusing;
    /// any other click re-focuses the window.
    pub fn click(
        &mut self,
        target: HitTarget,
        current: Rectangle,
        viewport: Size,
    ) -> Vec<WindowRequest> {
        match target {
            HitTarget::Button(DecorationAction::Close) => vec![WindowRequest::Close],
            HitTarget::Button(DecorationAction::Minimize) => vec![WindowRequest::Minimize],
            HitTarget::Button(DecorationAction::ToggleMaximize) => {
                self.toggle_maximize(current, viewport)
            }
            HitTarget::TitleBar | HitTarget::Content | HitTarget::Resize(_) => {
                vec![WindowRequest::Focus]
            }
        }
    }

    /// Double-click toggles maximize only on the bare title bar
    pub fn double_click(
        &mut self,
        target: HitTarget,
        current: Rectangle,
        viewport: Size,
    ) -> Vec<WindowRequest> {
        match target {
            HitTarget::TitleBar => self.toggle_maximize(current, viewport),
            _ => Vec::new(),
        }
    }

    /// Maximize to the viewport minus margins, or restore the saved geometry
    pub fn toggle_maximize(&mut self, current: Rectangle, viewport: Size) -> Vec<WindowRequest> {
        match self.restore_rect.take() {
            Some(saved) => {
                debug!("Window {} restored", self.window_id);
                vec![
                    WindowRequest::Resize(saved.size()),
                    WindowRequest::Move(saved.position()),
                ]
            }
            None => {
                self.restore_rect = Some(current);
                let rect = geometry::maximized_rect(viewport, self.maximize_margin, &self.limits);
                debug!(
                    "Window {} maximized to {}x{}",
                    self.window_id, rect.width, rect.height
                );
                vec![
                    WindowRequest::Resize(rect.size()),
                    WindowRequest::Move(rect.position()),
                ]
            }
        }
    }
}
