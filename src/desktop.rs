//! Desktop: the window manager as a whole
//!
//! The desktop ties the registry, the per-window controllers, the chrome
//! hit-testing and the input bindings together. It owns the pointer
//! capture: while a window is being dragged or resized, every pointer move
//! goes to that window no matter where the pointer is, until pointer-up or
//! until the window disappears.

use crate::command;
use crate::config::{DesktopConfig, WindowConfig};
use crate::decoration::WindowChrome;
use crate::dock::{Dock, DockItem};
use crate::input::{DesktopAction, InputManager, KeyEvent, PointerEvent};
use crate::window::{
    AppId, Point, Rectangle, Size, WindowController, WindowId, WindowRegistry, WindowRequest,
};
use anyhow::Result;
use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Desktop shared between input sources; the lock serializes z-order updates
pub type SharedDesktop = Arc<RwLock<Desktop>>;

/// What a visible window looks like right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub z_index: u64,
    pub position: Point,
    pub size: Size,
    /// Area where the app's panel is mounted
    pub content: Rectangle,
    pub active: bool,
    pub maximized: bool,
    pub interaction: String,
}

/// Paintable state of the whole desktop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSnapshot {
    pub active_app: Option<AppId>,
    pub highest_z_index: u64,
    pub viewport: Size,
    /// Visible windows, bottom to top
    pub windows: Vec<WindowSnapshot>,
    pub dock: Vec<DockItem>,
}

impl DesktopSnapshot {
    pub fn window(&self, app: AppId) -> Option<&WindowSnapshot> {
        self.windows.iter().find(|w| w.app == app)
    }
}

pub struct Desktop {
    window_config: WindowConfig,
    registry: WindowRegistry,
    chrome: WindowChrome,
    input: InputManager,

    /// One controller per visible window
    controllers: HashMap<WindowId, WindowController>,

    /// Window currently under pointer control
    capture: Option<WindowId>,

    viewport: Size,
}

impl Desktop {
    pub fn new(config: &DesktopConfig) -> Result<Self> {
        info!(
            "🖥️ Initializing desktop ({}x{} viewport)",
            config.viewport.width, config.viewport.height
        );

        let input = InputManager::new(&config.bindings)?;

        Ok(Self {
            window_config: config.window.clone(),
            registry: WindowRegistry::new(&config.layout),
            chrome: WindowChrome::new(&config.window),
            input,
            controllers: HashMap::new(),
            capture: None,
            viewport: config.viewport.size(),
        })
    }

    pub fn into_shared(self) -> SharedDesktop {
        Arc::new(RwLock::new(self))
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Only affects maximize operations started after the change
    pub fn set_viewport(&mut self, viewport: Size) {
        debug!("Viewport set to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.registry.active_app()
    }

    pub fn captured_window(&self) -> Option<&WindowId> {
        self.capture.as_ref()
    }

    pub fn controller(&self, id: &WindowId) -> Option<&WindowController> {
        self.controllers.get(id)
    }

    // === Lifecycle ===

    pub fn open_app(&mut self, app: AppId) -> bool {
        let changed = self.registry.open_app(app);
        self.sync_controllers();
        changed
    }

    pub fn dock_click(&mut self, app: AppId) -> bool {
        let changed = Dock::click(&mut self.registry, app);
        self.sync_controllers();
        changed
    }

    pub fn close_window(&mut self, id: &WindowId) -> bool {
        let changed = self.registry.close_window(id);
        self.sync_controllers();
        changed
    }

    pub fn minimize_window(&mut self, id: &WindowId) -> bool {
        let changed = self.registry.minimize_window(id);
        self.sync_controllers();
        changed
    }

    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        self.registry.focus_window(id)
    }

    /// Command hook handed to content panels
    pub fn execute_command(&mut self, command: &str) -> bool {
        match command::app_for_command(command) {
            Some(app) => {
                debug!("Command {:?} opens {}", command, app);
                self.open_app(app)
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match self.input.process_key(event) {
            Some(DesktopAction::OpenApp(app)) => self.open_app(app),
            Some(DesktopAction::CloseActive) => match self.active_window_id() {
                Some(id) => self.close_window(&id),
                None => false,
            },
            Some(DesktopAction::MinimizeActive) => match self.active_window_id() {
                Some(id) => self.minimize_window(&id),
                None => false,
            },
            None => false,
        }
    }

    // === Pointer routing ===

    /// Route a pointer event; returns whether any window state changed
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let point = event.position();
        match event {
            PointerEvent::Down { .. } => self.pointer_down(point),
            PointerEvent::Move { .. } => self.pointer_move(point),
            PointerEvent::Up { .. } => {
                self.release_capture();
                false
            }
            PointerEvent::Click { .. } => self.click(point),
            PointerEvent::DoubleClick { .. } => self.double_click(point),
        }
    }

    fn pointer_down(&mut self, point: Point) -> bool {
        // A pointer-down while captured means we missed the pointer-up
        self.release_capture();

        let Some((id, rect)) = self.window_at(point) else {
            return false;
        };
        let Some(target) = self.chrome.hit_test(&rect, point) else {
            return false;
        };

        let controller = self.controller_mut(&id);
        let requests = controller.pointer_down(target, point, rect);
        let interacting = !controller.is_idle();

        if interacting {
            self.capture = Some(id.clone());
        }
        self.apply_requests(&id, &requests)
    }

    fn pointer_move(&mut self, point: Point) -> bool {
        let Some(id) = self.capture.clone() else {
            return false;
        };

        let rect = self
            .registry
            .get(&id)
            .filter(|record| record.is_visible())
            .map(|record| record.rect());
        let Some(rect) = rect else {
            self.capture = None;
            return false;
        };
        let Some(controller) = self.controllers.get_mut(&id) else {
            self.capture = None;
            return false;
        };

        let requests = controller.pointer_move(point, rect);
        self.apply_requests(&id, &requests)
    }

    fn click(&mut self, point: Point) -> bool {
        let Some((id, rect)) = self.window_at(point) else {
            return false;
        };
        let Some(target) = self.chrome.hit_test(&rect, point) else {
            return false;
        };

        let viewport = self.viewport;
        let requests = self.controller_mut(&id).click(target, rect, viewport);
        self.apply_requests(&id, &requests)
    }

    fn double_click(&mut self, point: Point) -> bool {
        let Some((id, rect)) = self.window_at(point) else {
            return false;
        };
        let Some(target) = self.chrome.hit_test(&rect, point) else {
            return false;
        };

        let viewport = self.viewport;
        let requests = self.controller_mut(&id).double_click(target, rect, viewport);
        self.apply_requests(&id, &requests)
    }

    // === Snapshots ===

    pub fn snapshot(&self) -> DesktopSnapshot {
        let active = self.registry.active_app();
        let windows = self
            .registry
            .visible_windows()
            .into_iter()
            .map(|record| {
                let controller = self.controllers.get(&record.id);
                WindowSnapshot {
                    id: record.id.clone(),
                    app: record.app,
                    title: record.title.clone(),
                    z_index: record.z_index,
                    position: record.position,
                    size: record.size,
                    content: self.chrome.content_rect(&record.rect()),
                    active: active == Some(record.app),
                    maximized: controller.is_some_and(|c| c.is_maximized()),
                    interaction: controller
                        .map(|c| c.mode().as_str())
                        .unwrap_or("idle")
                        .to_string(),
                }
            })
            .collect();

        DesktopSnapshot {
            active_app: active,
            highest_z_index: self.registry.highest_z_index(),
            viewport: self.viewport,
            windows,
            dock: Dock::items(&self.registry),
        }
    }

    // === Helpers ===

    fn window_at(&self, point: Point) -> Option<(WindowId, Rectangle)> {
        self.registry
            .topmost_at(point)
            .map(|record| (record.id.clone(), record.rect()))
    }

    fn active_window_id(&self) -> Option<WindowId> {
        self.registry
            .active_app()
            .and_then(|app| self.registry.get_by_app(app))
            .map(|record| record.id.clone())
    }

    fn controller_mut(&mut self, id: &WindowId) -> &mut WindowController {
        let config = &self.window_config;
        self.controllers
            .entry(id.clone())
            .or_insert_with(|| WindowController::new(id.clone(), config))
    }

    fn apply_requests(&mut self, id: &WindowId, requests: &[WindowRequest]) -> bool {
        let mut changed = false;
        for request in requests {
            changed |= match *request {
                WindowRequest::Focus => self.registry.focus_window(id),
                WindowRequest::Move(position) => self.registry.update_position(id, position),
                WindowRequest::Resize(size) => self.registry.update_size(id, size),
                WindowRequest::Close => self.registry.close_window(id),
                WindowRequest::Minimize => self.registry.minimize_window(id),
            };
        }
        self.sync_controllers();
        changed
    }

    fn release_capture(&mut self) -> bool {
        match self.capture.take() {
            Some(id) => {
                if let Some(controller) = self.controllers.get_mut(&id) {
                    controller.pointer_up();
                }
                true
            }
            None => false,
        }
    }

    /// Mount controllers for newly visible windows and drop the rest.
    /// Hiding the captured window ends its interaction.
    fn sync_controllers(&mut self) {
        let visible: HashSet<WindowId> = self
            .registry
            .records()
            .iter()
            .filter(|record| record.is_visible())
            .map(|record| record.id.clone())
            .collect();

        self.controllers.retain(|id, controller| {
            let keep = visible.contains(id);
            if !keep {
                controller.cancel();
                debug!("Window {} unmounted", id);
            }
            keep
        });

        if self
            .capture
            .as_ref()
            .is_some_and(|id| !visible.contains(id))
        {
            info!("Pointer interaction ended: captured window was hidden");
            self.capture = None;
        }

        for id in visible {
            if !self.controllers.contains_key(&id) {
                let controller = WindowController::new(id.clone(), &self.window_config);
                self.controllers.insert(id, controller);
            }
        }
    }
}
