//! Dock / launcher
//!
//! Stateless: the items are derived from the registry on every call, and a
//! click simply opens the app.

use crate::window::{AppId, WindowRegistry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockItem {
    pub app: AppId,
    pub label: String,
    /// Marks the app of the topmost visible window
    pub active: bool,
}

pub struct Dock;

impl Dock {
    /// One item per app identity, in dock order
    pub fn items(registry: &WindowRegistry) -> Vec<DockItem> {
        let active = registry.active_app();
        AppId::ALL
            .into_iter()
            .map(|app| DockItem {
                app,
                label: app.title().to_string(),
                active: active == Some(app),
            })
            .collect()
    }

    pub fn click(registry: &mut WindowRegistry, app: AppId) -> bool {
        registry.open_app(app)
    }
}
