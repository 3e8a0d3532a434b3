//! Pointer and keyboard input for the desktop
//!
//! Pointer events are routed to windows by the desktop; this module only
//! defines them. Keyboard events are matched against the configured
//! launcher bindings.

use crate::config::BindingsConfig;
use crate::window::{AppId, Point};
use anyhow::{bail, Result};
use log::{debug, info};
use std::collections::HashMap;

/// Pointer input in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    DoubleClick { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { x, y }
            | PointerEvent::Move { x, y }
            | PointerEvent::Up { x, y }
            | PointerEvent::Click { x, y }
            | PointerEvent::DoubleClick { x, y } => Point::new(x, y),
        }
    }
}

/// A key press with its held modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Vec<String>,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: &[&str]) -> Self {
        Self {
            key: key.into(),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Binding string such as `Super+Shift+q`
    pub fn combo(&self) -> String {
        if self.modifiers.is_empty() {
            self.key.clone()
        } else {
            format!("{}+{}", self.modifiers.join("+"), self.key)
        }
    }
}

/// Desktop-level actions that keyboard shortcuts can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopAction {
    OpenApp(AppId),
    CloseActive,
    MinimizeActive,
}

#[derive(Debug)]
pub struct InputManager {
    /// Key binding mappings
    key_bindings: HashMap<String, DesktopAction>,
}

impl InputManager {
    pub fn new(bindings: &BindingsConfig) -> Result<Self> {
        let actions = [
            DesktopAction::OpenApp(AppId::Terminal),
            DesktopAction::OpenApp(AppId::Projects),
            DesktopAction::OpenApp(AppId::About),
            DesktopAction::OpenApp(AppId::Contact),
            DesktopAction::OpenApp(AppId::Ailab),
            DesktopAction::OpenApp(AppId::Blog),
            DesktopAction::CloseActive,
            DesktopAction::MinimizeActive,
        ];

        let mut key_bindings = HashMap::new();
        for ((name, combo), action) in bindings.entries().into_iter().zip(actions) {
            if let Some(previous) = key_bindings.insert(combo.to_string(), action) {
                bail!(
                    "Key binding {} ({}) conflicts with {:?}",
                    name,
                    combo,
                    previous
                );
            }
        }

        info!("⌨️ Loaded {} key bindings", key_bindings.len());

        Ok(Self { key_bindings })
    }

    /// Look up the action bound to a key press
    pub fn process_key(&self, event: &KeyEvent) -> Option<DesktopAction> {
        let combo = event.combo();
        let action = self.key_bindings.get(&combo).copied();
        match action {
            Some(action) => debug!("⌨️ {} triggered {:?}", combo, action),
            None => debug!("⌨️ {} is unbound", combo),
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_open_apps_in_dock_order() -> Result<()> {
        let input = InputManager::new(&BindingsConfig::default())?;
        for (i, app) in AppId::ALL.into_iter().enumerate() {
            let event = KeyEvent::new((i + 1).to_string(), &["Super"]);
            assert_eq!(input.process_key(&event), Some(DesktopAction::OpenApp(app)));
        }
        Ok(())
    }

    #[test]
    fn test_close_and_minimize_bindings() -> Result<()> {
        let input = InputManager::new(&BindingsConfig::default())?;
        assert_eq!(
            input.process_key(&KeyEvent::new("w", &["Super"])),
            Some(DesktopAction::CloseActive)
        );
        assert_eq!(
            input.process_key(&KeyEvent::new("m", &["Super"])),
            Some(DesktopAction::MinimizeActive)
        );
        Ok(())
    }

    #[test]
    fn test_unbound_key_is_ignored() -> Result<()> {
        let input = InputManager::new(&BindingsConfig::default())?;
        assert_eq!(input.process_key(&KeyEvent::new("1", &[])), None);
        assert_eq!(input.process_key(&KeyEvent::new("x", &["Super", "Shift"])), None);
        Ok(())
    }

    #[test]
    fn test_conflicting_bindings_rejected() {
        let mut bindings = BindingsConfig::default();
        bindings.open_blog = bindings.open_terminal.clone();
        assert!(InputManager::new(&bindings).is_err());
    }

    #[test]
    fn test_combo_formatting() {
        assert_eq!(KeyEvent::new("q", &["Super", "Shift"]).combo(), "Super+Shift+q");
        assert_eq!(KeyEvent::new("Escape", &[]).combo(), "Escape");
    }

    #[test]
    fn test_pointer_event_position() {
        let events = [
            PointerEvent::Down { x: 12.0, y: 34.0 },
            PointerEvent::Move { x: 12.0, y: 34.0 },
            PointerEvent::Up { x: 12.0, y: 34.0 },
            PointerEvent::Click { x: 12.0, y: 34.0 },
            PointerEvent::DoubleClick { x: 12.0, y: 34.0 },
        ];
        for event in events {
            assert_eq!(event.position(), Point::new(12.0, 34.0));
        }
    }
}
