//! # DevOS Desktop Library
//!
//! A simulated desktop: a fixed set of application windows that can be
//! opened, closed, minimized, focused, dragged, resized and maximized, plus
//! a dock and a terminal command hook.
//!
//! ## Architecture
//!
//! DevOS is built on a modular architecture:
//! - `window`: Window registry, per-window controllers and geometry
//! - `decoration`: Window chrome layout and hit-testing
//! - `dock`: Launcher items derived from the registry
//! - `command`: Terminal commands that open apps
//! - `input`: Pointer events and launcher key bindings
//! - `desktop`: Pointer routing, capture and snapshots
//! - `config`: Configuration parsing and management
//! - `ipc`: JSON-lines session protocol
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devos::{AppId, Desktop, DesktopConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut desktop = Desktop::new(&DesktopConfig::default())?;
//!     desktop.open_app(AppId::Terminal);
//!     desktop.execute_command("ls projects");
//!     assert_eq!(desktop.active_app(), Some(AppId::Projects));
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod decoration;
pub mod desktop;
pub mod dock;
pub mod input;
pub mod ipc;
pub mod window;

// Re-export main types for easy access
pub use config::DesktopConfig;
pub use desktop::{Desktop, DesktopSnapshot, SharedDesktop, WindowSnapshot};
pub use dock::{Dock, DockItem};
pub use input::{InputManager, KeyEvent, PointerEvent};
pub use ipc::{DesktopMessage, DesktopRequest, SessionError, SessionServer};
pub use window::{AppId, WindowId, WindowRecord, WindowRegistry};

// Re-export common error types
pub use anyhow::{Context, Error, Result};

/// Version information for DevOS
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
