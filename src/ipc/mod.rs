//! Session protocol for driving the desktop
//!
//! A session is a stream of JSON lines. Each line is a `type`-tagged
//! request; after applying it the server answers with one line holding a
//! full desktop snapshot. A malformed line gets an `error` line instead and
//! the session carries on. Blank lines and `#` comments are skipped so that
//! scripts can be annotated.

use crate::config::is_positive;
use crate::desktop::{Desktop, DesktopSnapshot, SharedDesktop};
use crate::input::{KeyEvent, PointerEvent};
use crate::window::{AppId, Size, WindowId};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Requests accepted from a session
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DesktopRequest {
    OpenApp {
        app: AppId,
    },
    DockClick {
        app: AppId,
    },
    CloseWindow {
        id: WindowId,
    },
    MinimizeWindow {
        id: WindowId,
    },
    FocusWindow {
        id: WindowId,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    Click {
        x: f64,
        y: f64,
    },
    DoubleClick {
        x: f64,
        y: f64,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Vec<String>,
    },
    /// Terminal command routed through the command hook
    Command {
        command: String,
    },
    SetViewport {
        width: f64,
        height: f64,
    },
    Snapshot,
}

/// Messages written back to a session
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DesktopMessage {
    Snapshot(DesktopSnapshot),
    Error { message: String },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed request: {0}")]
    Malformed(serde_json::Error),

    #[error("invalid viewport {width}x{height}: both dimensions must be positive")]
    InvalidViewport { width: f64, height: f64 },

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_request(line: &str) -> Result<DesktopRequest, SessionError> {
    serde_json::from_str(line).map_err(SessionError::Malformed)
}

/// Apply one request; returns whether any window state changed
pub fn apply_request(
    desktop: &mut Desktop,
    request: &DesktopRequest,
) -> Result<bool, SessionError> {
    let changed = match request {
        DesktopRequest::OpenApp { app } => desktop.open_app(*app),
        DesktopRequest::DockClick { app } => desktop.dock_click(*app),
        DesktopRequest::CloseWindow { id } => desktop.close_window(id),
        DesktopRequest::MinimizeWindow { id } => desktop.minimize_window(id),
        DesktopRequest::FocusWindow { id } => desktop.focus_window(id),
        &DesktopRequest::PointerDown { x, y } => {
            desktop.handle_pointer(PointerEvent::Down { x, y })
        }
        &DesktopRequest::PointerMove { x, y } => {
            desktop.handle_pointer(PointerEvent::Move { x, y })
        }
        &DesktopRequest::PointerUp { x, y } => desktop.handle_pointer(PointerEvent::Up { x, y }),
        &DesktopRequest::Click { x, y } => desktop.handle_pointer(PointerEvent::Click { x, y }),
        &DesktopRequest::DoubleClick { x, y } => {
            desktop.handle_pointer(PointerEvent::DoubleClick { x, y })
        }
        DesktopRequest::Key { key, modifiers } => {
            let event = KeyEvent {
                key: key.clone(),
                modifiers: modifiers.clone(),
            };
            desktop.handle_key(&event)
        }
        DesktopRequest::Command { command } => desktop.execute_command(command),
        &DesktopRequest::SetViewport { width, height } => {
            if !is_positive(width) || !is_positive(height) {
                return Err(SessionError::InvalidViewport { width, height });
            }
            desktop.set_viewport(Size::new(width, height));
            false
        }
        DesktopRequest::Snapshot => false,
    };
    Ok(changed)
}

/// Serves one session at a time against a shared desktop
pub struct SessionServer {
    desktop: SharedDesktop,
    processed: u64,
}

impl SessionServer {
    pub fn new(desktop: SharedDesktop) -> Self {
        Self {
            desktop,
            processed: 0,
        }
    }

    pub fn desktop(&self) -> &SharedDesktop {
        &self.desktop
    }

    /// Number of requests handled so far, malformed ones included
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Handle a single input line. Blank lines and comments yield nothing.
    pub fn handle_line(&mut self, line: &str) -> Option<DesktopMessage> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        self.processed += 1;
        debug!("📨 Session request: {}", line);

        let result = parse_request(line).and_then(|request| {
            let mut desktop = self.desktop.write();
            apply_request(&mut desktop, &request)?;
            Ok(desktop.snapshot())
        });

        match result {
            Ok(snapshot) => Some(DesktopMessage::Snapshot(snapshot)),
            Err(e) => {
                warn!("⚠️ Rejected session request: {}", e);
                Some(DesktopMessage::Error {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Read requests until end of input, answering each on `writer`
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("🔗 Session started");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(message) = self.handle_line(&line) {
                Self::send_message(&mut writer, &message).await?;
            }
        }
        writer.flush().await?;

        info!("📪 Session ended after {} requests", self.processed);
        Ok(())
    }

    async fn send_message<W>(writer: &mut W, message: &DesktopMessage) -> Result<(), SessionError>
    where
        W: AsyncWrite + Unpin,
    {
        let json = serde_json::to_string(message)?;
        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        Ok(())
    }
}
