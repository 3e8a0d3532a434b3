//! Command hook exposed to content panels
//!
//! The terminal panel forwards a few literal commands that ask the window
//! manager to open another app. Everything else stays inside the panel.

use crate::window::AppId;

/// Recognized commands and the app each one opens
const COMMANDS: [(&str, AppId); 5] = [
    ("ls projects", AppId::Projects),
    ("open resume", AppId::About),
    ("contact", AppId::Contact),
    ("open ailab", AppId::Ailab),
    ("open blog", AppId::Blog),
];

/// App a panel command asks to open, if any
pub fn app_for_command(command: &str) -> Option<AppId> {
    let command = command.trim();
    COMMANDS
        .iter()
        .find(|(literal, _)| *literal == command)
        .map(|(_, app)| *app)
}
