/// ANSI color helper utilities for terminal output.
use crate::models::{EventKind, Status};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// idle → grey, arrived → green, departed → red
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Idle => GREY,
        Status::Arrived => GREEN,
        Status::Departed => RED,
    }
}

pub fn color_for_event(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Created => BLUE,
        EventKind::Deleted => RED,
        EventKind::Arrived => GREEN,
        EventKind::Departed => RED,
        EventKind::Idle => GREY,
    }
}

/// Wrap `value` in `color` … `RESET`.
pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Paint the status with its icon and label, e.g. "▲ Arrived" in green.
pub fn colorize_status(status: Status) -> String {
    paint(
        color_for_status(status),
        &format!("{} {}", status.icon(), status.label()),
    )
}

pub fn colorize_event(kind: EventKind) -> String {
    paint(color_for_event(kind), kind.label())
}
