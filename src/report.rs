//! Progress reporting for pipeline runs.
//!
//! Messages go to stderr so they never mix with data sent to stdout.
//! Each level carries a fixed prefix for scannable output.

/// Severity of a progress message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Display prefix for this level.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Info => "   ",
            Level::Success => "   ✓",
            Level::Warning => "   ⚠️",
            Level::Error => "   ❌",
        }
    }
}

/// Emit one message at the given level.
pub fn emit(level: Level, message: impl Into<String>) {
    eprintln!("{} {}", level.prefix(), message.into());
}

/// Convenient reporting functions
pub fn info(msg: impl Into<String>) {
    emit(Level::Info, msg);
}

pub fn success(msg: impl Into<String>) {
    emit(Level::Success, msg);
}

pub fn warning(msg: impl Into<String>) {
    emit(Level::Warning, msg);
}

pub fn error(msg: impl Into<String>) {
    emit(Level::Error, msg);
}
