//! Logging and debugging facilities for Veneer.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output per subsystem
//! - Debug visualization for option lists
//!
//! # Tracing Integration
//!
//! Veneer uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("veneer::select=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! Use [`OptionListDebug`] to render an option list with its selection marker:
//!
//! ```
//! use veneer_core::logging::OptionListDebug;
//!
//! let rows = [("a", "Apple", false), ("b", "Banana", true)];
//! let text = OptionListDebug::new().format(rows);
//! assert!(text.contains("▸ [1] b = Banana"));
//! ```

use std::fmt::Write as FmtWrite;

/// Span names used throughout Veneer for tracing.
pub mod span_names {
    /// Selection synchronizer step.
    pub const SYNC: &str = "veneer::sync";
    /// Input router dispatch.
    pub const ROUTER: &str = "veneer::router";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "veneer_core::signal";
    /// Select widget target.
    pub const SELECT: &str = "veneer::select";
    /// Selection synchronizer target.
    pub const SYNC: &str = "veneer::select::sync";
    /// Input router target.
    pub const ROUTER: &str = "veneer::select::router";
    /// Native control adapter target.
    pub const NATIVE: &str = "veneer::select::native";
}

/// Style options for option list visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// ASCII selection marker.
    Ascii,
    /// Unicode selection marker.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Debug utility for visualizing option lists.
#[derive(Debug, Clone, Default)]
pub struct OptionListDebug {
    style: ListStyle,
}

impl OptionListDebug {
    /// Create a new debug visualizer with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with a specific style.
    pub fn with_style(style: ListStyle) -> Self {
        Self { style }
    }

    /// Format `(value, label, selected)` rows in document order.
    pub fn format<'a, I>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str, bool)>,
    {
        let mut output = String::new();

        if self.style == ListStyle::Compact {
            let parts: Vec<String> = rows
                .into_iter()
                .map(|(value, _, selected)| {
                    if selected {
                        format!("*{value}")
                    } else {
                        value.to_string()
                    }
                })
                .collect();
            output.push('[');
            output.push_str(&parts.join(", "));
            output.push(']');
            return output;
        }

        let marker = match self.style {
            ListStyle::Ascii => ">",
            _ => "▸",
        };

        let mut count = 0;
        for (index, (value, label, selected)) in rows.into_iter().enumerate() {
            let lead = if selected { marker } else { " " };
            // Writing to a String cannot fail.
            let _ = writeln!(output, "{lead} [{index}] {value} = {label}");
            count += 1;
        }

        if count == 0 {
            output.push_str("  (empty)\n");
        }

        output
    }
}
