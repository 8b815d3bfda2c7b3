//! Core systems for Veneer.
//!
//! This crate provides the foundational pieces shared by the Veneer widgets:
//!
//! - **Signal/Slot System**: Type-safe notification of state changes
//! - **Logging**: `tracing` targets, span names and debug formatting helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use veneer_core::Signal;
//!
//! // Create a signal that notifies when a value is committed
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit("b".to_string());
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::OptionListDebug;
pub use signal::{ConnectionId, Signal};
