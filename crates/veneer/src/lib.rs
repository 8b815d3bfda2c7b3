//! Veneer - a styleable custom select widget kept in sync with a native
//! selection control.
//!
//! The native control stays in the page for form submission and
//! accessibility. Veneer renders a custom trigger and option list on top of
//! it and guarantees that every selection reaches the native control before
//! the custom presentation shows it.
//!
//! # Example
//!
//! ```
//! use veneer::events::SelectEvent;
//! use veneer::{CustomSelect, MarkupRenderer, NativeControl, NativeSelect, SelectConfig};
//!
//! let native = NativeSelect::new()
//!     .with_entry("a", "Apple")
//!     .with_selected_entry("b", "Banana")
//!     .with_entry("c", "Cherry");
//! let renderer = MarkupRenderer::new();
//! let tree = renderer.tree();
//!
//! let mut select = CustomSelect::new(native, renderer, SelectConfig::default())?;
//!
//! // Open the list, then pick "Apple".
//! select.dispatch(&mut SelectEvent::trigger_press());
//! select.dispatch(&mut SelectEvent::option_press("a"));
//!
//! assert_eq!(select.native().value().as_deref(), Some("a"));
//! assert!(!select.is_expanded());
//! assert!(tree.lock().to_markup().contains(">Apple</span>"));
//! # Ok::<(), veneer::Error>(())
//! ```
//!
//! # Logging
//!
//! Veneer logs through `tracing` under the targets in
//! [`veneer_core::logging::targets`]; install a subscriber to see them.

pub mod config;
pub mod error;
pub mod events;
pub mod registry;
pub mod select;

pub use config::{ClassNames, SelectConfig};
pub use error::{Error, Result};
pub use registry::{SelectId, SelectRegistry};
pub use select::{
    CustomSelect, Direction, Element, Expansion, ExpansionRequest, MarkupRenderer, MarkupTree,
    NativeControl, NativeEntry, NativeSelect, OptionSet, RecordingRenderer, RenderCall,
    RenderHandle, RenderLog, Renderer, SelectModel, SelectOption, SelectTarget, SyncOutcome,
    Synchronizer, WidgetState,
};

pub use veneer_core::{ConnectionId, Signal};
