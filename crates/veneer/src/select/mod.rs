//! The select widget and its state-synchronization engine.
//!
//! Data flows one way:
//!
//! ```text
//! SelectEvent ─▶ router ─▶ expansion / synchronizer ─▶ NativeControl::commit
//!                                                   └─▶ Renderer notifications
//! ```
//!
//! [`CustomSelect`] is the entry point; the other modules are exposed for
//! hosts that supply their own native control or renderer.

mod expansion;
mod markup;
mod native;
mod option;
mod renderer;
mod router;
mod state;
mod sync;
mod widget;

pub use expansion::{Expansion, ExpansionRequest};
pub use markup::{Element, MarkupRenderer, MarkupTree};
pub use native::{NativeControl, NativeSelect};
pub use option::{NativeEntry, OptionSet, SelectOption};
pub use renderer::{RecordingRenderer, RenderCall, RenderHandle, RenderLog, Renderer};
pub use state::{SelectModel, WidgetState};
pub use sync::{Direction, SelectTarget, SyncOutcome, Synchronizer};
pub use widget::CustomSelect;
