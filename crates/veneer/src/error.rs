//! Error types for the select widget.

/// Result type alias for select widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or driving a select widget.
///
/// Guarded no-ops (operating a disabled widget, stepping past either end of
/// the list) are not errors; they are reported through the operation's return
/// value instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The native control carries no entries to build options from.
    #[error("native control has no entries to build options from")]
    EmptyOptions,

    /// A selection target pointed past the end of the option list.
    #[error("option index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },

    /// A selection target named a value no option carries.
    #[error("no option carries the value '{0}'")]
    UnknownValue(String),

    /// Per-instance configuration could not be parsed.
    #[error("invalid select configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A registry lookup named a widget that was torn down or never existed.
    #[error("no select widget is registered under this id")]
    UnknownWidget,
}

impl Error {
    /// Create an index-out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an unknown-value error.
    pub fn unknown_value(value: impl Into<String>) -> Self {
        Self::UnknownValue(value.into())
    }
}
