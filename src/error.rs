use thiserror::Error;

/// Errors raised by the decision core.
///
/// Framing problems (missing lines, non-numeric tokens) never reach this type;
/// the protocol reader rejects them before a snapshot can be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A wire token could not be mapped onto one of the closed enums.
    #[error("malformed snapshot: unrecognised {field} token {token:?}")]
    MalformedSnapshot { field: &'static str, token: String },
}

impl CoreError {
    pub fn malformed(field: &'static str, token: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            field,
            token: token.into(),
        }
    }
}
