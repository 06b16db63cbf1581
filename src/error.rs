use thiserror::Error;

/// Precondition failures reported by the constructors.
///
/// Once an automaton is built, stepping it cannot fail; `InvalidRuleState`
/// only surfaces from explicit validation of a generation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("invalid extent {extent} on axis {axis}")]
    InvalidDimension { axis: usize, extent: usize },

    #[error("invalid seed pattern: {0}")]
    InvalidSeedPattern(String),

    #[error("cell {index} holds state {value}, alphabet has {states} states")]
    InvalidRuleState { index: usize, value: u8, states: u8 },
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
