/// Operator input rejected before any session state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a skip reason first")]
    EmptySkipReason,
}
