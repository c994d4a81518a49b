/// Errors raised by a loaded predictor during a prediction call.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference failed: {reason}")]
    Failed { reason: String },

    #[error("all {attempted} predictors in the chain failed")]
    ChainExhausted { attempted: usize },
}
