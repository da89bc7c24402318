//! Interactive confirmation port.

/// Asks the operator a yes/no question.
pub trait Prompt: Send + Sync {
    /// Returns `true` when the operator confirms `question`.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, question: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
