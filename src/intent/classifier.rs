//! Intent classifier trait definition.

use crate::error::Result;
use crate::intent::types::Classification;

/// Intent classifier trait.
///
/// Implementations map a raw user message to an intent tag plus a
/// confidence score.
pub trait IntentClassifier: Send + Sync {
    /// Classify the given message.
    ///
    /// # Arguments
    /// * `text` - The raw message text to classify
    ///
    /// # Returns
    /// The resulting [`Classification`]
    fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
