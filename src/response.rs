//! Response selection for resolved intents.
//!
//! Two policies are supported: uniform-random choice over the intent's
//! response list, and deterministic first-response selection annotated with
//! the classifier's confidence. The random source is injected so tests can
//! pin the outcome with a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::intent::Intent;

/// Selects one reply string for a resolved intent.
///
/// # Examples
///
/// ```
/// use deskbot::intent::Intent;
/// use deskbot::response::ResponseSelector;
///
/// let intent = Intent {
///     tag: "greeting".to_string(),
///     keywords: vec!["hi".to_string()],
///     patterns: Vec::new(),
///     responses: vec!["Hello!".to_string(), "Hi there!".to_string()],
/// };
///
/// let mut selector = ResponseSelector::with_seed(42);
/// let reply = selector.select_random(&intent);
/// assert!(intent.responses.iter().any(|r| r == reply));
///
/// let reply = selector.select_annotated(&intent, 0.734);
/// assert_eq!(reply, "Hello! (intent: greeting, conf=0.73)");
/// ```
#[derive(Debug)]
pub struct ResponseSelector {
    rng: StdRng,
}

impl ResponseSelector {
    /// Create a selector seeded from the operating system.
    pub fn new() -> Self {
        ResponseSelector {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a selector with a fixed seed, for reproducible selection.
    pub fn with_seed(seed: u64) -> Self {
        ResponseSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a response uniformly at random from the intent's list.
    ///
    /// Catalog validation guarantees the list is non-empty.
    pub fn select_random<'a>(&mut self, intent: &'a Intent) -> &'a str {
        let idx = self.rng.random_range(0..intent.responses.len());
        &intent.responses[idx]
    }

    /// Return the intent's first response, suffixed with a machine-readable
    /// annotation carrying the intent tag and confidence score.
    pub fn select_annotated(&mut self, intent: &Intent, confidence: f64) -> String {
        format!(
            "{} (intent: {}, conf={confidence:.2})",
            intent.responses[0], intent.tag
        )
    }

    /// Return the intent's first response unannotated.
    pub fn select_first<'a>(&mut self, intent: &'a Intent) -> &'a str {
        &intent.responses[0]
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(responses: &[&str]) -> Intent {
        Intent {
            tag: "greeting".to_string(),
            keywords: vec!["hi".to_string()],
            patterns: Vec::new(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_random_selection_is_seeded() {
        let intent = intent(&["a", "b", "c", "d", "e"]);

        let picks_1: Vec<String> = {
            let mut selector = ResponseSelector::with_seed(7);
            (0..10)
                .map(|_| selector.select_random(&intent).to_string())
                .collect()
        };
        let picks_2: Vec<String> = {
            let mut selector = ResponseSelector::with_seed(7);
            (0..10)
                .map(|_| selector.select_random(&intent).to_string())
                .collect()
        };

        assert_eq!(picks_1, picks_2);
        assert!(picks_1.iter().all(|p| intent.responses.contains(p)));
    }

    #[test]
    fn test_single_response_always_chosen() {
        let intent = intent(&["only"]);
        let mut selector = ResponseSelector::with_seed(0);
        for _ in 0..5 {
            assert_eq!(selector.select_random(&intent), "only");
        }
    }

    #[test]
    fn test_annotated_formatting() {
        let intent = intent(&["Hello! How can I help you?"]);
        let mut selector = ResponseSelector::with_seed(0);
        assert_eq!(
            selector.select_annotated(&intent, 0.3551),
            "Hello! How can I help you? (intent: greeting, conf=0.36)"
        );
        assert_eq!(
            selector.select_annotated(&intent, 1.0),
            "Hello! How can I help you? (intent: greeting, conf=1.00)"
        );
    }
}
