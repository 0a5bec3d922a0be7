#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

use once_cell::sync::Lazy;

use crate::domain::models::Tier;

// Ordered by precedence. A single hit in an earlier table wins over any
// number of hits in a later one.
static KEYWORDS: Lazy<Vec<(Tier, Vec<&'static str>)>> = Lazy::new(|| {
    return vec![
        (
            Tier::Emergency,
            vec!["suicide", "kill", "die", "hurt", "emergency"],
        ),
        (
            Tier::Urgent,
            vec!["anxiety", "panic", "scared", "urgent", "help"],
        ),
    ];
});

pub struct Classifier {}

impl Classifier {
    /// Maps a message to a support tier by case-insensitive substring
    /// containment. Total over all strings, the empty string included.
    pub fn classify(text: &str) -> Tier {
        let lowered = text.to_lowercase();

        for (tier, keywords) in KEYWORDS.iter() {
            if keywords.iter().any(|keyword| return lowered.contains(keyword)) {
                return *tier;
            }
        }

        return Tier::Regular;
    }
}
