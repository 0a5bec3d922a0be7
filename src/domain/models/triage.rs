use super::Message;
use super::Tier;

pub struct TriagePrompt {
    pub text: String,
}

impl TriagePrompt {
    pub fn new(text: String) -> TriagePrompt {
        return TriagePrompt { text };
    }
}

pub struct TriageResponse {
    pub tier: Tier,
    pub reply: Message,
}
