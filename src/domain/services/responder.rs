#[cfg(test)]
#[path = "responder_test.rs"]
mod tests;

use crate::domain::models::Tier;

pub struct Responder {}

impl Responder {
    /// Scripted reply for a tier. One canned response per tier, nothing
    /// inferred from the message itself.
    pub fn respond(tier: Tier) -> &'static str {
        match tier {
            Tier::Emergency => {
                return "We're connecting you with a crisis counselor immediately. Please stay with us.";
            }
            Tier::Urgent => {
                return "We understand you need help soon. A counselor will be with you shortly.";
            }
            Tier::Regular => {
                return "Thank you for reaching out. We'll schedule a session with a counselor.";
            }
        }
    }
}
