use super::TriagePrompt;

pub enum Action {
    TriageRequest(TriagePrompt),
}
