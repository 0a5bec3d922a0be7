use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Support tier assigned to a single user message. Emergency strictly
/// outranks urgent, which outranks regular.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Emergency,
    Urgent,
    Regular,
}
