mod app_state;
mod banner;
mod bubble;
mod bubble_list;
mod classifier;
pub mod events;
mod responder;
mod scroll;
pub mod triage;

pub use app_state::*;
pub use banner::*;
pub use bubble::*;
pub use bubble_list::*;
pub use classifier::*;
pub use responder::*;
pub use scroll::*;
