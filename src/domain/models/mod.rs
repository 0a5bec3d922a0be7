mod action;
mod author;
mod event;
mod loading;
mod message;
mod notification;
mod notifier;
mod slash_commands;
mod textarea;
mod tier;
mod triage;

pub use action::*;
pub use author::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use notification::*;
pub use notifier::*;
pub use slash_commands::*;
pub use textarea::*;
pub use tier::*;
pub use triage::*;
