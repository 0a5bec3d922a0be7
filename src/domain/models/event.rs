use tui_textarea::Input;

use super::Notification;
use super::TriageResponse;

pub enum Event {
    Notify(Notification),
    TriageResponse(TriageResponse),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
