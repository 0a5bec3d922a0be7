use super::BubbleList;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Message;

fn messages_fixture() -> Vec<Message> {
    Config::set(ConfigKey::Username, "testuser");
    return vec![
        Message::new(Author::Haven, "Hi there!"),
        Message::new(Author::User, "Hello"),
    ];
}

#[test]
fn it_counts_bubble_lines() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages_fixture(), 50);

    // Two single-line bubbles, three rendered lines each.
    assert_eq!(bubble_list.len(), 6);
    assert!(!bubble_list.is_empty());
}

#[test]
fn it_is_stable_across_repeat_syncs() {
    let mut bubble_list = BubbleList::new();
    let messages = messages_fixture();

    bubble_list.set_messages(&messages, 50);
    let first = bubble_list.len();
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.len(), first);
}

#[test]
fn it_recomputes_on_width_change() {
    let mut bubble_list = BubbleList::new();
    let messages = messages_fixture();

    bubble_list.set_messages(&messages, 50);
    bubble_list.set_messages(&messages, 30);

    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_resets_when_messages_are_cleared() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages_fixture(), 50);

    bubble_list.set_messages(&[], 50);

    assert_eq!(bubble_list.len(), 0);
    assert!(bubble_list.is_empty());
}
