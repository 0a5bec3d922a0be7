use ratatui::style::Color;

use super::Banner;
use crate::domain::models::Severity;

#[test]
fn it_maps_severity_to_colors() {
    assert_eq!(Banner::severity_color(Severity::Error), Color::Red);
    assert_eq!(Banner::severity_color(Severity::Warning), Color::Yellow);
    assert_eq!(Banner::severity_color(Severity::Info), Color::Blue);
}
