//! The three timer screens
//!
//! The menu is always upright and shows, on each edge, the duration of
//! the face that rests on that edge. Countdown and alarm screens are drawn
//! in the session's rotation so they read upright whichever face is down.

use core::fmt::Write;

use heapless::String;
use tilt_core::config::{DisplayOrientation, FaceBinding};
use tilt_core::orientation::Face;

use crate::layout::{Placement, Side, TextSize};
use crate::screen::{Screen, LINE_LEN};

/// Screen edge that is down when a face is down
pub fn side_for(face: Face) -> Option<Side> {
    match face {
        Face::NegY => Some(Side::Bottom),
        Face::PosX => Some(Side::Right),
        Face::PosY => Some(Side::Top),
        Face::NegX => Some(Side::Left),
        Face::None => None,
    }
}

fn arrow_for(side: Side) -> &'static str {
    match side {
        Side::Top => "^",
        Side::Bottom => "v",
        Side::Left => "<",
        Side::Right => ">",
    }
}

/// Face-selection menu
pub fn menu_screen(bindings: &[FaceBinding]) -> Screen {
    let mut screen = Screen::new(DisplayOrientation::Rot0);
    screen.push(Placement::Center, TextSize::Normal, "Choose");

    for binding in bindings {
        let Some(side) = side_for(binding.face) else {
            continue;
        };
        let mut label: String<LINE_LEN> = String::new();
        let _ = write!(label, "{}s", binding.duration_s);
        screen.push(Placement::Edge(side), TextSize::Normal, &label);
        screen.push(Placement::Inner(side), TextSize::Normal, arrow_for(side));
    }

    screen
}

/// Remaining seconds, large and centered
pub fn countdown_screen(remaining_s: u16, orientation: DisplayOrientation) -> Screen {
    let mut screen = Screen::new(orientation);
    let mut text: String<LINE_LEN> = String::new();
    let _ = write!(text, "{}", remaining_s);
    screen.push(Placement::Center, TextSize::Large, &text);
    screen
}

/// Time-up message
///
/// Sideways screens are too narrow for the two-line layout and get a
/// single line instead.
pub fn alarm_screen(orientation: DisplayOrientation) -> Screen {
    let mut screen = Screen::new(orientation);
    if orientation.is_sideways() {
        screen.push(Placement::Center, TextSize::Normal, "Time is Up!");
    } else {
        screen.push(Placement::Upper, TextSize::Large, "Time's");
        screen.push(Placement::Lower, TextSize::Large, "Up!");
    }
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt_core::config::TimerConfig;

    #[test]
    fn test_menu_layout() {
        let screen = menu_screen(&TimerConfig::DEFAULT.bindings);
        assert_eq!(screen.orientation(), DisplayOrientation::Rot0);
        assert_eq!(screen.text_at(Placement::Center), Some("Choose"));
        assert_eq!(screen.text_at(Placement::Edge(Side::Bottom)), Some("5s"));
        assert_eq!(screen.text_at(Placement::Edge(Side::Right)), Some("30s"));
        assert_eq!(screen.text_at(Placement::Edge(Side::Top)), Some("15s"));
        assert_eq!(screen.text_at(Placement::Edge(Side::Left)), Some("10s"));
        assert_eq!(screen.text_at(Placement::Inner(Side::Bottom)), Some("v"));
        assert_eq!(screen.text_at(Placement::Inner(Side::Right)), Some(">"));
        assert_eq!(screen.text_at(Placement::Inner(Side::Top)), Some("^"));
        assert_eq!(screen.text_at(Placement::Inner(Side::Left)), Some("<"));
        assert_eq!(screen.items().len(), 9);
    }

    #[test]
    fn test_menu_follows_config() {
        let mut config = TimerConfig::DEFAULT;
        config.bindings[0].duration_s = 120;
        let screen = menu_screen(&config.bindings);
        assert_eq!(screen.text_at(Placement::Edge(Side::Bottom)), Some("120s"));
    }

    #[test]
    fn test_countdown_screen() {
        let screen = countdown_screen(27, DisplayOrientation::Rot90);
        assert_eq!(screen.orientation(), DisplayOrientation::Rot90);
        assert_eq!(screen.text_at(Placement::Center), Some("27"));
        assert_eq!(screen.items()[0].size, TextSize::Large);
    }

    #[test]
    fn test_alarm_upright_two_lines() {
        for orientation in [DisplayOrientation::Rot0, DisplayOrientation::Rot180] {
            let screen = alarm_screen(orientation);
            assert_eq!(screen.text_at(Placement::Upper), Some("Time's"));
            assert_eq!(screen.text_at(Placement::Lower), Some("Up!"));
        }
    }

    #[test]
    fn test_alarm_sideways_single_line() {
        for orientation in [DisplayOrientation::Rot90, DisplayOrientation::Rot270] {
            let screen = alarm_screen(orientation);
            assert_eq!(screen.items().len(), 1);
            assert_eq!(screen.text_at(Placement::Center), Some("Time is Up!"));
        }
    }
}
