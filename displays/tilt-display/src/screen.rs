//! Screen buffer types
//!
//! A screen is a short list of placed text items plus the rotation they
//! are drawn in. It can be rendered to any `DisplayBackend`.

use heapless::{String, Vec};
use tilt_core::config::DisplayOrientation;

use crate::backend::{DisplayBackend, DisplayError};
use crate::layout::{Placement, TextSize};

/// Maximum characters per text item
pub const LINE_LEN: usize = 16;

/// Maximum text items per screen
pub const MAX_ITEMS: usize = 12;

/// One piece of text on a screen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextItem {
    pub placement: Placement,
    pub size: TextSize,
    pub text: String<LINE_LEN>,
}

/// Screen description in one orientation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    /// Rotation the items are laid out in
    orientation: DisplayOrientation,
    /// Items in draw order
    items: Vec<TextItem, MAX_ITEMS>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(DisplayOrientation::Rot0)
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new(orientation: DisplayOrientation) -> Self {
        Self {
            orientation,
            items: Vec::new(),
        }
    }

    /// Add a text item
    ///
    /// Text longer than [`LINE_LEN`] is truncated; items past
    /// [`MAX_ITEMS`] are dropped.
    pub fn push(&mut self, placement: Placement, size: TextSize, text: &str) {
        let mut line = String::new();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        let _ = self.items.push(TextItem {
            placement,
            size,
            text: line,
        });
    }

    /// Rotation of this screen
    pub fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    /// All items in draw order
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// Text at a placement, if any
    pub fn text_at(&self, placement: Placement) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.placement == placement)
            .map(|item| item.text.as_str())
    }

    /// Draw the screen and flush it
    pub fn render<B: DisplayBackend>(&self, backend: &mut B) -> Result<(), DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        backend.clear()?;
        backend.set_orientation(self.orientation)?;
        for item in &self.items {
            backend.draw_text(item.placement, item.size, &item.text)?;
        }
        backend.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockBackend {
        ready: bool,
        log: std::vec::Vec<std::string::String>,
    }

    impl DisplayBackend for MockBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.log.push("clear".into());
            Ok(())
        }

        fn set_orientation(&mut self, orientation: DisplayOrientation) -> Result<(), DisplayError> {
            self.log.push(format!("rot{}", orientation.index()));
            Ok(())
        }

        fn draw_text(
            &mut self,
            _placement: Placement,
            _size: TextSize,
            text: &str,
        ) -> Result<(), DisplayError> {
            self.log.push(format!("text:{}", text));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.log.push("flush".into());
            Ok(())
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_push_truncates() {
        let mut screen = Screen::default();
        screen.push(Placement::Center, TextSize::Normal, "a very long line of text");
        assert_eq!(screen.items()[0].text.len(), LINE_LEN);
    }

    #[test]
    fn test_push_drops_overflow() {
        let mut screen = Screen::default();
        for _ in 0..MAX_ITEMS + 3 {
            screen.push(Placement::Center, TextSize::Normal, "x");
        }
        assert_eq!(screen.items().len(), MAX_ITEMS);
    }

    #[test]
    fn test_render_order() {
        let mut screen = Screen::new(DisplayOrientation::Rot180);
        screen.push(Placement::Upper, TextSize::Large, "one");
        screen.push(Placement::Lower, TextSize::Large, "two");

        let mut backend = MockBackend {
            ready: true,
            ..Default::default()
        };
        screen.render(&mut backend).unwrap();
        assert_eq!(backend.log, ["clear", "rot2", "text:one", "text:two", "flush"]);
    }

    #[test]
    fn test_render_requires_ready_backend() {
        let screen = Screen::default();
        let mut backend = MockBackend::default();
        assert_eq!(screen.render(&mut backend), Err(DisplayError::NotInitialized));
        assert!(backend.log.is_empty());
    }
}
