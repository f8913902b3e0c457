#![forbid(unsafe_code)]

//! Single-line edit buffer for the login fields.
//!
//! Grapheme-cluster aware: the cursor is a grapheme index, deletion
//! removes whole clusters, and display widths come from `unicode-width`
//! so wide characters scroll correctly. In mask mode every grapheme
//! renders as the mask character at width 1.

use crossterm::event::{KeyCode, KeyEvent};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single-line text edit buffer.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Mask character for password mode.
    mask_char: Option<char>,
}

impl EditBuffer {
    /// Create a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set password mode with a mask character (builder).
    #[must_use]
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask_char = Some(mask);
        self
    }

    /// Get the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the cursor position (grapheme index).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key event. Returns `true` if buffer state changed.
    ///
    /// Only plain editing keys are consumed; navigation between fields
    /// and submission belong to the caller.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        use crossterm::event::KeyModifiers;

        let ctrl_or_alt = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let plain = key.modifiers.is_empty();

        match key.code {
            KeyCode::Char(c) if !ctrl_or_alt => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace if plain => self.delete_char_back(),
            KeyCode::Delete if plain => self.delete_char_forward(),
            KeyCode::Left if plain => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    return true;
                }
                false
            }
            KeyCode::Right if plain => {
                if self.cursor < self.grapheme_count() {
                    self.cursor += 1;
                    return true;
                }
                false
            }
            KeyCode::Home if plain => {
                self.cursor = 0;
                true
            }
            KeyCode::End if plain => {
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    /// Visible text and relative cursor column for a viewport width.
    ///
    /// The window scrolls just enough to keep the cursor in view, so the
    /// returned column is always `< width` for a non-zero width.
    #[must_use]
    pub fn display(&self, width: u16) -> (String, u16) {
        let width = width as usize;
        if width == 0 {
            return (String::new(), 0);
        }

        let cursor_visual = self.cursor_visual_pos();
        let scroll = cursor_visual.saturating_sub(width - 1);

        let mut visible = String::new();
        let mut visual_x = 0usize;
        for g in self.value.graphemes(true) {
            let w = self.grapheme_width(g);
            if visual_x + w <= scroll {
                visual_x += w;
                continue;
            }
            if visual_x + w > scroll + width {
                break;
            }
            match self.mask_char {
                Some(mask) => visible.push(mask),
                None => visible.push_str(g),
            }
            visual_x += w;
        }

        (visible, (cursor_visual - scroll) as u16)
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) {
        let before = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        let after = self.grapheme_count();
        // A combining mark can merge into the previous cluster; only
        // advance when a new cluster appeared.
        if after > before {
            self.cursor += 1;
        } else {
            self.cursor = self.cursor.min(after);
        }
    }

    fn delete_char_back(&mut self) -> bool {
        if self.cursor > 0 {
            let byte_start = self.grapheme_byte_offset(self.cursor - 1);
            let byte_end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor -= 1;
            return true;
        }
        false
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor < self.grapheme_count() {
            let byte_start = self.grapheme_byte_offset(self.cursor);
            let byte_end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(byte_start..byte_end);
            return true;
        }
        false
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn grapheme_width(&self, g: &str) -> usize {
        if self.mask_char.is_some() {
            1
        } else {
            UnicodeWidthStr::width(g)
        }
    }

    fn cursor_visual_pos(&self) -> usize {
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(|g| self.grapheme_width(g))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_empty() {
        let buffer = EditBuffer::new();
        assert_eq!(buffer.value(), "");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn insert_appends_at_cursor() {
        let mut buffer = EditBuffer::new();
        for c in "a@b".chars() {
            assert!(buffer.handle_key(&press(KeyCode::Char(c))));
        }
        assert_eq!(buffer.value(), "a@b");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn insert_mid_value() {
        let mut buffer = EditBuffer::new();
        for c in "ac".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        buffer.handle_key(&press(KeyCode::Left));
        buffer.handle_key(&press(KeyCode::Char('b')));
        assert_eq!(buffer.value(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut buffer = EditBuffer::new();
        for c in "ab".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        assert!(buffer.handle_key(&press(KeyCode::Backspace)));
        assert_eq!(buffer.value(), "a");
    }

    #[test]
    fn backspace_at_start_is_ignored() {
        let mut buffer = EditBuffer::new();
        assert!(!buffer.handle_key(&press(KeyCode::Backspace)));
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut buffer = EditBuffer::new();
        for c in "ab".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        buffer.handle_key(&press(KeyCode::Home));
        assert!(buffer.handle_key(&press(KeyCode::Delete)));
        assert_eq!(buffer.value(), "b");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn home_and_end() {
        let mut buffer = EditBuffer::new();
        for c in "abc".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        buffer.handle_key(&press(KeyCode::Home));
        assert_eq!(buffer.cursor(), 0);
        buffer.handle_key(&press(KeyCode::End));
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut buffer = EditBuffer::new();
        assert!(!buffer.handle_key(&press(KeyCode::Left)));
        assert!(!buffer.handle_key(&press(KeyCode::Right)));
    }

    #[test]
    fn grapheme_deletion_removes_whole_cluster() {
        let mut buffer = EditBuffer::new();
        for c in "café".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        buffer.handle_key(&press(KeyCode::Backspace));
        assert_eq!(buffer.value(), "caf");
    }

    #[test]
    fn navigation_keys_with_modifiers_are_ignored() {
        let mut buffer = EditBuffer::new();
        buffer.handle_key(&press(KeyCode::Char('a')));
        let shift_left = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT);
        assert!(!buffer.handle_key(&shift_left));
    }

    #[test]
    fn display_unmasked() {
        let mut buffer = EditBuffer::new();
        for c in "abc".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        let (text, col) = buffer.display(10);
        assert_eq!(text, "abc");
        assert_eq!(col, 3);
    }

    #[test]
    fn display_masked() {
        let mut buffer = EditBuffer::new().with_mask('*');
        for c in "abc!".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        let (text, col) = buffer.display(10);
        assert_eq!(text, "****");
        assert_eq!(col, 4);
        assert_eq!(buffer.value(), "abc!");
    }

    #[test]
    fn display_scrolls_to_keep_cursor_visible() {
        let mut buffer = EditBuffer::new();
        for c in "abcdefgh".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        let (text, col) = buffer.display(4);
        assert_eq!(text, "fgh");
        assert_eq!(col, 3);
    }

    #[test]
    fn display_wide_characters() {
        let mut buffer = EditBuffer::new();
        for c in "管理".chars() {
            buffer.handle_key(&press(KeyCode::Char(c)));
        }
        let (text, col) = buffer.display(10);
        assert_eq!(text, "管理");
        assert_eq!(col, 4);
    }

    #[test]
    fn display_zero_width() {
        let buffer = EditBuffer::new();
        let (text, col) = buffer.display(0);
        assert_eq!(text, "");
        assert_eq!(col, 0);
    }
}
