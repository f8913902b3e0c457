#![forbid(unsafe_code)]

//! The admin login screen.
//!
//! Hosts a [`LoginForm`] over two [`EditBuffer`]s and a login button.
//! Focus moves with Tab/Shift-Tab (or Up/Down); moving focus off a field
//! is that field's blur, as is the terminal itself losing focus. Enter
//! submits from anywhere, Esc quits. Every keystroke that edits a buffer
//! is forwarded to the form as a change event, so the form always holds
//! the raw current values.

use std::io::{self, Write};

use credform::{CredentialSink, FieldId, FieldSnapshot, LoginForm};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthStr;

use crate::input::EditBuffer;

/// Column where field values and the button start.
const VALUE_X: u16 = 4;
/// Input viewport width in cells.
const INPUT_WIDTH: u16 = 32;

/// One stop on the focus ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Password,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Email => Self::Submit,
            Self::Password => Self::Email,
            Self::Submit => Self::Password,
        }
    }

    fn field(self) -> Option<FieldId> {
        match self {
            Self::Email => Some(FieldId::Email),
            Self::Password => Some(FieldId::Password),
            Self::Submit => None,
        }
    }
}

/// Login screen state.
pub struct LoginScreen {
    form: LoginForm,
    email: EditBuffer,
    password: EditBuffer,
    focus: Focus,
    submitted: bool,
    quit: bool,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    /// Create the screen with empty fields and focus on email.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: LoginForm::new(),
            email: EditBuffer::new(),
            password: EditBuffer::new().with_mask('*'),
            focus: Focus::Email,
            submitted: false,
            quit: false,
        }
    }

    /// Whether the user asked to leave.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Read access for tests and logging.
    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Handle a terminal event. Returns `true` if a redraw is needed.
    pub fn handle_event(&mut self, event: &Event, sink: &mut dyn CredentialSink) -> bool {
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key, sink)
            }
            Event::FocusLost => {
                self.blur_focused();
                true
            }
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, sink: &mut dyn CredentialSink) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(self.focus.next());
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(self.focus.prev());
                true
            }
            KeyCode::Enter => {
                self.form.submit(sink);
                self.submitted = true;
                true
            }
            _ => {
                let Some(field) = self.focus.field() else {
                    return false;
                };
                let buffer = match field {
                    FieldId::Email => &mut self.email,
                    FieldId::Password => &mut self.password,
                };
                let changed = buffer.handle_key(key);
                if buffer.value() != self.form.field(field).value {
                    let value = buffer.value().to_string();
                    self.form.change(field, value);
                }
                changed
            }
        }
    }

    /// Move focus; the field being left blurs.
    fn move_focus(&mut self, next: Focus) {
        if next != self.focus {
            self.blur_focused();
            self.focus = next;
        }
    }

    fn blur_focused(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.blur(field);
        }
    }

    /// Draw the whole screen.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, Hide, Clear(ClearType::All))?;

        queue!(
            out,
            MoveTo(2, 1),
            SetAttribute(Attribute::Bold),
            Print("ログイン"),
            SetAttribute(Attribute::Reset),
        )?;

        self.render_field(out, FieldId::Email, &self.email, 3)?;
        self.render_field(out, FieldId::Password, &self.password, 7)?;

        // Login button.
        let button_focused = self.focus == Focus::Submit;
        queue!(out, MoveTo(VALUE_X, 11))?;
        if button_focused {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(out, Print("[ ログイン ]"))?;
        if button_focused {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }

        if self.submitted {
            queue!(
                out,
                MoveTo(VALUE_X, 13),
                Print("ログイン要求を送信しました"),
            )?;
        }

        queue!(
            out,
            MoveTo(2, 15),
            SetForegroundColor(Color::DarkGrey),
            Print("Tab: 移動  Enter: ログイン  Esc: 終了"),
            ResetColor,
        )?;

        // Park the hardware cursor in the focused field.
        match self.focus.field() {
            Some(FieldId::Email) => {
                let (_, col) = self.email.display(INPUT_WIDTH);
                queue!(out, MoveTo(VALUE_X + col, 4), Show)?;
            }
            Some(FieldId::Password) => {
                let (_, col) = self.password.display(INPUT_WIDTH);
                queue!(out, MoveTo(VALUE_X + col, 8), Show)?;
            }
            _ => {}
        }

        Ok(())
    }

    fn render_field(
        &self,
        out: &mut impl Write,
        field: FieldId,
        buffer: &EditBuffer,
        y: u16,
    ) -> io::Result<()> {
        let snapshot: FieldSnapshot<'_> = self.form.field(field);
        let focused = self.focus.field() == Some(field);
        let marker = if focused { "▸ " } else { "  " };

        queue!(out, MoveTo(2, y), Print(marker), Print(field.label()))?;

        let (visible, _) = buffer.display(INPUT_WIDTH);
        let pad = (INPUT_WIDTH as usize).saturating_sub(UnicodeWidthStr::width(visible.as_str()));
        queue!(
            out,
            MoveTo(VALUE_X, y + 1),
            SetAttribute(Attribute::Underlined),
            Print(&visible),
            Print(" ".repeat(pad)),
            SetAttribute(Attribute::Reset),
        )?;

        if snapshot.alert {
            queue!(
                out,
                MoveTo(VALUE_X, y + 2),
                SetForegroundColor(Color::Red),
                Print("⚠ "),
                Print(snapshot.error),
                ResetColor,
            )?;
        }

        Ok(())
    }
}
