//! Single-line text editor with a caret.

use ursa_engine::coords::{ColorRgba, Rect};
use ursa_engine::input::{ButtonState, InputEvent, Key, Modifiers};
use ursa_engine::scene::{DrawList, Quad};
use ursa_engine::text::{FontIndex, FontMetrics};

/// Width of the caret rectangle in pixels.
pub const CURSOR_WIDTH: f32 = 2.0;

/// One editable line of text.
///
/// The cursor is a character index (not a byte offset) and always satisfies
/// `0 <= cursor <= len()`; every operation that moves it clamps instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditLine {
    text: String,
    cursor: usize,
}

impl EditLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Inserts `text` at the cursor and moves the cursor past it.
    pub fn input(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    /// Moves the cursor to `pos`, clamped to the end of the line.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len());
    }

    pub fn offset_cursor(&mut self, delta: isize) {
        self.set_cursor(self.cursor.saturating_add_signed(delta));
    }

    /// Deletes `|delta|` characters before (`delta < 0`) or after the cursor.
    ///
    /// Backward deletion moves the cursor first, so the removed characters are
    /// the ones that preceded it. Both directions stop at the line ends.
    pub fn delete_offset(&mut self, delta: isize) {
        let count = if delta < 0 {
            let from = self.cursor;
            self.offset_cursor(delta);
            from - self.cursor
        } else {
            delta.unsigned_abs()
        };

        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor.saturating_add(count));
        self.text.drain(start..end);
    }

    /// Handles an editing key. Returns `true` if the key was consumed.
    pub fn apply_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::ArrowLeft => self.offset_cursor(-1),
            Key::ArrowRight => self.offset_cursor(1),
            Key::Home => self.set_cursor(0),
            Key::End => self.set_cursor(self.len()),
            Key::Backspace => self.delete_offset(-1),
            Key::Delete => self.delete_offset(1),
            Key::C if modifiers.ctrl => self.copy(),
            Key::V if modifiers.ctrl => {
                self.paste();
            }
            _ => return false,
        }
        true
    }

    /// Feeds text and key-press events into the editor. Returns `true` if consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Text(text) => {
                self.input(text);
                true
            }
            InputEvent::Key { key, state: ButtonState::Pressed, modifiers } => self.apply_key(*key, *modifiers),
            _ => false,
        }
    }

    /// Copies the whole line to the system clipboard.
    pub fn copy(&self) {
        match arboard::Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(self.text.clone()) {
                    log::warn!("clipboard copy failed: {e}");
                }
            }
            Err(e) => log::warn!("clipboard unavailable: {e}"),
        }
    }

    /// Inserts the clipboard text at the cursor; returns `true` if text changed.
    pub fn paste(&mut self) -> bool {
        let text = match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("clipboard paste failed: {e}");
                return false;
            }
        };
        // Single line: drop anything after the first line break.
        let line = text.lines().next().unwrap_or_default();
        self.input(line);
        !line.is_empty()
    }

    /// Lays the line out on one baseline at `bounds.top() + ascent`.
    ///
    /// Returns one quad per character and the caret rectangle, which sits at
    /// the pen position before the character at the cursor (or after the last
    /// one) and spans the font's ascent from `bounds.top()`.
    pub fn build_rects<F: FontMetrics + ?Sized>(
        &self,
        fonts: &F,
        font: FontIndex,
        color: ColorRgba,
        bounds: Rect,
    ) -> (Vec<Quad>, Rect) {
        let ascent = fonts.font_info(font).ascent;
        let y = bounds.top() + ascent;
        let mut x = bounds.left();
        let mut cursor_x = bounds.left();
        let mut quads = Vec::with_capacity(self.text.len());

        for (i, ch) in self.text.chars().enumerate() {
            if i == self.cursor {
                cursor_x = x;
            }
            let glyph = fonts.glyph_info(font, ch);
            quads.push(Quad::new(glyph.bounds.offset(x, y), glyph.crop, color));
            x += glyph.x_advance;
        }
        if self.cursor >= quads.len() {
            cursor_x = x;
        }

        (quads, Rect::new(cursor_x, bounds.top(), CURSOR_WIDTH, ascent))
    }

    /// Records the glyphs and a solid caret in `color`.
    pub fn draw<F: FontMetrics + ?Sized>(
        &self,
        fonts: &F,
        font: FontIndex,
        color: ColorRgba,
        bounds: Rect,
        list: &mut DrawList,
    ) {
        let (quads, caret) = self.build_rects(fonts, font, color, bounds);
        list.push_quads(fonts.texture(), quads);
        list.push_solid_rect(caret, color);
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.text.char_indices().nth(pos).map_or(self.text.len(), |(i, _)| i)
    }
}
