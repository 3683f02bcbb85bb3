//! Multi-line styled text with word wrapping.
//!
//! Text is stored as lines of tokens. A token is a maximal run of either
//! whitespace or non-whitespace characters and is the unit of word wrapping;
//! it may carry several styled spans when consecutive `append` calls continue
//! the same run.
//!
//! Layout happens in two passes per source line:
//! 1. measure tokens and group them into virtual lines that fit the wrap width,
//!    tracking the tallest ascent, deepest descent and largest line gap of each;
//! 2. walk the tokens again and emit one quad per character, moving to the next
//!    virtual line's baseline whenever the current one has received all its tokens.

use ursa_engine::coords::{ColorRgba, Rect};
use ursa_engine::scene::{DrawList, Quad};
use ursa_engine::text::{FontIndex, FontMetrics};

/// A run of text sharing one color and font.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: ColorRgba,
    pub font: FontIndex,
}

impl Span {
    fn new(text: &str, color: ColorRgba, font: FontIndex) -> Self {
        Self { text: text.to_owned(), color, font }
    }
}

/// Unit of word wrapping: one whitespace run or one word, possibly multi-styled.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    spans: Vec<Span>,
}

impl Token {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_whitespace(&self) -> bool {
        self.spans.last().is_some_and(|s| is_whitespace(&s.text))
    }

    /// Sum of glyph advances. Ink extents are ignored, so wrapping is approximate
    /// for glyphs that overhang their advance.
    fn width<F: FontMetrics + ?Sized>(&self, fonts: &F) -> f32 {
        self.spans
            .iter()
            .flat_map(|span| span.text.chars().map(move |ch| (span.font, ch)))
            .map(|(font, ch)| fonts.glyph_info(font, ch).x_advance)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// One wrapped row of a source line, recomputed on every layout pass.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VirtualLine {
    /// Largest line gap among the fonts on this row.
    pub gap: f32,
    /// Largest ascent among the fonts on this row.
    pub baseline: f32,
    /// Most negative descent among the fonts on this row.
    pub descent: f32,
    /// Number of tokens placed on this row.
    pub tokens: usize,
}

/// Styled, word-wrapped text block.
///
/// ```rust,ignore
/// let mut tb = TextBlock::new();
/// tb.append("... just ");
/// tb.append_styled("Testing", ColorRgba::new(1.0, 0.3, 0.8, 1.0), 1);
/// tb.newline();
/// tb.draw(&atlas, Rect::new(32.0, 32.0, 100.0, 400.0), &mut draw_list);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    lines: Vec<Line>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Appends white text in font 0.
    pub fn append(&mut self, text: &str) {
        self.append_styled(text, ColorRgba::white(), 0);
    }

    /// Appends `text` to the current line.
    ///
    /// The first run of `text` continues the line's last token when both are
    /// whitespace or both are non-whitespace, so words and gaps split across
    /// calls still wrap as one unit. Every other run becomes a new token.
    pub fn append_styled(&mut self, text: &str, color: ColorRgba, font: FontIndex) {
        let line = self.current_line();
        let mut runs = split_runs(text).into_iter().peekable();

        if let Some(&first) = runs.peek() {
            if let Some(last) = line.tokens.last_mut() {
                if is_whitespace(first) == last.is_whitespace() {
                    last.spans.push(Span::new(first, color, font));
                    runs.next();
                }
            }
        }

        line.tokens.extend(runs.map(|run| Token { spans: vec![Span::new(run, color, font)] }));
    }

    /// Starts a new, empty line.
    pub fn newline(&mut self) {
        self.lines.push(Line::default());
    }

    /// `append` followed by `newline`.
    pub fn append_line(&mut self, text: &str) {
        self.append(text);
        self.newline();
    }

    /// Runs the measurement pass and returns the virtual lines of every source line.
    pub fn wrap_lines<F: FontMetrics + ?Sized>(&self, fonts: &F, width: f32) -> Vec<Vec<VirtualLine>> {
        self.lines.iter().map(|line| wrap_line(line, fonts, width)).collect()
    }

    /// Lays the text out inside `bounds` and returns one quad per character.
    ///
    /// Wrapping only considers `bounds.size.x`; text past the bottom edge is
    /// still emitted.
    pub fn build_rects<F: FontMetrics + ?Sized>(&self, fonts: &F, bounds: Rect) -> Vec<Quad> {
        let mut quads = Vec::new();
        let mut y = bounds.top();

        for line in &self.lines {
            let vlines = wrap_line(line, fonts, bounds.size.x);
            let mut x = bounds.left();
            y += vlines[0].baseline;

            let mut row = 0;
            let mut placed = 0;
            for token in &line.tokens {
                if placed >= vlines[row].tokens {
                    let (this, next) = (vlines[row], vlines[row + 1]);
                    x = bounds.left();
                    y += this.gap + next.baseline - this.descent;
                    row += 1;
                    placed = 0;
                }

                for span in &token.spans {
                    for ch in span.text.chars() {
                        let glyph = fonts.glyph_info(span.font, ch);
                        quads.push(Quad::new(glyph.bounds.offset(x, y), glyph.crop, span.color));
                        x += glyph.x_advance;
                    }
                }
                placed += 1;
            }

            let last = vlines[vlines.len() - 1];
            y += last.gap - last.descent;
        }

        quads
    }

    /// Lays the text out and records it as one quad batch on the font texture.
    pub fn draw<F: FontMetrics + ?Sized>(&self, fonts: &F, bounds: Rect, list: &mut DrawList) {
        list.push_quads(fonts.texture(), self.build_rects(fonts, bounds));
    }

    fn current_line(&mut self) -> &mut Line {
        if self.lines.is_empty() {
            self.newline();
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

/// Groups a line's tokens into rows no wider than `width`.
///
/// A row breaks before a token only when the row already has content and the
/// token would overflow it; a token that exactly fits stays. Oversized tokens
/// are never split and occupy a row of their own. Always returns at least one
/// row; an empty line yields one row with zeroed metrics.
fn wrap_line<F: FontMetrics + ?Sized>(line: &Line, fonts: &F, width: f32) -> Vec<VirtualLine> {
    let mut vlines = vec![VirtualLine::default()];
    let mut vx = 0.0;

    for token in &line.tokens {
        let token_width = token.width(fonts);
        if vx > 0.0 && vx + token_width > width {
            vx = 0.0;
            vlines.push(VirtualLine::default());
        }
        vx += token_width;

        let row = vlines.len() - 1;
        let vline = &mut vlines[row];
        for span in &token.spans {
            let info = fonts.font_info(span.font);
            vline.gap = vline.gap.max(info.line_gap);
            vline.baseline = vline.baseline.max(info.ascent);
            vline.descent = vline.descent.min(info.descent);
        }
        vline.tokens += 1;
    }

    vlines
}

fn is_whitespace(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_whitespace)
}

/// Splits `text` into maximal runs of whitespace and non-whitespace.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut run_ws = None;

    for (i, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match run_ws {
            Some(prev) if prev != ws => {
                runs.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        run_ws = Some(ws);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}
