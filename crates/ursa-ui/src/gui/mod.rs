//! Immediate-mode layout-stack GUI.
//!
//! A frame starts with the screen rectangle as the only viewport. Panels carve
//! a strip off one edge of the current viewport and make it current until the
//! matching [`Gui::panel_end`]; widgets stack downwards by carving fixed-height
//! strips off the top. Everything drawn lands in the gui's [`DrawList`].
//!
//! ```rust,ignore
//! gui.frame_begin(Rect::from_size(800.0, 600.0));
//! gui.panel_begin(Edge::Left, 200.0, "sidebar");
//! gui.draw_background();
//! gui.padding(8.0);
//! if gui.button("Save") { save(); }
//! gui.checkbox("Autosave", &mut autosave);
//! gui.panel_end();
//! gui.frame_end();
//! renderer.submit(gui.draw_list());
//! ```
//!
//! Begin/end calls must nest. Mismatches are programming errors and panic.

mod style;
mod widgets;

pub use style::{Background, RenderFn, Style, DEFAULT_STYLE};
pub use widgets::{CHECKBOX_SIZE, WIDGET_HEIGHT};

use ursa_engine::coords::{ColorRgba, Rect, Vec2};
use ursa_engine::input::{ButtonState, InputEvent, Key, Modifiers, MouseButton};
use ursa_engine::scene::{DrawList, Quad};
use ursa_engine::text::{FontIndex, FontMetrics};

use style::StyleTable;

/// Edge of the current viewport a panel is attached to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Per-frame widget identifier, assigned in call order.
pub type WidgetId = u32;

/// Gui context: layout stacks, styles, mouse state and the frame's draw list.
pub struct Gui<F> {
    viewports: Vec<Rect>,
    style_stack: Vec<String>,
    styles: StyleTable,

    mouse_pos: Vec2,
    lmb_down: bool,
    clicked: bool,
    next_id: WidgetId,
    active_widget: Option<WidgetId>,

    font: Option<(F, FontIndex)>,
    warned_no_font: bool,
    draw_list: DrawList,
}

impl<F> Gui<F> {
    pub fn new() -> Self {
        Self {
            viewports: Vec::new(),
            style_stack: Vec::new(),
            styles: StyleTable::default(),
            mouse_pos: Vec2::zero(),
            lmb_down: false,
            clicked: false,
            next_id: 0,
            active_widget: None,
            font: None,
            warned_no_font: false,
            draw_list: DrawList::new(),
        }
    }

    /// Font used by [`draw_string`](Gui::draw_string) and the labelled widgets.
    pub fn set_default_font(&mut self, fonts: F, font: FontIndex) {
        self.font = Some((fonts, font));
        self.warned_no_font = false;
    }

    pub fn set_style(&mut self, name: impl Into<String>, style: Style) {
        self.styles.set(name.into(), style);
    }

    /// Looks up a style, falling back to [`DEFAULT_STYLE`].
    pub fn style(&self, name: &str) -> &Style {
        self.styles.get(name)
    }

    /// Commands recorded since the last [`frame_begin`](Gui::frame_begin).
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Widget that received the current left-button press, if any.
    pub fn active_widget(&self) -> Option<WidgetId> {
        self.active_widget
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Starts a frame with `screen` as the root viewport.
    ///
    /// # Panics
    /// If the previous frame was not closed with [`frame_end`](Gui::frame_end).
    pub fn frame_begin(&mut self, screen: Rect) {
        assert!(
            self.viewports.is_empty() && self.style_stack.is_empty(),
            "frame_begin: previous frame is still open ({} viewports, {} styles)",
            self.viewports.len(),
            self.style_stack.len(),
        );
        log::trace!("gui frame begin {screen:?}");
        self.viewports.push(screen);
        self.next_id = 0;
        self.draw_list.clear();
    }

    /// Ends the frame and forgets this frame's click.
    ///
    /// # Panics
    /// If no frame is open or a panel is still open.
    pub fn frame_end(&mut self) {
        self.pop_viewport("frame_end");
        assert!(
            self.viewports.is_empty() && self.style_stack.is_empty(),
            "frame_end: unbalanced panel_begin/panel_end ({} viewports, {} styles left open)",
            self.viewports.len(),
            self.style_stack.len(),
        );
        self.clicked = false;
        log::trace!("gui frame end, {} draw commands", self.draw_list.len());
    }

    // ── panels ────────────────────────────────────────────────────────────

    /// Carves a `size`-pixel strip off `edge` of the current viewport and makes
    /// it current. The rest of the viewport becomes current again after
    /// [`panel_end`](Gui::panel_end).
    pub fn panel_begin(&mut self, edge: Edge, size: f32, style: &str) {
        let current = self.pop_viewport("panel_begin");
        let (child, parent) = match edge {
            Edge::Left => current.split_x(size),
            Edge::Top => current.split_y(size),
            Edge::Right => {
                let (parent, child) = current.split_x(current.size.x - size);
                (child, parent)
            }
            Edge::Bottom => {
                let (parent, child) = current.split_y(current.size.y - size);
                (child, parent)
            }
        };
        self.viewports.push(parent);
        self.viewports.push(child);
        self.style_stack.push(style.to_owned());
    }

    /// Like [`panel_begin`](Gui::panel_begin) with `fraction` of the viewport's
    /// width (left/right) or height (top/bottom).
    pub fn panel_begin_by_percent(&mut self, edge: Edge, fraction: f32, style: &str) {
        let current = self.viewport();
        let size = match edge {
            Edge::Left | Edge::Right => current.size.x * fraction,
            Edge::Top | Edge::Bottom => current.size.y * fraction,
        };
        self.panel_begin(edge, size, style);
    }

    /// # Panics
    /// Without a matching [`panel_begin`](Gui::panel_begin).
    pub fn panel_end(&mut self) {
        if self.style_stack.pop().is_none() {
            panic!("panel_end without matching panel_begin");
        }
        self.pop_viewport("panel_end");
    }

    /// Runs `body` inside a panel.
    pub fn panel<R>(&mut self, edge: Edge, size: f32, style: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        self.panel_begin(edge, size, style);
        let result = body(self);
        self.panel_end();
        result
    }

    /// Shrinks the current viewport by `px` on every side.
    pub fn padding(&mut self, px: f32) {
        let current = self.pop_viewport("padding");
        self.viewports.push(current.expand(-px));
    }

    /// Skips `px` pixels at the top of the current viewport.
    pub fn space(&mut self, px: f32) {
        let current = self.pop_viewport("space");
        let (_, rest) = current.split_y(px);
        self.viewports.push(rest);
    }

    /// Current viewport.
    ///
    /// # Panics
    /// Outside `frame_begin`/`frame_end`.
    pub fn viewport(&self) -> Rect {
        match self.viewports.last() {
            Some(rect) => *rect,
            None => panic!("viewport queried outside frame_begin/frame_end"),
        }
    }

    fn pop_viewport(&mut self, op: &str) -> Rect {
        match self.viewports.pop() {
            Some(rect) => rect,
            None => panic!("{op}: viewport stack is empty (missing frame_begin?)"),
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills the current viewport with `color`.
    pub fn background(&mut self, color: ColorRgba) {
        let rect = self.viewport();
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Draws four `width`-pixel strips along the inside of the current viewport.
    pub fn border(&mut self, color: ColorRgba, width: f32) {
        let r = self.viewport();
        let inner_h = r.size.y - width * 2.0;
        self.draw_list.push_solid_rect(Rect::new(r.left(), r.top(), r.size.x, width), color);
        self.draw_list.push_solid_rect(Rect::new(r.left(), r.bottom() - width, r.size.x, width), color);
        self.draw_list.push_solid_rect(Rect::new(r.left(), r.top() + width, width, inner_h), color);
        self.draw_list.push_solid_rect(Rect::new(r.right() - width, r.top() + width, width, inner_h), color);
    }

    /// Paints the background of the innermost panel's style over the current viewport.
    pub fn draw_background(&mut self) {
        let rect = self.viewport();
        let style = self.styles.get(self.current_style_name());
        style.background.draw(&mut self.draw_list, rect);
    }

    fn current_style_name(&self) -> &str {
        self.style_stack.last().map_or(DEFAULT_STYLE, String::as_str)
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    /// Whether the mouse is strictly inside the current viewport.
    pub fn mouseover(&self) -> bool {
        self.viewport().contains(self.mouse_pos)
    }

    /// Whether the left button went down this frame with the mouse over the
    /// current viewport. Stays true for the rest of the frame.
    pub fn clicked(&self) -> bool {
        self.clicked && self.mouseover()
    }

    pub fn handle_mousedown(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
        if !self.lmb_down {
            self.clicked = true;
        }
        self.lmb_down = true;
    }

    pub fn handle_mouseup(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
        self.lmb_down = false;
        self.active_widget = None;
    }

    /// Records the pointer position. No dragging support.
    pub fn handle_mousemove(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
    }

    /// Scrolling is not supported; the event is ignored.
    pub fn handle_mousewheel(&mut self, _delta: Vec2) {}

    /// Keyboard focus is not supported; the event is ignored.
    pub fn handle_keydown(&mut self, _key: Key, _modifiers: Modifiers) {}

    /// Routes a platform-neutral input event to the matching handler.
    ///
    /// Only the left button drives clicks.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerMoved { pos } => self.handle_mousemove(*pos),
            InputEvent::PointerButton { button: MouseButton::Left, state, pos } => match state {
                ButtonState::Pressed => self.handle_mousedown(*pos),
                ButtonState::Released => self.handle_mouseup(*pos),
            },
            InputEvent::PointerButton { pos, .. } => self.handle_mousemove(*pos),
            InputEvent::MouseWheel { delta } => self.handle_mousewheel(*delta),
            InputEvent::Key { key, state: ButtonState::Pressed, modifiers } => self.handle_keydown(*key, *modifiers),
            InputEvent::Key { .. } | InputEvent::Text(_) | InputEvent::ModifiersChanged(_) => {}
        }
    }

    fn next_widget_id(&mut self) -> WidgetId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl<F> Default for Gui<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FontMetrics> Gui<F> {
    /// Draws `label` in the default font at the top-left of the current
    /// viewport, colored with the current style's text color.
    ///
    /// Nothing is drawn (and a warning is logged once) without a default font.
    pub fn draw_string(&mut self, label: &str) {
        let rect = self.viewport();
        let Some((fonts, font)) = &self.font else {
            if !self.warned_no_font {
                log::warn!("gui: no default font set, skipping text {label:?}");
                self.warned_no_font = true;
            }
            return;
        };

        let color = self.styles.get(self.current_style_name()).text_color;
        let y = rect.top() + fonts.font_info(*font).ascent;
        let mut x = rect.left();
        let quads = label
            .chars()
            .map(|ch| {
                let glyph = fonts.glyph_info(*font, ch);
                let quad = Quad::new(glyph.bounds.offset(x, y), glyph.crop, color);
                x += glyph.x_advance;
                quad
            })
            .collect();
        self.draw_list.push_quads(fonts.texture(), quads);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedMetrics;
    use ursa_engine::scene::DrawCmd;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    fn gui() -> Gui<FixedMetrics> {
        Gui::new()
    }

    // ── panels ────────────────────────────────────────────────────────────

    #[test]
    fn left_panel_splits_from_left() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 200.0, 100.0));
        g.panel_begin(Edge::Left, 50.0, "");
        assert_eq!(g.viewport(), r(0.0, 0.0, 50.0, 100.0));
        g.panel_end();
        assert_eq!(g.viewport(), r(50.0, 0.0, 150.0, 100.0));
        g.frame_end();
    }

    #[test]
    fn right_panel_splits_from_right() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 200.0, 100.0));
        g.panel_begin(Edge::Right, 50.0, "");
        assert_eq!(g.viewport(), r(150.0, 0.0, 50.0, 100.0));
        g.panel_end();
        assert_eq!(g.viewport(), r(0.0, 0.0, 150.0, 100.0));
        g.frame_end();
    }

    #[test]
    fn top_and_bottom_panels() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 200.0, 100.0));
        g.panel_begin(Edge::Top, 30.0, "");
        assert_eq!(g.viewport(), r(0.0, 0.0, 200.0, 30.0));
        g.panel_end();
        g.panel_begin(Edge::Bottom, 20.0, "");
        assert_eq!(g.viewport(), r(0.0, 80.0, 200.0, 20.0));
        g.panel_end();
        assert_eq!(g.viewport(), r(0.0, 30.0, 200.0, 50.0));
        g.frame_end();
    }

    #[test]
    fn percent_panels_use_matching_axis() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 200.0, 100.0));
        g.panel_begin_by_percent(Edge::Right, 0.25, "");
        assert_eq!(g.viewport(), r(150.0, 0.0, 50.0, 100.0));
        g.panel_end();
        g.panel_begin_by_percent(Edge::Top, 0.5, "");
        assert_eq!(g.viewport(), r(0.0, 0.0, 150.0, 50.0));
        g.panel_end();
        g.frame_end();
    }

    #[test]
    fn nested_panels_restore_in_order() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 200.0, 100.0));
        let inner = g.panel(Edge::Left, 100.0, "", |g| {
            g.panel(Edge::Top, 40.0, "", |g| g.viewport())
        });
        assert_eq!(inner, r(0.0, 0.0, 100.0, 40.0));
        assert_eq!(g.viewport(), r(100.0, 0.0, 100.0, 100.0));
        g.frame_end();
    }

    #[test]
    fn padding_and_space_shrink_viewport() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
        g.padding(10.0);
        assert_eq!(g.viewport(), r(10.0, 10.0, 80.0, 80.0));
        g.space(15.0);
        assert_eq!(g.viewport(), r(10.0, 25.0, 80.0, 65.0));
        assert!(g.draw_list().is_empty());
        g.frame_end();
    }

    // ── stack discipline ──────────────────────────────────────────────────

    #[test]
    fn balanced_frames_repeat() {
        let mut g = gui();
        for _ in 0..3 {
            g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
            g.panel_begin(Edge::Left, 10.0, "a");
            g.panel_begin(Edge::Top, 10.0, "b");
            g.panel_end();
            g.panel_end();
            g.frame_end();
        }
    }

    #[test]
    #[should_panic(expected = "unbalanced")]
    fn open_panel_at_frame_end_panics() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
        g.panel_begin(Edge::Left, 10.0, "");
        g.frame_end();
    }

    #[test]
    #[should_panic(expected = "panel_end without matching panel_begin")]
    fn extra_panel_end_panics() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
        g.panel_end();
    }

    #[test]
    #[should_panic(expected = "previous frame is still open")]
    fn double_frame_begin_panics() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    #[should_panic(expected = "frame_end")]
    fn frame_end_without_begin_panics() {
        gui().frame_end();
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    #[test]
    fn click_lasts_until_frame_end() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        assert!(!g.clicked());
        g.handle_mousedown(Vec2::new(10.0, 10.0));
        assert!(g.mouseover());
        assert!(g.clicked());
        assert!(g.clicked());
        g.frame_end();

        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        assert!(!g.clicked());
        g.frame_end();
    }

    #[test]
    fn holding_the_button_does_not_click_again() {
        let mut g = gui();
        g.handle_mousedown(Vec2::new(10.0, 10.0));
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        g.frame_end();

        g.handle_mousedown(Vec2::new(10.0, 10.0));
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        assert!(!g.clicked());
        g.frame_end();

        g.handle_mouseup(Vec2::new(10.0, 10.0));
        g.handle_mousedown(Vec2::new(10.0, 10.0));
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        assert!(g.clicked());
        g.frame_end();
    }

    #[test]
    fn click_outside_viewport_is_ignored() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        g.handle_mousedown(Vec2::new(50.0, 10.0));
        assert!(!g.mouseover());
        assert!(!g.clicked());
        g.frame_end();
    }

    #[test]
    fn events_route_left_button_only() {
        let mut g = gui();
        g.handle_event(&InputEvent::PointerButton {
            button: MouseButton::Right,
            state: ButtonState::Pressed,
            pos: Vec2::new(5.0, 5.0),
        });
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        assert_eq!(g.mouse_position(), Vec2::new(5.0, 5.0));
        assert!(!g.clicked());

        g.handle_event(&InputEvent::PointerMoved { pos: Vec2::new(20.0, 20.0) });
        g.handle_event(&InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            pos: Vec2::new(20.0, 20.0),
        });
        assert!(g.clicked());
        g.frame_end();
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn background_fills_viewport() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        g.background(ColorRgba::black());
        g.frame_end();
        assert_eq!(g.draw_list().items(), &[DrawCmd::Rect { rect: r(0.0, 0.0, 50.0, 50.0), color: ColorRgba::black() }]);
    }

    #[test]
    fn border_strips_stay_inside() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 100.0, 50.0));
        g.border(ColorRgba::white(), 2.0);
        g.frame_end();

        let rects: Vec<Rect> = g
            .draw_list()
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Rect { rect, .. } => *rect,
                DrawCmd::Quads { .. } => panic!("border draws solid rects"),
            })
            .collect();
        assert_eq!(
            rects,
            vec![
                r(0.0, 0.0, 100.0, 2.0),
                r(0.0, 48.0, 100.0, 2.0),
                r(0.0, 2.0, 2.0, 46.0),
                r(98.0, 2.0, 2.0, 46.0),
            ]
        );
    }

    #[test]
    fn unknown_style_falls_back_to_default() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        g.panel_begin(Edge::Top, 10.0, "nope");
        g.draw_background();
        g.panel_end();
        g.frame_end();

        assert_eq!(
            g.draw_list().items(),
            &[DrawCmd::Rect { rect: r(0.0, 0.0, 50.0, 10.0), color: ColorRgba::new(0.0, 0.0, 0.0, 0.2) }]
        );
    }

    #[test]
    fn registered_style_wins() {
        let mut g = gui();
        let blue = ColorRgba::new(0.0, 0.0, 1.0, 1.0);
        g.set_style("panel", Style::solid(blue, ColorRgba::white()));
        assert!(matches!(g.style("panel").background, Background::SolidColor { color } if color == blue));

        g.frame_begin(r(0.0, 0.0, 50.0, 50.0));
        g.panel(Edge::Top, 10.0, "panel", |g| g.draw_background());
        g.frame_end();
        assert!(matches!(g.draw_list().items()[0], DrawCmd::Rect { color, .. } if color == blue));
    }

    #[test]
    fn draw_string_uses_ascent_and_text_color() {
        let mut g = gui();
        let green = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
        g.set_style("label", Style::solid(ColorRgba::black(), green));
        g.set_default_font(FixedMetrics::new(), 1);

        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
        g.panel_begin(Edge::Top, 32.0, "label");
        g.draw_string("ok");
        g.panel_end();
        g.frame_end();

        let DrawCmd::Quads { quads, .. } = &g.draw_list().items()[0] else {
            panic!("expected glyph quads");
        };
        assert_eq!(quads.len(), 2);
        // font 1 ascent 12: glyph boxes start at the viewport top
        assert_eq!(quads[0].rect, r(0.0, 0.0, 10.0, 12.0));
        assert_eq!(quads[1].rect.origin.x, 10.0);
        assert!(quads.iter().all(|q| q.color == green));
    }

    #[test]
    fn draw_string_without_font_draws_nothing() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 100.0, 100.0));
        g.draw_string("missing");
        g.draw_string("still missing");
        g.frame_end();
        assert!(g.draw_list().is_empty());
    }

    #[test]
    fn frame_begin_clears_previous_commands() {
        let mut g = gui();
        g.frame_begin(r(0.0, 0.0, 10.0, 10.0));
        g.background(ColorRgba::white());
        g.frame_end();
        g.frame_begin(r(0.0, 0.0, 10.0, 10.0));
        assert!(g.draw_list().is_empty());
        g.frame_end();
    }
}
