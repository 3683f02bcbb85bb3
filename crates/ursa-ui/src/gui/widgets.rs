//! Widgets built from panels. Each one carves its own strip off the top of the
//! current viewport, so consecutive widgets stack downwards.

use ursa_engine::text::FontMetrics;

use super::{Edge, Gui};

/// Height of every single-row widget.
pub const WIDGET_HEIGHT: f32 = 32.0;
/// Side of the checkbox indicator square.
pub const CHECKBOX_SIZE: f32 = 32.0;

impl<F: FontMetrics> Gui<F> {
    /// Labelled button styled `"button"`. Returns `true` on the frame it is clicked.
    pub fn button(&mut self, label: &str) -> bool {
        let id = self.next_widget_id();
        self.panel_begin(Edge::Top, WIDGET_HEIGHT, "button");
        let pressed = self.clicked();
        if pressed {
            self.active_widget = Some(id);
        }
        self.draw_background();
        self.draw_string(label);
        self.panel_end();
        pressed
    }

    /// Single row of text styled `"text"`, without a background.
    pub fn text(&mut self, label: &str) {
        self.panel_begin(Edge::Top, WIDGET_HEIGHT, "text");
        self.draw_string(label);
        self.panel_end();
    }

    /// Checkbox styled `"checkbox"`, with its indicator square styled
    /// `"checkbox_true"` or `"checkbox_false"`. Toggles `value` when clicked.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) {
        self.panel_begin(Edge::Top, WIDGET_HEIGHT, "checkbox");
        if self.clicked() {
            *value = !*value;
        }
        self.draw_background();

        let indicator = if *value { "checkbox_true" } else { "checkbox_false" };
        self.panel_begin(Edge::Left, CHECKBOX_SIZE, indicator);
        self.draw_background();
        self.panel_end();

        self.draw_string(label);
        self.panel_end();
    }

    // Not implemented yet; kept so callers can already lay out against them.

    pub fn radiobutton(&mut self, _label: &str, _value: i32, _selected: &mut i32) {}

    pub fn input(&mut self) {}

    pub fn progress(&mut self) {}

    pub fn slider(&mut self) {}

    pub fn listbox(&mut self) {}

    pub fn combobox(&mut self) {}

    pub fn dialog_begin(&mut self) {}

    pub fn dialog_end(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::Style;
    use crate::testing::FixedMetrics;
    use ursa_engine::coords::{ColorRgba, Rect, Vec2};
    use ursa_engine::scene::DrawCmd;

    fn gui() -> Gui<FixedMetrics> {
        let mut g = Gui::new();
        g.set_default_font(FixedMetrics::new(), 0);
        g
    }

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    fn solid_rects(g: &Gui<FixedMetrics>) -> Vec<(Rect, ColorRgba)> {
        g.draw_list()
            .items()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Rect { rect, color } => Some((*rect, *color)),
                DrawCmd::Quads { .. } => None,
            })
            .collect()
    }

    // ── button ────────────────────────────────────────────────────────────

    #[test]
    fn buttons_stack_downwards() {
        let mut g = gui();
        g.frame_begin(screen());
        g.button("one");
        g.button("two");
        assert_eq!(g.viewport(), Rect::new(0.0, 64.0, 200.0, 136.0));
        g.frame_end();

        let rects = solid_rects(&g);
        assert_eq!(rects[0].0, Rect::new(0.0, 0.0, 200.0, 32.0));
        assert_eq!(rects[1].0, Rect::new(0.0, 32.0, 200.0, 32.0));
    }

    #[test]
    fn button_reports_click_inside_its_strip() {
        let mut g = gui();
        g.handle_mousedown(Vec2::new(20.0, 40.0));
        g.frame_begin(screen());
        assert!(!g.button("first"));
        assert!(g.button("second"));
        assert_eq!(g.active_widget(), Some(1));
        g.frame_end();

        g.handle_mouseup(Vec2::new(20.0, 40.0));
        assert_eq!(g.active_widget(), None);
        g.frame_begin(screen());
        assert!(!g.button("first"));
        assert!(!g.button("second"));
        g.frame_end();
    }

    #[test]
    fn button_draws_background_then_label() {
        let mut g = gui();
        g.frame_begin(screen());
        g.button("ok");
        g.frame_end();

        let items = g.draw_list().items();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], DrawCmd::Rect { .. }));
        assert!(matches!(&items[1], DrawCmd::Quads { quads, .. } if quads.len() == 2));
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_draws_only_glyphs() {
        let mut g = gui();
        g.frame_begin(screen());
        g.text("hello");
        assert_eq!(g.viewport().top(), WIDGET_HEIGHT);
        g.frame_end();

        assert_eq!(g.draw_list().len(), 1);
        assert_eq!(g.draw_list().quad_count(), 5);
    }

    // ── checkbox ──────────────────────────────────────────────────────────

    #[test]
    fn checkbox_toggles_on_click() {
        let mut g = gui();
        let mut checked = false;

        g.handle_mousedown(Vec2::new(100.0, 16.0));
        g.frame_begin(screen());
        g.checkbox("check", &mut checked);
        g.frame_end();
        assert!(checked);

        // no new press: unchanged
        g.frame_begin(screen());
        g.checkbox("check", &mut checked);
        g.frame_end();
        assert!(checked);

        g.handle_mouseup(Vec2::new(100.0, 16.0));
        g.handle_mousedown(Vec2::new(100.0, 16.0));
        g.frame_begin(screen());
        g.checkbox("check", &mut checked);
        g.frame_end();
        assert!(!checked);
    }

    #[test]
    fn checkbox_indicator_uses_state_style() {
        let on = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
        let off = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
        let mut g = gui();
        g.set_style("checkbox_true", Style::solid(on, ColorRgba::white()));
        g.set_style("checkbox_false", Style::solid(off, ColorRgba::white()));

        let mut checked = true;
        g.frame_begin(screen());
        g.checkbox("a", &mut checked);
        checked = false;
        g.checkbox("b", &mut checked);
        g.frame_end();

        let rects = solid_rects(&g);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[1], (Rect::new(0.0, 0.0, CHECKBOX_SIZE, WIDGET_HEIGHT), on));
        assert_eq!(rects[3], (Rect::new(0.0, 32.0, CHECKBOX_SIZE, WIDGET_HEIGHT), off));
    }

    #[test]
    fn checkbox_label_sits_right_of_indicator() {
        let mut g = gui();
        let mut checked = false;
        g.frame_begin(screen());
        g.checkbox("x", &mut checked);
        g.frame_end();

        let Some(DrawCmd::Quads { quads, .. }) = g.draw_list().items().last() else {
            panic!("expected label glyphs");
        };
        assert_eq!(quads[0].rect.origin.x, CHECKBOX_SIZE);
    }

    // ── inert widgets ─────────────────────────────────────────────────────

    #[test]
    fn unimplemented_widgets_leave_layout_alone() {
        let mut g = gui();
        let mut selected = 1;
        g.frame_begin(screen());
        g.radiobutton("r", 2, &mut selected);
        g.input();
        g.progress();
        g.slider();
        g.listbox();
        g.combobox();
        g.dialog_begin();
        g.dialog_end();
        assert_eq!(g.viewport(), screen());
        g.frame_end();

        assert_eq!(selected, 1);
        assert!(g.draw_list().is_empty());
    }
}
