//! Headless walkthrough of the text layout and gui layers.
//!
//! Loads a font (first CLI argument, or a common system font), bakes the
//! atlas, then runs a few paced frames that feed scripted input into a
//! `TextBlock`, an `EditLine` and the gui, logging what each frame records.
//!
//! Run with `RUST_LOG=debug` (or `trace`) for more detail.

use std::rc::Rc;

use anyhow::Context;
use ursa_engine::input::{ButtonState, InputState, Key, Modifiers, MouseButton};
use ursa_engine::logging::{init_logging, LoggingConfig};
use ursa_engine::time::FrameClock;
use ursa_ui::prelude::*;

const SCREEN: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
const ATLAS_SIZE: u32 = 512;
const ATLAS_TEXTURE: TextureId = TextureId(1);
/// Faces registered from the loaded font: body, heading, small, accent.
const FONT_SIZES: [f32; 4] = [18.0, 36.0, 18.0, 24.0];
const SIDEBAR_WIDTH: f32 = 240.0;

const SYSTEM_FONTS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut atlas = FontAtlas::new();
    load_font(&mut atlas, std::env::args().nth(1).as_deref())?;
    atlas.bake(ATLAS_SIZE, ATLAS_SIZE).context("baking font atlas")?;
    atlas.set_texture(ATLAS_TEXTURE);
    let atlas = Rc::new(atlas);

    let mut gui = Gui::new();
    gui.set_default_font(atlas.clone(), 0);
    gui.set_style("sidebar", Style::solid(ColorRgba::new(0.1, 0.12, 0.18, 0.9), ColorRgba::white()));
    gui.set_style("button", Style::solid(ColorRgba::new(0.2, 0.45, 0.8, 1.0), ColorRgba::white()));
    gui.set_style("checkbox_true", Style::solid(ColorRgba::new(0.2, 0.65, 1.0, 1.0), ColorRgba::white()));
    gui.set_style("checkbox_false", Style::solid(ColorRgba::new(0.3, 0.3, 0.35, 1.0), ColorRgba::white()));

    let mut text = sample_text();
    let mut line = EditLine::new();
    let mut input = InputState::default();
    let mut show_atlas = false;
    let mut scene = DrawList::new();
    let mut clock = FrameClock::with_fps_limit(60);

    for events in scripted_input() {
        let frame = clock.tick();

        let mut quit = false;
        for event in &events {
            input.apply_event(event);
            gui.handle_event(event);
            match event {
                InputEvent::Key { key: Key::Escape, state: ButtonState::Pressed, .. } => quit = true,
                InputEvent::Key { key: Key::Enter, state: ButtonState::Pressed, .. } => {
                    text.append_line(line.contents());
                    line.clear();
                }
                other => {
                    line.handle_event(other);
                }
            }
        }
        if quit {
            log::info!("escape pressed, stopping");
            break;
        }

        scene.clear();
        let text_rect = Rect::new(32.0, 32.0, 300.0, 400.0);
        scene.push_solid_rect(text_rect, ColorRgba::new(0.0, 0.0, 0.0, 0.4));
        text.draw(&*atlas, text_rect, &mut scene);

        let input_rect = Rect::new(0.0, 0.0, SCREEN.size.x, 32.0).align_bottom(SCREEN.bottom());
        scene.push_solid_rect(input_rect, ColorRgba::new(0.0, 0.0, 0.0, 0.4));
        line.draw(&*atlas, 0, ColorRgba::white(), input_rect, &mut scene);

        if show_atlas {
            let (w, h) = atlas.size();
            let atlas_rect = Rect::from_size(w as f32, h as f32).align_right(SCREEN.right() - SIDEBAR_WIDTH);
            scene.push_textured_rect(
                ATLAS_TEXTURE,
                atlas_rect,
                Rect::from_size(w as f32, h as f32),
                ColorRgba::new(0.5, 0.5, 1.0, 0.5),
            );
        }

        gui.frame_begin(SCREEN);
        gui.panel(Edge::Right, SIDEBAR_WIDTH, "sidebar", |gui| {
            gui.draw_background();
            gui.padding(8.0);
            if gui.button("Append line") {
                text.append_styled("Button pressed ", ColorRgba::new(1.0, 0.3, 0.8, 1.0), 3);
                text.newline();
            }
            gui.checkbox("Show atlas", &mut show_atlas);
            gui.space(8.0);
            gui.text(&format!("Frame {}", frame.frame_index));
        });
        gui.frame_end();

        log::info!(
            "frame {}: scene {} cmds / {} quads, gui {} cmds / {} quads, edit line {:?} (cursor {}), pointer {:?}",
            frame.frame_index,
            scene.len(),
            scene.quad_count(),
            gui.draw_list().len(),
            gui.draw_list().quad_count(),
            line.contents(),
            line.cursor(),
            input.pointer_pos,
        );

        if let Some(budget) = clock.remaining_frame_budget() {
            std::thread::sleep(budget);
        }
    }

    log::info!("text block has {} lines, atlas shown: {show_atlas}", text.lines().len());
    Ok(())
}

/// Registers [`FONT_SIZES`] from `path`, or from the first readable system font.
fn load_font(atlas: &mut FontAtlas, path: Option<&str>) -> anyhow::Result<()> {
    if let Some(path) = path {
        atlas.add_truetype_file(path, &FONT_SIZES)?;
        log::info!("loaded font {path}");
        return Ok(());
    }

    for candidate in SYSTEM_FONTS {
        match atlas.add_truetype_file(candidate, &FONT_SIZES) {
            Ok(_) => {
                log::info!("loaded font {candidate}");
                return Ok(());
            }
            Err(e) => log::debug!("{e:#}"),
        }
    }
    anyhow::bail!("no usable system font found; pass a .ttf/.otf path as the first argument")
}

fn sample_text() -> TextBlock {
    let mut tb = TextBlock::new();
    tb.append_line("The quick brown fox jumps over the lazy dog");
    tb.append_line("Testing line gap code");
    tb.append_styled("... just ", ColorRgba::white(), 2);
    tb.append_styled("Testing", ColorRgba::new(1.0, 0.3, 0.8, 1.0), 1);
    tb.newline();
    tb.append_line("Yatta!");
    tb.append_styled("Isn't it amazing?", ColorRgba::new(1.0, 1.0, 1.0, 0.6), 3);
    tb.newline();
    tb
}

/// Input for each demo frame, as a window backend would deliver it.
fn scripted_input() -> Vec<Vec<InputEvent>> {
    let none = Modifiers::default();
    let key = |key| InputEvent::Key { key, state: ButtonState::Pressed, modifiers: none };
    let button = |state, x, y| InputEvent::PointerButton {
        button: MouseButton::Left,
        state,
        pos: Vec2::new(x, y),
    };
    // Sidebar is padded by 8px, so widgets start at (568, 8) and are 32px tall.
    vec![
        vec![InputEvent::Text("Helo".into()), key(Key::ArrowLeft), InputEvent::Text("l".into()), key(Key::End)],
        vec![
            InputEvent::PointerMoved { pos: Vec2::new(600.0, 20.0) },
            button(ButtonState::Pressed, 600.0, 20.0),
        ],
        vec![
            button(ButtonState::Released, 600.0, 20.0),
            InputEvent::Text(" world!".into()),
            key(Key::Backspace),
            key(Key::Enter),
        ],
        vec![
            InputEvent::PointerMoved { pos: Vec2::new(600.0, 56.0) },
            button(ButtonState::Pressed, 600.0, 56.0),
        ],
        vec![button(ButtonState::Released, 600.0, 56.0)],
        vec![key(Key::Escape)],
    ]
}
