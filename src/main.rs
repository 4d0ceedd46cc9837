// main.rs
use raylib::prelude::*;

use beyond_death_3d::core::input::{Action, InputState};
use beyond_death_3d::core::process_events::tick;
use beyond_death_3d::core::state::GameState;
use beyond_death_3d::render::frame::{render_frame, DrawCommand};
use beyond_death_3d::render::framebuffer::Framebuffer;
use beyond_death_3d::settings::Settings;

const KEY_BINDINGS: [(KeyboardKey, Action); 5] = [
    (KeyboardKey::KEY_W, Action::MoveForward),
    (KeyboardKey::KEY_S, Action::MoveBackward),
    (KeyboardKey::KEY_A, Action::RotateLeft),
    (KeyboardKey::KEY_D, Action::RotateRight),
    (KeyboardKey::KEY_SPACE, Action::ToggleOverlay),
];

/// Turns this frame's key transitions into press/release events.
fn process_keys(rl: &RaylibHandle, input: &mut InputState) {
    for (key, action) in KEY_BINDINGS {
        if rl.is_key_pressed(key) {
            input.press(action);
        }
        if rl.is_key_released(key) {
            input.release(action);
        }
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let ws = &settings.window;
    let (width, height) = (ws.width as u32, ws.height as u32);

    let (mut window, raylib_thread) = raylib::init()
        .size(ws.width, ws.height)
        .title(&ws.title)
        .build();
    window.set_target_fps((1000 / ws.tick_ms) as u32);

    let mut framebuffer = Framebuffer::new(width, height);
    let blank = Image::gen_image_color(ws.width, ws.height, Color::BLACK);
    let mut texture = match window.load_texture_from_image(&raylib_thread, &blank) {
        Ok(t) => t,
        Err(e) => {
            log::error!("could not create frame texture: {e}");
            return;
        }
    };

    let mut state = GameState::from_settings(&settings.motion);
    let mut input = InputState::new();
    let tick_dt = ws.tick_ms as f32 / 1000.0;
    let mut accumulator = 0.0f32;

    log::info!("{} started at {}x{}", ws.title, width, height);

    while !window.window_should_close() {
        process_keys(&window, &mut input);

        // Fixed-step simulation, capped so a long stall cannot spiral
        accumulator += window.get_frame_time().min(0.25);
        let mut substeps = 0;
        while accumulator >= tick_dt && substeps < ws.max_substeps {
            tick(&mut state, &input.take_intent());
            accumulator -= tick_dt;
            substeps += 1;
        }

        let commands = render_frame(&state, &settings.render, width, height).draw_commands();
        framebuffer.clear();
        framebuffer.rasterize(&commands);
        framebuffer.upload_to_texture(&mut texture);

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&texture, 0, 0, Color::WHITE);
        for cmd in &commands {
            if let DrawCommand::Text { text, x, y, size, color } = cmd {
                d.draw_text(text, *x, *y, *size, *color);
            }
        }
    }

    log::info!("exiting after {} ticks", state.ticks);
}
