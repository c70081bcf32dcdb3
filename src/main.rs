mod engine;
mod key;
mod layout;
mod log;
mod piano;
mod playback;
mod strerr;

use engine::Engine;
use key::Key;
use log::{Log, log};
use piano::Piano;
use playback::Clip;
use sdl2::{event::Event, mouse::MouseButton};
use std::time::Instant;

fn main() {
    if let Err(e) = practically_main() {
        log(Log::Error, e);
    }
}

fn practically_main() -> Result<(), String> {
    log(Log::Info, format!("loading {} samples", layout::KEYS));

    let clips = (0..layout::KEYS)
        .map(|sample| {
            let path = layout::sample_path(sample);
            let clip = Clip::load(&path)?;

            log(Log::Info, format!("{path} ({:.2}s)", clip.seconds()));
            Ok(clip)
        })
        .collect::<Result<Vec<_>, String>>()?;

    let mut engine = Engine::new(layout::TITLE, layout::SIZE)?;

    let keys = layout::layout()
        .into_iter()
        .map(|spot| {
            let voice = engine.open_voice(clips[spot.sample].clone())?;
            Ok(Key::new(spot.body, spot.color, spot.binding, voice))
        })
        .collect::<Result<Vec<_>, String>>()?;

    let mut piano = Piano::new(keys);
    let mut event_pump = engine.event_pump()?;

    log(Log::Info, "ready");

    'main_loop: loop {
        let now = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main_loop,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => piano.mouse_down((x, y), now),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => piano.mouse_up(),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    piano.key_down(keycode, now);
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    piano.key_up(keycode, now);
                }
                _ => (),
            }
        }

        piano.sweep(now);
        piano.drag(Engine::pointer(&event_pump), now);

        engine.clear();
        piano.draw(&mut engine)?;
        engine.present();
    }

    log(Log::Info, "bye");

    Ok(())
}
