use sdl2::{keyboard::Keycode, pixels::Color, rect::Rect};
use std::time::{Duration, Instant};

/// Minimum time a struck key keeps sounding before a stop takes effect.
pub const COOLDOWN: Duration = Duration::from_millis(1000);

pub const PRESSED: Color = Color::RGB(100, 100, 100);
pub const OUTLINE: Color = Color::BLACK;
pub const OUTLINE_THICKNESS: u32 = 2;

/// One sound instance, owned by exactly one key.
pub trait Voice {
    /// Starts the sound from the beginning.
    fn start(&mut self);
    /// Silences the sound. Silencing a silent voice does nothing.
    fn halt(&mut self);
}

/// Something keys can be drawn onto.
pub trait Paint {
    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), String>;
}

pub struct Key<V> {
    body: Rect,
    color: Color,
    binding: Keycode,
    voice: V,
    pressed: bool,
    playing: bool,
    struck: Instant,
}

impl<V: Voice> Key<V> {
    pub fn new(body: Rect, color: Color, binding: Keycode, voice: V) -> Self {
        Self {
            body,
            color,
            binding,
            voice,
            pressed: false,
            playing: false,
            struck: Instant::now(),
        }
    }

    pub const fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.struck)
    }

    /// Strict interior test, edges don't count.
    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        x > self.body.left()
            && x < self.body.right()
            && y > self.body.top()
            && y < self.body.bottom()
    }

    pub fn play(&mut self, now: Instant) {
        if self.playing {
            return;
        }

        self.voice.start();
        self.playing = true;
        self.struck = now;
    }

    pub fn stop(&mut self, now: Instant) {
        if self.elapsed(now) < COOLDOWN {
            return;
        }

        self.voice.halt();
        self.playing = false;
    }

    pub fn key_press(&mut self, binding: Keycode, now: Instant) -> bool {
        if self.pressed || binding != self.binding {
            return false;
        }

        self.pressed = true;
        self.play(now);
        true
    }

    pub fn key_release(&mut self, binding: Keycode, now: Instant) -> bool {
        if binding != self.binding {
            return false;
        }

        // the voice may outlive the release until the cooldown runs out
        self.playing = false;
        self.pressed = false;
        self.stop(now);
        true
    }

    /// Pointer press: always restarts the sound.
    pub fn strike(&mut self, now: Instant) {
        self.playing = false;
        self.pressed = true;
        self.play(now);
    }

    pub fn lift(&mut self) {
        self.pressed = false;
    }

    pub fn draw(&self, paint: &mut impl Paint) -> Result<(), String> {
        let t = OUTLINE_THICKNESS;
        let inner = Rect::new(
            self.body.x() + t as i32,
            self.body.y() + t as i32,
            self.body.width().saturating_sub(2 * t),
            self.body.height().saturating_sub(2 * t),
        );

        paint.fill(self.body, OUTLINE)?;
        paint.fill(inner, if self.pressed { PRESSED } else { self.color })
    }

    #[cfg(test)]
    pub const fn playing(&self) -> bool {
        self.playing
    }

    #[cfg(test)]
    pub const fn voice(&self) -> &V {
        &self.voice
    }
}
