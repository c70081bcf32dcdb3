use crate::key::{COOLDOWN, Key, Paint, Voice};
use sdl2::keyboard::Keycode;
use std::time::Instant;

/// The key row plus whatever the mouse is currently doing with it.
///
/// Hit tests walk the keys in construction order and take the first match,
/// while drawing walks them backwards, so the first-constructed keys end up
/// on top. With black keys constructed first the two orders agree.
pub struct Piano<V> {
    keys: Vec<Key<V>>,
    last_pressed: usize,
    mouse_pressed: bool,
}

impl<V: Voice> Piano<V> {
    pub fn new(keys: Vec<Key<V>>) -> Self {
        Self {
            keys,
            last_pressed: 0,
            mouse_pressed: false,
        }
    }

    fn hit(&self, point: (i32, i32)) -> Option<usize> {
        self.keys.iter().position(|key| key.contains(point))
    }

    pub fn mouse_down(&mut self, point: (i32, i32), now: Instant) {
        self.mouse_pressed = true;

        if let Some(index) = self.hit(point) {
            let key = &mut self.keys[index];

            if !key.pressed() {
                key.strike(now);
                self.last_pressed = index;
            }
        }
    }

    pub fn mouse_up(&mut self) {
        if let Some(key) = self.keys.get_mut(self.last_pressed) {
            key.lift();
        }

        self.mouse_pressed = false;
    }

    /// Follows a held mouse button across keys.
    pub fn drag(&mut self, point: (i32, i32), now: Instant) {
        if !self.mouse_pressed {
            return;
        }

        let Some(index) = self.hit(point) else {
            return;
        };

        if self.keys[index].pressed() {
            return;
        }

        if index != self.last_pressed {
            if let Some(previous) = self.keys.get_mut(self.last_pressed) {
                previous.lift();
            }
        }

        self.keys[index].strike(now);
        self.last_pressed = index;
    }

    pub fn key_down(&mut self, binding: Keycode, now: Instant) -> bool {
        self.keys.iter_mut().any(|key| key.key_press(binding, now))
    }

    pub fn key_up(&mut self, binding: Keycode, now: Instant) -> bool {
        self.keys
            .iter_mut()
            .any(|key| key.key_release(binding, now))
    }

    /// Silences released keys whose cooldown has run out.
    pub fn sweep(&mut self, now: Instant) {
        self.keys
            .iter_mut()
            .filter(|key| !key.pressed() && key.elapsed(now) > COOLDOWN)
            .for_each(|key| key.stop(now));
    }

    pub fn draw(&self, paint: &mut impl Paint) -> Result<(), String> {
        self.keys.iter().rev().try_for_each(|key| key.draw(paint))
    }

    #[cfg(test)]
    fn key(&self, index: usize) -> &Key<V> {
        &self.keys[index]
    }
}
