use crate::{
    key::Paint,
    playback::{Clip, Playback},
    strerr::Strerr,
};
use sdl2::{
    AudioSubsystem, EventPump, Sdl,
    audio::{AudioDevice, AudioSpecDesired},
    mouse::MouseState,
    pixels::Color,
    rect::Rect,
    render::Canvas,
    video::Window,
};

pub struct Engine {
    sdl_context: Sdl,
    audio: AudioSubsystem,
    canvas: Canvas<Window>,
}

impl Engine {
    pub fn new(title: &str, (width, height): (u32, u32)) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let audio = sdl_context.audio()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .strerr()?;

        let canvas = window
            .into_canvas()
            .present_vsync()
            .accelerated()
            .build()
            .strerr()?;

        Ok(Self {
            sdl_context,
            audio,
            canvas,
        })
    }

    pub fn event_pump(&self) -> Result<EventPump, String> {
        self.sdl_context.event_pump()
    }

    /// Pointer position in window coordinates.
    pub fn pointer(event_pump: &EventPump) -> (i32, i32) {
        let mouse = MouseState::new(event_pump);
        (mouse.x(), mouse.y())
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Opens a device of its own for `clip`. It stays silent until the voice
    /// is started.
    pub fn open_voice(&self, clip: Clip) -> Result<AudioDevice<Playback>, String> {
        let sample_rate = clip.sample_rate as i32;
        let channels = clip.channels as u8;
        let desired_spec = AudioSpecDesired {
            freq: Some(sample_rate),
            channels: Some(channels),
            samples: None,
        };
        let device = self
            .audio
            .open_playback(None, &desired_spec, |_| Playback::new(clip))?;

        if device.spec().freq != sample_rate {
            Err("freq mismatch").strerr()
        } else if device.spec().channels != channels {
            Err("channel mismatch").strerr()
        } else {
            device.resume();
            Ok(device)
        }
    }
}

impl Paint for Engine {
    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }
}
