use crate::{
    key::Voice,
    log::{Log, log},
    strerr::Strerr,
};
use sdl2::audio::{AudioCallback, AudioDevice};
use std::{path::Path, sync::Arc};
use symphonia::core::{
    audio::SampleBuffer, codecs::CODEC_TYPE_NULL, io::MediaSourceStream, probe::Hint,
};

pub type Sample = f32;

/// A fully decoded sound file, interleaved.
#[derive(Clone)]
pub struct Clip {
    samples: Arc<[Sample]>,
    pub sample_rate: u32,
    pub channels: usize,
}

impl Clip {
    pub fn load<P>(path: P) -> Result<Self, String>
    where
        P: AsRef<Path>,
    {
        type SymErr = symphonia::core::errors::Error;

        let path = path.as_ref();
        let src = std::fs::File::open(path).strerr_at(path.display())?;
        let mss = MediaSourceStream::new(Box::new(src), Default::default());
        let mut hint = Hint::new();

        if let Some(ext) = path.extension().and_then(|osstr| osstr.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &Default::default(), &Default::default())
            .strerr_at(path.display())?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|track| track.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or("no supported audio tracks")?;

        let sample_rate = track.codec_params.sample_rate.ok_or("no sample rate")?;
        let channels = track.codec_params.channels.ok_or("no channels")?.count();
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &Default::default())
            .strerr()?;

        let mut samples = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymErr::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e).strerr_at(path.display()),
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => {
                    let mut buffer =
                        SampleBuffer::<Sample>::new(decoded.capacity() as u64, *decoded.spec());
                    buffer.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buffer.samples());
                }
                Err(SymErr::DecodeError(e)) => log(
                    Log::Warning,
                    format!("{}: DecodeError says \"{e}\"", path.display()),
                ),
                Err(e) => return Err(e).strerr_at(path.display()),
            }
        }

        Ok(Self {
            samples: samples.into(),
            sample_rate,
            channels,
        })
    }

    pub fn seconds(&self) -> f32 {
        self.samples.len() as f32 / (self.channels as u32 * self.sample_rate).max(1) as f32
    }
}

/// Audio callback state for one key. Outputs silence unless started.
pub struct Playback {
    clip: Clip,
    cursor: usize,
    active: bool,
}

impl Playback {
    const VOLUME: Sample = 0.5;

    pub const fn new(clip: Clip) -> Self {
        Self {
            clip,
            cursor: 0,
            active: false,
        }
    }

    pub const fn rewind(&mut self) {
        self.cursor = 0;
        self.active = true;
    }

    pub const fn silence(&mut self) {
        self.active = false;
    }
}

impl AudioCallback for Playback {
    type Channel = Sample;

    fn callback(&mut self, out: &mut [Self::Channel]) {
        for slot in out.iter_mut() {
            *slot = match self.clip.samples.get(self.cursor) {
                Some(&sample) if self.active => {
                    self.cursor += 1;
                    sample * Self::VOLUME
                }
                _ => {
                    self.active = false;
                    0.0
                }
            };
        }
    }
}

impl Voice for AudioDevice<Playback> {
    fn start(&mut self) {
        self.lock().rewind();
    }

    fn halt(&mut self) {
        self.lock().silence();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(samples: &[Sample]) -> Clip {
        Clip {
            samples: samples.into(),
            sample_rate: 44100,
            channels: 1,
        }
    }

    #[test]
    fn silent_until_rewound() {
        let mut playback = Playback::new(clip(&[1.0, 1.0]));
        let mut out = [9.0; 2];

        playback.callback(&mut out);
        assert_eq!(out, [0.0, 0.0]);

        playback.rewind();
        playback.callback(&mut out);
        assert_eq!(out, [Playback::VOLUME; 2]);
    }

    #[test]
    fn runs_out_into_silence() {
        let mut playback = Playback::new(clip(&[1.0, -1.0, 1.0]));
        let mut out = [9.0; 5];

        playback.rewind();
        playback.callback(&mut out);

        let v = Playback::VOLUME;
        assert_eq!(out, [v, -v, v, 0.0, 0.0]);
        assert!(!playback.active);
    }

    #[test]
    fn rewind_restarts_and_silence_cuts() {
        let mut playback = Playback::new(clip(&[1.0, 2.0, 3.0]));
        let mut out = [0.0; 2];

        playback.rewind();
        playback.callback(&mut out);
        playback.rewind();
        playback.callback(&mut out);
        assert_eq!(out, [Playback::VOLUME, 2.0 * Playback::VOLUME]);

        playback.silence();
        playback.callback(&mut out);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn missing_file_names_path() {
        let err = Clip::load("sounds/does-not-exist.wav").err().unwrap();
        assert!(err.starts_with("sounds/does-not-exist.wav: "));
    }

    #[test]
    fn decodes_wav() {
        let dir = std::env::temp_dir().join(format!("piano-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tone.wav");

        // 16-bit mono PCM, 4 frames
        let frames: [i16; 4] = [0, 16384, -16384, 32767];
        let data: Vec<u8> = frames.iter().flat_map(|s| s.to_le_bytes()).collect();
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&8000u32.to_le_bytes());
        wav.extend_from_slice(&16000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
        wav.extend_from_slice(&data);
        std::fs::write(&path, wav).unwrap();

        let clip = Clip::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(clip.sample_rate, 8000);
        assert_eq!(clip.channels, 1);
        assert_eq!(clip.samples.len(), 4);
        assert_eq!(clip.seconds(), 4.0 / 8000.0);
        assert_eq!(clip.samples[0], 0.0);
        assert!((clip.samples[1] - 0.5).abs() < 1e-3);
        assert!((clip.samples[2] + 0.5).abs() < 1e-3);
    }
}
