//! Sound effects loaded from WAV files
//!
//! Three short clips are read from the sound directory at startup: the paddle
//! hit (required), the miss and the new-ball jingle (both optional). Playback
//! goes through rodio when the `audio` feature is enabled; without it the
//! clips are still checked but the manager stays silent.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball slipped past the paddle
    BallMissed,
    /// Another ball joined the game
    NewBall,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [
        SoundEffect::PaddleHit,
        SoundEffect::BallMissed,
        SoundEffect::NewBall,
    ];

    /// File name inside the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "audio.wav",
            SoundEffect::BallMissed => "missed.wav",
            SoundEffect::NewBall => "newball.wav",
        }
    }

    /// Startup aborts if a required clip can't be loaded
    pub fn is_required(&self) -> bool {
        matches!(self, SoundEffect::PaddleHit)
    }

    /// The effect a game event should trigger, if any
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            GameEvent::BallMissed => Some(SoundEffect::BallMissed),
            GameEvent::BallAdded => Some(SoundEffect::NewBall),
            GameEvent::ObstacleMoved => None,
        }
    }
}

/// Encoded clips keyed by effect
pub type Clips = HashMap<SoundEffect, Arc<[u8]>>;

/// Read every clip from `dir`
///
/// A missing or undecodable required clip is an error; optional clips that
/// fail are logged and left out.
pub fn load_clips(dir: &Path) -> Result<Clips> {
    let mut clips = HashMap::new();
    for effect in SoundEffect::ALL {
        let path = dir.join(effect.file_name());
        match load_clip(&path) {
            Ok(clip) => {
                clips.insert(effect, clip);
            }
            Err(err) if effect.is_required() => return Err(err),
            Err(err) => log::warn!("{:?} sound disabled: {:#}", effect, err),
        }
    }
    Ok(clips)
}

/// Read a clip into memory, checking that it decodes
fn load_clip(path: &Path) -> Result<Arc<[u8]>> {
    let bytes: Arc<[u8]> = std::fs::read(path)
        .with_context(|| format!("failed to read sound {}", path.display()))?
        .into();
    backend::check_decodes(&bytes)
        .with_context(|| format!("failed to decode sound {}", path.display()))?;
    Ok(bytes)
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<backend::Backend>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    /// A manager that never makes a sound
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Load the clips from `dir`, then open the output device
    #[cfg(feature = "audio")]
    pub fn load(dir: &Path) -> Result<Self> {
        let clips = load_clips(dir)?;
        let backend = backend::Backend::open(clips)?;
        log::info!("Audio ready ({} clips from {})", backend.clip_count(), dir.display());
        Ok(Self {
            backend: Some(backend),
        })
    }

    /// Native build without the `audio` feature
    #[cfg(not(feature = "audio"))]
    pub fn load(dir: &Path) -> Result<Self> {
        load_clips(dir)?;
        log::warn!(
            "Built without the `audio` feature, ignoring sounds in {}",
            dir.display()
        );
        Ok(Self::disabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Play a sound effect without blocking
    pub fn play(&self, effect: SoundEffect) {
        if let Some(backend) = &self.backend {
            backend.play(effect);
        }
    }

    /// Play whatever sound a game event maps to
    pub fn play_event(&self, event: GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }
}

#[cfg(feature = "audio")]
mod backend {
    use std::io::Cursor;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::{Clips, SoundEffect};

    pub struct Backend {
        // Dropping the stream stops all playback
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: Clips,
    }

    impl Backend {
        pub fn open(clips: Clips) -> Result<Self> {
            let (stream, handle) =
                OutputStream::try_default().context("audio output device unavailable")?;
            Ok(Self {
                _stream: stream,
                handle,
                clips,
            })
        }

        pub fn clip_count(&self) -> usize {
            self.clips.len()
        }

        // Failures here only log at debug: stderr shares the game screen
        pub fn play(&self, effect: SoundEffect) {
            let Some(clip) = self.clips.get(&effect) else {
                return;
            };
            let source = match Decoder::new(Cursor::new(Arc::clone(clip))) {
                Ok(source) => source,
                Err(err) => {
                    log::debug!("Failed to decode {:?}: {}", effect, err);
                    return;
                }
            };
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(source);
                    sink.detach();
                }
                Err(err) => log::debug!("Failed to play {:?}: {}", effect, err),
            }
        }
    }

    pub fn check_decodes(bytes: &Arc<[u8]>) -> Result<()> {
        Decoder::new(Cursor::new(Arc::clone(bytes)))?;
        Ok(())
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use std::sync::Arc;

    use anyhow::Result;

    use super::SoundEffect;

    /// No backend can exist without the `audio` feature
    pub enum Backend {}

    impl Backend {
        pub fn play(&self, _effect: SoundEffect) {
            match *self {}
        }
    }

    /// Nothing to decode with; presence of the file is all that's checked
    pub fn check_decodes(_bytes: &Arc<[u8]>) -> Result<()> {
        Ok(())
    }
}
