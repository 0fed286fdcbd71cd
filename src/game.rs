//! The frame loop
//!
//! Each frame samples the keyboard several times with a short sleep between
//! samples, then advances the simulation, redraws, and plays sounds for the
//! events the frame raised.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::audio::AudioManager;
use crate::input;
use crate::renderer::{self, Terminal};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, apply_command, frame};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    terminal: Terminal,
    audio: AudioManager,
}

impl Game {
    /// Set up audio and the terminal, then seed a new run
    ///
    /// Audio comes first so a missing sound aborts before the screen is
    /// taken over.
    pub fn new(settings: &Settings) -> Result<Self> {
        let tuning = settings.tuning();

        let audio = if settings.audio_enabled() {
            AudioManager::load(&settings.sound_dir).context("audio initialization failed")?
        } else {
            log::info!("Audio disabled");
            AudioManager::disabled()
        };

        let terminal = Terminal::open().context("failed to set up terminal")?;
        let field = terminal.playfield().context("failed to read terminal size")?;
        if !field.is_playable() {
            // Restores the terminal before the error is printed
            drop(terminal);
            bail!(
                "terminal too small: playfield {}x{} (need at least {}x{})",
                field.width,
                field.height,
                crate::consts::MIN_FIELD_WIDTH,
                crate::consts::MIN_FIELD_HEIGHT
            );
        }

        let seed = settings.resolve_seed();
        log::info!(
            "Starting {} game on {}x{} field, seed {}, sound {}",
            settings.variant.as_str(),
            field.width,
            field.height,
            seed,
            if audio.is_enabled() { "on" } else { "off" }
        );

        Ok(Self {
            state: GameState::new(field, tuning, seed),
            terminal,
            audio,
        })
    }

    /// Run until the player quits, returning the final score
    pub fn run(&mut self) -> Result<i64> {
        self.terminal.draw(&renderer::compose(&self.state))?;

        while self.state.phase != GamePhase::Over {
            self.poll_input()?;
            if self.state.phase != GamePhase::Running {
                continue;
            }

            frame(&mut self.state);
            self.terminal.draw(&renderer::compose(&self.state))?;

            for event in self.state.drain_events() {
                self.audio.play_event(event);
                if event == GameEvent::BallAdded {
                    log::info!("Score {}: now {} balls", self.state.score, self.state.balls.len());
                }
            }
        }

        log::info!("Game over, final score {}", self.state.score);
        Ok(self.state.score)
    }

    /// Sample the keyboard `poll_iterations` times for one frame
    fn poll_input(&mut self) -> Result<()> {
        let interval = Duration::from_micros(self.state.tuning.poll_interval_us);

        for _ in 0..self.state.tuning.poll_iterations {
            if let Some(command) = input::poll_command()? {
                apply_command(&mut self.state, command);
            }

            match self.state.phase {
                GamePhase::Over => return Ok(()),
                GamePhase::Paused => self.wait_while_paused()?,
                GamePhase::Running => thread::sleep(interval),
            }
        }
        Ok(())
    }

    /// Show the pause screen and block until unpaused or quit
    fn wait_while_paused(&mut self) -> Result<()> {
        log::debug!("Paused");
        self.terminal.draw(&renderer::compose_pause(&self.state.field))?;

        while self.state.is_paused() {
            let command = input::wait_command()?;
            apply_command(&mut self.state, command);
        }

        log::debug!("Resumed");
        Ok(())
    }
}
