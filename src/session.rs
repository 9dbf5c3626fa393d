//! Game state controller
//!
//! Owns the current run and moves it through Idle → Running → GameOver →
//! (restart) → Running. The host calls [`Session::frame`] once per display
//! frame; a session that is not running ignores frames, which is how the
//! loop stops scheduling work on the menu and after a game over.

use crate::audio::{AudioSink, cue_event, cue_run_start};
use crate::platform::{InputState, Surface};
use crate::renderer;
use crate::sim::{GameEvent, GameOverCause, GamePhase, GameState, tick};
use crate::tuning::Tuning;

/// Final result of a run, reported once per game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub score: u64,
    pub cause: GameOverCause,
}

/// One player's sequence of runs
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    tuning: Tuning,
    state: GameState,
    runs: u32,
}

impl Session {
    /// A session waiting on the menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            state: GameState::new(seed, tuning.clone()),
            tuning,
            runs: 0,
        }
    }

    /// Reset every collection and counter and begin running
    pub fn start_game<A: AudioSink + ?Sized>(&mut self, audio: &mut A) {
        self.state = GameState::new(self.seed, self.tuning.clone());
        self.state.phase = GamePhase::Running;
        self.runs += 1;
        cue_run_start(audio);
        log::info!("Run {} started (seed {})", self.runs, self.seed);
    }

    /// Start over after a game over; identical to [`Session::start_game`]
    pub fn restart<A: AudioSink + ?Sized>(&mut self, audio: &mut A) {
        self.start_game(audio);
    }

    /// Run one display frame: tick, draw, play cues
    ///
    /// Returns the game-over report on the frame the run ends.
    pub fn frame<S, A>(
        &mut self,
        input: &InputState,
        surface: &mut S,
        audio: &mut A,
    ) -> Option<GameOverReport>
    where
        S: Surface + ?Sized,
        A: AudioSink + ?Sized,
    {
        if !self.state.is_running() {
            return None;
        }

        tick(&mut self.state, &input.tick_input());
        renderer::draw(&self.state, surface);

        let mut report = None;
        for event in self.state.drain_events() {
            cue_event(&event, audio);
            if let GameEvent::GameOver { score, cause } = event {
                report = Some(GameOverReport { score, cause });
            }
        }
        report
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Runs started so far
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudio, Sound};
    use crate::platform::{Action, RecordingSurface};
    use crate::sim::{Sprite, Terrain, spawn_step};

    #[test]
    fn test_idle_ignores_frames() {
        let mut session = Session::new(5, Tuning::default());
        let mut surface = RecordingSurface::new();
        let mut audio = RecordingAudio::new();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.frame(&InputState::new(), &mut surface, &mut audio), None);
        assert_eq!(surface.frames, 0);
        assert!(audio.calls.is_empty());
        assert_eq!(session.state().time_ticks, 0);
    }

    #[test]
    fn test_start_runs_frames() {
        let mut session = Session::new(5, Tuning::default());
        let mut surface = RecordingSurface::new();
        let mut audio = RecordingAudio::new();
        session.start_game(&mut audio);
        assert!(session.is_running());
        assert_eq!(audio.plays(Sound::Background), 1);

        for _ in 0..10 {
            session.frame(&InputState::new(), &mut surface, &mut audio);
        }
        assert_eq!(surface.frames, 10);
        assert_eq!(session.score(), 2);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Score: 2m"]);
    }

    #[test]
    fn test_jump_plays_sound() {
        let mut session = Session::new(5, Tuning::default());
        let mut surface = RecordingSurface::new();
        let mut audio = RecordingAudio::new();
        session.start_game(&mut audio);
        session.frame(&InputState::new(), &mut surface, &mut audio);

        let mut input = InputState::new();
        input.set(Action::Jump, true);
        session.frame(&input, &mut surface, &mut audio);
        assert_eq!(audio.plays(Sound::Jump), 1);
    }

    #[test]
    fn test_game_over_reported_once() {
        let mut session = Session::new(5, Tuning::default());
        let mut surface = RecordingSurface::new();
        let mut audio = RecordingAudio::new();
        session.start_game(&mut audio);

        // Pull the ground away
        session.state_mut().platforms.clear();
        session.state_mut().terrain.gap_length = 10_000;

        let mut reports = Vec::new();
        for _ in 0..200 {
            if let Some(report) = session.frame(&InputState::new(), &mut surface, &mut audio) {
                reports.push(report);
            }
        }
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].cause, GameOverCause::Fell);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(audio.plays(Sound::GameOver), 1);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut session = Session::new(5, Tuning::default());
        let mut surface = RecordingSurface::new();
        let mut audio = RecordingAudio::new();
        session.start_game(&mut audio);
        for _ in 0..40 {
            session.frame(&InputState::new(), &mut surface, &mut audio);
        }
        session.state_mut().game_over(GameOverCause::Hazard);

        session.restart(&mut audio);
        assert!(session.is_running());
        assert_eq!(session.runs(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state().player.speed, 6);
        assert_eq!(session.state().terrain.platform_length, 15);
        assert_eq!(session.state().platforms.len(), 30);
        assert!(session.state().events.is_empty());
        assert_eq!(session.seed(), 5);
    }

    /// Terrain, decorations and hazards after `steps` spawner invocations
    fn spawn_snapshot(
        session: &mut Session,
        steps: usize,
    ) -> (Vec<Sprite>, Vec<Sprite>, Vec<Sprite>, Terrain) {
        for _ in 0..steps {
            spawn_step(session.state_mut());
        }
        let state = session.state();
        (
            state.platforms.clone(),
            state.environment.clone(),
            state.enemies.clone(),
            state.terrain,
        )
    }

    #[test]
    fn test_restart_reseeds_spawner() {
        let mut session = Session::new(3, Tuning::default());
        let mut audio = RecordingAudio::new();

        session.start_game(&mut audio);
        let first = spawn_snapshot(&mut session, 200);
        // Well past the opening stretch and its first reseed
        assert_eq!(session.score(), 200);
        assert!(first.0.len() > 30 + 15);

        session.state_mut().game_over(GameOverCause::Fell);
        session.restart(&mut audio);
        let second = spawn_snapshot(&mut session, 200);
        assert_eq!(first, second);
    }
}
