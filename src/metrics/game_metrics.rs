use std::time::{Duration, Instant};

/// Per-process play statistics; nothing is persisted between runs
pub struct GameMetrics {
    /// Set while a game is in progress
    pub start_time: Option<Instant>,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the clock of the running game
    pub fn update(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed_time = start.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
    }

    /// Freeze the clock and record the result
    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.start_time = None;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Leaving mid-game stops the clock without counting a result
    pub fn on_abandon(&mut self) {
        self.update();
        self.start_time = None;
    }

    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
