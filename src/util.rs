//! Frame timing for the demo loop

use std::collections::VecDeque;
use std::time::Instant;

/// Longest step handed to demo updates. Dragging or resizing the window
/// stalls the loop, and the balls would otherwise tunnel through the walls.
const MAX_STEP: f32 = 0.1;

/// Seconds between FPS log lines
const REPORT_INTERVAL: f32 = 1.0;

/// Summary of the recent frame window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub avg_fps: f32,
    pub min_fps: f32,
    pub max_fps: f32,
    pub avg_frame_ms: f32,
}

/// Measures frame durations over a rolling window and paces the FPS report
pub struct FrameClock {
    durations: VecDeque<f32>,
    window: usize,
    last_frame: Instant,
    since_report: f32,
}

impl FrameClock {
    pub fn new(window: usize) -> Self {
        Self {
            durations: VecDeque::with_capacity(window),
            window: window.max(1),
            last_frame: Instant::now(),
            since_report: 0.0,
        }
    }

    /// Start a new frame; returns the step for demo updates (capped at `MAX_STEP`)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: f32) -> f32 {
        if self.durations.len() == self.window {
            self.durations.pop_front();
        }
        self.durations.push_back(elapsed);
        self.since_report += elapsed;
        elapsed.min(MAX_STEP)
    }

    /// Stats for the window, once per `REPORT_INTERVAL`
    pub fn report(&mut self) -> Option<FrameStats> {
        if self.since_report < REPORT_INTERVAL {
            return None;
        }
        self.since_report = 0.0;
        Some(self.stats())
    }

    pub fn stats(&self) -> FrameStats {
        let per_second = |secs: f32| if secs > 0.0 { 1.0 / secs } else { 0.0 };

        let total: f32 = self.durations.iter().sum();
        let avg = total / self.durations.len().max(1) as f32;
        let shortest = self.durations.iter().copied().reduce(f32::min).unwrap_or(0.0);
        let longest = self.durations.iter().copied().reduce(f32::max).unwrap_or(0.0);

        FrameStats {
            avg_fps: per_second(avg),
            min_fps: per_second(longest),
            max_fps: per_second(shortest),
            avg_frame_ms: avg * 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_capped() {
        let mut clock = FrameClock::new(4);
        assert_eq!(clock.record(0.016), 0.016);
        assert_eq!(clock.record(2.5), MAX_STEP);
    }

    #[test]
    fn test_stats_over_window() {
        let mut clock = FrameClock::new(2);
        clock.record(1.0);
        clock.record(0.25);
        clock.record(0.5);

        // Oldest sample has dropped out of the window
        let stats = clock.stats();
        assert_eq!(stats.avg_frame_ms, 375.0);
        assert_eq!(stats.min_fps, 2.0);
        assert_eq!(stats.max_fps, 4.0);
    }

    #[test]
    fn test_empty_window_reports_zero() {
        let clock = FrameClock::new(8);
        let stats = clock.stats();
        assert_eq!(stats.avg_fps, 0.0);
        assert_eq!(stats.min_fps, 0.0);
        assert_eq!(stats.max_fps, 0.0);
    }

    #[test]
    fn test_report_paced_by_interval() {
        let mut clock = FrameClock::new(8);
        clock.record(0.6);
        assert!(clock.report().is_none());
        clock.record(0.6);
        assert!(clock.report().is_some());
        assert!(clock.report().is_none());
    }
}
