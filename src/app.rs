//! Application state and the per-tick derivation cycle.

use std::time::Instant;

use crate::data::{DashboardData, Engine, ProcessSort};
use crate::metrics::MetricsProvider;
use crate::ui::Theme;

/// Main application state.
///
/// Owns the metrics provider, the derivation [`Engine`] (the only state
/// carried across ticks), and the latest [`DashboardData`]. Everything
/// here is touched by the single refresh-loop thread only.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    provider: Box<dyn MetricsProvider>,
    engine: Engine,
    pub data: Option<DashboardData>,
    last_sample: Option<Instant>,

    pub sort: ProcessSort,
    pub theme: Theme,
}

impl App {
    /// Create a new App with the given metrics provider.
    pub fn new(provider: Box<dyn MetricsProvider>) -> Self {
        Self {
            running: true,
            show_help: false,
            provider,
            engine: Engine::new(),
            data: None,
            last_sample: None,
            sort: ProcessSort::default(),
            theme: Theme::auto_detect(),
        }
    }

    /// Returns a description of the current metrics provider.
    pub fn provider_description(&self) -> &str {
        self.provider.description()
    }

    /// Run one full sample-and-derive cycle.
    ///
    /// Samples every subsystem, derives the display values, and updates
    /// the engine's histories and rate meters. The previous tick's data
    /// is replaced wholesale, never mutated.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed_secs = self
            .last_sample
            .map_or(0.0, |last| now.duration_since(last).as_secs_f64());
        self.last_sample = Some(now);

        let snapshot = self.provider.sample();
        self.data = Some(DashboardData::derive(
            &snapshot,
            &mut self.engine,
            elapsed_secs,
            self.sort,
        ));
    }

    /// CPU-average history samples, oldest first.
    pub fn cpu_history(&self) -> Vec<f64> {
        self.engine.cpu_history.values()
    }

    /// Upload-rate history samples, oldest first.
    pub fn net_up_history(&self) -> Vec<f64> {
        self.engine.net_up_history.values()
    }

    /// Download-rate history samples, oldest first.
    pub fn net_down_history(&self) -> Vec<f64> {
        self.engine.net_down_history.values()
    }

    /// Cycle the process listing's sort key.
    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        // Re-sorting applies on the next tick; keep the current data
        // intact rather than reshuffling mid-frame.
    }

    /// Toggle between the dark and light theme.
    pub fn toggle_theme(&mut self) {
        self.theme = if self.theme.dark_background {
            Theme::light()
        } else {
            Theme::dark()
        };
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{CpuSnapshot, HostSnapshot, MockProvider, NetworkSnapshot};

    fn snapshot(average: f32, sent: u64, recv: u64) -> HostSnapshot {
        HostSnapshot {
            cpu: CpuSnapshot {
                average,
                core_count: 1,
                ..CpuSnapshot::default()
            },
            network: NetworkSnapshot {
                bytes_sent: sent,
                bytes_recv: recv,
                ..NetworkSnapshot::default()
            },
            ..HostSnapshot::default()
        }
    }

    #[test]
    fn test_tick_populates_data_and_histories() {
        let provider =
            MockProvider::sequence(vec![snapshot(25.0, 1000, 2000), snapshot(75.0, 3000, 2000)]);
        let mut app = App::new(Box::new(provider));
        assert!(app.data.is_none());

        app.tick();
        let data = app.data.as_ref().expect("data after first tick");
        assert_eq!(data.cpu.average, 25.0);
        // First tick: rate meters are only seeded.
        assert_eq!(data.network.up_rate, 0.0);
        assert_eq!(app.cpu_history(), vec![25.0]);

        // Rates divide by measured elapsed time; give it a nonzero one.
        std::thread::sleep(std::time::Duration::from_millis(5));
        app.tick();
        let data = app.data.as_ref().expect("data after second tick");
        assert_eq!(data.cpu.average, 75.0);
        assert!(data.network.up_rate > 0.0);
        assert_eq!(app.cpu_history(), vec![25.0, 75.0]);
        assert_eq!(app.net_up_history().len(), 2);
        assert_eq!(app.net_down_history().len(), 2);
    }

    #[test]
    fn test_quit_clears_running() {
        let mut app = App::new(Box::new(MockProvider::default()));
        assert!(app.running);
        app.quit();
        assert!(!app.running);
    }

    #[test]
    fn test_cycle_sort_wraps() {
        let mut app = App::new(Box::new(MockProvider::default()));
        assert_eq!(app.sort, ProcessSort::Cpu);
        app.cycle_sort();
        assert_eq!(app.sort, ProcessSort::Memory);
        app.cycle_sort();
        app.cycle_sort();
        assert_eq!(app.sort, ProcessSort::Cpu);
    }
}
