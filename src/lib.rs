// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # sysdash
//!
//! A live terminal dashboard for host system metrics.
//!
//! sysdash samples CPU, memory, temperature, disk, network, and process
//! state on a fixed interval and renders color-coded panels, bars, and
//! sparkline histories. The heart of the crate is the derivation engine
//! in [`data`]: raw cumulative or instantaneous OS counters become
//! normalized, bounded, display-ready values on every tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Application                           │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │ (derive) │    │ (panels)│    │          │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘ │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │ metrics │◀── SystemProvider (sysinfo + /proc) | Mock      │
//! │  │ (input) │                                                 │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state: the provider, the derivation
//!   engine, and the latest per-tick dashboard data
//! - **[`metrics`]**: OS metrics acquisition behind the
//!   [`MetricsProvider`] trait, with a live implementation and a mock
//! - **[`data`]**: The derivation engine - severity bands, bar and
//!   sparkline primitives, rolling histories, rate meters, and
//!   per-subsystem normalization
//! - **[`ui`]**: Panel assembly with ratatui - header plus a 2×3 grid
//!   of CPU/Memory/Temps over Processes/Network/Disk
//!
//! ## Usage
//!
//! ```no_run
//! use sysdash::{App, SystemProvider};
//!
//! let mut app = App::new(Box::new(SystemProvider::new()));
//! app.tick();
//! if let Some(data) = &app.data {
//!     println!("CPU {:.0}%", data.cpu.average);
//! }
//! ```
//!
//! Driving the derivation engine with synthetic snapshots:
//!
//! ```
//! use sysdash::{App, MockProvider};
//! use sysdash::metrics::HostSnapshot;
//!
//! let provider = MockProvider::fixed(HostSnapshot::default());
//! let mut app = App::new(Box::new(provider));
//! app.tick();
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod metrics;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{
    BarSpec, DashboardData, Engine, ProcessSort, RateMeter, RollingHistory, SeverityBand,
    SparkCell,
};
pub use metrics::{HostSnapshot, MetricsProvider, MockProvider, SystemProvider};
