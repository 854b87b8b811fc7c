//! The metrics-to-visual derivation engine.
//!
//! This module turns raw, noisy OS counters into normalized, bounded,
//! display-ready values on every refresh tick.
//!
//! ## Submodules
//!
//! - [`severity`]: Good/Warn/Critical banding of percentages
//! - [`scale`]: bar and sparkline primitives with structured band attributes
//! - [`history`]: fixed-capacity rolling sample buffers
//! - [`rate`]: cumulative-counter-to-rate derivation
//! - [`engine`]: the state object owning all histories and rate meters
//! - [`normalize`]: per-subsystem snapshot normalization
//! - [`format`]: byte/rate/uptime formatting helpers
//!
//! ## Data flow
//!
//! ```text
//! HostSnapshot (raw counters)
//!        │
//!        ▼
//! DashboardData::derive(&snapshot, &mut engine, elapsed, sort)
//!        │
//!        ├──▶ rates via Engine's RateMeters
//!        ├──▶ one sample pushed per RollingHistory
//!        └──▶ normalized per-panel values with SeverityBands
//! ```

pub mod engine;
pub mod format;
pub mod history;
pub mod normalize;
pub mod rate;
pub mod scale;
pub mod severity;

pub use engine::Engine;
pub use history::{RollingHistory, HISTORY_LEN};
pub use normalize::{
    CpuData, DashboardData, DiskData, MemoryData, NetworkData, PartitionData, ProcessData,
    ProcessRow, ProcessSort, SensorData, SwapData, TOP_PROCESSES,
};
pub use rate::RateMeter;
pub use scale::{sparkline, BarSpec, SparkCell, MAX_SPARK_LEVEL};
pub use severity::{temperature_band, SeverityBand};
