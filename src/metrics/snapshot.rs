//! Raw snapshot types produced by a metrics provider.
//!
//! A [`HostSnapshot`] is one immutable, point-in-time read of every
//! subsystem's raw state. The refresh loop owns it for exactly one tick;
//! nothing here is display-ready - normalization happens in
//! [`crate::data::normalize`].

/// One point-in-time read of the whole host.
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    pub cpu: CpuSnapshot,
    pub memory: MemorySnapshot,
    pub temperatures: Vec<TemperatureReading>,
    pub disk: DiskSnapshot,
    pub network: NetworkSnapshot,
    pub processes: Vec<ProcessSnapshot>,
    /// Seconds since boot.
    pub uptime_secs: u64,
}

/// Raw CPU state.
#[derive(Debug, Clone, Default)]
pub struct CpuSnapshot {
    /// Busy percentage per logical core, in core order.
    pub per_core: Vec<f32>,
    /// Aggregate busy percentage across all cores.
    pub average: f32,
    /// Current frequency in MHz; 0 when the platform doesn't report one.
    pub frequency_mhz: u64,
    /// Logical core count.
    pub core_count: usize,
    /// 1/5/15 minute load averages.
    pub load_avg: (f64, f64, f64),
}

/// Raw memory and swap counters, all in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemorySnapshot {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub cached: u64,
    pub buffers: u64,
    pub swap_total: u64,
    pub swap_used: u64,
}

/// One temperature sensor reading.
#[derive(Debug, Clone)]
pub struct TemperatureReading {
    pub label: String,
    pub celsius: f32,
    /// Sensor's high-watermark limit, when reported.
    pub high: Option<f32>,
    /// Sensor's critical limit, when reported.
    pub critical: Option<f32>,
}

/// Mounted partitions plus cumulative I/O totals.
#[derive(Debug, Clone, Default)]
pub struct DiskSnapshot {
    pub partitions: Vec<PartitionSnapshot>,
    /// Lifetime read/write byte totals across physical devices; `None`
    /// when the platform exposes no counters.
    pub io: Option<DiskIoTotals>,
}

/// Usage of one mounted partition.
#[derive(Debug, Clone)]
pub struct PartitionSnapshot {
    pub device: String,
    pub mount_point: String,
    pub total: u64,
    pub available: u64,
}

/// Cumulative lifetime disk I/O in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskIoTotals {
    pub read_bytes: u64,
    pub written_bytes: u64,
}

/// Cumulative network counters plus connection state counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkSnapshot {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub err_in: u64,
    pub err_out: u64,
    pub drop_in: u64,
    pub drop_out: u64,
    pub connections: ConnectionCounts,
}

/// TCP connection counts by state. Both degrade to 0 when the listing
/// is denied by OS policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionCounts {
    pub established: usize,
    pub listening: usize,
}

/// One process as listed this tick.
#[derive(Debug, Clone)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub mem_percent: f32,
}
