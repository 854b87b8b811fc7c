//! Per-subsystem normalization of raw snapshots.
//!
//! This module turns one [`HostSnapshot`] into the display-ready
//! [`DashboardData`] for a tick: percentages, severity bands, derived
//! rates, and filtered/sorted listings. It is the only place raw
//! counters are interpreted; panels below this layer only format.

use std::time::Instant;

use crate::metrics::{DiskIoTotals, HostSnapshot};

use super::engine::Engine;
use super::severity::{temperature_band, SeverityBand};

/// Rows kept in the process listing.
pub const TOP_PROCESSES: usize = 12;

/// Mount-path markers for virtual partitions excluded from the disk
/// panel.
const LOOP_MARKER: &str = "loop";
const SNAP_MARKER: &str = "snap";

/// Display-ready values for every panel, rebuilt from scratch each tick.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub cpu: CpuData,
    pub memory: MemoryData,
    pub sensors: Vec<SensorData>,
    pub disk: DiskData,
    pub network: NetworkData,
    pub processes: ProcessData,
    pub uptime_secs: u64,
    pub sampled_at: Instant,
}

/// Normalized CPU values.
#[derive(Debug, Clone)]
pub struct CpuData {
    /// Busy percentage per core, in core order.
    pub per_core: Vec<f64>,
    /// Aggregate busy percentage; also this tick's history sample.
    pub average: f64,
    pub frequency_mhz: Option<u64>,
    pub core_count: usize,
    pub load_avg: (f64, f64, f64),
    /// 1-minute load scaled against the core count, as the banding input
    /// for the load readout.
    pub load_percent: f64,
}

/// Normalized memory values (bytes unless noted).
#[derive(Debug, Clone, Copy)]
pub struct MemoryData {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub cached: u64,
    pub buffers: u64,
    pub percent: f64,
    /// Present only when the host has swap capacity.
    pub swap: Option<SwapData>,
}

#[derive(Debug, Clone, Copy)]
pub struct SwapData {
    pub total: u64,
    pub used: u64,
    pub percent: f64,
}

/// One temperature row with its precomputed band.
#[derive(Debug, Clone)]
pub struct SensorData {
    pub label: String,
    pub celsius: f64,
    pub high: Option<f64>,
    pub critical: Option<f64>,
    pub band: SeverityBand,
}

/// Disk panel values.
#[derive(Debug, Clone)]
pub struct DiskData {
    pub partitions: Vec<PartitionData>,
    /// Cumulative lifetime I/O totals, shown as-is (not a rate).
    pub io: Option<DiskIoTotals>,
}

/// One mounted partition row.
#[derive(Debug, Clone)]
pub struct PartitionData {
    /// Short display label derived from the mount point.
    pub label: String,
    pub mount_point: String,
    pub used: u64,
    pub total: u64,
    pub percent: f64,
}

/// Network panel values for this tick.
#[derive(Debug, Clone, Copy)]
pub struct NetworkData {
    /// Instantaneous upload rate, bytes/sec.
    pub up_rate: f64,
    /// Instantaneous download rate, bytes/sec.
    pub down_rate: f64,
    pub total_sent: u64,
    pub total_recv: u64,
    pub established: usize,
    pub listening: usize,
    pub err_in: u64,
    pub err_out: u64,
    pub drop_in: u64,
    pub drop_out: u64,
}

impl NetworkData {
    /// Whether the error/drop line should be shown at all.
    pub fn has_errors(&self) -> bool {
        self.err_in + self.err_out + self.drop_in + self.drop_out > 0
    }
}

/// Filtered, sorted process listing.
#[derive(Debug, Clone)]
pub struct ProcessData {
    pub top: Vec<ProcessRow>,
    /// Count of active (non-idle) processes before the top-N cut.
    pub total_active: usize,
}

#[derive(Debug, Clone)]
pub struct ProcessRow {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub mem_percent: f64,
}

/// Key the top-process listing is ordered by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessSort {
    #[default]
    Cpu,
    Memory,
    Pid,
}

impl ProcessSort {
    /// Cycle to the next sort key.
    pub fn next(self) -> Self {
        match self {
            ProcessSort::Cpu => ProcessSort::Memory,
            ProcessSort::Memory => ProcessSort::Pid,
            ProcessSort::Pid => ProcessSort::Cpu,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessSort::Cpu => "cpu",
            ProcessSort::Memory => "mem",
            ProcessSort::Pid => "pid",
        }
    }
}

impl DashboardData {
    /// Derive one tick's display values, updating the engine's rate
    /// meters and histories in place.
    ///
    /// `elapsed_secs` is the measured wall-clock time since the previous
    /// sample. No subsystem failure propagates out of here: degraded
    /// snapshots produce empty or zeroed sections.
    pub fn derive(
        snapshot: &HostSnapshot,
        engine: &mut Engine,
        elapsed_secs: f64,
        sort: ProcessSort,
    ) -> Self {
        let cpu = normalize_cpu(snapshot);
        engine.cpu_history.push(cpu.average);

        let network = normalize_network(snapshot, engine, elapsed_secs);
        engine.net_up_history.push(network.up_rate);
        engine.net_down_history.push(network.down_rate);

        Self {
            cpu,
            memory: normalize_memory(snapshot),
            sensors: normalize_sensors(snapshot),
            disk: normalize_disk(snapshot),
            network,
            processes: normalize_processes(snapshot, sort),
            uptime_secs: snapshot.uptime_secs,
            sampled_at: Instant::now(),
        }
    }
}

fn normalize_cpu(snapshot: &HostSnapshot) -> CpuData {
    let raw = &snapshot.cpu;
    let cores = raw.core_count.max(1) as f64;
    CpuData {
        per_core: raw.per_core.iter().map(|&p| f64::from(p)).collect(),
        average: f64::from(raw.average),
        frequency_mhz: Some(raw.frequency_mhz).filter(|&f| f > 0),
        core_count: raw.core_count,
        load_avg: raw.load_avg,
        load_percent: raw.load_avg.0 / cores * 100.0,
    }
}

fn normalize_memory(snapshot: &HostSnapshot) -> MemoryData {
    let raw = &snapshot.memory;
    let swap = (raw.swap_total > 0).then(|| SwapData {
        total: raw.swap_total,
        used: raw.swap_used,
        percent: raw.swap_used as f64 / raw.swap_total as f64 * 100.0,
    });

    MemoryData {
        total: raw.total,
        used: raw.used,
        available: raw.available,
        cached: raw.cached,
        buffers: raw.buffers,
        percent: if raw.total > 0 {
            raw.used as f64 / raw.total as f64 * 100.0
        } else {
            0.0
        },
        swap,
    }
}

fn normalize_sensors(snapshot: &HostSnapshot) -> Vec<SensorData> {
    snapshot
        .temperatures
        .iter()
        .map(|reading| SensorData {
            label: reading.label.clone(),
            celsius: f64::from(reading.celsius),
            high: reading.high.map(f64::from),
            critical: reading.critical.map(f64::from),
            band: temperature_band(f64::from(reading.celsius)),
        })
        .collect()
}

fn normalize_disk(snapshot: &HostSnapshot) -> DiskData {
    let partitions = snapshot
        .disk
        .partitions
        .iter()
        .filter(|p| !p.device.contains(LOOP_MARKER) && !p.mount_point.contains(SNAP_MARKER))
        // A partition whose usage could not be read reports zero
        // capacity; skip it silently.
        .filter(|p| p.total > 0)
        .map(|p| {
            let used = p.total.saturating_sub(p.available);
            PartitionData {
                label: mount_label(&p.mount_point),
                mount_point: p.mount_point.clone(),
                used,
                total: p.total,
                percent: used as f64 / p.total as f64 * 100.0,
            }
        })
        .collect();

    DiskData {
        partitions,
        io: snapshot.disk.io,
    }
}

/// Compress a mount point into a short fixed label.
fn mount_label(mount: &str) -> String {
    if mount == "/" {
        "/".to_string()
    } else if mount.contains("home") {
        "~".to_string()
    } else if mount.contains("boot") {
        "B".to_string()
    } else {
        let start = mount.len().saturating_sub(6);
        mount[start..].to_string()
    }
}

fn normalize_network(snapshot: &HostSnapshot, engine: &mut Engine, elapsed_secs: f64) -> NetworkData {
    let raw = &snapshot.network;
    NetworkData {
        up_rate: engine.net_up_rate.sample(raw.bytes_sent as f64, elapsed_secs),
        down_rate: engine.net_down_rate.sample(raw.bytes_recv as f64, elapsed_secs),
        total_sent: raw.bytes_sent,
        total_recv: raw.bytes_recv,
        established: raw.connections.established,
        listening: raw.connections.listening,
        err_in: raw.err_in,
        err_out: raw.err_out,
        drop_in: raw.drop_in,
        drop_out: raw.drop_out,
    }
}

fn normalize_processes(snapshot: &HostSnapshot, sort: ProcessSort) -> ProcessData {
    let mut active: Vec<ProcessRow> = snapshot
        .processes
        .iter()
        .filter(|p| p.cpu_percent > 0.0 || p.mem_percent > 0.0)
        .map(|p| ProcessRow {
            pid: p.pid,
            name: p.name.clone(),
            cpu_percent: f64::from(p.cpu_percent),
            mem_percent: f64::from(p.mem_percent),
        })
        .collect();

    active.sort_by(|a, b| match sort {
        ProcessSort::Cpu => b.cpu_percent.total_cmp(&a.cpu_percent),
        ProcessSort::Memory => b.mem_percent.total_cmp(&a.mem_percent),
        ProcessSort::Pid => b.pid.cmp(&a.pid),
    });

    let total_active = active.len();
    active.truncate(TOP_PROCESSES);

    ProcessData {
        top: active,
        total_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{
        ConnectionCounts, CpuSnapshot, DiskSnapshot, MemorySnapshot, NetworkSnapshot,
        PartitionSnapshot, ProcessSnapshot, TemperatureReading,
    };

    fn partition(device: &str, mount: &str, total: u64, available: u64) -> PartitionSnapshot {
        PartitionSnapshot {
            device: device.to_string(),
            mount_point: mount.to_string(),
            total,
            available,
        }
    }

    fn process(pid: u32, cpu: f32, mem: f32) -> ProcessSnapshot {
        ProcessSnapshot {
            pid,
            name: format!("proc{pid}"),
            cpu_percent: cpu,
            mem_percent: mem,
        }
    }

    #[test]
    fn test_disk_excludes_loop_and_snap_mounts() {
        let snapshot = HostSnapshot {
            disk: DiskSnapshot {
                partitions: vec![
                    partition("/dev/sda1", "/", 100, 40),
                    partition("/dev/loop3", "/var/lib/something", 100, 40),
                    partition("/dev/sdb1", "/snap/core", 100, 40),
                ],
                io: None,
            },
            ..HostSnapshot::default()
        };

        let disk = normalize_disk(&snapshot);
        assert_eq!(disk.partitions.len(), 1);
        assert_eq!(disk.partitions[0].mount_point, "/");
        assert_eq!(disk.partitions[0].used, 60);
        assert_eq!(disk.partitions[0].percent, 60.0);
    }

    #[test]
    fn test_disk_skips_unreadable_partition() {
        // Zero capacity is how a denied usage read surfaces.
        let snapshot = HostSnapshot {
            disk: DiskSnapshot {
                partitions: vec![partition("/dev/sdc1", "/mnt/locked", 0, 0)],
                io: None,
            },
            ..HostSnapshot::default()
        };
        assert!(normalize_disk(&snapshot).partitions.is_empty());
    }

    #[test]
    fn test_mount_labels() {
        assert_eq!(mount_label("/"), "/");
        assert_eq!(mount_label("/home/user"), "~");
        assert_eq!(mount_label("/boot/efi"), "B");
        assert_eq!(mount_label("/mnt/storage"), "torage");
    }

    #[test]
    fn test_idle_processes_excluded_even_when_listed() {
        let snapshot = HostSnapshot {
            processes: vec![process(1, 0.0, 0.0), process(2, 1.5, 0.0), process(3, 0.0, 2.0)],
            ..HostSnapshot::default()
        };

        let data = normalize_processes(&snapshot, ProcessSort::Cpu);
        assert_eq!(data.total_active, 2);
        assert!(data.top.iter().all(|p| p.pid != 1));
    }

    #[test]
    fn test_top_processes_sorted_by_cpu_and_capped() {
        let processes: Vec<ProcessSnapshot> =
            (0..20).map(|i| process(i, i as f32, 1.0)).collect();
        let snapshot = HostSnapshot {
            processes,
            ..HostSnapshot::default()
        };

        let data = normalize_processes(&snapshot, ProcessSort::Cpu);
        assert_eq!(data.top.len(), TOP_PROCESSES);
        assert_eq!(data.total_active, 20);
        assert_eq!(data.top[0].pid, 19);
        assert!(data.top.windows(2).all(|w| w[0].cpu_percent >= w[1].cpu_percent));
    }

    #[test]
    fn test_process_sort_by_memory() {
        let snapshot = HostSnapshot {
            processes: vec![process(1, 9.0, 1.0), process(2, 1.0, 9.0)],
            ..HostSnapshot::default()
        };
        let data = normalize_processes(&snapshot, ProcessSort::Memory);
        assert_eq!(data.top[0].pid, 2);
    }

    #[test]
    fn test_swap_present_only_with_capacity() {
        let with_swap = HostSnapshot {
            memory: MemorySnapshot {
                total: 100,
                used: 50,
                swap_total: 200,
                swap_used: 50,
                ..MemorySnapshot::default()
            },
            ..HostSnapshot::default()
        };
        let memory = normalize_memory(&with_swap);
        assert_eq!(memory.percent, 50.0);
        let swap = memory.swap.expect("swap capacity present");
        assert_eq!(swap.percent, 25.0);

        let without_swap = HostSnapshot::default();
        assert!(normalize_memory(&without_swap).swap.is_none());
    }

    #[test]
    fn test_sensor_banding() {
        let snapshot = HostSnapshot {
            temperatures: vec![
                TemperatureReading {
                    label: "coretemp".into(),
                    celsius: 38.0,
                    high: None,
                    critical: None,
                },
                TemperatureReading {
                    label: "nvme".into(),
                    celsius: 85.0,
                    high: Some(90.0),
                    critical: Some(100.0),
                },
            ],
            ..HostSnapshot::default()
        };

        let sensors = normalize_sensors(&snapshot);
        assert_eq!(sensors[0].band, SeverityBand::Good);
        assert_eq!(sensors[1].band, SeverityBand::Critical);
        assert_eq!(sensors[1].high, Some(90.0));
    }

    #[test]
    fn test_network_rates_flow_through_engine() {
        let mut engine = Engine::new();
        let first = HostSnapshot {
            network: NetworkSnapshot {
                bytes_sent: 1000,
                bytes_recv: 4000,
                ..NetworkSnapshot::default()
            },
            ..HostSnapshot::default()
        };
        let second = HostSnapshot {
            network: NetworkSnapshot {
                bytes_sent: 1500,
                bytes_recv: 6000,
                ..NetworkSnapshot::default()
            },
            ..HostSnapshot::default()
        };

        let data = DashboardData::derive(&first, &mut engine, 1.0, ProcessSort::Cpu);
        assert_eq!(data.network.up_rate, 0.0);
        assert_eq!(engine.net_up_history.len(), 1);

        let data = DashboardData::derive(&second, &mut engine, 1.0, ProcessSort::Cpu);
        assert_eq!(data.network.up_rate, 500.0);
        assert_eq!(data.network.down_rate, 2000.0);
        assert_eq!(engine.cpu_history.len(), 2);
        assert_eq!(engine.net_down_history.values(), vec![0.0, 2000.0]);
    }

    #[test]
    fn test_error_line_visibility() {
        let clean = NetworkData {
            up_rate: 0.0,
            down_rate: 0.0,
            total_sent: 0,
            total_recv: 0,
            established: 0,
            listening: 0,
            err_in: 0,
            err_out: 0,
            drop_in: 0,
            drop_out: 0,
        };
        assert!(!clean.has_errors());
        assert!(NetworkData { drop_out: 1, ..clean }.has_errors());
    }

    #[test]
    fn test_connection_counts_degrade_to_zero() {
        // A denied listing reaches the normalizer as zero counts and is
        // passed through, not treated as an error.
        let snapshot = HostSnapshot {
            network: NetworkSnapshot {
                connections: ConnectionCounts::default(),
                ..NetworkSnapshot::default()
            },
            ..HostSnapshot::default()
        };
        let mut engine = Engine::new();
        let data = normalize_network(&snapshot, &mut engine, 1.0);
        assert_eq!(data.established, 0);
        assert_eq!(data.listening, 0);
    }

    #[test]
    fn test_load_percent_scales_by_core_count() {
        let snapshot = HostSnapshot {
            cpu: CpuSnapshot {
                core_count: 4,
                load_avg: (2.0, 1.0, 0.5),
                ..CpuSnapshot::default()
            },
            ..HostSnapshot::default()
        };
        let cpu = normalize_cpu(&snapshot);
        assert_eq!(cpu.load_percent, 50.0);
    }

    #[test]
    fn test_zero_frequency_is_absent() {
        let cpu = normalize_cpu(&HostSnapshot::default());
        assert_eq!(cpu.frequency_mhz, None);
    }
}
