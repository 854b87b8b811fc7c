//! Production metrics provider backed by `sysinfo` and `/proc`.

use sysinfo::{Components, Disks, ProcessesToUpdate, System};
use tracing::debug;

use super::procfs;
use super::snapshot::{
    CpuSnapshot, DiskSnapshot, HostSnapshot, MemorySnapshot, NetworkSnapshot, PartitionSnapshot,
    ProcessSnapshot, TemperatureReading,
};

/// Reads live host metrics.
///
/// Holds a reusable `sysinfo::System` so repeated sampling doesn't
/// reallocate every tick. CPU usage needs two refreshes for a meaningful
/// delta, so construction performs a priming refresh; the first real
/// sample then has a baseline. Disk and sensor lists are re-enumerated
/// per sample - mounts and sensors come and go at runtime.
pub struct SystemProvider {
    sys: System,
}

impl SystemProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        Self { sys }
    }

    fn cpu(&self) -> CpuSnapshot {
        let load = System::load_average();
        CpuSnapshot {
            per_core: self.sys.cpus().iter().map(|c| c.cpu_usage()).collect(),
            average: self.sys.global_cpu_usage(),
            frequency_mhz: self.sys.cpus().first().map_or(0, |c| c.frequency()),
            core_count: self.sys.cpus().len(),
            load_avg: (load.one, load.five, load.fifteen),
        }
    }

    fn memory(&self) -> MemorySnapshot {
        let extra = procfs::read_meminfo_extra().unwrap_or_default();
        MemorySnapshot {
            total: self.sys.total_memory(),
            used: self.sys.used_memory(),
            available: self.sys.available_memory(),
            cached: extra.cached,
            buffers: extra.buffers,
            swap_total: self.sys.total_swap(),
            swap_used: self.sys.used_swap(),
        }
    }

    fn temperatures(&self) -> Vec<TemperatureReading> {
        let components = Components::new_with_refreshed_list();
        components
            .list()
            .iter()
            .map(|component| TemperatureReading {
                label: component.label().to_string(),
                celsius: component.temperature(),
                // sysinfo reports 0 for limits it couldn't read.
                high: Some(component.max()).filter(|&t| t > 0.0),
                critical: component.critical().filter(|&t| t > 0.0),
            })
            .collect()
    }

    fn disk(&self) -> DiskSnapshot {
        let disks = Disks::new_with_refreshed_list();
        let partitions = disks
            .list()
            .iter()
            .map(|disk| PartitionSnapshot {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                total: disk.total_space(),
                available: disk.available_space(),
            })
            .collect();

        DiskSnapshot {
            partitions,
            io: procfs::read_diskstats(),
        }
    }

    fn network(&self) -> NetworkSnapshot {
        let totals = procfs::read_net_dev().unwrap_or_default();
        NetworkSnapshot {
            bytes_sent: totals.bytes_sent,
            bytes_recv: totals.bytes_recv,
            err_in: totals.err_in,
            err_out: totals.err_out,
            drop_in: totals.drop_in,
            drop_out: totals.drop_out,
            connections: procfs::read_connection_counts(),
        }
    }

    fn processes(&self) -> Vec<ProcessSnapshot> {
        let total_memory = self.sys.total_memory().max(1);
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessSnapshot {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                cpu_percent: process.cpu_usage(),
                mem_percent: (process.memory() as f64 / total_memory as f64 * 100.0) as f32,
            })
            .collect()
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl super::MetricsProvider for SystemProvider {
    fn sample(&mut self) -> HostSnapshot {
        self.sys.refresh_cpu_all();
        self.sys.refresh_memory();
        // remove_dead=true: a process that vanished since the last tick
        // simply drops out of the listing.
        self.sys.refresh_processes(ProcessesToUpdate::All, true);

        let snapshot = HostSnapshot {
            cpu: self.cpu(),
            memory: self.memory(),
            temperatures: self.temperatures(),
            disk: self.disk(),
            network: self.network(),
            processes: self.processes(),
            uptime_secs: System::uptime(),
        };
        debug!(
            cores = snapshot.cpu.core_count,
            processes = snapshot.processes.len(),
            "sampled host"
        );
        snapshot
    }

    fn description(&self) -> &str {
        "live host"
    }
}
