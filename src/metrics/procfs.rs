//! Thin `/proc` readers for counters sysinfo does not expose.
//!
//! Each reader pairs a pure text parser (unit-tested against captured
//! fixtures) with a filesystem wrapper that degrades to `None`/zeros when
//! the file is missing or unreadable - a non-Linux host or a denied read
//! never fails a tick.

use std::fs;

use super::snapshot::{ConnectionCounts, DiskIoTotals};

/// Bytes per `/proc/diskstats` sector.
const SECTOR_SIZE: u64 = 512;

/// Cached/buffered memory in bytes, from `/proc/meminfo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfoExtra {
    pub cached: u64,
    pub buffers: u64,
}

/// Aggregate interface counters from `/proc/net/dev`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetDevTotals {
    pub bytes_recv: u64,
    pub bytes_sent: u64,
    pub err_in: u64,
    pub err_out: u64,
    pub drop_in: u64,
    pub drop_out: u64,
}

pub fn read_meminfo_extra() -> Option<MemInfoExtra> {
    fs::read_to_string("/proc/meminfo").ok().map(|text| parse_meminfo(&text))
}

/// Parse `Cached:` and `Buffers:` (reported in kB) out of meminfo text.
pub fn parse_meminfo(text: &str) -> MemInfoExtra {
    let mut extra = MemInfoExtra::default();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("Cached:") {
            extra.cached = parse_kb(rest);
        } else if let Some(rest) = line.strip_prefix("Buffers:") {
            extra.buffers = parse_kb(rest);
        }
    }
    extra
}

fn parse_kb(rest: &str) -> u64 {
    rest.split_whitespace()
        .next()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(0, |kb| kb * 1024)
}

pub fn read_net_dev() -> Option<NetDevTotals> {
    fs::read_to_string("/proc/net/dev").ok().map(|text| parse_net_dev(&text))
}

/// Sum receive/transmit counters across interfaces, skipping loopback.
///
/// Column layout per interface line:
/// `bytes packets errs drop fifo frame compressed multicast` for receive,
/// then the same eight for transmit.
pub fn parse_net_dev(text: &str) -> NetDevTotals {
    let mut totals = NetDevTotals::default();

    for line in text.lines().skip(2) {
        let Some((iface, counters)) = line.split_once(':') else {
            continue;
        };
        if iface.trim() == "lo" {
            continue;
        }

        let fields: Vec<u64> = counters
            .split_whitespace()
            .map(|f| f.parse().unwrap_or(0))
            .collect();
        if fields.len() < 12 {
            continue;
        }

        totals.bytes_recv += fields[0];
        totals.err_in += fields[2];
        totals.drop_in += fields[3];
        totals.bytes_sent += fields[8];
        totals.err_out += fields[10];
        totals.drop_out += fields[11];
    }

    totals
}

/// Count TCP connections by state across `/proc/net/tcp` and `tcp6`.
///
/// A denied or missing listing degrades to zero counts.
pub fn read_connection_counts() -> ConnectionCounts {
    let mut counts = ConnectionCounts::default();
    for path in ["/proc/net/tcp", "/proc/net/tcp6"] {
        if let Ok(text) = fs::read_to_string(path) {
            let (established, listening) = parse_tcp_states(&text);
            counts.established += established;
            counts.listening += listening;
        }
    }
    counts
}

/// Classify socket table rows by the hex state column
/// (`01` = ESTABLISHED, `0A` = LISTEN).
pub fn parse_tcp_states(text: &str) -> (usize, usize) {
    let mut established = 0;
    let mut listening = 0;

    for line in text.lines().skip(1) {
        match line.split_whitespace().nth(3) {
            Some("01") => established += 1,
            Some("0A") => listening += 1,
            _ => {}
        }
    }

    (established, listening)
}

pub fn read_diskstats() -> Option<DiskIoTotals> {
    fs::read_to_string("/proc/diskstats").ok().map(|text| parse_diskstats(&text))
}

/// Sum lifetime sectors read/written over whole physical devices.
///
/// Partitions (minor != 0) are skipped to avoid double counting, as are
/// loop and ram devices.
pub fn parse_diskstats(text: &str) -> DiskIoTotals {
    let mut totals = DiskIoTotals::default();

    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 10 {
            continue;
        }
        if fields[1] != "0" {
            continue;
        }
        let name = fields[2];
        if name.starts_with("loop") || name.starts_with("ram") {
            continue;
        }

        let sectors_read: u64 = fields[5].parse().unwrap_or(0);
        let sectors_written: u64 = fields[9].parse().unwrap_or(0);
        totals.read_bytes += sectors_read * SECTOR_SIZE;
        totals.written_bytes += sectors_written * SECTOR_SIZE;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 9999999    100    0    0    0     0          0         0  9999999    100    0    0    0     0       0          0
  eth0: 1000000    500    2    1    0     0          0         0   400000    300    1    3    0     0       0          0
 wlan0:  250000    200    0    0    0     0          0         0   150000    100    0    0    0     0       0          0
";

    #[test]
    fn test_parse_net_dev_sums_and_skips_loopback() {
        let totals = parse_net_dev(NET_DEV);
        assert_eq!(totals.bytes_recv, 1_250_000);
        assert_eq!(totals.bytes_sent, 550_000);
        assert_eq!(totals.err_in, 2);
        assert_eq!(totals.err_out, 1);
        assert_eq!(totals.drop_in, 1);
        assert_eq!(totals.drop_out, 3);
    }

    #[test]
    fn test_parse_net_dev_empty() {
        assert_eq!(parse_net_dev(""), NetDevTotals::default());
    }

    const TCP: &str = "\
  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 0100007F:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000  1000        0 12345 1 0000000000000000 100 0 0 10 0
   1: 0A00020F:BC06 5BC6AE28:01BB 01 00000000:00000000 02:000003A8 00000000  1000        0 23456 2 0000000000000000 25 4 30 10 -1
   2: 0A00020F:BC08 5BC6AE28:01BB 06 00000000:00000000 03:00000F3C 00000000     0        0 0 3 0000000000000000
   3: 00000000:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 34567 1 0000000000000000 100 0 0 10 0
";

    #[test]
    fn test_parse_tcp_states() {
        let (established, listening) = parse_tcp_states(TCP);
        assert_eq!(established, 1);
        assert_eq!(listening, 2);
    }

    const MEMINFO: &str = "\
MemTotal:       16314444 kB
MemFree:         1868784 kB
MemAvailable:    9968044 kB
Buffers:          524288 kB
Cached:          7340032 kB
SwapCached:            0 kB
";

    #[test]
    fn test_parse_meminfo_extra() {
        let extra = parse_meminfo(MEMINFO);
        assert_eq!(extra.cached, 7_340_032 * 1024);
        assert_eq!(extra.buffers, 524_288 * 1024);
    }

    const DISKSTATS: &str = "\
   7       0 loop0 100 0 2000 0 0 0 0 0 0 0 0
   8       0 sda 26530 12611 1usable 21968 0 0 0 0 0 0 0
   8       0 sdb 26530 12611 2000000 21968 15082 9226 1000000 122 0 0 0
   8       1 sdb1 26000 12000 1900000 21000 15000 9200 990000 120 0 0 0
 259       0 nvme0n1 99590 73060 4000000 31014 161813 171492 3000000 79326 0 0 0
   1       0 ram0 0 0 0 0 0 0 0 0 0 0 0
";

    #[test]
    fn test_parse_diskstats_whole_physical_devices_only() {
        let totals = parse_diskstats(DISKSTATS);
        // sdb + nvme0n1; loop0/ram0 excluded, sdb1 partition excluded,
        // and the garbled sda line parses as zero sectors.
        assert_eq!(totals.read_bytes, (2_000_000 + 4_000_000) * SECTOR_SIZE);
        assert_eq!(totals.written_bytes, (1_000_000 + 3_000_000) * SECTOR_SIZE);
    }
}
