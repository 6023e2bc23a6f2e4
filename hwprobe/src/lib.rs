//! Hardware probes for sizing arithmetic workloads on Linux.
//!
//! Reads CPU cache sizes from sysfs, core and thread counts from
//! `/proc/cpuinfo`, and memory figures from `/proc/meminfo`. Each probe
//! has a `_from` twin taking an explicit path so tests can point it at
//! a fixture tree instead of the live system.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const CACHE_DIR: &str = "/sys/devices/system/cpu/cpu0/cache";
const CPUINFO: &str = "/proc/cpuinfo";
const MEMINFO: &str = "/proc/meminfo";

/// Highest sysfs cache index probed (L1 data, L1 instruction, L2, L3).
const MAX_CACHE_INDEX: u32 = 3;

#[derive(Debug)]
pub enum ProbeError {
    Io(std::io::Error),
    Parse(String),
}

impl From<std::io::Error> for ProbeError {
    fn from(e: std::io::Error) -> Self {
        ProbeError::Io(e)
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Io(e) => write!(f, "i/o error: {e}"),
            ProbeError::Parse(msg) => write!(f, "malformed hardware data: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// One cache as exposed under `cache/indexN`. The index is the sysfs
/// slot, not the cache level: index 0 and 1 are usually the two L1
/// caches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSlot {
    pub index: u32,
    pub size_kib: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuTopology {
    pub cores: u32,
    pub threads: u32,
    pub model: Option<String>,
}

/// Memory figures in KiB, as reported by `/proc/meminfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_kib: u64,
    pub available_kib: u64,
}

/// Cache sizes of the boot CPU, ordered by sysfs index. Indices whose
/// directory is absent are skipped, so the result can be empty on
/// exotic kernels.
pub fn cache_sizes() -> Result<Vec<CacheSlot>, ProbeError> {
    cache_sizes_from(Path::new(CACHE_DIR))
}

pub fn cache_sizes_from(cache_dir: &Path) -> Result<Vec<CacheSlot>, ProbeError> {
    let mut slots = Vec::new();
    for index in 0..=MAX_CACHE_INDEX {
        let path = cache_dir.join(format!("index{index}")).join("size");
        if !path.exists() {
            continue;
        }
        let raw = fs::read_to_string(&path)?;
        slots.push(CacheSlot {
            index,
            size_kib: parse_size_kib(raw.trim())?,
        });
    }
    Ok(slots)
}

/// Core and thread counts plus the CPU model string.
pub fn cpu_topology() -> Result<CpuTopology, ProbeError> {
    cpu_topology_from(Path::new(CPUINFO))
}

pub fn cpu_topology_from(cpuinfo: &Path) -> Result<CpuTopology, ProbeError> {
    let content = fs::read_to_string(cpuinfo)?;
    let mut threads = 0u32;
    let mut cores = None;
    let mut model = None;
    for line in content.lines() {
        if line.starts_with("processor") {
            threads += 1;
        } else if cores.is_none() && line.starts_with("cpu cores") {
            let value = field_value(line)?;
            cores = Some(value.parse::<u32>().map_err(|_| {
                ProbeError::Parse(format!("bad core count {value:?}"))
            })?);
        } else if model.is_none() && line.starts_with("model name") {
            model = Some(field_value(line)?.to_string());
        }
    }
    if threads == 0 {
        return Err(ProbeError::Parse("no processor entries".to_string()));
    }
    Ok(CpuTopology {
        // virtualized guests often omit "cpu cores"
        cores: cores.unwrap_or(threads),
        threads,
        model,
    })
}

/// Total and available memory.
pub fn memory_info() -> Result<MemoryInfo, ProbeError> {
    memory_info_from(Path::new(MEMINFO))
}

pub fn memory_info_from(meminfo: &Path) -> Result<MemoryInfo, ProbeError> {
    let content = fs::read_to_string(meminfo)?;
    Ok(MemoryInfo {
        total_kib: meminfo_field(&content, "MemTotal:")?,
        available_kib: meminfo_field(&content, "MemAvailable:")?,
    })
}

/// The part after the `:` in a `key : value` cpuinfo line.
fn field_value(line: &str) -> Result<&str, ProbeError> {
    line.splitn(2, ':')
        .nth(1)
        .map(str::trim)
        .ok_or_else(|| ProbeError::Parse(format!("missing value in {line:?}")))
}

/// A sysfs cache size such as `32K`, `8M` or `1G`, normalized to KiB.
/// A bare number is already in KiB.
fn parse_size_kib(text: &str) -> Result<u64, ProbeError> {
    let (digits, multiplier) = match text.as_bytes().last() {
        Some(b'K') => (&text[..text.len() - 1], 1),
        Some(b'M') => (&text[..text.len() - 1], 1024),
        Some(b'G') => (&text[..text.len() - 1], 1024 * 1024),
        _ => (text, 1),
    };
    let value: u64 = digits
        .parse()
        .map_err(|_| ProbeError::Parse(format!("bad cache size {text:?}")))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| ProbeError::Parse(format!("cache size out of range {text:?}")))
}

/// A `/proc/meminfo` entry such as `MemTotal:  16331712 kB`.
fn meminfo_field(content: &str, key: &str) -> Result<u64, ProbeError> {
    let line = content
        .lines()
        .find(|l| l.starts_with(key))
        .ok_or_else(|| ProbeError::Parse(format!("missing {key} entry")))?;
    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ProbeError::Parse(format!("missing value in {line:?}")))?;
    value
        .parse()
        .map_err(|_| ProbeError::Parse(format!("bad value in {line:?}")))
}
