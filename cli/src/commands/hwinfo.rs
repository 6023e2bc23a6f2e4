use anyhow::Result;
use hwprobe::{CacheSlot, CpuTopology, MemoryInfo};
use serde::Serialize;

#[derive(Serialize)]
struct Report {
    caches: Vec<CacheSlot>,
    cpu: CpuTopology,
    memory: MemoryInfo,
}

/// Print cache, CPU and memory information for the running machine.
pub fn report(json: bool) -> Result<()> {
    let caches = hwprobe::cache_sizes()?;
    let cpu = hwprobe::cpu_topology()?;
    let memory = hwprobe::memory_info()?;

    if json {
        let report = Report { caches, cpu, memory };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for slot in &caches {
        println!("L{} cache size: {} KiB", slot.index, slot.size_kib);
    }
    match &cpu.model {
        Some(model) => println!("cpu: {model} ({} cores, {} threads)", cpu.cores, cpu.threads),
        None => println!("cpu: {} cores, {} threads", cpu.cores, cpu.threads),
    }
    println!(
        "memory: {} KiB total, {} KiB available",
        memory.total_kib, memory.available_kib
    );
    Ok(())
}
