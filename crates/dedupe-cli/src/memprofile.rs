//! Minimal memory-usage sampling via `/proc/self/status`, for `--memprofile`.
//! No external profiling crate: this reads the same two fields the original
//! tool's `runtime.ReadMemStats`-based profiling reported, just sourced from
//! the kernel's own accounting instead of the allocator's.

#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct MemSample {
    pub vm_hwm_kb: Option<u64>,
    pub vm_rss_kb: Option<u64>,
}

pub fn sample() -> MemSample {
    let status = std::fs::read_to_string("/proc/self/status").unwrap_or_default();
    let mut sample = MemSample::default();
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmHWM:") {
            sample.vm_hwm_kb = parse_kb_field(rest);
        } else if let Some(rest) = line.strip_prefix("VmRSS:") {
            sample.vm_rss_kb = parse_kb_field(rest);
        }
    }
    sample
}

fn parse_kb_field(rest: &str) -> Option<u64> {
    rest.trim().split_whitespace().next()?.parse().ok()
}
