use std::time::{Duration, SystemTime, UNIX_EPOCH};

use sysinfo::{ProcessesToUpdate, System};

/// Source of wall-clock time and of the host process start time.
pub trait ProcessClock {
    fn now(&self) -> SystemTime;

    fn process_started(&self) -> SystemTime;
}

/// Wall clock paired with the start time of the current process.
///
/// The start time is read from the operating system's process table when the clock is
/// constructed. If the process cannot be found there, construction time is used instead.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: SystemTime,
}

impl SystemClock {
    pub fn new() -> Self {
        let started = lookup_process_start().unwrap_or_else(|| {
            tracing::warn!("Process start time unavailable, using current time");
            SystemTime::now()
        });
        Self { started }
    }

    /// Clock whose process start is a known instant.
    pub fn started_at(started: SystemTime) -> Self {
        Self { started }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessClock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn process_started(&self) -> SystemTime {
        self.started
    }
}

/// Start time of the current process, to whole-second precision.
fn lookup_process_start() -> Option<SystemTime> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    let secs = system.process(pid)?.start_time();
    // 0 means the platform did not report it
    if secs == 0 {
        return None;
    }
    tracing::debug!("Process {} started at unix time {}", pid, secs);
    Some(UNIX_EPOCH + Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_started_at() {
        let started = SystemTime::now() - Duration::from_secs(60);
        let clock = SystemClock::started_at(started);

        assert_eq!(clock.process_started(), started);
        assert!(clock.now().duration_since(started).unwrap() >= Duration::from_secs(60));
    }

    #[test]
    fn test_process_start_not_after_construction() {
        let clock = SystemClock::new();
        // Whole-second precision may round the start down, never up past now
        assert!(clock.process_started() <= clock.now());
    }

    #[test]
    fn test_lookup_finds_current_process() {
        let started = lookup_process_start().expect("current process is listed");
        let age = SystemTime::now()
            .duration_since(started)
            .expect("process started in the past");
        assert!(age < Duration::from_secs(24 * 60 * 60));
    }
}
