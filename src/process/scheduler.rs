//! Ready-queue waiting time simulation.
//!
//! # Algorithm
//!
//! Non-preemptive policies (FCFS, SJF, priority) pick a run order and apply
//! the recurrence `wait[k] = wait[k-1] + burst[k-1]` along it. Round-robin
//! cycles over the queue in arrival order, granting at most one quantum per
//! turn; a process's wait is its completion time minus its burst.
//!
//! # Complexity
//! O(n log n) for the sorting policies, O(total_burst / quantum + n) per
//! round-robin run.

use log::debug;

use super::ProcessAlgorithm;
use crate::error::Result;
use crate::models::{Process, ProcessConfig, WaitReport};
use crate::validation::{first_error, validate_process_config, validate_processes};

/// CPU scheduler over a ready queue.
///
/// # Example
/// ```
/// use u_ossched::models::Process;
/// use u_ossched::process::ProcessScheduler;
///
/// let mut cpu = ProcessScheduler::new();
/// cpu.add(Process::new("P1", 24)).unwrap();
/// cpu.add(Process::new("P2", 3)).unwrap();
/// cpu.add(Process::new("P3", 3)).unwrap();
///
/// assert!((cpu.fcfs().average_wait() - 17.0).abs() < 1e-10);
/// assert!((cpu.sjf().average_wait() - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessScheduler {
    ready_queue: Vec<Process>,
    quantum: i64,
}

impl ProcessScheduler {
    /// Creates an empty scheduler with the default quantum.
    pub fn new() -> Self {
        Self {
            ready_queue: Vec::new(),
            quantum: ProcessConfig::DEFAULT_QUANTUM,
        }
    }

    /// Creates an empty scheduler from a configuration value.
    pub fn from_config(config: &ProcessConfig) -> Result<Self> {
        first_error(validate_process_config(config))?;
        Ok(Self {
            ready_queue: Vec::new(),
            quantum: config.quantum,
        })
    }

    /// Round-robin quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Appends a process to the ready queue.
    ///
    /// # Errors
    /// [`Error::InvalidBurst`](crate::Error::InvalidBurst) if the burst is
    /// negative.
    pub fn add(&mut self, process: Process) -> Result<()> {
        first_error(validate_processes(std::slice::from_ref(&process)))?;
        self.ready_queue.push(process);
        Ok(())
    }

    /// Appends several processes, stopping at the first invalid one.
    pub fn extend(&mut self, processes: impl IntoIterator<Item = Process>) -> Result<()> {
        for process in processes {
            self.add(process)?;
        }
        Ok(())
    }

    /// Empties the ready queue.
    pub fn clear(&mut self) {
        self.ready_queue.clear();
    }

    /// Processes in arrival order.
    pub fn processes(&self) -> &[Process] {
        &self.ready_queue
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.ready_queue.len()
    }

    /// Whether the ready queue is empty.
    pub fn is_empty(&self) -> bool {
        self.ready_queue.is_empty()
    }

    /// First-come, first-served.
    pub fn fcfs(&self) -> WaitReport {
        let order: Vec<usize> = (0..self.ready_queue.len()).collect();
        self.sequential(ProcessAlgorithm::Fcfs, &order)
    }

    /// Shortest job first. Equal bursts keep arrival order.
    pub fn sjf(&self) -> WaitReport {
        let mut order: Vec<usize> = (0..self.ready_queue.len()).collect();
        order.sort_by_key(|&i| self.ready_queue[i].burst);
        self.sequential(ProcessAlgorithm::Sjf, &order)
    }

    /// Priority scheduling (lower value first). Equal priorities keep
    /// arrival order.
    pub fn priority(&self) -> WaitReport {
        let mut order: Vec<usize> = (0..self.ready_queue.len()).collect();
        order.sort_by_key(|&i| self.ready_queue[i].priority);
        self.sequential(ProcessAlgorithm::Priority, &order)
    }

    /// Round-robin with the configured quantum.
    pub fn round_robin(&self) -> WaitReport {
        let bursts: Vec<i64> = self.ready_queue.iter().map(|p| p.burst).collect();
        let mut remaining = bursts.clone();
        let mut waits = vec![0; bursts.len()];
        let mut time: i64 = 0;

        loop {
            let mut active = false;
            for i in 0..remaining.len() {
                if remaining[i] <= 0 {
                    continue;
                }
                active = true;
                if remaining[i] > self.quantum {
                    time = time.saturating_add(self.quantum);
                    remaining[i] -= self.quantum;
                } else {
                    time = time.saturating_add(remaining[i]);
                    waits[i] = time - bursts[i];
                    remaining[i] = 0;
                }
            }
            if !active {
                break;
            }
        }

        self.report(ProcessAlgorithm::RoundRobin, waits)
    }

    /// Runs a built-in policy selected at runtime.
    pub fn run(&self, algorithm: ProcessAlgorithm) -> WaitReport {
        match algorithm {
            ProcessAlgorithm::Fcfs => self.fcfs(),
            ProcessAlgorithm::Sjf => self.sjf(),
            ProcessAlgorithm::Priority => self.priority(),
            ProcessAlgorithm::RoundRobin => self.round_robin(),
        }
    }

    /// Runs every built-in policy.
    pub fn run_all(&self) -> Vec<WaitReport> {
        ProcessAlgorithm::ALL.iter().map(|&a| self.run(a)).collect()
    }

    /// Runs processes back to back in `order` (indices into the queue).
    fn sequential(&self, algorithm: ProcessAlgorithm, order: &[usize]) -> WaitReport {
        let mut waits = vec![0; self.ready_queue.len()];
        let mut elapsed: i64 = 0;
        for &i in order {
            waits[i] = elapsed;
            elapsed = elapsed.saturating_add(self.ready_queue[i].burst);
        }
        self.report(algorithm, waits)
    }

    fn report(&self, algorithm: ProcessAlgorithm, waits: Vec<i64>) -> WaitReport {
        let report = WaitReport::new(algorithm.name(), waits);
        debug!(
            "{}: {} processes, average wait {:.3}",
            algorithm,
            self.ready_queue.len(),
            report.average_wait()
        );
        report
    }
}

impl Default for ProcessScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn textbook() -> ProcessScheduler {
        let mut cpu = ProcessScheduler::new();
        cpu.extend([
            Process::new("P1", 24),
            Process::new("P2", 3),
            Process::new("P3", 3),
        ])
        .unwrap();
        cpu
    }

    fn prioritized() -> ProcessScheduler {
        let mut cpu = ProcessScheduler::new();
        cpu.extend([
            Process::new("P1", 10).with_priority(3),
            Process::new("P2", 1).with_priority(1),
            Process::new("P3", 2).with_priority(4),
            Process::new("P4", 1).with_priority(5),
            Process::new("P5", 5).with_priority(2),
        ])
        .unwrap();
        cpu
    }

    #[test]
    fn test_fcfs() {
        let report = textbook().fcfs();
        assert_eq!(report.waits, vec![0, 24, 27]);
        assert!((report.average_wait() - 17.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf() {
        let report = textbook().sjf();
        // Indexed by arrival: P1 runs last
        assert_eq!(report.waits, vec![6, 0, 3]);
        assert!((report.average_wait() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority() {
        let report = prioritized().priority();
        assert_eq!(report.waits, vec![6, 0, 16, 18, 1]);
        assert!((report.average_wait() - 8.2).abs() < 1e-10);
    }

    #[test]
    fn test_priority_keeps_queue_order() {
        let cpu = prioritized();
        let _ = cpu.priority();
        let ids: Vec<&str> = cpu.processes().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3", "P4", "P5"]);
    }

    #[test]
    fn test_round_robin() {
        let report = textbook().round_robin();
        // P2 done at 7, P3 at 10, P1 at 30
        assert_eq!(report.waits, vec![6, 4, 7]);
        assert!((report.average_wait() - 17.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_robin_custom_quantum() {
        let mut cpu = ProcessScheduler::from_config(&ProcessConfig::default().with_quantum(10))
            .unwrap();
        cpu.extend([Process::new("A", 15), Process::new("B", 5)]).unwrap();
        // A runs 0-10, B 10-15, A 15-20
        assert_eq!(cpu.round_robin().waits, vec![5, 10]);
    }

    #[test]
    fn test_zero_burst() {
        let mut cpu = ProcessScheduler::new();
        cpu.extend([Process::new("idle", 0), Process::new("work", 5)])
            .unwrap();
        assert_eq!(cpu.round_robin().waits, vec![0, 0]);
        assert_eq!(cpu.fcfs().waits, vec![0, 0]);
    }

    #[test]
    fn test_huge_bursts_saturate() {
        let mut cpu = ProcessScheduler::new();
        cpu.extend([
            Process::new("A", i64::MAX),
            Process::new("B", i64::MAX),
            Process::new("C", 1),
        ])
        .unwrap();
        let report = cpu.fcfs();
        assert_eq!(report.waits, vec![0, i64::MAX, i64::MAX]);
        assert_eq!(report.total_wait(), i64::MAX);
        assert!(report.average_wait() > 0.0);
    }

    #[test]
    fn test_empty_queue() {
        let cpu = ProcessScheduler::new();
        assert!(cpu.is_empty());
        for report in cpu.run_all() {
            assert!(report.waits.is_empty());
            assert!((report.average_wait() - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_clear() {
        let mut cpu = textbook();
        assert_eq!(cpu.len(), 3);
        cpu.clear();
        assert!(cpu.is_empty());
    }

    #[test]
    fn test_rejects_negative_burst() {
        let mut cpu = ProcessScheduler::new();
        assert_eq!(
            cpu.add(Process::new("bad", -3)),
            Err(Error::InvalidBurst {
                id: "bad".into(),
                burst: -3
            })
        );
        assert!(cpu.is_empty());
    }

    #[test]
    fn test_rejects_bad_quantum() {
        let config = ProcessConfig::default().with_quantum(0);
        assert_eq!(
            ProcessScheduler::from_config(&config).unwrap_err(),
            Error::InvalidQuantum(0)
        );
    }

    #[test]
    fn test_run_all_names() {
        let names: Vec<String> = textbook().run_all().into_iter().map(|r| r.policy).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "PRIORITY", "RR"]);
    }
}
