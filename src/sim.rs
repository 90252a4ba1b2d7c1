//! The scripted delivery simulation shown on the Lab view.
//!
//! A one-shot sequence of delayed phase transitions:
//!
//! ```text
//! Idle --start--> Scanning --1500ms--> Verifying --1500ms--> Opening --2000ms--> Delivered
//! ```
//!
//! The pending transition is held as an explicit deadline next to the phase
//! and fired by [`Simulation::tick`] from the shell's event loop. Each
//! transition is armed only when its predecessor fires, so the phases can
//! never skip or reorder. `reset` clears the deadline, so no stale
//! transition fires after a reset.
//!
//! There is no failure path: every run that starts completes.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::DeliveryRecord;

/// How long the Scanning phase runs before the key is read.
pub const SCAN_DELAY: Duration = Duration::from_millis(1500);

/// How long identity verification takes.
pub const VERIFY_DELAY: Duration = Duration::from_millis(1500);

/// How long the compartment stays open for the deposit.
pub const OPEN_DELAY: Duration = Duration::from_millis(2000);

const READY_LINE: &str = "STATUS: Ready for connection...";
const RESET_LINE: &str = "STATUS: System reset.";

/// The current step of the delivery simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Scanning,
    Verifying,
    Opening,
    Delivered,
}

impl Phase {
    /// Whether a new run may begin from this phase.
    ///
    /// `Delivered` is a terminal state but also a valid restart point,
    /// identical in effect to `Idle`.
    pub fn can_start(self) -> bool {
        matches!(self, Self::Idle | Self::Delivered)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Scanning => "SCANNING",
            Self::Verifying => "VERIFYING",
            Self::Opening => "OPENING",
            Self::Delivered => "DELIVERED",
        }
    }
}

/// What a fired transition asks the shell to do.
#[derive(Debug)]
pub enum SimEvent {
    /// The simulation moved to the given phase; nothing else to mirror.
    Advanced(Phase),

    /// The run finished. The minted record belongs in the delivery history.
    Completed(DeliveryRecord),
}

/// The simulation state machine: phase, armed deadline, terminal log, and
/// the cosmetic unlock flag for the compartment door.
#[derive(Debug)]
pub struct Simulation {
    phase: Phase,
    deadline: Option<Instant>,
    log: Vec<String>,
    unlocked: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            deadline: None,
            log: vec![READY_LINE.to_string()],
            unlocked: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The terminal log lines, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Whether the compartment door is currently open.
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether a run is in flight.
    pub fn running(&self) -> bool {
        !self.phase.can_start()
    }

    /// Begins a run. No-op while a run is already in flight.
    ///
    /// Returns whether a run actually started.
    pub fn start(&mut self, now: Instant) -> bool {
        if !self.phase.can_start() {
            debug!(phase = self.phase.label(), "start rejected, run in flight");
            return false;
        }
        self.log.clear();
        self.log.push("INITIALIZING...".to_string());
        self.phase = Phase::Scanning;
        self.unlocked = false;
        self.deadline = Some(now + SCAN_DELAY);
        debug!("simulation started");
        true
    }

    /// Forces the simulation back to `Idle` and replaces the terminal log
    /// with a single reset message. Disarms any pending transition, so a
    /// tick after reset is a no-op.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.deadline = None;
        self.unlocked = false;
        self.log.clear();
        self.log.push(RESET_LINE.to_string());
        debug!("simulation reset");
    }

    /// Fires the armed transition if its deadline has passed.
    ///
    /// At most one transition fires per call; the next one is armed from
    /// the fired deadline, so a full run lands at t+1500ms, t+3000ms, and
    /// t+5000ms regardless of tick cadence.
    pub fn tick(&mut self, now: Instant) -> Option<SimEvent> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        match self.phase {
            Phase::Scanning => {
                self.phase = Phase::Verifying;
                self.log.push("[AUTH] Scanning digital key...".to_string());
                self.deadline = Some(deadline + VERIFY_DELAY);
                debug!(phase = self.phase.label(), "transition fired");
                Some(SimEvent::Advanced(Phase::Verifying))
            }
            Phase::Verifying => {
                self.phase = Phase::Opening;
                self.log
                    .push("[SYS] Identity verified: DHL Node 4".to_string());
                self.unlocked = true;
                self.deadline = Some(deadline + OPEN_DELAY);
                debug!(phase = self.phase.label(), "transition fired");
                Some(SimEvent::Advanced(Phase::Opening))
            }
            Phase::Opening => {
                self.phase = Phase::Delivered;
                self.log
                    .push("[SUCCESS] Package deposited. Vault re-locked.".to_string());
                self.unlocked = false;
                self.deadline = None;
                let record = DeliveryRecord::simulated();
                debug!(package_id = %record.package_id, "simulation completed");
                Some(SimEvent::Completed(record))
            }
            // A deadline is only ever armed for an in-flight phase.
            Phase::Idle | Phase::Delivered => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn new_simulation_is_idle_and_ready() {
        let sim = Simulation::new();
        assert_eq!(sim.phase(), Phase::Idle);
        assert!(!sim.unlocked());
        assert_eq!(sim.log(), [READY_LINE]);
    }

    #[test]
    fn full_run_fires_in_order_at_fixed_offsets() {
        let t0 = Instant::now();
        let mut sim = Simulation::new();
        assert!(sim.start(t0));
        assert_eq!(sim.phase(), Phase::Scanning);
        assert_eq!(sim.log(), ["INITIALIZING..."]);

        // Nothing fires before the first deadline.
        assert!(sim.tick(t0 + ms(1499)).is_none());
        assert_eq!(sim.phase(), Phase::Scanning);

        assert!(matches!(
            sim.tick(t0 + ms(1500)),
            Some(SimEvent::Advanced(Phase::Verifying))
        ));
        assert_eq!(sim.log().len(), 2);
        assert!(!sim.unlocked());

        assert!(matches!(
            sim.tick(t0 + ms(3000)),
            Some(SimEvent::Advanced(Phase::Opening))
        ));
        assert_eq!(sim.log().len(), 3);
        assert!(sim.unlocked());

        let event = sim.tick(t0 + ms(5000));
        let Some(SimEvent::Completed(record)) = event else {
            panic!("expected completion, got {event:?}");
        };
        assert_eq!(record.carrier, "Simulated");
        assert_eq!(sim.phase(), Phase::Delivered);
        assert!(!sim.unlocked());
        assert_eq!(sim.log().len(), 4);

        // Terminal state: nothing more fires.
        assert!(sim.tick(t0 + ms(60_000)).is_none());
    }

    #[test]
    fn one_transition_fires_per_tick_even_when_late() {
        let t0 = Instant::now();
        let mut sim = Simulation::new();
        sim.start(t0);

        // A tick long past every deadline still steps one phase at a time.
        assert!(matches!(
            sim.tick(t0 + ms(10_000)),
            Some(SimEvent::Advanced(Phase::Verifying))
        ));
        assert!(matches!(
            sim.tick(t0 + ms(10_000)),
            Some(SimEvent::Advanced(Phase::Opening))
        ));
        assert!(matches!(
            sim.tick(t0 + ms(10_000)),
            Some(SimEvent::Completed(_))
        ));
    }

    #[test]
    fn start_is_rejected_while_a_run_is_in_flight() {
        let t0 = Instant::now();
        let mut sim = Simulation::new();
        sim.start(t0);
        sim.tick(t0 + ms(1500));
        let log_before = sim.log().to_vec();

        assert!(!sim.start(t0 + ms(2000)));
        assert_eq!(sim.phase(), Phase::Verifying);
        assert_eq!(sim.log(), log_before);

        // The original deadline is untouched by the rejected start.
        assert!(matches!(
            sim.tick(t0 + ms(3000)),
            Some(SimEvent::Advanced(Phase::Opening))
        ));
    }

    #[test]
    fn restart_from_delivered_matches_a_fresh_start() {
        let t0 = Instant::now();
        let mut sim = Simulation::new();
        sim.start(t0);
        for offset in [1500, 3000, 5000] {
            sim.tick(t0 + ms(offset));
        }
        assert_eq!(sim.phase(), Phase::Delivered);

        let t1 = t0 + ms(20_000);
        assert!(sim.start(t1));
        assert_eq!(sim.phase(), Phase::Scanning);
        assert_eq!(sim.log(), ["INITIALIZING..."]);
        assert!(matches!(
            sim.tick(t1 + ms(1500)),
            Some(SimEvent::Advanced(Phase::Verifying))
        ));
    }

    #[test]
    fn reset_disarms_the_pending_transition() {
        let t0 = Instant::now();
        let mut sim = Simulation::new();
        sim.start(t0);
        sim.tick(t0 + ms(3000)); // Scanning -> Verifying
        sim.tick(t0 + ms(3000)); // Verifying -> Opening, unlocked
        assert!(sim.unlocked());

        sim.reset();
        assert_eq!(sim.phase(), Phase::Idle);
        assert!(!sim.unlocked());
        assert_eq!(sim.log(), [RESET_LINE]);

        // Ticking far past the old deadline changes nothing.
        assert!(sim.tick(t0 + ms(60_000)).is_none());
        assert_eq!(sim.phase(), Phase::Idle);
        assert_eq!(sim.log(), [RESET_LINE]);
    }

    #[test]
    fn unlock_flag_spans_exactly_the_opening_window() {
        let t0 = Instant::now();
        let mut sim = Simulation::new();
        assert!(!sim.unlocked());

        sim.start(t0);
        assert!(!sim.unlocked());
        sim.tick(t0 + ms(1500));
        assert!(!sim.unlocked());
        sim.tick(t0 + ms(3000));
        assert!(sim.unlocked());
        sim.tick(t0 + ms(4999));
        assert!(sim.unlocked());
        sim.tick(t0 + ms(5000));
        assert!(!sim.unlocked());
    }
}
