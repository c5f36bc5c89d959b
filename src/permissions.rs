use crate::error::GateError;
use crate::types::InternalEvent;

/// Result of a gate operation: the capability's new value and the events it fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub enabled: bool,
    pub events: Vec<InternalEvent>,
}

impl GateOutcome {
    fn unchanged(enabled: bool) -> Self {
        Self {
            enabled,
            events: Vec::new(),
        }
    }
}

/// Tracks network and elevated-compute access.
///
/// Compute can only be on while network is on; disabling network force-disables compute
/// first. The compute control additionally has to be unlocked by the story before it
/// accepts an enable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGate {
    network: bool,
    compute: bool,
    compute_unlocked: bool,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network_enabled(&self) -> bool {
        self.network
    }

    pub fn compute_enabled(&self) -> bool {
        self.compute
    }

    /// Whether the compute toggle is currently actionable
    pub fn compute_unlocked(&self) -> bool {
        self.compute_unlocked && self.network
    }

    pub(crate) fn unlock_compute(&mut self) {
        self.compute_unlocked = true;
    }

    pub fn enable_network(&mut self) -> GateOutcome {
        if self.network {
            return GateOutcome::unchanged(true);
        }
        self.network = true;
        GateOutcome {
            enabled: true,
            events: vec![InternalEvent::NetworkEnabled],
        }
    }

    pub fn disable_network(&mut self) -> GateOutcome {
        if !self.network {
            return GateOutcome::unchanged(false);
        }
        let mut events = self.disable_compute().events;
        self.network = false;
        self.compute_unlocked = false;
        events.push(InternalEvent::NetworkDisabled);
        GateOutcome {
            enabled: false,
            events,
        }
    }

    pub fn enable_compute(&mut self) -> Result<GateOutcome, GateError> {
        if !self.network {
            return Err(GateError::NetworkRequired);
        }
        if !self.compute_unlocked {
            return Err(GateError::ComputeLocked);
        }
        if self.compute {
            return Ok(GateOutcome::unchanged(true));
        }
        self.compute = true;
        Ok(GateOutcome {
            enabled: true,
            events: vec![InternalEvent::ComputeEnabled],
        })
    }

    pub fn disable_compute(&mut self) -> GateOutcome {
        if !self.compute {
            return GateOutcome::unchanged(false);
        }
        self.compute = false;
        GateOutcome {
            enabled: false,
            events: vec![InternalEvent::ComputeDisabled],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(gate: &PermissionGate) -> bool {
        !gate.compute_enabled() || gate.network_enabled()
    }

    #[test]
    fn compute_requires_network() {
        let mut gate = PermissionGate::new();
        gate.unlock_compute();
        assert_eq!(gate.enable_compute(), Err(GateError::NetworkRequired));
        assert!(!gate.compute_enabled());
    }

    #[test]
    fn compute_requires_unlock() {
        let mut gate = PermissionGate::new();
        gate.enable_network();
        assert_eq!(gate.enable_compute(), Err(GateError::ComputeLocked));
        gate.unlock_compute();
        let outcome = gate.enable_compute().unwrap();
        assert!(outcome.enabled);
        assert_eq!(outcome.events, vec![InternalEvent::ComputeEnabled]);
    }

    #[test]
    fn disabling_network_forces_compute_off_first() {
        let mut gate = PermissionGate::new();
        gate.enable_network();
        gate.unlock_compute();
        gate.enable_compute().unwrap();

        let outcome = gate.disable_network();
        assert!(!outcome.enabled);
        assert_eq!(
            outcome.events,
            vec![InternalEvent::ComputeDisabled, InternalEvent::NetworkDisabled]
        );
        assert!(!gate.compute_enabled());
        assert!(!gate.compute_unlocked());
    }

    #[test]
    fn repeated_operations_fire_no_events() {
        let mut gate = PermissionGate::new();
        assert!(gate.disable_network().events.is_empty());
        gate.enable_network();
        assert!(gate.enable_network().events.is_empty());
        assert!(gate.disable_compute().events.is_empty());
    }

    #[test]
    fn invariant_survives_any_operation_sequence() {
        let mut gate = PermissionGate::new();
        for step in 0..64u32 {
            match step % 5 {
                0 => {
                    gate.enable_network();
                }
                1 => {
                    let _ = gate.enable_compute();
                }
                2 => gate.unlock_compute(),
                3 => {
                    gate.disable_network();
                }
                _ => {
                    gate.disable_compute();
                }
            }
            assert!(invariant_holds(&gate), "broken after step {}", step);
        }
    }
}
