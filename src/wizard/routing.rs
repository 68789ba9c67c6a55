use super::registry::{StepDescriptor, StepRegistry, TELEMETRY_STEPS};

pub const TELEMETRY_BASE_PATH: &str = "/setup-telemetry";

/// Route for a step: the base path for an empty slug, `base/slug` otherwise.
pub fn path_for_step(base: &str, registry: StepRegistry, index: usize) -> Option<String> {
    let step = registry.get(index)?;
    if step.path.is_empty() {
        Some(base.to_string())
    } else {
        Some(format!("{base}/{}", step.path))
    }
}

/// Step index addressed by a route path, `None` if the path is outside
/// `base` or names no step.
pub fn step_for_path(base: &str, registry: StepRegistry, path: &str) -> Option<usize> {
    let rest = path.strip_prefix(base)?;
    let rest = rest.trim_end_matches('/');
    if rest.is_empty() {
        return registry.position_of_path("");
    }
    let slug = rest.strip_prefix('/')?;
    if slug.contains('/') {
        return None;
    }
    registry.position_of_path(slug)
}

/// Content shown for each telemetry step, selected from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryStep {
    ProductSetup,
    TrackPageVisits,
    TrackSignups,
    AccountAddUser,
    TrackLogins,
    TrackFeatures,
    OtherEvents,
    SetupAlerts,
}

impl TelemetryStep {
    pub const ALL: [TelemetryStep; 8] = [
        TelemetryStep::ProductSetup,
        TelemetryStep::TrackPageVisits,
        TelemetryStep::TrackSignups,
        TelemetryStep::AccountAddUser,
        TelemetryStep::TrackLogins,
        TelemetryStep::TrackFeatures,
        TelemetryStep::OtherEvents,
        TelemetryStep::SetupAlerts,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            TelemetryStep::ProductSetup => 0,
            TelemetryStep::TrackPageVisits => 1,
            TelemetryStep::TrackSignups => 2,
            TelemetryStep::AccountAddUser => 3,
            TelemetryStep::TrackLogins => 4,
            TelemetryStep::TrackFeatures => 5,
            TelemetryStep::OtherEvents => 6,
            TelemetryStep::SetupAlerts => 7,
        }
    }

    pub fn descriptor(self) -> &'static StepDescriptor {
        &TELEMETRY_STEPS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_registry() {
        let registry = StepRegistry::telemetry();
        assert_eq!(
            path_for_step(TELEMETRY_BASE_PATH, registry, 0).as_deref(),
            Some("/setup-telemetry")
        );
        assert_eq!(
            path_for_step(TELEMETRY_BASE_PATH, registry, 4).as_deref(),
            Some("/setup-telemetry/track-login")
        );
        assert_eq!(path_for_step(TELEMETRY_BASE_PATH, registry, 8), None);
    }

    #[test]
    fn step_for_path_accepts_base_with_or_without_trailing_slash() {
        let registry = StepRegistry::telemetry();
        assert_eq!(step_for_path(TELEMETRY_BASE_PATH, registry, "/setup-telemetry"), Some(0));
        assert_eq!(step_for_path(TELEMETRY_BASE_PATH, registry, "/setup-telemetry/"), Some(0));
        assert_eq!(
            step_for_path(TELEMETRY_BASE_PATH, registry, "/setup-telemetry/track-features"),
            Some(5)
        );
        assert_eq!(step_for_path(TELEMETRY_BASE_PATH, registry, "/setup-telemetry/unknown"), None);
        assert_eq!(step_for_path(TELEMETRY_BASE_PATH, registry, "/setup-alerts"), None);
        assert_eq!(step_for_path(TELEMETRY_BASE_PATH, registry, "/setup-telemetryx"), None);
    }

    #[test]
    fn telemetry_step_variants_line_up_with_registry() {
        for (index, step) in TelemetryStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), index);
            assert_eq!(TelemetryStep::from_index(index), Some(*step));
            assert_eq!(step.descriptor().id as usize, index + 1);
        }
        assert_eq!(TelemetryStep::from_index(8), None);
    }
}
