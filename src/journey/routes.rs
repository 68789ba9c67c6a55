use crate::wizard::TELEMETRY_BASE_PATH;

/// Every page of the onboarding journey, in the order a new account walks
/// through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingRoute {
    Welcome,
    Signup,
    VerifyEmail,
    Enrichment,
    EnrichmentResults,
    ProductAnalytics,
    Customize,
    Connect,
    SetupAcquisition,
    SetupTelemetry,
    SetupAlerts,
    Success,
    Dashboard,
}

impl OnboardingRoute {
    pub const ALL: [OnboardingRoute; 13] = [
        OnboardingRoute::Welcome,
        OnboardingRoute::Signup,
        OnboardingRoute::VerifyEmail,
        OnboardingRoute::Enrichment,
        OnboardingRoute::EnrichmentResults,
        OnboardingRoute::ProductAnalytics,
        OnboardingRoute::Customize,
        OnboardingRoute::Connect,
        OnboardingRoute::SetupAcquisition,
        OnboardingRoute::SetupTelemetry,
        OnboardingRoute::SetupAlerts,
        OnboardingRoute::Success,
        OnboardingRoute::Dashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            OnboardingRoute::Welcome => "/",
            OnboardingRoute::Signup => "/signup",
            OnboardingRoute::VerifyEmail => "/verify-email",
            OnboardingRoute::Enrichment => "/enrichment",
            OnboardingRoute::EnrichmentResults => "/enrichment-results",
            OnboardingRoute::ProductAnalytics => "/product-analytics",
            OnboardingRoute::Customize => "/customize",
            OnboardingRoute::Connect => "/connect",
            OnboardingRoute::SetupAcquisition => "/setup-acquisition",
            OnboardingRoute::SetupTelemetry => TELEMETRY_BASE_PATH,
            OnboardingRoute::SetupAlerts => "/setup-alerts",
            OnboardingRoute::Success => "/success",
            OnboardingRoute::Dashboard => "/dashboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingRoute::Welcome => "Welcome",
            OnboardingRoute::Signup => "Sign Up",
            OnboardingRoute::VerifyEmail => "Verify Email",
            OnboardingRoute::Enrichment => "Enriching Your Profile",
            OnboardingRoute::EnrichmentResults => "Enrichment Results",
            OnboardingRoute::ProductAnalytics => "Product Analytics Setup",
            OnboardingRoute::Customize => "Use Cases",
            OnboardingRoute::Connect => "Data Sources",
            OnboardingRoute::SetupAcquisition => "Setup Acquisition",
            OnboardingRoute::SetupTelemetry => "Setup Product Telemetry",
            OnboardingRoute::SetupAlerts => "Configure Customer Journey Alerts",
            OnboardingRoute::Success => "Setup Complete",
            OnboardingRoute::Dashboard => "Dashboard",
        }
    }

    /// Telemetry owns every path below its base; all other routes match
    /// exactly (a trailing slash is ignored).
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        if path == "/" {
            return Some(OnboardingRoute::Welcome);
        }
        let normalized = path.trim_end_matches('/');
        if normalized == TELEMETRY_BASE_PATH
            || normalized
                .strip_prefix(TELEMETRY_BASE_PATH)
                .is_some_and(|rest| rest.starts_with('/'))
        {
            return Some(OnboardingRoute::SetupTelemetry);
        }
        Self::ALL
            .into_iter()
            .find(|route| *route != OnboardingRoute::Welcome && route.path() == normalized)
    }
}
