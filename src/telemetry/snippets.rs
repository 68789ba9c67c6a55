use crate::wizard::TelemetryStep;

pub const DEFAULT_TRACKING_ID: &str = "TS-XXXXX";
const TRACKING_CDN: &str = "https://cdn.thrivestack.io/ts.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Snippet {
    TrackingScript,
    SignupTracking,
    UserIdentify,
    CompanyIdentify,
    UserCompanyLink,
    LoginTracking,
    FeatureTracking,
    VerifyEvent,
}

impl Snippet {
    pub fn title(self) -> &'static str {
        match self {
            Snippet::TrackingScript => "Base Tracking Script",
            Snippet::SignupTracking => "Signup Tracking Code",
            Snippet::UserIdentify => "User Identity Code",
            Snippet::CompanyIdentify => "Company Identity Code",
            Snippet::UserCompanyLink => "User-Company Link Code",
            Snippet::LoginTracking => "Login Tracking Code",
            Snippet::FeatureTracking => "Feature Tracking Code",
            Snippet::VerifyEvent => "Test Event",
        }
    }

    /// Snippet source; only the base script embeds the tracking id.
    pub fn code(self, tracking_id: &str) -> String {
        match self {
            Snippet::TrackingScript => format!(
                "<script>\n  (function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n  new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n  j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n  '{TRACKING_CDN}?id='+i+dl;f.parentNode.insertBefore(j,f);\n  }})(window,document,'script','tsLayer','{tracking_id}');\n</script>"
            ),
            Snippet::SignupTracking => "// Track user signup\nthrivestack.track('user_signup', {\n  userId: 'new_user_id',\n  email: 'user@example.com',\n  source: 'landing_page',\n  referralChannel: 'linkedin_ad'\n});".to_string(),
            Snippet::UserIdentify => "// Identify user\nthrivestack.identify('user_id', {\n  email: 'user@example.com',\n  firstName: 'John',\n  lastName: 'Doe',\n  role: 'developer',\n  plan: 'pro'\n});".to_string(),
            Snippet::CompanyIdentify => "// Identify company\nthrivestack.identify('company_id', {\n  name: 'Acme Inc',\n  industry: 'Software',\n  size: '50-100 employees',\n  foundedYear: 2020\n});".to_string(),
            Snippet::UserCompanyLink => "// Link user to company\nthrivestack.track('user_company_link', {\n  userId: 'user_id',\n  companyId: 'company_id',\n  role: 'admin'\n});".to_string(),
            Snippet::LoginTracking => "// Track user login event\nthrivestack.track('user_login', {\n  userId: user.id,\n  email: user.email,\n  loginMethod: 'email', // or 'sso', 'oauth', etc.\n  deviceType: 'web', // or 'mobile', 'desktop'\n  timestamp: new Date().toISOString()\n});".to_string(),
            Snippet::FeatureTracking => "// Track feature usage\nthrivestack.track('feature_used', {\n  companyId: 'company_123', // Required\n  featureName: 'export_report',\n  userId: 'user_456',\n  userRole: 'admin',\n  planTier: 'enterprise',\n  success: true,\n  duration: 45, // seconds\n  customAttributes: {\n    reportType: 'analytics',\n    exportFormat: 'csv',\n    rowCount: 1000\n  }\n});".to_string(),
            Snippet::VerifyEvent => "// Send a test event\nthrivestack.track('feature_used', {\n  companyId: 'your_company_id',\n  featureName: 'test_event',\n  userId: 'current_user_id'\n});".to_string(),
        }
    }
}

/// Code blocks shown on a step, primary snippet first.
pub fn snippets_for(step: TelemetryStep) -> &'static [Snippet] {
    match step {
        TelemetryStep::TrackPageVisits => &[Snippet::TrackingScript],
        TelemetryStep::TrackSignups => &[Snippet::SignupTracking, Snippet::UserIdentify],
        TelemetryStep::AccountAddUser => &[Snippet::CompanyIdentify, Snippet::UserCompanyLink],
        TelemetryStep::TrackLogins => &[Snippet::LoginTracking],
        TelemetryStep::TrackFeatures => &[Snippet::FeatureTracking, Snippet::VerifyEvent],
        TelemetryStep::ProductSetup | TelemetryStep::OtherEvents | TelemetryStep::SetupAlerts => {
            &[]
        }
    }
}
