use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Team {
    #[serde(rename = "Engineering teams")]
    Engineering,
    #[serde(rename = "Product teams")]
    Product,
    #[serde(rename = "Customer Success teams")]
    CustomerSuccess,
    #[serde(rename = "GTM Leaders")]
    GtmLeaders,
    #[serde(rename = "Product Management")]
    ProductManagement,
    #[serde(rename = "Growth Team")]
    Growth,
}

impl Team {
    pub fn label(self) -> &'static str {
        match self {
            Team::Engineering => "Engineering teams",
            Team::Product => "Product teams",
            Team::CustomerSuccess => "Customer Success teams",
            Team::GtmLeaders => "GTM Leaders",
            Team::ProductManagement => "Product Management",
            Team::Growth => "Growth Team",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
}

/// A team as offered in one wizard's invite picker, with the members that
/// page already knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRoster {
    pub team: Team,
    pub members: &'static [TeamMember],
}

impl TeamRoster {
    /// Badge text: up to three names, then "+N".
    pub fn badge(&self) -> String {
        if self.members.is_empty() {
            return self.team.label().to_string();
        }
        let names: Vec<&str> = self.members.iter().take(3).map(|member| member.name).collect();
        let overflow = self.members.len().saturating_sub(3);
        let extra = if overflow > 0 {
            format!(" +{overflow}")
        } else {
            String::new()
        };
        format!("{} ({}{extra})", self.team.label(), names.join(", "))
    }
}
