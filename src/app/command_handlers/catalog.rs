use crate::alerts::AlertCategory;
use crate::journey::{OnboardingRoute, SETUP_CARDS};
use crate::wizard::{path_for_step, step_for_path, StepRegistry, TELEMETRY_BASE_PATH};

pub fn cmd_steps(args: &[String]) -> Result<String, String> {
    let Some(flow) = args.first() else {
        return Err("usage: steps telemetry|alerts".to_string());
    };
    let lines: Vec<String> = match flow.as_str() {
        "telemetry" => {
            let registry = StepRegistry::telemetry();
            registry
                .steps()
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let path = path_for_step(TELEMETRY_BASE_PATH, registry, index)
                        .unwrap_or_default();
                    format!("{}. {} {path}", step.id, step.title)
                })
                .collect()
        }
        "alerts" => AlertCategory::ALL
            .into_iter()
            .map(|category| {
                let metrics = category
                    .metrics()
                    .iter()
                    .map(|metric| metric.id)
                    .collect::<Vec<_>>()
                    .join(",");
                format!(
                    "{}. {} metrics={metrics}",
                    category.index() + 1,
                    category.spec().title
                )
            })
            .collect(),
        other => return Err(format!("unknown wizard `{other}`; expected telemetry or alerts")),
    };
    Ok(lines.join("\n"))
}

pub fn cmd_route(args: &[String]) -> Result<String, String> {
    let Some(path) = args.first() else {
        return Err("usage: route <path>".to_string());
    };
    let route =
        OnboardingRoute::from_path(path).ok_or_else(|| format!("unknown route `{path}`"))?;
    let mut line = format!("{} -> {}", route.path(), route.title());
    if route == OnboardingRoute::SetupTelemetry {
        let registry = StepRegistry::telemetry();
        if let Some(index) = step_for_path(TELEMETRY_BASE_PATH, registry, path) {
            if let Some(step) = registry.get(index) {
                line.push_str(&format!(
                    "\nstep={}/{} {}",
                    index + 1,
                    registry.len(),
                    step.title
                ));
            }
        }
    }
    Ok(line)
}

pub fn cmd_cards(_args: &[String]) -> Result<String, String> {
    let lines: Vec<String> = SETUP_CARDS
        .iter()
        .map(|card| {
            let route = card
                .route()
                .map(|route| route.path().to_string())
                .unwrap_or_else(|| "-".to_string());
            let teams = card
                .teams
                .iter()
                .map(|team| team.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{}: {} [{}] teams={teams} continue={route}",
                card.title,
                card.status_text(),
                card.id.as_str()
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
