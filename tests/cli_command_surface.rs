use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn command(home: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_journeyflow"));
    cmd.args(args)
        .env("HOME", home)
        .env_remove("JOURNEYFLOW_SCRIPT_KEYS");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    command(home, args).output().expect("run journeyflow")
}

fn run_scripted(home: &Path, args: &[&str], keys: &str) -> Output {
    command(home, args)
        .env("JOURNEYFLOW_SCRIPT_KEYS", keys)
        .output()
        .expect("run journeyflow")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_ok(output: &Output) {
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output)
    );
}

fn assert_err_contains(output: &Output, needle: &str) {
    assert!(
        !output.status.success(),
        "expected failure, stdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output)
    );
    let text = format!("{}{}", stdout(output), stderr(output));
    assert!(
        text.contains(needle),
        "expected error to contain `{needle}`, got:\n{text}"
    );
}

#[test]
fn help_lists_commands() {
    let temp = tempdir().expect("temp dir");
    let cases: [&[&str]; 3] = [&[], &["help"], &["--help"]];
    for args in cases {
        let output = run(temp.path(), args);
        assert_ok(&output);
        let text = stdout(&output);
        assert!(text.contains("Commands:"));
        assert!(text.contains("check-email <email>..."));
        assert!(text.contains("JOURNEYFLOW_SCRIPT_KEYS"));
    }
}

#[test]
fn unknown_command_fails() {
    let temp = tempdir().expect("temp dir");
    assert_err_contains(&run(temp.path(), &["deploy"]), "unknown command `deploy`");
}

#[test]
fn steps_lists_both_wizards() {
    let temp = tempdir().expect("temp dir");
    let output = run(temp.path(), &["steps", "telemetry"]);
    assert_ok(&output);
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "1. Product Setup /setup-telemetry");
    assert_eq!(lines[7], "8. Setup Alerts /setup-telemetry/setup-alerts");

    let output = run(temp.path(), &["steps", "alerts"]);
    assert_ok(&output);
    assert!(stdout(&output).contains("3. Engagement Alerts metrics=dau,feature_adoption,session_duration"));

    assert_err_contains(&run(temp.path(), &["steps", "billing"]), "unknown wizard");
}

#[test]
fn route_resolves_pages_and_telemetry_steps() {
    let temp = tempdir().expect("temp dir");
    let output = run(temp.path(), &["route", "/setup-telemetry/track-login"]);
    assert_ok(&output);
    assert_eq!(
        stdout(&output).trim_end(),
        "/setup-telemetry -> Setup Product Telemetry\nstep=5/8 Track Logins"
    );

    let output = run(temp.path(), &["route", "/success"]);
    assert_ok(&output);
    assert_eq!(stdout(&output).trim_end(), "/success -> Setup Complete");

    assert_err_contains(&run(temp.path(), &["route", "/pricing"]), "unknown route");
}

#[test]
fn cards_show_status_and_continue_targets() {
    let temp = tempdir().expect("temp dir");
    let output = run(temp.path(), &["cards"]);
    assert_ok(&output);
    let text = stdout(&output);
    assert!(text.contains("continue=/setup-telemetry"));
    assert!(text.contains("continue=-"));
    assert!(text.contains("10 mins • 2/5 completed"));
}

#[test]
fn check_email_exit_status_follows_validity() {
    let temp = tempdir().expect("temp dir");
    let output = run(temp.path(), &["check-email", "a@b.com"]);
    assert_ok(&output);
    assert_eq!(stdout(&output).trim_end(), "a@b.com: ok");

    let output = run(temp.path(), &["check-email", "a@b.com", "bad"]);
    assert_err_contains(&output, "bad: Invalid email format");
}

#[test]
fn wizard_without_terminal_or_script_does_not_start() {
    let temp = tempdir().expect("temp dir");
    let output = run(temp.path(), &["alerts"]);
    assert_ok(&output);
    assert!(stdout(&output).starts_with("alerts wizard not started"));
}

#[test]
fn scripted_alerts_run_completes_and_logs_events() {
    let temp = tempdir().expect("temp dir");
    let output = run_scripted(
        temp.path(),
        &["alerts"],
        "a,right,right,right,right,right,right",
    );
    assert_ok(&output);
    let text = stdout(&output);
    assert!(text.starts_with("alerts wizard completed; next: /success"), "{text}");
    assert!(text.contains("alert rules configured=1"));
    assert!(text.contains("acquisition: Alert when Visitor Conversion Rate is below 2%"));

    let log = fs::read_to_string(temp.path().join(".journeyflow/logs/events.log"))
        .expect("read event log");
    assert!(log.contains("\"event\":\"alerts.rule_added\""));
    assert!(log.contains("\"event\":\"wizard.flow_complete\""));
}

#[test]
fn alerts_json_flag_prints_configured_rules() {
    let temp = tempdir().expect("temp dir");
    let output = run_scripted(
        temp.path(),
        &["alerts", "--json"],
        "a,right,right,right,right,right,right",
    );
    assert_ok(&output);
    let text = stdout(&output);
    let start = text.find("\n{").expect("json object after summary") + 1;
    let rules: serde_json::Value = serde_json::from_str(&text[start..]).expect("rules json");

    let acquisition = rules["acquisition"].as_array().expect("acquisition rules");
    assert_eq!(acquisition.len(), 1);
    assert_eq!(acquisition[0]["metric"], "visitor_conversion");
    assert_eq!(acquisition[0]["condition"], "below");
    assert_eq!(acquisition[0]["threshold"], 2.0);
    assert!(acquisition[0]["id"]
        .as_str()
        .expect("id string")
        .starts_with("acquisition_"));
    assert_eq!(rules["expansion"], serde_json::json!([]));

    assert_err_contains(
        &run_scripted(temp.path(), &["alerts", "--yaml"], "esc"),
        "usage: alerts [--json]",
    );
}

#[test]
fn scripted_telemetry_run_starts_from_route_path() {
    let temp = tempdir().expect("temp dir");
    let output = run_scripted(
        temp.path(),
        &["telemetry", "/setup-telemetry/track-features"],
        "v,esc",
    );
    assert_ok(&output);
    let text = stdout(&output);
    assert!(text.starts_with("telemetry wizard canceled"), "{text}");
    assert!(text.contains("event_verified=true"));
    assert!(text.contains("last_path=/setup-telemetry/track-features"));

    assert_err_contains(
        &run_scripted(temp.path(), &["telemetry", "/setup-telemetry/nope"], "esc"),
        "unknown telemetry route",
    );
}

#[test]
fn invalid_settings_and_key_scripts_are_reported() {
    let temp = tempdir().expect("temp dir");
    assert_err_contains(
        &run_scripted(temp.path(), &["alerts"], "right,warp"),
        "invalid JOURNEYFLOW_SCRIPT_KEYS token `warp`",
    );

    fs::create_dir_all(temp.path().join(".journeyflow")).expect("state dir");
    fs::write(
        temp.path().join(".journeyflow/settings.yaml"),
        "copy_indicator_ms: 0\n",
    )
    .expect("write settings");
    assert_err_contains(
        &run_scripted(temp.path(), &["telemetry"], "esc"),
        "copy_indicator_ms",
    );
}
