mod common;
use crate::common::{init_tracing, TestResult};

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;
use workgraph::cli::{CliArgs, Command, OutputFormat};
use workgraph::run_with_writer;

const PLAN: &str = r#"
[schedule]
ready_delay = 2
default_duration = 1

[item.design]
duration = 3
milestone = true

[item.build]
dependencies = ["design"]

[item.ship]
dependencies = ["build", "design"]
milestone = true
"#;

fn plan_file() -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{PLAN}")?;
    Ok(file)
}

fn run_cli(file: &NamedTempFile, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let path = file.path().to_string_lossy().to_string();
    let mut argv = vec!["workgraph", "--config", path.as_str()];
    argv.extend_from_slice(args);

    let parsed = CliArgs::try_parse_from(argv)?;
    let mut out = Vec::new();
    run_with_writer(parsed, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn parses_global_flags_after_subcommand() -> TestResult {
    let args = CliArgs::try_parse_from(["workgraph", "subgraph", "ship", "--format", "json"])?;
    assert_eq!(args.config, "Workgraph.toml");
    assert_eq!(args.format, OutputFormat::Json);
    assert!(matches!(args.command, Command::Subgraph { ref name } if name == "ship"));
    Ok(())
}

#[test]
fn schedule_text_output() -> TestResult {
    init_tracing();
    let file = plan_file()?;

    let text = run_cli(&file, &["schedule"])?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec!["design  0..3", "build   3..4", "ship    4..5", "finish: 5"]
    );
    Ok(())
}

#[test]
fn schedule_flags_override_the_file() -> TestResult {
    let file = plan_file()?;

    let json = run_cli(&file, &["--format", "json", "schedule", "--default-duration", "2"])?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["build"]["start"], 3.0);
    assert_eq!(value["build"]["end"], 5.0);
    Ok(())
}

#[test]
fn reduce_drops_the_shortcut() -> TestResult {
    let file = plan_file()?;

    let json = run_cli(&file, &["--format", "json", "reduce"])?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    let ship = &value[2];
    assert_eq!(ship["name"], "ship");
    assert_eq!(ship["dependencies"], serde_json::json!(["build"]));
    assert_eq!(ship["state"], "blocked");
    Ok(())
}

#[test]
fn states_text_output_lists_dependencies() -> TestResult {
    let file = plan_file()?;

    let text = run_cli(&file, &["states"])?;
    let ship = text
        .lines()
        .find(|line| line.starts_with("ship"))
        .ok_or("missing ship line")?;

    assert!(ship.contains("blocked"));
    assert!(ship.contains("<- build, design"));
    assert!(ship.ends_with("[milestone]"));
    Ok(())
}

#[test]
fn milestones_and_rdeps() -> TestResult {
    let file = plan_file()?;

    let json = run_cli(&file, &["--format", "json", "milestones"])?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let names: Vec<&str> = value
        .as_array()
        .ok_or("expected array")?
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, vec!["design", "ship"]);

    let text = run_cli(&file, &["rdeps", "design"])?;
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["build", "ship"]);
    Ok(())
}

#[test]
fn distances_text_is_sorted_by_hops() -> TestResult {
    let file = plan_file()?;

    let text = run_cli(&file, &["distances", "ship"])?;
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec!["0  ship", "1  build", "1  design"]
    );
    Ok(())
}

#[test]
fn unknown_item_is_an_error() -> TestResult {
    let file = plan_file()?;

    assert!(run_cli(&file, &["subgraph", "ghost"]).is_err());
    assert!(run_cli(&file, &["rdeps", "ghost"]).is_err());
    Ok(())
}
