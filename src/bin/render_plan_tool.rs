use chart_plan::api::{SavedChartDesign, build_render_plan, list_by_group};
use chart_plan::core::{ChartSpec, Record};
use chart_plan::render::{NullRenderer, PlanRenderer};
use chart_plan::telemetry;
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: render_plan_tool <plan|list> --rows <path> --spec <path> [--saved] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Plan,
    List,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    rows: Option<PathBuf>,
    spec: Option<PathBuf>,
    saved: bool,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    match args.command {
        CommandKind::List => {
            for (group, types) in list_by_group() {
                let ids: Vec<&str> = types.iter().map(|meta| meta.id).collect();
                println!("{group}: {}", ids.join(", "));
            }
            Ok(())
        }
        CommandKind::Plan => {
            let rows_path = args.rows.ok_or_else(|| "missing --rows".to_owned())?;
            let spec_path = args.spec.ok_or_else(|| "missing --spec".to_owned())?;

            let rows: Vec<Record> = serde_json::from_str(&read(&rows_path)?)
                .map_err(|err| format!("invalid rows json: {err}"))?;
            let raw_spec = read(&spec_path)?;
            let spec = if args.saved {
                SavedChartDesign::from_json_str(&raw_spec)
                    .and_then(|design| design.to_chart_spec())
            } else {
                ChartSpec::from_json_str(&raw_spec)
            }
            .map_err(|err| err.to_string())?;

            let plan = build_render_plan(&rows, &spec).map_err(|err| err.to_string())?;
            NullRenderer::default()
                .render(&plan)
                .map_err(|err| err.to_string())?;
            for diagnostic in &plan.diagnostics {
                eprintln!("warning: {diagnostic:?}");
            }

            let payload = plan
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?;
            match args.output {
                Some(path) => fs::write(&path, payload)
                    .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
                None => {
                    println!("{payload}");
                    Ok(())
                }
            }
        }
    }
}

fn read(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("plan") => CommandKind::Plan,
        Some("list") => CommandKind::List,
        _ => return Err(USAGE.to_owned()),
    };

    let mut rows = None::<PathBuf>;
    let mut spec = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut saved = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--rows" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --rows".to_owned())?;
                rows = Some(PathBuf::from(value));
            }
            "--spec" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --spec".to_owned())?;
                spec = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--saved" => saved = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        command,
        rows,
        spec,
        saved,
        output,
    })
}
