//! # Mechlab CLI
//!
//! Runs the mechanics-of-materials models from the terminal.
//!
//! ```text
//! mechlab run bending --material "aluminum 6061" --set bending.load_n=5000
//! mechlab all --params lab.json --json
//! mechlab run buckling --set buckling.load_n=200000 --explain
//! ```

mod narrator;
mod report;

use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use mechlab_core::calculations::fundamentals::curve_samples;
use mechlab_core::equations::{generate_equations_markdown, theory};
use mechlab_core::narration::{build_prompt, Narrator};
use mechlab_core::simulation::patch_from_assignment;
use mechlab_core::{CalcError, CalcResult, DerivedResult, ModuleKind, SimulationParameters};

use narrator::GeminiNarrator;

#[derive(Parser)]
#[command(name = "mechlab")]
#[command(version, about = "Mechlab - mechanics-of-materials virtual lab")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Merge a JSON parameter file over the defaults.
    #[arg(long, global = true, value_name = "FILE")]
    params: Option<String>,

    /// Set one parameter, e.g. --set axial.force_n=8000 (repeatable).
    #[arg(long = "set", global = true, value_name = "PATH=VALUE")]
    assignments: Vec<String>,

    /// Use a catalog material (name, key or alias).
    #[arg(long, global = true, value_name = "NAME")]
    material: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Ask the tutor for a short explanation (needs GEMINI_API_KEY).
    #[arg(long, global = true)]
    explain: bool,

    /// Tutor model id.
    #[arg(long, global = true, value_name = "ID")]
    model: Option<String>,

    /// Debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one model (fundamentals, axial, bending, torsion, buckling, stress, combined).
    Run {
        #[arg(value_parser = parse_module)]
        module: ModuleKind,
    },

    /// Run every model.
    All,

    /// List the built-in material catalog.
    Materials,

    /// Print the equation reference (Markdown).
    Equations {
        /// Write to a file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        out: Option<String>,
    },

    /// Show the theory panel for a model.
    Theory {
        #[arg(value_parser = parse_module)]
        module: ModuleKind,
    },

    /// Print the sampled stress-strain curve.
    Curve,
}

fn parse_module(name: &str) -> Result<ModuleKind, String> {
    name.parse().map_err(|e: CalcError| e.to_string())
}

/// Defaults, then the parameter file, then `--material`, then each `--set`.
fn build_parameters(cli: &Cli) -> CalcResult<SimulationParameters> {
    let mut params = SimulationParameters::default();

    if let Some(path) = &cli.params {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::serialization(format!("Failed to read {}: {}", path, e)))?;
        let patch: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path, e)))?;
        params.apply_patch(&patch)?;
        log::debug!("applied parameter file {}", path);
    }

    if let Some(name) = &cli.material {
        params.select_material(name)?;
    }

    for assignment in &cli.assignments {
        params.apply_patch(&patch_from_assignment(assignment)?)?;
        log::debug!("applied {}", assignment);
    }

    Ok(params)
}

fn fail(error: &CalcError) -> ! {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!("{}", json);
    }
    process::exit(1);
}

fn explain(narrator: &dyn Narrator, params: &SimulationParameters, result: &DerivedResult) {
    let prompt = build_prompt(params, result);
    match narrator.narrate(&prompt) {
        Ok(text) => {
            println!("─── Tutor: {} ───", result.kind().display_name());
            println!("{}", text.trim());
            println!();
        }
        Err(e) => eprintln!("Explanation unavailable [{}]: {}", e.error_code(), e),
    }
}

fn run_models(cli: &Cli, kinds: &[ModuleKind]) {
    let params = match build_parameters(cli) {
        Ok(params) => params,
        Err(e) => fail(&e),
    };

    let results: Vec<DerivedResult> =
        match kinds.iter().map(|kind| params.evaluate(*kind)).collect::<CalcResult<_>>() {
            Ok(results) => results,
            Err(e) => fail(&e),
        };

    if cli.json {
        let rendered = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])
        } else {
            serde_json::to_string_pretty(&results)
        };
        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&CalcError::serialization(e.to_string())),
        }
    } else {
        for result in &results {
            report::print_result(&params, result);
        }
    }

    if cli.explain {
        // Narration never changes the computed results above.
        match GeminiNarrator::from_env(cli.model.clone()) {
            Ok(narrator) => {
                for result in &results {
                    explain(&narrator, &params, result);
                }
            }
            Err(e) => eprintln!("Explanation unavailable [{}]: {}", e.error_code(), e),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Commands::Run { module } => run_models(&cli, &[*module]),
        Commands::All => run_models(&cli, &ModuleKind::ALL),
        Commands::Materials => report::print_materials(),
        Commands::Equations { out } => {
            let markdown = generate_equations_markdown();
            match out {
                Some(path) => {
                    if let Err(e) = fs::write(path, &markdown) {
                        eprintln!("Error writing {}: {}", path, e);
                        process::exit(1);
                    }
                    println!("Wrote {} bytes to {}", markdown.len(), path);
                }
                None => println!("{}", markdown),
            }
        }
        Commands::Theory { module } => report::print_theory(theory(*module)),
        Commands::Curve => {
            if cli.json {
                let samples: Vec<_> = curve_samples().collect();
                match serde_json::to_string_pretty(&samples) {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&CalcError::serialization(e.to_string())),
                }
            } else {
                report::print_curve();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mechlab").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli = parse(&[
            "run",
            "beam",
            "--set",
            "bending.load_n=5000",
            "--material",
            "aluminum",
            "--json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Run { module: ModuleKind::Bending }));
        assert_eq!(cli.assignments, vec!["bending.load_n=5000".to_string()]);
        assert_eq!(cli.material.as_deref(), Some("aluminum"));
        assert!(cli.json);
        assert!(!cli.explain);
    }

    #[test]
    fn test_parse_equals_form_and_globals_before_command() {
        let cli = parse(&[
            "--json",
            "run",
            "axial",
            "--set=axial.force_n=8000",
            "--set=axial.length_m=2",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.assignments.len(), 2);
        assert_eq!(cli.assignments[0], "axial.force_n=8000");
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse(&["all"]).unwrap().command, Commands::All));
        assert!(matches!(parse(&["curve"]).unwrap().command, Commands::Curve));
        assert!(matches!(
            parse(&["theory", "mohr"]).unwrap().command,
            Commands::Theory { module: ModuleKind::Stress }
        ));
        match parse(&["equations", "--out", "EQ.md"]).unwrap().command {
            Commands::Equations { out } => assert_eq!(out.as_deref(), Some("EQ.md")),
            _ => panic!("expected equations"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["run", "warp-drive"]).is_err());
        assert!(parse(&["run", "axial", "--set"]).is_err());
        assert!(parse(&["run", "axial", "--bogus"]).is_err());
        assert!(parse(&["run", "axial", "bending"]).is_err());
        assert!(parse(&["theory"]).is_err());
        // --out belongs to `equations` only
        assert!(parse(&["run", "axial", "--out", "x"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = parse(&["--version"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_build_parameters_applies_in_order() {
        let cli = parse(&[
            "run",
            "axial",
            "--material",
            "aluminum 6061",
            "--set",
            "material.yield_strength_mpa=300",
            "--set",
            "axial.force_n=9000",
        ])
        .unwrap();
        let params = build_parameters(&cli).unwrap();
        assert_eq!(params.axial.force_n, 9000.0);
        assert_eq!(params.material.yield_strength_mpa, 300.0);
        assert!((params.material.elastic_modulus_gpa - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_parameters_rejects_bad_assignment() {
        let cli = parse(&["all", "--set", "axial.area_mm2=0"]).unwrap();
        let err = build_parameters(&cli).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");

        let cli = parse(&["all", "--params", "/nonexistent/mechlab.json"]).unwrap();
        assert!(build_parameters(&cli).is_err());
    }
}
