//! # Girder Section CLI
//!
//! Terminal front end for the composite girder section engine.
//!
//! ```text
//! girder_cli [INPUT.json] [--json]
//! girder_cli --defaults      print the example input as JSON
//! girder_cli --rebar         list bar designations
//! ```
//!
//! Without an input file the built-in example input is used. Log verbosity is
//! controlled with `RUST_LOG` (default `warn`).

use std::fs;
use std::process::ExitCode;

use girder_core::calculations::section_props::{compute_section_props, default_input, rebar_options};
use girder_core::errors::{CalcError, CalcResult};
use girder_core::section::{ReferenceFiber, SectionSummary};
use girder_core::{RegionResult, SectionPropsInput, SectionPropsResult};
use tracing_subscriber::EnvFilter;

/// Command-line options
#[derive(Debug, Default)]
struct Options {
    input_path: Option<String>,
    json: bool,
    defaults: bool,
    rebar: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> CalcResult<Options> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--json" => options.json = true,
            "--defaults" => options.defaults = true,
            "--rebar" => options.rebar = true,
            flag if flag.starts_with("--") => {
                return Err(CalcError::invalid_input("argument", flag, "Unknown option"));
            }
            path => {
                if options.input_path.is_some() {
                    return Err(CalcError::invalid_input("argument", path, "Only one input file allowed"));
                }
                options.input_path = Some(path.to_string());
            }
        }
    }
    Ok(options)
}

fn load_input(path: &str) -> CalcResult<SectionPropsInput> {
    let text = fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    let input = serde_json::from_str(&text)?;
    Ok(input)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => return report_error(&e),
    };

    if options.rebar {
        for designation in rebar_options() {
            println!("{}", designation);
        }
        return ExitCode::SUCCESS;
    }

    if options.defaults {
        return match serde_json::to_string_pretty(&default_input()) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => report_error(&e.into()),
        };
    }

    let input = match options.input_path.as_deref() {
        Some(path) => match load_input(path) {
            Ok(input) => input,
            Err(e) => return report_error(&e),
        },
        None => default_input(),
    };

    let result = compute_section_props(&input);

    if options.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => return report_error(&e.into()),
        }
    } else {
        print_report(&result);
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report_error(e: &CalcError) -> ExitCode {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}

/// Number or an em-dash when undefined
fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "—".to_string(),
    }
}

fn print_report(result: &SectionPropsResult) {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  COMPOSITE GIRDER SECTION PROPERTIES");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    if let Some(m) = &result.materials {
        println!("Materials:");
        println!("  Es = {:.0} ksi   f'c = {:.2} ksi   Ec = {:.0} ksi ({})",
            m.es_ksi, m.fc_ksi, m.ec_ksi, m.ec_mode.display_name());
        println!("  n  = {:.2}        3n  = {:.2}", m.modular_ratio, m.modular_ratio_long_term);
        println!();
    }

    for region in &result.regions {
        print_region(region);
    }

    if !result.assumptions.is_empty() {
        println!("Assumptions:");
        for note in &result.assumptions {
            println!("  - {}", note);
        }
        println!();
    }

    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  [FAIL] {}", error);
        }
        println!();
    }
}

fn print_region(region: &RegionResult) {
    let geometry = &region.region;
    println!("{}", region.label);
    println!("───────────────────────────────────────────────────────────────────");
    println!("  D = {:.2}\"  tw = {:.3}\"  top flange {:.2}\" x {:.3}\"  bottom flange {:.2}\" x {:.3}\"",
        geometry.depth_in, geometry.tw_in,
        geometry.bf_top_in, geometry.tf_top_in,
        geometry.bf_bot_in, geometry.tf_bot_in);
    println!("  haunch = {:.2}\"  slab = {:.2}\"  b_eff = {:.2}\"",
        geometry.t_haunch_in, geometry.t_slab_in, geometry.b_eff_in);
    println!("  {}", region.bars.top.detail);
    println!("  {}", region.bars.bottom.detail);
    println!();

    println!("  {:<18} {:>10} {:>10} {:>12} {:>10} {:>10} {:>10}",
        "Case", "A (in²)", "ȳ (in)", "I (in⁴)", "S_slab", "S_top", "S_bot");
    print_case("Steel only", &region.steel_only.summary);
    print_case("Composite n", &region.composite_n.summary);
    print_case("Composite 3n", &region.composite_3n.summary);
    let cracked_label = if region.cracked_negative.approximated {
        "Cracked (approx)"
    } else {
        "Cracked negative"
    };
    print_case(cracked_label, &region.cracked_negative.summary);
    println!();
}

fn print_case(name: &str, summary: &SectionSummary) {
    println!("  {:<18} {:>10.3} {:>10.3} {:>12.1} {:>10} {:>10} {:>10}",
        name,
        summary.total_area_in2,
        summary.y_bar_in,
        summary.i_in4,
        fmt_opt(summary.modulus(ReferenceFiber::TopOfSlab), 1),
        fmt_opt(summary.modulus(ReferenceFiber::TopOfSteel), 1),
        fmt_opt(summary.modulus(ReferenceFiber::BottomOfSteel), 1));
}
