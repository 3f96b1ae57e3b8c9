//! One-shot assessment and PDF report
//! Usage: cargo run --bin quick_report -- <age> <gender> <weight_kg> <height_cm> [activity level]

use tracing_subscriber::EnvFilter;

use bmi_calc::models::{Assessment, AssessmentInput};
use bmi_calc::{config, report, tools};

const USAGE: &str =
    "Usage: quick_report <age> <gender> <weight_kg> <height_cm> [activity level, default Sedentary]";

fn parse_args(args: &[String]) -> Result<AssessmentInput, String> {
    if args.len() < 4 {
        return Err(USAGE.to_string());
    }

    let age = args[0]
        .parse()
        .map_err(|_| format!("Invalid age: {}", args[0]))?;
    let weight_kg = args[2]
        .parse()
        .map_err(|_| format!("Invalid weight: {}", args[2]))?;
    let height_cm = args[3]
        .parse()
        .map_err(|_| format!("Invalid height: {}", args[3]))?;

    // Activity labels contain spaces ("Lightly active"), so join the remainder
    let activity_level = if args.len() > 4 {
        args[4..].join(" ")
    } else {
        "Sedentary".to_string()
    };

    Ok(AssessmentInput {
        age,
        gender: args[1].clone(),
        weight_kg,
        height_cm,
        activity_level,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bmi_calc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = parse_args(&args)?;
    let assessment = Assessment::from_input(&input)?;

    println!("Results");
    for line in tools::assessment::summary_lines(&assessment) {
        println!("  {}", line);
    }

    let file = report::generate_report(&assessment, &config::report_dir())?;
    println!("Report: {}", file.path.display());

    Ok(())
}
