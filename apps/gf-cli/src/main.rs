use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use gf_project::{Project, ProjectError, load, load_response_table};
use gf_solver::{SolverError, compute_g_function};

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(about = "g-function CLI - Uniform borehole wall temperature g-functions", long_about = None)]
struct Cli {
    /// Log progress and per-phase timings
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Compute the g-function of a project
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            output,
        } => cmd_run(&project_path, output.as_deref(), cli.verbose),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load(project_path)?;
    print_summary(&project);
    println!("✓ Project is valid");
    Ok(())
}

fn print_summary(project: &Project) {
    let opts = project.options();
    let time = project.time();
    println!("  name:       {}", project.name);
    println!("  boreholes:  {}", project.field.boreholes.len());
    println!(
        "  segments:   {} per borehole ({} sources)",
        opts.n_segments,
        opts.n_segments * project.field.boreholes.len()
    );
    println!("  alpha:      {} m2/s", project.ground.alpha_m2ps);
    if let (Some(first), Some(last)) = (time.first(), time.last()) {
        println!("  times:      {} ({} s .. {} s)", time.len(), first, last);
    }
    println!("  response:   {}", project.response.table);
}

fn cmd_run(project_path: &Path, output: Option<&Path>, verbose: bool) -> CliResult<()> {
    let mut project = load(project_path)?;
    project.gfunction.verbose |= verbose;
    let table = load_response_table(project_path, &project)?;

    let time = project.time();
    let g = compute_g_function(
        &table,
        &project.boreholes(),
        time,
        project.alpha(),
        &project.options(),
    )?;

    let mut csv = String::from("time_s,g\n");
    for (t, value) in time.iter().zip(&g) {
        csv.push_str(&format!("{},{}\n", t, value));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Wrote {} g-function values to {}", g.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}
