use crate::model::{ModeOfInheritance, Penetrance};
use crate::tiering::TierStrategy;
use crate::utils::Result;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="vartier",
          version=&**FULL_VERSION,
          about="Clinical variant tiering and ACMG classification for annotated variants",
          long_about = None,
          disable_help_subcommand = true,
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Tier and classify annotated variants against disease panels")]
    Classify(ClassifyArgs),
    #[clap(about = "Report secondary findings from an actionable-variant list")]
    Secondary(SecondaryArgs),
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct ClassifyArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "variants")]
    #[clap(help = "Annotated variants, one JSON document per line (.gz supported)")]
    #[clap(value_name = "VARIANTS")]
    #[arg(value_parser = check_file_exists)]
    pub variants_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 'p')]
    #[clap(long = "panels")]
    #[clap(help = "JSON file with disease panels")]
    #[clap(value_name = "PANELS")]
    #[arg(value_parser = check_file_exists)]
    pub panels_path: Option<PathBuf>,

    #[clap(short = 's')]
    #[clap(long = "strategy")]
    #[clap(help = "Tiering strategy (default, team, or tiering)")]
    #[clap(value_name = "STRATEGY")]
    #[clap(default_value = "default")]
    pub strategy: TierStrategy,

    #[clap(long = "assembly")]
    #[clap(help = "Genome assembly of panel region coordinates")]
    #[clap(value_name = "ASSEMBLY")]
    #[clap(default_value = "GRCh38")]
    pub assembly: String,

    #[clap(long = "moi")]
    #[clap(help = "Candidate modes of inheritance (comma separated, e.g. AUTOSOMAL_DOMINANT,DE_NOVO)")]
    #[clap(value_name = "MOI")]
    #[clap(value_delimiter = ',')]
    pub modes_of_inheritance: Vec<ModeOfInheritance>,

    #[clap(long = "penetrance")]
    #[clap(help = "Penetrance assumption (complete or incomplete)")]
    #[clap(value_name = "PENETRANCE")]
    pub penetrance: Option<Penetrance>,

    #[clap(long = "disorder-id")]
    #[clap(help = "Identifier of the disorder under investigation")]
    #[clap(value_name = "DISORDER_ID")]
    pub disorder_id: Option<String>,

    #[clap(long = "disorder-name")]
    #[clap(help = "Name of the disorder under investigation")]
    #[clap(value_name = "DISORDER_NAME")]
    pub disorder_name: Option<String>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "role-in-cancer")]
    #[clap(help = "JSON map of gene name to role in cancer")]
    #[clap(value_name = "ROLES")]
    #[arg(value_parser = check_file_exists)]
    pub role_in_cancer_path: Option<PathBuf>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "actionable")]
    #[clap(help = "JSON map of variant id to actionable phenotype ids")]
    #[clap(value_name = "ACTIONABLE")]
    #[arg(value_parser = check_file_exists)]
    pub actionable_path: Option<PathBuf>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "include-untiered")]
    #[clap(help = "Emit untiered evidence for consequences without a panel match (default strategy only)")]
    #[clap(action = ArgAction::SetTrue)]
    pub include_untiered: bool,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "overlap")]
    #[clap(help = "Required panel region overlap percentage for Tier1")]
    #[clap(value_name = "PERCENTAGE")]
    #[clap(default_value = "90.0")]
    #[arg(value_parser = ensure_percentage)]
    pub required_overlap_percentage: f64,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct SecondaryArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "variants")]
    #[clap(help = "Annotated variants, one JSON document per line (.gz supported)")]
    #[clap(value_name = "VARIANTS")]
    #[arg(value_parser = check_file_exists)]
    pub variants_path: PathBuf,

    #[clap(required = true)]
    #[clap(long = "actionable")]
    #[clap(help = "JSON map of variant id to actionable phenotype ids")]
    #[clap(value_name = "ACTIONABLE")]
    #[arg(value_parser = check_file_exists)]
    pub actionable_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,
}

pub fn init_verbose(cli: &Cli) {
    let filter_level: LevelFilter = match cli.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn ensure_percentage(s: &str) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("Could not parse float: {}", e))?;
    if !(0.0..=100.0).contains(&value) {
        Err(format!(
            "The value must be between 0.0 and 100.0, got: {}",
            value
        ))
    } else {
        Ok(value)
    }
}
