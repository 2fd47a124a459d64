use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use senses_qc::input::load_ratings;
use senses_qc::model::config::{
    DEFAULT_PRECISION, DEFAULT_Z_THRESHOLD, OutlierRule, RangePolicy, SensesConfig,
    SmellNormalization,
};
use senses_qc::report::write_reports;
use senses_qc::{SensesError, compute_senses, telemetry};

#[derive(Debug, Parser)]
#[command(name = "senses-qc", version, about = "SENSES (HSSTT) quality scoring")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one ratings document.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Ratings JSON document (optionally .gz).
    #[arg(long)]
    input: PathBuf,

    /// Directory for senses.json, summary.json and report.txt.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_Z_THRESHOLD)]
    z_threshold: f64,

    #[arg(long, value_enum, default_value_t = OutlierRule::LeaveOneOut)]
    outlier_rule: OutlierRule,

    #[arg(long, value_enum, default_value_t = SmellNormalization::PeakRatio)]
    smell: SmellNormalization,

    #[arg(long, value_enum, default_value_t = RangePolicy::Strict)]
    range_policy: RangePolicy,

    /// Decimal places in the serialized report.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Reject inputs whose five sequences differ in length.
    #[arg(long)]
    require_equal_lengths: bool,
}

impl RunArgs {
    fn config(&self) -> SensesConfig {
        SensesConfig {
            z_threshold: self.z_threshold,
            outlier_rule: self.outlier_rule,
            smell: self.smell,
            range_policy: self.range_policy,
            precision: self.precision,
            require_equal_lengths: self.require_equal_lengths,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!(kind = ?err.kind(), "{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SensesError> {
    match cli.command {
        Command::Run(args) => run_scoring(&args),
    }
}

fn run_scoring(args: &RunArgs) -> Result<(), SensesError> {
    let config = args.config();
    let ratings = load_ratings(&args.input)?;
    let outcome = compute_senses(&ratings, &config)?;

    if let Some(out_dir) = &args.out {
        write_reports(&outcome, &config, out_dir)?;
    }

    println!("{}", outcome.report);
    println!("composite: {}", outcome.composite);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
