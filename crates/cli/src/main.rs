//! DroMed inventory command-line tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dromed_cli::commands::{self, AnalyzeOptions, GenerateOptions};
use dromed_infra::Settings;
use dromed_inventory::StockThresholds;
use dromed_observability::LogFormat;

#[derive(Parser)]
#[command(name = "dromed")]
#[command(about = "Medical-supply inventory analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify stock, recommend restocks and save reports
    Analyze {
        /// Inventory sheet (defaults to DROMED_DATA_FILE)
        #[arg(short, long)]
        data_file: Option<PathBuf>,

        /// Report output directory (defaults to DROMED_REPORTS_DIR)
        #[arg(short, long)]
        reports_dir: Option<PathBuf>,

        /// Days of supply at or below which an item is Critical
        #[arg(long)]
        critical_days: Option<f64>,

        /// Days of supply at or below which an item is Warning
        #[arg(long)]
        warning_days: Option<f64>,

        /// Print the analysis without writing report files
        #[arg(long)]
        no_save: bool,
    },

    /// Generate a mock inventory sheet
    Generate {
        /// Number of records (split evenly across categories)
        #[arg(short = 'n', long, default_value_t = 100)]
        records: usize,

        /// Output CSV path (defaults to DROMED_DATA_FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// RNG seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    dromed_observability::tracing::init(LogFormat::Compact, "warn");

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Analyze {
            data_file,
            reports_dir,
            critical_days,
            warning_days,
            no_save,
        } => {
            let thresholds = StockThresholds::new(
                critical_days.unwrap_or(settings.thresholds.critical_days()),
                warning_days.unwrap_or(settings.thresholds.warning_days()),
            )?;
            let opts = AnalyzeOptions {
                data_file: data_file.unwrap_or(settings.data_file),
                reports_dir: reports_dir.unwrap_or(settings.reports_dir),
                thresholds,
                save_tag: (!no_save).then(|| chrono::Local::now().format("%Y%m%d_%H%M").to_string()),
            };
            commands::analyze(&opts, &mut stdout)?;
        }
        Commands::Generate {
            records,
            output,
            seed,
        } => {
            let opts = GenerateOptions {
                records,
                output: output.unwrap_or(settings.data_file),
                seed,
                today: chrono::Local::now().date_naive(),
            };
            commands::generate(&opts, &mut stdout)?;
        }
    }

    Ok(())
}
