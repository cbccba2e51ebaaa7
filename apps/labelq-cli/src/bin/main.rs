use std::path::PathBuf;

use clap::{Parser, Subcommand};

use labelq_cli::{recommend, PoolFile};
use labelq_core::config::{expand_path, Config};
use labelq_core::StrategyKind;
use labelq_hybrid::{available_strategies, build_learner};

#[derive(Parser)]
#[command(name = "labelq", about = "Rank a candidate pool for the next labeling round", version)]
struct Cli {
    /// Directory holding config.toml and config.<env>.toml.
    #[arg(long, default_value = ".")]
    config_dir: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the next labeling batch for a pool file as JSON.
    Recommend {
        /// Pool JSON with workspace_id, dataset_name, category_name, elements, predictions.
        #[arg(short, long)]
        pool: String,

        /// Strategy name; overrides active_learning.strategy.
        #[arg(short, long)]
        strategy: Option<String>,

        /// Batch size; overrides active_learning.sample_size.
        #[arg(short = 'k', long)]
        sample_size: Option<usize>,
    },

    /// List the available strategy names.
    Strategies,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Recommend { pool, strategy, sample_size } => {
            let config = Config::load_from(&expand_path(&cli.config_dir))?;
            let mut al = config.active_learning()?;
            if let Some(name) = strategy { al.strategy = name.parse::<StrategyKind>()?; }
            let sample_size = sample_size.unwrap_or(al.sample_size);

            let pool_path: PathBuf = expand_path(&pool);
            let pool = PoolFile::load(&pool_path)?;
            let learner = build_learner(&al)?;
            tracing::info!(strategy = learner.name(), pool = pool.elements.len(), sample_size, "recommending");

            let items = recommend(&pool, &*learner, sample_size)?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Strategies => {
            for kind in available_strategies() { println!("{kind}"); }
        }
    }
    Ok(())
}
