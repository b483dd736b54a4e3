//! Catalog navigation command line.
//!
//! Loads a category tree file and prints the navigation built from it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use catalog_navigation::{
    CategoryId, CategoryTree, Config, MokaTagCache, NavigationBuilder, NavigationType,
};

#[derive(Debug, Parser)]
#[command(name = "catnav", version, about = "Build catalog navigation menus")]
struct Cli {
    /// Category tree file (.yaml, .yml or .json). Falls back to CATEGORY_TREE_PATH.
    #[arg(long, global = true)]
    tree: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the navigation below a root category.
    Build {
        /// Root category id.
        #[arg(long)]
        root: CategoryId,

        /// Navigation channel: desktop or mobile.
        #[arg(long = "type", default_value = "desktop")]
        navigation_type: NavigationType,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the cache identities of the navigation below a root category.
    Identities {
        /// Root category id.
        #[arg(long)]
        root: CategoryId,

        /// Navigation channel: desktop or mobile.
        #[arg(long = "type", default_value = "desktop")]
        navigation_type: NavigationType,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let tree_path = cli
        .tree
        .or_else(|| config.category_tree_path.clone())
        .context("no category tree given; pass --tree or set CATEGORY_TREE_PATH")?;

    let store = CategoryTree::load(&tree_path)
        .and_then(CategoryTree::into_store)
        .with_context(|| format!("failed to load category tree {}", tree_path.display()))?;
    info!(path = %tree_path.display(), categories = store.len(), "Category tree loaded");

    let builder = NavigationBuilder::from_config(store, MokaTagCache::from_config(&config), &config);

    match cli.command {
        Command::Build {
            root,
            navigation_type,
            format,
        } => {
            let items = builder
                .build(root, navigation_type)
                .with_context(|| format!("failed to build {navigation_type} navigation for {root}"))?;

            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&items)?,
                OutputFormat::Yaml => serde_yml::to_string(&items)?,
            };
            println!("{output}");
        }
        Command::Identities {
            root,
            navigation_type,
        } => {
            builder
                .build(root, navigation_type)
                .with_context(|| format!("failed to build {navigation_type} navigation for {root}"))?;

            for identity in builder.identities(root, navigation_type)? {
                println!("{identity}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
