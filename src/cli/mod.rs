mod clean;
mod create;
mod info;
mod list;
mod new;
mod stats;
mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};
use crate::models::{config, Difficulty, Status};
use crate::paths::{self, Layout};
use crate::repository::ProblemRepository;
use crate::scaffold::ScaffoldTemplate;

#[derive(Parser)]
#[command(name = "jsc")]
#[command(version, about = "Manage JavaScript practice problems", long_about = None)]
pub struct Cli {
    /// Workspace root holding the problems, playground and cache directories
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the tests for a problem against your playground code
    Test {
        id: String,
        #[arg(short, long)]
        watch: bool,
    },
    /// Copy a problem's template into the playground
    Create {
        id: String,
        /// Overwrite existing playground code
        #[arg(short, long)]
        force: bool,
    },
    /// List problems
    List {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, value_enum, ignore_case = true)]
        difficulty: Option<Difficulty>,
        #[arg(short, long, value_enum, ignore_case = true)]
        status: Option<Status>,
        #[arg(long)]
        json: bool,
    },
    /// Check that problems have a README, template and tests
    Validate { id: Option<String> },
    /// Scaffold a new problem
    New {
        name: String,
        #[arg(short, long, value_enum, default_value_t = ScaffoldTemplate::Basic)]
        template: ScaffoldTemplate,
        #[arg(short, long, default_value = crate::models::DEFAULT_CATEGORY)]
        category: String,
        #[arg(short, long, value_enum, ignore_case = true, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
    },
    /// Show details for a problem
    Info { id: String },
    /// Show progress statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Remove generated files
    Clean {
        /// Remove cache and playground code
        #[arg(short, long)]
        all: bool,
        /// Remove generated test modules only
        #[arg(short, long)]
        cache: bool,
    },
}

/// Everything a command needs: resolved directories and runner settings.
pub struct Context {
    pub config: config::Config,
    pub layout: Layout,
}

impl Context {
    fn load(root: &Path) -> Result<Self> {
        let root = paths::resolve(root, &[]);
        let config = config::load_config(&root)?;
        let layout = config.layout(&root);
        tracing::debug!(?layout, "workspace layout");
        Ok(Self { config, layout })
    }

    pub fn repository(&self) -> ProblemRepository {
        ProblemRepository::new(self.layout.clone())
    }
}

pub fn run(cli: Cli) {
    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().map_err(Error::io(Path::new(".")))?,
    };
    let ctx = Context::load(&root)?;

    match cli.command {
        None => list::list_problems(&ctx, None, None, None, false),
        Some(Commands::Test { id, watch }) => test::test_problem(&ctx, &id, watch),
        Some(Commands::Create { id, force }) => create::create_playground(&ctx, &id, force),
        Some(Commands::List {
            category,
            difficulty,
            status,
            json,
        }) => list::list_problems(&ctx, category, difficulty, status, json),
        Some(Commands::Validate { id }) => validate::validate(&ctx, id.as_deref()),
        Some(Commands::New {
            name,
            template,
            category,
            difficulty,
        }) => new::new_problem(&ctx, &name, template, category, difficulty),
        Some(Commands::Info { id }) => info::show_info(&ctx, &id),
        Some(Commands::Stats { json }) => stats::show_stats(&ctx, json),
        Some(Commands::Clean { all, cache }) => clean::clean(&ctx, all, cache),
    }
}
