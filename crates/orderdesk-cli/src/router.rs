// Command routing and dispatch

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use orderdesk_config::{AppConfig, ConfigManager, SeedPolicy};

use crate::error::{CliError, CliResult};
use crate::factory::ApplicationFactory;
use crate::logging;
use crate::output::OutputStyle;
use crate::response::ApiResponse;
use crate::seed::SeedData;

/// orderdesk - users, items and orders over in-memory repositories
#[derive(Parser, Debug)]
#[command(name = "orderdesk")]
#[command(bin_name = "orderdesk")]
#[command(about = "Register users and place orders against seeded in-memory data")]
#[command(
    long_about = "orderdesk: a layered order desk backed by in-memory repositories.\n\nEvery invocation starts from fresh seed data, runs one command and prints the\n{ success, data?, error? } envelope as JSON on stdout.\n\nWithout a subcommand the demo walkthrough runs."
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON seed file (defaults to the built-in demo data)
    #[arg(long, global = true, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Fail on the first invalid seed record instead of skipping it
    #[arg(long, global = true)]
    pub strict_seed: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the reference walkthrough against the seed data
    Demo,

    /// Manage users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Manage orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum UsersAction {
    /// List all users
    List,

    /// Register a new user
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum OrdersAction {
    /// Place an order
    Create {
        #[arg(long)]
        user_id: String,

        #[arg(long)]
        item_id: String,

        #[arg(long, allow_negative_numbers = true)]
        quantity: f64,
    },

    /// List a user's orders
    List {
        #[arg(long)]
        user_id: String,
    },
}

/// Route and execute commands
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        let config = Self::load_config(&cli)?;
        logging::init_logging(logging::resolve_level(
            &config.logging.level,
            cli.verbose,
            cli.quiet,
        ))?;

        let factory = Self::build_factory(&cli, &config).await?;
        let command = cli.command.clone().unwrap_or(Commands::Demo);
        let style = OutputStyle::default();
        let mut stdout = std::io::stdout().lock();

        if Self::execute(&command, &factory, &style, &mut stdout).await? {
            Ok(())
        } else {
            Err(CliError::CommandFailed)
        }
    }

    pub fn load_config(cli: &Cli) -> CliResult<AppConfig> {
        let manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        Ok(manager.load_config()?)
    }

    /// `--seed` wins over `seed.path`; `--strict-seed` wins over `seed.policy`
    pub async fn build_factory(cli: &Cli, config: &AppConfig) -> CliResult<ApplicationFactory> {
        let seed = match cli.seed.as_ref().or(config.seed.path.as_ref()) {
            Some(path) => {
                debug!(path = %path.display(), "Reading seed file");
                SeedData::from_file(path)?
            }
            None => SeedData::demo(),
        };
        let policy = if cli.strict_seed {
            SeedPolicy::Strict
        } else {
            config.seed.policy
        };
        Ok(ApplicationFactory::new(&seed, policy).await?)
    }

    /// Run one command, writing its envelopes to `out`
    ///
    /// Returns whether every envelope reported success.
    pub async fn execute(
        command: &Commands,
        factory: &ApplicationFactory,
        style: &OutputStyle,
        out: &mut dyn Write,
    ) -> CliResult<bool> {
        match command {
            Commands::Demo => Self::run_demo(factory, style, out).await,
            Commands::Users { action } => {
                let users = factory.create_user_controller();
                match action {
                    UsersAction::List => emit(out, &users.get_users().await),
                    UsersAction::Register {
                        name,
                        email,
                        password,
                    } => emit(out, &users.register(name, email, password).await),
                }
            }
            Commands::Orders { action } => {
                let orders = factory.create_order_controller();
                match action {
                    OrdersAction::Create {
                        user_id,
                        item_id,
                        quantity,
                    } => emit(out, &orders.create_order(user_id, item_id, *quantity).await),
                    OrdersAction::List { user_id } => {
                        emit(out, &orders.get_user_orders(user_id).await)
                    }
                }
            }
        }
    }

    async fn run_demo(
        factory: &ApplicationFactory,
        style: &OutputStyle,
        out: &mut dyn Write,
    ) -> CliResult<bool> {
        let users = factory.create_user_controller();
        let orders = factory.create_order_controller();
        let mut all_ok = true;

        writeln!(out, "{}", style.section("List users"))?;
        all_ok &= emit(out, &users.get_users().await)?;

        writeln!(out, "{}", style.section("Register user"))?;
        all_ok &= emit(
            out,
            &users
                .register("Bob Smith", "bob.smith@example.com", "password123")
                .await,
        )?;

        writeln!(out, "{}", style.section("Create order"))?;
        all_ok &= emit(out, &orders.create_order("1", "1", 3.0).await)?;

        writeln!(out, "{}", style.section("List orders for user 1"))?;
        all_ok &= emit(out, &orders.get_user_orders("1").await)?;

        Ok(all_ok)
    }
}

fn emit<T: Serialize>(out: &mut dyn Write, response: &ApiResponse<T>) -> CliResult<bool> {
    serde_json::to_writer_pretty(&mut *out, response)?;
    writeln!(out)?;
    Ok(response.success)
}
