use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use logout_clock::OutputFormat;
use logout_clock::commands;
use logout_clock::commands::calc::CalcArgs;
use logout_clock::config;
use logout_clock::error::Field;
use logout_clock::platform;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lgo")]
#[command(about = "Work out when you can log out today")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DateArg {
    #[arg(long, help = "Date the last login happened on (YYYY-MM-DD, default today)")]
    date: Option<NaiveDate>,
}

impl DateArg {
    fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate from arguments without touching the saved form
    Calc {
        #[arg(long, help = "Time you first logged in (HH:MM)")]
        login_time: Option<String>,
        #[arg(long, help = "Hours required today (HH:MM, default from config)")]
        required_hours: Option<String>,
        #[arg(long, help = "Hours already worked (HH:MM)")]
        effective_hours: Option<String>,
        #[arg(long, help = "Time of your latest login (HH:MM)")]
        last_login_time: Option<String>,
        #[command(flatten)]
        date: DateArg,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Set a field on the saved form
    Set {
        #[arg(value_enum, help = "Form field")]
        field: Field,
        #[arg(help = "Value (HH:MM, empty string to blank it)")]
        value: String,
    },
    /// Calculate the logout time from the saved form
    Calculate {
        #[command(flatten)]
        date: DateArg,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Reset the saved form
    Clear,
    /// Show the saved form and its result
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    /// Write a default config.toml
    Init,
}

fn init_tracing() {
    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!("Config could not be loaded ({:#}); using defaults", e);
        config::Config::default()
    });

    match &cli.command {
        Commands::Calc {
            login_time,
            required_hours,
            effective_hours,
            last_login_time,
            date,
            format,
        } => {
            let args = CalcArgs {
                login_time: login_time.clone(),
                required_hours: required_hours.clone(),
                effective_hours: effective_hours.clone(),
                last_login_time: last_login_time.clone(),
            };
            commands::calc::calc(&config, &args, date.today(), *format)?;
        }
        Commands::Set { field, value } => {
            commands::form::set(&config, *field, value)?;
        }
        Commands::Calculate { date, format } => {
            commands::form::calculate(&config, date.today(), *format)?;
        }
        Commands::Clear => {
            commands::form::clear(&config)?;
        }
        Commands::Show { format } => {
            commands::form::show(&config, *format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
            ConfigAction::Init => commands::config::init(&platform::config_path()?)?,
        },
    }

    Ok(())
}
