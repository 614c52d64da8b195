//! Bridgequeue CLI - Inspect the queue configuration handed to the runtime bridge

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bridgequeue_core::application::constants::{
    LEGACY_PLATFORM_VERSION_THRESHOLD, LEGACY_STACK_SIZE_BYTES,
};
use bridgequeue_core::application::{resolve_server_host, DefaultQueuePolicy, LegacyStackPolicy};
use bridgequeue_infra_system::system_environment::{FINGERPRINT_ENV, PLATFORM_VERSION_ENV};
use bridgequeue_infra_system::SystemEnvironment;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "bridgequeue")]
#[command(about = "Bridge queue configuration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the environment fingerprint
    #[arg(long, global = true, env = FINGERPRINT_ENV)]
    fingerprint: Option<String>,

    /// Override the platform version
    #[arg(long, global = true, env = PLATFORM_VERSION_ENV)]
    platform_version: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default queue configuration as JSON
    Spec {
        /// Development server domain
        #[arg(short, long, default_value = "")]
        domain: String,

        /// Development server port
        #[arg(short, long, default_value = "")]
        port: String,

        /// Platform versions below this get the legacy stack size
        #[arg(long, default_value_t = LEGACY_PLATFORM_VERSION_THRESHOLD)]
        legacy_threshold: u32,

        /// Native modules stack size on legacy platforms (bytes)
        #[arg(long, default_value_t = LEGACY_STACK_SIZE_BYTES)]
        legacy_stack_size: u64,
    },

    /// Print the development server host
    Host {
        /// Development server port (default: 8081)
        #[arg(short, long, default_value = "")]
        port: String,
    },
}

fn init_logging() {
    // Logs go to stderr, stdout carries the command output
    let log_format =
        std::env::var("BRIDGEQUEUE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bridgequeue=info"));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    info!("Bridgequeue v{} (core v{})", VERSION, bridgequeue_core::VERSION);

    // clap already merged the env overrides into the flags
    let env = SystemEnvironment::detect()
        .with_overrides(cli.fingerprint, cli.platform_version.as_deref())
        .context("Failed to read execution environment")?;

    match cli.command {
        Commands::Spec {
            domain,
            port,
            legacy_threshold,
            legacy_stack_size,
        } => {
            let legacy = LegacyStackPolicy::new(legacy_threshold, legacy_stack_size)
                .context("Invalid legacy stack policy")?;
            let config = DefaultQueuePolicy::new(legacy)
                .create(&env, &domain, &port)
                .context("Queue configuration rejected")?;

            info!(
                native_modules = %config.native_modules_thread_spec(),
                js = %config.js_thread_spec(),
                "Queue configuration ready"
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?
            );
        }
        Commands::Host { port } => {
            println!("{}", resolve_server_host(&env, &port));
        }
    }

    Ok(())
}
