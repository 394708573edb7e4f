// # repokit - Repository Maintenance CLI
//
// Thin front end over repokit-core. All heuristics, scanning and DNS logic
// live in the library; this binary only:
// 1. Parses arguments
// 2. Reads credentials and log level from the environment
// 3. Registers providers
// 4. Prints reports and maps results to exit codes
//
// ## Commands
//
// - `repokit fix <FIXER>... [--dir D] [--root R]... [--ext EXT] [--exclude M]... [--dry-run]`
// - `repokit fixers`
// - `repokit dns --records records.json [--dry-run]`
//
// ## Environment
//
// - `GODADDY_API_KEY` / `GODADDY_API_SECRET`: registrar credentials (dns only)
// - `GODADDY_API_URL`: API base URL override, e.g. the OTE sandbox
// - `REPOKIT_LOG_LEVEL`: trace, debug, info, warn, error (default: warn)
//
// ## Example
//
// ```bash
// repokit fix all --dir ~/src/platform --dry-run
//
// export GODADDY_API_KEY=...
// export GODADDY_API_SECRET=...
// repokit dns --records deploy/dns-records.json
// ```

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use repokit_core::config::{ProviderConfig, RecordSet, ScanConfig};
use repokit_core::scan::collect_files;
use repokit_core::{DnsConfig, DnsUpdater, FixEngine, FixerRegistry, ProviderRegistry};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes
///
/// - 0: Everything succeeded
/// - 1: A required DNS record was rejected, or the run could not complete
/// - 2: Invalid configuration or arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepokitExitCode {
    /// Clean exit
    Success = 0,
    /// A required record failed or the runtime could not start
    Failure = 1,
    /// Configuration error
    ConfigError = 2,
}

impl From<RepokitExitCode> for ExitCode {
    fn from(code: RepokitExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Registrar credentials, read from the environment
struct Credentials {
    api_key: String,
    api_secret: String,
    base_url: Option<String>,
}

impl Credentials {
    /// Load credentials from environment variables
    fn from_env() -> Result<Self> {
        let api_key = env::var("GODADDY_API_KEY").unwrap_or_default();
        let api_secret = env::var("GODADDY_API_SECRET").unwrap_or_default();
        let base_url = env::var("GODADDY_API_URL").ok().filter(|u| !u.is_empty());

        if api_key.is_empty() || api_secret.is_empty() {
            anyhow::bail!(
                "GODADDY_API_KEY and GODADDY_API_SECRET are required. \
                Set them via: export GODADDY_API_KEY=... GODADDY_API_SECRET=..."
            );
        }

        if let Some(ref url) = base_url
            && !url.starts_with("https://")
            && !url.starts_with("http://")
        {
            anyhow::bail!("GODADDY_API_URL must use HTTP or HTTPS scheme. Got: {}", url);
        }

        Ok(Self {
            api_key,
            api_secret,
            base_url,
        })
    }

    fn into_provider_config(self) -> ProviderConfig {
        ProviderConfig::GoDaddy {
            api_key: self.api_key,
            api_secret: self.api_secret,
            base_url: self.base_url,
        }
    }
}

fn log_level_from_env() -> Result<Level> {
    let raw = env::var("REPOKIT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    match raw.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "REPOKIT_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            raw
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match log_level_from_env() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return RepokitExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return RepokitExitCode::ConfigError.into();
    }

    let code = match cli.command {
        Commands::Fixers => {
            let registry = FixerRegistry::builtin();
            println!(
                "{}",
                report::fixer_list(registry.iter().map(|f| (f.name(), f.title())))
            );
            RepokitExitCode::Success
        }
        Commands::Fix {
            fixers,
            dir,
            roots,
            ext,
            exclude,
            dry_run,
        } => {
            let scan = scan_config(roots, ext, exclude, dry_run);
            match run_fix(&fixers, &dir, &scan) {
                Ok(()) => RepokitExitCode::Success,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    RepokitExitCode::ConfigError
                }
            }
        }
        Commands::Dns { records, dry_run } => run_dns(&records, dry_run),
    };

    code.into()
}

fn scan_config(
    roots: Vec<PathBuf>,
    ext: String,
    exclude: Vec<String>,
    dry_run: bool,
) -> ScanConfig {
    let mut config = ScanConfig::new()
        .with_extension(ext.trim_start_matches('.'))
        .with_dry_run(dry_run);
    if !roots.is_empty() {
        config = config.with_roots(roots);
    }
    if !exclude.is_empty() {
        config = config.with_exclude(exclude);
    }
    config
}

/// Run the selected fixers over the tree, one report each
fn run_fix(names: &[String], dir: &Path, scan: &ScanConfig) -> Result<()> {
    let registry = FixerRegistry::builtin();
    let fixers = registry.resolve(names)?;

    if !dir.is_dir() {
        anyhow::bail!("--dir {} is not a directory", dir.display());
    }

    let files = collect_files(dir, scan)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    info!("Collected {} file(s) under {}", files.len(), dir.display());

    for fixer in fixers {
        println!("{}", report::fix_header(fixer.title(), scan.dry_run));
        let fix_report = FixEngine::new(fixer, scan.dry_run).run(&files);
        println!("{}", report::fix_body(&fix_report));
    }

    Ok(())
}

/// Load and validate everything the dns command needs
fn dns_config(records: &Path) -> Result<DnsConfig> {
    let credentials = Credentials::from_env()?;
    let record_set = RecordSet::from_json_file(records)?;
    let config = DnsConfig::new(credentials.into_provider_config(), record_set);
    config.validate()?;
    Ok(config)
}

fn run_dns(records: &Path, dry_run: bool) -> RepokitExitCode {
    let config = match dns_config(records) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return RepokitExitCode::ConfigError;
        }
    };

    let registry = ProviderRegistry::new();

    #[cfg(feature = "godaddy")]
    {
        info!("Registering GoDaddy provider");
        repokit_provider_godaddy::register(&registry);
    }

    let provider = match registry.create_provider(&config.provider, dry_run) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return RepokitExitCode::ConfigError;
        }
    };

    // Requests are sequential; a current-thread runtime is enough.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return RepokitExitCode::Failure;
        }
    };

    let updater = DnsUpdater::new(provider, config.domain.clone());
    println!("{}", report::dns_header(updater.domain(), dry_run));

    let dns_report = rt.block_on(updater.apply_all_with(&config.records, |outcome| {
        println!("{}", report::record_attempt(&outcome.record, &config.domain));
        println!("{}", report::record_result(outcome));
    }));

    println!("{}", report::dns_summary(&dns_report));

    if dns_report.succeeded() {
        RepokitExitCode::Success
    } else {
        RepokitExitCode::Failure
    }
}
