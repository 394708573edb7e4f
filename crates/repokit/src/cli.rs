use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repokit", version, about = "Source-tree duplicate fixers and DNS record setup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Strip duplicated content from source files in place
    Fix {
        /// Fixers to run, in order (`all` runs every built-in fixer)
        #[arg(required = true, value_name = "FIXER")]
        fixers: Vec<String>,
        #[arg(long, default_value = ".", help = "Repository root the scan roots are relative to")]
        dir: PathBuf,
        #[arg(long = "root", value_name = "ROOT", help = "Directory to scan (repeatable, default: apps/api/src and libs)")]
        roots: Vec<PathBuf>,
        #[arg(long, default_value = "ts", help = "File extension to visit, without the dot")]
        ext: String,
        #[arg(long = "exclude", value_name = "MARKER", help = "Skip file names containing MARKER (repeatable, default: .spec. and .d.)")]
        exclude: Vec<String>,
        #[arg(long, default_value_t = false, help = "Report what would change without writing")]
        dry_run: bool,
    },
    /// List the built-in fixers
    Fixers,
    /// Configure DNS records at the registrar
    ///
    /// Credentials are read from GODADDY_API_KEY and GODADDY_API_SECRET.
    Dns {
        #[arg(long, value_name = "FILE", help = "JSON file with the domain and its records")]
        records: PathBuf,
        #[arg(long, default_value_t = false, help = "Log the requests without sending them")]
        dry_run: bool,
    },
}
