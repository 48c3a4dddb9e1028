mod report;

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use warden_core::{quarantine_playlist, validate_playlist, PlaylistScanner, ValidationStats};

use crate::report::{QuarantineAction, ReportOptions};

#[derive(Parser)]
#[command(name = "playlist-warden")]
#[command(version, about = "Validate playlist files in a music collection", long_about = None)]
struct Cli {
    /// Path to the music collection root directory
    path: PathBuf,

    /// Hide detailed information about invalid playlists
    #[arg(long)]
    no_details: bool,

    /// Show valid playlists in the output
    #[arg(long)]
    show_valid: bool,

    /// Move invalid playlists to this quarantine directory
    #[arg(long, value_name = "PATH")]
    quarantine: Option<PathBuf>,

    /// Show what would be quarantined without actually moving files
    #[arg(long)]
    dry_run: bool,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Invocation errors are fatal before any scanning begins.
    if !cli.path.exists() {
        bail!("Path '{}' does not exist", cli.path.display());
    }
    if !cli.path.is_dir() {
        bail!("Path '{}' is not a directory", cli.path.display());
    }
    if cli.dry_run && cli.quarantine.is_none() {
        bail!("--dry-run can only be used with --quarantine");
    }

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = ReportOptions {
        show_details: !cli.no_details,
        show_valid: cli.show_valid,
    };

    print!("{}", report::scan_header(&cli.path, cli.quarantine.as_deref(), cli.dry_run));

    let playlists = PlaylistScanner::new()
        .follow_links(cli.follow_links)
        .scan(&cli.path)?;

    let mut stats = ValidationStats::new();
    stats.playlists_found = playlists.len();

    if playlists.is_empty() {
        println!("No playlist files found!");
    } else {
        println!("Found {} playlist files\n", playlists.len());

        for playlist in &playlists {
            let result = validate_playlist(playlist, &cli.path);
            stats.record(&result);

            let action = if result.is_valid() {
                QuarantineAction::None
            } else {
                match (&cli.quarantine, cli.dry_run) {
                    (Some(quarantine), false) => {
                        match quarantine_playlist(playlist, &cli.path, quarantine) {
                            Ok(_) => {
                                stats.quarantined_playlists += 1;
                                QuarantineAction::Quarantined
                            }
                            Err(err) => {
                                eprintln!("Error quarantining {}: {err}", playlist.display());
                                QuarantineAction::Failed
                            }
                        }
                    }
                    (Some(_), true) => QuarantineAction::WouldQuarantine,
                    (None, _) => QuarantineAction::None,
                }
            };

            if let Some(text) = report::playlist_report(&result, &cli.path, action, &options) {
                print!("{text}");
            }
        }
    }

    print!("{}", report::summary(&stats, cli.quarantine.is_some()));
    Ok(())
}
