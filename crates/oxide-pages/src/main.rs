//! oxide-pages CLI
//!
//! Command-line tool for checking route manifests and resolving paths
//! against them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_pages::{LegacyRouteRedirectStrategy, RouteManifest};

/// Page route resolution for file-based web sites.
#[derive(Parser)]
#[command(name = "oxide-pages")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route manifest (JSON).
    #[arg(short, long, env = "OXIDE_PAGES_MANIFEST", default_value = "routes.json")]
    manifest: PathBuf,

    /// Override the manifest's legacy route strategy (allow, warn, disallow).
    #[arg(short, long)]
    legacy: Option<LegacyRouteRedirectStrategy>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths to their pages.
    Resolve {
        /// Paths to resolve.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Match routes directly, ignoring redirects.
        #[arg(long)]
        no_redirects: bool,
    },

    /// Validate the manifest.
    Check,

    /// List registered routes and redirects.
    Routes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut manifest = RouteManifest::load(&cli.manifest)?;
    if let Some(strategy) = cli.legacy {
        manifest.config.legacy_routes = strategy;
    }
    let tree = manifest.build()?;

    match cli.command {
        Commands::Resolve {
            paths,
            no_redirects,
        } => {
            for path in &paths {
                match tree.try_resolve(path, !no_redirects)? {
                    Some(resolved) => {
                        println!("{path} -> {} ({})", resolved.data, resolved.path);
                        for (name, value) in resolved.params.iter() {
                            println!("    {name} = {value:?}");
                        }
                    }
                    None => println!("{path} -> not found"),
                }
            }
        }

        Commands::Check => {
            info!(
                "Manifest OK: {} routes, {} redirects, legacy routes: {}",
                manifest.routes.len(),
                tree.redirects().len(),
                tree.config().legacy_routes
            );
            if tree.config().legacy_routes == LegacyRouteRedirectStrategy::Warn {
                info!("Legacy route matches will be logged as warnings.");
            }
        }

        Commands::Routes => {
            println!("\nRoutes:");
            println!("{:-<60}", "");
            for (route, page) in tree.route_data() {
                println!(" {route:<40} {page}");
            }

            if !tree.redirects().is_empty() {
                println!("\nRedirects:");
                println!("{:-<60}", "");
                for rule in tree.redirects().rules() {
                    println!(
                        " {:>3}. {} -> {}",
                        rule.order(),
                        rule.pattern(),
                        rule.template()
                    );
                }
            }
            println!();
        }
    }

    Ok(())
}
