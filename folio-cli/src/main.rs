//! Folio CLI
//!
//! Command-line interface for Folio - fetches site content the way the
//! site does and prints the resulting envelope.

mod config;
mod display;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use folio_core::{ContentFetcher, ContentKind, ContentRequest};
use tracing::debug;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Fetch portfolio content from WordPress with bundled fallbacks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: CliConfig,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Homepage hero, about and contact sections
    Homepage,

    /// Latest projects
    Projects {
        /// Number of projects
        #[arg(long)]
        limit: Option<String>,
    },

    /// Latest blog posts
    Posts {
        /// Number of posts
        #[arg(long)]
        limit: Option<String>,

        /// Leave out the post with this slug
        #[arg(long)]
        exclude: Option<String>,
    },

    /// A single post
    Post {
        /// Post slug
        slug: String,
    },

    /// A single project
    Project {
        /// Project slug
        slug: String,
    },

    /// The about page
    About,

    /// Homepage sections, projects and posts fetched together
    Bundle,

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// The content request behind a single-fetch command.
    fn request(self) -> Option<ContentRequest> {
        let request = match self {
            Commands::Homepage => ContentRequest::homepage(),
            Commands::Projects { limit } => {
                with_limit(ContentRequest::new(ContentKind::ProjectList), limit)
            }
            Commands::Posts { limit, exclude } => {
                let request = with_limit(ContentRequest::new(ContentKind::PostList), limit);
                match exclude {
                    Some(slug) => request.excluding(slug),
                    None => request,
                }
            }
            Commands::Post { slug } => ContentRequest::post(slug),
            Commands::Project { slug } => ContentRequest::project(slug),
            Commands::About => ContentRequest::about_page(),
            Commands::Bundle | Commands::Completions { .. } => return None,
        };
        Some(request)
    }
}

fn with_limit(request: ContentRequest, limit: Option<String>) -> ContentRequest {
    match limit {
        Some(limit) => request.with_limit(limit),
        None => request,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("folio=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
        }
        Commands::Bundle => {
            let fetcher = ContentFetcher::from_config(cli.config.content_config())?;
            let bundle = fetcher.fetch_homepage_bundle().await;
            display::bundle_provenance(&bundle);
            display::print_json(&bundle, pretty)?;
        }
        command => {
            let config = cli.config.content_config();
            debug!(graphql = %config.graphql_url, rest = %config.rest_url, "endpoints");
            let fetcher = ContentFetcher::from_config(config)?;
            if let Some(request) = command.request() {
                let result = fetcher.fetch(&request).await;
                display::provenance(request.kind, &result);
                display::print_json(&result, pretty)?;
            }
        }
    }

    Ok(())
}
