//! blogfeed CLI
//!
//! Prints the aggregation API results as JSON, for inspecting a content
//! endpoint or feeding a static build.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use blogfeed::{
    Blog,
    error::{AppError, Result},
    models::Config,
    source::FileContentSource,
};

/// blogfeed - Blog content aggregation
#[derive(Parser, Debug)]
#[command(name = "blogfeed", version, about = "Blog content aggregation")]

struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "blogfeed.toml")]
    config: PathBuf,

    /// Read content from a local JSON file instead of the endpoint
    #[arg(long, global = true)]
    source_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all published posts, newest first
    Posts,

    /// List all post slugs
    Slugs,

    /// Show a single post with its structured data
    Post { slug: String },

    /// List featured posts
    Featured {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List posts related to a post
    Related {
        slug: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search posts
    Search {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List categories with post counts
    Categories,

    /// List one page of a category
    Category {
        name: String,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show site statistics
    Stats,

    /// Print the XML sitemap
    Sitemap,

    /// Validate the configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env();

    if let Command::Validate = cli.command {
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Config OK (endpoint {})", config.source.endpoint);
        return Ok(());
    }

    let blog = match &cli.source_file {
        Some(path) => {
            log::info!("Reading content from {}", path.display());
            Blog::with_source(FileContentSource::new(path), &config)
        }
        None => Blog::from_config(&config)?,
    };
    let listing = blog.listing().clone();

    match cli.command {
        Command::Posts => print_json(&blog.get_all_posts().await)?,
        Command::Slugs => print_json(&blog.get_all_post_slugs().await)?,
        Command::Post { slug } => {
            let post = find_post(&blog, &slug).await?;
            print_json(&post)?;
        }
        Command::Featured { limit } => {
            let limit = limit.unwrap_or(listing.featured_limit);
            print_json(&blog.get_featured_posts(limit).await)?;
        }
        Command::Related { slug, limit } => {
            let post = find_post(&blog, &slug).await?;
            let limit = limit.unwrap_or(listing.related_limit);
            print_json(&blog.get_related_posts(&post, limit).await)?;
        }
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(listing.search_limit);
            let results = blog.search_posts(&query, limit).await;
            log::info!("Search {:?}: {} results", results.query, results.posts.len());
            print_json(&results)?;
        }
        Command::Categories => print_json(&blog.get_all_categories().await)?,
        Command::Category {
            name,
            page,
            page_size,
        } => {
            let page_size = page_size.unwrap_or(listing.page_size).max(1);
            print_json(&blog.get_posts_by_category(&name, page, page_size).await)?;
        }
        Command::Stats => print_json(&blog.get_site_stats().await)?,
        Command::Sitemap => print!("{}", blog.get_sitemap_xml().await),
        // Handled before the API is built.
        Command::Validate => {}
    }

    Ok(())
}

async fn find_post(blog: &Blog, slug: &str) -> Result<blogfeed::models::Post> {
    match blog.get_post_by_slug(slug).await {
        Some(post) => Ok(post),
        None => {
            log::error!("No post with slug '{}'", slug);
            Err(AppError::validation(format!("unknown slug '{slug}'")))
        }
    }
}
