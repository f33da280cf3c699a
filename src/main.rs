use anyhow::{Context, Result};
use article_query::config::{find_config_file, get_config, load_config, Config};
use article_query::executor::{HttpExecutor, QueryExecutor};
use article_query::models::{Article, QueryOper, QueryValues};
use article_query::pagination::{IterOptions, QueryArticlesIter};
use article_query::query::{QueryArticles, QueryArticlesArgs};
use clap::{Args, Parser, Subcommand, ValueEnum};
use futures_util::StreamExt;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Article Query - Search news articles and page through the results
#[derive(Parser, Debug)]
#[command(name = "article-query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search news articles and page through the results", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Boolean operator joining multiple values
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Oper {
    And,
    Or,
}

impl From<Oper> for QueryOper {
    fn from(oper: Oper) -> Self {
        match oper {
            Oper::And => QueryOper::And,
            Oper::Or => QueryOper::Or,
        }
    }
}

/// Filters shared by every command
#[derive(Args, Debug)]
struct QueryOpts {
    /// Keyword or phrase (repeat for several)
    #[arg(long = "keyword", short)]
    keywords: Vec<String>,

    /// Operator joining multiple keywords
    #[arg(long, value_enum)]
    keyword_oper: Option<Oper>,

    /// Concept URI (repeat for several)
    #[arg(long)]
    concept_uri: Vec<String>,

    /// Category URI (repeat for several)
    #[arg(long)]
    category_uri: Vec<String>,

    /// News source URI (repeat for several)
    #[arg(long)]
    source_uri: Vec<String>,

    /// Article language code, e.g. "eng" (repeat for several)
    #[arg(long, short)]
    lang: Vec<String>,

    /// Exclude articles mentioning this keyword (repeat for several)
    #[arg(long = "ignore-keyword")]
    ignore_keywords: Vec<String>,

    /// Earliest publish date (YYYY-MM-DD)
    #[arg(long)]
    date_start: Option<String>,

    /// Latest publish date (YYYY-MM-DD)
    #[arg(long)]
    date_end: Option<String>,

    /// Query these article URIs instead of filtering (repeat for several)
    #[arg(long, conflicts_with = "complex")]
    uri: Vec<String>,

    /// Complex query as a JSON document
    #[arg(long)]
    complex: Option<String>,
}

/// Paging and sorting for `search`
#[derive(Args, Debug)]
struct PageOpts {
    /// Stop after this many articles
    #[arg(long, short)]
    max_items: Option<usize>,

    /// Sort key (e.g. "rel", "date", "sourceImportance")
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort ascending
    #[arg(long)]
    asc: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the request parameters as JSON without contacting the service
    Params {
        #[command(flatten)]
        query: QueryOpts,
    },

    /// Print the number of matching articles
    Count {
        #[command(flatten)]
        query: QueryOpts,
    },

    /// Page through matching articles
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        query: QueryOpts,

        #[command(flatten)]
        page: PageOpts,

        /// Print one JSON object per article
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => get_config()?,
    };

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("article_query={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    match cli.command {
        Commands::Params { query } => {
            let query = build_query(&query)?;
            println!("{}", serde_json::to_string_pretty(&query.query_params())?);
        }

        Commands::Count { query } => {
            let query = build_query(&query)?;
            let iter = QueryArticlesIter::from_query(
                executor(&config)?,
                query,
                IterOptions::from(&config.pagination),
            );
            println!("{}", iter.count().await?);
        }

        Commands::Search { query, page, json } => {
            let query = build_query(&query)?;
            let iter = QueryArticlesIter::from_query(
                executor(&config)?,
                query,
                iter_options(&config, page),
            );

            let mut total = 0;
            let stream = iter.into_stream();
            futures_util::pin_mut!(stream);
            while let Some(batch) = stream.next().await {
                let batch = batch?;
                if let Some(err) = &batch.error {
                    if !cli.quiet {
                        eprintln!("Page {} failed: {}", batch.page, err);
                    }
                    continue;
                }
                for item in &batch.items {
                    print_article(item, json)?;
                }
                total += batch.items.len();
            }

            if !cli.quiet {
                eprintln!("{} articles", total);
            }
        }
    }

    Ok(())
}

fn executor(config: &Config) -> Result<Arc<dyn QueryExecutor>> {
    Ok(Arc::new(HttpExecutor::from_config(&config.api)?))
}

/// Configured pagination defaults, overridden by command line flags
fn iter_options(config: &Config, page: PageOpts) -> IterOptions {
    let mut options = IterOptions::from(&config.pagination);
    if let Some(sort_by) = page.sort_by {
        options.sort_by = sort_by;
    }
    if page.asc {
        options.sort_by_asc = true;
    }
    if page.max_items.is_some() {
        options.max_items = page.max_items;
    }
    options
}

fn build_query(opts: &QueryOpts) -> Result<QueryArticles> {
    if let Some(raw) = &opts.complex {
        let complex: Value =
            serde_json::from_str(raw).context("--complex must be a JSON document")?;
        return Ok(QueryArticles::init_with_complex_query(complex)?);
    }
    if !opts.uri.is_empty() {
        return Ok(QueryArticles::init_with_article_uri_list(opts.uri.clone()));
    }

    let mut args = QueryArticlesArgs {
        keywords: query_values(&opts.keywords, opts.keyword_oper),
        concept_uri: query_values(&opts.concept_uri, None),
        category_uri: query_values(&opts.category_uri, None),
        source_uri: query_values(&opts.source_uri, None),
        lang: query_values(&opts.lang, None),
        ignore_keywords: query_values(&opts.ignore_keywords, None),
        ..QueryArticlesArgs::default()
    };
    if let Some(date) = &opts.date_start {
        args = args.date_start(date.as_str());
    }
    if let Some(date) = &opts.date_end {
        args = args.date_end(date.as_str());
    }

    Ok(QueryArticles::new(args)?)
}

/// No values, a single value, or a list joined by `oper`
fn query_values(values: &[String], oper: Option<Oper>) -> Option<QueryValues> {
    match (values, oper) {
        ([], _) => None,
        ([single], _) => Some(QueryValues::single(single.as_str())),
        (_, Some(oper)) => Some(QueryValues::list(values.iter().cloned()).oper(oper.into())),
        (_, None) => Some(QueryValues::list(values.iter().cloned())),
    }
}

fn print_article(item: &Value, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(item)?);
        return Ok(());
    }

    let article = Article::from_value(item.clone())?;
    let date = article.date.as_deref().unwrap_or("----------");
    match article.source_title() {
        Some(source) => println!("{}  {} ({})", date, article.title, source),
        None => println!("{}  {}", date, article.title),
    }
    Ok(())
}
