use anyhow::Context;
use clap::Parser;
use pn_content::HttpContentFetcher;
use pn_core::{headlines, search, Config, Dataset, Overview, Query, Scope};
use pn_web::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Research the Palestine news dataset", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dataset file (JSON array of articles); overrides the config
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the JSON API
    Serve {
        /// Listen address, e.g. 0.0.0.0:5000
        #[arg(long)]
        bind: Option<String>,
    },
    /// Search the dataset and print matching articles
    Search {
        /// Keyword, matched case-insensitively
        #[arg(long)]
        q: Option<String>,
        /// Content type: post, video, liveblog, episode
        #[arg(long = "type")]
        kind: Option<String>,
        /// Fields to search: title, content or both
        #[arg(long, default_value = "both")]
        scope: String,
        #[arg(long)]
        date_from: Option<String>,
        #[arg(long)]
        date_to: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Print dataset statistics and the monthly timeline
    Stats,
    /// Print the headlines published on one day
    Headlines {
        /// Day in YYYY-MM-DD form
        #[arg(long)]
        date: String,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pn_core::logging::init_logging();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let dataset = Dataset::load(&config.data_path).with_context(|| {
        format!(
            "cannot start without the dataset at {}; run the combine step first",
            config.data_path.display()
        )
    })?;
    let dataset = Arc::new(dataset);

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let content = Arc::new(HttpContentFetcher::new(&config.fetch)?);
            info!("🚀 Starting news research server with {} articles", dataset.len());
            let state = AppState::new(dataset, config, content);
            pn_web::serve(state, &bind).await?;
        }
        Commands::Search {
            q,
            kind,
            scope,
            date_from,
            date_to,
            limit,
        } => {
            let query = Query::new()
                .with_keyword(q.as_deref().unwrap_or_default())
                .with_scope(Scope::parse(&scope))
                .with_content_type(kind.as_deref().unwrap_or_default())
                .with_date_from(date_from.as_deref().unwrap_or_default())
                .with_date_to(date_to.as_deref().unwrap_or_default());

            let outcome = search(dataset.articles(), &query);
            println!("Found {} articles", outcome.total_count);
            for article in outcome.matches.iter().take(limit) {
                println!(
                    "{:>6}  {:<10}  [{}]  {}",
                    article.id,
                    article.date,
                    article.kind.label(),
                    article.title
                );
            }
        }
        Commands::Stats => {
            let overview = Overview::compute(dataset.articles());
            let stats = &overview.stats;
            println!("Total articles: {}", stats.total_articles);
            if let (Some(start), Some(end)) = (&stats.date_range.start, &stats.date_range.end) {
                println!("Date range: {} to {}", start, end);
            }
            println!("Articles with images: {}", stats.articles_with_images);
            println!("Article types:");
            for (kind, count) in &stats.article_types {
                println!("  - {}: {}", kind, count);
            }
            println!("Timeline:");
            for (month, count) in &overview.timeline {
                println!("  {}  {}", month, count);
            }
        }
        Commands::Headlines { date } => {
            let found = headlines::headlines(dataset.articles(), &date);
            println!(
                "{}: {} articles",
                pn_core::dates::format_arabic(&date),
                found.len()
            );
            for headline in found {
                println!("- [{}] {}  {}", headline.kind.label(), headline.title, headline.link);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from([
            "pn", "--data", "articles.json", "search", "--q", "غزة", "--type", "video",
            "--scope", "title", "--limit", "5",
        ])
        .unwrap();

        assert_eq!(cli.data, Some(PathBuf::from("articles.json")));
        match cli.command {
            Commands::Search { q, kind, scope, limit, .. } => {
                assert_eq!(q.as_deref(), Some("غزة"));
                assert_eq!(kind.as_deref(), Some("video"));
                assert_eq!(scope, "title");
                assert_eq!(limit, 5);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_data_flag_overrides_config() {
        let cli = Cli::try_parse_from(["pn", "stats", "--data", "/tmp/a.json"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/tmp/a.json"));
        assert_eq!(config.server.bind, "0.0.0.0:5000");
    }

    #[test]
    fn test_headlines_requires_date() {
        assert!(Cli::try_parse_from(["pn", "headlines"]).is_err());
    }
}
