use clap::Parser;

use glean::config::{Config, DEFAULT_MODEL};
use glean::data_models::ChatReport;
use glean::processor::{ChatOptions, Processor};

/// Search the web for a URL or query and summarize each result with an LLM.
#[derive(Debug, Parser)]
#[command(name = "glean", version)]
struct Args {
    /// URL or search query to analyze.
    query: String,

    /// Maximum number of search results to process.
    #[arg(long, default_value_t = 3)]
    max_results: usize,

    /// Model id to request from the completion API.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Stream the completion over SSE instead of a single response body.
    #[arg(long)]
    stream: bool,

    /// Print the full report as JSON instead of markdown sections.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = Config::resolve(None, None)?;
    let processor = Processor::new(&config)?;

    let options = ChatOptions {
        max_results: args.max_results,
        model: args.model,
        stream: args.stream,
    };
    let report = processor.chat(&args.query, &options).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &ChatReport) {
    match report {
        ChatReport::Completed {
            query,
            total_results,
            analyses,
            ..
        } => {
            println!("# {query} ({total_results} results)\n");
            for analysis in analyses {
                println!(
                    "## [{}] {} (score: {:.2})",
                    analysis.result_index + 1,
                    analysis.title,
                    analysis.score
                );
                println!("{}\n", analysis.url);
                println!("{}\n", analysis.analysis);
            }
        }
        ChatReport::Failed { query, error, .. } => {
            println!("{error} for query: {query}");
        }
    }
}
