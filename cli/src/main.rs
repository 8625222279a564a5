use anyhow::Result;
use clap::Parser;
use ranker_cli::{format_hits, load_corpus};
use ranker_core::{search, Index};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Rank the documents of a corpus directory against free-text queries", long_about = None)]
struct Args {
    /// Corpus directory; every file inside becomes one document
    corpus: PathBuf,
    /// Run a single query and exit instead of prompting
    #[arg(long)]
    query: Option<String>,
    /// Print results as a JSON array instead of "label: score" lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let docs = load_corpus(&args.corpus)?;
    let index = Index::build(docs);
    tracing::info!(
        num_docs = index.num_docs(),
        num_terms = index.num_terms(),
        "indexed corpus"
    );

    if let Some(query) = args.query {
        return run_query(&index, &query, args.json);
    }

    let stdin = io::stdin();
    loop {
        print!("query> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        run_query(&index, line, args.json)?;
    }
    Ok(())
}

fn run_query(index: &Index, query: &str, json: bool) -> Result<()> {
    let hits = search(index, query);
    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("no matching documents");
    } else {
        print!("{}", format_hits(&hits));
    }
    Ok(())
}
