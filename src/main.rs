use std::{
    io::{self, Write},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use keyword_index::{
    loader::{load_keywords, load_text},
    report::{format_positions, HashStructure, HashTree, IndexReport, TrieTree, SAMPLE_SLOTS},
    Corpus, EngineKind, HashKeywordIndex, IndexConfig, KeywordIndex, Result, TrieKeywordIndex,
};
use log::{info, warn, LevelFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Engine {
    Hash,
    Trie,
    Both,
}

impl Engine {
    fn includes(self, kind: EngineKind) -> bool {
        match self {
            Self::Both => true,
            Self::Hash => kind == EngineKind::Hash,
            Self::Trie => kind == EngineKind::Trie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Alphabetical word list with positions and missing keywords
    Index,
    /// Tree rendering of each index
    Tree,
    /// Hash slot occupancy and collision analysis
    Structure,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the text to index
    #[arg(long)]
    text: PathBuf,

    /// Path to the keyword list, separated by commas or newlines
    #[arg(long)]
    keywords: PathBuf,

    /// Index structure to build
    #[arg(short, long, value_enum, default_value_t = Engine::Both)]
    engine: Engine,

    /// What to print once the indexes are built
    #[arg(long, value_enum, default_value_t = View::Index)]
    view: View,

    /// Print index reports as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// JSON file overriding the index configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Look words up from stdin until "exit"
    #[arg(short, long, default_value = "false")]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Indexes {
    hash: HashKeywordIndex,
    trie: TrieKeywordIndex,
}

impl Indexes {
    fn built(&self) -> Vec<&dyn KeywordIndex> {
        [
            &self.hash as &dyn KeywordIndex,
            &self.trie as &dyn KeywordIndex,
        ]
        .into_iter()
        .filter(|index| index.is_built())
        .collect()
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => IndexConfig::from_path(path)?,
        None => IndexConfig::default(),
    };

    let text = load_text(&args.text)?;
    let keywords = load_keywords(&args.keywords)?;
    let corpus = Corpus::from_text(&text)?;

    if corpus.is_empty() {
        warn!("{} contains no words", args.text.display());
    }
    info!(
        "Loaded {} tokens ({} distinct words) and {} keywords",
        corpus.num_tokens(),
        corpus.len(),
        keywords.len()
    );

    let mut indexes = Indexes {
        hash: HashKeywordIndex::new(config.clone()),
        trie: TrieKeywordIndex::new(config),
    };

    if args.engine.includes(EngineKind::Hash) {
        indexes.hash.build(&mut corpus.clone(), &keywords)?;
    }
    if args.engine.includes(EngineKind::Trie) {
        // The trie build reorders the corpus it is given
        indexes.trie.build(&mut corpus.clone(), &keywords)?;
    }

    match args.view {
        View::Index => print_reports(&indexes, &keywords, args.json)?,
        View::Tree => {
            if let Some(table) = indexes.hash.table() {
                println!("{}", HashTree(table));
            }
            if let Some(trie) = indexes.trie.trie() {
                println!("{}", TrieTree(trie));
            }
        }
        View::Structure => {
            if let Some(table) = indexes.hash.table() {
                println!("{}", HashStructure(&table.stats(SAMPLE_SLOTS)));
            }
            if let Some(trie) = indexes.trie.trie() {
                println!("=== Trie Structure ===");
                println!("Words: {}", trie.len());
                println!("Nodes: {}", trie.num_nodes());
            }
        }
    }

    if args.interactive {
        query_loop(&indexes.built())?;
    }

    Ok(())
}

fn print_reports(indexes: &Indexes, keywords: &[String], json: bool) -> Result<()> {
    let reports: Vec<IndexReport> = indexes
        .built()
        .into_iter()
        .filter_map(|index| IndexReport::new(index, keywords))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in reports {
            println!("{report}");
        }
    }

    Ok(())
}

fn query_loop(indexes: &[&dyn KeywordIndex]) -> Result<()> {
    let mut buffer = String::new();

    println!("Enter a word to look up (\"exit\" to quit):");

    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let word = buffer.trim();
        if word == "exit" {
            break;
        }
        if word.is_empty() {
            continue;
        }

        for index in indexes {
            let start = Instant::now();
            match index.query(word) {
                Some(positions) => {
                    println!("[{}] {word}: {}", index.kind(), format_positions(positions));
                }
                None => println!("[{}] {word}: not found", index.kind()),
            }
            println!("Time taken: {:?}", start.elapsed());
        }
    }

    Ok(())
}
