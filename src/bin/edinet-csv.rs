use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use edinetkit::{
    API_KEY_ENV, CanonicalTag, CsvSink, DateRange, DocInfo, DocumentFilter, DocumentOperations,
    Edinet, EdinetConfig, FactTable, FilingMeta, FilingProcessor, FilingRow, TagCatalog,
    TagResolver, extract_instance, extract_instance_from_reader,
};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUTPUT: &str = "xbrl_financial_items.csv";

#[derive(Debug, Parser)]
#[command(name = "edinet-csv", version)]
#[command(about = "Extract financial items and ratios from EDINET XBRL filings into CSV")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Download filings from the EDINET API for a range of submission dates.
    Fetch(FetchArgs),
    /// Process local instance documents (`.xbrl`) or EDINET archives (`.zip`).
    Parse(ParseArgs),
}

#[derive(Debug, Args)]
struct FetchArgs {
    /// First submission date (YYYY-MM-DD).
    #[arg(long, default_value = "2025-07-10")]
    start: String,

    /// Last submission date, inclusive (YYYY-MM-DD).
    #[arg(long, default_value = "2025-07-16")]
    end: String,

    /// Security code of a single filer; four-digit codes get a trailing 0.
    #[arg(long)]
    code: Option<String>,

    /// Output CSV path.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Only quarterly reports (document type 130).
    #[arg(long)]
    quarter: bool,

    /// Take the first matching fact instead of preferring current-period contexts.
    #[arg(long)]
    first_match: bool,

    /// Keep the downloaded archives in this directory.
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// EDINET API subscription key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Instance documents or archives to process, in order.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output CSV path.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Document type code written to every row (e.g. 120, 130).
    #[arg(long, default_value = "")]
    doc_type: String,

    /// Take the first matching fact instead of preferring current-period contexts.
    #[arg(long)]
    first_match: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fetch(args) => fetch(args).await,
        Command::Parse(args) => parse(args),
    }
}

fn processor(first_match: bool) -> FilingProcessor {
    let resolver = if first_match {
        TagResolver::new()
    } else {
        TagResolver::current_period()
    };
    FilingProcessor::new(TagCatalog::standard()).with_resolver(resolver)
}

fn open_sink(path: &Path, processor: &FilingProcessor) -> Result<CsvSink<File>> {
    let mut sink = CsvSink::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    sink.write_header(&processor.header())?;
    Ok(sink)
}

async fn fetch(args: FetchArgs) -> Result<()> {
    let config = EdinetConfig::from_api_key(args.api_key.as_deref().unwrap_or_default())
        .context("an EDINET API key is required (--api-key or EDINET_API_KEY)")?;
    let edinet = Edinet::with_config(config).context("failed to create EDINET client")?;

    let range = DateRange::parse(&args.start, &args.end).context("invalid date range")?;
    let mut filter = DocumentFilter::new().with_quarterly_only(args.quarter);
    if let Some(code) = &args.code {
        filter = filter.with_sec_code(code);
    }
    if let Some(dir) = &args.save_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let processor = processor(args.first_match);
    let mut sink = open_sink(&args.output, &processor)?;

    info!(
        "Fetching {} to {} (document types: {:?}, security code: {})",
        range.start,
        range.end,
        filter.doc_types,
        filter.sec_code.as_deref().unwrap_or("any")
    );

    for day in range.days() {
        let date = day.format("%Y-%m-%d").to_string();
        let documents = match edinet.filings(day, &filter).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!("{}: document list unavailable, skipping day: {}", date, e);
                continue;
            }
        };

        for doc in documents {
            match fetch_row(&edinet, &processor, &date, &doc, args.save_dir.as_deref()).await {
                Ok(row) => {
                    info!(
                        "{} {} {} {}",
                        doc.doc_id, doc.sec_code, doc.filer_name, row.period_label
                    );
                    sink.write_row(&row)?;
                }
                Err(e) => warn!("Skipping {} ({}): {}", doc.doc_id, doc.filer_name, e),
            }
        }
    }

    sink.flush()?;
    info!("Wrote {} filings to {}", sink.rows_written(), args.output.display());
    Ok(())
}

async fn fetch_row(
    edinet: &Edinet,
    processor: &FilingProcessor,
    date: &str,
    doc: &DocInfo,
    save_dir: Option<&Path>,
) -> edinetkit::Result<FilingRow> {
    let archive = edinet.download_xbrl_zip(&doc.doc_id).await?;
    if let Some(dir) = save_dir {
        fs::write(dir.join(format!("{}.zip", doc.doc_id)), &archive)?;
    }
    let instance = extract_instance(&archive)?;

    let meta = FilingMeta {
        retrieval_date: date.to_string(),
        sec_code: doc.sec_code.clone(),
        filer_name: doc.filer_name.clone(),
        doc_type_code: doc.doc_type_code.clone(),
        doc_id: doc.doc_id.clone(),
    };
    processor.process_reader(&meta, instance.as_slice())
}

fn parse(args: ParseArgs) -> Result<()> {
    let processor = processor(args.first_match);
    let mut sink = open_sink(&args.output, &processor)?;

    for path in &args.files {
        match parse_row(&processor, path, &args.doc_type) {
            Ok(row) => sink.write_row(&row)?,
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    sink.flush()?;
    info!("Wrote {} filings to {}", sink.rows_written(), args.output.display());
    Ok(())
}

fn parse_row(
    processor: &FilingProcessor,
    path: &Path,
    doc_type: &str,
) -> edinetkit::Result<FilingRow> {
    let table = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("zip")) {
        let file = File::open(path)?;
        let instance = extract_instance_from_reader(BufReader::new(file))?;
        FactTable::from_bytes(&instance)?
    } else {
        FactTable::from_path(path)?
    };

    // Local files carry no document list entry; the filer comes from the DEI facts.
    let dei = |name: &'static str| {
        processor
            .resolver()
            .resolve(&table, &CanonicalTag::new(name, name))
            .unwrap_or_default()
            .to_string()
    };
    let meta = FilingMeta {
        retrieval_date: String::new(),
        sec_code: dei("jpdei_cor:SecurityCodeDEI"),
        filer_name: dei("jpdei_cor:FilerNameInJapaneseDEI"),
        doc_type_code: doc_type.to_string(),
        doc_id: path.display().to_string(),
    };
    Ok(processor.process(&meta, &table))
}
