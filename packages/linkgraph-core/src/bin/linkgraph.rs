//! linkgraph CLI
//!
//! # Usage
//!
//! ```bash
//! # Look at the raw head of a file to decide how many lines to skip
//! linkgraph preview tweets.csv --lines 5
//!
//! # List the columns available after skipping
//! linkgraph columns tweets.csv --skip-rows 2
//!
//! # Build from flags
//! linkgraph build tweets.csv --source text --source-processing mentions-freetext \
//!     --target user --graph-type directed-multi --output-dir out/
//!
//! # Build from a YAML configuration, with an attribute table
//! linkgraph build tweets.csv more.csv --config network.yaml \
//!     --attributes users.csv --format gexf --output-dir out/ --json
//! ```
//!
//! Exit codes: 0 success, 1 error, 3 GEXF requested for a graph with no edges.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkgraph_core::config::PipelineConfig;
use linkgraph_core::features::export::{ExportArtifact, ExportError};
use linkgraph_core::shared::constants::PREVIEW_LINES;
use linkgraph_core::{
    AttributeConflictPolicy, Dataset, ExportFormat, ExtractionMode, GraphType, Pipeline,
    PipelineContext,
};
use linkgraph_table::{preview_lines, read_csv, ReadOptions};

const EXIT_EMPTY_GRAPH: u8 = 3;

#[derive(Parser)]
#[command(name = "linkgraph")]
#[command(about = "Build networks from two columns of a tabular dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first raw lines of a file
    Preview {
        file: PathBuf,

        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = PREVIEW_LINES)]
        lines: usize,
    },

    /// List the columns of one or more files (merged)
    Columns {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Leading lines to skip before the header row
        #[arg(long, default_value_t = 0)]
        skip_rows: usize,
    },

    /// Build a graph and write it out
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Input files; several files are merged by column union
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// YAML configuration (version: 1); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source column
    #[arg(long)]
    source: Option<String>,

    /// Target column
    #[arg(long)]
    target: Option<String>,

    #[arg(long)]
    source_processing: Option<ExtractionMode>,

    #[arg(long)]
    target_processing: Option<ExtractionMode>,

    /// Attribute column copied onto edges and source nodes (repeatable)
    #[arg(short = 'a', long = "attribute")]
    attributes: Vec<String>,

    #[arg(long)]
    graph_type: Option<GraphType>,

    /// Output format: tabular or gexf
    #[arg(short, long)]
    format: Option<ExportFormat>,

    #[arg(long)]
    conflict_policy: Option<AttributeConflictPolicy>,

    /// Leading lines to skip before the header row
    #[arg(long)]
    skip_rows: Option<usize>,

    /// Attribute table joined onto nodes
    #[arg(long)]
    attribute_table: Option<PathBuf>,

    /// Key column of the attribute table
    #[arg(long)]
    key_column: Option<String>,

    /// Directory receiving nodes.csv / edges.csv or graph.gexf
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print run statistics as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Preview { file, lines } => preview(&file, lines),
        Commands::Columns { files, skip_rows } => columns(&files, skip_rows),
        Commands::Build(args) => build(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if is_empty_graph(&err) {
                ExitCode::from(EXIT_EMPTY_GRAPH)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Whether any cause in the chain is a GEXF request for an edge-less graph
fn is_empty_graph(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<ExportError>(), Some(ExportError::EmptyGraph)))
}

fn preview(file: &Path, lines: usize) -> anyhow::Result<()> {
    let head = preview_lines(file, lines).with_context(|| format!("reading {}", file.display()))?;
    for (idx, line) in head.iter().enumerate() {
        println!("{:>4}  {}", idx, line);
    }
    Ok(())
}

fn columns(files: &[PathBuf], skip_rows: usize) -> anyhow::Result<()> {
    let dataset = load_inputs(files, skip_rows)?;
    for column in dataset.columns() {
        println!("{}", column);
    }
    Ok(())
}

fn load_inputs(files: &[PathBuf], skip_rows: usize) -> anyhow::Result<Dataset> {
    let options = ReadOptions::default().skip_rows(skip_rows);
    let datasets = files
        .iter()
        .map(|path| read_csv(path, &options).with_context(|| format!("reading {}", path.display())))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Dataset::merge(datasets))
}

fn resolve_config(args: &BuildArgs) -> anyhow::Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_yaml(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => match (&args.source, &args.target) {
            (Some(source), Some(target)) => PipelineConfig::new(source.as_str(), target.as_str()),
            _ => bail!("--source and --target are required without --config"),
        },
    };

    if let Some(source) = &args.source {
        config.source_column = source.clone();
    }
    if let Some(target) = &args.target {
        config.target_column = target.clone();
    }
    if let Some(mode) = args.source_processing {
        config.source_processing = mode;
    }
    if let Some(mode) = args.target_processing {
        config.target_processing = mode;
    }
    if !args.attributes.is_empty() {
        config.attribute_columns = args.attributes.clone();
    }
    if let Some(graph_type) = args.graph_type {
        config.graph_type = graph_type;
    }
    if let Some(format) = args.format {
        config.export_format = format;
    }
    if let Some(policy) = args.conflict_policy {
        config.conflict_policy = policy;
    }
    if let Some(skip_rows) = args.skip_rows {
        config.skip_rows = skip_rows;
    }
    if let Some(key) = &args.key_column {
        config = config.attribute_table(key.as_str());
    }

    Ok(config.build()?)
}

fn build(args: BuildArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    info!(config = %config.describe(), "resolved configuration");

    let dataset = load_inputs(&args.inputs, config.skip_rows)?;
    let attribute_table = match &args.attribute_table {
        Some(path) => Some(
            read_csv(path, &ReadOptions::default())
                .with_context(|| format!("reading attribute table {}", path.display()))?,
        ),
        None => None,
    };

    let mut ctx = PipelineContext::new(dataset, config)?;
    let result = Pipeline::new().run(&mut ctx, attribute_table.as_ref())?;

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    let written = match &result.artifact {
        ExportArtifact::Tabular(tables) => {
            let nodes = args.output_dir.join("nodes.csv");
            let edges = args.output_dir.join("edges.csv");
            tables.write(&nodes, &edges)?;
            vec![nodes, edges]
        }
        ExportArtifact::Gexf(document) => {
            let path = args.output_dir.join("graph.gexf");
            std::fs::write(&path, document).with_context(|| format!("writing {}", path.display()))?;
            vec![path]
        }
    };

    for path in &written {
        info!(path = %path.display(), "wrote output");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
    } else {
        println!(
            "{} nodes, {} edges ({} rows, {} edge candidates)",
            result.stats.graph.nodes,
            result.stats.graph.edges,
            result.stats.rows,
            result.stats.expansion.candidates
        );
    }
    Ok(())
}
