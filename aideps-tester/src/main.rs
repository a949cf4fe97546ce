mod inspect;
mod reports;
mod source;

use aideps_core::{AiDependencies, DuplicatePolicy};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use inspect::{InspectRequest, inspect};
use source::{BuiltinSource, FileSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Console,
    /// Pretty-printed JSON
    Json,
    /// Markdown document
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "aideps-tester", version)]
#[command(about = "Inspect and validate AI dependency balance tables")]
struct Args {
    /// JSON balance table to load instead of the built-in one
    #[arg(long)]
    table: Option<PathBuf>,

    /// Reject tables that list a special under more than one metabolism
    #[arg(long)]
    strict: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// List all metabolism categories and exit
    #[arg(long)]
    list_metabolisms: bool,

    /// Specials to classify (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    classify: Vec<String>,

    /// Include upkeep-scaled pod costs for this many existing colonies
    #[arg(long)]
    colonies: Option<u32>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    const fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.strict {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWriteWins
        }
    }

    fn source_label(&self) -> String {
        self.table
            .as_ref()
            .map_or_else(|| "builtin".to_string(), |path| path.display().to_string())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let deps = load_dependencies(&args)?;

    let mut output_target = OutputTarget::new(args.output.clone())?;
    if args.list_metabolisms {
        write_metabolism_list(&mut output_target, &deps)?;
    } else {
        write_report(&mut output_target, &args, &deps)?;
    }
    output_target.flush_inner()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_dependencies(args: &Args) -> Result<AiDependencies> {
    let policy = args.duplicate_policy();
    let deps = if let Some(path) = &args.table {
        let source = FileSource::new(path);
        AiDependencies::load(&source, policy)
            .with_context(|| format!("invalid balance table {}", source.path().display()))?
    } else {
        AiDependencies::load(&BuiltinSource, policy).context("invalid built-in balance table")?
    };
    log::debug!(
        "loaded {} indexed specials from {}",
        deps.boost_index().len(),
        args.source_label()
    );
    Ok(deps)
}

fn write_metabolism_list(out: &mut dyn Write, deps: &AiDependencies) -> Result<()> {
    writeln!(out, "Available metabolisms:")?;
    for metabolism in deps.metabolisms() {
        writeln!(
            out,
            "  {:16} - {} boost specials",
            metabolism.key(),
            deps.boosts_for(metabolism).len()
        )?;
    }
    Ok(())
}

fn write_report(out: &mut dyn Write, args: &Args, deps: &AiDependencies) -> Result<()> {
    let request = InspectRequest {
        source: args.source_label(),
        policy: args.duplicate_policy(),
        classify: &args.classify,
        colonies: args.colonies,
    };
    let report = inspect(deps, &request);
    match args.report {
        ReportFormat::Json => reports::generate_json_report(out, &report),
        ReportFormat::Markdown => reports::generate_markdown_report(out, &report),
        ReportFormat::Console => reports::generate_console_report(out, &report),
    }
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
