use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use log::info;
use structopt::StructOpt;

use querylex::batch::{self, QueryReport};
use querylex::config::QuerylexConfig;
use querylex::{logging, time, vocabulary_loader, QUERYLEX_VER, SOURCE_CONFIG_FILE};

#[derive(StructOpt, Debug)]
#[structopt(name = "querylex")]
struct CliArgs {
    #[structopt(help = "Queries to correct")]
    queries: Vec<String>,
    #[structopt(short, long, parse(from_os_str), help = "Vocabulary file, overrides the config's")]
    vocabulary_path: Option<PathBuf>,
    #[structopt(short, long, parse(from_os_str))]
    config_file_path: Option<PathBuf>,
    #[structopt(short = "f", long, parse(from_os_str), help = "File of queries to correct, one per line")]
    queries_file_path: Option<PathBuf>,
    #[structopt(short, long, help = "Number of threads to correct queries with, overrides the config's")]
    threads: Option<usize>,
    #[structopt(short, long, help = "Initialise the configuration file")]
    init: bool,
    #[structopt(long, help = "Print one json report per query")]
    json: bool,
    #[structopt(long)]
    verbose: bool,
    #[structopt(long, hidden = true)]
    perf: bool,
}

fn get_relative_or_absolute_path(from_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        from_path.join(path)
    } else {
        PathBuf::from(path)
    }
}

fn read_queries(args: &CliArgs, cwd: &Path) -> anyhow::Result<Vec<String>> {
    let mut queries = args.queries.clone();

    if let Some(queries_file_path) = &args.queries_file_path {
        let queries_file_path = get_relative_or_absolute_path(cwd, queries_file_path);
        let raw = fs::read_to_string(&queries_file_path)
            .with_context(|| format!("Failed to read queries from {}", queries_file_path.display()))?;

        queries.extend(raw.lines().filter(|line| !line.trim().is_empty()).map(str::to_owned));
    }

    Ok(queries)
}

fn print_reports(reports: &[QueryReport], as_json: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for report in reports {
        if as_json {
            serde_json::to_writer(&mut out, report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{:.4}", report.corrected, report.confidence_score)?;
        }
    }

    out.flush()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: CliArgs = CliArgs::from_args();

    logging::init_logging(args.verbose)?;

    let cwd = env::current_dir().context("Could not access current directory!")?;

    let config_file_path = args
        .config_file_path
        .as_ref()
        .map(|path| get_relative_or_absolute_path(&cwd, path))
        .unwrap_or_else(|| cwd.join(SOURCE_CONFIG_FILE));

    if args.init {
        QuerylexConfig::init_config_file(&config_file_path)?;
        info!("Wrote default configuration to {}", config_file_path.display());
        return Ok(());
    }

    let mut config = QuerylexConfig::load(&config_file_path)?;

    if let Some(threads) = args.threads {
        config.num_threads = threads;
    }
    if let Some(vocabulary_path) = &args.vocabulary_path {
        config.vocabulary_config.path = Some(vocabulary_path.clone());
    }
    config.validate()?;

    let vocabulary_path = match &config.vocabulary_config.path {
        // Relative to the config file, unless given on the command line
        Some(path) if args.vocabulary_path.is_none() => {
            let config_dir = config_file_path.parent().unwrap_or_else(|| cwd.as_path());
            get_relative_or_absolute_path(config_dir, path)
        }
        Some(path) => get_relative_or_absolute_path(&cwd, path),
        None => bail!("No vocabulary file given, pass --vocabulary-path or set vocabulary_config.path"),
    };

    let vocabulary = vocabulary_loader::load_vocabulary(&vocabulary_path, config.vocabulary_config.delimiter)?;

    let queries = read_queries(&args, &cwd)?;
    if queries.is_empty() {
        bail!("No queries given");
    }

    info!("querylex v{}, correcting {} queries", QUERYLEX_VER, queries.len());

    let now = if args.perf { Some(Instant::now()) } else { None };

    let reports = batch::correct_batch(
        &queries,
        &vocabulary,
        &config.correction_config,
        config.num_threads,
    );

    time::print_time_elapsed(&now, "Corrected queries");

    print_reports(&reports, args.json)
}
