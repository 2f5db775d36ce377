use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use textguard_core::pipeline::clean_video_use_case::CleanVideoUseCase;
use textguard_core::pipeline::inspect_regions_use_case::{self, InspectRegionsUseCase};
use textguard_core::removal::domain::text_remover::TextRemover;
use textguard_core::removal::infrastructure::command_remover::CommandRemover;
use textguard_core::removal::infrastructure::passthrough_remover::PassthroughRemover;
use textguard_core::selection::infrastructure::selector_factory::create_selector;
use textguard_core::shared::job::{CleanJob, SelectorSpec};

/// Text and logo removal for videos.
#[derive(Parser)]
#[command(name = "textguard")]
struct Cli {
    /// Input video file.
    input: Option<PathBuf>,

    /// Output video file (required unless --list is used).
    output: Option<PathBuf>,

    /// Print the numbered detection listing and exit without writing.
    #[arg(long)]
    list: bool,

    /// Region indices to remove (comma-separated, as shown by --list).
    #[arg(long, value_delimiter = ',')]
    regions: Option<Vec<usize>>,

    /// Deterministic selection rule: largest, or label:<text>.
    #[arg(long)]
    select: Option<String>,

    /// External removal engine executable; defaults to the passthrough engine.
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Load input, output, and selection rule from a JSON job file.
    #[arg(long)]
    job: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let remover = build_remover(&cli);

    if cli.list {
        let input = cli
            .input
            .clone()
            .expect("validate() guarantees an input in list mode");
        return run_list(&input, remover);
    }

    let job = resolve_job(&cli)?;
    if !job.input_path.exists() {
        return Err(format!("Input file not found: {}", job.input_path.display()).into());
    }
    run_clean(&job, remover)
}

fn run_list(
    input: &Path,
    remover: Box<dyn TextRemover>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut use_case = InspectRegionsUseCase::new(remover);
    let regions = use_case.execute(input)?;
    print!("{}", inspect_regions_use_case::listing(&regions));
    Ok(())
}

fn run_clean(job: &CleanJob, remover: Box<dyn TextRemover>) -> Result<(), Box<dyn std::error::Error>> {
    let selector = create_selector(&job.selector);
    let mut use_case = CleanVideoUseCase::new(remover, selector);
    let report = use_case.execute(&job.input_path, &job.output_path)?;
    log::info!(
        "Removed {} of {} detected region(s)",
        report.removed.len(),
        report.detected
    );
    println!("{}", report.summary_line());
    Ok(())
}

/// Assembles the job from either `--job` or the command line.
fn resolve_job(cli: &Cli) -> Result<CleanJob, Box<dyn std::error::Error>> {
    if let Some(job_path) = &cli.job {
        return Ok(CleanJob::from_json_file(job_path)?);
    }

    let selector = match (&cli.regions, &cli.select) {
        (Some(indices), None) => SelectorSpec::Manual(indices.clone()),
        (None, Some(rule)) => rule.parse::<SelectorSpec>()?,
        _ => unreachable!("validate() guarantees exactly one selection source"),
    };

    Ok(CleanJob {
        input_path: cli.input.clone().expect("validate() guarantees an input"),
        output_path: cli.output.clone().expect("validate() guarantees an output"),
        selector,
    })
}

fn build_remover(cli: &Cli) -> Box<dyn TextRemover> {
    match &cli.engine {
        Some(program) => Box::new(CommandRemover::new(program.clone())),
        None => Box::new(PassthroughRemover::new()),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.job.is_some() {
        if cli.list {
            return Err("--job and --list are mutually exclusive".into());
        }
        if cli.input.is_some() || cli.output.is_some() {
            return Err("--job replaces the input and output arguments".into());
        }
        if cli.regions.is_some() || cli.select.is_some() {
            return Err("--job replaces --regions and --select".into());
        }
        return Ok(());
    }

    let input = cli
        .input
        .as_ref()
        .ok_or("Input file is required unless --job is used")?;
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }

    if cli.list {
        if cli.regions.is_some() || cli.select.is_some() {
            return Err("--list does not take a selection; it only prints the detections".into());
        }
        return Ok(());
    }

    if cli.output.is_none() {
        return Err("Output file is required unless --list is used".into());
    }
    match (&cli.regions, &cli.select) {
        (Some(_), Some(_)) => Err("--regions and --select are mutually exclusive".into()),
        (None, None) => {
            Err("A selection is required: --regions <indices> or --select <rule>".into())
        }
        _ => Ok(()),
    }
}
