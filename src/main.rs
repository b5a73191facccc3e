use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use neka_cli::{
    ErrorSummary, EvaluationReport, EvaluationSummary, QualitativeAnalyzer, QualitativeReport,
    ReportFormat, display_banner, read_script_file, ui, write_report,
};
use neka_core::{ScoreBreakdown, compute_metrics};
use neka_groq::{GroqClient, GroqConfig};

const DEFAULT_TITLE: &str = "Untitled Script";

#[derive(Parser)]
#[command(name = "neka")]
#[command(about = "Screenplay evaluation: format and pacing metrics plus AI script coverage", long_about = None)]
#[command(version)]
struct Cli {
    /// Script file (.txt, .pdf or .docx)
    script: PathBuf,

    /// Script title used in the report (defaults to the file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Print a JSON summary instead of progress output
    #[arg(long)]
    json: bool,

    /// Directory for the report (defaults to Downloads, then the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Report format: md or html
    #[arg(short, long, default_value = "md")]
    format: ReportFormat,

    /// Groq model to use instead of GROQ_MODEL
    #[arg(short, long)]
    model: Option<String>,

    /// Skip the AI analysis and use default qualitative scores
    #[arg(long)]
    no_ai: bool,

    /// Do not write a report file
    #[arg(long)]
    no_report: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn script_title(&self) -> String {
        self.title
            .clone()
            .filter(|title| !title.trim().is_empty())
            .or_else(|| {
                self.script
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().replace('_', " "))
            })
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}

/// Progress output, silenced in JSON mode
struct Console {
    quiet: bool,
}

impl Console {
    fn step(&self, message: &str) {
        if !self.quiet {
            ui::print_step(message);
        }
    }

    fn done(&self, message: &str) {
        if !self.quiet {
            ui::print_done(message);
        }
    }

    fn warn(&self, message: &str) {
        if !self.quiet {
            ui::print_warning(message);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.json {
        match evaluate(&cli).await {
            Ok(summary) => println!("{}", summary.to_json()?),
            Err(e) => {
                println!("{}", ErrorSummary::new(format!("{:#}", e)).to_json());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    display_banner();
    if let Err(e) = evaluate(&cli).await {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn evaluate(cli: &Cli) -> Result<EvaluationSummary> {
    let console = Console { quiet: cli.json };
    let title = cli.script_title();

    console.step("Reading script file...");
    let script = read_script_file(&cli.script)
        .with_context(|| format!("Error reading file {}", cli.script.display()))?;
    console.done(&format!(
        "Successfully read {} characters",
        script.as_str().chars().count()
    ));

    console.step("Analyzing script quantitative metrics...");
    let metrics = compute_metrics(&script);
    if !cli.json {
        ui::print_metrics(&metrics);
    }

    let qualitative = if cli.no_ai {
        console.warn("AI analysis skipped, default qualitative scores applied");
        QualitativeReport::skipped("Qualitative analysis was skipped for this evaluation.")
    } else {
        console.step("Getting AI qualitative analysis...");
        let mut config = GroqConfig::from_env()?;
        if let Some(model) = &cli.model {
            config = config.with_model(model);
        }
        let analyzer = QualitativeAnalyzer::new(GroqClient::new(config)?);
        let report = analyzer
            .analyze(&script, &metrics)
            .await
            .context("AI qualitative analysis failed")?;
        if !report.scores_parsed {
            console.warn("Could not read scores from the analysis, default scores applied");
        }
        report
    };
    debug!(scores = ?qualitative.scores, "qualitative scores");

    console.step("Calculating final score...");
    let breakdown = ScoreBreakdown::compute(&metrics, &qualitative.scores);
    if !cli.json {
        ui::print_final_score(&breakdown);
    }

    let mut summary = EvaluationSummary::new(&metrics, &breakdown, &qualitative);

    if !cli.no_report {
        console.step("Generating report...");
        let contents =
            EvaluationReport::new(&title, &metrics, &breakdown, &qualitative).render(cli.format);
        let path = write_report(&contents, &title, cli.format, cli.output_dir.as_deref())
            .context("Could not write the report")?;
        if !cli.json {
            ui::print_report_saved(&path);
        }
        summary = summary.with_report_path(path.display().to_string());
    }

    console.done("Evaluation complete!");
    Ok(summary)
}
