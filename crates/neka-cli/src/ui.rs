//! Terminal output for interactive runs

use colored::*;
use crossterm::terminal::size;
use std::path::Path;

use neka_core::{MetricsBundle, Recommendation, ScoreBreakdown};

const VERSION_LINE: &str = concat!("v", env!("CARGO_PKG_VERSION"), " • Powered by Groq");

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = 60.min(terminal_width.saturating_sub(4)).max(40);

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "NEKA Script Evaluation System";
    println!(
        "{}{}{}{}",
        "│  ".blue(),
        title.blue().bold(),
        " ".repeat(banner_width - title.chars().count() - 4),
        "│".blue()
    );

    println!("{}", empty_line.blue());

    for line in ["Supported file formats: .txt, .pdf, .docx", VERSION_LINE] {
        let padding = " ".repeat(banner_width.saturating_sub(line.chars().count() + 4));
        println!("{}{}{}{}", "│  ".blue(), line.dimmed(), padding, "│".blue());
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
}

/// Announce a pipeline step
pub fn print_step(message: &str) {
    println!("\n{} {}", "▶".cyan(), message.bold());
}

pub fn print_done(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

/// Headline counts and the first two sub-scores, as shown after analysis
pub fn print_metrics(metrics: &MetricsBundle) {
    print_done(&format!("Page count: {:.1}", metrics.page_count));
    print_done(&format!("Scene count: {}", metrics.scene_count()));
    print_done(&format!("Format score: {:.1}/100", metrics.format.score));
    print_done(&format!("Grammar score: {:.1}/100", metrics.grammar.score));
}

pub fn print_final_score(breakdown: &ScoreBreakdown) {
    let recommendation = breakdown.recommendation();
    let verdict = match recommendation {
        Recommendation::Recommend => recommendation.as_str().green().bold(),
        Recommendation::Consider => recommendation.as_str().yellow().bold(),
        Recommendation::Pass => recommendation.as_str().red().bold(),
    };

    println!(
        "\n{} {}",
        "⭐ FINAL SCORE:".bold(),
        format!("{:.1}/100", breakdown.final_score).bold()
    );
    println!("   Recommendation: {}", verdict);
}

pub fn print_report_saved(path: &Path) {
    print_done(&format!("Report saved to {}", path.display()));
}
