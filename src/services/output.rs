use colored::Colorize;
use serde::Serialize;

use crate::domain::models::{JsonOut, Outcome, Registration, Report};
use crate::services::demo::DEMO_BATCH;

/// Print a single value as a pretty JSON envelope or as one text row.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Text rendering of the consolidated report, shared by the shell menu
/// and the `demo` command.
pub fn render_report(report: &Report) {
    println!("production report");
    println!("  total processed: {}", report.total_processed);
    println!("  approved: {}", report.approved);
    println!("  rejected: {}", report.rejected);
    println!("  approval rate: {:.2}%", report.approval_rate);
    println!("storage");
    println!("  sealed boxes: {}", report.sealed_boxes);
    println!(
        "  open box: {}/{} parts",
        report.open_box_count, report.box_capacity
    );

    match &report.rejections {
        Some(breakdown) => {
            println!("rejections by reason:");
            for row in &breakdown.by_reason {
                println!("  {}: {} ({:.1}%)", row.reason, row.count, row.percentage);
            }
            println!("rejected parts:");
            for part in &breakdown.parts {
                println!("  id {:03} | {}", part.id, part.reason);
            }
        }
        None => println!("no rejected parts registered."),
    }
}

/// Per-candidate text lines for a demonstration run.
pub fn render_demo(regs: &[Registration]) {
    for (reg, (weight, color, length)) in regs.iter().zip(DEMO_BATCH) {
        match reg.outcome {
            Outcome::Accepted => println!(
                "{} id {:03} approved | {}g | {} | {}cm",
                "✓".green().bold(),
                reg.id,
                weight,
                color,
                length
            ),
            Outcome::Rejected(reason) => println!(
                "{} id {:03} rejected | {}",
                "✗".red().bold(),
                reg.id,
                reason
            ),
        }
        if let Some(n) = reg.sealed_box {
            println!("{} box {} sealed", "✓".green().bold(), n);
        }
    }
}
