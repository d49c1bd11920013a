use std::io::{self, BufRead, Lines, StdinLock, Write};

use colored::Colorize;
use thiserror::Error;

use crate::domain::constants::{BOX_CAPACITY, MAX_LENGTH, MAX_WEIGHT, MIN_LENGTH, MIN_WEIGHT, VALID_COLORS};
use crate::domain::models::{Inventory, Outcome, PartId, StorageBox};
use crate::services::output::{render_demo, render_report};
use crate::services::{demo, inventory, report};

/// Recoverable operator-input failures. Reported and swallowed; the
/// session keeps running.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("weight and length must be numbers")]
    NotANumber,
    #[error("id must be an integer")]
    NotAnInteger,
}

type Input = Lines<StdinLock<'static>>;

/// Interactive inspection session. One inventory per session, gone on
/// exit. Ends on menu option 0 or end of input.
pub fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut inv = Inventory::default();

    print_banner();

    loop {
        print_menu();
        let Some(choice) = prompt("option: ", &mut lines)? else {
            break;
        };
        match choice.trim() {
            "1" => register_part(&mut inv, &mut lines)?,
            "2" => list_parts(&inv),
            "3" => remove_part(&mut inv, &mut lines)?,
            "4" => list_boxes(&inv),
            "5" => render_report(&report::build_report(&inv)),
            "6" => demo_fill(&mut inv),
            "0" => break,
            other => println!("{} invalid option: {}", "✗".red().bold(), other),
        }
    }

    println!("session closed.");
    Ok(())
}

fn print_banner() {
    println!("partline v{}", env!("CARGO_PKG_VERSION"));
    println!("quality criteria:");
    println!("  weight: {}g - {}g", MIN_WEIGHT, MAX_WEIGHT);
    println!("  color: {}", VALID_COLORS.join(", "));
    println!("  length: {}cm - {}cm", MIN_LENGTH, MAX_LENGTH);
}

fn print_menu() {
    println!();
    println!("  [1] register part");
    println!("  [2] list parts");
    println!("  [3] remove part");
    println!("  [4] list boxes");
    println!("  [5] report");
    println!("  [6] demo fill");
    println!("  [0] exit");
}

fn next_line(lines: &mut Input) -> anyhow::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt(label: &str, lines: &mut Input) -> anyhow::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    next_line(lines)
}

fn report_input_error(err: &InputError) {
    println!("{} error: {}", "✗".red().bold(), err);
}

fn parse_measure(raw: &str) -> Result<f64, InputError> {
    raw.trim().parse().map_err(|_| InputError::NotANumber)
}

/// Collect one candidate part from the operator and register it.
///
/// The id shown up front is a preview; a malformed measurement aborts
/// the attempt before the allocator runs, so the same id is offered
/// again on the next attempt.
fn register_part(inv: &mut Inventory, lines: &mut Input) -> anyhow::Result<()> {
    println!("generated id: {}", inv.next_id());

    let Some(weight_raw) = prompt("weight (g): ", lines)? else {
        return Ok(());
    };
    let weight = match parse_measure(&weight_raw) {
        Ok(w) => w,
        Err(err) => {
            report_input_error(&err);
            return Ok(());
        }
    };

    let Some(color_raw) = prompt("color (azul/verde): ", lines)? else {
        return Ok(());
    };
    let color = color_raw.trim().to_lowercase();

    let Some(length_raw) = prompt("length (cm): ", lines)? else {
        return Ok(());
    };
    let length = match parse_measure(&length_raw) {
        Ok(l) => l,
        Err(err) => {
            report_input_error(&err);
            return Ok(());
        }
    };

    let reg = inventory::register(inv, weight, &color, length);
    match reg.outcome {
        Outcome::Accepted => {
            println!(
                "{} part {} approved | {}g | {} | {}cm",
                "✓".green().bold(),
                reg.id,
                weight,
                color,
                length
            );
            if let Some(n) = reg.sealed_box {
                println!(
                    "{} box {} sealed | {} parts stored",
                    "✓".green().bold(),
                    n,
                    BOX_CAPACITY
                );
            }
        }
        Outcome::Rejected(reason) => {
            println!("{} part {} rejected | {}", "✗".red().bold(), reg.id, reason);
        }
    }
    Ok(())
}

fn remove_part(inv: &mut Inventory, lines: &mut Input) -> anyhow::Result<()> {
    let Some(raw) = prompt("id to remove: ", lines)? else {
        return Ok(());
    };
    let id: PartId = match raw.trim().parse() {
        Ok(id) => id,
        Err(_) => {
            report_input_error(&InputError::NotAnInteger);
            return Ok(());
        }
    };

    if inventory::remove(inv, id) {
        println!("{} part {} removed", "✓".green().bold(), id);
    } else {
        println!("{} part {} not found", "✗".red().bold(), id);
    }
    Ok(())
}

fn list_parts(inv: &Inventory) {
    if inv.approved.is_empty() {
        println!("no approved parts registered.");
    } else {
        println!("approved parts: {}", inv.approved.len());
        for p in &inv.approved {
            println!(
                "  id {:03} | {:6.2}g | {:6} | {:5.2}cm",
                p.id, p.weight, p.color, p.length
            );
        }
    }

    if inv.rejected.is_empty() {
        println!("no rejected parts registered.");
    } else {
        println!("rejected parts: {}", inv.rejected.len());
        for p in &inv.rejected {
            println!("  id {:03} | {}", p.id, p.reason);
        }
    }
}

fn list_boxes(inv: &Inventory) {
    if inv.sealed_boxes.is_empty() && inv.open_box.parts.is_empty() {
        println!("no boxes in use.");
        return;
    }

    if !inv.sealed_boxes.is_empty() {
        println!("sealed boxes: {}", inv.sealed_boxes.len());
        for (i, sealed) in inv.sealed_boxes.iter().enumerate() {
            println!(
                "  box {:02} | {}/{} parts",
                i + 1,
                sealed.parts.len(),
                BOX_CAPACITY
            );
            print_box_members(inv, sealed);
        }
    }

    if !inv.open_box.parts.is_empty() {
        println!(
            "open box | {}/{} parts",
            inv.open_box.parts.len(),
            BOX_CAPACITY
        );
        print_box_members(inv, &inv.open_box);
    }
}

fn print_box_members(inv: &Inventory, bx: &StorageBox) {
    for id in &bx.parts {
        if let Some(p) = inv.find_approved(*id) {
            println!("    id {:03} | {:6.2}g | {}", p.id, p.weight, p.color);
        }
    }
}

fn demo_fill(inv: &mut Inventory) {
    println!("registering demonstration batch...");
    let regs = demo::run_demo(inv);
    render_demo(&regs);
    println!(
        "demo fill complete: {} approved, {} rejected, {} sealed box(es)",
        inv.approved.len(),
        inv.rejected.len(),
        inv.sealed_boxes.len()
    );
}
