use crate::cli::{Cli, Commands};
use crate::domain::models::{DemoRun, Inventory, JsonOut, Outcome};
use crate::services::output::{print_one, render_demo, render_report};
use crate::services::{demo, report, validator};

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Demo) => {
            let mut inv = Inventory::default();
            let registrations = demo::run_demo(&mut inv);
            let run = DemoRun {
                registrations,
                report: report::build_report(&inv),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: run
                    })?
                );
            } else {
                render_demo(&run.registrations);
                render_report(&run.report);
            }
        }
        Some(Commands::Check {
            weight,
            color,
            length,
        }) => {
            let color = color.trim().to_lowercase();
            let outcome = validator::validate(*weight, &color, *length);
            print_one(cli.json, outcome, |o| match o {
                Outcome::Accepted => "approved".to_string(),
                Outcome::Rejected(reason) => format!("rejected: {}", reason),
            })?;
        }
        None | Some(Commands::Shell) => {
            unreachable!("handled by the shell entry point")
        }
    }

    Ok(())
}
