use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "partline", version, about = "Industrial part inspection line CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Shell,
    Demo,
    Check {
        #[arg(help = "Weight in grams")]
        weight: f64,
        #[arg(help = "Color (azul/verde)")]
        color: String,
        #[arg(help = "Length in centimeters")]
        length: f64,
    },
}
