use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::ops::Op;
use cli::commands::{gen, hwinfo, inspect, ops};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Add { left, right, chunk_width, json } => {
            ops::run(Op::Add, left, right, *chunk_width, *json)
        }
        Commands::Sub { left, right, chunk_width, json } => {
            ops::run(Op::Sub, left, right, *chunk_width, *json)
        }
        Commands::Mul { left, right, chunk_width, json } => {
            ops::run(Op::Mul, left, right, *chunk_width, *json)
        }
        Commands::Cmp { left, right, chunk_width, json } => {
            ops::run(Op::Cmp, left, right, *chunk_width, *json)
        }
        Commands::Inspect { value, chunk_width } => inspect::inspect(value, *chunk_width),
        Commands::Gen { count, digits, output, negative, seed } => {
            gen::generate(*count, *digits, output.as_deref(), *negative, *seed)
        }
        Commands::Hwinfo { json } => hwinfo::report(*json),
    }
}
