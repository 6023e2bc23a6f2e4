use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fat")]
#[command(about = "Chunked big-integer calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add two decimal integers
    Add {
        #[arg(allow_negative_numbers = true)]
        left: String,
        #[arg(allow_negative_numbers = true)]
        right: String,
        /// Hex digits per chunk (derived from the operands when omitted)
        #[arg(long)]
        chunk_width: Option<u32>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Subtract the second integer from the first
    Sub {
        #[arg(allow_negative_numbers = true)]
        left: String,
        #[arg(allow_negative_numbers = true)]
        right: String,
        /// Hex digits per chunk (derived from the operands when omitted)
        #[arg(long)]
        chunk_width: Option<u32>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Multiply two decimal integers
    Mul {
        #[arg(allow_negative_numbers = true)]
        left: String,
        #[arg(allow_negative_numbers = true)]
        right: String,
        /// Hex digits per chunk (derived from the operands when omitted)
        #[arg(long)]
        chunk_width: Option<u32>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two decimal integers (prints less, equal or greater)
    Cmp {
        #[arg(allow_negative_numbers = true)]
        left: String,
        #[arg(allow_negative_numbers = true)]
        right: String,
        /// Hex digits per chunk (derived from the operands when omitted)
        #[arg(long)]
        chunk_width: Option<u32>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the chunk-level layout of a value
    Inspect {
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Hex digits per chunk (derived from the value when omitted)
        #[arg(long)]
        chunk_width: Option<u32>,
    },
    /// Generate random decimal integers as test data
    Gen {
        /// How many numbers to generate
        count: usize,
        /// Digits per number
        digits: usize,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Flip a coin for the sign of each number
        #[arg(long)]
        negative: bool,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print cache, CPU and memory information for this machine
    Hwinfo {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}
