use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "booktrack", bin_name = "booktrack", version)]
#[command(about = "Search and extend a flat-file library catalog", long_about = None)]
pub struct Cli {
    /// Catalog file (Title:Author:ISBN:Copies per line)
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<String>,

    /// A 13-digit ISBN, a Title:Author:ISBN:Copies record to add, or a title keyword
    #[arg(value_name = "OPERATION", allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
