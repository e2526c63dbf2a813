mod encode;
mod generate;

pub use encode::EncodeArgs;
pub use generate::GenerateArgs;

/// Subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a synthetic date dataset and its vocabularies.
    Generate(GenerateArgs),

    /// Encode a generated dataset into fixed-length id sequences.
    Encode(EncodeArgs),
}

impl Commands {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Generate(args) => args.run(),
            Commands::Encode(args) => args.run(),
        }
    }
}
