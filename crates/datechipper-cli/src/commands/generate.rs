use std::fs::File;
use std::io::{BufWriter, Write};

use datechipper::vocab::io::write_vocab_json;
use datechipper_data::{DatasetConfig, DateSamplerOptions, LoadedDataset, load_dataset};

use crate::input_output::OutputArgs;
use crate::logging::LogArgs;

/// Args for the generate command.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of valid date pairs to generate.
    #[arg(long, default_value = "10000")]
    count: usize,

    /// Random seed.
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Path to write the human vocabulary (JSON).
    #[arg(long)]
    human_vocab: Option<String>,

    /// Path to write the machine vocabulary (JSON).
    #[arg(long)]
    machine_vocab: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl GenerateArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let config = DatasetConfig::new(self.count).with_sampler(DateSamplerOptions::new(self.seed));

        log::info!("generating {} date pairs (seed {})", self.count, self.seed);
        let dataset: LoadedDataset<u32> = load_dataset(&config)?;

        log::info!(
            "human vocab: {} entries; machine vocab: {} entries",
            dataset.vocabs.human.len(),
            dataset.vocabs.machine.len(),
        );

        if let Some(path) = &self.human_vocab {
            let mut writer = BufWriter::new(File::create(path)?);
            write_vocab_json(&dataset.vocabs.human, &mut writer)?;
            log::info!("wrote human vocab: {path}");
        }
        if let Some(path) = &self.machine_vocab {
            let mut writer = BufWriter::new(File::create(path)?);
            write_vocab_json(&dataset.vocabs.machine, &mut writer)?;
            log::info!("wrote machine vocab: {path}");
        }

        let mut writer = self.output.open_writer()?;
        for pair in &dataset.pairs {
            writeln!(writer, "{}\t{}", pair.human, pair.machine)?;
        }

        Ok(())
    }
}
