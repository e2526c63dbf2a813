use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use datechipper::vocab::io::read_vocab_json;
use datechipper::{CharVocab, encode_chars};

use crate::input_output::{InputArgs, OutputArgs};
use crate::logging::LogArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    input: InputArgs,

    /// Path to the human vocabulary (JSON).
    #[arg(long)]
    human_vocab: String,

    /// Path to the machine vocabulary (JSON).
    #[arg(long)]
    machine_vocab: String,

    /// Fixed encoded length of the human side.
    #[arg(long, default_value = "30")]
    input_steps: usize,

    /// Fixed encoded length of the machine side.
    #[arg(long, default_value = "10")]
    output_steps: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let human: CharVocab<u32> = read_vocab_json(BufReader::new(File::open(&self.human_vocab)?))?;
        let machine: CharVocab<u32> =
            read_vocab_json(BufReader::new(File::open(&self.machine_vocab)?))?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let mut encoded = 0usize;
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            // Malformed rows are skipped, not fatal.
            let Some((human_text, machine_text)) = line.split_once('\t') else {
                log::warn!("skipping malformed row: {line:?}");
                skipped += 1;
                continue;
            };

            let input = encode_chars(human_text, self.input_steps, &human)?;
            let target = encode_chars(machine_text, self.output_steps, &machine)?;

            let record = serde_json::json!({
                "input": input,
                "target": target,
            });
            writeln!(writer, "{record}")?;
            encoded += 1;
        }

        log::info!("encoded {encoded} rows ({skipped} skipped)");
        Ok(())
    }
}
