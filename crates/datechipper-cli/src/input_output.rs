use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// Dataset input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Dataset file to read; "-" or absent reads stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a buffered reader over the dataset rows.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match self.input.as_deref() {
            None | Some("-") => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// File to write; "-" or absent writes stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.output.as_deref() {
            None | Some("-") => Box::new(BufWriter::new(std::io::stdout().lock())),
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}
