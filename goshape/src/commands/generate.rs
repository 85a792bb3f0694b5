use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use goshape_codegen::{EmittedRegistry, Generator};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the descriptor document produced by the sampler
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package name written ahead of the generated types
    #[arg(short, long)]
    package: Option<String>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let roots = goshape_ir::from_path(&self.input).unwrap_or_exit();
        goshape_ir::validate(&roots).unwrap_or_exit();

        let mut generator = Generator::new(&roots);
        if let Some(package) = &self.package {
            generator = generator.with_package(package.as_str());
        }

        let mut registry = EmittedRegistry::new();
        match &self.output {
            Some(path) => {
                let file = fs::File::create(path)
                    .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
                let mut out = BufWriter::new(file);
                generator
                    .generate(&mut out, &mut registry)
                    .wrap_err("failed to generate code")?;
                out.flush()?;
                eprintln!("generated {} type(s) to {}", registry.len(), path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                generator
                    .generate(&mut out, &mut registry)
                    .wrap_err("failed to generate code")?;
                out.flush()?;
            }
        }

        Ok(())
    }
}
