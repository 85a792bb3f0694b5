use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the descriptor document produced by the sampler
    input: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let roots = goshape_ir::from_path(&self.input).unwrap_or_exit();
        goshape_ir::validate(&roots).unwrap_or_exit();

        println!(
            "{}: {} root descriptor(s) OK",
            self.input.display(),
            roots.len()
        );
        Ok(())
    }
}
