use std::path::PathBuf;

use anyhow::{Context, Result};
use infection_scatter::data::sample::write_samples;

const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let count: usize = match args.next() {
        Some(n) => n
            .parse()
            .with_context(|| format!("'{n}' is not a file count"))?,
        None => 40,
    };

    let written = write_samples(&out_dir, count, SEED)?;

    println!("Wrote {} experiments to {}", written.len(), out_dir.display());
    Ok(())
}
