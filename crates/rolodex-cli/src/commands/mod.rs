use anyhow::Result;
use rolodex_config::AppConfig;
use rolodex_core::LineClassifier;
use serde::Serialize;
use std::io::{self, Write};

pub mod classify;
pub mod formats;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub classifier: &'a LineClassifier,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
