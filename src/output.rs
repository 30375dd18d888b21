use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::WordgenError;
use crate::normalize::normalize_base;

pub fn default_output_path(base: &str) -> PathBuf {
    PathBuf::from(format!("{}_wordlist.txt", normalize_base(base)))
}

/// Writes one candidate per line, replacing any existing file.
pub fn write_wordlist<P: AsRef<Path>>(path: P, words: &[String]) -> Result<(), WordgenError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for word in words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()?;
    Ok(())
}
