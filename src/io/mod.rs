pub mod output;
pub mod request;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use request::{parse_batch, parse_request};

use anyhow::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
