use std::io::{self, Read};

use anyhow::Context as _;

/// Returns `input`, or stdin without its trailing newline when it is `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading from stdin")?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}
