//! # GloVe Token IO

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::KResult;

/// Load the tokens of a GloVe-style embedding file.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN} {VALUE} {VALUE} ...
/// ```
///
/// # Arguments
/// * `path` - the path to the embedding file.
pub fn load_glove_tokens_path<P: AsRef<Path>>(path: P) -> KResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    read_glove_tokens(reader)
}

/// Read the tokens of a GloVe-style embedding file from a line reader.
///
/// The line is trimmed and its first space-separated field is the token;
/// the vector values are ignored.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_glove_tokens<R: BufRead>(reader: R) -> KResult<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let token = line.trim().split(' ').next().unwrap_or_default();
        tokens.push(token.to_string());
    }
    Ok(tokens)
}
