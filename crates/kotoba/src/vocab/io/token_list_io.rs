//! # Token List IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{KResult, KotobaError},
    utility::path_utils::ensure_parent_dir,
};

/// Load a token list file.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN}
/// ```
///
/// # Arguments
/// * `path` - the path to the token list file.
pub fn load_token_list_path<P: AsRef<Path>>(path: P) -> KResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    read_token_list(reader)
}

/// Read a token list from a line reader.
///
/// Only the line terminator (`\n` or `\r\n`) is removed; surrounding
/// whitespace is part of the token.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_token_list<R: BufRead>(reader: R) -> KResult<Vec<String>> {
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Check that every token is representable in the token-list format.
///
/// ## Errors
/// [`KotobaError::UnrepresentableToken`] for the first token containing
/// `\n` or `\r`.
pub fn check_token_list<K: AsRef<str>>(tokens: &[K]) -> KResult<()> {
    for token in tokens {
        let token = token.as_ref();
        if token.contains(['\n', '\r']) {
            return Err(KotobaError::UnrepresentableToken {
                token: token.to_string(),
            });
        }
    }
    Ok(())
}

/// Save a token list file, creating missing parent directories.
///
/// Tokens are checked before the file is touched, so a rejected list
/// leaves any existing file unchanged.
///
/// # Arguments
/// * `tokens` - the tokens, in id order.
/// * `path` - the path to save the token list to.
pub fn save_token_list_path<K, P>(
    tokens: &[K],
    path: P,
) -> KResult<()>
where
    K: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    check_token_list(tokens)?;
    ensure_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_token_list(tokens, &mut writer)
}

/// Write a token list to a [`Write`] writer.
///
/// # Arguments
/// * `tokens` - the tokens, in id order.
/// * `writer` - the writer to target.
///
/// ## Errors
/// [`KotobaError::UnrepresentableToken`] for a token containing `\n` or `\r`;
/// nothing is written in that case.
pub fn write_token_list<K, W>(
    tokens: &[K],
    writer: &mut W,
) -> KResult<()>
where
    K: AsRef<str>,
    W: Write,
{
    check_token_list(tokens)?;
    for token in tokens {
        writeln!(writer, "{}", token.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}
