use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Opens `input` for reading. `stdin` reads from standard input and
/// `.gz` files are decompressed on the fly.
///
/// ```
/// use std::io::Read;
/// let mut reader = bitree::reader("Cargo.toml").unwrap();
/// let mut content = String::new();
/// reader.read_to_string(&mut content).unwrap();
/// assert!(content.contains("[package]"));
///
/// assert!(bitree::reader("tests/not_exists.tmp").is_err());
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("Cannot open tree file {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

/// Opens `output` for writing, truncating an existing file. `stdout`
/// writes to standard output.
pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("Cannot create tree file {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}
