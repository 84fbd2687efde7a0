//! Minify command handler

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use rayon::prelude::*;
use tracing::info;

use ksmin::cli::Cli;
use ksmin::{Config, Error, Minifier};

/// One minified input.
struct Output {
    path: PathBuf,
    original_len: usize,
    text: String,
}

/// Minify every input file and write the results.
///
/// Inputs are checked up front so a missing file produces no output at all.
/// Files are minified in parallel; results are written in input order.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    if cli.output.is_some() && cli.files.len() > 1 {
        bail!("--output can only be used with a single input file");
    }
    if let Some(missing) = cli.files.iter().find(|path| !path.is_file()) {
        return Err(Error::InputNotFound {
            path: missing.clone(),
        }
        .into());
    }

    let config = Config::load(cli.config.as_deref())?;
    let mut selection = cli.stages.selection();
    if selection.is_empty() {
        selection = config.flag_selection()?;
    }
    let minifier = Minifier::new(selection.resolve()?)?
        .with_external_ids(config.minify.external_ids.iter().chain(&cli.external));

    let outputs = cli
        .files
        .par_iter()
        .map(|path| minify_file(&minifier, path))
        .collect::<Result<Vec<_>, Error>>()?;

    if let Some(target) = &cli.output {
        for output in &outputs {
            fs::write(target, &output.text).map_err(|source| Error::Write {
                path: target.clone(),
                source,
            })?;
        }
    } else {
        let mut stdout = io::stdout().lock();
        for output in &outputs {
            writeln!(stdout, "{}", output.text)?;
        }
    }

    if cli.stats {
        for output in &outputs {
            eprintln!("{}", stats_line(output));
        }
    }
    Ok(())
}

fn minify_file(minifier: &Minifier, path: &Path) -> Result<Output, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = minifier.minify(&source);
    info!(
        path = %path.display(),
        before = source.len(),
        after = text.len(),
        "minified"
    );
    Ok(Output {
        path: path.to_path_buf(),
        original_len: source.len(),
        text,
    })
}

fn stats_line(output: &Output) -> String {
    let saved = output.original_len.saturating_sub(output.text.len());
    let percent = if output.original_len == 0 {
        0.0
    } else {
        saved as f64 * 100.0 / output.original_len as f64
    };
    format!(
        "{}: {} -> {} bytes ({:.1}% smaller)",
        output.path.display(),
        output.original_len,
        output.text.len(),
        percent
    )
}
