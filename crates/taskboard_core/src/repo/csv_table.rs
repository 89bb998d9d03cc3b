//! Whole-file CSV table reader/writer shared by both collections.
//!
//! # Invariants
//! - Columns are matched by header name on read.
//! - Rows with fewer fields than the header are padded with empty fields.
//! - Rows that still fail to decode (invalid UTF-8, bad field values) are
//!   skipped and logged, never fatal.
//! - Writes go to a sibling temp file that is renamed over the target.

use super::{StoreError, StoreResult};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Reads every decodable row of `path`.
///
/// Returns an empty vector when the file does not exist.
pub(crate) fn read_table<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let started_at = Instant::now();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=store_load module=repo status=ok file={} rows=0 missing=true",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            error!(
                "event=store_load module=repo status=error file={} error_code=open_failed error={}",
                path.display(),
                err
            );
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => return Err(read_failed(path, err)),
    };

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut record = csv::StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if is_row_error(&err) => {
                skipped += 1;
                log_skipped_row(path, &err);
                continue;
            }
            Err(err) => return Err(read_failed(path, err)),
        }

        // Short rows keep their record: missing trailing columns read as empty.
        while record.len() < headers.len() {
            record.push_field("");
        }
        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(err) => {
                skipped += 1;
                log_skipped_row(path, &err);
            }
        }
    }

    info!(
        "event=store_load module=repo status=ok file={} rows={} skipped={} duration_ms={}",
        path.display(),
        rows.len(),
        skipped,
        started_at.elapsed().as_millis()
    );
    Ok(rows)
}

/// Rewrites `path` with `columns` as header followed by `rows` in order.
pub(crate) fn write_table<T: Serialize>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
) -> StoreResult<()> {
    let started_at = Instant::now();
    match write_atomically(path, columns, rows) {
        Ok(()) => {
            info!(
                "event=store_save module=repo status=ok file={} rows={} duration_ms={}",
                path.display(),
                rows.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=repo status=error file={} error={}",
                path.display(),
                err
            );
            Err(err)
        }
    }
}

fn write_atomically<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> StoreResult<()> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source: csv::Error| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_err)?;

    let temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    // Header is written by hand so an empty collection still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(temp);
    writer.write_record(columns).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    let mut temp = writer
        .into_inner()
        .map_err(|err| io_err(err.into_error()))?;
    temp.flush().map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

fn read_failed(path: &Path, err: csv::Error) -> StoreError {
    error!(
        "event=store_load module=repo status=error file={} error_code=read_failed error={}",
        path.display(),
        err
    );
    StoreError::Csv {
        path: path.to_path_buf(),
        source: err,
    }
}

fn log_skipped_row(path: &Path, err: &csv::Error) {
    warn!(
        "event=store_load module=repo status=skip_row file={} line={} error={}",
        path.display(),
        err.position().map_or(0, |pos| pos.line()),
        err
    );
}

fn is_row_error(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Deserialize { .. }
            | csv::ErrorKind::Utf8 { .. }
            | csv::ErrorKind::UnequalLengths { .. }
    )
}
