use csv::StringRecord;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to load a tabular source. No partial data is returned with any of
/// these: a file that cannot be opened or lacks a required column is unusable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

pub(crate) fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })
}

pub(crate) fn reader<R: io::Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source)
}

/// Position of each required column in `headers`, in the order requested.
pub(crate) fn column_indices<const N: usize>(
    headers: &StringRecord,
    required: [&'static str; N],
) -> Result<[usize; N], LoadError> {
    let mut indices = [0; N];
    for (slot, column) in indices.iter_mut().zip(required) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or(LoadError::MissingColumn { column })?;
    }
    Ok(indices)
}

/// Cell at `index`, or empty when the row is short.
pub(crate) fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
