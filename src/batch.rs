//! Directory batch conversion: every `*.bmp` in a folder becomes a raw
//! RGB565 file next to it (or under a separate destination).
//!
//! A file that fails to read, parse or convert is logged and recorded in the
//! [`BatchReport`]; the rest of the batch still runs.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::bmp::BmpPermissiveness;
use crate::convert::{ConvertRequest, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::ConvertError;

pub const DEFAULT_EXTENSION: &str = ".rgb565";

/// Where to read, where to write, and what resolution to accept.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub source_dir: PathBuf,
    /// Defaults to `source_dir` when `None`.
    pub dest_dir: Option<PathBuf>,
    /// Appended to each source file stem; a leading `.` is added if missing.
    pub extension: String,
    pub width: u32,
    pub height: u32,
    pub permissiveness: BmpPermissiveness,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("assets_src"),
            dest_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            permissiveness: BmpPermissiveness::default(),
        }
    }
}

impl BatchOptions {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    pub fn dest_dir(&self) -> &Path {
        self.dest_dir.as_deref().unwrap_or(&self.source_dir)
    }

    /// Output path for `source`: `<dest_dir>/<stem><extension>`.
    pub fn dest_path(&self, source: &Path) -> PathBuf {
        let mut name = source.file_stem().unwrap_or_default().to_os_string();
        if !self.extension.starts_with('.') {
            name.push(".");
        }
        name.push(&self.extension);
        self.dest_dir().join(name)
    }
}

/// Failure converting a single file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Failure that prevents the batch from starting.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("source directory {0} does not exist")]
    SourceMissing(PathBuf),

    #[error("no BMP files found in {0}")]
    NoBitmaps(PathBuf),

    #[error("cannot list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result for one source file.
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Bytes written on success.
    pub result: Result<u64, FileError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn converted(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// Convert one BMP file and write the raw stream to `dest`, creating parent
/// directories. Returns the number of bytes written.
///
/// Nothing is written unless the whole conversion succeeds.
pub fn convert_file(source: &Path, dest: &Path, options: &BatchOptions) -> Result<u64, FileError> {
    let data = fs::read(source)?;
    let image = ConvertRequest::new(&data)
        .with_expected_size(options.width, options.height)
        .with_permissiveness(options.permissiveness)
        .convert(enough::Unstoppable)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, image.pixels())?;
    Ok(image.pixels().len() as u64)
}

/// Sorted `*.bmp` files (extension matched case-insensitively) directly
/// inside `dir`.
pub fn find_bitmaps(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::SourceMissing(dir.to_path_buf()));
    }
    let io_err = |source| BatchError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_bmp = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("bmp"));
        if is_bmp && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every bitmap in `options.source_dir`.
///
/// Fails up front only if the source directory is missing, unreadable, or
/// holds no bitmaps. Per-file failures are logged and reported.
pub fn convert_dir(options: &BatchOptions) -> Result<BatchReport, BatchError> {
    let files = find_bitmaps(&options.source_dir)?;
    if files.is_empty() {
        return Err(BatchError::NoBitmaps(options.source_dir.clone()));
    }
    debug!(
        count = files.len(),
        width = options.width,
        height = options.height,
        "converting bitmaps"
    );

    let mut report = BatchReport::default();
    for source in files {
        let dest = options.dest_path(&source);
        let name = source.file_name().unwrap_or_default().to_string_lossy();
        let result = convert_file(&source, &dest, options);
        match &result {
            Ok(bytes) => info!(
                "{name} -> {} ({bytes} bytes)",
                dest.file_name().unwrap_or_default().to_string_lossy()
            ),
            Err(e) => warn!("{name}: {e}"),
        }
        report.outcomes.push(FileOutcome {
            source,
            dest,
            result,
        });
    }
    Ok(report)
}
