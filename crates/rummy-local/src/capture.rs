//! Capture date resolution for local files.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Reasons the EXIF capture time could not be used.
#[derive(Error, Debug)]
pub enum ExifDateError {
    /// The file could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file has no readable EXIF block.
    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),

    /// The EXIF block lacks `DateTimeOriginal`.
    #[error("missing DateTimeOriginal tag")]
    MissingTag,

    /// The tag holds something that is not a valid date.
    #[error("invalid DateTimeOriginal value: {0}")]
    InvalidValue(String),
}

/// Returns the capture date of a local picture.
///
/// Uses the EXIF `DateTimeOriginal` tag. When that fails for any reason the
/// file's modification time is used instead and a warning is logged. This
/// function never fails.
#[must_use]
pub fn capture_date(path: &Path) -> NaiveDateTime {
    match exif_capture_date(path) {
        Ok(date) => date,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to read EXIF data, using file modification time"
            );
            modified_time(path)
        }
    }
}

/// Reads `DateTimeOriginal` (`YYYY:MM:DD HH:MM:SS`) from the file's EXIF block.
///
/// # Errors
///
/// Returns an error if the file is unreadable, has no EXIF block, or the tag
/// is missing or malformed.
pub fn exif_capture_date(path: &Path) -> Result<NaiveDateTime, ExifDateError> {
    let mut reader = BufReader::new(File::open(path)?);
    let exif = Reader::new().read_from_container(&mut reader)?;
    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or(ExifDateError::MissingTag)?;

    let raw = match &field.value {
        Value::Ascii(parts) => parts.first().ok_or(ExifDateError::MissingTag)?,
        other => return Err(ExifDateError::InvalidValue(format!("{other:?}"))),
    };
    let invalid = || ExifDateError::InvalidValue(String::from_utf8_lossy(raw).into_owned());

    let dt = exif::DateTime::from_ascii(raw).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(i32::from(dt.year), u32::from(dt.month), u32::from(dt.day))
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(dt.hour),
                u32::from(dt.minute),
                u32::from(dt.second),
            )
        })
        .ok_or_else(invalid)
}

/// Returns the file's modification time in local time.
///
/// Falls back to the Unix epoch, with a warning, if even the file metadata is
/// unreadable.
#[must_use]
pub fn modified_time(path: &Path) -> NaiveDateTime {
    match std::fs::metadata(path).and_then(|metadata| metadata.modified()) {
        Ok(modified) => DateTime::<Local>::from(modified).naive_local(),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to read modification time, using the Unix epoch"
            );
            DateTime::<Utc>::UNIX_EPOCH.naive_utc()
        }
    }
}
