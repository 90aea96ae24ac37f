//! Uncertainty snapshot sink.
//!
//! One bincode file per step, named after the working-pool size and the
//! labelled count so consecutive steps land in distinct files:
//! `<folder>/uncertainty_pool=<P>_labelled=<L>.pkl`.
//! The folder must already exist.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use quarry_core::constants::{SNAPSHOT_FILE_EXTENSION, SNAPSHOT_FILE_PREFIX};
use quarry_core::errors::SnapshotError;
use quarry_core::models::UncertaintySnapshot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// File name for a snapshot taken on a working pool of `pool_size` samples
/// while `n_labelled` samples are labelled.
pub fn snapshot_file_name(pool_size: usize, n_labelled: usize) -> String {
    format!(
        "{SNAPSHOT_FILE_PREFIX}_pool={pool_size}_labelled={n_labelled}.{SNAPSHOT_FILE_EXTENSION}"
    )
}

/// Serialize `snapshot` into `folder`, returning the written path.
/// An existing file with the same name is replaced.
pub fn write_snapshot<S: Serialize>(
    folder: &Path,
    pool_size: usize,
    n_labelled: usize,
    snapshot: &UncertaintySnapshot<S>,
) -> Result<PathBuf, SnapshotError> {
    let path = folder.join(snapshot_file_name(pool_size, n_labelled));
    let io_err = |e: std::io::Error| SnapshotError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, snapshot).map_err(|e| SnapshotError::Serialize {
        reason: e.to_string(),
    })?;
    writer.flush().map_err(io_err)?;

    debug!(
        path = %path.display(),
        scores = snapshot.uncertainty.len(),
        "uncertainty snapshot written"
    );
    Ok(path)
}

/// Read back a snapshot written by [`write_snapshot`].
pub fn read_snapshot<S: DeserializeOwned>(
    path: &Path,
) -> Result<UncertaintySnapshot<S>, SnapshotError> {
    let file = File::open(path).map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|e| SnapshotError::Deserialize {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
