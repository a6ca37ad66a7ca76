use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::constants::*;
use crate::core::grid::Grid;
use crate::error::WorldError;

// Raw dump of the grid: CHUNK_VOLUME little-endian i32 cells, no header.

pub fn save_world<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), WorldError> {
    let path = path.as_ref();
    let io_err = |source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&grid.to_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::info!("World saved to {}", path.display());
    Ok(())
}

pub fn load_world<P: AsRef<Path>>(path: P) -> Result<Grid, WorldError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = Vec::with_capacity(CHUNK_VOLUME * CELL_BYTES);
    BufReader::new(file)
        .read_to_end(&mut data)
        .map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Grid::from_bytes(&data)
}

/// Load the saved world, or fall back to the default terrain when there is
/// no usable file. The fallback never touches the file again.
pub fn load_or_generate<P: AsRef<Path>>(path: P) -> Grid {
    let path = path.as_ref();
    match load_world(path) {
        Ok(grid) => {
            tracing::info!("World loaded from {}", path.display());
            grid
        }
        Err(WorldError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No world at {}, generating default terrain", path.display());
            Grid::generate_default()
        }
        Err(e) => {
            tracing::warn!("Failed to load world: {}. Generating default terrain.", e);
            Grid::generate_default()
        }
    }
}
