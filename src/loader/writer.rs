//! City file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::config::LoaderConfig;
use crate::error::{TourError, TourResult};
use crate::geometry::City;

/// Writes one `name<delim>x<delim>y` line per city.
///
/// Coordinates use the shortest `Display` form that parses back to the same
/// `f64`, so a written file reloads to identical cities. Names containing
/// the delimiter are written as-is and will not reload.
///
/// # Errors
///
/// [`TourError::Io`] on write failure, [`TourError::InvalidConfig`] if
/// `config` does not validate.
pub fn write_cities<W: Write>(
    mut writer: W,
    cities: &[City],
    config: &LoaderConfig,
) -> TourResult<()> {
    config.validate().map_err(TourError::InvalidConfig)?;
    let d = config.delimiter;
    for city in cities {
        writeln!(writer, "{}{d}{}{d}{}", city.name(), city.x(), city.y())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes cities to a file, replacing any existing content.
pub fn save_path(path: &Path, cities: &[City], config: &LoaderConfig) -> TourResult<()> {
    let file = File::create(path)?;
    write_cities(BufWriter::new(file), cities, config)?;
    log::info!("loader: saved path={} cities={}", path.display(), cities.len());
    Ok(())
}
