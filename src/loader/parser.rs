//! Record parsing.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::config::LoaderConfig;
use crate::error::{TourError, TourResult};
use crate::geometry::City;

/// Why a single line was not turned into a city.
///
/// The `load_*` functions drop such lines; this type is only returned by
/// [`parse_record`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected 3 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid {axis} coordinate: {value:?}")]
    InvalidCoordinate { axis: &'static str, value: String },
}

/// Parses one `name|x|y` record.
///
/// The name is kept verbatim. Only the coordinate fields go through decimal
/// comma normalization.
///
/// # Examples
///
/// ```
/// use u_nntour::loader::{parse_record, LoaderConfig};
///
/// let config = LoaderConfig::default();
/// let a = parse_record("A|1,5|2,5", &config).unwrap();
/// let b = parse_record("A|1.5|2.5", &config).unwrap();
/// assert_eq!(a, b);
/// assert!(parse_record("A|1.5", &config).is_err());
/// ```
pub fn parse_record(line: &str, config: &LoaderConfig) -> Result<City, RecordError> {
    let mut fields = line.split(config.delimiter);
    let (Some(name), Some(x), Some(y), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(RecordError::FieldCount {
            found: line.split(config.delimiter).count(),
        });
    };

    let x = parse_coordinate(x, "x", config)?;
    let y = parse_coordinate(y, "y", config)?;
    Ok(City::new(name, x, y))
}

fn parse_coordinate(
    field: &str,
    axis: &'static str,
    config: &LoaderConfig,
) -> Result<f64, RecordError> {
    let normalized: Cow<'_, str> = if config.decimal_comma && field.contains(',') {
        Cow::Owned(field.replace(',', "."))
    } else {
        Cow::Borrowed(field)
    };
    normalized
        .parse::<f64>()
        .map_err(|_| RecordError::InvalidCoordinate {
            axis,
            value: field.to_string(),
        })
}

/// Loads cities from in-memory text.
///
/// # Errors
///
/// [`TourError::InvalidConfig`] if `config` does not validate.
pub fn load_str(text: &str, config: &LoaderConfig) -> TourResult<Vec<City>> {
    config.validate().map_err(TourError::InvalidConfig)?;
    let mut collector = Collector::default();
    for (i, line) in text.lines().enumerate() {
        collector.push(i + 1, line, config);
    }
    Ok(collector.finish())
}

/// Loads cities from a buffered reader.
///
/// # Errors
///
/// [`TourError::Io`] if reading fails or a line is not valid UTF-8, and
/// [`TourError::InvalidConfig`] if `config` does not validate.
pub fn load_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> TourResult<Vec<City>> {
    config.validate().map_err(TourError::InvalidConfig)?;
    let mut collector = Collector::default();
    for (i, line) in reader.lines().enumerate() {
        collector.push(i + 1, &line?, config);
    }
    Ok(collector.finish())
}

/// Loads cities from a file.
///
/// # Errors
///
/// [`TourError::Io`] if the file is missing or unreadable, and
/// [`TourError::InvalidConfig`] if `config` does not validate.
pub fn load_path(path: &Path, config: &LoaderConfig) -> TourResult<Vec<City>> {
    let file = File::open(path)?;
    let cities = load_reader(BufReader::new(file), config)?;
    log::info!("loader: path={} cities={}", path.display(), cities.len());
    Ok(cities)
}

#[derive(Default)]
struct Collector {
    cities: Vec<City>,
    skipped: usize,
}

impl Collector {
    fn push(&mut self, line_no: usize, line: &str, config: &LoaderConfig) {
        match parse_record(line, config) {
            Ok(city) => self.cities.push(city),
            Err(reason) => {
                self.skipped += 1;
                log::debug!("loader: skip line={line_no} reason={reason}");
            }
        }
    }

    fn finish(self) -> Vec<City> {
        log::info!(
            "loader: done cities={} skipped={}",
            self.cities.len(),
            self.skipped
        );
        self.cities
    }
}
