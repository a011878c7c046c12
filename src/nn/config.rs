//! Nearest-neighbor configuration.

/// Configuration for [`NnRunner`](super::NnRunner).
///
/// # Examples
///
/// ```
/// use u_nntour::nn::NnConfig;
///
/// let config = NnConfig::default().with_start(2);
/// assert_eq!(config.start, 2);
/// assert!(config.validate(3).is_ok());
/// assert!(config.validate(2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NnConfig {
    /// Input index of the city the tour starts from and returns to.
    pub start: usize,
}

impl NnConfig {
    /// Sets the start city index.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Validates the configuration against a city count.
    ///
    /// Any start is accepted for an empty input, which yields an empty tour.
    pub fn validate(&self, city_count: usize) -> Result<(), String> {
        if city_count > 0 && self.start >= city_count {
            return Err(format!(
                "start index {} out of range for {} cities",
                self.start, city_count
            ));
        }
        Ok(())
    }
}
