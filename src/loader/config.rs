//! Record format configuration.

/// Field layout of a city file.
///
/// # Examples
///
/// ```
/// use u_nntour::loader::LoaderConfig;
///
/// let config = LoaderConfig::default()
///     .with_delimiter(';')
///     .with_decimal_comma(true);
/// assert!(config.validate().is_ok());
///
/// let clash = LoaderConfig::default().with_delimiter(',');
/// assert!(clash.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field separator. Default `|`.
    pub delimiter: char,

    /// Replace `,` with `.` in coordinate fields before parsing. Default `true`.
    pub decimal_comma: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: '|',
            decimal_comma: true,
        }
    }
}

impl LoaderConfig {
    /// Sets the field separator.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables comma decimal separator normalization.
    pub fn with_decimal_comma(mut self, decimal_comma: bool) -> Self {
        self.decimal_comma = decimal_comma;
        self
    }

    /// Validates the configuration.
    ///
    /// The delimiter must not be a character that can appear inside a
    /// coordinate.
    pub fn validate(&self) -> Result<(), String> {
        let d = self.delimiter;
        if d == '.' || d == '-' || d == '+' || d.is_ascii_digit() {
            return Err(format!("delimiter {d:?} collides with numeric syntax"));
        }
        if d == ',' && self.decimal_comma {
            return Err("delimiter ',' collides with decimal comma normalization".into());
        }
        Ok(())
    }
}
