//! The city record.

/// A labeled point in the plane.
///
/// Cities are identified by their position in the input sequence, never by
/// name: names may repeat and are only carried through for reporting.
///
/// # Examples
///
/// ```
/// use u_nntour::geometry::City;
///
/// let paris = City::new("Paris", 2.35, 48.85);
/// assert_eq!(paris.name(), "Paris");
/// assert_eq!(paris.x(), 2.35);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Label of the city.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
