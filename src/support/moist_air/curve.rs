use super::saturation_humidity_ratio;

/// A point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    /// Dry-bulb temperature, °C.
    pub temperature: f64,

    /// Saturation humidity ratio, kg/kg.
    pub humidity_ratio: f64,
}

/// The saturation humidity ratio sampled over a temperature range.
///
/// Intended for charting; nothing in state resolution depends on it.
///
/// # Example
///
/// ```
/// use twine_psychro::support::moist_air::SaturationCurve;
///
/// let curve = SaturationCurve::display(101_325.0);
/// let points = curve.points();
///
/// assert_eq!(points.first().unwrap().temperature, -10.0);
/// assert_eq!(points.last().unwrap().temperature, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationCurve {
    points: Vec<SaturationPoint>,
}

impl SaturationCurve {
    /// Temperature range shown on a standard psychrometric chart, °C.
    pub const DISPLAY_RANGE: [f64; 2] = [-10.0, 50.0];

    /// Samples `count` evenly spaced points over `range` (inclusive) at `p_total`.
    ///
    /// A `count` of 1 yields only the start of the range and 0 yields an empty curve.
    #[must_use]
    pub fn new(p_total: f64, range: [f64; 2], count: usize) -> Self {
        let [start, end] = range;
        let step = if count > 1 {
            (end - start) / (count - 1) as f64
        } else {
            0.0
        };

        let points = (0..count)
            .map(|i| {
                let temperature = if i + 1 == count && count > 1 {
                    end
                } else {
                    start + step * i as f64
                };
                SaturationPoint {
                    temperature,
                    humidity_ratio: saturation_humidity_ratio(temperature, p_total),
                }
            })
            .collect();

        Self { points }
    }

    /// Samples the display range at 1 °C steps.
    #[must_use]
    pub fn display(p_total: f64) -> Self {
        let [start, end] = Self::DISPLAY_RANGE;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (end - start) as usize + 1;
        Self::new(p_total, Self::DISPLAY_RANGE, count)
    }

    /// Returns the sampled points in order of increasing temperature.
    #[must_use]
    pub fn points(&self) -> &[SaturationPoint] {
        &self.points
    }
}
