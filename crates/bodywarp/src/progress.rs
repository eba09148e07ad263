use serde::{Deserialize, Serialize};

/// Months of investment after which the duration curve reaches full intensity.
pub const FULL_EFFECT_MONTHS: f32 = 12.0;

/// Exponent of the ease-out duration curve.
const CURVE_EXPONENT: f32 = 2.2;

/// The normalized warp intensity `p` in [0, 1].
///
/// Zero means no deformation at all, one the full authored deformation. The
/// value is always finite and within range; every constructor sanitizes its
/// input instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Intensity(f32);

impl Intensity {
    /// No deformation.
    pub const ZERO: Intensity = Intensity(0.0);

    /// Full deformation.
    pub const FULL: Intensity = Intensity(1.0);

    /// Intensity from an externally supplied fraction, clamped to [0, 1].
    ///
    /// NaN maps to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bodywarp::Intensity;
    ///
    /// assert_eq!(Intensity::from_fraction(1.7).value(), 1.0);
    /// assert_eq!(Intensity::from_fraction(-0.2).value(), 0.0);
    /// ```
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Intensity from an investment duration in months.
    ///
    /// Computes `p = 1 - (1 - t)^2.2` with `t = months / 12` clamped to [0, 1]
    /// first, so durations past a year saturate at full intensity instead of
    /// raising a negative base to a fractional power.
    ///
    /// # Example
    ///
    /// ```
    /// use bodywarp::Intensity;
    ///
    /// assert_eq!(Intensity::from_duration_months(18.0).value(), 1.0);
    /// assert_eq!(Intensity::from_duration_months(0.0).value(), 0.0);
    /// ```
    pub fn from_duration_months(months: f32) -> Self {
        if months.is_nan() {
            return Self::ZERO;
        }
        let t = (months / FULL_EFFECT_MONTHS).clamp(0.0, 1.0);
        Self::from_fraction(1.0 - (1.0 - t).powf(CURVE_EXPONENT))
    }

    /// The raw intensity value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the intensity produces no deformation.
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Delayed-onset ramp starting at `start`; see [`onset_ramp`].
    pub fn ramp(self, start: f32) -> f32 {
        onset_ramp(self.0, start)
    }
}

impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f32::deserialize(deserializer).map(Intensity::from_fraction)
    }
}

/// Where the intensity of a preview comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensitySource {
    /// A fraction computed by an external forecast, the preferred input.
    Fraction(f32),
    /// A raw investment duration in months, mapped through the duration curve.
    DurationMonths(f32),
}

impl IntensitySource {
    /// Picks the forecast fraction when present, the duration curve otherwise.
    pub fn preferred(fraction: Option<f32>, months: f32) -> Self {
        match fraction {
            Some(f) => IntensitySource::Fraction(f),
            None => IntensitySource::DurationMonths(months),
        }
    }

    /// Resolves the source to an intensity.
    pub fn resolve(self) -> Intensity {
        match self {
            IntensitySource::Fraction(f) => Intensity::from_fraction(f),
            IntensitySource::DurationMonths(m) => Intensity::from_duration_months(m),
        }
    }
}

impl From<IntensitySource> for Intensity {
    fn from(source: IntensitySource) -> Self {
        source.resolve()
    }
}

/// Ramp that stays at zero until `p` passes `start`, then rises linearly to 1 at `p = 1`.
///
/// Computes `max(0, (p - start) / (1 - start))`.
pub fn onset_ramp(p: f32, start: f32) -> f32 {
    ((p - start) / (1.0 - start)).max(0.0)
}
