//! Options for the potential intensity solver.
use crate::error::{PiError, Result};
use metfor::{HectoPascal, Quantity};
use strum_macros::EnumIter;

/// How the parcel treats condensate as it rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AscentType {
    /// All condensate is carried with the parcel.
    Reversible,
    /// Condensate falls out immediately.
    Pseudoadiabatic,
}

impl AscentType {
    /// Fraction of the condensate removed from the parcel, 0 for reversible and 1 for pseudo
    /// adiabatic ascent.
    #[inline]
    pub fn fraction(self) -> f64 {
        match self {
            AscentType::Reversible => 0.0,
            AscentType::Pseudoadiabatic => 1.0,
        }
    }
}

/// What to do with missing levels in the temperature profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MissingDataHandling {
    /// Any missing level means there is no result.
    Strict,
    /// Missing levels below the lowest valid level are skipped, e.g. a model column that goes
    /// below ground. Missing levels above that still mean there is no result.
    SkipLeading,
    /// Remove every level with a missing temperature or mixing ratio and join the neighboring
    /// levels.
    Bridge,
}

/// Configuration for a potential intensity calculation.
///
/// The defaults reproduce Bister and Emanuel (2002) with dissipative heating.
///
/// # Examples
///
/// ```rust
/// use metfor::HectoPascal;
/// use potential_intensity::{AscentType, PiConfig};
///
/// let config = PiConfig::new()
///     .with_ckcd(1.0)
///     .with_ascent(AscentType::Pseudoadiabatic)
///     .with_top_pressure(HectoPascal(70.0));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.ckcd(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiConfig {
    ckcd: f64,
    ascent: AscentType,
    dissipative_heating: bool,
    wind_reduction: f64,
    top_pressure: HectoPascal,
    missing_data: MissingDataHandling,
    convergence_tolerance: f64,
    oscillation_tolerance: f64,
    max_iterations: usize,
    first_guess_pressure: HectoPascal,
}

impl Default for PiConfig {
    fn default() -> Self {
        PiConfig {
            ckcd: 0.9,
            ascent: AscentType::Reversible,
            dissipative_heating: true,
            wind_reduction: 0.8,
            top_pressure: HectoPascal(50.0),
            missing_data: MissingDataHandling::Strict,
            convergence_tolerance: 0.5,
            oscillation_tolerance: 1.0e-6,
            max_iterations: 200,
            first_guess_pressure: HectoPascal(970.0),
        }
    }
}

impl PiConfig {
    /// Create a configuration with the default values. This is a proxy for default with a clearer
    /// name.
    #[inline]
    pub fn new() -> Self {
        PiConfig::default()
    }

    /// Builder method for the ratio of the surface exchange coefficients of enthalpy and momentum.
    #[inline]
    pub fn with_ckcd(self, ckcd: f64) -> Self {
        PiConfig { ckcd, ..self }
    }

    /// Ratio of the surface exchange coefficients of enthalpy and momentum.
    #[inline]
    pub fn ckcd(&self) -> f64 {
        self.ckcd
    }

    /// Builder method for the ascent type.
    #[inline]
    pub fn with_ascent(self, ascent: AscentType) -> Self {
        PiConfig { ascent, ..self }
    }

    /// The ascent type used for all parcels.
    #[inline]
    pub fn ascent(&self) -> AscentType {
        self.ascent
    }

    /// Builder method to turn dissipative heating on or off.
    #[inline]
    pub fn with_dissipative_heating(self, dissipative_heating: bool) -> Self {
        PiConfig {
            dissipative_heating,
            ..self
        }
    }

    /// Is dissipative heating included?
    #[inline]
    pub fn dissipative_heating(&self) -> bool {
        self.dissipative_heating
    }

    /// Builder method for the factor that reduces gradient wind to surface wind.
    #[inline]
    pub fn with_wind_reduction(self, wind_reduction: f64) -> Self {
        PiConfig {
            wind_reduction,
            ..self
        }
    }

    /// Factor that reduces gradient wind to 10 meter wind.
    #[inline]
    pub fn wind_reduction(&self) -> f64 {
        self.wind_reduction
    }

    /// Builder method for the top pressure, levels above the level nearest this pressure are
    /// ignored.
    #[inline]
    pub fn with_top_pressure(self, top_pressure: HectoPascal) -> Self {
        PiConfig {
            top_pressure,
            ..self
        }
    }

    /// Pressure above which the sounding is ignored.
    #[inline]
    pub fn top_pressure(&self) -> HectoPascal {
        self.top_pressure
    }

    /// Builder method for missing data handling.
    #[inline]
    pub fn with_missing_data(self, missing_data: MissingDataHandling) -> Self {
        PiConfig {
            missing_data,
            ..self
        }
    }

    /// How missing levels are handled.
    #[inline]
    pub fn missing_data(&self) -> MissingDataHandling {
        self.missing_data
    }

    /// Builder method for the convergence tolerance in hPa.
    #[inline]
    pub fn with_convergence_tolerance(self, convergence_tolerance: f64) -> Self {
        PiConfig {
            convergence_tolerance,
            ..self
        }
    }

    /// The iteration stops when the minimum pressure changes by no more than this (hPa).
    #[inline]
    pub fn convergence_tolerance(&self) -> f64 {
        self.convergence_tolerance
    }

    /// Builder method for the oscillation tolerance in hPa.
    #[inline]
    pub fn with_oscillation_tolerance(self, oscillation_tolerance: f64) -> Self {
        PiConfig {
            oscillation_tolerance,
            ..self
        }
    }

    /// The iteration stops when the minimum pressure comes back to within this distance (hPa) of
    /// its value two iterations earlier.
    #[inline]
    pub fn oscillation_tolerance(&self) -> f64 {
        self.oscillation_tolerance
    }

    /// Builder method for the iteration cap.
    #[inline]
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        PiConfig {
            max_iterations,
            ..self
        }
    }

    /// Maximum number of iterations.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Builder method for the first guess of the minimum pressure.
    #[inline]
    pub fn with_first_guess_pressure(self, first_guess_pressure: HectoPascal) -> Self {
        PiConfig {
            first_guess_pressure,
            ..self
        }
    }

    /// First guess for the minimum pressure.
    #[inline]
    pub fn first_guess_pressure(&self) -> HectoPascal {
        self.first_guess_pressure
    }

    /// Check all the values are in range.
    pub fn validate(&self) -> Result<()> {
        let positive = |val: f64| val.is_finite() && val > 0.0;

        if !positive(self.ckcd) {
            return Err(PiError::InvalidConfig("ckcd"));
        }
        if !self.wind_reduction.is_finite() || self.wind_reduction < 0.0 {
            return Err(PiError::InvalidConfig("wind_reduction"));
        }
        if !positive(self.top_pressure.unpack()) {
            return Err(PiError::InvalidConfig("top_pressure"));
        }
        if !positive(self.convergence_tolerance) {
            return Err(PiError::InvalidConfig("convergence_tolerance"));
        }
        if !self.oscillation_tolerance.is_finite() || self.oscillation_tolerance < 0.0 {
            return Err(PiError::InvalidConfig("oscillation_tolerance"));
        }
        if self.max_iterations == 0 {
            return Err(PiError::InvalidConfig("max_iterations"));
        }
        if !positive(self.first_guess_pressure.unpack()) {
            return Err(PiError::InvalidConfig("first_guess_pressure"));
        }

        Ok(())
    }
}
