//! Error types for the potential-intensity crate.
use thiserror::Error;

/// Error type for the crate.
///
/// There are two groups of errors. Malformed input, like profiles of different lengths, is a bug
/// in the caller and is always returned as an error. Missing data is an expected condition for
/// real world data (e.g. a column over land), so the solver turns those errors into a
/// [`PiStatus::MissingData`](crate::PiStatus::MissingData) result instead of failing.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum PiError {
    /// The pressure, temperature, and mixing ratio profiles are not the same length.
    #[error("profiles have different lengths")]
    MismatchedProfiles,
    /// A column needs at least two pressure levels.
    #[error("at least two pressure levels are required")]
    NotEnoughLevels,
    /// Pressure must be strictly increasing or strictly decreasing.
    #[error("pressure profile is not strictly monotonic")]
    NonMonotonicPressure,
    /// A configuration value is out of range, the payload names it.
    #[error("invalid configuration value: {0}")]
    InvalidConfig(&'static str),
    /// The grid shape does not match the number of columns.
    #[error("grid shape does not match the number of columns")]
    MismatchedGrid,
    /// A column in a grid was malformed.
    #[error("column {index}: {error}")]
    InCell {
        /// Flat index of the column in the grid.
        index: usize,
        /// What was wrong with it.
        error: Box<PiError>,
    },

    /// A surface value (sea surface temperature or sea level pressure) is missing.
    #[error("missing value required for analysis")]
    MissingValue,
    /// There is no data available that meets the requirements.
    #[error("profile is full of missing values, cannot do analysis")]
    NoDataProfile,
    /// The profile has missing levels that the configured handling does not allow.
    #[error("profile has missing levels")]
    MissingProfileData,
    /// A temperature in the column is not physically possible.
    #[error("temperature below 100 K in profile")]
    UnphysicalTemperature,
}

impl PiError {
    /// Is this error caused by missing or unusable data, rather than malformed input?
    pub fn is_missing_data(&self) -> bool {
        use PiError::*;

        match self {
            MissingValue | NoDataProfile | MissingProfileData | UnphysicalTemperature => true,
            MismatchedProfiles
            | NotEnoughLevels
            | NonMonotonicPressure
            | InvalidConfig(_)
            | MismatchedGrid
            | InCell { .. } => false,
        }
    }
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, PiError>;
