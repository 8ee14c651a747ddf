use crate::ascent::AscentStatus;
use std::fmt::{Display, Formatter};
use strum_macros::EnumIter;

/// How a potential intensity calculation ended.
///
/// Use `ifl` to get the integer flag used by the tcpyPI family of codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PiStatus {
    /// The minimum pressure converged.
    Converged,
    /// The minimum pressure settled into alternating between two values.
    ///
    /// This reports the same flag as `Converged` for compatibility, check for it explicitly if
    /// the difference matters.
    Oscillating,
    /// The iteration limit was reached, the values are the last estimates.
    NotConverged,
    /// The minimum pressure fell below 400 hPa.
    Diverged,
    /// The sea surface temperature is 5C or colder.
    SeaTooCold,
    /// A parcel was too dry or too cold to lift.
    UnsuitableParcel,
    /// Finding a saturated parcel temperature did not converge in one of the ascents.
    AscentNotConverged,
    /// Missing or unusable input data.
    MissingData,
}

impl PiStatus {
    /// The integer flag.
    ///
    /// | flag | meaning |
    /// |---|---|
    /// | 0 | no solution: not converged, diverged, cold sea, or an unsuitable parcel |
    /// | 1 | success |
    /// | 2 | a parcel ascent did not converge |
    /// | 3 | missing data |
    #[inline]
    pub fn ifl(self) -> i32 {
        use PiStatus::*;

        match self {
            Converged | Oscillating => 1,
            NotConverged | Diverged | SeaTooCold | UnsuitableParcel => 0,
            AscentNotConverged => 2,
            MissingData => 3,
        }
    }

    /// Did the calculation produce a usable result?
    #[inline]
    pub fn is_success(self) -> bool {
        self.ifl() == 1
    }

    /// The status to report for a failed parcel ascent, `None` if it succeeded.
    #[inline]
    pub(crate) fn from_ascent(status: AscentStatus) -> Option<PiStatus> {
        match status {
            AscentStatus::Ok => None,
            AscentStatus::UnsuitableParcel => Some(PiStatus::UnsuitableParcel),
            AscentStatus::NotConverged => Some(PiStatus::AscentNotConverged),
        }
    }
}

impl Display for PiStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        use PiStatus::*;

        let desc = match self {
            Converged => "converged",
            Oscillating => "oscillating",
            NotConverged => "not converged",
            Diverged => "diverged",
            SeaTooCold => "sea too cold",
            UnsuitableParcel => "unsuitable parcel",
            AscentNotConverged => "ascent not converged",
            MissingData => "missing data",
        };

        write!(f, "{} => {}", self.ifl(), desc)
    }
}
