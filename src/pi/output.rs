use super::PiStatus;
use crate::utility::unpack_or_nan;
use metfor::{HectoPascal, Kelvin, MetersPSec};
use optional::{none, Optioned};

/// The result of a potential intensity calculation for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiOutput {
    pub(crate) vmax: Optioned<MetersPSec>,
    pub(crate) pmin: Optioned<HectoPascal>,
    pub(crate) status: PiStatus,
    pub(crate) outflow_temperature: Optioned<Kelvin>,
    pub(crate) outflow_level: Optioned<HectoPascal>,
    pub(crate) iterations: usize,
}

impl PiOutput {
    /// An output with no values.
    pub(crate) fn missing(status: PiStatus, iterations: usize) -> Self {
        PiOutput {
            vmax: none(),
            pmin: none(),
            status,
            outflow_temperature: none(),
            outflow_level: none(),
            iterations,
        }
    }

    /// The potential intensity, maximum sustained surface wind speed.
    #[inline]
    pub fn vmax(&self) -> Optioned<MetersPSec> {
        self.vmax
    }

    /// The minimum central pressure.
    #[inline]
    pub fn pmin(&self) -> Optioned<HectoPascal> {
        self.pmin
    }

    /// How the calculation ended.
    #[inline]
    pub fn status(&self) -> PiStatus {
        self.status
    }

    /// The integer status flag, see `PiStatus::ifl`.
    #[inline]
    pub fn ifl(&self) -> i32 {
        self.status.ifl()
    }

    /// The outflow temperature.
    #[inline]
    pub fn outflow_temperature(&self) -> Optioned<Kelvin> {
        self.outflow_temperature
    }

    /// The outflow level.
    #[inline]
    pub fn outflow_level(&self) -> Optioned<HectoPascal> {
        self.outflow_level
    }

    /// Number of iterations of the minimum pressure, 0 if the iteration never started.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// `(VMAX, PMIN, IFL, TO, OTL)` with missing values as NaN.
    pub fn as_tuple(&self) -> (f64, f64, i32, f64, f64) {
        (
            unpack_or_nan(self.vmax),
            unpack_or_nan(self.pmin),
            self.ifl(),
            unpack_or_nan(self.outflow_temperature),
            unpack_or_nan(self.outflow_level),
        )
    }
}
