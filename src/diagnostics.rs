//! Diagnostics derived from the potential intensity.
//!
//! The squared potential intensity is the product of the exchange coefficient ratio, the
//! thermodynamic efficiency of the storm's heat engine, and the air-sea disequilibrium. Taking
//! logarithms splits the potential intensity into the contribution of each, see Wing, Emanuel,
//! and Solomon (2015).
use crate::{
    keys::Diagnostic,
    pi::PiOutput,
    thermo::celsius_to_kelvin,
    utility::optioned,
};
use metfor::{Celsius, JpKg, Kelvin, MetersPSec, Quantity};
use optional::{none, Optioned};

/// Thermodynamic efficiency, `(SST - TO) / TO`.
///
/// # Examples
///
/// ```rust
/// use metfor::Kelvin;
/// use potential_intensity::diagnostics::efficiency;
///
/// assert_eq!(efficiency(Kelvin(300.0), Kelvin(200.0)), 0.5);
/// ```
#[inline]
pub fn efficiency(sst: Kelvin, outflow_temperature: Kelvin) -> f64 {
    let sst = sst.unpack();
    let t0 = outflow_temperature.unpack();

    (sst - t0) / t0
}

/// Air-sea thermodynamic disequilibrium, the part of the squared potential intensity not
/// explained by the efficiency and the exchange coefficient ratio.
#[inline]
pub fn disequilibrium(
    vmax: MetersPSec,
    sst: Kelvin,
    outflow_temperature: Kelvin,
    ckcd: f64,
) -> JpKg {
    let eff = efficiency(sst, outflow_temperature);
    let vmax = vmax.unpack();

    JpKg(vmax * vmax / (ckcd * eff))
}

/// Logarithms of the potential intensity and its factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    /// `2 ln(VMAX)`
    pub ln_pi: f64,
    /// Natural log of the efficiency.
    pub ln_efficiency: f64,
    /// Natural log of the disequilibrium.
    pub ln_disequilibrium: f64,
    /// Natural log of the exchange coefficient ratio.
    pub ln_ckcd: f64,
}

/// Split the potential intensity into the sum of logarithms, `ln_pi = ln_ckcd + ln_efficiency +
/// ln_disequilibrium`.
pub fn decompose(
    vmax: MetersPSec,
    sst: Kelvin,
    outflow_temperature: Kelvin,
    ckcd: f64,
) -> Decomposition {
    let eff = efficiency(sst, outflow_temperature);
    let diseq = disequilibrium(vmax, sst, outflow_temperature, ckcd);

    Decomposition {
        ln_pi: 2.0 * f64::ln(vmax.unpack()),
        ln_efficiency: f64::ln(eff),
        ln_disequilibrium: f64::ln(diseq.unpack()),
        ln_ckcd: f64::ln(ckcd),
    }
}

/// All the diagnostics for one potential intensity result, missing where the result is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    efficiency: Optioned<f64>,
    disequilibrium: Optioned<JpKg>,
    decomposition: Option<Decomposition>,
}

impl Diagnostics {
    /// Diagnostics with no values.
    pub fn missing() -> Self {
        Diagnostics {
            efficiency: none(),
            disequilibrium: none(),
            decomposition: None,
        }
    }

    /// Calculate the diagnostics from the result of a calculation.
    ///
    /// `sst` is the sea surface temperature that went in to the calculation, and `ckcd` the
    /// exchange coefficient ratio it was configured with.
    pub fn from_output(output: &PiOutput, sst: Optioned<Celsius>, ckcd: f64) -> Self {
        let sst = sst.map_t(|sst| Kelvin(celsius_to_kelvin(sst.unpack())));

        match (
            sst.into_option(),
            output.outflow_temperature().into_option(),
            output.vmax().into_option(),
        ) {
            (Some(sst), Some(to), Some(vmax)) => {
                let decomposition = decompose(vmax, sst, to, ckcd);

                Diagnostics {
                    efficiency: optioned(efficiency(sst, to), |eff| eff),
                    disequilibrium: optioned(
                        disequilibrium(vmax, sst, to, ckcd).unpack(),
                        JpKg,
                    ),
                    decomposition: Some(decomposition),
                }
            }
            _ => Self::missing(),
        }
    }

    /// Thermodynamic efficiency.
    #[inline]
    pub fn efficiency(&self) -> Optioned<f64> {
        self.efficiency
    }

    /// Air-sea disequilibrium.
    #[inline]
    pub fn disequilibrium(&self) -> Optioned<JpKg> {
        self.disequilibrium
    }

    /// The logarithmic decomposition.
    #[inline]
    pub fn decomposition(&self) -> Option<&Decomposition> {
        self.decomposition.as_ref()
    }

    /// Get a diagnostic by key as a raw value.
    pub fn get(&self, key: Diagnostic) -> Optioned<f64> {
        use Diagnostic::*;

        let from_decomposition = |f: fn(&Decomposition) -> f64| {
            self.decomposition
                .as_ref()
                .map_or(none(), |d| optioned(f(d), |v| v))
        };

        match key {
            Efficiency => self.efficiency,
            Disequilibrium => self.disequilibrium.map_t(Quantity::unpack),
            LnPi => from_decomposition(|d| d.ln_pi),
            LnEfficiency => from_decomposition(|d| d.ln_efficiency),
            LnDisequilibrium => from_decomposition(|d| d.ln_disequilibrium),
            LnCkcd => from_decomposition(|d| d.ln_ckcd),
        }
    }
}
