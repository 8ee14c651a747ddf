//! Enums used as keys for looking up values in an analysis.
use strum_macros::EnumIter;

/// Diagnostics derived from a potential intensity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Diagnostic {
    /// Thermodynamic efficiency, (SST - TO) / TO
    Efficiency,
    /// Air-sea thermodynamic disequilibrium (J/kg)
    Disequilibrium,
    /// Natural log of the squared potential intensity
    LnPi,
    /// Natural log of the efficiency
    LnEfficiency,
    /// Natural log of the disequilibrium
    LnDisequilibrium,
    /// Natural log of the ratio of the exchange coefficients of enthalpy and momentum
    LnCkcd,
}

impl Diagnostic {
    /// The short variable name used for this diagnostic in tcpyPI output files.
    pub fn name(self) -> &'static str {
        use Diagnostic::*;

        match self {
            Efficiency => "eff",
            Disequilibrium => "diseq",
            LnPi => "lnpi",
            LnEfficiency => "lneff",
            LnDisequilibrium => "lndiseq",
            LnCkcd => "lnCKCD",
        }
    }
}
