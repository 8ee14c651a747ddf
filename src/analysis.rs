//! Data type and methods for building and describing an analysis.
//!
//! An analysis bundles one column with its potential intensity and the diagnostics derived from
//! it.
use crate::{
    config::PiConfig,
    diagnostics::Diagnostics,
    error::Result,
    keys::Diagnostic,
    pi::{potential_intensity, PiOutput},
    sounding::Sounding,
};
use optional::Optioned;

/// Convenient package for the potential intensity of a column and the values derived from it.
#[derive(Debug, Clone)]
pub struct Analysis {
    // Sounding used to make the analysis
    sounding: Sounding,

    // Solver results
    output: Option<PiOutput>,

    // Derived from the output
    diagnostics: Diagnostics,
}

impl Analysis {
    /// Create a new `Analysis` with nothing calculated yet.
    pub fn new(snd: Sounding) -> Self {
        Analysis {
            sounding: snd,
            output: None,
            diagnostics: Diagnostics::missing(),
        }
    }

    /// Set the solver output, the diagnostics are recalculated from it.
    ///
    /// `ckcd` is the exchange coefficient ratio the output was calculated with.
    pub fn with_output<T>(self, output: T, ckcd: f64) -> Self
    where
        Option<PiOutput>: From<T>,
    {
        let output: Option<PiOutput> = Option::from(output);
        let diagnostics = output.as_ref().map_or_else(Diagnostics::missing, |out| {
            Diagnostics::from_output(out, self.sounding.sst(), ckcd)
        });

        Analysis {
            output,
            diagnostics,
            ..self
        }
    }

    /// Get the solver output, if it has been calculated.
    pub fn output(&self) -> Option<&PiOutput> {
        self.output.as_ref()
    }

    /// Get all the diagnostics.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Method to retrieve a diagnostic from the analysis.
    pub fn diagnostic(&self, key: Diagnostic) -> Optioned<f64> {
        self.diagnostics.get(key)
    }

    /// Get a reference to the sounding.
    pub fn sounding(&self) -> &Sounding {
        &self.sounding
    }

    /// Run the solver if it has not been run yet.
    pub fn fill_in_missing_analysis(self, config: &PiConfig) -> Result<Self> {
        if self.output.is_some() {
            return Ok(self);
        }

        let output = potential_intensity(&self.sounding, config)?;
        Ok(self.with_output(output, config.ckcd()))
    }
}

/// Analyze a sounding.
///
/// # Examples
///
/// ```rust
/// use potential_intensity::{analyze, keys::Diagnostic, PiConfig};
/// # use potential_intensity::doctest::make_test_sounding;
///
/// let anal = analyze(&make_test_sounding(), &PiConfig::new()).unwrap();
///
/// let out = anal.output().unwrap();
/// if out.status().is_success() {
///     assert!(anal.diagnostic(Diagnostic::Efficiency).is_some());
/// }
/// ```
pub fn analyze(snd: &Sounding, config: &PiConfig) -> Result<Analysis> {
    Analysis::new(snd.clone()).fill_in_missing_analysis(config)
}
