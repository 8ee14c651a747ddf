use metfor::{Celsius, HectoPascal};
use optional::Optioned;

/// A copy of a row of the sounding data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRow {
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Temperature in C
    pub temperature: Optioned<Celsius>,
    /// Water vapor mixing ratio in g/kg
    pub mixing_ratio: Optioned<f64>,
}
