//! Thermodynamic constants used throughout the potential intensity calculation.
//!
//! These are the values of Bister and Emanuel (2002), they are not always the same as the
//! constants in `metfor`, and the results depend on them to the last bit.

/// Specific heat of dry air at constant pressure (J/kg/K)
pub const CPD: f64 = 1005.7;
/// Specific heat of water vapor at constant pressure (J/kg/K)
pub const CPV: f64 = 1870.0;
/// Specific heat of liquid water (J/kg/K)
pub const CL: f64 = 2500.0;
/// Difference of the vapor and liquid specific heats.
pub const CPVMCL: f64 = CPV - CL;
/// Gas constant for water vapor (J/kg/K)
pub const RV: f64 = 461.5;
/// Gas constant for dry air (J/kg/K)
pub const RD: f64 = 287.04;
/// Ratio of the gas constants of dry air and water vapor.
pub const EPS: f64 = RD / RV;
/// Latent heat of vaporization at 0C (J/kg)
pub const ALV0: f64 = 2.501e6;
/// Acceleration of gravity (m/s^2)
pub const G: f64 = 9.81;

/// Exponent `b` in the assumed profile of azimuthal velocity in the eye, `V = Vm (r/rm)^b`.
pub const EYE_EXPONENT: f64 = 2.0;

/// Offset between Celsius and Kelvin.
pub(crate) const ZERO_C_IN_K: f64 = 273.15;
