//! Thermodynamic primitives.
//!
//! Everything in here works on plain `f64` values in the units used inside the solver:
//! temperatures in Kelvin unless the argument is named `tc`, pressures in hPa, and mixing ratios
//! in kg/kg. None of these functions fail, physically impossible inputs produce NaN.
use crate::constants::{ALV0, CL, CPD, CPVMCL, EPS, G, RD, RV, ZERO_C_IN_K};

/// Convert Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(tc: f64) -> f64 {
    tc + ZERO_C_IN_K
}

/// Convert Kelvin to Celsius.
#[inline]
pub fn kelvin_to_celsius(t: f64) -> f64 {
    t - ZERO_C_IN_K
}

/// Saturation vapor pressure over liquid water (hPa) from the August-Roche-Magnus form of the
/// Clausius-Clapeyron relation.
#[inline]
pub fn saturation_vapor_pressure(tc: f64) -> f64 {
    6.112 * f64::exp(17.67 * tc / (243.5 + tc))
}

/// Latent heat of vaporization (J/kg) at a temperature in Celsius.
#[inline]
pub fn latent_heat_vaporization(tc: f64) -> f64 {
    ALV0 + (CPVMCL * tc)
}

/// Mixing ratio (kg/kg) given the vapor pressure and the total pressure.
#[inline]
pub fn mixing_ratio(vapor_pressure: f64, p: f64) -> f64 {
    EPS * vapor_pressure / (p - vapor_pressure)
}

/// Partial pressure of water vapor (hPa) given the mixing ratio and total pressure.
#[inline]
pub fn vapor_pressure(r: f64, p: f64) -> f64 {
    r * p / (EPS + r)
}

/// Density temperature (K).
///
/// `rt` is the total water mixing ratio, vapor plus condensate, and `r` is the vapor mixing
/// ratio. With no condensate this is the virtual temperature.
#[inline]
pub fn density_temperature(t: f64, rt: f64, r: f64) -> f64 {
    t * (1.0 + r / EPS) / (1.0 + rt)
}

/// Virtual temperature (K) of unsaturated or just saturated air.
#[inline]
pub fn virtual_temperature(t: f64, r: f64) -> f64 {
    density_temperature(t, r, r)
}

/// Relative humidity from the mixing ratio, capped at 1.0.
#[inline]
pub fn relative_humidity(t: f64, r: f64, p: f64) -> f64 {
    let ev = vapor_pressure(r, p);
    let es = saturation_vapor_pressure(kelvin_to_celsius(t));

    f64::min(ev / es, 1.0)
}

/// Reversible total specific entropy per unit mass of dry air (J/kg/K), Emanuel (1994) 4.5.9.
#[inline]
pub fn entropy(t: f64, r: f64, p: f64) -> f64 {
    let ev = vapor_pressure(r, p);
    let es = saturation_vapor_pressure(kelvin_to_celsius(t));
    let rh = f64::min(ev / es, 1.0);
    let alv = latent_heat_vaporization(kelvin_to_celsius(t));

    (CPD + r * CL) * f64::ln(t) - RD * f64::ln(p - ev) + alv * r / t - r * RV * f64::ln(rh)
}

/// Pressure (hPa) of the lifting condensation level.
///
/// Uses the empirical fit from Emanuel's `calcsound` code, `rh` is the parcel relative humidity
/// as a fraction.
#[inline]
pub fn lcl_pressure(t: f64, rh: f64, p: f64) -> f64 {
    let chi = t / (1669.0 - 122.0 * rh - t);
    p * f64::powf(rh, chi)
}

/// Dry static energy (J/kg) at height `z` meters.
#[inline]
pub fn dry_static_energy(t: f64, z: f64) -> f64 {
    CPD * t + G * z
}

/// Moist static energy (J/kg) at height `z` meters with vapor mixing ratio `r`.
#[inline]
pub fn moist_static_energy(t: f64, z: f64, r: f64) -> f64 {
    dry_static_energy(t, z) + latent_heat_vaporization(kelvin_to_celsius(t)) * r
}
