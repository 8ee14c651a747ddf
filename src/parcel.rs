//! Parcels lifted in the potential intensity calculation.
use crate::{
    constants::EPS,
    profile::Environment,
    thermo::{
        entropy, kelvin_to_celsius, lcl_pressure, mixing_ratio, relative_humidity,
        saturation_vapor_pressure, virtual_temperature,
    },
};
use metfor::{HectoPascal, Kelvin, Quantity};

/// Variables defining a parcel as used in parcel analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    /// Temperature in K
    pub temperature: Kelvin,
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Water vapor mixing ratio in kg/kg
    pub mixing_ratio: f64,
}

impl Parcel {
    /// Reversible total specific entropy of the parcel (J/kg/K).
    #[inline]
    pub fn entropy(&self) -> f64 {
        entropy(
            self.temperature.unpack(),
            self.mixing_ratio,
            self.pressure.unpack(),
        )
    }

    /// Relative humidity as a fraction, capped at 1.
    #[inline]
    pub fn relative_humidity(&self) -> f64 {
        relative_humidity(
            self.temperature.unpack(),
            self.mixing_ratio,
            self.pressure.unpack(),
        )
    }

    /// Pressure of the lifting condensation level.
    #[inline]
    pub fn lcl_pressure(&self) -> HectoPascal {
        HectoPascal(lcl_pressure(
            self.temperature.unpack(),
            self.relative_humidity(),
            self.pressure.unpack(),
        ))
    }

    /// Virtual temperature of the parcel.
    #[inline]
    pub fn virtual_temperature(&self) -> Kelvin {
        Kelvin(virtual_temperature(
            self.temperature.unpack(),
            self.mixing_ratio,
        ))
    }

    /// Too dry or too cold to lift. Parcels with a mixing ratio below 1e-6 kg/kg or a temperature
    /// below 200 K have no CAPE.
    #[inline]
    pub fn is_suitable(&self) -> bool {
        self.mixing_ratio >= 1.0e-6 && self.temperature.unpack() >= 200.0
    }
}

/// The parcel at the lowest level of the environment, with its own temperature and humidity.
pub fn ambient_parcel(env: &Environment) -> Parcel {
    Parcel {
        temperature: Kelvin(env.temperature()[0]),
        pressure: HectoPascal(env.pressure()[0]),
        mixing_ratio: env.mixing_ratio()[0],
    }
}

/// The boundary layer parcel moved isothermally to the reduced surface pressure `pm`.
///
/// The mixing ratio is increased so the parcel keeps the relative humidity it has at sea level
/// pressure. The parcel pressure is capped at 1000 hPa.
pub fn boundary_layer_parcel(env: &Environment, pm: HectoPascal) -> Parcel {
    let pp = parcel_pressure(pm);
    let msl = env.mslp().unpack();
    let r0 = env.mixing_ratio()[0];

    Parcel {
        temperature: Kelvin(env.temperature()[0]),
        pressure: HectoPascal(pp),
        mixing_ratio: EPS * r0 * msl / (pp * (EPS + r0) - r0 * msl),
    }
}

/// A parcel at the sea surface temperature, saturated at the reduced surface pressure `pm`.
///
/// The parcel pressure is capped at 1000 hPa.
pub fn sea_surface_parcel(env: &Environment, pm: HectoPascal) -> Parcel {
    let pp = parcel_pressure(pm);
    let es0 = saturation_vapor_pressure(env.sst().unpack());

    Parcel {
        temperature: env.sst_kelvin(),
        pressure: HectoPascal(pp),
        mixing_ratio: mixing_ratio(es0, pp),
    }
}

#[inline]
fn parcel_pressure(pm: HectoPascal) -> f64 {
    f64::min(pm.unpack(), 1000.0)
}

/// Temperature of the parcel in Celsius, handy for logging.
#[inline]
pub(crate) fn celsius(parcel: &Parcel) -> f64 {
    kelvin_to_celsius(parcel.temperature.unpack())
}
