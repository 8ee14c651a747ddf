//! Lift a parcel through the environment and analyze its buoyancy.
use crate::{config::AscentType, parcel::Parcel, profile::Environment};
use metfor::{HectoPascal, JpKg, Kelvin, Quantity};
use optional::Optioned;
use strum_macros::EnumIter;

pub(crate) mod lift;

/// Hold profiles for a parcel and its environment.
#[derive(Debug, Clone, Default)]
pub struct ParcelProfile {
    /// Pressure profile
    pub pressure: Vec<HectoPascal>,
    /// Parcel density temperature profile
    pub parcel_t: Vec<Kelvin>,
    /// Environment density temperature profile
    pub environment_t: Vec<Kelvin>,
}

impl ParcelProfile {
    /// Difference between the parcel and environment density temperatures at each level.
    pub fn buoyancy(&self) -> impl Iterator<Item = f64> + '_ {
        self.parcel_t
            .iter()
            .zip(self.environment_t.iter())
            .map(|(pcl, env)| pcl.unpack() - env.unpack())
    }
}

/// How an ascent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AscentStatus {
    /// The ascent reached the top of the environment.
    Ok,
    /// The parcel was too dry or too cold to lift.
    UnsuitableParcel,
    /// Finding the saturated parcel temperature did not converge at some level.
    NotConverged,
}

/// Parcel analysis, this is a way to package the analysis of a parcel.
#[derive(Debug, Clone)]
pub struct AscentAnalysis {
    // The orginal parcel and profile
    parcel: Parcel,
    profile: ParcelProfile,

    // Analysis values
    status: AscentStatus,
    cape: JpKg,
    lcl_pressure: Optioned<HectoPascal>,
    outflow_temperature: Optioned<Kelvin>,
    lnb_pressure: Optioned<HectoPascal>,
}

impl AscentAnalysis {
    /// Get the CAPE.
    #[inline]
    pub fn cape(&self) -> JpKg {
        self.cape
    }

    /// Get the temperature at the level of neutral buoyancy, the outflow temperature.
    #[inline]
    pub fn outflow_temperature(&self) -> Optioned<Kelvin> {
        self.outflow_temperature
    }

    /// Get the pressure at the level of neutral buoyancy, the outflow level.
    #[inline]
    pub fn lnb_pressure(&self) -> Optioned<HectoPascal> {
        self.lnb_pressure
    }

    /// Get the LCL pressure level.
    #[inline]
    pub fn lcl_pressure(&self) -> Optioned<HectoPascal> {
        self.lcl_pressure
    }

    /// How the ascent ended.
    #[inline]
    pub fn status(&self) -> AscentStatus {
        self.status
    }

    /// Retrieve the parcel's profile
    #[inline]
    pub fn profile(&self) -> &ParcelProfile {
        &self.profile
    }

    /// Retrieve the original parcel.
    #[inline]
    pub fn parcel(&self) -> &Parcel {
        &self.parcel
    }
}

/// Lift a parcel through the environment.
///
/// Below the lifting condensation level the parcel follows a dry adiabat, above it the parcel
/// conserves its reversible entropy. With `AscentType::Pseudoadiabatic` the condensate is not
/// counted in the parcel's density.
///
/// # Examples
///
/// ```rust
/// use metfor::Quantity;
/// use potential_intensity::{
///     ambient_parcel, lift_parcel, AscentStatus, AscentType, Environment, PiConfig,
/// };
/// # use potential_intensity::doctest::make_test_sounding;
///
/// let env = Environment::new(&make_test_sounding(), &PiConfig::new()).unwrap();
/// let anal = lift_parcel(ambient_parcel(&env), &env, AscentType::Reversible);
///
/// assert_eq!(anal.status(), AscentStatus::Ok);
/// assert!(anal.cape().unpack() >= 0.0);
/// ```
pub fn lift_parcel(parcel: Parcel, env: &Environment, ascent: AscentType) -> AscentAnalysis {
    lift::lift_parcel(parcel, env, ascent)
}
