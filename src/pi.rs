//! The potential intensity of tropical cyclones.
//!
//! This follows Bister and Emanuel (2002) as implemented in Emanuel's `pcmin` routine and the
//! tcpyPI package. The minimum central pressure and the CAPE of the parcels lifted from the
//! storm's boundary layer depend on each other, so the pressure is found by fixed point
//! iteration.
use crate::{
    ascent::lift_parcel,
    config::PiConfig,
    constants::{EYE_EXPONENT, RD},
    error::Result,
    parcel::{ambient_parcel, boundary_layer_parcel, celsius, sea_surface_parcel},
    profile::Environment,
    sounding::Sounding,
    thermo::virtual_temperature,
    utility::{optioned, unpack_or_nan},
};
use metfor::{Celsius, HectoPascal, Kelvin, MetersPSec, Quantity};
use optional::Optioned;
use tracing::{debug, trace};

pub use self::{output::PiOutput, status::PiStatus};

mod output;
mod status;

// Seas this cold (C) or colder cannot support a tropical cyclone.
const MIN_SST: Celsius = Celsius(5.0);

// Minimum pressures below this (hPa) mean the iteration ran away.
const MIN_PRESSURE: f64 = 400.0;

/// Calculate the potential intensity for a sounding.
///
/// Only malformed input is an error, see `Sounding::check_shape` and `PiConfig::validate`. Missing
/// data and failures of the iteration are reported through `PiOutput::status`.
///
/// # Examples
///
/// ```rust
/// use potential_intensity::{potential_intensity, PiConfig, PiStatus};
/// # use potential_intensity::doctest::make_test_sounding;
///
/// let snd = make_test_sounding();
/// let out = potential_intensity(&snd, &PiConfig::new()).unwrap();
///
/// println!("{}", out.status());
/// assert_ne!(out.status(), PiStatus::MissingData);
/// ```
pub fn potential_intensity(snd: &Sounding, config: &PiConfig) -> Result<PiOutput> {
    config.validate()?;
    snd.check_shape()?;

    if snd.sst().into_option().map_or(false, |sst| sst <= MIN_SST) {
        debug!(sst = unpack_or_nan(snd.sst()), "sea too cold");
        return Ok(PiOutput::missing(PiStatus::SeaTooCold, 0));
    }

    let env = match Environment::new(snd, config) {
        Ok(env) => env,
        Err(err) if err.is_missing_data() => {
            debug!(%err, "no potential intensity");
            return Ok(PiOutput::missing(PiStatus::MissingData, 0));
        }
        Err(err) => return Err(err),
    };

    Ok(solve(&env, config))
}

/// Calculate the potential intensity from raw values.
///
/// The sea surface temperature `sstc` is in C, the sea level pressure `msl` in hPa, and the
/// profiles are pressure `p` (hPa), temperature `tc` (C), and mixing ratio `r` (g/kg). NaN marks
/// a missing value, except in the pressure profile which may not have any.
///
/// Returns `(VMAX, PMIN, IFL, TO, OTL)` in m/s, hPa, the integer flag from `PiStatus::ifl`, K,
/// and hPa.
///
/// # Examples
///
/// ```rust
/// use potential_intensity::{pi, PiConfig};
///
/// let p = [1000.0, 850.0, 700.0, 500.0, 300.0, 200.0, 150.0, 100.0, 70.0];
/// let tc = [26.3, 18.8, 11.3, -2.8, -27.4, -51.3, -65.6, -73.7, -66.0];
/// let r = [18.5, 12.3, 7.4, 2.7, 0.45, 0.06, 0.015, 0.004, 0.003];
///
/// let (vmax, pmin, ifl, _to, _otl) = pi(28.5, 1012.0, &p, &tc, &r, &PiConfig::new()).unwrap();
///
/// assert_eq!(ifl, 1);
/// assert!(vmax > 0.0);
/// assert!(pmin < 1012.0);
/// ```
pub fn pi(
    sstc: f64,
    msl: f64,
    p: &[f64],
    tc: &[f64],
    r: &[f64],
    config: &PiConfig,
) -> Result<(f64, f64, i32, f64, f64)> {
    let snd = raw_sounding(sstc, msl, p, tc, r);
    potential_intensity(&snd, config).map(|out| out.as_tuple())
}

/// Build a sounding from raw values in the units of `pi`, NaN is missing.
pub(crate) fn raw_sounding(sstc: f64, msl: f64, p: &[f64], tc: &[f64], r: &[f64]) -> Sounding {
    Sounding::new()
        .with_sst(optioned(sstc, Celsius))
        .with_mslp(optioned(msl, HectoPascal))
        .with_pressure_profile(p.iter().cloned().map(HectoPascal).collect())
        .with_temperature_profile(tc.iter().map(|&t| optioned(t, Celsius)).collect())
        .with_mixing_ratio_profile(r.iter().map(|&r| optioned(r, |r| r)).collect())
}

/// One evaluation of the minimum pressure.
struct Step {
    capem: f64,
    capems: f64,
    rat: f64,
    tvav: f64,
    outflow_temperature: Optioned<Kelvin>,
    outflow_level: Optioned<HectoPascal>,
    pm_new: f64,
}

fn solve(env: &Environment, config: &PiConfig) -> PiOutput {
    let ambient = ambient_parcel(env);
    let ambient_ascent = lift_parcel(ambient, env, config.ascent());
    let capea = ambient_ascent.cape().unpack();

    // The last ascent failure is reported.
    let mut ascent_failure = PiStatus::from_ascent(ambient_ascent.status());

    trace!(
        sst = env.sst().unpack(),
        t0 = celsius(&ambient),
        capea = capea,
        "start minimum pressure iteration"
    );

    let mut pm = config.first_guess_pressure().unpack();
    let mut pm_prev: Option<f64> = None;
    let mut iterations = 0;

    let (status, step) = loop {
        let step = take_step(env, config, capea, pm, &mut ascent_failure);
        iterations += 1;

        let pm_new = step.pm_new;
        trace!(
            iteration = iterations,
            pm = pm,
            pm_new = pm_new,
            capem = step.capem,
            capems = step.capems,
            "minimum pressure step"
        );

        // Within the tolerance of the value two steps back.
        let back_to =
            |tolerance: f64| pm_prev.map_or(false, |prev| (pm_new - prev).abs() <= tolerance);

        let status = if !pm_new.is_finite() {
            Some(ascent_failure.unwrap_or(PiStatus::NotConverged))
        } else if pm_new < MIN_PRESSURE {
            Some(PiStatus::Diverged)
        } else if (pm_new - pm).abs() <= config.convergence_tolerance() {
            Some(PiStatus::Converged)
        } else if back_to(config.oscillation_tolerance()) {
            Some(PiStatus::Oscillating)
        } else if iterations >= config.max_iterations() {
            if back_to(config.convergence_tolerance()) {
                Some(PiStatus::Oscillating)
            } else {
                Some(PiStatus::NotConverged)
            }
        } else {
            None
        };

        if let Some(status) = status {
            break (status, step);
        }

        pm_prev = Some(pm);
        pm = pm_new;
    };

    let status = match status {
        PiStatus::Converged | PiStatus::Oscillating => ascent_failure.unwrap_or(status),
        _ => status,
    };

    debug!(%status, iterations, pm = pm, "minimum pressure iteration finished");

    if status == PiStatus::Diverged {
        return PiOutput::missing(status, iterations);
    }

    let (vmax, pmin) = final_values(&step, capea, env.mslp().unpack(), config);

    PiOutput {
        vmax: optioned(vmax, MetersPSec),
        pmin: optioned(pmin, HectoPascal),
        status,
        outflow_temperature: step.outflow_temperature,
        outflow_level: step.outflow_level,
        iterations,
    }
}

fn take_step(
    env: &Environment,
    config: &PiConfig,
    capea: f64,
    pm: f64,
    ascent_failure: &mut Option<PiStatus>,
) -> Step {
    let ascent = config.ascent();
    let pm = HectoPascal(pm);

    // Boundary layer parcel at the reduced pressure
    let boundary_layer = lift_parcel(boundary_layer_parcel(env, pm), env, ascent);

    // Saturated parcel at the sea surface temperature and the reduced pressure
    let sea_surface = sea_surface_parcel(env, pm);
    let saturated = lift_parcel(sea_surface, env, ascent);

    for status in [boundary_layer.status(), saturated.status()].iter() {
        if let Some(failure) = PiStatus::from_ascent(*status) {
            *ascent_failure = Some(failure);
        }
    }

    let sst = env.sst_kelvin().unpack();
    let msl = env.mslp().unpack();
    let t0 = env.temperature()[0];
    let r0 = env.mixing_ratio()[0];

    let capem = boundary_layer.cape().unpack();
    let capems = saturated.cape().unpack();
    let outflow_temperature = saturated.outflow_temperature();

    let rat = if config.dissipative_heating() {
        sst / unpack_or_nan(outflow_temperature)
    } else {
        1.0
    };

    // Mean virtual temperature of the boundary layer
    let tvav = 0.5
        * (virtual_temperature(t0, r0) + virtual_temperature(sst, sea_surface.mixing_ratio));

    let cat = f64::max(
        (capem - capea) + 0.5 * config.ckcd() * rat * (capems - capem),
        0.0,
    );
    let pm_new = msl * f64::exp(-cat / (RD * tvav));

    Step {
        capem,
        capems,
        rat,
        tvav,
        outflow_temperature,
        outflow_level: saturated.lnb_pressure(),
        pm_new,
    }
}

// Minimum pressure and maximum wind from the last step, including the pressure drop in the eye.
fn final_values(step: &Step, capea: f64, msl: f64, config: &PiConfig) -> (f64, f64) {
    let Step {
        capem,
        capems,
        rat,
        tvav,
        ..
    } = *step;
    let ckcd = config.ckcd();

    let catfac = 0.5 * (1.0 + 1.0 / EYE_EXPONENT);
    let cat = f64::max((capem - capea) + ckcd * rat * catfac * (capems - capem), 0.0);
    let pmin = msl * f64::exp(-cat / (RD * tvav));

    let vmax = config.wind_reduction() * f64::sqrt(ckcd * rat * f64::max(capems - capem, 0.0));

    (vmax, pmin)
}
