use super::{AscentAnalysis, AscentStatus, ParcelProfile};
use crate::{
    config::AscentType,
    constants::{CL, CPD, RD, RV},
    parcel::Parcel,
    profile::Environment,
    thermo::{
        density_temperature, kelvin_to_celsius, latent_heat_vaporization, mixing_ratio,
        saturation_vapor_pressure, vapor_pressure,
    },
};
use itertools::izip;
use metfor::{HectoPascal, JpKg, Kelvin, Quantity};
use optional::{none, some};
use tracing::trace;

// Newton iteration for the saturated parcel temperature.
const TEMPERATURE_TOLERANCE: f64 = 0.001;
const MAX_NEWTON_STEPS: usize = 500;

pub(crate) fn lift_parcel(parcel: Parcel, env: &Environment, ascent: AscentType) -> AscentAnalysis {
    if !parcel.is_suitable() {
        return AscentAnalysis {
            parcel,
            profile: ParcelProfile::default(),
            status: AscentStatus::UnsuitableParcel,
            cape: JpKg(0.0),
            lcl_pressure: none(),
            outflow_temperature: none(),
            lnb_pressure: none(),
        };
    }

    let p = env.pressure();
    let t = env.temperature();
    let r = env.mixing_ratio();

    let tp = parcel.temperature.unpack();
    let rp = parcel.mixing_ratio;
    let pp = parcel.pressure.unpack();

    let s = parcel.entropy();
    let p_lcl = parcel.lcl_pressure();
    let fraction = ascent.fraction();

    let mut profile = ParcelProfile {
        pressure: Vec::with_capacity(p.len()),
        parcel_t: Vec::with_capacity(p.len()),
        environment_t: Vec::with_capacity(p.len()),
    };
    let mut buoyancy: Vec<f64> = Vec::with_capacity(p.len());

    for (&p_j, &t_j, &r_j) in izip!(p, t, r) {
        let env_t = density_temperature(t_j, r_j, r_j);

        let pcl_t = if p_j >= p_lcl.unpack() {
            // Dry adiabatic below the LCL
            let tg = tp * f64::powf(p_j / pp, RD / CPD);
            density_temperature(tg, rp, rp)
        } else if let Some((tg, rg)) = saturated_temperature(s, rp, t_j, p_j) {
            let r_mean = fraction * rg + (1.0 - fraction) * rp;
            density_temperature(tg, r_mean, rg)
        } else {
            trace!(pressure = p_j, "saturated parcel temperature did not converge");
            return AscentAnalysis {
                parcel,
                profile,
                status: AscentStatus::NotConverged,
                cape: JpKg(0.0),
                lcl_pressure: some(p_lcl),
                outflow_temperature: some(Kelvin(t[0])),
                lnb_pressure: some(HectoPascal(p[0])),
            };
        };

        profile.pressure.push(HectoPascal(p_j));
        profile.parcel_t.push(Kelvin(pcl_t));
        profile.environment_t.push(Kelvin(env_t));
        buoyancy.push(pcl_t - env_t);
    }

    let (cape, outflow_temperature, lnb_pressure) = integrate_buoyancy(pp, p, t, &buoyancy);

    AscentAnalysis {
        parcel,
        profile,
        status: AscentStatus::Ok,
        cape: JpKg(cape),
        lcl_pressure: some(p_lcl),
        outflow_temperature: some(Kelvin(outflow_temperature)),
        lnb_pressure: some(HectoPascal(lnb_pressure)),
    }
}

/// Find the temperature and saturation mixing ratio of a parcel with entropy `s` and total water
/// `rp` saturated at pressure `p`, starting from `first_guess`.
///
/// Returns `None` when the iteration does not converge, or the saturation vapor pressure gets
/// within 1 hPa of the total pressure.
fn saturated_temperature(s: f64, rp: f64, first_guess: f64, p: f64) -> Option<(f64, f64)> {
    let mut tg_new = first_guess;
    let mut tg = 0.0;
    let mut rg = 0.0;
    let mut steps = 0;

    while (tg - tg_new).abs() > TEMPERATURE_TOLERANCE {
        tg = tg_new;
        let tc = kelvin_to_celsius(tg);
        let e_new = saturation_vapor_pressure(tc);
        rg = mixing_ratio(e_new, p);
        steps += 1;

        // Entropy of the saturated parcel at tg and its derivative with respect to temperature.
        let alv = latent_heat_vaporization(tc);
        let sl = (CPD + rp * CL + alv * alv * rg / (RV * tg * tg)) / tg;
        let em = vapor_pressure(rg, p);
        let sg = (CPD + rp * CL) * f64::ln(tg) - RD * f64::ln(p - em) + alv * rg / tg;

        // Damp the first couple of steps.
        let damping = if steps < 3 { 0.3 } else { 1.0 };
        tg_new = tg + damping * (s - sg) / sl;

        if steps > MAX_NEWTON_STEPS || e_new > p - 1.0 {
            return None;
        }
    }

    Some((tg, rg))
}

/// Integrate the buoyancy from the parcel level at `pp` up to the level of neutral buoyancy.
///
/// Returns the CAPE, the temperature at the level of neutral buoyancy, and the pressure of the
/// level of neutral buoyancy. Without positive buoyancy above the lowest level, the CAPE is zero
/// and the lowest level is used.
fn integrate_buoyancy(pp: f64, p: &[f64], t: &[f64], buoyancy: &[f64]) -> (f64, f64, f64) {
    let n = buoyancy.len();

    // Highest buoyant level
    let inb = match (1..n).rev().find(|&j| buoyancy[j] > 0.0) {
        Some(inb) => inb,
        None => return (0.0, t[0], p[0]),
    };

    // Positive and negative areas, Rd * B * d ln(p), with d ln(p) = 2 dp / (p1 + p2)
    let (mut pa, mut na) = (1..=inb).fold((0.0, 0.0), |(pa, na), j| {
        let pfac = RD * (buoyancy[j] + buoyancy[j - 1]) * (p[j - 1] - p[j]) / (p[j] + p[j - 1]);
        (pa + f64::max(pfac, 0.0), na - f64::min(pfac, 0.0))
    });

    // Partial layer between the parcel and the lowest level
    let pfac = RD * (pp - p[0]) / (pp + p[0]);
    pa += pfac * f64::max(buoyancy[0], 0.0);
    na -= pfac * f64::min(buoyancy[0], 0.0);

    // Residual area above the highest buoyant level, interpolated linearly in buoyancy to the
    // crossing pressure.
    let (pat, outflow_t, lnb) = if inb < n - 1 {
        let p_inb = (p[inb + 1] * buoyancy[inb] - p[inb] * buoyancy[inb + 1])
            / (buoyancy[inb] - buoyancy[inb + 1]);
        let pat = RD * buoyancy[inb] * (p[inb] - p_inb) / (p[inb] + p_inb);
        let outflow_t = (t[inb] * (p_inb - p[inb + 1]) + t[inb + 1] * (p[inb] - p_inb))
            / (p[inb] - p[inb + 1]);

        (pat, outflow_t, p_inb)
    } else {
        (0.0, t[inb], p[inb])
    };

    (f64::max(pa + pat - na, 0.0), outflow_t, lnb)
}
