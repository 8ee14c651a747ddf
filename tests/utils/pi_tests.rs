use super::*;
use potential_intensity::{
    diagnostics::{decompose, efficiency},
    keys::Diagnostic,
    pi, potential_intensity, Analysis, PiConfig, PiStatus,
};
use metfor::{Kelvin, MetersPSec, Quantity};

// Relative tolerances for values in the test files, which are stored to 7 significant digits.
const TOLERANCES: [(&str, f64); 4] = [
    ("vmax", 1.0e-6),
    ("pmin", 1.0e-6),
    ("to", 1.0e-6),
    ("otl", 1.0e-6),
];

fn target(tgt_float_vals: &HashMap<String, Vec<f64>>, key: &str) -> f64 {
    let vals = tgt_float_vals
        .get(key)
        .expect(&format!("missing key {}", key));
    assert_eq!(vals.len(), 1);
    vals[0]
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_status(snd: &Sounding, tgt_int_vals: &HashMap<String, i64>) {
    let out = potential_intensity(snd, &PiConfig::new()).unwrap();

    if let Some(&ifl) = tgt_int_vals.get("ifl") {
        assert_eq!(i64::from(out.ifl()), ifl);
    }

    if let Some(&iterations) = tgt_int_vals.get("iterations") {
        assert_eq!(out.iterations() as i64, iterations);
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_outputs(snd: &Sounding, tgt_float_vals: &HashMap<String, Vec<f64>>) {
    let out = potential_intensity(snd, &PiConfig::new()).unwrap();
    let (vmax, pmin, _ifl, to, otl) = out.as_tuple();

    for &(key, tol) in TOLERANCES.iter() {
        let analysis = match key {
            "vmax" => vmax,
            "pmin" => pmin,
            "to" => to,
            "otl" => otl,
            _ => unreachable!(),
        };

        let target_val = target(tgt_float_vals, key);
        assert!(
            approx_equal(target_val, analysis, tol),
            "{}: {} != {}",
            key,
            target_val,
            analysis
        );
    }

    if !out.status().is_success() {
        assert!(vmax.is_nan() && pmin.is_nan());
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_raw_values(
    snd: &Sounding,
    tgt_int_vals: &HashMap<String, i64>,
    tgt_float_vals: &HashMap<String, Vec<f64>>,
) {
    let unpack = |val: Optioned<f64>| val.into_option().unwrap_or(std::f64::NAN);

    let p: Vec<f64> = snd.pressure_profile().iter().map(|p| p.unpack()).collect();
    let tc: Vec<f64> = snd
        .temperature_profile()
        .iter()
        .map(|t| unpack(t.map_t(Quantity::unpack)))
        .collect();
    let r: Vec<f64> = snd.mixing_ratio_profile().iter().cloned().map(unpack).collect();
    let sstc = unpack(snd.sst().map_t(Quantity::unpack));
    let msl = unpack(snd.mslp().map_t(Quantity::unpack));

    let (vmax, pmin, ifl, _to, _otl) = pi(sstc, msl, &p, &tc, &r, &PiConfig::new()).unwrap();

    assert_eq!(i64::from(ifl), tgt_int_vals["ifl"]);
    assert!(approx_equal(target(tgt_float_vals, "vmax"), vmax, 1.0e-6));
    assert!(approx_equal(target(tgt_float_vals, "pmin"), pmin, 1.0e-6));
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_diagnostics(snd: &Sounding) {
    let config = PiConfig::new();
    let anal = Analysis::new(snd.clone())
        .fill_in_missing_analysis(&config)
        .unwrap();

    let out = anal.output().unwrap();
    let (vmax, _pmin, _ifl, to, _otl) = out.as_tuple();

    if out.status().is_success() && vmax > 0.0 {
        // Recomputed from the stored values
        let sst = Kelvin(snd.sst().unwrap().unpack() + 273.15);
        let eff = efficiency(sst, Kelvin(to));
        let d = decompose(MetersPSec(vmax), sst, Kelvin(to), config.ckcd());

        assert_eq!(anal.diagnostic(Diagnostic::Efficiency).unwrap(), eff);
        assert_eq!(anal.diagnostic(Diagnostic::LnPi).unwrap(), d.ln_pi);
        assert_eq!(
            anal.diagnostic(Diagnostic::LnDisequilibrium).unwrap(),
            d.ln_disequilibrium
        );
    } else if out.status() != PiStatus::Converged {
        assert!(anal.diagnostic(Diagnostic::Efficiency).is_none());
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_deterministic(snd: &Sounding) {
    let config = PiConfig::new();

    let first = potential_intensity(snd, &config).unwrap().as_tuple();
    let second = potential_intensity(snd, &config).unwrap().as_tuple();

    assert_eq!(first.0.to_bits(), second.0.to_bits());
    assert_eq!(first.1.to_bits(), second.1.to_bits());
    assert_eq!(first.2, second.2);
    assert_eq!(first.3.to_bits(), second.3.to_bits());
    assert_eq!(first.4.to_bits(), second.4.to_bits());
}
