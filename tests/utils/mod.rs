use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use metfor::{Celsius, HectoPascal};
use optional::{none, some, Optioned};
use potential_intensity::Sounding;

pub mod pi_tests;

#[allow(unused_macros)] // False alarm
macro_rules! check_file_complete {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            let (snd, ivals, fvals) = utils::load_test_file($fname);

            assert!(snd.check_shape().is_ok(), "Failed validation.");

            let ival_keys = ["ifl", "iterations"];
            let fval_keys = ["vmax", "pmin", "to", "otl"];

            // Make sure all of these keys are in the hashmaps
            for key in ival_keys.iter() {
                assert!(ivals.contains_key(*key), "{}", key);
            }

            for key in fval_keys.iter() {
                assert!(fvals.contains_key(*key), "{}", key);
            }

            // Make sure there are no extra keys in there being ignored.
            for key in ivals.keys() {
                assert!(ival_keys.contains(&key.as_str()), "extra ival key found");
            }

            for key in fvals.keys() {
                assert!(fval_keys.contains(&key.as_str()), "extra fval key found");
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {

            use std::collections::HashMap;

            use crate::utils;
            use potential_intensity::Sounding;

            fn load_data() -> (Sounding, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
                utils::load_test_file($fname)
            }

            mod pi {
                use super::load_data;
                use crate::utils::pi_tests;

                #[test]
                fn status() {
                    let (snd, ivals, _) = load_data();
                    pi_tests::test_status(&snd, &ivals);
                }

                #[test]
                fn outputs() {
                    let (snd, _, fvals) = load_data();
                    pi_tests::test_outputs(&snd, &fvals);
                }

                #[test]
                fn raw_values() {
                    let (snd, ivals, fvals) = load_data();
                    pi_tests::test_raw_values(&snd, &ivals, &fvals);
                }

                #[test]
                fn diagnostics() {
                    let (snd, _, _) = load_data();
                    pi_tests::test_diagnostics(&snd);
                }

                #[test]
                fn deterministic() {
                    let (snd, _, _) = load_data();
                    pi_tests::test_deterministic(&snd);
                }
            }
        }
    };
}

pub fn load_test_file(fname: &str) -> (Sounding, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_sounding(&test_path)
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn approx_equal(tgt: f64, guess: f64, tol: f64) -> bool {
    assert!(tol > 0.0);

    if tgt.is_nan() {
        return guess.is_nan();
    }

    // Relative to the target, absolute for values near zero.
    f64::abs(tgt - guess) <= tol * f64::max(tgt.abs(), 1.0)
}

fn parse_value(token: Option<&&str>) -> Option<f64> {
    token.and_then(|tok| f64::from_str(tok.trim()).ok())
}

fn to_optioned(val: Option<f64>) -> Optioned<f64> {
    match val {
        Some(v) if !v.is_nan() => some(v),
        _ => none(),
    }
}

fn load_test_csv_sounding(
    location: &PathBuf,
) -> (Sounding, HashMap<String, i64>, HashMap<String, Vec<f64>>) {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let lines: Vec<&str> = contents.split('\n').collect();
    let mut line_iter = lines.iter();

    //
    // Parse profile data
    //
    let mut press: Vec<HectoPascal> = Vec::with_capacity(lines.len());
    let mut temp: Vec<Optioned<Celsius>> = Vec::with_capacity(lines.len());
    let mut mw: Vec<Optioned<f64>> = Vec::with_capacity(lines.len());

    for line in line_iter.by_ref() {
        if line.starts_with("### Surface Data ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 3 {
            continue;
        }

        // Skips the header
        let press_hpa = match parse_value(tokens.get(0)) {
            Some(p) => p,
            None => continue,
        };

        press.push(HectoPascal(press_hpa));
        temp.push(to_optioned(parse_value(tokens.get(1))).map_t(Celsius));
        mw.push(to_optioned(parse_value(tokens.get(2))));
    }

    let mut snd = Sounding::new()
        .with_source_description(format!("{}", location.display()))
        .with_pressure_profile(press)
        .with_temperature_profile(temp)
        .with_mixing_ratio_profile(mw);

    //
    // Surface data
    //
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Int Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 2 {
            continue;
        }

        if let (Some(sst), Some(mslp)) = (parse_value(tokens.get(0)), parse_value(tokens.get(1))) {
            snd = snd
                .with_sst(to_optioned(Some(sst)).map_t(Celsius))
                .with_mslp(to_optioned(Some(mslp)).map_t(HectoPascal));
        }
    }

    //
    // Integer values.
    //
    let mut target_int_vals = HashMap::new();
    for line in line_iter.by_ref() {
        if line.starts_with("### Analysis Float Section ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.len() < 2 || tokens[0].is_empty() {
            continue;
        }

        if let Ok(val) = i64::from_str(tokens[1]) {
            target_int_vals.insert(tokens[0].to_owned(), val);
        }
    }

    //
    // Float values.
    //
    let mut target_float_vals = HashMap::new();
    for line in line_iter {
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.len() < 2 || tokens[0].is_empty() {
            continue;
        }

        let vals: Vec<f64> = tokens[1..]
            .iter()
            .filter_map(|tok| f64::from_str(tok).ok())
            .collect();

        target_float_vals.insert(tokens[0].to_owned(), vals);
    }

    (snd, target_int_vals, target_float_vals)
}
