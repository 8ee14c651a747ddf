#[macro_use]
mod utils;

#[test]
fn test_load_test_csv_sounding() {
    let (snd, ivals, fvals) = utils::load_test_file("tropical.csv");

    assert_eq!(snd.pressure_profile().len(), 25);
    assert!(snd.sst().is_some());
    assert!(snd.mslp().is_some());

    assert!(Some(&1) == ivals.get("ifl"));
    assert!(Some(&4) == ivals.get("iterations"));
    assert!(Some(&vec![199.8122]) == fvals.get("to"));
}

#[test]
fn test_load_missing_values() {
    let (snd, ivals, fvals) = utils::load_test_file("missing_levels.csv");

    assert!(snd.temperature_profile()[0].is_none());
    assert!(snd.temperature_profile()[1].is_none());
    assert!(snd.temperature_profile()[2].is_some());

    assert!(Some(&3) == ivals.get("ifl"));
    assert!(fvals["vmax"][0].is_nan());
}

#[test]
fn test_approx_equal_is_relative() {
    assert!(utils::approx_equal(945.34, 945.34004, 1.0e-6));
    assert!(!utils::approx_equal(945.34, 945.35, 1.0e-6));
    assert!(!utils::approx_equal(66.16939, 66.1794, 1.0e-6));

    // Absolute near zero
    assert!(utils::approx_equal(0.0, 0.0, 1.0e-6));
    assert!(!utils::approx_equal(0.0, 0.01, 1.0e-6));

    assert!(utils::approx_equal(std::f64::NAN, std::f64::NAN, 1.0e-6));
    assert!(!utils::approx_equal(std::f64::NAN, 0.0, 1.0e-6));
}

check_file_complete!(tropical_file_complete, "tropical.csv");
check_file_complete!(tropical_ascending_file_complete, "tropical_ascending.csv");
check_file_complete!(oscillating_file_complete, "oscillating.csv");
check_file_complete!(coarse_file_complete, "coarse.csv");
check_file_complete!(stable_file_complete, "stable.csv");
check_file_complete!(cold_sea_file_complete, "cold_sea.csv");
check_file_complete!(missing_levels_file_complete, "missing_levels.csv");
