//! Columns used in tests.
//!
//! Each is `(SST C, MSLP hPa, pressure hPa, temperature C, mixing ratio g/kg)`, lowest level
//! first.

type Column = (f64, f64, Vec<f64>, Vec<f64>, Vec<f64>);

/// A moist tropical column over a warm sea that converges in a few iterations.
pub(crate) fn tropical_column() -> Column {
    let p = vec![
        1000.0, 950.0, 900.0, 850.0, 800.0, 750.0, 700.0, 650.0, 600.0, 550.0, 500.0, 450.0, 400.0,
        350.0, 300.0, 250.0, 200.0, 175.0, 150.0, 125.0, 100.0, 70.0, 50.0, 30.0, 20.0,
    ];
    let tc = vec![
        26.3, 23.9, 21.4, 18.8, 16.5, 14.0, 11.3, 8.3, 5.0, 1.3, -2.8, -7.6, -12.8, -19.3, -27.4,
        -37.9, -51.3, -58.6, -65.6, -71.4, -73.7, -66.0, -58.0, -50.0, -45.0,
    ];
    let r = vec![
        18.5, 16.3, 14.2, 12.3, 10.6, 9.0, 7.4, 6.0, 4.8, 3.7, 2.7, 1.9, 1.3, 0.8, 0.45, 0.2, 0.06,
        0.03, 0.015, 0.008, 0.004, 0.003, 0.003, 0.003, 0.003,
    ];

    (28.5, 1012.0, p, tc, r)
}

/// A reanalysis column where the minimum pressure alternates between about 950.65 and 951.28 hPa
/// instead of converging.
pub(crate) fn oscillating_column() -> Column {
    let p = vec![
        1000.0, 975.0, 950.0, 925.0, 900.0, 875.0, 850.0, 825.0, 800.0, 775.0, 750.0, 700.0, 650.0,
        600.0, 550.0, 500.0, 450.0, 400.0, 350.0, 300.0, 250.0, 225.0, 200.0, 175.0, 150.0, 125.0,
        100.0, 70.0, 50.0, 30.0, 20.0, 10.0, 7.0, 5.0, 3.0, 2.0, 1.0,
    ];
    let tc = vec![
        25.260956,
        23.078949,
        20.881561,
        18.652649,
        16.615143,
        14.63147,
        12.794586,
        11.79306,
        11.01236,
        10.847565,
        10.354492,
        7.807007,
        5.473297,
        2.5278625,
        -1.532135,
        -7.3142395,
        -13.635345,
        -20.613602,
        -28.588928,
        -37.270096,
        -45.40825,
        -50.047455,
        -54.84575,
        -59.173737,
        -62.878662,
        -65.78009,
        -69.30669,
        -65.512024,
        -60.76361,
        -55.100464,
        -51.38333,
        -43.95462,
        -39.709717,
        -33.193268,
        -21.576843,
        -15.402496,
        -13.186676,
    ];
    let r = vec![
        1.0783693e01,
        1.0704287e01,
        1.0680210e01,
        1.0617845e01,
        1.0320683e01,
        9.8811483e00,
        9.1884289e00,
        7.1884680e00,
        5.6963191e00,
        3.5568204e00,
        1.5912720e00,
        1.0433695e00,
        5.9723043e-01,
        4.3974420e-01,
        4.8722979e-01,
        5.8590513e-01,
        4.5599860e-01,
        3.1293562e-01,
        1.9222400e-01,
        9.7611703e-02,
        3.3851895e-02,
        2.4188591e-02,
        1.9636340e-02,
        1.3214327e-02,
        7.2453087e-03,
        4.3027173e-03,
        3.7014042e-03,
        2.9414182e-03,
        2.7806845e-03,
        2.8306348e-03,
        2.9053832e-03,
        2.9848625e-03,
        3.0779461e-03,
        3.1315640e-03,
        3.2939769e-03,
        3.3872949e-03,
        3.7360021e-03,
    ];

    (28.20263671875, 1014.9654541015625, p, tc, r)
}
