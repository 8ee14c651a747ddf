//! Prepare the environmental profile a parcel is lifted through.
//!
//! The `Environment` holds plain `f64` values in Kelvin, hPa, and kg/kg ordered from the lowest
//! level up. It starts at the lowest valid level of the sounding and stops below the level
//! nearest the configured top pressure.
use crate::{
    config::{MissingDataHandling, PiConfig},
    error::{PiError, Result},
    sounding::{DataRow, Sounding},
    thermo::celsius_to_kelvin,
};
use metfor::{Celsius, HectoPascal, Kelvin, Quantity};

// Temperatures at or below this (K) are treated as missing data.
const MIN_TEMPERATURE: f64 = 100.0;

/// The unit converted environment for one column.
#[derive(Debug, Clone)]
pub struct Environment {
    sst: Celsius,
    mslp: HectoPascal,
    pressure: Vec<f64>,
    temperature: Vec<f64>,
    mixing_ratio: Vec<f64>,
}

impl Environment {
    /// Prepare the environment from a sounding.
    ///
    /// Malformed soundings are returned as errors from `Sounding::check_shape`. Everything else
    /// that can go wrong is a missing data error, see `PiError::is_missing_data`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use potential_intensity::{Environment, PiConfig};
    /// # use potential_intensity::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    /// let env = Environment::new(&snd, &PiConfig::new()).unwrap();
    ///
    /// // The level nearest the top pressure (700 hPa here) is not used.
    /// assert_eq!(env.len(), 3);
    /// assert_eq!(env.pressure()[0], 1000.0);
    /// assert_eq!(env.temperature()[0], 299.15);
    /// assert_eq!(env.mixing_ratio()[0], 0.0175);
    /// ```
    pub fn new(snd: &Sounding, config: &PiConfig) -> Result<Self> {
        snd.check_shape()?;

        let sst = snd
            .sst()
            .into_option()
            .filter(|sst| sst.unpack().is_finite())
            .ok_or(PiError::MissingValue)?;
        let mslp = snd
            .mslp()
            .into_option()
            .filter(|p| p.unpack().is_finite())
            .ok_or(PiError::MissingValue)?;

        let rows: Vec<DataRow> = snd.bottom_up().collect();
        if rows.iter().all(|row| row.temperature.is_none()) {
            return Err(PiError::NoDataProfile);
        }

        let levels = select_levels(&rows, config.missing_data())?;

        if levels.iter().any(|&(_, t, _)| t <= MIN_TEMPERATURE) {
            return Err(PiError::UnphysicalTemperature);
        }

        let top = top_index(levels.iter().map(|&(p, _, _)| p), config.top_pressure());
        if top == 0 {
            return Err(PiError::NoDataProfile);
        }

        let (pressure, temperature, mixing_ratio) = levels.into_iter().take(top).fold(
            (
                Vec::with_capacity(top),
                Vec::with_capacity(top),
                Vec::with_capacity(top),
            ),
            |(mut ps, mut ts, mut rs), (p, t, r)| {
                ps.push(p);
                ts.push(t);
                rs.push(r);
                (ps, ts, rs)
            },
        );

        Ok(Environment {
            sst,
            mslp,
            pressure,
            temperature,
            mixing_ratio,
        })
    }

    /// Sea surface temperature.
    #[inline]
    pub fn sst(&self) -> Celsius {
        self.sst
    }

    /// Sea surface temperature in Kelvin.
    #[inline]
    pub fn sst_kelvin(&self) -> Kelvin {
        Kelvin(celsius_to_kelvin(self.sst.unpack()))
    }

    /// Mean sea level pressure.
    #[inline]
    pub fn mslp(&self) -> HectoPascal {
        self.mslp
    }

    /// Pressure (hPa) at each level, lowest first.
    #[inline]
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Temperature (K) at each level.
    #[inline]
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Water vapor mixing ratio (kg/kg) at each level.
    #[inline]
    pub fn mixing_ratio(&self) -> &[f64] {
        &self.mixing_ratio
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// There is always at least one level, so this is always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }
}

// Convert the rows to (hPa, K, kg/kg) tuples keeping only the levels the handling allows.
fn select_levels(rows: &[DataRow], handling: MissingDataHandling) -> Result<Vec<(f64, f64, f64)>> {
    use MissingDataHandling::*;

    let convert = |row: &DataRow, t: Celsius, r: f64| {
        (
            row.pressure.unpack(),
            celsius_to_kelvin(t.unpack()),
            r * 0.001,
        )
    };

    // Missing or invalid (negative sentinel) mixing ratios are dry levels.
    let dry_if_missing = |row: &DataRow| -> Result<(f64, f64, f64)> {
        let t = row
            .temperature
            .into_option()
            .ok_or(PiError::MissingProfileData)?;
        let r = valid_mixing_ratio(row).unwrap_or(0.0);
        Ok(convert(row, t, r))
    };

    match handling {
        Strict => rows.iter().map(dry_if_missing).collect(),
        SkipLeading => rows
            .iter()
            .skip_while(|row| row.temperature.is_none())
            .map(dry_if_missing)
            .collect(),
        Bridge => {
            let levels: Vec<_> = rows
                .iter()
                .filter_map(|row| {
                    let t = row.temperature.into_option()?;
                    let r = valid_mixing_ratio(row)?;
                    Some(convert(row, t, r))
                })
                .collect();

            if levels.is_empty() {
                Err(PiError::NoDataProfile)
            } else {
                Ok(levels)
            }
        }
    }
}

// Mixing ratio (g/kg) if it is present and usable as data.
fn valid_mixing_ratio(row: &DataRow) -> Option<f64> {
    row.mixing_ratio
        .into_option()
        .filter(|r| r.is_finite() && *r >= 0.0)
}

// Index of the level nearest the top pressure, the first one on a tie. Levels from this one up
// are not used.
fn top_index<I: Iterator<Item = f64>>(pressure: I, top: HectoPascal) -> usize {
    let top = top.unpack();

    pressure
        .enumerate()
        .fold((0, std::f64::INFINITY), |(min_idx, min_diff), (i, p)| {
            let diff = (p - top).abs();
            if diff < min_diff {
                (i, diff)
            } else {
                (min_idx, min_diff)
            }
        })
        .0
}
