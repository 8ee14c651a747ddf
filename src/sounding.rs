//! Data type and methods to store one column of input for the potential intensity calculation.

use crate::error::{PiError, Result};
use chrono::NaiveDateTime;
use itertools::Itertools;
use metfor::{Celsius, HectoPascal};
use optional::Optioned;

pub use self::data_row::DataRow;

/// All the variables needed to calculate the potential intensity at one location.
///
/// The upper air profiles are stored in parallel vectors. The pressure levels are the vertical
/// coordinate and may not be missing, temperature and mixing ratio values may be.
#[derive(Clone, Debug, Default)]
pub struct Sounding {
    // Description of the source of the sounding.
    source: Option<String>,

    // Valid time of sounding
    valid_time: Option<NaiveDateTime>,

    // Profiles
    pressure: Vec<HectoPascal>,
    temperature: Vec<Optioned<Celsius>>,
    mixing_ratio: Vec<Optioned<f64>>,

    // Surface variables
    sst: Optioned<Celsius>,
    mslp: Optioned<HectoPascal>,
}

impl Sounding {
    /// Create a new sounding with default values. This is a proxy for default with a clearer name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use potential_intensity::Sounding;
    ///
    /// let snd = Sounding::new();
    /// println!("{:?}", snd);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Sounding::default()
    }

    /// Add a source description to this sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use potential_intensity::Sounding;
    ///
    /// let snd = Sounding::new().with_source_description("ERA5 15N 140E".to_owned());
    /// assert_eq!(snd.source_description().unwrap(), "ERA5 15N 140E");
    ///
    /// let snd = snd.with_source_description(None);
    /// assert!(snd.source_description().is_none());
    /// ```
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve a source description for this sounding.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.as_ref())
    }

    /// Builder method for the valid time of the sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use potential_intensity::Sounding;
    ///
    /// let vtime = NaiveDate::from_ymd(2004, 9, 1).and_hms(0, 0, 0);
    /// let snd = Sounding::new().with_valid_time(vtime);
    ///
    /// assert_eq!(snd.valid_time().unwrap(), vtime);
    /// ```
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Get the valid time of the sounding.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// Builder method for the pressure profile.
    ///
    /// # Examples
    /// ```rust
    /// use potential_intensity::Sounding;
    /// use metfor::HectoPascal;
    ///
    /// let data = vec![1000.0, 925.0, 850.0, 700.0, 500.0, 300.0, 250.0, 200.0, 150.0, 100.0];
    /// let pressure_data: Vec<HectoPascal> = data.into_iter().map(HectoPascal).collect();
    ///
    /// let _snd = Sounding::new().with_pressure_profile(pressure_data);
    /// ```
    #[inline]
    pub fn with_pressure_profile(self, profile: Vec<HectoPascal>) -> Self {
        Self {
            pressure: profile,
            ..self
        }
    }

    /// Get the pressure profile
    ///
    /// # Examples
    ///
    /// ```rust
    /// use potential_intensity::Sounding;
    /// # use potential_intensity::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    /// let data = snd.pressure_profile();
    /// assert_eq!(data.len(), 4);
    ///
    /// // Uninitialized profiles just return an empty vector.
    /// let snd = Sounding::new();
    /// let data = snd.pressure_profile();
    /// assert!(data.is_empty());
    /// ```
    #[inline]
    pub fn pressure_profile(&self) -> &[HectoPascal] {
        &self.pressure
    }

    /// Builder method for the temperature profile.
    ///
    /// See `with_pressure_profile` for an example of usage, keeping in mind the units type may
    /// be different and values may be missing.
    #[inline]
    pub fn with_temperature_profile(self, profile: Vec<Optioned<Celsius>>) -> Self {
        Self {
            temperature: profile,
            ..self
        }
    }

    /// Get the temperature profile.
    #[inline]
    pub fn temperature_profile(&self) -> &[Optioned<Celsius>] {
        &self.temperature
    }

    /// Builder method for the mixing ratio profile in g/kg.
    ///
    /// See `with_pressure_profile` for an example of usage, keeping in mind values may be
    /// missing.
    #[inline]
    pub fn with_mixing_ratio_profile(self, profile: Vec<Optioned<f64>>) -> Self {
        Self {
            mixing_ratio: profile,
            ..self
        }
    }

    /// Get the mixing ratio profile in g/kg.
    #[inline]
    pub fn mixing_ratio_profile(&self) -> &[Optioned<f64>] {
        &self.mixing_ratio
    }

    /// Builder method for the sea surface temperature.
    ///
    /// # Examples
    ///```rust
    /// use metfor::{Celsius, Kelvin};
    /// use potential_intensity::Sounding;
    /// use optional::{some, none};
    ///
    /// let _snd = Sounding::new().with_sst(Celsius(28.5));
    /// let _snd = Sounding::new().with_sst(some(Celsius(28.5)));
    /// let _snd = Sounding::new().with_sst(none::<Celsius>());
    /// let _snd = Sounding::new().with_sst(Kelvin(301.65));
    ///```
    #[inline]
    pub fn with_sst<T, U>(mut self, value: T) -> Self
    where
        Optioned<U>: From<T>,
        U: optional::Noned + metfor::Temperature,
        Celsius: From<U>,
    {
        let sst: Optioned<U> = Optioned::from(value);
        self.sst = sst.map_t(Celsius::from);
        self
    }

    /// Get the sea surface temperature.
    #[inline]
    pub fn sst(&self) -> Optioned<Celsius> {
        self.sst
    }

    /// Builder method for the mean sea level pressure.
    ///
    /// # Examples
    ///```rust
    /// use metfor::{HectoPascal, Millibar};
    /// use potential_intensity::Sounding;
    /// use optional::{some, none};
    ///
    /// let _snd = Sounding::new().with_mslp(HectoPascal(1012.5));
    /// let _snd = Sounding::new().with_mslp(some(HectoPascal(1012.5)));
    /// let _snd = Sounding::new().with_mslp(none::<HectoPascal>());
    /// let _snd = Sounding::new().with_mslp(Millibar(1012.5));
    ///```
    #[inline]
    pub fn with_mslp<T, U>(mut self, value: T) -> Self
    where
        Optioned<U>: From<T>,
        U: optional::Noned + metfor::Pressure,
        HectoPascal: From<U>,
    {
        let pressure: Optioned<U> = Optioned::from(value);
        self.mslp = pressure.map_t(HectoPascal::from);
        self
    }

    /// Get the mean sea level pressure
    #[inline]
    pub fn mslp(&self) -> Optioned<HectoPascal> {
        self.mslp
    }

    /// Get a row of data values from this sounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, HectoPascal};
    /// # use potential_intensity::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    /// let row = snd.data_row(1).unwrap();
    ///
    /// assert_eq!(row.pressure, HectoPascal(925.0));
    /// assert_eq!(row.temperature.unwrap(), Celsius(21.5));
    /// assert!(snd.data_row(4).is_none());
    /// ```
    #[inline]
    pub fn data_row(&self, idx: usize) -> Option<DataRow> {
        let pressure = *self.pressure.get(idx)?;
        let temperature = self.temperature.get(idx).copied().unwrap_or_default();
        let mixing_ratio = self.mixing_ratio.get(idx).copied().unwrap_or_default();

        Some(DataRow {
            pressure,
            temperature,
            mixing_ratio,
        })
    }

    /// Get a bottom up iterator over the data rows.
    ///
    /// Bottom up means highest pressure first, whatever order the profiles were stored in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::HectoPascal;
    /// use potential_intensity::Sounding;
    /// # use potential_intensity::doctest::make_test_sounding;
    ///
    /// let snd = make_test_sounding();
    /// let mut iter = snd.bottom_up();
    ///
    /// assert_eq!(iter.next().unwrap().pressure, HectoPascal(1000.0));
    /// assert_eq!(iter.next().unwrap().pressure, HectoPascal(925.0));
    /// ```
    #[inline]
    pub fn bottom_up<'a>(&'a self) -> impl Iterator<Item = DataRow> + 'a {
        let n = self.pressure.len();
        let stored_top_down = self.is_stored_top_down();

        (0..n)
            .map(move |i| if stored_top_down { n - 1 - i } else { i })
            .filter_map(move |i| self.data_row(i))
    }

    /// Check that the profiles make a usable column.
    ///
    /// The profiles must all be the same length, have at least two levels, and pressure must be
    /// strictly monotonic in either direction.
    pub fn check_shape(&self) -> Result<()> {
        let n = self.pressure.len();

        if self.temperature.len() != n || self.mixing_ratio.len() != n {
            return Err(PiError::MismatchedProfiles);
        }

        if n < 2 {
            return Err(PiError::NotEnoughLevels);
        }

        let stored_top_down = self.is_stored_top_down();
        let monotonic = self
            .pressure
            .iter()
            .tuple_windows::<(_, _)>()
            .all(|(p0, p1)| if stored_top_down { p0 < p1 } else { p0 > p1 });

        if monotonic {
            Ok(())
        } else {
            Err(PiError::NonMonotonicPressure)
        }
    }

    // Are the profiles stored with the lowest pressure first?
    #[inline]
    fn is_stored_top_down(&self) -> bool {
        match (self.pressure.first(), self.pressure.last()) {
            (Some(first), Some(last)) => first < last,
            _ => false,
        }
    }
}

// FIXME: only configure for test and doc tests, not possible as of 1.41
#[doc(hidden)]
pub mod doctest {
    use super::*;

    pub fn make_test_sounding() -> super::Sounding {
        use optional::some;

        let p = vec![
            HectoPascal(1000.0),
            HectoPascal(925.0),
            HectoPascal(850.0),
            HectoPascal(700.0),
        ];
        let t = vec![
            some(Celsius(26.0)),
            some(Celsius(21.5)),
            some(Celsius(17.5)),
            some(Celsius(9.0)),
        ];
        let r = vec![some(17.5), some(14.0), some(11.0), some(6.5)];

        Sounding::new()
            .with_pressure_profile(p)
            .with_temperature_profile(t)
            .with_mixing_ratio_profile(r)
            .with_sst(Celsius(28.0))
            .with_mslp(HectoPascal(1010.0))
    }
}


mod data_row;
