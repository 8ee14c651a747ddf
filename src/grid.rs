//! Potential intensity over a grid of columns.
//!
//! The columns of a multi-dimensional grid are stored flattened in row major order, and the
//! outputs come back as flat parallel arrays with the same shape. Every column is independent so
//! they are solved in parallel with rayon. A serial version is available for comparison and for
//! callers that manage their own threads.
use crate::{
    config::PiConfig,
    diagnostics::Diagnostics,
    error::{PiError, Result},
    keys::Diagnostic,
    pi::{potential_intensity, PiOutput, PiStatus},
    sounding::Sounding,
};
use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::{debug, info};

/// A set of columns with a shape.
#[derive(Debug, Clone)]
pub struct ColumnGrid {
    shape: Vec<usize>,
    columns: Vec<Sounding>,
}

impl ColumnGrid {
    /// Create a grid, the product of the `shape` must be the number of columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use potential_intensity::grid::ColumnGrid;
    /// # use potential_intensity::doctest::make_test_sounding;
    ///
    /// let columns = vec![make_test_sounding(); 6];
    ///
    /// assert!(ColumnGrid::new(vec![2, 3], columns.clone()).is_ok());
    /// assert!(ColumnGrid::new(vec![4, 2], columns).is_err());
    /// ```
    pub fn new(shape: Vec<usize>, columns: Vec<Sounding>) -> Result<Self> {
        if shape.iter().product::<usize>() != columns.len() {
            return Err(PiError::MismatchedGrid);
        }

        Ok(ColumnGrid { shape, columns })
    }

    /// The shape of the grid.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The columns in row major order.
    #[inline]
    pub fn columns(&self) -> &[Sounding] {
        &self.columns
    }

    /// The number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Is the grid empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Outputs for every column of a grid, flat in the same order as the columns.
///
/// Missing values are NaN.
#[derive(Debug, Clone)]
pub struct GridOutput {
    shape: Vec<usize>,
    vmax: Vec<f64>,
    pmin: Vec<f64>,
    ifl: Vec<i32>,
    status: Vec<PiStatus>,
    to: Vec<f64>,
    otl: Vec<f64>,
    valid_times: Vec<Option<NaiveDateTime>>,
    diagnostics: Vec<Diagnostics>,
}

impl GridOutput {
    fn with_capacity(shape: &[usize], n: usize) -> Self {
        GridOutput {
            shape: shape.to_vec(),
            vmax: Vec::with_capacity(n),
            pmin: Vec::with_capacity(n),
            ifl: Vec::with_capacity(n),
            status: Vec::with_capacity(n),
            to: Vec::with_capacity(n),
            otl: Vec::with_capacity(n),
            valid_times: Vec::with_capacity(n),
            diagnostics: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, snd: &Sounding, (out, diag): (PiOutput, Diagnostics)) {
        let (vmax, pmin, ifl, to, otl) = out.as_tuple();

        self.vmax.push(vmax);
        self.pmin.push(pmin);
        self.ifl.push(ifl);
        self.status.push(out.status());
        self.to.push(to);
        self.otl.push(otl);
        self.valid_times.push(snd.valid_time());
        self.diagnostics.push(diag);
    }

    /// The shape of the grid.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Potential intensity (m/s).
    #[inline]
    pub fn vmax(&self) -> &[f64] {
        &self.vmax
    }

    /// Minimum central pressure (hPa).
    #[inline]
    pub fn pmin(&self) -> &[f64] {
        &self.pmin
    }

    /// Integer status flags, see `PiStatus::ifl`.
    #[inline]
    pub fn ifl(&self) -> &[i32] {
        &self.ifl
    }

    /// The full status of each column.
    #[inline]
    pub fn status(&self) -> &[PiStatus] {
        &self.status
    }

    /// Outflow temperature (K).
    #[inline]
    pub fn outflow_temperature(&self) -> &[f64] {
        &self.to
    }

    /// Outflow level (hPa).
    #[inline]
    pub fn outflow_level(&self) -> &[f64] {
        &self.otl
    }

    /// Valid times carried over from the columns.
    #[inline]
    pub fn valid_times(&self) -> &[Option<NaiveDateTime>] {
        &self.valid_times
    }

    /// The diagnostics of each column.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostics] {
        &self.diagnostics
    }

    /// One diagnostic for every column.
    pub fn diagnostic(&self, key: Diagnostic) -> Vec<f64> {
        self.diagnostics
            .iter()
            .map(|diag| diag.get(key).into_option().unwrap_or(std::f64::NAN))
            .collect()
    }

    /// Number of columns with a usable result.
    pub fn success_count(&self) -> usize {
        self.status.iter().filter(|s| s.is_success()).count()
    }
}

/// Calculate the potential intensity and diagnostics for every column in parallel.
///
/// A malformed column fails the whole grid with `PiError::InCell`, any other outcome is recorded
/// in that column's status.
pub fn potential_intensity_grid(grid: &ColumnGrid, config: &PiConfig) -> Result<GridOutput> {
    config.validate()?;

    let results: Vec<(PiOutput, Diagnostics)> = grid
        .columns
        .par_iter()
        .enumerate()
        .map(|(index, snd)| solve_cell(index, snd, config))
        .collect::<Result<_>>()?;

    Ok(assemble(grid, results))
}

/// Calculate the potential intensity and diagnostics for every column on the calling thread.
///
/// The results are identical to `potential_intensity_grid`.
pub fn potential_intensity_grid_serial(
    grid: &ColumnGrid,
    config: &PiConfig,
) -> Result<GridOutput> {
    config.validate()?;

    let results: Vec<(PiOutput, Diagnostics)> = grid
        .columns
        .iter()
        .enumerate()
        .map(|(index, snd)| solve_cell(index, snd, config))
        .collect::<Result<_>>()?;

    Ok(assemble(grid, results))
}

fn solve_cell(index: usize, snd: &Sounding, config: &PiConfig) -> Result<(PiOutput, Diagnostics)> {
    let out = potential_intensity(snd, config).map_err(|err| PiError::InCell {
        index,
        error: Box::new(err),
    })?;

    if !out.status().is_success() {
        debug!(index, status = %out.status(), "no potential intensity for column");
    }

    let diag = Diagnostics::from_output(&out, snd.sst(), config.ckcd());

    Ok((out, diag))
}

fn assemble(grid: &ColumnGrid, results: Vec<(PiOutput, Diagnostics)>) -> GridOutput {
    let mut output = GridOutput::with_capacity(&grid.shape, grid.len());
    for (snd, result) in grid.columns.iter().zip(results) {
        output.push(snd, result);
    }

    info!(
        columns = grid.len(),
        success = output.success_count(),
        "potential intensity grid finished"
    );

    output
}
