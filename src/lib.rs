#![warn(missing_docs)]
//! Functions and data types for calculating the potential intensity of tropical cyclones.
//!
//! The potential intensity is the maximum sustained wind speed, and the matching minimum central
//! pressure, that the thermodynamic environment of a sounding over a warm sea can support. It is
//! calculated as in Bister and Emanuel (2002), the method of Emanuel's `pcmin` routine and the
//! tcpyPI package.
//!
//! Build a [`Sounding`](crate::Sounding), choose the options with a
//! [`PiConfig`](crate::PiConfig), and call [`potential_intensity`](crate::potential_intensity).
//! For data already in plain arrays, [`pi`](crate::pi) takes slices and returns the values as a
//! tuple. Many columns can be processed in parallel with the [`grid`](crate::grid) module.
//!
//! Missing values are handled with the `optional` crate and the quantities are typed with
//! `metfor`.
//!
//! # Examples
//!
//! ```rust
//! use potential_intensity::{potential_intensity, PiConfig};
//! # use potential_intensity::doctest::make_test_sounding;
//!
//! let snd = make_test_sounding();
//! let out = potential_intensity(&snd, &PiConfig::new()).unwrap();
//!
//! if out.status().is_success() {
//!     println!("vmax = {:?} pmin = {:?}", out.vmax(), out.pmin());
//! }
//! ```

//
// API
//
pub use crate::{
    analysis::{analyze, Analysis},
    ascent::{lift_parcel, AscentAnalysis, AscentStatus, ParcelProfile},
    config::{AscentType, MissingDataHandling, PiConfig},
    error::{PiError, Result},
    parcel::{ambient_parcel, boundary_layer_parcel, sea_surface_parcel, Parcel},
    pi::{pi, potential_intensity, PiOutput, PiStatus},
    profile::Environment,
    sounding::{DataRow, Sounding},
};

pub mod constants;
pub mod diagnostics;
pub mod grid;
pub mod keys;
pub mod thermo;

#[doc(hidden)]
pub use crate::sounding::doctest;

//
// Internal use only
//

// Modules
mod analysis;
mod ascent;
mod config;
mod error;
mod parcel;
mod pi;
mod profile;
mod sounding;
mod utility;

#[cfg(test)]
mod test_data;
