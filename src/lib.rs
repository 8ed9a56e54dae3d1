//! # Twine Psychro
//!
//! Moist air state resolution for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given any supported pair of psychrometric properties and a total pressure,
//! the crate resolves the full state of moist air: dry-bulb, wet-bulb and
//! dew-point temperatures, humidity ratio, relative humidity, enthalpy,
//! vapor pressure, density and flows.
//!
//! ## Crate layout
//!
//! - [`models`]: The psychrometrics [`twine_core::Model`] and its resolver.
//! - [`support`]: Property relations, a bounded root finder, value constraints
//!   and unit helpers used by the models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
