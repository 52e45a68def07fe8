//! Utilities for converting dates between the Ethiopian (Ge'ez) and
//! proleptic Gregorian calendars.
//!
//! Both calendars are projected onto a shared Julian day number (JDN)
//! timeline, represented by [`Date`]; neither calendar converts to the
//! other except through it. The Ethiopian side understands both year
//! counts (Amete Alem and Amete Mihret, see [`Era`]) and detects the era
//! automatically when the caller does not supply one.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use ethiopic_calendar::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1);
//!
//! assert_eq!(5, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Ethiopian calendar:
//!
//! ```
//! use ethiopic_calendar::ethiopic;
//!
//! assert_eq!(Ok((2017, 4, 16)), ethiopic::from_gregorian(2024, 12, 25));
//! assert_eq!(Ok((2008, 9, 10)), ethiopic::to_gregorian(2000, 13, 5, None));
//! ```
//!
//! Conversion entry points validate their input and report an error for
//! triples that name no actual calendar date; the raw JDN arithmetic
//! underneath ([`Date::from_gregorian`], [`ethiopic::to_date`], ...) is
//! total and never fails, for callers that do their own checking.
//!
//! # Planned features
//!
//! - Coptic calendar (shares the Ethiopic month structure, anchored at a
//!   different epoch)
//! - Date of Ethiopian Easter (Fasika) via the Alexandrian computus

pub mod date;
pub mod error;
pub mod ethiopic;

pub use date::{Date, JD_EPOCH_OFFSET_GREGORIAN, YearType};
pub use error::DateError;
pub use ethiopic::{Era, JD_EPOCH_OFFSET_AMETE_ALEM, JD_EPOCH_OFFSET_AMETE_MIHRET};
