//! Ethiopian (Ge'ez) calendar.
//!
//! An Ethiopian year has twelve months of 30 days followed by Pagume, a
//! 13th month of 5 days (6 in leap years, which are the years with
//! `year mod 4 == 3`). Year numbers are only meaningful relative to an
//! [`Era`]; conversions follow the Beyene–Kudlek arithmetic, anchored so
//! that 1 Mäskäräm 1 Amete Mihret falls on August 27, 8 CE (proleptic
//! Gregorian).
//!
//! Two tiers are provided: the raw transforms [`to_date`] and [`ymd_for`]
//! never validate and never fail, while [`to_gregorian`] and
//! [`from_gregorian`] validate their input and report a [`DateError`]
//! for triples that name no actual calendar date.

use crate::date::{Date, YearType};
use crate::error::DateError;

/// Epoch offset of the Amete Alem ("Era of the World") year count.
pub const JD_EPOCH_OFFSET_AMETE_ALEM: i64 = -285019;
/// Epoch offset of the Amete Mihret ("Era of Mercy") year count.
pub const JD_EPOCH_OFFSET_AMETE_MIHRET: i64 = 1723856;

/// An Ethiopian era, the reference point a year number counts from.
///
/// Amete Alem numbering runs 5500 years ahead of Amete Mihret: 1 Mäskäräm
/// of Amete Alem 5501 and of Amete Mihret 1 are the same day. An era is
/// nothing more than its [epoch offset](Era::epoch_offset) on the JDN
/// timeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Era {
    AmeteAlem,
    #[default]
    AmeteMihret,
}

impl Era {
    /// Returns the JDN offset anchoring this era's year count. The first
    /// day of year 1 of the era is `epoch_offset() + 365`.
    pub fn epoch_offset(&self) -> i64 {
        match self {
            Era::AmeteAlem => JD_EPOCH_OFFSET_AMETE_ALEM,
            Era::AmeteMihret => JD_EPOCH_OFFSET_AMETE_MIHRET,
        }
    }

    /// Determines the era a date belongs to: [`Era::AmeteMihret`] from
    /// 1 Mäskäräm 1 Amete Mihret onward, [`Era::AmeteAlem`] before.
    ///
    /// This is the auto-detection used when a caller supplies an
    /// Ethiopian date without naming its era: the fields are tentatively
    /// converted under Amete Mihret and the resulting day number is
    /// classified by this threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use ethiopic_calendar::{Date, Era};
    ///
    /// assert_eq!(Era::AmeteMihret, Era::from_date(Date::from_gregorian(2024, 12, 25)));
    /// assert_eq!(Era::AmeteAlem, Era::from_date(Date::from_gregorian(7, 8, 28)));
    /// ```
    pub fn from_date(date: Date) -> Self {
        if date.jdn() >= JD_EPOCH_OFFSET_AMETE_MIHRET + 365 {
            Era::AmeteMihret
        } else {
            Era::AmeteAlem
        }
    }
}

/// Determines if `year` is a leap year in the Ethiopian calendar, i.e.
/// whether its Pagume has 6 days instead of 5.
///
/// # Example
///
/// ```
/// use ethiopic_calendar::ethiopic;
///
/// assert!(ethiopic::year_type(2015).is_leap());
/// assert!(!ethiopic::year_type(2016).is_leap());
/// ```
pub fn year_type(year: i32) -> YearType {
    if year.rem_euclid(4) == 3 {
        YearType::Leap
    } else {
        YearType::Common
    }
}

/// Checks that `(year, month, day)` names an actual Ethiopian calendar
/// date: month in `1..=13`, day in `1..=30` for the twelve full months,
/// and within Pagume for month 13.
///
/// # Example
///
/// ```
/// use ethiopic_calendar::ethiopic;
///
/// assert!(ethiopic::is_valid(2015, 13, 6)); // leap year, 6-day Pagume
/// assert!(!ethiopic::is_valid(2017, 13, 6));
/// ```
pub fn is_valid(year: i32, month: i32, day: i32) -> bool {
    let last = match month {
        1..=12 => 30,
        13 => 5 + year_type(year).is_leap() as i32,
        _ => return false,
    };
    (1..=last).contains(&day)
}

/// Creates a [`Date`] from an Ethiopian calendar date in the given era.
///
/// The arithmetic is total: no validation is performed, and a nonsensical
/// triple yields a well-defined but meaningless day number. Check with
/// [`is_valid`] first when the fields are untrusted.
///
/// # Example
///
/// ```
/// use ethiopic_calendar::ethiopic::{self, Era};
///
/// let date = ethiopic::to_date(2000, 13, 5, Era::AmeteMihret);
/// assert_eq!(2454720, date.jdn());
/// ```
pub fn to_date(year: i32, month: i32, day: i32, era: Era) -> Date {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    Date::from_jdn(era.epoch_offset() + 365 + 365 * (y - 1) + y / 4 + 30 * m + d - 31)
}

/// Represents a date in the Ethiopian calendar under the given era.
///
/// Returns in `(year, month, day)` format. Exact inverse of [`to_date`]
/// for any date on or after the era's reference point.
///
/// # Example
///
/// ```
/// use ethiopic_calendar::Date;
/// use ethiopic_calendar::ethiopic::{self, Era};
///
/// let date = Date::from_jdn(2454720);
/// assert_eq!((2000, 13, 5), ethiopic::ymd_for(date, Era::AmeteMihret));
/// ```
pub fn ymd_for(date: Date, era: Era) -> (i32, i32, i32) {
    let days = date.jdn() - era.epoch_offset();
    let r = days % 1461;
    let n = r % 365 + 365 * (r / 1460);
    let year = 4 * (days / 1461) + r / 365 - r / 1460;
    (year as i32, (n / 30 + 1) as i32, (n % 30 + 1) as i32)
}

/// Converts an Ethiopian calendar date to a proleptic Gregorian one,
/// returning it in `(year, month, day)` format.
///
/// With `era` of `None` the era is auto-detected, see [`Era::from_date`].
/// The input is validated first; a triple that names no actual Ethiopian
/// date is reported as [`DateError::Ethiopic`].
///
/// # Example
///
/// ```
/// use ethiopic_calendar::ethiopic;
///
/// assert_eq!(Ok((1865, 7, 5)), ethiopic::to_gregorian(1857, 10, 29, None));
/// assert!(ethiopic::to_gregorian(2017, 13, 6, None).is_err());
/// ```
pub fn to_gregorian(
    year: i32,
    month: i32,
    day: i32,
    era: Option<Era>,
) -> Result<(i32, i32, i32), DateError> {
    if !is_valid(year, month, day) {
        return Err(DateError::Ethiopic { year, month, day });
    }
    let date = match era {
        Some(era) => to_date(year, month, day, era),
        None => {
            let tentative = to_date(year, month, day, Era::AmeteMihret);
            match Era::from_date(tentative) {
                Era::AmeteMihret => tentative,
                resolved => to_date(year, month, day, resolved),
            }
        }
    };
    Ok(date.gregorian())
}

/// Converts a proleptic Gregorian calendar date to an Ethiopian one,
/// returning it in `(year, month, day)` format.
///
/// Gregorian input carries no era, so the result's era is always
/// auto-detected: dates before 1 Mäskäräm 1 Amete Mihret come back in
/// Amete Alem years. The input is validated first; a triple that names no
/// actual Gregorian date is reported as [`DateError::Gregorian`].
///
/// # Example
///
/// ```
/// use ethiopic_calendar::ethiopic;
///
/// assert_eq!(Ok((2017, 4, 16)), ethiopic::from_gregorian(2024, 12, 25));
/// ```
pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<(i32, i32, i32), DateError> {
    if !crate::date::is_valid_gregorian(year, month, day) {
        return Err(DateError::Gregorian { year, month, day });
    }
    let date = Date::from_gregorian(year, month, day);
    Ok(ymd_for(date, Era::from_date(date)))
}
