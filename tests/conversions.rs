//! Acceptance vectors and round-trip properties for the two calendars.

use ethiopic_calendar::ethiopic::{self, Era};
use ethiopic_calendar::Date;
use proptest::prelude::*;

/// Known Ethiopian/Gregorian date pairs.
const PAIRS: &[((i32, i32, i32), Era, (i32, i32, i32))] = &[
    ((1855, 2, 20), Era::AmeteMihret, (1862, 10, 29)),
    ((1857, 10, 29), Era::AmeteMihret, (1865, 7, 5)),
    ((1, 1, 1), Era::AmeteMihret, (8, 8, 27)),
    ((4, 1, 1), Era::AmeteMihret, (11, 8, 28)),
    ((2000, 13, 5), Era::AmeteMihret, (2008, 9, 10)),
    ((5500, 1, 1), Era::AmeteAlem, (7, 8, 28)),
    ((1892, 4, 23), Era::AmeteMihret, (1900, 1, 1)),
    ((1575, 2, 8), Era::AmeteMihret, (1582, 10, 15)),
    ((2993, 4, 14), Era::AmeteMihret, (3000, 12, 31)),
];

#[test]
fn known_pairs() {
    for &((ey, em, ed), era, (gy, gm, gd)) in PAIRS {
        assert_eq!(
            Ok((gy, gm, gd)),
            ethiopic::to_gregorian(ey, em, ed, Some(era)),
            "{ey}-{em}-{ed}"
        );
        assert_eq!(
            Ok((ey, em, ed)),
            ethiopic::from_gregorian(gy, gm, gd),
            "{gy}-{gm}-{gd}"
        );
    }
}

#[test]
fn epoch_constants() {
    assert_eq!(
        ethiopic_calendar::JD_EPOCH_OFFSET_GREGORIAN,
        Date::from_gregorian(1, 1, 1).jdn()
    );
    assert_eq!(
        ethiopic_calendar::JD_EPOCH_OFFSET_AMETE_MIHRET + 365,
        ethiopic::to_date(1, 1, 1, Era::AmeteMihret).jdn()
    );
    assert_eq!(
        ethiopic_calendar::JD_EPOCH_OFFSET_AMETE_ALEM + 365,
        ethiopic::to_date(1, 1, 1, Era::AmeteAlem).jdn()
    );
}

fn valid_ethiopic() -> impl Strategy<Value = (i32, i32, i32)> {
    (1i32..=9999, 1i32..=13).prop_flat_map(|(year, month)| {
        let last = if month == 13 {
            5 + ethiopic::year_type(year).is_leap() as i32
        } else {
            30
        };
        (Just(year), Just(month), 1..=last)
    })
}

proptest! {
    #[test]
    fn gregorian_jdn_round_trip(jdn in 0i64..6_000_000) {
        let (y, m, d) = Date::from_jdn(jdn).gregorian();
        prop_assert_eq!(jdn, Date::from_gregorian(y, m, d).jdn());
    }

    #[test]
    fn ethiopic_jdn_round_trip(
        (y, m, d) in valid_ethiopic(),
        era in prop_oneof![Just(Era::AmeteAlem), Just(Era::AmeteMihret)],
    ) {
        let date = ethiopic::to_date(y, m, d, era);
        prop_assert_eq!((y, m, d), ethiopic::ymd_for(date, era));
    }

    #[test]
    fn cross_calendar_round_trip((y, m, d) in valid_ethiopic()) {
        // years >= 1 under the default era always auto-detect as Amete
        // Mihret, so the cross conversion must come back exactly
        let (gy, gm, gd) = ethiopic::to_gregorian(y, m, d, None).unwrap();
        prop_assert_eq!(Ok((y, m, d)), ethiopic::from_gregorian(gy, gm, gd));
    }

    #[test]
    fn weekday_advances_daily(jdn in -3_000_000i64..6_000_000) {
        let date = Date::from_jdn(jdn);
        prop_assert_eq!((date.day_of_week() + 1) % 7, (date + 1).day_of_week());
    }
}
