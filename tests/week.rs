use jalali::{Calendar, Locale, Timestamp, WeekOptions, Weekday};

use crate::{greg, greg_hms, Result};

const CAL: Calendar = Calendar::UTC;

#[test]
fn start_of_week_year() -> Result {
    let options = WeekOptions::new();
    // 1384-04-11 is in the week-numbering year that starts on 1383-12-29.
    assert_eq!(
        CAL.start_of_week_year(greg(2005, 7, 2), &options)?,
        greg(2005, 3, 19),
    );
    // 1383-10-12 06:00.
    assert_eq!(
        CAL.start_of_week_year(greg_hms(2005, 1, 1, 6, 0, 0), &options)?,
        greg(2004, 3, 20),
    );
    assert_eq!(
        CAL.start_of_week_year(Timestamp::INVALID, &options)?,
        Timestamp::INVALID,
    );
    Ok(())
}

#[test]
fn start_of_week_year_locale() -> Result {
    let locale = Locale::new().week_starts_on(1).first_week_contains_date(4);
    let options = WeekOptions::new().locale(locale);
    assert_eq!(
        CAL.start_of_week_year(greg(2005, 7, 2), &options)?,
        greg(2005, 3, 21),
    );

    // Explicit options win over the locale.
    let locale = Locale::new().week_starts_on(0).first_week_contains_date(1);
    let options = WeekOptions::new()
        .week_starts_on(1)
        .first_week_contains_date(4)
        .locale(locale);
    assert_eq!(
        CAL.start_of_week_year(greg(2005, 7, 2), &options)?,
        greg(2005, 3, 21),
    );
    Ok(())
}

#[test]
fn week_and_week_year() -> Result {
    let options = WeekOptions::new();
    assert_eq!(CAL.week(greg(2005, 7, 2), &options)?, Some(16));
    assert_eq!(CAL.week_year(greg(2005, 7, 2), &options)?, Some(1384));
    // 1383-12-29 is a Saturday, and so starts week 1 of 1384.
    assert_eq!(CAL.week(greg(2005, 3, 19), &options)?, Some(1));
    assert_eq!(CAL.week_year(greg(2005, 3, 19), &options)?, Some(1384));
    // The day before is in the last week of 1383.
    assert_eq!(CAL.week_year(greg(2005, 3, 18), &options)?, Some(1383));
    assert_eq!(CAL.week(greg(2005, 3, 18), &options)?, Some(52));
    assert_eq!(CAL.week(Timestamp::INVALID, &options)?, None);
    Ok(())
}

#[test]
fn set_week() -> Result {
    let options = WeekOptions::new();
    let cases = [
        // 1384-01-07 to week 1 is 1383-12-30.
        (greg(2005, 3, 27), 1, greg(2005, 3, 20)),
        // 1388-09-11 to week 1 is 1388-01-05.
        (greg(2009, 12, 2), 1, greg(2009, 3, 25)),
        // 1383-10-13 to week 1 is 1383-01-02.
        (greg(2005, 1, 2), 1, greg(2004, 3, 21)),
        // 1383-05-17 to week 53 is 1383-12-29.
        (greg(2004, 8, 7), 53, greg(2005, 3, 19)),
    ];
    for (ts, week, expected) in cases {
        assert_eq!(CAL.set_week(ts, week, &options)?, expected, "{ts}");
    }
    assert_eq!(
        CAL.set_week(Timestamp::INVALID, 53, &options)?,
        Timestamp::INVALID,
    );
    Ok(())
}

#[test]
fn set_week_locale() -> Result {
    let ts = greg(2005, 1, 2);
    let locale = Locale::new().week_starts_on(1).first_week_contains_date(4);
    let options = WeekOptions::new().locale(locale);
    assert_eq!(CAL.set_week(ts, 1, &options)?, greg(2004, 3, 28));

    let locale = Locale::new().week_starts_on(0).first_week_contains_date(1);
    let options = WeekOptions::new()
        .week_starts_on(1)
        .first_week_contains_date(4)
        .locale(locale);
    assert_eq!(CAL.set_week(ts, 1, &options)?, greg(2004, 3, 28));
    Ok(())
}

#[test]
fn set_week_options_out_of_range() {
    let ts = greg(2004, 8, 7);
    let options = WeekOptions::new().week_starts_on(-1);
    assert!(CAL.set_week(ts, 53, &options).unwrap_err().is_range());
    let options = WeekOptions::new().first_week_contains_date(8);
    assert!(CAL.set_week(ts, 53, &options).unwrap_err().is_range());
    // An invalid timestamp doesn't hide a bad option.
    let options = WeekOptions::new().first_week_contains_date(0);
    assert!(CAL.set_week(Timestamp::INVALID, 1, &options).is_err());
}

#[test]
fn set_day_of_week() -> Result {
    // 1393-06-10, a Monday.
    let monday = greg(2014, 9, 1);
    let default = WeekOptions::new();
    let monday_start = WeekOptions::new().week_starts_on(1);

    assert_eq!(CAL.set_day_of_week(monday, 0, &default)?, greg(2014, 8, 31));
    assert_eq!(CAL.set_day_of_week(monday, 3, &default)?, greg(2014, 9, 3));
    assert_eq!(CAL.set_day_of_week(monday, 5, &default)?, greg(2014, 9, 5));
    assert_eq!(
        CAL.set_day_of_week(monday, 0, &monday_start)?,
        greg(2014, 9, 7),
    );

    let locale = WeekOptions::new().locale(Locale::new().week_starts_on(1));
    assert_eq!(CAL.set_day_of_week(monday, 0, &locale)?, greg(2014, 9, 7));
    let both = WeekOptions::new()
        .week_starts_on(1)
        .locale(Locale::new().week_starts_on(0));
    assert_eq!(CAL.set_day_of_week(monday, 0, &both)?, greg(2014, 9, 7));

    // 1393-06-15, a Saturday.
    let saturday = greg(2014, 9, 6);
    assert_eq!(
        CAL.set_day_of_week(saturday, 1, &monday_start)?,
        greg(2014, 9, 1),
    );
    let tuesday_start = WeekOptions::new().week_starts_on(2);
    assert_eq!(
        CAL.set_day_of_week(saturday, 1, &tuesday_start)?,
        greg(2014, 9, 8),
    );
    Ok(())
}

#[test]
fn set_day_of_week_outside_week() -> Result {
    let monday = greg(2014, 9, 1);
    let default = WeekOptions::new();
    let monday_start = WeekOptions::new().week_starts_on(1);

    assert_eq!(CAL.set_day_of_week(monday, 8, &default)?, greg(2014, 9, 7));
    assert_eq!(
        CAL.set_day_of_week(monday, 7, &monday_start)?,
        greg(2014, 9, 8),
    );
    assert_eq!(
        CAL.set_day_of_week(monday, 14, &monday_start)?,
        greg(2014, 9, 15),
    );
    assert_eq!(CAL.set_day_of_week(monday, -6, &default)?, greg(2014, 8, 24));
    assert_eq!(
        CAL.set_day_of_week(monday, -7, &monday_start)?,
        greg(2014, 8, 25),
    );
    assert_eq!(
        CAL.set_day_of_week(monday, -14, &monday_start)?,
        greg(2014, 8, 18),
    );
    Ok(())
}

#[test]
fn set_day_of_week_ignores_first_week_contains_date() -> Result {
    // Only the week start matters here, so an out of range
    // `firstWeekContainsDate` is never looked at.
    let options = WeekOptions::new().first_week_contains_date(99);
    assert_eq!(
        CAL.set_day_of_week(greg(2014, 9, 1), 0, &options)?,
        greg(2014, 8, 31),
    );
    let options = options.week_starts_on(7);
    assert!(CAL.set_day_of_week(greg(2014, 9, 1), 0, &options).is_err());
    Ok(())
}

#[test]
fn previous_weekday() {
    let cases = [
        (Weekday::Friday, greg(2021, 6, 5), greg(2021, 6, 4)),
        (Weekday::Friday, greg(2021, 6, 6), greg(2021, 6, 4)),
        (Weekday::Friday, greg(2021, 6, 11), greg(2021, 6, 4)),
        (Weekday::Friday, greg(2021, 6, 14), greg(2021, 6, 11)),
        (Weekday::Friday, greg(2021, 6, 15), greg(2021, 6, 11)),
        (Weekday::Friday, greg(2021, 6, 24), greg(2021, 6, 18)),
        (Weekday::Sunday, greg(2021, 6, 7), greg(2021, 6, 6)),
        (Weekday::Sunday, greg(2021, 6, 8), greg(2021, 6, 6)),
        (Weekday::Sunday, greg(2021, 6, 13), greg(2021, 6, 6)),
        (Weekday::Sunday, greg(2021, 6, 16), greg(2021, 6, 13)),
        (Weekday::Sunday, greg(2021, 6, 17), greg(2021, 6, 13)),
        (Weekday::Sunday, greg(2021, 6, 24), greg(2021, 6, 20)),
        (Weekday::Thursday, greg(2021, 6, 5), greg(2021, 6, 3)),
        (Weekday::Thursday, greg(2021, 6, 6), greg(2021, 6, 3)),
        (Weekday::Thursday, greg(2021, 6, 10), greg(2021, 6, 3)),
        (Weekday::Thursday, greg(2021, 6, 14), greg(2021, 6, 10)),
        (Weekday::Thursday, greg(2021, 6, 15), greg(2021, 6, 10)),
        (Weekday::Thursday, greg(2021, 6, 24), greg(2021, 6, 17)),
    ];
    for (weekday, ts, expected) in cases {
        assert_eq!(
            CAL.previous_weekday(ts, weekday),
            expected,
            "previous {weekday:?} of {ts}",
        );
    }
    assert_eq!(
        CAL.previous_weekday(Timestamp::INVALID, Weekday::Friday),
        Timestamp::INVALID,
    );
}
