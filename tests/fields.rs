use jalali::{
    days_in_month, is_leap_year, Calendar, Field, JalaliFields, Offset,
    Timestamp, Weekday,
};

use crate::{greg, greg_hms};

const CAL: Calendar = Calendar::UTC;

#[test]
fn nowruz() {
    // The first day of each year from 1395 to 1405.
    let cases = [
        (1395, greg(2016, 3, 20)),
        (1396, greg(2017, 3, 21)),
        (1397, greg(2018, 3, 21)),
        (1398, greg(2019, 3, 21)),
        (1399, greg(2020, 3, 20)),
        (1400, greg(2021, 3, 21)),
        (1401, greg(2022, 3, 21)),
        (1402, greg(2023, 3, 21)),
        (1403, greg(2024, 3, 20)),
        (1404, greg(2025, 3, 21)),
    ];
    for (year, ts) in cases {
        assert_eq!(
            CAL.to_timestamp(JalaliFields::date(year, 0, 1)),
            ts,
            "1 Farvardin {year}",
        );
        assert_eq!(CAL.to_fields(ts), Some(JalaliFields::date(year, 0, 1)));
    }
}

#[test]
fn leap_years() {
    let leap: Vec<i64> =
        (1380..=1410).filter(|&year| is_leap_year(year)).collect();
    assert_eq!(leap, [1383, 1387, 1391, 1395, 1399, 1403, 1408]);
    assert_eq!(CAL.in_leap_year(greg(2021, 3, 20)), Some(true));
    assert_eq!(CAL.in_leap_year(greg(2021, 3, 21)), Some(false));
    assert_eq!(CAL.in_leap_year(Timestamp::INVALID), None);
}

#[test]
fn month_lengths() {
    let lengths: Vec<i8> = (0..12).map(|m| days_in_month(1400, m)).collect();
    assert_eq!(lengths, [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29]);
    assert_eq!(days_in_month(1399, 11), 30);
    assert_eq!(days_in_month(1399, 12), 31);
    assert_eq!(CAL.days_in_month(greg(2021, 2, 20)), Some(30));
    assert_eq!(CAL.days_in_month(Timestamp::INVALID), None);
    assert_eq!(CAL.is_last_day_of_month(greg(2021, 3, 20)), Some(true));
    assert_eq!(CAL.is_last_day_of_month(greg(2022, 3, 20)), Some(true));
    assert_eq!(CAL.is_last_day_of_month(greg(2022, 3, 19)), Some(false));
}

#[test]
fn get_fields() {
    let ts = Timestamp::from_gregorian(2014, 9, 1, 11, 30, 15, 250);
    let expected =
        JalaliFields::date(1393, 5, 10).with_time(11, 30, 15, 250);
    assert_eq!(CAL.to_fields(ts), Some(expected));
    assert_eq!(CAL.get(ts, Field::Month), Some(5));
    assert_eq!(CAL.get(ts, Field::Millisecond), Some(250));
    assert_eq!(CAL.get(Timestamp::INVALID, Field::Year), None);
    assert_eq!(CAL.day_of_week(ts), Some(Weekday::Monday));
    assert_eq!(CAL.start_of_day(ts), greg(2014, 9, 1));
}

#[test]
fn set_hours() {
    let ts = greg_hms(2014, 9, 1, 11, 30, 0);
    assert_eq!(CAL.set(ts, Field::Hour, 4), greg_hms(2014, 9, 1, 4, 30, 0));
    assert_eq!(
        CAL.set_fractional(ts, Field::Hour, 4.123),
        greg_hms(2014, 9, 1, 4, 30, 0),
    );
    assert_eq!(
        CAL.set_fractional(ts, Field::Hour, f64::NAN),
        Timestamp::INVALID,
    );
    assert_eq!(
        CAL.set(Timestamp::INVALID, Field::Hour, 4),
        Timestamp::INVALID,
    );
}

#[test]
fn set_carries() {
    // 1393-06-10.
    let ts = greg(2014, 9, 1);
    // Month 12 is Farvardin of the next year.
    assert_eq!(CAL.set(ts, Field::Month, 12), greg(2015, 3, 30));
    // Day 0 is the last day of the previous month.
    assert_eq!(CAL.set(ts, Field::Day, 0), greg(2014, 8, 22));
    assert_eq!(
        CAL.set(ts, Field::Hour, -1),
        greg_hms(2014, 8, 31, 23, 0, 0),
    );
    // Year 1399 is a leap year, so Esfand 30 exists. In 1400 it carries.
    let esfand_30 = CAL.to_timestamp(JalaliFields::date(1399, 11, 30));
    assert_eq!(esfand_30, greg(2021, 3, 20));
    assert_eq!(CAL.set(esfand_30, Field::Year, 1400), greg(2022, 3, 21));
    assert_eq!(CAL.set(ts, Field::Year, i64::MAX), Timestamp::INVALID);
}

#[test]
fn fixed_offsets() {
    let tehran = Calendar::fixed(Offset::from_seconds(12_600).unwrap());
    // 2024-03-19T20:30Z is midnight of 1 Farvardin 1403 in Tehran.
    let ts = greg_hms(2024, 3, 19, 20, 30, 0);
    assert_eq!(tehran.to_fields(ts), Some(JalaliFields::date(1403, 0, 1)));
    assert_eq!(tehran.start_of_day(ts), ts);
    assert_eq!(CAL.to_fields(ts).map(|f| f.year), Some(1402));
    assert_eq!(tehran.day_of_week(ts), Some(Weekday::Wednesday));
    assert_eq!(CAL.day_of_week(ts), Some(Weekday::Tuesday));

    let west = Calendar::fixed(Offset::constant(-5));
    assert_eq!(
        west.start_of_day(greg(2014, 9, 1)),
        greg_hms(2014, 8, 31, 5, 0, 0),
    );
}

#[test]
fn range_edges() {
    assert!(CAL.to_fields(Timestamp::MIN).is_some());
    assert!(CAL.to_fields(Timestamp::MAX).is_some());
    // The maximum is exactly midnight.
    assert_eq!(CAL.set(Timestamp::MAX, Field::Hour, 0), Timestamp::MAX);
    assert_eq!(
        CAL.set(Timestamp::MAX, Field::Millisecond, 1),
        Timestamp::INVALID,
    );
    assert_eq!(CAL.set(Timestamp::MAX, Field::Day, 32), Timestamp::INVALID);
}
