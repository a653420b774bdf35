//! Integration tests for the recurrence engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use proptest::prelude::*;

use calends_core::Error;
use calends_recurrence::{
    calculate_nearest_repeat_date, nearest_repeat_offset, Recurrence, RecurrenceType,
    RepeatPeriod, WeekdayMask,
};
use calends_time::{Calendar, Gregorian, Weekday};

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
}

fn day_in_range() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..40_000).prop_map(|n| midnight(1990, 1, 1) + TimeDelta::days(n))
}

proptest! {
    #[test]
    fn daily_offset_is_in_range_and_aligned(
        start in day_in_range(),
        gap in 0i64..5000,
        interval in 1u32..400,
    ) {
        let cal = Gregorian::default();
        let current = start + TimeDelta::days(gap) + TimeDelta::hours(13);
        let offset = nearest_repeat_offset(start, current, &Recurrence::daily(interval), &cal).unwrap();
        prop_assert!(offset < interval);
        let due = cal.start_of_day(current) + TimeDelta::days(i64::from(offset));
        prop_assert_eq!(cal.days_between(start, due) % i64::from(interval), 0);
    }

    #[test]
    fn offsets_are_idempotent(
        start in day_in_range(),
        gap in 0i64..5000,
        interval in 1u32..24,
        period_code in 0i32..4,
    ) {
        let cal = Gregorian::default();
        let period = RepeatPeriod::try_from(period_code).unwrap();
        let rule = Recurrence::standard(period, interval);
        let current = start + TimeDelta::days(gap);
        let offset = nearest_repeat_offset(start, current, &rule, &cal).unwrap();
        let due = current + TimeDelta::days(i64::from(offset));
        prop_assert_eq!(nearest_repeat_offset(start, due, &rule, &cal).unwrap(), 0);
    }

    #[test]
    fn whole_cycles_are_due(
        start in day_in_range(),
        k in 0u32..20,
        interval in 1u32..6,
        yearly in any::<bool>(),
    ) {
        let cal = Gregorian::default();
        let (rule, current) = if yearly {
            (Recurrence::yearly(interval), cal.add_years(start, (k * interval) as i32).unwrap())
        } else {
            (Recurrence::monthly(interval), cal.add_months(start, (k * interval) as i32).unwrap())
        };
        prop_assert_eq!(nearest_repeat_offset(start, current, &rule, &cal).unwrap(), 0);
    }

    #[test]
    fn custom_weekly_lands_on_selected_day(current in day_in_range(), bits in 1u8..128) {
        let cal = Gregorian::monday_first();
        let mask = WeekdayMask::new(bits);
        let offset = nearest_repeat_offset(current, current, &Recurrence::custom_weekly(mask), &cal).unwrap();
        prop_assert!(offset < 7);
        let due = current + TimeDelta::days(i64::from(offset));
        prop_assert!(mask.contains(cal.weekday_of(due)));
        for skipped in 0..offset {
            let day = current + TimeDelta::days(i64::from(skipped));
            prop_assert!(!mask.contains(cal.weekday_of(day)));
        }
    }
}

#[test]
fn monthly_scenario_from_flat_fields() {
    let days = calculate_nearest_repeat_date(
        midnight(2024, 1, 1),
        midnight(2024, 3, 15),
        RepeatPeriod::Monthly,
        2,
        RecurrenceType::SingleCycle,
        0,
        &Gregorian::default(),
    );
    assert_eq!(days, Ok(47));
}

#[test]
fn custom_weekly_from_flat_fields() {
    let mask = WeekdayMask::from_weekdays([Weekday::Monday, Weekday::Thursday]).bits();
    let check = |d: u32| {
        calculate_nearest_repeat_date(
            midnight(2099, 1, 1),
            midnight(2024, 1, d),
            RepeatPeriod::Daily,
            -5,
            RecurrenceType::CustomWeekly,
            mask,
            &Gregorian::sunday_first(),
        )
        .unwrap()
    };
    // 2024-01-02 Tue, 01-04 Thu, 01-05 Fri
    assert_eq!(check(2), 2);
    assert_eq!(check(4), 0);
    assert_eq!(check(5), 3);
}

#[test]
fn flat_fields_reject_zero_interval() {
    let result = calculate_nearest_repeat_date(
        midnight(2024, 1, 1),
        midnight(2024, 1, 2),
        RepeatPeriod::Weekly,
        0,
        RecurrenceType::SingleCycle,
        0,
        &Gregorian::default(),
    );
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn weekly_ignores_first_weekday() {
    let start = midnight(2024, 1, 3);
    let current = midnight(2024, 1, 8);
    let rule = Recurrence::weekly(1);
    let monday = nearest_repeat_offset(start, current, &rule, &Gregorian::monday_first()).unwrap();
    let sunday = nearest_repeat_offset(start, current, &rule, &Gregorian::sunday_first()).unwrap();
    assert_eq!(monday, 2);
    assert_eq!(monday, sunday);
}

#[test]
fn rules_load_from_json() {
    let rule: Recurrence =
        serde_json::from_str(r#"{"type":"standard","period":"monthly","interval":3}"#).unwrap();
    assert_eq!(rule, Recurrence::monthly(3));
    let custom: Recurrence = serde_json::from_str(r#"{"type":"custom_weekly","mask":9}"#).unwrap();
    assert_eq!(custom, Recurrence::custom_weekly(0b1001));
}

#[test_log::test]
fn empty_mask_is_reported() {
    let err = nearest_repeat_offset(
        midnight(2024, 1, 1),
        midnight(2024, 1, 1),
        &Recurrence::custom_weekly(WeekdayMask::NONE),
        &Gregorian::default(),
    )
    .unwrap_err();
    assert_eq!(err, Error::NoMatchingWeekday { mask: 0 });
}

#[test_log::test]
fn start_after_current_is_rejected() {
    let err = nearest_repeat_offset(
        midnight(2024, 5, 1),
        midnight(2024, 4, 30),
        &Recurrence::yearly(1),
        &Gregorian::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
}
