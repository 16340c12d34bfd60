use amlich::UtcOffset;
use amlich::vietnamese::{LunarYear, Month, ephemeris};

#[test]
fn table_invariants() {
    for offset in [UtcOffset::VIETNAM, UtcOffset::CHINA] {
        for year in 1700..=2300 {
            let lunar_year = LunarYear::new(year, offset);
            let months = &lunar_year.months;
            let leaps: Vec<_> = months.iter().filter(|m| m.is_leap()).collect();
            match months.len() {
                13 => assert!(leaps.is_empty(), "{year} at {offset}: leap month in 13-month table"),
                14 => assert_eq!(1, leaps.len(), "{year} at {offset}: leap months {leaps:?}"),
                n => panic!("{year} at {offset}: {n} months"),
            }

            assert_eq!(Month::Common(11), months[0].month, "{year} at {offset}");
            assert_eq!(
                Month::Common(11),
                months[months.len() - 1].month,
                "{year} at {offset}"
            );
            for pair in months.windows(2) {
                let days = pair[1].date - pair[0].date;
                assert!(
                    days == 29 || days == 30,
                    "{year} at {offset}: {} lasts {days} days",
                    pair[0].date
                );
                if pair[1].is_leap() {
                    assert_eq!(pair[0].month.num(), pair[1].month.num(), "{year} at {offset}");
                } else {
                    assert_eq!(
                        pair[0].month.num() % 12 + 1,
                        pair[1].month.num(),
                        "{year} at {offset}"
                    );
                }
            }
        }
    }
}

#[test]
fn consecutive_tables_share_month_11() {
    for year in 1850..=2150 {
        let this = LunarYear::new(year, UtcOffset::VIETNAM);
        let next = LunarYear::new(year + 1, UtcOffset::VIETNAM);
        assert_eq!(this.end(), next.start(), "{year}");
    }
}

#[test]
fn new_moons_are_one_synodic_month_apart() {
    for k in -3000..8000 {
        let gap = ephemeris::new_moon(k + 1) - ephemeris::new_moon(k);
        assert!(
            (gap - ephemeris::SYNODIC_MONTH).abs() < 0.5,
            "k = {k}: {gap} days"
        );
    }
}

#[test]
fn leap_years_follow_metonic_rate() {
    let leap_years = (1901..=2090)
        .filter(|&year| LunarYear::new(year, UtcOffset::VIETNAM).leap_month().is_some())
        .count();
    // 7 leap years per 19
    assert_eq!(70, leap_years);
}
