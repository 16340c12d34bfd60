use amlich::vietnamese::{LunarDate, LunarYear, Month, ephemeris, lunar_to_solar, solar_to_lunar};
use amlich::{CivilDate, JulianDay, UtcOffset};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn ephemeris_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("new_moon", |b| {
        b.iter(|| ephemeris::new_moon(black_box(1236)))
    });
    group.bench_function("sun_longitude", |b| {
        b.iter(|| ephemeris::sun_longitude(black_box(JulianDay(2451550.2083333335))))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let offset = UtcOffset::VIETNAM;

    let mut group = c.benchmark_group("calendar");
    group.bench_function("lunar_year", |b| {
        b.iter(|| LunarYear::new(black_box(2017), offset))
    });
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(CivilDate::new(2017, 7, 23)), offset))
    });
    group.bench_function("lunar_to_solar", |b| {
        b.iter(|| lunar_to_solar(black_box(LunarDate::new(2017, Month::Leap(6), 1)), offset))
    });
    group.finish();
}

criterion_group!(benches, ephemeris_bench, calendar_bench);
criterion_main!(benches);
