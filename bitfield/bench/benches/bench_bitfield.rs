use std::time::Duration;

use rand::{thread_rng, Rng};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use bitfield::{difference, intersection, invert, union, BitField};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(3);
const MEASURE_TIME: Duration = Duration::from_secs(5);

const NUM_FIELDS: usize = 10000;

fn criterion_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut rng = thread_rng();
    let fields: Vec<_> = (0..NUM_FIELDS)
        .map(|_| BitField::from_bits(rng.gen::<u64>()))
        .collect();
    let positions: Vec<u8> = (0..NUM_FIELDS).map(|_| rng.gen_range(0..80)).collect();

    add_cardinal_benches(&mut group, &fields);
    add_point_benches(&mut group, &fields, &positions);
    add_setwise_benches(&mut group, &fields);
}

fn add_cardinal_benches(group: &mut BenchmarkGroup<WallTime>, fields: &[BitField]) {
    group.bench_function("cardinal/popcount", |b| {
        b.iter(|| fields.iter().map(|f| f.cardinal() as usize).sum::<usize>());
    });
    group.bench_function("cardinal/per_position", |b| {
        b.iter(|| {
            fields
                .iter()
                .map(|f| (0..64).filter(|&k| f.is_set(k)).count())
                .sum::<usize>()
        });
    });
}

fn add_point_benches(group: &mut BenchmarkGroup<WallTime>, fields: &[BitField], positions: &[u8]) {
    group.bench_function("point/set_bit", |b| {
        b.iter(|| {
            fields
                .iter()
                .zip(positions)
                .fold(BitField::new(), |acc, (&f, &k)| union(acc, f.set_bit(k)))
        });
    });
    group.bench_function("point/del_bit", |b| {
        b.iter(|| {
            fields
                .iter()
                .zip(positions)
                .fold(BitField::new(), |acc, (&f, &k)| union(acc, f.del_bit(k)))
        });
    });
    group.bench_function("point/is_set", |b| {
        b.iter(|| {
            fields
                .iter()
                .zip(positions)
                .filter(|&(f, &k)| f.is_set(k))
                .count()
        });
    });
}

fn add_setwise_benches(group: &mut BenchmarkGroup<WallTime>, fields: &[BitField]) {
    group.bench_function("setwise/union", |b| {
        b.iter(|| fields.windows(2).fold(BitField::new(), |acc, w| union(acc, union(w[0], w[1]))));
    });
    group.bench_function("setwise/intersection", |b| {
        b.iter(|| {
            fields
                .windows(2)
                .fold(BitField::new(), |acc, w| union(acc, intersection(w[0], w[1])))
        });
    });
    group.bench_function("setwise/difference", |b| {
        b.iter(|| {
            fields
                .windows(2)
                .fold(BitField::new(), |acc, w| union(acc, difference(w[0], w[1])))
        });
    });
    group.bench_function("setwise/invert", |b| {
        b.iter(|| fields.iter().fold(BitField::new(), |acc, &f| union(acc, invert(f))));
    });
}

criterion_group!(benches, criterion_uniform);
criterion_main!(benches);
