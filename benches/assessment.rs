use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dysrisk::{PatientFactors, RiskAssessor, Severity};

fn bench_assessment(c: &mut Criterion) {
    let assessor = RiskAssessor::new();
    let patient = PatientFactors::new(62).with_smoker(true).with_alcoholic(true);

    c.bench_function("assess_factors", |b| {
        b.iter(|| {
            assessor.assess_factors(
                black_box(Some(Severity::Mild)),
                black_box(Some(Severity::Moderate)),
                black_box(&patient),
            )
        })
    });

    c.bench_function("assess_raw", |b| {
        b.iter(|| {
            assessor.assess(
                black_box(Some("MILD")),
                black_box(Some("mild")),
                black_box(62),
                true,
                false,
            )
        })
    });
}

criterion_group!(benches, bench_assessment);
criterion_main!(benches);
