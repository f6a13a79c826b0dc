//! Recommendation benchmark: full backend-shaped assessment → ordered recommendations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pii_exposure::config::RiskConfig;
use pii_exposure::pii::{AssessmentResult, PiiCategory};
use pii_exposure::risk::{recommend, RiskEngine};
use pii_exposure::scoring::PiiScoringTable;

fn make_assessment(disclosed_every: usize) -> AssessmentResult {
    PiiCategory::ALL
        .iter()
        .enumerate()
        .fold(AssessmentResult::new("low", 4.0), |r, (i, c)| {
            let values: Vec<String> = if i % disclosed_every == 0 {
                vec![format!("value_{}", i)]
            } else {
                Vec::new()
            };
            r.with_field(*c, values)
        })
}

fn bench_recommend(c: &mut Criterion) {
    let table = PiiScoringTable::builtin();
    let result = make_assessment(3);

    c.bench_function("recommend_19_categories", |b| {
        b.iter(|| black_box(recommend(black_box(&result), &table)))
    });
}

fn bench_report(c: &mut Criterion) {
    let engine = RiskEngine::new(PiiScoringTable::builtin(), RiskConfig::default());
    let result = make_assessment(4);

    c.bench_function("report_with_projection", |b| {
        b.iter(|| black_box(engine.report(black_box(&result))))
    });
}

fn bench_decode(c: &mut Criterion) {
    let body = serde_json::to_string(&make_assessment(2)).unwrap();

    c.bench_function("decode_backend_body", |b| {
        b.iter(|| black_box(AssessmentResult::from_json(black_box(&body))))
    });
}

criterion_group!(benches, bench_recommend, bench_report, bench_decode);
criterion_main!(benches);
