use criterion::{black_box, criterion_group, criterion_main, Criterion};
use medi_triage::{score, PredictForm, SymptomInput};

fn bench_score(c: &mut Criterion) {
    let input = SymptomInput::new(64.0, 1.0, 1.0, 3.0, 2.0, 1.5);
    c.bench_function("score", |b| b.iter(|| score(black_box(&input))));

    let mut form = PredictForm::new();
    for (id, v) in [("age", "64"), ("fever", "1"), ("fatigue", "3"), ("preexist", "1.5")] {
        let _ = form.set(id, v);
    }
    c.bench_function("form_to_score", |b| {
        b.iter(|| score(&black_box(&form).to_input()))
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
