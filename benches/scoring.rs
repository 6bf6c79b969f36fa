use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heat_advisor::explanation::fallback_narrative;
use heat_advisor::{classify, GeocodeCandidate, LocationExtractor, StrategyScorer};

fn candidate(name: &str, city: &str, latitude: f64, longitude: f64) -> GeocodeCandidate {
    GeocodeCandidate {
        latitude,
        longitude,
        city: Some(city.to_string()),
        formatted_address: Some(name.to_string()),
        ..Default::default()
    }
}

fn benchmark_score(c: &mut Criterion) {
    let scorer = StrategyScorer::default();
    let places = [
        candidate("Phoenix, Arizona, United States", "Phoenix", 33.45, -112.07),
        candidate("Mumbai, Maharashtra, India", "Mumbai", 19.08, 72.88),
        candidate("Oslo, Norway", "Oslo", 59.91, 10.75),
        candidate("Reykjavik, Iceland", "", 64.15, -21.94),
    ];

    let mut group = c.benchmark_group("score");
    for place in &places {
        let profile = classify(place, "bench");
        group.bench_with_input(BenchmarkId::from_parameter(&profile.name), &profile, |b, p| {
            b.iter(|| scorer.score(black_box(p)));
        });
    }
    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let scorer = StrategyScorer::default();
    let extractor = match LocationExtractor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Extractor failed to build, skipping: {}", e);
            return;
        }
    };
    let place = candidate("Phoenix, Arizona, United States", "Phoenix", 33.45, -112.07);

    c.bench_function("extract_classify_score_narrate", |b| {
        b.iter(|| {
            let candidates = extractor.candidates(black_box(
                "What can the government do to reduce heat in Phoenix, Arizona?",
            ));
            let query = candidates.first().map(String::as_str).unwrap_or("Phoenix");
            let profile = classify(&place, query);
            let set = scorer.score(&profile);
            fallback_narrative(&profile, &set.recommendations)
        });
    });
}

criterion_group!(benches, benchmark_score, benchmark_pipeline);

criterion_main!(benches);
