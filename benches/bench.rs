// Criterion benchmarks for FundMatch

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use fundmatch::core::{default_investors, default_question_set, parse_persona_text, Matcher, NoBonus, QuizEngine, RandomBonus};
use fundmatch::models::{FounderProfile, InvestorRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn create_investor(id: usize) -> InvestorRecord {
    let min = 50_000 * (1 + id as u64 % 20);
    InvestorRecord {
        id: id as u32,
        name: format!("Investor {}", id),
        description: if id % 3 == 0 { "AI and SaaS focus" } else { "Generalist fund" }.to_string(),
        investment_range: (min, min * 10),
        risk_tolerance: ["low", "medium", "high"][id % 3].to_string(),
        location: String::new(),
        contact: String::new(),
    }
}

fn create_founder() -> FounderProfile {
    FounderProfile {
        industry: "ai".to_string(),
        funding_stage: "seed".to_string(),
        risk_tolerance: "high".to_string(),
        investment_amount: 1_000_000,
        company_name: "AI Labs".to_string(),
    }
}

fn bench_default_catalog(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let founder = create_founder();
    let catalog = default_investors();

    c.bench_function("match_default_catalog", |b| {
        b.iter(|| matcher.find_matches(black_box(&founder), black_box(&catalog), &mut NoBonus));
    });
}

fn bench_catalog_sizes(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let founder = create_founder();
    let mut group = c.benchmark_group("match_catalog_size");

    for size in [100, 1_000, 10_000] {
        let catalog: Vec<InvestorRecord> = (0..size).map(create_investor).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            let mut bonus = RandomBonus::new(StdRng::seed_from_u64(1), 0.4);
            b.iter(|| matcher.find_matches(black_box(&founder), black_box(catalog), &mut bonus));
        });
    }

    group.finish();
}

fn bench_quiz_session(c: &mut Criterion) {
    let set = default_question_set();

    c.bench_function("quiz_full_session", |b| {
        b.iter(|| {
            let mut quiz = QuizEngine::from_set(set.clone()).unwrap();
            for question in set.questions.iter() {
                quiz.select_option(&question.id, &question.options[0].value).unwrap();
                quiz.advance();
            }
            black_box(quiz.preferences())
        });
    });
}

fn bench_persona_parser(c: &mut Criterion) {
    let text = "Persona: Visionary Disruptor\nDescription: A founder chasing\nmoonshots.\nSuggestions:\n1. Seed funds\n2. Angels\n3. Accelerators";

    c.bench_function("parse_persona_text", |b| {
        b.iter(|| parse_persona_text(black_box(text)));
    });
}

criterion_group!(
    benches,
    bench_default_catalog,
    bench_catalog_sizes,
    bench_quiz_session,
    bench_persona_parser
);
criterion_main!(benches);
