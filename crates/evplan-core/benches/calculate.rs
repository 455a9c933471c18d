use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evplan_core::{BudgetEngine, ExpenseService, PricingTables, ScenarioBook};
use evplan_domain::{BudgetCategory, CustomExpense, EventParameters};

fn conference() -> EventParameters {
    EventParameters::default()
        .with_city("hyderabad")
        .with_venue_type("conference-center")
        .with_catering_type("buffet")
        .with_event_type("corporate")
        .with_audience_size(50)
        .with_hours(4.0, 2.0, 1.0)
        .with_service("av-equipment")
        .with_service("photography")
}

fn bench_calculate(c: &mut Criterion) {
    let engine = BudgetEngine::new(PricingTables::standard());
    let params = conference();

    c.bench_function("calculate_conference", |b| {
        b.iter(|| black_box(engine.calculate(black_box(&params))))
    });

    let expenses: Vec<CustomExpense> = (0..50)
        .map(|idx| CustomExpense::new(format!("Extra {idx}"), 125.5, BudgetCategory::Miscellaneous))
        .collect();
    let base = engine.calculate(&params);
    c.bench_function("apply_50_expenses", |b| {
        b.iter(|| black_box(ExpenseService::apply(&base, black_box(&expenses))))
    });
}

fn bench_scenarios(c: &mut Criterion) {
    let engine = BudgetEngine::new(PricingTables::standard());
    let cities = ["mumbai", "delhi", "bangalore", "pune", "chennai"];

    c.bench_function("scenario_insights_5", |b| {
        b.iter(|| {
            let mut book = ScenarioBook::new(cities.len());
            for city in cities {
                let params = conference().with_city(city);
                let result = engine.calculate(&params);
                book.add(params, result).expect("within limit");
            }
            black_box(book.insights())
        })
    });
}

criterion_group!(benches, bench_calculate, bench_scenarios);
criterion_main!(benches);
