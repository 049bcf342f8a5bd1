use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use miao_core::{SummaryService, YearMonth};
use miao_domain::{seed::default_categories, Transaction, TransactionDraft, TransactionType};

fn build_transactions(count: usize) -> Vec<Transaction> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let categories = default_categories();

    (0..count)
        .map(|idx| {
            let category = &categories[idx % categories.len()];
            let kind = category.kind;
            let amount = 5.0 + (idx % 200) as f64;
            let date = start + Duration::days((idx % 366) as i64);
            let ledger = if idx % 4 == 0 { "l2" } else { "l1" };
            Transaction::from_draft(
                TransactionDraft::new(kind, amount, category.id.clone(), date),
                ledger,
                created + Duration::minutes(idx as i64),
            )
        })
        .collect()
}

fn bench_monthly_report(c: &mut Criterion) {
    let transactions = build_transactions(black_box(20_000));
    let categories = default_categories();
    let month = YearMonth::new(2024, 6).unwrap();

    c.bench_function("monthly_report_20k", |b| {
        b.iter(|| {
            let report = SummaryService::report(&transactions, &categories, "l1", month);
            black_box(report);
        })
    });

    c.bench_function("lifetime_balance_20k", |b| {
        b.iter(|| black_box(SummaryService::lifetime_balance(&transactions, "l1")))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let transactions = build_transactions(black_box(20_000));
    let categories = default_categories();
    let monthly = SummaryService::monthly_transactions(
        &transactions,
        "l1",
        YearMonth::new(2024, 3).unwrap(),
    );
    assert!(!monthly.is_empty(), "expected seeded March records");

    c.bench_function("category_ranking_month", |b| {
        b.iter(|| black_box(SummaryService::category_ranking(&monthly, &categories)))
    });
}

criterion_group!(benches, bench_monthly_report, bench_ranking);
criterion_main!(benches);
