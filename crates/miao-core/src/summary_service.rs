//! Monthly aggregation over the in-memory transaction list.
//!
//! Every function here is pure and recomputes from scratch; nothing is cached
//! between calls. The session calls [`SummaryService::report`] once per render.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use miao_domain::{Category, DailyGroup, Transaction};

use crate::{category_service::CategoryService, month::YearMonth};

/// Slice colors for the expense chart, assigned by rank.
pub const CHART_PALETTE: [&str; 7] = [
    "#fb7185", "#38bdf8", "#f472b6", "#818cf8", "#a78bfa", "#34d399", "#fbbf24",
];

/// Income and expense sums for a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expense: f64,
    /// Always `income - expense`.
    pub balance: f64,
}

/// One row of the expense ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub amount: f64,
    /// Share of the month's expense total, `0..=100`.
    pub percentage: f64,
    pub chart_color: &'static str,
}

/// Everything a screen needs for one ledger and month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: YearMonth,
    pub ledger_id: String,
    pub transactions: Vec<Transaction>,
    pub totals: MonthlyTotals,
    pub lifetime_balance: f64,
    pub daily_groups: Vec<DailyGroup>,
    pub ranking: Vec<CategoryShare>,
}

impl MonthlyReport {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Transactions of `ledger_id` dated within `month`, newest-created first.
    pub fn monthly_transactions(
        transactions: &[Transaction],
        ledger_id: &str,
        month: YearMonth,
    ) -> Vec<Transaction> {
        let mut filtered: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| txn.ledger_id == ledger_id && month.contains(txn.date))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        filtered
    }

    pub fn totals(transactions: &[Transaction]) -> MonthlyTotals {
        let (income, expense) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expense), txn| {
                    if txn.is_income() {
                        (income + txn.amount, expense)
                    } else {
                        (income, expense + txn.amount)
                    }
                });
        MonthlyTotals {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Income minus expense over every transaction of the ledger, all months.
    pub fn lifetime_balance(transactions: &[Transaction], ledger_id: &str) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.ledger_id == ledger_id)
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Groups by date, newest date first. Within a group the input order is kept.
    pub fn daily_groups(transactions: &[Transaction]) -> Vec<DailyGroup> {
        let mut groups: BTreeMap<_, DailyGroup> = BTreeMap::new();
        for txn in transactions {
            groups
                .entry(txn.date)
                .or_insert_with(|| DailyGroup::new(txn.date))
                .push(txn.clone());
        }
        groups.into_values().rev().collect()
    }

    /// Expense totals per category, largest first. Empty when there is no
    /// expense in `transactions`.
    pub fn category_ranking(
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Vec<CategoryShare> {
        let mut order: Vec<(&str, f64)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            match index.get(txn.category_id.as_str()) {
                Some(&slot) => order[slot].1 += txn.amount,
                None => {
                    index.insert(txn.category_id.as_str(), order.len());
                    order.push((txn.category_id.as_str(), txn.amount));
                }
            }
        }

        let expense_total: f64 = order.iter().map(|(_, amount)| amount).sum();
        if expense_total <= 0.0 {
            return Vec::new();
        }

        // Stable sort: ties keep first-seen order.
        order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        order
            .into_iter()
            .enumerate()
            .map(|(rank, (category_id, amount))| {
                let label = CategoryService::label(categories, category_id);
                CategoryShare {
                    category_id: category_id.to_string(),
                    name: label.name,
                    icon: label.icon,
                    color: label.color,
                    amount,
                    percentage: amount / expense_total * 100.0,
                    chart_color: CHART_PALETTE[rank % CHART_PALETTE.len()],
                }
            })
            .collect()
    }

    /// Runs every aggregation pass for one ledger and month.
    pub fn report(
        transactions: &[Transaction],
        categories: &[Category],
        ledger_id: &str,
        month: YearMonth,
    ) -> MonthlyReport {
        let monthly = Self::monthly_transactions(transactions, ledger_id, month);
        let totals = Self::totals(&monthly);
        let daily_groups = Self::daily_groups(&monthly);
        let ranking = Self::category_ranking(&monthly, categories);
        MonthlyReport {
            month,
            ledger_id: ledger_id.to_string(),
            lifetime_balance: Self::lifetime_balance(transactions, ledger_id),
            transactions: monthly,
            totals,
            daily_groups,
            ranking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use miao_domain::{seed::default_categories, TransactionType};

    fn txn(
        id: &str,
        kind: TransactionType,
        amount: f64,
        category: &str,
        date: (i32, u32, u32),
        ledger: &str,
        timestamp: i64,
    ) -> Transaction {
        Transaction {
            id: id.into(),
            amount,
            kind,
            category_id: category.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            note: String::new(),
            ledger_id: ledger.into(),
            timestamp,
        }
    }

    fn march() -> YearMonth {
        YearMonth::new(2024, 3).unwrap()
    }

    #[test]
    fn monthly_filter_orders_by_creation_not_date() {
        let list = vec![
            txn("a", TransactionType::Expense, 1.0, "c1", (2024, 3, 20), "l1", 100),
            txn("b", TransactionType::Expense, 1.0, "c1", (2024, 3, 1), "l1", 300),
            txn("c", TransactionType::Expense, 1.0, "c1", (2024, 3, 9), "l2", 400),
            txn("d", TransactionType::Expense, 1.0, "c1", (2024, 4, 1), "l1", 500),
            txn("e", TransactionType::Income, 1.0, "c9", (2023, 3, 2), "l1", 600),
            txn("f", TransactionType::Income, 1.0, "c9", (2024, 3, 31), "l1", 200),
        ];
        let ids: Vec<_> = SummaryService::monthly_transactions(&list, "l1", march())
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["b", "f", "a"]);
    }

    #[test]
    fn lifetime_balance_spans_all_months_of_ledger() {
        let list = vec![
            txn("a", TransactionType::Income, 100.0, "c9", (2023, 1, 1), "l1", 1),
            txn("b", TransactionType::Expense, 30.0, "c1", (2024, 3, 1), "l1", 2),
            txn("c", TransactionType::Income, 999.0, "c9", (2024, 3, 1), "l2", 3),
        ];
        assert_eq!(SummaryService::lifetime_balance(&list, "l1"), 70.0);
    }

    #[test]
    fn daily_groups_sum_to_monthly_totals() {
        let list = vec![
            txn("a", TransactionType::Expense, 12.5, "c1", (2024, 3, 5), "l1", 5),
            txn("b", TransactionType::Income, 40.0, "c10", (2024, 3, 5), "l1", 4),
            txn("c", TransactionType::Expense, 7.25, "c2", (2024, 3, 2), "l1", 3),
            txn("d", TransactionType::Expense, 3.0, "c2", (2024, 3, 28), "l1", 2),
        ];
        let monthly = SummaryService::monthly_transactions(&list, "l1", march());
        let totals = SummaryService::totals(&monthly);
        let groups = SummaryService::daily_groups(&monthly);

        let dates: Vec<_> = groups.iter().map(|g| g.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-28", "2024-03-05", "2024-03-02"]);
        let income: f64 = groups.iter().map(|g| g.total_income).sum();
        let expense: f64 = groups.iter().map(|g| g.total_expense).sum();
        assert_eq!(income, totals.income);
        assert_eq!(expense, totals.expense);
        assert_eq!(totals.balance, totals.income - totals.expense);

        let fifth = &groups[1];
        let ids: Vec<_> = fifth.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn ranking_sorts_and_sums_to_hundred() {
        let list = vec![
            txn("a", TransactionType::Expense, 10.0, "c1", (2024, 3, 5), "l1", 5),
            txn("b", TransactionType::Expense, 30.0, "c2", (2024, 3, 5), "l1", 4),
            txn("c", TransactionType::Expense, 5.0, "c1", (2024, 3, 2), "l1", 3),
            txn("d", TransactionType::Income, 500.0, "c9", (2024, 3, 2), "l1", 2),
        ];
        let ranking = SummaryService::category_ranking(&list, &default_categories());
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].category_id, "c2");
        assert_eq!(ranking[0].amount, 30.0);
        assert_eq!(ranking[0].chart_color, CHART_PALETTE[0]);
        assert_eq!(ranking[1].amount, 15.0);
        let total: f64 = ranking.iter().map(|r| r.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_empty_without_expense() {
        let list = vec![txn("d", TransactionType::Income, 500.0, "c9", (2024, 3, 2), "l1", 2)];
        assert!(SummaryService::category_ranking(&list, &default_categories()).is_empty());
    }

    #[test]
    fn ranking_tolerates_dangling_category() {
        let list = vec![txn("a", TransactionType::Expense, 10.0, "c404", (2024, 3, 5), "l1", 5)];
        let ranking = SummaryService::category_ranking(&list, &default_categories());
        assert_eq!(ranking[0].name, "Unknown");
        assert_eq!(ranking[0].percentage, 100.0);
    }

    #[test]
    fn empty_month_reports_zeros() {
        let report = SummaryService::report(&[], &default_categories(), "l1", march());
        assert!(report.is_empty());
        assert_eq!(report.totals, MonthlyTotals::default());
        assert!(report.daily_groups.is_empty());
        assert!(report.ranking.is_empty());
    }
}
