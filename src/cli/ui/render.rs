//! Text renditions of the home, stats and ledger screens.

use colored::{Color, Colorize};
use miao_config::Config;
use miao_core::{
    format_money, format_percent, CategoryService, EntryForm, MonthlyReport, SummaryService,
};
use miao_domain::{Category, Ledger, Transaction};

use super::icons;

const BAR_WIDTH: usize = 20;
const NOTE_WIDTH: usize = 18;

/// How screens are decorated.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub currency: String,
    pub icons: bool,
    pub color: bool,
    pub high_contrast: bool,
}

impl RenderStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency: config.currency_symbol.clone(),
            icons: config.show_icons(),
            color: config.use_color(),
            high_contrast: config.accessibility.high_contrast,
        }
    }

    /// No glyphs and no escape codes.
    pub fn plain(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            icons: false,
            color: false,
            high_contrast: false,
        }
    }
}

/// A titled block of lines ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub lines: Vec<String>,
}

/// Transactions of the month in on-screen order: newest day first, then
/// newest entry first. Row numbers shown to the user index into this.
pub fn display_order(report: &MonthlyReport) -> Vec<&Transaction> {
    report
        .daily_groups
        .iter()
        .flat_map(|group| group.transactions.iter())
        .collect()
}

pub struct ScreenRenderer<'a> {
    style: &'a RenderStyle,
}

impl<'a> ScreenRenderer<'a> {
    pub fn new(style: &'a RenderStyle) -> Self {
        Self { style }
    }

    /// `¥1,950.00`, with the sign ahead of the currency symbol.
    pub fn money(&self, amount: f64) -> String {
        let formatted = format_money(amount);
        match formatted.strip_prefix('-') {
            Some(rest) => format!("-{}{}", self.style.currency, rest),
            None => format!("{}{}", self.style.currency, formatted),
        }
    }

    pub fn signed_money(&self, transaction: &Transaction) -> String {
        format!(
            "{}{}{}",
            transaction.kind.sign(),
            self.style.currency,
            format_money(transaction.amount)
        )
    }

    pub fn home(
        &self,
        ledger: Option<&Ledger>,
        report: &MonthlyReport,
        categories: &[Category],
    ) -> Screen {
        let ledger_name = ledger.map(|l| l.name.as_str()).unwrap_or("No ledger");
        let title = match ledger {
            Some(ledger) => format!(
                "{}{} | {}",
                self.icon(&ledger.icon),
                ledger_name,
                report.month.label()
            ),
            None => format!("{} | {}", ledger_name, report.month.label()),
        };

        let mut lines = vec![
            format!("Balance   {}", self.money(report.lifetime_balance)),
            format!(
                "Month     income {}   expense {}   net {}",
                self.money(report.totals.income),
                self.money(report.totals.expense),
                self.money(report.totals.balance)
            ),
        ];

        if report.is_empty() {
            lines.push(String::new());
            lines.push("No records this month. Use `add` to write one down.".into());
            return Screen { title, lines };
        }

        let mut row = 0;
        for group in &report.daily_groups {
            lines.push(String::new());
            lines.push(self.emphasize(format!(
                "{}   in {}   out {}",
                group.date.format("%Y-%m-%d %a"),
                self.money(group.total_income),
                self.money(group.total_expense)
            )));
            for transaction in &group.transactions {
                row += 1;
                lines.push(self.transaction_row(row, transaction, categories));
            }
        }

        Screen { title, lines }
    }

    pub fn transaction_row(
        &self,
        row: usize,
        transaction: &Transaction,
        categories: &[Category],
    ) -> String {
        let label = CategoryService::label(categories, &transaction.category_id);
        let name = self.paint(
            format!("{:<14}", label.name),
            icons::token_color(&label.color),
        );
        let note: String = transaction.note.chars().take(NOTE_WIDTH).collect();
        let amount = format!("{:>14}", self.signed_money(transaction));
        let amount = if transaction.is_income() {
            self.paint(amount, Color::Green)
        } else {
            amount
        };
        format!(
            "{:>3}. {}{} {:<width$} {}",
            row,
            self.icon(&label.icon),
            name,
            note,
            amount,
            width = NOTE_WIDTH
        )
    }

    pub fn stats(&self, report: &MonthlyReport) -> Screen {
        let title = format!("Stats | {}", report.month.label());
        let mut lines = vec![
            format!(
                "Income {}   Expense {}   Balance {}",
                self.money(report.totals.income),
                self.money(report.totals.expense),
                self.money(report.totals.balance)
            ),
            String::new(),
            self.emphasize("Expense ranking".to_string()),
        ];

        if report.ranking.is_empty() {
            lines.push("No expenses this month.".into());
            return Screen { title, lines };
        }

        for (rank, share) in report.ranking.iter().enumerate() {
            let filled = ((share.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            let bar = match icons::hex_color(share.chart_color) {
                Some(color) => self.paint(bar, color),
                None => bar,
            };
            lines.push(format!(
                "{:>3}. {}{:<14} {} {:>6}  {}",
                rank + 1,
                self.icon(&share.icon),
                share.name,
                bar,
                format_percent(share.percentage),
                self.money(share.amount)
            ));
        }

        Screen { title, lines }
    }

    pub fn ledgers(
        &self,
        ledgers: &[Ledger],
        active_id: &str,
        transactions: &[Transaction],
    ) -> Screen {
        let mut lines = Vec::with_capacity(ledgers.len() + 1);
        for (index, ledger) in ledgers.iter().enumerate() {
            let marker = if ledger.id == active_id { "*" } else { " " };
            let balance = SummaryService::lifetime_balance(transactions, &ledger.id);
            let name = self.paint(
                format!("{:<16}", ledger.name),
                icons::token_color(&ledger.cover_color),
            );
            lines.push(format!(
                " {} {}. {}{} ({})  balance {}",
                marker,
                index + 1,
                self.icon(&ledger.icon),
                name,
                ledger.id,
                self.money(balance)
            ));
        }
        lines.push("Use `use <id|number>` to switch, `back` to return.".into());
        Screen {
            title: "Ledgers".into(),
            lines,
        }
    }

    pub fn categories(&self, categories: &[&Category]) -> Screen {
        let lines = categories
            .iter()
            .map(|category| {
                format!(
                    "  {:<4} {}{:<14} {}",
                    category.id,
                    self.icon(&category.icon),
                    category.name,
                    category.kind
                )
            })
            .collect();
        Screen {
            title: "Categories".into(),
            lines,
        }
    }

    /// One-line preview of the entry form, e.g. `-50 | Dining | 2024-03-05`.
    pub fn entry_summary(&self, form: &EntryForm, categories: &[Category]) -> String {
        let category = form
            .category_id()
            .map(|id| CategoryService::label(categories, id).name)
            .unwrap_or_else(|| "(no category)".into());
        let mut summary = format!(
            "{}{} | {} | {}",
            self.style.currency,
            form.display_amount(),
            category,
            form.date()
        );
        if !form.note().is_empty() {
            summary.push_str(" | ");
            summary.push_str(form.note());
        }
        summary
    }

    fn icon(&self, name: &str) -> String {
        if self.style.icons {
            format!("{} ", icons::glyph(name))
        } else {
            String::new()
        }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if !self.style.color {
            return text;
        }
        if self.style.high_contrast {
            return text.bold().to_string();
        }
        text.color(color).to_string()
    }

    fn emphasize(&self, text: String) -> String {
        if self.style.color {
            text.bold().to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use miao_core::{SummaryService, YearMonth};
    use miao_domain::{
        seed::{default_categories, default_ledgers},
        TransactionDraft, TransactionType,
    };

    fn sample(
        kind: TransactionType,
        amount: f64,
        category: &str,
        day: u32,
        hour: u32,
    ) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap();
        Transaction::from_draft(TransactionDraft::new(kind, amount, category, date), "l1", created)
    }

    fn march_report(transactions: &[Transaction]) -> MonthlyReport {
        SummaryService::report(
            transactions,
            &default_categories(),
            "l1",
            YearMonth::new(2024, 3).unwrap(),
        )
    }

    #[test]
    fn money_puts_sign_before_currency() {
        let style = RenderStyle::plain("¥");
        let renderer = ScreenRenderer::new(&style);
        assert_eq!(renderer.money(1950.0), "¥1,950.00");
        assert_eq!(renderer.money(-50.0), "-¥50.00");
    }

    #[test]
    fn home_lists_days_newest_first_with_row_numbers() {
        let transactions = vec![
            sample(TransactionType::Expense, 50.0, "c1", 5, 9),
            sample(TransactionType::Income, 2000.0, "c9", 1, 8),
        ];
        let report = march_report(&transactions);
        let style = RenderStyle::plain("¥");
        let ledgers = default_ledgers();
        let screen =
            ScreenRenderer::new(&style).home(ledgers.first(), &report, &default_categories());

        assert_eq!(screen.title, "Daily Ledger | March 2024");
        assert!(screen.lines[0].contains("¥1,950.00"));
        let body = screen.lines.join("\n");
        let first_day = body.find("2024-03-05").unwrap();
        let second_day = body.find("2024-03-01").unwrap();
        assert!(first_day < second_day);
        assert!(body.contains("  1. Dining"));
        assert!(body.contains("  2. Salary"));
        assert!(body.contains("-¥50.00"));
        assert!(body.contains("+¥2,000.00"));
    }

    #[test]
    fn empty_month_says_so() {
        let report = march_report(&[]);
        let style = RenderStyle::plain("$");
        let renderer = ScreenRenderer::new(&style);
        let home = renderer.home(None, &report, &default_categories());
        assert!(home.lines.iter().any(|line| line.contains("No records")));
        let stats = renderer.stats(&report);
        assert!(stats.lines.iter().any(|line| line.contains("No expenses")));
    }

    #[test]
    fn stats_shows_full_bar_for_single_category() {
        let transactions = vec![sample(TransactionType::Expense, 80.0, "c3", 2, 9)];
        let style = RenderStyle::plain("¥");
        let screen = ScreenRenderer::new(&style).stats(&march_report(&transactions));
        let row = screen
            .lines
            .iter()
            .find(|line| line.contains("Shopping"))
            .unwrap();
        assert!(row.contains(&"█".repeat(BAR_WIDTH)));
        assert!(row.contains("100.0%"));
    }

    #[test]
    fn dangling_category_row_uses_placeholder() {
        let transactions = vec![sample(TransactionType::Expense, 5.0, "c404", 2, 9)];
        let style = RenderStyle::plain("¥");
        let row =
            ScreenRenderer::new(&style).transaction_row(1, &transactions[0], &default_categories());
        assert!(row.contains("Unknown"));
    }

    #[test]
    fn ledgers_mark_the_active_one() {
        let style = RenderStyle::plain("¥");
        let screen = ScreenRenderer::new(&style).ledgers(&default_ledgers(), "l2", &[]);
        assert!(screen.lines[0].starts_with("   1. Daily Ledger"));
        assert!(screen.lines[1].starts_with(" * 2. Travel Fund"));
    }

    #[test]
    fn display_order_flattens_groups() {
        let transactions = vec![
            sample(TransactionType::Expense, 1.0, "c1", 5, 9),
            sample(TransactionType::Expense, 2.0, "c1", 5, 12),
            sample(TransactionType::Expense, 3.0, "c1", 7, 9),
        ];
        let report = march_report(&transactions);
        let amounts: Vec<f64> = display_order(&report).iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![3.0, 2.0, 1.0]);
    }
}
