//! Expense breakdown by category for the spending donut chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::payments::{
    dtos::get_payments_filter_dto::UNCATEGORIZED, enums::payment_type::PaymentType,
    models::payment_summary::PaymentSummary,
};

pub static PALETTE: [&str; 7] = [
    "#4F46E5", "#EC4899", "#10B981", "#F59E0B", "#8B5CF6", "#06B6D4", "#6B7280",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub amount: f64,
    pub percentage: u32,
}

/// One arc of the donut, in degrees clockwise from the top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSegment {
    pub category: String,
    pub color: &'static str,
    pub start_deg: f64,
    pub end_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub total: f64,
    pub stats: Vec<CategoryStat>,
    pub segments: Vec<ChartSegment>,
}

impl CategoryBreakdown {
    pub fn empty() -> Self {
        Self {
            total: 0.0,
            stats: Vec::new(),
            segments: Vec::new(),
        }
    }
}

fn category_label(category: Option<&str>) -> &str {
    match category.map(str::trim) {
        Some(category) if !category.is_empty() => category,
        _ => UNCATEGORIZED,
    }
}

/// Groups the debits in `payments` by category, largest first.
pub fn category_breakdown(payments: &[PaymentSummary]) -> CategoryBreakdown {
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    let mut total = 0.0;

    for payment in payments {
        if PaymentType::from_value(&payment.payment_type) != Some(PaymentType::Debit) {
            continue;
        }

        *grouped
            .entry(category_label(payment.category.as_deref()))
            .or_insert(0.0) += payment.amount;
        total += payment.amount;
    }

    if total <= 0.0 {
        return CategoryBreakdown::empty();
    }

    let mut stats: Vec<CategoryStat> = grouped
        .into_iter()
        .map(|(category, amount)| CategoryStat {
            category: category.to_string(),
            amount,
            percentage: (amount / total * 100.0).round() as u32,
        })
        .collect();

    // stable: equal amounts keep the BTreeMap's name order
    stats.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let mut current_deg = 0.0;
    let segments = stats
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let start_deg = current_deg;
            current_deg += stat.amount / total * 360.0;

            ChartSegment {
                category: stat.category.clone(),
                color: PALETTE[index % PALETTE.len()],
                start_deg,
                end_deg: current_deg,
            }
        })
        .collect();

    CategoryBreakdown {
        total,
        stats,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(payment_type: PaymentType, category: Option<&str>, amount: f64) -> PaymentSummary {
        PaymentSummary {
            payment_type: payment_type.value().to_string(),
            category: category.map(str::to_string),
            amount,
        }
    }

    #[test]
    fn no_expenses_is_empty() {
        let rows = vec![row(PaymentType::Credit, Some("Salary"), 3000.0)];

        assert_eq!(category_breakdown(&rows), CategoryBreakdown::empty());
        assert_eq!(category_breakdown(&[]), CategoryBreakdown::empty());
    }

    #[test]
    fn groups_debits_and_sorts_by_amount() {
        let rows = vec![
            row(PaymentType::Debit, Some("Food"), 50.0),
            row(PaymentType::Debit, Some("Rent"), 300.0),
            row(PaymentType::Credit, Some("Rent"), 1000.0),
            row(PaymentType::Debit, Some("Food"), 150.0),
        ];

        let breakdown = category_breakdown(&rows);

        assert_eq!(breakdown.total, 500.0);
        assert_eq!(
            breakdown.stats,
            vec![
                CategoryStat {
                    category: "Rent".to_string(),
                    amount: 300.0,
                    percentage: 60,
                },
                CategoryStat {
                    category: "Food".to_string(),
                    amount: 200.0,
                    percentage: 40,
                },
            ]
        );
    }

    #[test]
    fn missing_or_blank_category_is_uncategorized() {
        let rows = vec![
            row(PaymentType::Debit, None, 10.0),
            row(PaymentType::Debit, Some("  "), 20.0),
            row(PaymentType::Debit, Some("Travel"), 10.0),
        ];

        let breakdown = category_breakdown(&rows);

        assert_eq!(breakdown.stats[0].category, "Uncategorized");
        assert_eq!(breakdown.stats[0].amount, 30.0);
        assert_eq!(breakdown.stats[0].percentage, 75);
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let rows = vec![
            row(PaymentType::Debit, Some("Zoo"), 10.0),
            row(PaymentType::Debit, Some("Art"), 10.0),
        ];

        let names: Vec<String> = category_breakdown(&rows)
            .stats
            .into_iter()
            .map(|s| s.category)
            .collect();

        assert_eq!(names, vec!["Art", "Zoo"]);
    }

    #[test]
    fn percentages_round_half_up() {
        let rows = vec![
            row(PaymentType::Debit, Some("A"), 1.0),
            row(PaymentType::Debit, Some("B"), 1.0),
            row(PaymentType::Debit, Some("C"), 6.0),
        ];

        let percentages: Vec<u32> = category_breakdown(&rows)
            .stats
            .iter()
            .map(|s| s.percentage)
            .collect();

        // 75%, 12.5%, 12.5%
        assert_eq!(percentages, vec![75, 13, 13]);
    }

    #[test]
    fn segments_are_contiguous_and_close_the_ring() {
        let rows: Vec<PaymentSummary> = (0..9)
            .map(|i| row(PaymentType::Debit, Some(&format!("c{}", i)), (i + 1) as f64))
            .collect();

        let breakdown = category_breakdown(&rows);
        let segments = &breakdown.segments;

        assert_eq!(segments.len(), 9);
        assert_eq!(segments[0].start_deg, 0.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_deg, pair[1].start_deg);
        }
        assert!((segments[8].end_deg - 360.0).abs() < 1e-9);

        // palette wraps after seven colours
        assert_eq!(segments[0].color, PALETTE[0]);
        assert_eq!(segments[7].color, PALETTE[0]);
        assert_eq!(segments[8].color, PALETTE[1]);
    }
}
