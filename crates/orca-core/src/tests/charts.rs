use super::rec;
use crate::aggregate::OTHERS;
use crate::charts::{
    BarChartOptions, BubbleChartOptions, HeatmapOptions, bar_table, bubble_table, heatmap_table,
};
use crate::domain::CategoryDomain;
use crate::record::{Record, Role};

fn draft() -> Vec<Record> {
    vec![
        rec(1963, 1, "CA", "C", 120),
        rec(1970, 2, "CA", "D", 80),
        rec(1971, 3, "US", "RW", 60),
        rec(1985, 4, "US", "G", 0),
        rec(1992, 5, "SE", "LW", 45),
        rec(2003, 6, "FI", "D", 30),
        rec(2011, 7, "RU", "C", 97),
        rec(2015, 8, "CZ", "C", 12),
        rec(2020, 9, "SK", "RW", 5),
        rec(1999, 10, "DE", "F", 7),
    ]
}

#[test]
fn bar_table_covers_every_decade_and_domain_label() {
    let records = draft();
    let domain = CategoryDomain::from_records(&records, 7);
    let table = bar_table(&records, &domain, &BarChartOptions::default());

    // DE ("F") carries no role, so 1999 never produces a row.
    assert_eq!(
        table.row_labels,
        [
            "1960-1969",
            "1970-1979",
            "1980-1989",
            "1990-1999",
            "2000-2009",
            "2010-2019",
            "2020-2022"
        ]
    );
    assert_eq!(table.col_labels, domain.labels());
    for row in &table.values {
        assert_eq!(row.len(), table.col_labels.len());
    }
    assert_eq!(table.get("1960-1969", "CA"), Some(120));
    assert_eq!(table.get("1970-1979", "CA"), Some(80));
    assert_eq!(table.get("1970-1979", "US"), Some(60));
    // Densified cell, never missing.
    assert_eq!(table.get("1980-1989", "SE"), Some(0));
}

#[test]
fn bar_table_role_filter_drops_other_positions() {
    let records = draft();
    let domain = CategoryDomain::from_records(&records, 7);
    let opts = BarChartOptions {
        roles: vec![Role::Goalie],
        ..BarChartOptions::default()
    };
    let table = bar_table(&records, &domain, &opts);

    assert_eq!(table.row_labels, ["1980-1989"]);
    assert_eq!(table.get("1980-1989", "US"), Some(0));
    assert_eq!(table.total(), 0);
}

#[test]
fn bubble_table_reduces_nationalities_and_counts_groups() {
    let records = draft();
    let table = bubble_table(&records, &BubbleChartOptions::default());

    assert_eq!(table.row_labels.len(), 8);
    assert_eq!(table.row_labels.last().map(String::as_str), Some(OTHERS));
    // 10 distinct years, 6 groups -> runs of 2.
    assert_eq!(table.col_labels.len(), 5);
    assert_eq!(table.col_labels[0], "1963-1970");

    // Every record lands in exactly one cell.
    assert_eq!(table.total(), records.len() as u64);
    let totals = table.row_totals();
    assert_eq!(totals.iter().sum::<u64>(), records.len() as u64);
}

#[test]
fn heatmap_table_spans_the_whole_period() {
    let records = draft();
    let opts = HeatmapOptions {
        period: (2000, 2009),
        ranks: (1, 60),
        classes: 10,
    };
    let table = heatmap_table(&records, &opts);

    // All ten period years appear even though only 2003 has data.
    assert_eq!(table.row_labels.len(), 10);
    assert_eq!(table.row_labels[0], "2000");
    assert_eq!(table.row_labels[3], "2003");
    // Only one record in range (FI 2003, 30 points), so classes span [0, 30].
    assert_eq!(table.col_labels[0], "0-3");
    assert_eq!(table.total(), 1);
    assert_eq!(table.get("2003", "28-30"), Some(1));
}

#[test]
fn heatmap_rank_window_excludes_late_picks() {
    let records = vec![
        rec(2001, 5, "CA", "C", 50),
        rec(2001, 61, "CA", "C", 90),
    ];
    let opts = HeatmapOptions {
        period: (2000, 2009),
        ranks: (1, 60),
        classes: 10,
    };
    let table = heatmap_table(&records, &opts);

    // The 61st pick is outside the window; max comes from the kept record.
    assert_eq!(table.total(), 1);
    assert_eq!(table.col_labels.last().map(String::as_str), Some("46-50"));
}

#[test]
fn heatmap_with_no_matching_records_is_all_zero() {
    let records = draft();
    let opts = HeatmapOptions {
        period: (2030, 2035),
        ranks: (1, 60),
        classes: 10,
    };
    let table = heatmap_table(&records, &opts);
    assert_eq!(table.row_labels.len(), 6);
    assert_eq!(table.col_labels, ["0-0"]);
    assert_eq!(table.total(), 0);
}
