// ==========================================
// Excel 工作簿导入测试
// ==========================================
// 夹具: tests/fixtures/dead_stock{1,2,3}.xlsx
// 覆盖: 表头清洗、数值清洗、日期单元格、三个工作簿合并
// ==========================================

use dead_stock_report::app::run_once;
use dead_stock_report::config::ReportConfig;
use dead_stock_report::domain::{CellValue, Column};
use dead_stock_report::engine::{CategorySelector, DashboardSnapshot};
use dead_stock_report::importer::load;
use std::path::PathBuf;

fn fixtures() -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    ["dead_stock1.xlsx", "dead_stock2.xlsx", "dead_stock3.xlsx"]
        .iter()
        .map(|name| dir.join(name))
        .collect()
}

fn find<'a>(
    records: &'a [dead_stock_report::ItemRecord],
    name: &str,
) -> &'a dead_stock_report::ItemRecord {
    records
        .iter()
        .find(|r| r.cell(Column::ItemName).map(|c| c.to_string()) == Some(name.to_string()))
        .unwrap()
}

#[test]
fn test_three_workbooks_merge() {
    dead_stock_report::logging::init_test();

    let outcome = load(&fixtures()).unwrap();

    assert_eq!(outcome.collection.len(), 9);

    // " Item Name" / "Category " 清洗后与其它工作簿的表头合并为同一列
    let schema = outcome.collection.schema();
    assert_eq!(schema.headers().len(), 8);
    assert!(schema.has(Column::ItemName));
    assert!(schema.has(Column::Category));
    assert!(schema.unknown_headers().is_empty());

    // 所有行都有名称和分类
    for record in outcome.collection.records() {
        assert!(record.cell(Column::ItemName).is_some());
        assert!(record.category().is_some());
    }
}

#[test]
fn test_workbook_numeric_coercion() {
    dead_stock_report::logging::init_test();

    let outcome = load(&fixtures()).unwrap();
    let records = outcome.collection.records();

    // 文本 "N/A" → 0，计为无效
    let musk = find(records, "Musk White");
    assert_eq!(musk.number(Column::Stock), Some(0.0));

    // 错误单元格 → 空值 → 0，计为缺失
    let amber = find(records, "Amber");
    assert_eq!(amber.number(Column::Stock), Some(0.0));

    // 负库存保留原值，绘图用值截断为 0
    let rose = find(records, "Rose");
    assert_eq!(rose.number(Column::Stock), Some(-4.0));
    assert_eq!(rose.stock_clean, Some(0.0));

    let stock = outcome.coercion.columns.get(&Column::Stock).unwrap();
    assert_eq!(stock.invalid, 1);
    assert_eq!(stock.missing, 1);

    // Stock Value 全部可解析，不进入统计
    assert!(outcome.coercion.columns.get(&Column::StockValue).is_none());
}

#[test]
fn test_workbook_date_cells() {
    let outcome = load(&fixtures()).unwrap();
    let records = outcome.collection.records();

    assert_eq!(
        find(records, "Oud Royal").cell(Column::LpDate),
        Some(&CellValue::Date(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        ))
    );
    assert_eq!(
        find(records, "Musk White").cell(Column::LpDate),
        Some(&CellValue::Date(
            chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        ))
    );
}

#[test]
fn test_workbook_category_summary() {
    let outcome = load(&fixtures()).unwrap();

    let oud = DashboardSnapshot::build(&outcome.collection, &CategorySelector::parse("Oud"));
    assert_eq!(oud.kpis.item_count, 4);
    assert_eq!(oud.kpis.total_stock_value, Some(1588.5));
    assert_eq!(
        oud.categories,
        Some(vec![
            "Attar".to_string(),
            "Musk".to_string(),
            "Oud".to_string()
        ])
    );

    let all = DashboardSnapshot::build(&outcome.collection, &CategorySelector::All);
    let breakdown = all.breakdown.unwrap();
    let oud_total = breakdown.iter().find(|t| t.category == "Oud").unwrap();
    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[0].category, "Attar");
    assert_eq!(oud_total.stock_value, 1588.5);
}

#[test]
fn test_workbook_run_once_exports_dates() {
    dead_stock_report::logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        input_files: fixtures(),
        output_dir: dir.path().to_path_buf(),
        ..ReportConfig::default()
    };

    let summary = run_once(&config, &CategorySelector::parse("Oud")).unwrap();
    assert_eq!(summary.total_rows, 9);
    assert_eq!(summary.item_count, 4);

    let mut reader = csv::Reader::from_path(&summary.written.csv_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let date_idx = headers.iter().position(|h| h == "LP Date").unwrap();
    let name_idx = headers.iter().position(|h| h == "Item Name").unwrap();

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[0][name_idx], "Oud Royal");
    assert_eq!(&rows[0][date_idx], "2024-01-05");

    let html = std::fs::read_to_string(&summary.written.html_path).unwrap();
    assert!(html.contains("Oud Royal"));
    assert!(!html.contains("Musk White"));
}
