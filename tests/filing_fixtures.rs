mod common;

use common::{fixture_path, read_fixture_bytes};
use edinetkit::{
    CsvSink, FactTable, FilingMeta, FilingProcessor, FilingRow, Ratio, RatioEngine, TagCatalog,
    TagResolver,
};

fn quarterly_meta() -> FilingMeta {
    FilingMeta {
        retrieval_date: "2025-07-15".to_string(),
        sec_code: "40260".to_string(),
        filer_name: "テスト化学株式会社".to_string(),
        doc_type_code: "130".to_string(),
        doc_id: "S100W001".to_string(),
    }
}

fn annual_meta() -> FilingMeta {
    FilingMeta {
        retrieval_date: "2025-06-25".to_string(),
        sec_code: "67580".to_string(),
        filer_name: "テスト電機株式会社".to_string(),
        doc_type_code: "120".to_string(),
        doc_id: "S100W010".to_string(),
    }
}

fn current_period_processor() -> FilingProcessor {
    FilingProcessor::new(TagCatalog::standard()).with_resolver(TagResolver::current_period())
}

/// The cell under the header column labelled `label`.
fn cell(processor: &FilingProcessor, row: &FilingRow, label: &str) -> String {
    let position = processor
        .header()
        .iter()
        .position(|h| h == label)
        .unwrap_or_else(|| panic!("no column {}", label));
    row.cells().swap_remove(position)
}

#[test]
fn quarterly_row() {
    let processor = current_period_processor();
    let table = FactTable::from_path(fixture_path("xbrl/quarterly.xbrl")).unwrap();
    let row = processor.process(&quarterly_meta(), &table);

    let cells = row.cells();
    assert_eq!(cells.len(), processor.header().len());
    assert_eq!(
        &cells[..5],
        &["2025-07-15", "40260", "テスト化学株式会社", "四半期報告書", "2025Q1"]
    );

    assert_eq!(cell(&processor, &row, "売上高"), "1000000000");
    assert_eq!(cell(&processor, &row, "総資産"), "2000000000");
    assert_eq!(cell(&processor, &row, "従業員数"), "50");
    assert_eq!(cell(&processor, &row, "会計基準"), "Japan GAAP");
    assert_eq!(cell(&processor, &row, "現金及び預金"), "");
}

#[test]
fn quarterly_ratios() {
    let table = FactTable::from_path(fixture_path("xbrl/quarterly.xbrl")).unwrap();
    let ratios = RatioEngine::new().compute_table(&table, &TagResolver::current_period());

    let expected = [
        (Ratio::OperatingIncomeRatio, "10.00"),
        (Ratio::OrdinaryIncomeRatio, "11.00"),
        (Ratio::ProfitLossRatio, "7.00"),
        (Ratio::GrossProfitRatio, "30.00"),
        (Ratio::TotalAssetsTurnover, "0.50"),
        (Ratio::NetAssetsTurnover, "1.00"),
        (Ratio::DebtRatio, "50.00"),
        (Ratio::FixedRatio, "120.00"),
        (Ratio::FixedLongTermCoverageRatio, "120.00"),
        (Ratio::CurrentRatio, "200.00"),
        (Ratio::QuickRatio, "175.00"),
        (Ratio::WorkingCapital, "400000000.00"),
        (Ratio::AccountsReceivableTurnoverDays, "73.00"),
        (Ratio::InventoryTurnoverDays, "36.50"),
        (Ratio::PropertyPlantAndEquipmentTurnover, "1.67"),
        (Ratio::TotalCapitalTurnover, "0.50"),
        (Ratio::OperatingCapitalTurnover, "2.50"),
        (Ratio::NetSalesPerEmployee, "20000000.00"),
        (Ratio::OperatingIncomePerEmployee, "2000000.00"),
    ];
    for (ratio, value) in expected {
        assert_eq!(ratios.cell(ratio), value, "{}", ratio);
    }

    // No R&D, cash-flow or dividend facts in a first-quarter report.
    for ratio in [
        Ratio::ResearchAndDevelopmentExpenseRatio,
        Ratio::OperatingCashFlowRatio,
        Ratio::InvestmentCashFlowRatio,
        Ratio::DividendPayoutRatio,
        Ratio::DividendYield,
        Ratio::FreeCashFlow,
        Ratio::CashFlowCoverageRatio,
    ] {
        assert_eq!(ratios.get(ratio), None, "{}", ratio);
    }
}

#[test]
fn first_match_picks_non_consolidated_sales() {
    let table = FactTable::from_path(fixture_path("xbrl/quarterly.xbrl")).unwrap();

    let first_match = FilingProcessor::new(TagCatalog::standard());
    let row = first_match.process(&quarterly_meta(), &table);
    assert_eq!(row.raw_facts[0], "600000000");
    assert_eq!(
        RatioEngine::new()
            .compute_table(&table, first_match.resolver())
            .cell(Ratio::OperatingIncomeRatio),
        "16.67"
    );

    let preferred = current_period_processor().process(&quarterly_meta(), &table);
    assert_eq!(preferred.raw_facts[0], "1000000000");
}

#[test]
fn annual_row_and_ratios() {
    let processor = current_period_processor();
    let row = processor
        .process_reader(&annual_meta(), read_fixture_bytes("xbrl/annual.xbrl").as_slice())
        .unwrap();

    assert_eq!(row.doc_type_label, "有価証券報告書");
    assert_eq!(row.period_label, "2024年度");
    assert_eq!(cell(&processor, &row, "売上高"), "5000000000");
    assert_eq!(cell(&processor, &row, "従業員数"), "1000");
    assert_eq!(cell(&processor, &row, "投資CF"), "-400000000");

    let table = FactTable::from_path(fixture_path("xbrl/annual.xbrl")).unwrap();
    let ratios = RatioEngine::new().compute_table(&table, processor.resolver());
    let expected = [
        (Ratio::ResearchAndDevelopmentExpenseRatio, "5.00"),
        (Ratio::OperatingIncomeRatio, "10.00"),
        (Ratio::OrdinaryIncomeRatio, "10.40"),
        (Ratio::ProfitLossRatio, "6.40"),
        (Ratio::GrossProfitRatio, "30.00"),
        (Ratio::NetAssetsTurnover, "1.00"),
        (Ratio::OperatingCashFlowRatio, "12.00"),
        (Ratio::InvestmentCashFlowRatio, "-5.00"),
        (Ratio::NetSalesPerEmployee, "5000000.00"),
        (Ratio::OperatingIncomePerEmployee, "500000.00"),
        (Ratio::WorkingCapital, "1500000000.00"),
        (Ratio::DebtRatio, "37.50"),
        (Ratio::FixedRatio, "100.00"),
        (Ratio::CurrentRatio, "200.00"),
        (Ratio::QuickRatio, "166.67"),
        (Ratio::AccountsReceivableTurnoverDays, "73.00"),
        (Ratio::InventoryTurnoverDays, "36.50"),
        (Ratio::PropertyPlantAndEquipmentTurnover, "2.00"),
        (Ratio::OperatingCapitalTurnover, "3.33"),
        (Ratio::DividendPayoutRatio, "30.00"),
        (Ratio::DividendYield, "9.60"),
        (Ratio::FreeCashFlow, "200000000.00"),
        (Ratio::CashFlowCoverageRatio, "150.00"),
    ];
    for (ratio, value) in expected {
        assert_eq!(ratios.cell(ratio), value, "{}", ratio);
    }
    assert!(ratios.get(Ratio::TotalAssetsTurnover).is_some());
}

#[test]
fn employees_follow_resolution_strategy() {
    let table = FactTable::from_path(fixture_path("xbrl/annual.xbrl")).unwrap();

    let ratios = RatioEngine::new().compute_table(&table, &TagResolver::new());
    assert_eq!(ratios.cell(Ratio::NetSalesPerEmployee), "12500000.00");

    let ratios = RatioEngine::new().compute_table(&table, &TagResolver::current_period());
    assert_eq!(ratios.cell(Ratio::NetSalesPerEmployee), "5000000.00");
}

#[test]
fn csv_output_round_trip() {
    let processor = current_period_processor();
    let quarterly = FactTable::from_path(fixture_path("xbrl/quarterly.xbrl")).unwrap();
    let annual = FactTable::from_path(fixture_path("xbrl/annual.xbrl")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xbrl_financial_items.csv");
    let mut sink = CsvSink::create(&path).unwrap();
    sink.write_header(&processor.header()).unwrap();
    sink.write_row(&processor.process(&quarterly_meta(), &quarterly)).unwrap();
    sink.write_row(&processor.process(&annual_meta(), &annual)).unwrap();
    sink.flush().unwrap();
    assert_eq!(sink.rows_written(), 2);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(header, processor.header());

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "40260");
    assert_eq!(&records[0][4], "2025Q1");
    assert_eq!(&records[0][5], "1000000000");
    assert_eq!(&records[1][2], "テスト電機株式会社");
    assert_eq!(&records[1][4], "2024年度");
    assert!(records.iter().all(|r| r.len() == header.len()));
}
