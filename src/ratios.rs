//! Derived financial ratios.
//!
//! Every ratio is computed from up to twenty raw inputs, each resolved from the fact
//! table by canonical tag and converted with [`parse_number`]; a missing or non-numeric
//! fact counts as `0`. A ratio whose guard fails is absent and renders as an empty cell.
//! So does a ratio that evaluates to exactly `0`, because [`format_number`] renders zero
//! as empty: a genuine zero cannot be told apart from "not computed" in the output.
//!
//! The guards are not uniform. Some require strictly positive inputs, others only
//! non-zero ones (cash flows are routinely negative):
//!
//! ```text
//! OperatingIncomeRatio     sales > 0
//! OperatingCashFlowRatio   sales > 0 && opCF != 0
//! FreeCashFlow             opCF != 0 && invCF != 0
//! WorkingCapital           (always computed)
//! ```
use crate::catalog::CanonicalTag;
use crate::parsing::facts::FactTable;
use crate::parsing::utils::{format_number, parse_number};
use crate::resolve::TagResolver;
use std::fmt;

const DAYS_PER_YEAR: f64 = 365.0;
const RATIO_COUNT: usize = 26;

/// One of the fixed derived ratios, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ratio {
    ResearchAndDevelopmentExpenseRatio,
    OperatingIncomeRatio,
    OrdinaryIncomeRatio,
    ProfitLossRatio,
    GrossProfitRatio,
    TotalAssetsTurnover,
    NetAssetsTurnover,
    OperatingCashFlowRatio,
    InvestmentCashFlowRatio,
    NetSalesPerEmployee,
    OperatingIncomePerEmployee,
    WorkingCapital,
    DebtRatio,
    FixedRatio,
    FixedLongTermCoverageRatio,
    CurrentRatio,
    QuickRatio,
    AccountsReceivableTurnoverDays,
    InventoryTurnoverDays,
    PropertyPlantAndEquipmentTurnover,
    TotalCapitalTurnover,
    OperatingCapitalTurnover,
    DividendPayoutRatio,
    DividendYield,
    FreeCashFlow,
    CashFlowCoverageRatio,
}

impl Ratio {
    /// All ratios in CSV column order.
    pub const ALL: [Ratio; RATIO_COUNT] = [
        Ratio::ResearchAndDevelopmentExpenseRatio,
        Ratio::OperatingIncomeRatio,
        Ratio::OrdinaryIncomeRatio,
        Ratio::ProfitLossRatio,
        Ratio::GrossProfitRatio,
        Ratio::TotalAssetsTurnover,
        Ratio::NetAssetsTurnover,
        Ratio::OperatingCashFlowRatio,
        Ratio::InvestmentCashFlowRatio,
        Ratio::NetSalesPerEmployee,
        Ratio::OperatingIncomePerEmployee,
        Ratio::WorkingCapital,
        Ratio::DebtRatio,
        Ratio::FixedRatio,
        Ratio::FixedLongTermCoverageRatio,
        Ratio::CurrentRatio,
        Ratio::QuickRatio,
        Ratio::AccountsReceivableTurnoverDays,
        Ratio::InventoryTurnoverDays,
        Ratio::PropertyPlantAndEquipmentTurnover,
        Ratio::TotalCapitalTurnover,
        Ratio::OperatingCapitalTurnover,
        Ratio::DividendPayoutRatio,
        Ratio::DividendYield,
        Ratio::FreeCashFlow,
        Ratio::CashFlowCoverageRatio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ratio::ResearchAndDevelopmentExpenseRatio => "ResearchAndDevelopmentExpenseRatio",
            Ratio::OperatingIncomeRatio => "OperatingIncomeRatio",
            Ratio::OrdinaryIncomeRatio => "OrdinaryIncomeRatio",
            Ratio::ProfitLossRatio => "ProfitLossRatio",
            Ratio::GrossProfitRatio => "GrossProfitRatio",
            Ratio::TotalAssetsTurnover => "TotalAssetsTurnover",
            Ratio::NetAssetsTurnover => "NetAssetsTurnover",
            Ratio::OperatingCashFlowRatio => "OperatingCashFlowRatio",
            Ratio::InvestmentCashFlowRatio => "InvestmentCashFlowRatio",
            Ratio::NetSalesPerEmployee => "NetSalesPerEmployee",
            Ratio::OperatingIncomePerEmployee => "OperatingIncomePerEmployee",
            Ratio::WorkingCapital => "WorkingCapital",
            Ratio::DebtRatio => "DebtRatio",
            Ratio::FixedRatio => "FixedRatio",
            Ratio::FixedLongTermCoverageRatio => "FixedLongTermCoverageRatio",
            Ratio::CurrentRatio => "CurrentRatio",
            Ratio::QuickRatio => "QuickRatio",
            Ratio::AccountsReceivableTurnoverDays => "AccountsReceivableTurnoverDays",
            Ratio::InventoryTurnoverDays => "InventoryTurnoverDays",
            Ratio::PropertyPlantAndEquipmentTurnover => "PropertyPlantAndEquipmentTurnover",
            Ratio::TotalCapitalTurnover => "TotalCapitalTurnover",
            Ratio::OperatingCapitalTurnover => "OperatingCapitalTurnover",
            Ratio::DividendPayoutRatio => "DividendPayoutRatio",
            Ratio::DividendYield => "DividendYield",
            Ratio::FreeCashFlow => "FreeCashFlow",
            Ratio::CashFlowCoverageRatio => "CashFlowCoverageRatio",
        }
    }

    /// CSV header label.
    pub fn label(&self) -> &'static str {
        match self {
            Ratio::ResearchAndDevelopmentExpenseRatio => "研究開発費比率",
            Ratio::OperatingIncomeRatio => "営業利益率",
            Ratio::OrdinaryIncomeRatio => "経常利益率",
            Ratio::ProfitLossRatio => "当期純利益率",
            Ratio::GrossProfitRatio => "売上高総利益率",
            Ratio::TotalAssetsTurnover => "総資産回転率",
            Ratio::NetAssetsTurnover => "自己資本回転率",
            Ratio::OperatingCashFlowRatio => "営業CF比率",
            Ratio::InvestmentCashFlowRatio => "投資CF比率",
            Ratio::NetSalesPerEmployee => "従業員一人当たり売上高",
            Ratio::OperatingIncomePerEmployee => "従業員一人当たり営業利益",
            Ratio::WorkingCapital => "運転資本",
            Ratio::DebtRatio => "負債比率",
            Ratio::FixedRatio => "固定比率",
            Ratio::FixedLongTermCoverageRatio => "固定長期適合率",
            Ratio::CurrentRatio => "流動比率",
            Ratio::QuickRatio => "当座比率",
            Ratio::AccountsReceivableTurnoverDays => "売上債権回転日数",
            Ratio::InventoryTurnoverDays => "棚卸資産回転日数",
            Ratio::PropertyPlantAndEquipmentTurnover => "有形固定資産回転率",
            Ratio::TotalCapitalTurnover => "総資本回転率",
            Ratio::OperatingCapitalTurnover => "営業資本回転率",
            Ratio::DividendPayoutRatio => "配当性向",
            Ratio::DividendYield => "配当利回り（資本金比）",
            Ratio::FreeCashFlow => "フリーキャッシュフロー",
            Ratio::CashFlowCoverageRatio => "キャッシュフロー充足率",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw numeric inputs of the ratio engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialInputs {
    pub net_sales: f64,
    pub gross_profit: f64,
    pub operating_income: f64,
    pub ordinary_income: f64,
    pub profit_loss: f64,
    pub total_assets: f64,
    pub net_assets: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub noncurrent_assets: f64,
    pub liabilities: f64,
    pub capital_stock: f64,
    pub operating_cash_flow: f64,
    pub investment_cash_flow: f64,
    pub research_and_development: f64,
    pub employees: f64,
    pub dividends: f64,
    pub receivables: f64,
    pub inventories: f64,
    pub property_plant_and_equipment: f64,
}

impl FinancialInputs {
    /// Resolves every input from `table`; missing facts become `0`.
    pub fn from_table(table: &FactTable, resolver: &TagResolver) -> Self {
        let value = |name: &'static str| {
            resolver
                .resolve(table, &CanonicalTag::new(name, name))
                .map(parse_number)
                .unwrap_or(0.0)
        };

        FinancialInputs {
            net_sales: value("jppfs_cor:NetSales"),
            gross_profit: value("jppfs_cor:GrossProfit"),
            operating_income: value("jppfs_cor:OperatingIncome"),
            ordinary_income: value("jppfs_cor:OrdinaryIncome"),
            profit_loss: value("jppfs_cor:ProfitLoss"),
            total_assets: value("jppfs_cor:TotalAssets"),
            net_assets: value("jppfs_cor:NetAssets"),
            current_assets: value("jppfs_cor:CurrentAssets"),
            current_liabilities: value("jppfs_cor:CurrentLiabilities"),
            noncurrent_assets: value("jppfs_cor:NoncurrentAssets"),
            liabilities: value("jppfs_cor:Liabilities"),
            capital_stock: value("jppfs_cor:CapitalStock"),
            operating_cash_flow: value("jppfs_cor:NetCashProvidedByUsedInOperatingActivities"),
            investment_cash_flow: value("jppfs_cor:NetCashProvidedByUsedInInvestmentActivities"),
            research_and_development: value("jppfs_cor:ResearchAndDevelopmentExpenses"),
            employees: value("jpcrp_cor:NumberOfEmployees"),
            dividends: value("jppfs_cor:DividendsFromSurplus"),
            receivables: value("jppfs_cor:NotesAndAccountsReceivableTrade"),
            inventories: value("jppfs_cor:Inventories"),
            property_plant_and_equipment: value("jppfs_cor:PropertyPlantAndEquipment"),
        }
    }
}

/// Computed ratios of one filing; absent entries failed their guard.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRatios {
    values: [Option<f64>; RATIO_COUNT],
}

impl DerivedRatios {
    pub fn get(&self, ratio: Ratio) -> Option<f64> {
        self.values[ratio.index()]
    }

    /// The formatted cell: two decimals, or empty when absent or zero.
    pub fn cell(&self, ratio: Ratio) -> String {
        self.get(ratio).map(format_number).unwrap_or_default()
    }

    /// All cells in [`Ratio::ALL`] order.
    pub fn cells(&self) -> Vec<String> {
        Ratio::ALL.iter().map(|ratio| self.cell(*ratio)).collect()
    }

    /// Ratios that were computed, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Ratio, f64)> + '_ {
        Ratio::ALL
            .iter()
            .filter_map(|ratio| self.get(*ratio).map(|value| (*ratio, value)))
    }
}

/// Stateless calculator for [`DerivedRatios`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioEngine;

impl RatioEngine {
    pub fn new() -> Self {
        RatioEngine
    }

    /// Resolves the inputs from `table` and computes every ratio.
    pub fn compute_table(&self, table: &FactTable, resolver: &TagResolver) -> DerivedRatios {
        self.compute(&FinancialInputs::from_table(table, resolver))
    }

    /// Computes every ratio from already-resolved inputs. Never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edinetkit::{FinancialInputs, Ratio, RatioEngine};
    ///
    /// let inputs = FinancialInputs {
    ///     net_sales: 1000.0,
    ///     operating_income: 100.0,
    ///     ..Default::default()
    /// };
    /// let ratios = RatioEngine::new().compute(&inputs);
    ///
    /// assert_eq!(ratios.cell(Ratio::OperatingIncomeRatio), "10.00");
    /// assert_eq!(ratios.get(Ratio::DebtRatio), None);
    /// ```
    pub fn compute(&self, inputs: &FinancialInputs) -> DerivedRatios {
        let mut values = [None; RATIO_COUNT];
        for ratio in Ratio::ALL {
            values[ratio.index()] = evaluate(ratio, inputs);
        }
        DerivedRatios { values }
    }
}

fn when(guard: bool, value: impl FnOnce() -> f64) -> Option<f64> {
    if guard { Some(value()) } else { None }
}

fn evaluate(ratio: Ratio, i: &FinancialInputs) -> Option<f64> {
    let sales = i.net_sales;
    let working_capital = i.current_assets - i.current_liabilities;
    let quick_assets = i.current_assets - i.inventories;

    match ratio {
        Ratio::ResearchAndDevelopmentExpenseRatio => when(
            sales > 0.0 && i.research_and_development > 0.0,
            || i.research_and_development / sales * 100.0,
        ),
        Ratio::OperatingIncomeRatio => when(sales > 0.0, || i.operating_income / sales * 100.0),
        Ratio::OrdinaryIncomeRatio => when(sales > 0.0, || i.ordinary_income / sales * 100.0),
        Ratio::ProfitLossRatio => when(sales > 0.0, || i.profit_loss / sales * 100.0),
        Ratio::GrossProfitRatio => when(sales > 0.0, || i.gross_profit / sales * 100.0),
        Ratio::TotalAssetsTurnover | Ratio::TotalCapitalTurnover => {
            when(i.total_assets > 0.0 && sales > 0.0, || sales / i.total_assets)
        }
        Ratio::NetAssetsTurnover => {
            when(i.net_assets > 0.0 && sales > 0.0, || sales / i.net_assets)
        }
        Ratio::OperatingCashFlowRatio => when(sales > 0.0 && i.operating_cash_flow != 0.0, || {
            i.operating_cash_flow / sales * 100.0
        }),
        Ratio::InvestmentCashFlowRatio => when(
            i.total_assets > 0.0 && i.investment_cash_flow != 0.0,
            || i.investment_cash_flow / i.total_assets * 100.0,
        ),
        Ratio::NetSalesPerEmployee => {
            when(i.employees > 0.0 && sales > 0.0, || sales / i.employees)
        }
        Ratio::OperatingIncomePerEmployee => when(
            i.employees > 0.0 && i.operating_income != 0.0,
            || i.operating_income / i.employees,
        ),
        Ratio::WorkingCapital => Some(working_capital),
        Ratio::DebtRatio => when(i.total_assets > 0.0, || i.liabilities / i.total_assets * 100.0),
        // Both use noncurrent assets over net assets; the long-term coverage variant does
        // not add noncurrent liabilities to the denominator.
        Ratio::FixedRatio | Ratio::FixedLongTermCoverageRatio => {
            when(i.net_assets > 0.0, || i.noncurrent_assets / i.net_assets * 100.0)
        }
        Ratio::CurrentRatio => when(i.current_liabilities > 0.0, || {
            i.current_assets / i.current_liabilities * 100.0
        }),
        Ratio::QuickRatio => when(i.current_liabilities > 0.0 && quick_assets > 0.0, || {
            quick_assets / i.current_liabilities * 100.0
        }),
        Ratio::AccountsReceivableTurnoverDays => when(sales > 0.0 && i.receivables > 0.0, || {
            i.receivables / sales * DAYS_PER_YEAR
        }),
        Ratio::InventoryTurnoverDays => when(sales > 0.0 && i.inventories > 0.0, || {
            i.inventories / sales * DAYS_PER_YEAR
        }),
        Ratio::PropertyPlantAndEquipmentTurnover => when(
            sales > 0.0 && i.property_plant_and_equipment > 0.0,
            || sales / i.property_plant_and_equipment,
        ),
        Ratio::OperatingCapitalTurnover => {
            when(working_capital > 0.0 && sales > 0.0, || sales / working_capital)
        }
        Ratio::DividendPayoutRatio => when(i.profit_loss > 0.0 && i.dividends > 0.0, || {
            i.dividends / i.profit_loss * 100.0
        }),
        Ratio::DividendYield => when(i.capital_stock > 0.0 && i.dividends > 0.0, || {
            i.dividends / i.capital_stock * 100.0
        }),
        Ratio::FreeCashFlow => when(
            i.operating_cash_flow != 0.0 && i.investment_cash_flow != 0.0,
            || i.operating_cash_flow + i.investment_cash_flow,
        ),
        Ratio::CashFlowCoverageRatio => when(
            i.operating_cash_flow != 0.0 && i.investment_cash_flow != 0.0,
            || i.operating_cash_flow / -i.investment_cash_flow * 100.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(inputs: FinancialInputs) -> DerivedRatios {
        RatioEngine::new().compute(&inputs)
    }

    #[test]
    fn test_ratio_order_and_labels() {
        assert_eq!(Ratio::ALL.len(), 26);
        assert_eq!(Ratio::ALL[0], Ratio::ResearchAndDevelopmentExpenseRatio);
        assert_eq!(Ratio::ALL[25], Ratio::CashFlowCoverageRatio);
        for (position, ratio) in Ratio::ALL.iter().enumerate() {
            assert_eq!(ratio.index(), position, "{} out of order", ratio);
        }
        assert_eq!(Ratio::DividendYield.label(), "配当利回り（資本金比）");
    }

    #[test]
    fn test_profitability_ratios() {
        let ratios = compute(FinancialInputs {
            net_sales: 1_000_000.0,
            gross_profit: 300_000.0,
            operating_income: 100_000.0,
            ordinary_income: 110_000.0,
            profit_loss: 70_000.0,
            research_and_development: 50_000.0,
            ..Default::default()
        });

        assert_eq!(ratios.cell(Ratio::OperatingIncomeRatio), "10.00");
        assert_eq!(ratios.cell(Ratio::OrdinaryIncomeRatio), "11.00");
        assert_eq!(ratios.cell(Ratio::ProfitLossRatio), "7.00");
        assert_eq!(ratios.cell(Ratio::GrossProfitRatio), "30.00");
        assert_eq!(ratios.cell(Ratio::ResearchAndDevelopmentExpenseRatio), "5.00");
    }

    #[test]
    fn test_sales_guards() {
        let ratios = compute(FinancialInputs {
            operating_income: 100.0,
            total_assets: 1000.0,
            ..Default::default()
        });
        assert_eq!(ratios.get(Ratio::OperatingIncomeRatio), None);
        assert_eq!(ratios.get(Ratio::TotalAssetsTurnover), None);
        assert_eq!(ratios.cell(Ratio::OperatingIncomeRatio), "");

        // Negative sales fail the strictly-positive guard too.
        let ratios = compute(FinancialInputs {
            net_sales: -10.0,
            operating_income: 100.0,
            ..Default::default()
        });
        assert_eq!(ratios.get(Ratio::OperatingIncomeRatio), None);
    }

    #[test]
    fn test_zero_result_renders_empty() {
        let ratios = compute(FinancialInputs {
            net_sales: 1000.0,
            ..Default::default()
        });
        // Guard passes, value is 0, which formats as an empty cell.
        assert_eq!(ratios.get(Ratio::OperatingIncomeRatio), Some(0.0));
        assert_eq!(ratios.cell(Ratio::OperatingIncomeRatio), "");
        assert_eq!(ratios.cell(Ratio::WorkingCapital), "");
    }

    #[test]
    fn test_balance_sheet_ratios() {
        let ratios = compute(FinancialInputs {
            net_sales: 2000.0,
            total_assets: 1000.0,
            net_assets: 400.0,
            current_assets: 600.0,
            current_liabilities: 300.0,
            noncurrent_assets: 400.0,
            liabilities: 600.0,
            inventories: 100.0,
            receivables: 200.0,
            property_plant_and_equipment: 250.0,
            ..Default::default()
        });

        assert_eq!(ratios.cell(Ratio::WorkingCapital), "300.00");
        assert_eq!(ratios.cell(Ratio::DebtRatio), "60.00");
        assert_eq!(ratios.cell(Ratio::FixedRatio), "100.00");
        assert_eq!(ratios.cell(Ratio::FixedLongTermCoverageRatio), "100.00");
        assert_eq!(ratios.cell(Ratio::CurrentRatio), "200.00");
        assert_eq!(ratios.cell(Ratio::QuickRatio), "166.67");
        assert_eq!(ratios.cell(Ratio::AccountsReceivableTurnoverDays), "36.50");
        assert_eq!(ratios.cell(Ratio::InventoryTurnoverDays), "18.25");
        assert_eq!(ratios.cell(Ratio::PropertyPlantAndEquipmentTurnover), "8.00");
        assert_eq!(ratios.cell(Ratio::TotalAssetsTurnover), "2.00");
        assert_eq!(ratios.cell(Ratio::TotalCapitalTurnover), "2.00");
        assert_eq!(ratios.cell(Ratio::NetAssetsTurnover), "5.00");
        assert_eq!(ratios.cell(Ratio::OperatingCapitalTurnover), "6.67");
    }

    #[test]
    fn test_working_capital_is_unguarded() {
        let ratios = compute(FinancialInputs {
            current_assets: 100.0,
            current_liabilities: 250.0,
            net_sales: 1000.0,
            ..Default::default()
        });
        assert_eq!(ratios.cell(Ratio::WorkingCapital), "-150.00");
        assert_eq!(ratios.get(Ratio::OperatingCapitalTurnover), None);
        // Quick assets of 100 over liabilities of 250.
        assert_eq!(ratios.cell(Ratio::QuickRatio), "40.00");
    }

    #[test]
    fn test_quick_ratio_requires_positive_quick_assets() {
        let ratios = compute(FinancialInputs {
            current_assets: 100.0,
            inventories: 100.0,
            current_liabilities: 50.0,
            ..Default::default()
        });
        assert_eq!(ratios.get(Ratio::QuickRatio), None);
        assert_eq!(ratios.cell(Ratio::CurrentRatio), "200.00");
    }

    #[test]
    fn test_cash_flow_ratios() {
        let ratios = compute(FinancialInputs {
            net_sales: 1000.0,
            total_assets: 2000.0,
            operating_cash_flow: 150.0,
            investment_cash_flow: -50.0,
            ..Default::default()
        });

        assert_eq!(ratios.cell(Ratio::OperatingCashFlowRatio), "15.00");
        assert_eq!(ratios.cell(Ratio::InvestmentCashFlowRatio), "-2.50");
        assert_eq!(ratios.cell(Ratio::FreeCashFlow), "100.00");
        assert_eq!(ratios.cell(Ratio::CashFlowCoverageRatio), "300.00");
    }

    #[test]
    fn test_cash_flow_ratios_need_both_flows() {
        let ratios = compute(FinancialInputs {
            net_sales: 1000.0,
            operating_cash_flow: -150.0,
            ..Default::default()
        });
        assert_eq!(ratios.cell(Ratio::OperatingCashFlowRatio), "-15.00");
        assert_eq!(ratios.get(Ratio::FreeCashFlow), None);
        assert_eq!(ratios.get(Ratio::CashFlowCoverageRatio), None);
        assert_eq!(ratios.get(Ratio::InvestmentCashFlowRatio), None);
    }

    #[test]
    fn test_per_employee_and_dividends() {
        let ratios = compute(FinancialInputs {
            net_sales: 1000.0,
            operating_income: -100.0,
            employees: 10.0,
            profit_loss: 200.0,
            dividends: 50.0,
            capital_stock: 500.0,
            ..Default::default()
        });
        assert_eq!(ratios.cell(Ratio::NetSalesPerEmployee), "100.00");
        assert_eq!(ratios.cell(Ratio::OperatingIncomePerEmployee), "-10.00");
        assert_eq!(ratios.cell(Ratio::DividendPayoutRatio), "25.00");
        assert_eq!(ratios.cell(Ratio::DividendYield), "10.00");

        let ratios = compute(FinancialInputs {
            profit_loss: -200.0,
            dividends: 50.0,
            ..Default::default()
        });
        assert_eq!(ratios.get(Ratio::DividendPayoutRatio), None);
        assert_eq!(ratios.get(Ratio::NetSalesPerEmployee), None);
    }

    #[test]
    fn test_inputs_from_table() {
        let table: FactTable = [
            ("jppfs_cor:NetSales|contextRef=CurrentYearDuration|unitRef=JPY", "1,000"),
            ("jppfs_cor:OperatingIncome|contextRef=CurrentYearDuration|unitRef=JPY", "100"),
            ("jpcrp_cor:NumberOfEmployees|contextRef=CurrentYearInstant|unitRef=pure", "4"),
            ("jppfs_cor:TotalAssets|contextRef=CurrentYearInstant|unitRef=JPY", "n/a"),
        ]
        .into_iter()
        .collect();

        let inputs = FinancialInputs::from_table(&table, &TagResolver::new());
        assert_eq!(inputs.net_sales, 1000.0);
        assert_eq!(inputs.operating_income, 100.0);
        assert_eq!(inputs.employees, 4.0);
        assert_eq!(inputs.total_assets, 0.0);

        let ratios = RatioEngine::new().compute_table(&table, &TagResolver::new());
        assert_eq!(ratios.cell(Ratio::OperatingIncomeRatio), "10.00");
        assert_eq!(ratios.cell(Ratio::OperatingIncomePerEmployee), "25.00");
        assert_eq!(ratios.get(Ratio::DebtRatio), None);
    }

    #[test]
    fn test_empty_table_yields_blank_cells() {
        let ratios = RatioEngine::new().compute_table(&FactTable::default(), &TagResolver::new());
        let cells = ratios.cells();
        assert_eq!(cells.len(), 26);
        assert!(cells.iter().all(String::is_empty));
        assert_eq!(ratios.iter().map(|(r, _)| r).collect::<Vec<_>>(), vec![Ratio::WorkingCapital]);
    }
}
