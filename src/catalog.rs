//! The ordered catalog of financial line items extracted from every filing.
//!
//! Each entry pairs a namespaced XBRL concept name with the Japanese column label used
//! in the CSV header. The order of the catalog is the order of the output columns, so
//! changing it changes the file format.
//!
//! Only the local part of the name (after the namespace prefix) takes part in matching;
//! the prefix documents which EDINET taxonomy the concept usually comes from:
//!
//! - `jppfs_cor` - financial statements (balance sheet, income statement, cash flows)
//! - `jpcrp_cor` - corporate disclosure (summary of business results, employees)
//! - `jpdei_cor` - document and entity information

/// One business line item the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalTag {
    /// Namespaced concept name, e.g. `jppfs_cor:NetSales`.
    pub name: &'static str,
    /// CSV header label, e.g. `売上高`.
    pub label: &'static str,
}

impl CanonicalTag {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label }
    }

    /// The concept name without its namespace prefix.
    ///
    /// This is the segment after the first `:`; names without a prefix are returned as-is.
    pub fn local_name(&self) -> &'static str {
        match self.name.split(':').nth(1) {
            Some(local) => local,
            None => self.name,
        }
    }
}

const STANDARD_TAGS: &[CanonicalTag] = &[
    // Core statements
    CanonicalTag::new("jppfs_cor:NetSales", "売上高"),
    CanonicalTag::new("jppfs_cor:GrossProfit", "売上総利益"),
    CanonicalTag::new("jppfs_cor:OperatingIncome", "営業利益"),
    CanonicalTag::new("jppfs_cor:OrdinaryIncome", "経常利益"),
    CanonicalTag::new("jppfs_cor:IncomeBeforeIncomeTaxes", "税引前当期純利益"),
    CanonicalTag::new("jppfs_cor:ProfitLoss", "当期純利益"),
    CanonicalTag::new(
        "jpcrp_cor:BasicEarningsLossPerShareSummaryOfBusinessResults",
        "1株当たり当期純利益",
    ),
    CanonicalTag::new("jppfs_cor:TotalAssets", "総資産"),
    CanonicalTag::new("jppfs_cor:CurrentAssets", "流動資産"),
    CanonicalTag::new("jppfs_cor:NoncurrentAssets", "固定資産"),
    CanonicalTag::new("jppfs_cor:Liabilities", "総負債"),
    CanonicalTag::new("jppfs_cor:CurrentLiabilities", "流動負債"),
    CanonicalTag::new("jppfs_cor:NoncurrentLiabilities", "固定負債"),
    CanonicalTag::new("jppfs_cor:NetAssets", "純資産"),
    CanonicalTag::new("jppfs_cor:CapitalStock", "資本金"),
    CanonicalTag::new("jppfs_cor:RetainedEarnings", "利益剰余金"),
    CanonicalTag::new("jppfs_cor:NetCashProvidedByUsedInOperatingActivities", "営業CF"),
    CanonicalTag::new("jppfs_cor:NetCashProvidedByUsedInInvestmentActivities", "投資CF"),
    CanonicalTag::new("jppfs_cor:NetCashProvidedByUsedInFinancingActivities", "財務CF"),
    CanonicalTag::new("jppfs_cor:CashAndCashEquivalents", "現金及び現金同等物"),
    CanonicalTag::new(
        "jpcrp_cor:NetAssetsPerShareSummaryOfBusinessResults",
        "1株当たり純資産",
    ),
    CanonicalTag::new(
        "jpcrp_cor:EquityToAssetRatioSummaryOfBusinessResults",
        "自己資本比率",
    ),
    CanonicalTag::new("jppfs_cor:DividendsFromSurplus", "配当金"),
    // Company information
    CanonicalTag::new("jpcrp_cor:NumberOfEmployees", "従業員数"),
    CanonicalTag::new("jppfs_cor:ResearchAndDevelopmentExpenses", "研究開発費"),
    CanonicalTag::new("jpdei_cor:AccountingStandardsDEI", "会計基準"),
    CanonicalTag::new(
        "jpdei_cor:WhetherConsolidatedFinancialStatementsArePreparedDEI",
        "連結決算の有無",
    ),
    CanonicalTag::new("jpdei_cor:CurrentFiscalYearStartDateDEI", "当事業年度開始日"),
    CanonicalTag::new("jpdei_cor:CurrentFiscalYearEndDateDEI", "当事業年度終了日"),
    CanonicalTag::new("jpdei_cor:TypeOfCurrentPeriodDEI", "当会計期間の種類"),
    CanonicalTag::new("jpdei_cor:EDINETCodeDEI", "EDINETコード"),
    CanonicalTag::new("jpcrp_cor:AverageNumberOfTemporaryWorkers", "平均臨時雇用人員"),
    CanonicalTag::new(
        "jpcrp_cor:AverageAgeYearsInformationAboutReportingCompanyInformationAboutEmployees",
        "平均年齢",
    ),
    CanonicalTag::new(
        "jpcrp_cor:AverageAnnualSalaryInformationAboutReportingCompanyInformationAboutEmployees",
        "平均年間給与",
    ),
    // Summary of business results
    CanonicalTag::new(
        "jpcrp_cor:DilutedEarningsPerShareSummaryOfBusinessResults",
        "潜在株式調整後1株当たり当期純利益",
    ),
    CanonicalTag::new(
        "jpcrp_cor:RateOfReturnOnEquitySummaryOfBusinessResults",
        "自己資本利益率",
    ),
    CanonicalTag::new(
        "jpcrp_cor:PriceEarningsRatioSummaryOfBusinessResults",
        "株価収益率",
    ),
    CanonicalTag::new("jpcrp_cor:PayoutRatioSummaryOfBusinessResults", "配当性向（報告値）"),
    CanonicalTag::new(
        "jpcrp_cor:DividendPaidPerShareSummaryOfBusinessResults",
        "1株当たり配当額",
    ),
    CanonicalTag::new(
        "jpcrp_cor:TotalNumberOfIssuedSharesSummaryOfBusinessResults",
        "発行済株式総数",
    ),
    // Income statement detail
    CanonicalTag::new("jppfs_cor:CostOfSales", "売上原価"),
    CanonicalTag::new(
        "jppfs_cor:SellingGeneralAndAdministrativeExpenses",
        "販売費及び一般管理費",
    ),
    CanonicalTag::new("jppfs_cor:NonOperatingIncome", "営業外収益"),
    CanonicalTag::new("jppfs_cor:InterestIncomeNOI", "受取利息"),
    CanonicalTag::new("jppfs_cor:DividendIncomeNOI", "受取配当金"),
    CanonicalTag::new("jppfs_cor:NonOperatingExpenses", "営業外費用"),
    CanonicalTag::new("jppfs_cor:InterestExpensesNOE", "支払利息"),
    CanonicalTag::new("jppfs_cor:ForeignExchangeGainsNOI", "為替差益"),
    CanonicalTag::new("jppfs_cor:ForeignExchangeLossesNOE", "為替差損"),
    CanonicalTag::new("jppfs_cor:ExtraordinaryIncome", "特別利益"),
    CanonicalTag::new("jppfs_cor:ExtraordinaryLoss", "特別損失"),
    CanonicalTag::new("jppfs_cor:IncomeTaxesCurrent", "法人税、住民税及び事業税"),
    CanonicalTag::new("jppfs_cor:IncomeTaxesDeferred", "法人税等調整額"),
    CanonicalTag::new("jppfs_cor:IncomeTaxes", "法人税等合計"),
    CanonicalTag::new(
        "jppfs_cor:ProfitLossAttributableToNonControllingInterests",
        "非支配株主に帰属する当期純利益",
    ),
    CanonicalTag::new(
        "jppfs_cor:ProfitLossAttributableToOwnersOfParent",
        "親会社株主に帰属する当期純利益",
    ),
    CanonicalTag::new("jppfs_cor:ComprehensiveIncome", "包括利益"),
    // Balance sheet detail
    CanonicalTag::new("jppfs_cor:CashAndDeposits", "現金及び預金"),
    CanonicalTag::new("jppfs_cor:NotesAndAccountsReceivableTrade", "受取手形及び売掛金"),
    CanonicalTag::new("jppfs_cor:Securities", "有価証券"),
    CanonicalTag::new("jppfs_cor:Inventories", "棚卸資産"),
    CanonicalTag::new("jppfs_cor:MerchandiseAndFinishedGoods", "商品及び製品"),
    CanonicalTag::new("jppfs_cor:WorkInProcess", "仕掛品"),
    CanonicalTag::new("jppfs_cor:RawMaterialsAndSupplies", "原材料及び貯蔵品"),
    CanonicalTag::new("jppfs_cor:PropertyPlantAndEquipment", "有形固定資産"),
    CanonicalTag::new("jppfs_cor:BuildingsAndStructuresNet", "建物及び構築物（純額）"),
    CanonicalTag::new(
        "jppfs_cor:MachineryEquipmentAndVehiclesNet",
        "機械装置及び運搬具（純額）",
    ),
    CanonicalTag::new("jppfs_cor:Land", "土地"),
    CanonicalTag::new("jppfs_cor:IntangibleAssets", "無形固定資産"),
    CanonicalTag::new("jppfs_cor:Goodwill", "のれん"),
    CanonicalTag::new("jppfs_cor:InvestmentsAndOtherAssets", "投資その他の資産"),
    CanonicalTag::new("jppfs_cor:InvestmentSecurities", "投資有価証券"),
    CanonicalTag::new("jppfs_cor:DeferredTaxAssets", "繰延税金資産"),
    CanonicalTag::new("jppfs_cor:NotesAndAccountsPayableTrade", "支払手形及び買掛金"),
    CanonicalTag::new("jppfs_cor:ShortTermLoansPayable", "短期借入金"),
    CanonicalTag::new(
        "jppfs_cor:CurrentPortionOfLongTermLoansPayable",
        "1年内返済予定の長期借入金",
    ),
    CanonicalTag::new("jppfs_cor:IncomeTaxesPayable", "未払法人税等"),
    CanonicalTag::new("jppfs_cor:BondsPayable", "社債"),
    CanonicalTag::new("jppfs_cor:LongTermLoansPayable", "長期借入金"),
    CanonicalTag::new("jppfs_cor:ProvisionForRetirementBenefits", "退職給付引当金"),
    CanonicalTag::new("jppfs_cor:NetDefinedBenefitLiability", "退職給付に係る負債"),
    CanonicalTag::new("jppfs_cor:ShareholdersEquity", "株主資本"),
    CanonicalTag::new("jppfs_cor:CapitalSurplus", "資本剰余金"),
    CanonicalTag::new("jppfs_cor:TreasuryStock", "自己株式"),
    CanonicalTag::new(
        "jppfs_cor:ValuationDifferenceOnAvailableForSaleSecurities",
        "その他有価証券評価差額金",
    ),
    CanonicalTag::new(
        "jppfs_cor:AccumulatedOtherComprehensiveIncome",
        "その他の包括利益累計額",
    ),
    CanonicalTag::new("jppfs_cor:NonControllingInterests", "非支配株主持分"),
    CanonicalTag::new("jppfs_cor:LiabilitiesAndNetAssets", "負債純資産合計"),
    // Cash flow detail
    CanonicalTag::new("jppfs_cor:DepreciationAndAmortizationOpeCF", "減価償却費"),
    CanonicalTag::new("jppfs_cor:ImpairmentLossOpeCF", "減損損失"),
    CanonicalTag::new(
        "jppfs_cor:DecreaseIncreaseInNotesAndAccountsReceivableTradeOpeCF",
        "売上債権の増減額",
    ),
    CanonicalTag::new("jppfs_cor:DecreaseIncreaseInInventoriesOpeCF", "棚卸資産の増減額"),
    CanonicalTag::new(
        "jppfs_cor:IncreaseDecreaseInNotesAndAccountsPayableTradeOpeCF",
        "仕入債務の増減額",
    ),
    CanonicalTag::new(
        "jppfs_cor:InterestAndDividendsIncomeReceivedOpeCFInvCF",
        "利息及び配当金の受取額",
    ),
    CanonicalTag::new("jppfs_cor:InterestExpensesPaidOpeCFFinCF", "利息の支払額"),
    CanonicalTag::new("jppfs_cor:IncomeTaxesPaidOpeCF", "法人税等の支払額"),
    CanonicalTag::new(
        "jppfs_cor:PurchaseOfPropertyPlantAndEquipmentInvCF",
        "有形固定資産の取得による支出",
    ),
    CanonicalTag::new(
        "jppfs_cor:ProceedsFromSalesOfPropertyPlantAndEquipmentInvCF",
        "有形固定資産の売却による収入",
    ),
    CanonicalTag::new(
        "jppfs_cor:PurchaseOfIntangibleAssetsInvCF",
        "無形固定資産の取得による支出",
    ),
    CanonicalTag::new(
        "jppfs_cor:PurchaseOfInvestmentSecuritiesInvCF",
        "投資有価証券の取得による支出",
    ),
    CanonicalTag::new(
        "jppfs_cor:ProceedsFromSalesOfInvestmentSecuritiesInvCF",
        "投資有価証券の売却による収入",
    ),
    CanonicalTag::new(
        "jppfs_cor:NetIncreaseDecreaseInShortTermLoansPayableFinCF",
        "短期借入金の純増減額",
    ),
    CanonicalTag::new("jppfs_cor:ProceedsFromLongTermLoansPayableFinCF", "長期借入れによる収入"),
    CanonicalTag::new(
        "jppfs_cor:RepaymentsOfLongTermLoansPayableFinCF",
        "長期借入金の返済による支出",
    ),
    CanonicalTag::new("jppfs_cor:ProceedsFromIssuanceOfBondsFinCF", "社債の発行による収入"),
    CanonicalTag::new("jppfs_cor:RedemptionOfBondsFinCF", "社債の償還による支出"),
    CanonicalTag::new("jppfs_cor:PurchaseOfTreasuryStockFinCF", "自己株式の取得による支出"),
    CanonicalTag::new("jppfs_cor:CashDividendsPaidFinCF", "配当金の支払額"),
    CanonicalTag::new(
        "jppfs_cor:EffectOfExchangeRateChangeOnCashAndCashEquivalents",
        "現金及び現金同等物に係る換算差額",
    ),
    CanonicalTag::new(
        "jppfs_cor:NetIncreaseDecreaseInCashAndCashEquivalents",
        "現金及び現金同等物の増減額",
    ),
];

/// Immutable, ordered list of canonical tags.
///
/// Passed by reference into the extractor and the row assembler; the standard EDINET
/// catalog is available through [`TagCatalog::standard`] (also the `Default`).
#[derive(Debug, Clone, PartialEq)]
pub struct TagCatalog {
    tags: Vec<CanonicalTag>,
}

impl TagCatalog {
    pub fn new(tags: Vec<CanonicalTag>) -> Self {
        Self { tags }
    }

    /// The fixed EDINET catalog used for the CSV output.
    pub fn standard() -> Self {
        Self::new(STANDARD_TAGS.to_vec())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Header labels in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tags.iter().map(|tag| tag.label)
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a TagCatalog {
    type Item = &'a CanonicalTag;
    type IntoIter = std::slice::Iter<'a, CanonicalTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
