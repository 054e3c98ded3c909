//! Provider line-item labels the models read from statement tables.

pub const WORKING_CAPITAL: &str = "Working Capital";
pub const TOTAL_ASSETS: &str = "Total Assets";
pub const RETAINED_EARNINGS: &str = "Retained Earnings";
pub const TOTAL_LIABILITIES: &str = "Total Liabilities Net Minority Interest";
pub const EBIT: &str = "EBIT";

pub const NET_INCOME: &str = "Net Income";
pub const OPERATING_CASH_FLOW: &str = "Total Cash From Operating Activities";
pub const LONG_TERM_DEBT: &str = "Long Term Debt";
pub const CURRENT_ASSETS: &str = "Current Assets";
pub const CURRENT_LIABILITIES: &str = "Current Liabilities";
pub const COMMON_STOCK_EQUITY: &str = "Common Stock Equity";
pub const GROSS_PROFIT: &str = "Gross Profit";
pub const TOTAL_REVENUE: &str = "Total Revenue";
