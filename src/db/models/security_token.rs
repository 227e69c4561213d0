use chrono::NaiveDate;
use serde::Serialize;

/// Descriptive reference record for a security token (PostgreSQL).
///
/// Primary Key: token_symbol
/// Query Pattern: "Get the issuance sheet for token X"
#[derive(Debug, Clone, Serialize)]
pub struct SecurityTokenDetails {
    pub token_symbol: String,
    pub token_name: String,
    pub token_status: Option<String>,
    pub industry: Option<String>,

    // Issuance terms
    pub amount_raised: Option<f64>,
    pub currency: Option<String>,
    pub issuance_price: Option<f64>,
    pub min_invest: Option<f64>,
    pub closing_date: Option<NaiveDate>,

    // Distribution constraints
    pub target_investor_type: Option<String>,
    pub jurisdictions_avail: Option<String>,
    pub restricted_area: Option<String>,
    pub secondary_market: Option<String>,

    // Public references
    pub website: Option<String>,
    pub whitepaper: Option<String>,
    pub prospectus: Option<String>,
    pub smart_contract: Option<String>,
    pub github: Option<String>,

    // On-chain identity
    pub blockchain: Option<String>,
    pub issuer_address: Option<String>,
    pub token_used: Option<String>,

    // Holder rights
    pub dividend: Option<bool>,
    pub voting: Option<bool>,
    pub equity_ownership: Option<bool>,
    pub mme_class: Option<String>,
    pub interest: Option<String>,
    pub portfolio: Option<String>,
}

/// List projection of [`SecurityTokenDetails`].
#[derive(Debug, Clone, Serialize)]
pub struct SecurityTokenSymbol {
    pub token_name: String,
    pub token_symbol: String,
}
