use tokio_postgres::Row;

use crate::db::error::StoreError;
use crate::db::models::{SecurityTokenDetails, SecurityTokenSymbol};
use crate::db::postgres::PostgresClient;

fn row_to_token_details(row: &Row) -> SecurityTokenDetails {
    SecurityTokenDetails {
        token_symbol: row.get("token_symbol"),
        token_name: row.get("token_name"),
        token_status: row.get("token_status"),
        industry: row.get("industry"),
        amount_raised: row.get("amount_raised"),
        currency: row.get("currency"),
        issuance_price: row.get("issuance_price"),
        min_invest: row.get("min_invest"),
        closing_date: row.get("closing_date"),
        target_investor_type: row.get("target_investor_type"),
        jurisdictions_avail: row.get("jurisdictions_avail"),
        restricted_area: row.get("restricted_area"),
        secondary_market: row.get("secondary_market"),
        website: row.get("website"),
        whitepaper: row.get("whitepaper"),
        prospectus: row.get("prospectus"),
        smart_contract: row.get("smart_contract"),
        github: row.get("github"),
        blockchain: row.get("blockchain"),
        issuer_address: row.get("issuer_address"),
        token_used: row.get("token_used"),
        dividend: row.get("dividend"),
        voting: row.get("voting"),
        equity_ownership: row.get("equity_ownership"),
        mme_class: row.get("mme_class"),
        interest: row.get("interest"),
        portfolio: row.get("portfolio"),
    }
}

impl PostgresClient {
    // ==================== SECURITY TOKENS ====================

    /// Reference record for one token symbol. `None` means the symbol is
    /// simply not listed - a valid outcome, distinct from a backend failure.
    pub async fn get_token_details(
        &self,
        token_symbol: &str,
    ) -> Result<Option<SecurityTokenDetails>, StoreError> {
        let client = self.pool.get().await?;
        let query = r#"
            SELECT
                token_symbol, token_name, token_status, industry,
                amount_raised, currency, issuance_price, min_invest, closing_date,
                target_investor_type, jurisdictions_avail, restricted_area, secondary_market,
                website, whitepaper, prospectus, smart_contract, github,
                blockchain, issuer_address, token_used,
                dividend, voting, equity_ownership, mme_class, interest, portfolio
            FROM reference.security_tokens
            WHERE token_symbol = $1
        "#;

        let row = client.query_opt(query, &[&token_symbol]).await?;

        Ok(row.map(|row| row_to_token_details(&row)))
    }

    /// Name/symbol projection of every listed security token.
    pub async fn get_all_token_symbols(&self) -> Result<Vec<SecurityTokenSymbol>, StoreError> {
        let client = self.pool.get().await?;
        let query = r#"
            SELECT token_name, token_symbol
            FROM reference.security_tokens
            ORDER BY token_symbol
        "#;

        let rows = client.query(query, &[]).await?;
        let tokens = rows
            .iter()
            .map(|row| SecurityTokenSymbol {
                token_name: row.get("token_name"),
                token_symbol: row.get("token_symbol"),
            })
            .collect();

        Ok(tokens)
    }
}
