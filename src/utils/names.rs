/// Resolve a coin symbol to its display name.
///
/// Covers the majors; an unknown symbol keeps itself as the name so a
/// persisted record never carries an empty display name.
pub fn name_for_symbol(symbol: &str) -> String {
    match symbol {
        "BTC" => "Bitcoin",
        "ETH" => "Ethereum",
        "USDT" => "Tether",
        "XRP" => "Ripple",
        "BCH" => "Bitcoin Cash",
        "LTC" => "Litecoin",
        "BNB" => "Binance Coin",
        "ADA" => "Cardano",
        "SOL" => "Solana",
        "DOT" => "Polkadot",
        "DOGE" => "Dogecoin",
        "LINK" => "Chainlink",
        "XLM" => "Stellar",
        "XMR" => "Monero",
        "TRX" => "Tron",
        "EOS" => "EOS",
        "MIOTA" => "IOTA",
        "DASH" => "Dash",
        "ETC" => "Ethereum Classic",
        "NEO" => "NEO",
        "ATOM" => "Cosmos",
        "XTZ" => "Tezos",
        "ZEC" => "Zcash",
        "MKR" => "Maker",
        "UNI" => "Uniswap",
        "AVAX" => "Avalanche",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbol_resolves() {
        assert_eq!(name_for_symbol("BTC"), "Bitcoin");
        assert_eq!(name_for_symbol("ETH"), "Ethereum");
    }

    #[test]
    fn test_unknown_symbol_falls_back_to_itself() {
        assert_eq!(name_for_symbol("WAGMI42"), "WAGMI42");
        assert_ne!(name_for_symbol("WAGMI42"), "");
    }
}
