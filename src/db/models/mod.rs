pub mod chart_point;
pub mod coin;
pub mod pair;
pub mod quotation;
pub mod scale;
pub mod security_token;
pub mod supply;
pub mod symbol_details;

pub use chart_point::ChartPoint;
pub use coin::Coin;
pub use pair::Pair;
pub use quotation::Quotation;
pub use scale::{InvalidScale, Scale};
pub use security_token::{SecurityTokenDetails, SecurityTokenSymbol};
pub use supply::{Supply, DEFAULT_SOURCE};
pub use symbol_details::SymbolDetails;
