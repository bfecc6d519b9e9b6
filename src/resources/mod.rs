//! One stateless facade per resource family. Every method builds a path,
//! query, and body, performs exactly one round trip through the transport,
//! and decodes the result; no facade calls another.

pub mod accounts;
pub mod assets;
pub mod baskets;
pub mod exchange_rates;
pub mod gcu;
pub mod transactions;
pub mod transfers;
pub mod webhooks;

pub use accounts::Accounts;
pub use assets::Assets;
pub use baskets::Baskets;
pub use exchange_rates::ExchangeRates;
pub use gcu::Gcu;
pub use transactions::Transactions;
pub use transfers::Transfers;
pub use webhooks::Webhooks;
