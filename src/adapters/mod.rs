// Adapters layer: concrete implementations of the domain ports (exchange rate
// service over HTTP, model artifact on disk).

pub mod exchange;
pub mod model;

pub use exchange::ExchangeRateResolver;
pub use model::LinearCostModel;
