pub mod address;
pub mod amount;
pub mod gauge;
pub mod holdings;
pub mod price_point;

pub use address::{Address, ZERO_ADDRESS};
pub use amount::RawAmount;
pub use gauge::{GaugeRewardBalances, GaugeRewards};
pub use holdings::{FeesUncollected, Holdings, TokenAmounts, TokenPair};
pub use price_point::{PricePanel, PricePoint};
