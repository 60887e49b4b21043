mod consumption;
mod currency;
mod messages;
mod record;
mod spending;
mod tracker;

pub use consumption::ConsumptionTracker;
pub use currency::{Currency, CurrencyError};
pub use messages::Messages;
pub use record::{Record, RecordError};
pub use spending::SpendingTracker;
pub use tracker::Tracker;

// Number of decimal places used when reporting an amount of money
const CURRENCY_PRECISION: u32 = 2;
