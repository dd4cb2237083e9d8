pub mod changes;
pub mod closing_prices;
pub mod envelope;
pub mod quote;
pub mod report;

pub use changes::{ChangeWindow, PercentageChanges};
pub use closing_prices::{ClosingPrice, ClosingPriceSeries};
pub use envelope::EmailEnvelope;
pub use quote::Quote;
pub use report::{Report, ReportRow};
