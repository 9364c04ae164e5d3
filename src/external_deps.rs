pub use chrono::{NaiveDate, NaiveDateTime};
pub use deadpool_tiberius::{Manager, Pool};
pub use flexi_logger::{Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::Client;
pub use tiberius::numeric::Numeric;
pub use tiberius::Row;
