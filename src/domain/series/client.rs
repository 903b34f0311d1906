//! Series sub-client — multi-coin price/return tables.

use chrono::NaiveDate;

use crate::client::NomicsClient;
use crate::domain::series::{self, AlignedSeries, ColumnFilter};
use crate::error::SdkResult;
use crate::shared::{Currency, DateRange};

/// Sub-client for aligned multi-coin series.
pub struct Series<'a> {
    pub(crate) client: &'a NomicsClient,
}

impl<'a> Series<'a> {
    /// Daily opens and returns of `coins` over `[start, end]`, aligned on timestamp.
    pub fn prices(
        &self,
        coins: &[Currency],
        start: NaiveDate,
        end: NaiveDate,
        filter: Option<ColumnFilter>,
    ) -> SdkResult<AlignedSeries> {
        let range = DateRange::new(start, end)?;
        series::aggregate(self.client, coins, &range, filter)
    }
}
