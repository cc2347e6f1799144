//! Parameter objects for the filtered listing endpoints.
//!
//! Each object turns itself into an ordered [`QueryParams`] list. Date-range
//! objects validate before producing a query so a missing bound fails without
//! touching the network.

use chrono::{NaiveDate, NaiveDateTime};

use harvest_client::format::{format_date, format_updated_since};
use harvest_client::{Error, QueryParams, Result};

use crate::invoices::InvoiceStatus;

/// Day entries tracked by one person within a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntriesByUserParameters {
    pub user_id: u64,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub updated_since: Option<NaiveDateTime>,
}

impl DayEntriesByUserParameters {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            from_date: None,
            to_date: None,
            updated_since: None,
        }
    }

    /// Set both bounds of the date range.
    pub fn between(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self.to_date = Some(to_date);
        self
    }

    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: NaiveDate) -> Self {
        self.to_date = Some(to_date);
        self
    }

    pub fn with_updated_since(mut self, updated_since: NaiveDateTime) -> Self {
        self.updated_since = Some(updated_since);
        self
    }

    /// Validate and encode as `from`, `to`, `updated_since`.
    pub fn query(&self) -> Result<QueryParams> {
        date_range_query(self.from_date, self.to_date, self.updated_since)
    }
}

/// Day entries tracked against one project within a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntriesByProjectParameters {
    pub project_id: u64,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub updated_since: Option<NaiveDateTime>,
}

impl DayEntriesByProjectParameters {
    pub fn new(project_id: u64) -> Self {
        Self {
            project_id,
            from_date: None,
            to_date: None,
            updated_since: None,
        }
    }

    /// Set both bounds of the date range.
    pub fn between(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self.to_date = Some(to_date);
        self
    }

    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: NaiveDate) -> Self {
        self.to_date = Some(to_date);
        self
    }

    pub fn with_updated_since(mut self, updated_since: NaiveDateTime) -> Self {
        self.updated_since = Some(updated_since);
        self
    }

    /// Validate and encode as `from`, `to`, `updated_since`.
    pub fn query(&self) -> Result<QueryParams> {
        date_range_query(self.from_date, self.to_date, self.updated_since)
    }
}

// The lower bound is checked first.
fn date_range_query(
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    updated_since: Option<NaiveDateTime>,
) -> Result<QueryParams> {
    let from_date = from_date.ok_or_else(|| Error::missing_parameter("from_date"))?;
    let to_date = to_date.ok_or_else(|| Error::missing_parameter("to_date"))?;

    Ok(QueryParams::new()
        .with("from", format_date(from_date))
        .with("to", format_date(to_date))
        .with_opt("updated_since", updated_since.map(format_updated_since)))
}

/// Filters for the invoice listing. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentInvoicesParameters {
    /// 1-based page number.
    pub page: Option<u32>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    /// Sent as a plain date; the time of day is dropped.
    pub updated_since: Option<NaiveDateTime>,
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<u64>,
}

impl RecentInvoicesParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: NaiveDate) -> Self {
        self.to_date = Some(to_date);
        self
    }

    pub fn with_updated_since(mut self, updated_since: NaiveDateTime) -> Self {
        self.updated_since = Some(updated_since);
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_client_id(mut self, client_id: u64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Encode as `page`, `from`, `to`, `updated_since`, `status`, `client`.
    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("page", self.page)
            .with_opt("from", self.from_date.map(format_date))
            .with_opt("to", self.to_date.map(format_date))
            .with_opt(
                "updated_since",
                self.updated_since.map(|ts| format_date(ts.date())),
            )
            .with_opt("status", self.status)
            .with_opt("client", self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_client::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_entries_query() {
        let params = DayEntriesByUserParameters::new(508343).between(date(2015, 12, 1), date(2015, 12, 31));
        assert_eq!(params.query().unwrap().encode().unwrap(), "from=20151201&to=20151231");
    }

    #[test]
    fn test_day_entries_query_with_updated_since() {
        let updated = date(2015, 12, 8).and_hms_opt(14, 17, 0).unwrap();
        let params = DayEntriesByProjectParameters::new(408)
            .between(date(2015, 12, 1), date(2015, 12, 31))
            .with_updated_since(updated);

        assert_eq!(
            params.query().unwrap().encode().unwrap(),
            "from=20151201&to=20151231&updated_since=2015-12-08+02%3A17"
        );
    }

    #[test]
    fn test_missing_from_date_reported_first() {
        let err = DayEntriesByUserParameters::new(1).query().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingParameter(ref name) if name == "from_date"));

        let err = DayEntriesByProjectParameters::new(1)
            .with_to_date(date(2015, 1, 31))
            .query()
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingParameter(ref name) if name == "from_date"));
    }

    #[test]
    fn test_missing_to_date() {
        let err = DayEntriesByProjectParameters::new(1)
            .with_from_date(date(2015, 1, 1))
            .query()
            .unwrap_err();
        assert!(err.is_missing_parameter());
        assert!(matches!(err.kind, ErrorKind::MissingParameter(ref name) if name == "to_date"));
    }

    #[test]
    fn test_recent_invoices_empty_query() {
        let query = RecentInvoicesParameters::new().query();
        assert!(query.is_empty());
        assert_eq!(query.apply_to("/invoices").unwrap(), "/invoices");
    }

    #[test]
    fn test_recent_invoices_full_query_order() {
        let params = RecentInvoicesParameters::new()
            .with_client_id(17)
            .with_status(InvoiceStatus::PastDue)
            .with_updated_since(date(2015, 12, 8).and_hms_opt(9, 30, 0).unwrap())
            .with_to_date(date(2015, 12, 31))
            .with_from_date(date(2015, 12, 1))
            .with_page(3);

        assert_eq!(
            params.query().encode().unwrap(),
            "page=3&from=20151201&to=20151231&updated_since=20151208&status=pastdue&client=17"
        );
    }

    #[test]
    fn test_recent_invoices_partial_query() {
        let params = RecentInvoicesParameters::new()
            .with_page(1)
            .with_to_date(date(2015, 12, 31));
        assert_eq!(
            params.query().apply_to("/invoices").unwrap(),
            "/invoices?page=1&to=20151231"
        );
    }
}
