//! Invoice reconciliation: recording payments by business invoice number.
//!
//! The service identifies invoices by a numeric id, while bank statements and
//! accounting exports carry the human-facing invoice number. [`InvoiceCache`]
//! maps one to the other and is rebuilt in a single pass by
//! [`InvoiceReconciler::populate`], which walks the invoice listing page by
//! page until the service returns an empty page.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use harvest_client::{Error, ErrorKind, Result};

use crate::client::HarvestRestClient;
use crate::invoices::Invoice;
use crate::parameters::RecentInvoicesParameters;

/// Invoice number to invoice id, as of the last reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceCache {
    ids: HashMap<String, u64>,
}

impl InvoiceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the invoice with this number, if it was seen.
    pub fn get(&self, invoice_number: &str) -> Option<u64> {
        self.ids.get(invoice_number).copied()
    }

    pub fn contains(&self, invoice_number: &str) -> bool {
        self.ids.contains_key(invoice_number)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn clear(&mut self) {
        self.ids.clear();
    }

    // Later invoices with a duplicate number overwrite earlier ones.
    fn extend(&mut self, invoices: &[Invoice]) {
        self.ids
            .extend(invoices.iter().map(|i| (i.number.clone(), i.id)));
    }
}

/// Posts payments by invoice number using a cache built from the invoice listing.
///
/// # Example
///
/// ```rust,ignore
/// let mut reconciler = InvoiceReconciler::new(HarvestRestClient::new(credentials)?);
/// reconciler.populate(from, to).await?;
/// reconciler
///     .post_payment_by_number("2015-0042", "BANK-REF-9", dec!(250.00))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceReconciler {
    client: HarvestRestClient,
    cache: InvoiceCache,
}

impl InvoiceReconciler {
    /// Create a reconciler with an empty cache.
    pub fn new(client: HarvestRestClient) -> Self {
        Self {
            client,
            cache: InvoiceCache::new(),
        }
    }

    pub fn client(&self) -> &HarvestRestClient {
        &self.client
    }

    pub fn cache(&self) -> &InvoiceCache {
        &self.cache
    }

    /// Rebuild the cache from every invoice in `[from_date, to_date]`.
    ///
    /// Pages are requested in order starting at 1 until one comes back empty.
    /// Returns the number of invoices seen, duplicates included. If any page
    /// fails the error is returned and the cache stays empty.
    #[instrument(skip(self))]
    pub async fn populate(&mut self, from_date: NaiveDate, to_date: NaiveDate) -> Result<usize> {
        self.cache.clear();

        let mut invoices = Vec::new();
        let mut page = 1;
        loop {
            let params = RecentInvoicesParameters::new()
                .with_from_date(from_date)
                .with_to_date(to_date)
                .with_page(page);
            let batch = self.client.recent_invoices(&params).await?;
            if batch.is_empty() {
                break;
            }

            debug!(page, count = batch.len(), "Fetched invoice page");
            invoices.extend(batch);
            page += 1;
        }

        self.cache.extend(&invoices);
        info!(
            invoices = invoices.len(),
            numbers = self.cache.len(),
            "Invoice cache rebuilt"
        );
        Ok(invoices.len())
    }

    /// Record a payment against the invoice with this number.
    ///
    /// Fails with `CacheMiss` without contacting the service when the number
    /// was not seen by the last [`populate`](Self::populate).
    #[instrument(skip(self))]
    pub async fn post_payment_by_number(
        &self,
        invoice_number: &str,
        reference: &str,
        amount: Decimal,
    ) -> Result<()> {
        let Some(invoice_id) = self.cache.get(invoice_number) else {
            warn!("Invoice number not in cache");
            return Err(Error::new(ErrorKind::CacheMiss {
                invoice_number: invoice_number.to_string(),
            }));
        };

        self.post_payment(invoice_id, reference, amount).await
    }

    /// Record a payment against an invoice id.
    pub async fn post_payment(&self, invoice_id: u64, reference: &str, amount: Decimal) -> Result<()> {
        self.client
            .post_invoice_payment(invoice_id, reference, amount)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::client_for;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const EMPTY_PAGE: &str = r#"<invoices type="array"/>"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn page(invoices: &[(u64, &str)]) -> String {
        let body: String = invoices
            .iter()
            .map(|(id, number)| {
                format!(
                    "<invoice><id type=\"integer\">{}</id><number>{}</number></invoice>",
                    id, number
                )
            })
            .collect();
        format!("<invoices type=\"array\">{}</invoices>", body)
    }

    async fn mount_page(server: &MockServer, number: u32, body: String) {
        Mock::given(method("GET"))
            .and(path("/invoices"))
            .and(query_param("page", number.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn invoice_requests(server: &MockServer) -> Vec<String> {
        server
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.url.path() == "/invoices")
            .map(|r| r.url.query().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_cache_last_write_wins() {
        let invoice = |id: u64, number: &str| -> Invoice {
            crate::xml::from_str(&format!(
                "<invoice><id>{}</id><number>{}</number></invoice>",
                id, number
            ))
            .unwrap()
        };

        let mut cache = InvoiceCache::new();
        cache.extend(&[invoice(1, "A"), invoice(2, "B"), invoice(3, "A")]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("A"), Some(3));
        assert!(cache.contains("B"));
        assert!(!cache.contains("C"));
    }

    #[tokio::test]
    async fn test_populate_empty_first_page() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, 1, EMPTY_PAGE.to_string()).await;

        let mut reconciler = InvoiceReconciler::new(client_for(&mock_server));
        let count = reconciler
            .populate(date(2015, 1, 1), date(2015, 12, 31))
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(reconciler.cache().is_empty());
        assert_eq!(
            invoice_requests(&mock_server).await,
            vec!["page=1&from=20150101&to=20151231"]
        );
    }

    #[tokio::test]
    async fn test_populate_walks_pages_until_empty() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, 1, page(&[(11, "2015-001"), (12, "2015-002")])).await;
        mount_page(&mock_server, 2, page(&[(13, "2015-003"), (14, "2015-004")])).await;
        mount_page(&mock_server, 3, page(&[(15, "2015-005")])).await;
        mount_page(&mock_server, 4, EMPTY_PAGE.to_string()).await;

        let mut reconciler = InvoiceReconciler::new(client_for(&mock_server));
        let count = reconciler
            .populate(date(2015, 1, 1), date(2015, 12, 31))
            .await
            .unwrap();

        assert_eq!(count, 5);
        assert_eq!(reconciler.cache().get("2015-003"), Some(13));
        assert_eq!(reconciler.cache().get("2015-005"), Some(15));

        let pages: Vec<String> = invoice_requests(&mock_server)
            .await
            .into_iter()
            .map(|q| q.split('&').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(pages, vec!["page=1", "page=2", "page=3", "page=4"]);
    }

    #[tokio::test]
    async fn test_populate_is_idempotent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/invoices"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&[(1, "A"), (2, "B")])))
            .expect(2)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/invoices"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
            .expect(2)
            .mount(&mock_server)
            .await;

        let mut reconciler = InvoiceReconciler::new(client_for(&mock_server));
        let first = reconciler.populate(date(2015, 1, 1), date(2015, 1, 31)).await.unwrap();
        let snapshot = reconciler.cache().clone();
        let second = reconciler.populate(date(2015, 1, 1), date(2015, 1, 31)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(&snapshot, reconciler.cache());
    }

    #[tokio::test]
    async fn test_populate_failure_leaves_cache_empty() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, 1, page(&[(1, "A")])).await;
        Mock::given(method("GET"))
            .and(path("/invoices"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut reconciler = InvoiceReconciler::new(client_for(&mock_server));
        let err = reconciler
            .populate(date(2015, 1, 1), date(2015, 1, 31))
            .await
            .unwrap_err();

        assert!(err.is_throttled());
        assert!(reconciler.cache().is_empty());
    }

    #[tokio::test]
    async fn test_post_payment_by_number_hit() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, 1, page(&[(1001, "2015-0042"), (1002, "2015-0043")])).await;
        mount_page(&mock_server, 2, EMPTY_PAGE.to_string()).await;

        Mock::given(method("POST"))
            .and(path("/invoices/1002/payments"))
            .and(body_string_contains("<amount>75.10</amount>"))
            .and(body_string_contains("<notes>BANK-REF-9</notes>"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut reconciler = InvoiceReconciler::new(client_for(&mock_server));
        reconciler.populate(date(2015, 1, 1), date(2015, 12, 31)).await.unwrap();
        reconciler
            .post_payment_by_number("2015-0043", "BANK-REF-9", dec!(75.10))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_post_payment_by_number_miss_sends_nothing() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, 1, page(&[(1001, "2015-0042")])).await;
        mount_page(&mock_server, 2, EMPTY_PAGE.to_string()).await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut reconciler = InvoiceReconciler::new(client_for(&mock_server));
        reconciler.populate(date(2015, 1, 1), date(2015, 12, 31)).await.unwrap();

        let err = reconciler
            .post_payment_by_number("2015-9999", "REF", dec!(1))
            .await
            .unwrap_err();
        assert!(err.is_cache_miss());
        assert_eq!(err.to_string(), "Unable to find invoice number 2015-9999 in cache");
    }

    #[tokio::test]
    async fn test_unpopulated_cache_misses() {
        let mock_server = MockServer::start().await;
        let reconciler = InvoiceReconciler::new(client_for(&mock_server));

        let err = reconciler
            .post_payment_by_number("2015-0042", "REF", dec!(1))
            .await
            .unwrap_err();
        assert!(err.is_cache_miss());
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_payment_outcomes() {
        let mock_server = MockServer::start().await;

        for (invoice_id, status) in [(1, 201), (2, 503), (3, 404)] {
            Mock::given(method("POST"))
                .and(path(format!("/invoices/{}/payments", invoice_id)))
                .respond_with(ResponseTemplate::new(status))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let reconciler = InvoiceReconciler::new(client_for(&mock_server));
        reconciler.post_payment(1, "REF", dec!(10)).await.unwrap();

        let err = reconciler.post_payment(2, "REF", dec!(10)).await.unwrap_err();
        assert!(err.is_throttled());

        let err = reconciler.post_payment(3, "REF", dec!(10)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_throttled());
    }
}
