use chrono::{DateTime, FixedOffset, Local};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use harvest_client::Result;

use crate::invoices::{
    Invoice, InvoiceCollection, InvoiceItemCategory, InvoiceItemCategoryCollection,
    InvoiceMessage, InvoiceMessageCollection, InvoicePayment, InvoicePaymentCollection,
    NewInvoicePayment,
};
use crate::parameters::RecentInvoicesParameters;

impl super::HarvestRestClient {
    /// List invoices matching `params`, one page per call.
    ///
    /// An empty result means the requested page is past the last one.
    #[instrument(skip(self))]
    pub async fn recent_invoices(&self, params: &RecentInvoicesParameters) -> Result<Vec<Invoice>> {
        let path = params.query().apply_to("/invoices")?;
        let invoices: InvoiceCollection = self.client.get_xml(&path).await?;
        Ok(invoices.invoices)
    }

    /// Get one invoice by id.
    #[instrument(skip(self))]
    pub async fn invoice(&self, invoice_id: u64) -> Result<Invoice> {
        self.client
            .get_xml(&format!("/invoices/{}", invoice_id))
            .await
    }

    /// List the categories available for invoice line items.
    #[instrument(skip(self))]
    pub async fn invoice_item_categories(&self) -> Result<Vec<InvoiceItemCategory>> {
        let categories: InvoiceItemCategoryCollection =
            self.client.get_xml("/invoice_item_categories").await?;
        Ok(categories.categories)
    }

    /// List the messages sent for an invoice.
    #[instrument(skip(self))]
    pub async fn invoice_messages(&self, invoice_id: u64) -> Result<Vec<InvoiceMessage>> {
        let path = format!("/invoices/{}/messages", invoice_id);
        let messages: InvoiceMessageCollection = self.client.get_xml(&path).await?;
        Ok(messages.messages)
    }

    /// Get one invoice message.
    #[instrument(skip(self))]
    pub async fn invoice_message(&self, invoice_id: u64, message_id: u64) -> Result<InvoiceMessage> {
        self.client
            .get_xml(&format!("/invoices/{}/messages/{}", invoice_id, message_id))
            .await
    }

    /// List the payments recorded against an invoice.
    #[instrument(skip(self))]
    pub async fn invoice_payments(&self, invoice_id: u64) -> Result<Vec<InvoicePayment>> {
        let path = format!("/invoices/{}/payments", invoice_id);
        let payments: InvoicePaymentCollection = self.client.get_xml(&path).await?;
        Ok(payments.payments)
    }

    /// Get one payment recorded against an invoice.
    #[instrument(skip(self))]
    pub async fn invoice_payment(&self, invoice_id: u64, payment_id: u64) -> Result<InvoicePayment> {
        self.client
            .get_xml(&format!("/invoices/{}/payments/{}", invoice_id, payment_id))
            .await
    }

    /// Record a payment of `amount` against an invoice, paid now.
    ///
    /// `reference` is stored as the payment notes. Fails with
    /// `ThrottleLimit` on 503 and `Http` on any status other than 200/201.
    pub async fn post_invoice_payment(
        &self,
        invoice_id: u64,
        reference: &str,
        amount: Decimal,
    ) -> Result<()> {
        self.post_invoice_payment_at(invoice_id, reference, amount, Local::now().fixed_offset())
            .await
    }

    /// Record a payment of `amount` against an invoice, paid at `paid_at`.
    #[instrument(skip(self))]
    pub async fn post_invoice_payment_at(
        &self,
        invoice_id: u64,
        reference: &str,
        amount: Decimal,
        paid_at: DateTime<FixedOffset>,
    ) -> Result<()> {
        let payment = NewInvoicePayment::new(amount, paid_at)
            .with_invoice_id(invoice_id)
            .with_notes(reference);
        let path = format!("/invoices/{}/payments", invoice_id);

        self.client
            .post_xml(&path, NewInvoicePayment::ROOT, &payment)
            .await?;
        debug!(invoice_id, %amount, "Payment recorded");
        Ok(())
    }
}
