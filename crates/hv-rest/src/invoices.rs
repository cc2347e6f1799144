//! Invoices, their messages, payments and item categories.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use harvest_client::format::format_paid_at;
use harvest_client::Result;

use crate::xml::{flag, nullable};

/// Invoice state as accepted by the `status` filter of the invoice listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Open,
    Partial,
    Draft,
    Paid,
    Unpaid,
    PastDue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Partial => "partial",
            Self::Draft => "draft",
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::PastDue => "pastdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice issued to a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Invoice {
    pub id: u64,
    /// Business-facing invoice number, unique per account.
    #[serde(default)]
    pub number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub client_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub tax: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub tax_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub discount: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub purchase_order: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub client_key: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub issued_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_at_human_format: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub period_start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub period_end: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub recurring_invoice_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub estimate_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub retainer_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<invoices type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceCollection {
    #[serde(rename = "invoice", default)]
    pub invoices: Vec<Invoice>,
}

impl InvoiceCollection {
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }
}

/// Category used on invoice line items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InvoiceItemCategory {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "flag")]
    pub use_as_service: bool,
    #[serde(default, deserialize_with = "flag")]
    pub use_as_expense: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<invoice-item-categories type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceItemCategoryCollection {
    #[serde(rename = "invoice-item-category", default)]
    pub categories: Vec<InvoiceItemCategory>,
}

/// A message sent about an invoice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InvoiceMessage {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub invoice_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub sent_by: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub sent_by_email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub full_recipient_list: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub send_me_a_copy: bool,
    #[serde(default, deserialize_with = "flag")]
    pub include_pay_pal_link: bool,
    #[serde(default, deserialize_with = "flag")]
    pub thank_you: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<invoice-messages type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceMessageCollection {
    #[serde(rename = "invoice-message", default)]
    pub messages: Vec<InvoiceMessage>,
}

/// A payment recorded against an invoice, as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InvoicePayment {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub invoice_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub recorded_by: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub recorded_by_email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub pay_pal_transaction_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub payment_gateway_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `<payments type="array">`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoicePaymentCollection {
    #[serde(rename = "payment", default)]
    pub payments: Vec<InvoicePayment>,
}

/// Payment to record against an invoice.
///
/// Differs from [`InvoicePayment`]: `paid-at` is sent as a pre-formatted
/// string and server-managed fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NewInvoicePayment {
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub paid_at: String,
}

impl NewInvoicePayment {
    /// Root element of the payment document.
    pub const ROOT: &'static str = "payment";

    /// A payment of `amount` paid at `paid_at`.
    pub fn new(amount: Decimal, paid_at: DateTime<FixedOffset>) -> Self {
        Self {
            amount,
            invoice_id: None,
            notes: None,
            paid_at: format_paid_at(paid_at),
        }
    }

    pub fn with_invoice_id(mut self, invoice_id: u64) -> Self {
        self.invoice_id = Some(invoice_id);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Encode as a `<payment>` document.
    pub fn to_xml(&self) -> Result<String> {
        crate::xml::to_string(Self::ROOT, self)
    }
}
