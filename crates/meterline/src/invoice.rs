//! Invoice wire models.
//!
//! Response records mirror the platform's snake_case JSON; request records
//! serialize to the bodies the invoice endpoints expect. All amounts are
//! integer cents in the invoice's currency.

use crate::resource::ApiResource;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Finalized,
    Voided,
    Pending,
    Failed,
}

impl InvoiceStatus {
    /// Wire name, as used in JSON bodies and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Finalized => "finalized",
            InvoiceStatus::Voided => "voided",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection state of an invoice's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

impl PaymentStatus {
    /// Wire name, as used in JSON bodies and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the invoice bills for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Subscription,
    AddOn,
    Credit,
    OneOff,
}

/// Anchor for billing period boundaries in previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingTime {
    Calendar,
    Anniversary,
}

/// One key/value attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    /// Server-assigned; absent when sending new metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub key: String,
    pub value: String,
}

/// An invoice as returned by the API (envelope key `invoice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequential_id: Option<i64>,
    pub number: String,
    pub issuing_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_overdue: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_payment_term: Option<i32>,
    pub invoice_type: InvoiceType,
    pub status: InvoiceStatus,
    pub payment_status: PaymentStatus,
    /// ISO-4217 currency code.
    pub currency: String,
    pub fees_amount_cents: i64,
    pub taxes_amount_cents: i64,
    #[serde(default)]
    pub coupons_amount_cents: i64,
    #[serde(default)]
    pub credit_notes_amount_cents: i64,
    pub sub_total_excluding_taxes_amount_cents: i64,
    pub sub_total_including_taxes_amount_cents: i64,
    #[serde(default)]
    pub prepaid_credit_amount_cents: i64,
    pub total_amount_cents: i64,
    /// PDF location, present once the document has been generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_dispute_lost_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<InvoiceMetadata>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApiResource for Invoice {
    const PATH: &'static str = "invoices";
    const ROOT: &'static str = "invoice";
}

/// Payment redirection details (envelope key `invoice_payment_details`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
}

/// Customer description for a preview; all fields optional so an existing
/// customer can be referenced by `external_id` alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreviewCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identification_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewCoupon {
    pub code: String,
}

/// Parameters for a dry-run invoice computation. Serialized as the bare
/// request body of `POST /invoices/preview`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoicePreviewInput {
    pub customer: PreviewCustomer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_time: Option<BillingTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coupons: Vec<PreviewCoupon>,
}

/// One ad-hoc fee on a one-off invoice.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceFeeInput {
    pub add_on_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /invoices`, wrapped under the `invoice` envelope key.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoiceInput {
    pub external_customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub fees: Vec<InvoiceFeeInput>,
}

/// Body of `PUT /invoices/{id}`, wrapped under the `invoice` envelope key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInvoiceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<InvoiceMetadata>>,
}

/// Optional body of `POST /invoices/{id}/void`. Sent bare, not wrapped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VoidInvoiceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_credit_note: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_amount: Option<i64>,
}

/// Typed query parameters for listing invoices. Unset fields produce no pair.
#[derive(Debug, Clone, Default)]
pub struct ListInvoicesParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub external_customer_id: Option<String>,
    pub issuing_date_from: Option<NaiveDate>,
    pub issuing_date_to: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_overdue: Option<bool>,
}

impl ListInvoicesParams {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(external_customer_id) = &self.external_customer_id {
            pairs.push((
                "external_customer_id".to_string(),
                external_customer_id.clone(),
            ));
        }
        if let Some(from) = self.issuing_date_from {
            pairs.push(("issuing_date_from".to_string(), from.to_string()));
        }
        if let Some(to) = self.issuing_date_to {
            pairs.push(("issuing_date_to".to_string(), to.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(payment_status) = self.payment_status {
            pairs.push(("payment_status".to_string(), payment_status.as_str().to_string()));
        }
        if let Some(payment_overdue) = self.payment_overdue {
            pairs.push(("payment_overdue".to_string(), payment_overdue.to_string()));
        }
        pairs
    }
}
