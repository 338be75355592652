//! Client SDK for the Meterline billing API.
//!
//! Thin, typed bindings over the invoice endpoints: every method maps to one
//! HTTP request and one response decode. No retries, no caching; transport
//! errors and API errors surface as [`ApiError`].
//!
//! # Quick example
//!
//! ```no_run
//! use meterline_client::ApiClient;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = ApiClient::from_env().unwrap();
//!
//! let invoice = client
//!     .invoices()
//!     .find("1a901a90-1a90-1a90-1a90-1a901a901a90")
//!     .await
//!     .unwrap();
//!
//! println!("invoice {} is {}", invoice.number, invoice.status);
//! # }
//! ```

mod client;
pub mod commands;
mod invoices;

pub use client::ApiClient;
pub use invoices::InvoiceClient;

// Re-export commonly needed types from core
pub use meterline::{
    ApiConfig, ApiError, BillingTime, CreateInvoiceInput, Invoice, InvoiceFeeInput,
    InvoiceMetadata, InvoicePaymentDetails, InvoicePreviewInput, InvoiceStatus, InvoiceType,
    ListInvoicesParams, Page, PaginationMeta, PaymentStatus, PreviewCoupon, PreviewCustomer,
    UpdateInvoiceInput, VoidInvoiceOptions,
};
