//! Invoice endpoints.
//!
//! One method per API action. Each builds a request spec through a pure
//! function, sends it over the shared client, and decodes the `invoice`
//! envelope (or `invoice_payment_details` for payment URLs).

use crate::client::ApiClient;
use crate::commands;
use meterline::invoice::{
    CreateInvoiceInput, Invoice, InvoicePaymentDetails, InvoicePreviewInput, ListInvoicesParams,
    UpdateInvoiceInput, VoidInvoiceOptions,
};
use meterline::response::{object_response, optional_object_response};
use meterline::{ApiError, ApiResource, HttpMethod, Page, RequestSpec};
use serde_json::Value;

/// Envelope key of the payment-URL response.
const PAYMENT_DETAILS_ROOT: &str = "invoice_payment_details";

/// Handle for the `/invoices` endpoints, obtained via
/// [`ApiClient::invoices`].
pub struct InvoiceClient<'a> {
    api: &'a ApiClient,
}

impl<'a> InvoiceClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch one invoice. GET `/invoices/{id}`.
    pub async fn find(&self, resource_id: &str) -> Result<Invoice, ApiError> {
        commands::find::<Invoice>(self.api, resource_id).await
    }

    /// List invoices with optional filters. GET `/invoices`.
    pub async fn find_all(&self, params: &ListInvoicesParams) -> Result<Page<Invoice>, ApiError> {
        commands::find_all::<Invoice>(self.api, &params.to_query()).await
    }

    /// Create a one-off invoice. POST `/invoices`.
    pub async fn create(&self, input: &CreateInvoiceInput) -> Result<Invoice, ApiError> {
        commands::create::<Invoice>(self.api, input).await
    }

    /// Update payment status or metadata. PUT `/invoices/{id}`.
    pub async fn update(
        &self,
        resource_id: &str,
        input: &UpdateInvoiceInput,
    ) -> Result<Invoice, ApiError> {
        commands::update::<Invoice>(self.api, resource_id, input).await
    }

    /// Request the invoice PDF. Returns `None` while the document is still
    /// being generated. POST `/invoices/{id}/download`.
    pub async fn download(&self, resource_id: &str) -> Result<Option<Invoice>, ApiError> {
        let spec = self.download_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        optional_object_response(&body, Invoice::ROOT)
    }

    /// Retry collecting a failed payment. Returns `None` when the server
    /// acknowledges without a payload. POST `/invoices/{id}/retry_payment`.
    pub async fn retry_payment(&self, resource_id: &str) -> Result<Option<Invoice>, ApiError> {
        let spec = self.retry_payment_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        optional_object_response(&body, Invoice::ROOT)
    }

    /// Recompute a draft invoice. PUT `/invoices/{id}/refresh`.
    pub async fn refresh(&self, resource_id: &str) -> Result<Invoice, ApiError> {
        let spec = self.refresh_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    /// Retry a failed invoice generation. POST `/invoices/{id}/retry`.
    pub async fn retry(&self, resource_id: &str) -> Result<Invoice, ApiError> {
        let spec = self.retry_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    /// Finalize a draft invoice. PUT `/invoices/{id}/finalize`.
    pub async fn finalize(&self, resource_id: &str) -> Result<Invoice, ApiError> {
        let spec = self.finalize_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    /// Void a finalized invoice. POST `/invoices/{id}/void`.
    pub async fn void(&self, resource_id: &str) -> Result<Invoice, ApiError> {
        let spec = self.void_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    /// Void with credit-note / refund options. POST `/invoices/{id}/void`.
    pub async fn void_with_options(
        &self,
        resource_id: &str,
        options: &VoidInvoiceOptions,
    ) -> Result<Invoice, ApiError> {
        let spec = self.void_with_options_spec(resource_id, options)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    /// Mark a payment dispute as lost. PUT `/invoices/{id}/lose_dispute`.
    pub async fn lose_dispute(&self, resource_id: &str) -> Result<Invoice, ApiError> {
        let spec = self.lose_dispute_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    /// Fetch a hosted payment page URL for the invoice. Returns an empty
    /// string when the provider returns no URL. POST
    /// `/invoices/{id}/payment_url`.
    pub async fn payment_url(&self, resource_id: &str) -> Result<String, ApiError> {
        let spec = self.payment_url_spec(resource_id)?;
        let body = self.api.execute(spec).await?;
        let details: Option<InvoicePaymentDetails> =
            optional_object_response(&body, PAYMENT_DETAILS_ROOT)?;
        Ok(details
            .and_then(|d| d.payment_url)
            .unwrap_or_default())
    }

    /// Compute an invoice without persisting anything. POST
    /// `/invoices/preview`.
    pub async fn preview(&self, input: &InvoicePreviewInput) -> Result<Invoice, ApiError> {
        let spec = self.preview_spec(input)?;
        let body = self.api.execute(spec).await?;
        object_response(&body, Invoice::ROOT)
    }

    fn action_spec(
        &self,
        resource_id: &str,
        action: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<RequestSpec, ApiError> {
        let url = self.api.url(&[Invoice::PATH, resource_id, action])?;
        Ok(RequestSpec { method, url, body })
    }

    fn download_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "download", HttpMethod::Post, None)
    }

    fn retry_payment_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "retry_payment", HttpMethod::Post, None)
    }

    fn refresh_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "refresh", HttpMethod::Put, None)
    }

    fn retry_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "retry", HttpMethod::Post, None)
    }

    fn finalize_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "finalize", HttpMethod::Put, None)
    }

    fn void_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "void", HttpMethod::Post, None)
    }

    fn void_with_options_spec(
        &self,
        resource_id: &str,
        options: &VoidInvoiceOptions,
    ) -> Result<RequestSpec, ApiError> {
        let body = serde_json::to_value(options)?;
        self.action_spec(resource_id, "void", HttpMethod::Post, Some(body))
    }

    fn lose_dispute_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "lose_dispute", HttpMethod::Put, None)
    }

    fn payment_url_spec(&self, resource_id: &str) -> Result<RequestSpec, ApiError> {
        self.action_spec(resource_id, "payment_url", HttpMethod::Post, None)
    }

    fn preview_spec(&self, input: &InvoicePreviewInput) -> Result<RequestSpec, ApiError> {
        let url = self.api.url(&[Invoice::PATH, "preview"])?;
        Ok(RequestSpec::post(url, Some(serde_json::to_value(input)?)))
    }
}
