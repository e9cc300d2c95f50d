//! Lead submission and form-fragment route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use leaddesk_core::{Division, LeadDraft};

use crate::routes::{redirect_with_error, redirect_with_success};
use crate::state::AppState;

/// Lead form fields as posted by the browser.
///
/// Everything arrives as strings; building the [`LeadDraft`] interprets
/// the division and validation happens on the draft.
#[derive(Debug, Default, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub product_category: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub area_of_interest: String,
    #[serde(default)]
    pub firm_name: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub remark: String,
}

impl LeadForm {
    /// Build a submission draft from the posted fields.
    ///
    /// An empty division select means "not chosen"; any other value must
    /// be one of the fixed divisions.
    fn into_draft(self) -> Result<LeadDraft, String> {
        let division = if self.division.is_empty() {
            None
        } else {
            Some(
                self.division
                    .parse::<Division>()
                    .map_err(|e| e.to_string())?,
            )
        };

        Ok(LeadDraft {
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            email: self.email,
            location: self.location,
            division,
            product_category: self.product_category,
            product: self.product,
            product_description: self.product_description,
            area_of_interest: self.area_of_interest,
            firm_name: self.firm_name,
            feedback: self.feedback,
            remark: self.remark,
        })
    }
}

/// Handle lead form submission.
///
/// POST /leads
///
/// Validation failures redirect back without touching the backend. A
/// successful create redirects home with a "Saved!" toast carrying the
/// WhatsApp delivery sub-status; the re-rendered form starts empty. The
/// call is never retried.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<LeadForm>) -> Response {
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(message) => return redirect_with_error("/", &message).into_response(),
    };

    if let Err(e) = draft.validate() {
        return redirect_with_error("/", &e.to_string()).into_response();
    }

    match state.leads().create_lead(&draft).await {
        Ok(response) => {
            let delivered = response.whatsapp.is_some_and(|w| w.ok);
            tracing::info!(whatsapp_ok = delivered, "Lead created");
            if delivered {
                redirect_with_success("/", "Saved! WhatsApp message sent.").into_response()
            } else {
                // Lead persisted, notification didn't go out - surface both.
                redirect_with_error("/", "Saved! WhatsApp delivery failed.").into_response()
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create lead");
            redirect_with_error("/", &e.user_message()).into_response()
        }
    }
}

/// Query parameters for the product options fragment.
///
/// HTMX sends the triggering select under its form name, so
/// `product_category` is accepted as an alias for `category`.
#[derive(Debug, Deserialize)]
pub struct ProductOptionsQuery {
    #[serde(default, alias = "product_category")]
    pub category: String,
}

/// Product select fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_options.html")]
pub struct ProductOptionsTemplate {
    pub products: Vec<String>,
    pub disabled: bool,
}

/// Return the product `<select>` for a category.
///
/// GET /leads/product-options?category=...
///
/// Swapped in by HTMX when the category changes; the fresh select carries
/// no selection, which is what clears the previously chosen product.
#[instrument(skip(state))]
pub async fn product_options(
    State(state): State<AppState>,
    Query(query): Query<ProductOptionsQuery>,
) -> impl IntoResponse {
    let products = state.products().products_for(&query.category).to_vec();

    ProductOptionsTemplate {
        disabled: query.category.is_empty(),
        products,
    }
}
