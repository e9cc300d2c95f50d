//! Brochure catalogue route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use tracing::instrument;

use crate::catalogue::{BROCHURES, Brochure};
use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::routes::{MessageQuery, Toast};

/// Catalogue page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogue.html")]
pub struct CataloguePageTemplate {
    pub toast: Option<Toast>,
    pub is_admin: bool,
    pub brochures: &'static [Brochure],
}

/// Display the brochure catalogue.
///
/// GET /catalogue
///
/// The list is fixed at compile time; each card links out to the hosted
/// document in a new tab.
#[instrument(skip(admin, query))]
pub async fn catalogue(
    OptionalAdmin(admin): OptionalAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    CataloguePageTemplate {
        toast: query.into_toast(),
        is_admin: admin.is_some(),
        brochures: &BROCHURES,
    }
}
