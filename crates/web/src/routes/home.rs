//! Home page route handler: the lead form, plus the leads panel when an
//! admin session is present.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use leaddesk_core::{Division, Lead};

use crate::filters;
use crate::middleware::OptionalAdmin;
use crate::routes::{MessageQuery, Toast};
use crate::state::AppState;

/// One lead as displayed in the admin panel list.
#[derive(Clone)]
pub struct LeadListItem {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_on: String,
}

impl From<&Lead> for LeadListItem {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.customer_name.clone(),
            email: lead.email.clone(),
            phone: lead.customer_phone.clone(),
            created_on: lead.created_at.format("%d %b %Y").to_string(),
        }
    }
}

/// Admin panel data rendered under the form for logged-in admins.
pub struct AdminPanel {
    pub username: String,
    pub leads: Vec<LeadListItem>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub toast: Option<Toast>,
    pub is_admin: bool,
    pub divisions: Vec<&'static str>,
    pub categories: Vec<String>,
    pub admin: Option<AdminPanel>,
}

/// Display the lead form, with the leads panel for admins.
///
/// The panel re-fetches the full list on every render: first visit after
/// login, the refresh link, and the redirect that follows a successful
/// submission all land here.
#[instrument(skip(state, admin, query))]
pub async fn home(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let mut toast = query.into_toast();

    let admin_panel = match admin {
        Some(current) => {
            let leads = match state.leads().fetch_all_leads().await {
                Ok(leads) => leads.iter().map(LeadListItem::from).collect(),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load leads");
                    // A fetch failure outranks whatever toast the redirect carried.
                    toast = Some(Toast::error(e.fetch_user_message()));
                    Vec::new()
                }
            };
            Some(AdminPanel {
                username: current.username,
                leads,
            })
        }
        None => None,
    };

    HomeTemplate {
        toast,
        is_admin: admin_panel.is_some(),
        divisions: Division::ALL.iter().map(|d| d.as_str()).collect(),
        categories: state
            .products()
            .category_names()
            .map(ToOwned::to_owned)
            .collect(),
        admin: admin_panel,
    }
}
