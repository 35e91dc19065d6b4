//! Subscription page handlers.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::subscription::{SignupFormBody, SubscriptionQuery};
use crate::application::signup::{SignupSession, SubmitOutcome};
use crate::domain::entities::{PanelSet, SubscriptionPlan};
use crate::state::AppState;
use crate::ui::Theme;
use crate::web::views::{AccordionView, ModalView, PageMeta, href};

/// A plan tile with its "choose" link.
pub struct PlanCard {
    pub plan: SubscriptionPlan,
    pub price_label: String,
    pub selected: bool,
    pub choose_href: String,
}

/// Form values and the errors that should be shown next to them.
pub struct SignupFormView {
    pub full_name: String,
    pub email: String,
    pub plan_id: String,
    pub consent: bool,
    errors: BTreeMap<&'static str, String>,
}

impl SignupFormView {
    fn from_session(session: &SignupSession) -> Self {
        let form = session.form();
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            plan_id: form.plan_id.clone(),
            consent: form.consent,
            errors: session
                .visible_errors()
                .into_iter()
                .map(|(field, error)| (field.name(), error.message))
                .collect(),
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Confirmation shown after a valid submission.
pub struct SuccessView {
    pub modal: ModalView,
    pub full_name: String,
    pub email: String,
    pub plan_summary: String,
}

/// Template for the subscription page.
///
/// Renders `templates/subscription.html` with plan tiles, the sign-up form,
/// the FAQ accordion and, after a valid submission, the success dialog.
#[derive(Template, WebTemplate)]
#[template(path = "subscription.html")]
pub struct SubscriptionTemplate {
    pub page: PageMeta,
    pub plans: Vec<PlanCard>,
    pub form: SignupFormView,
    pub faq: AccordionView,
    pub success: Option<SuccessView>,
}

/// "Plus ($7.00 / month)", or "Starter (Free)".
fn plan_summary(plan: &SubscriptionPlan) -> String {
    if plan.price == 0.0 {
        format!("{} (Free)", plan.name)
    } else {
        format!("{} ({})", plan.name, plan.price_with_period())
    }
}

fn render(
    state: &AppState,
    theme: Theme,
    session: &SignupSession,
    open: Option<&str>,
    success: Option<SuccessView>,
) -> SubscriptionTemplate {
    let selected = session.form().plan_id.as_str();

    let plans = state
        .catalog_service
        .plans()
        .into_iter()
        .map(|plan| PlanCard {
            price_label: plan.price_label(),
            selected: plan.id == selected,
            choose_href: format!("{}#signup", href("/subscription", &[("plan", plan.id.as_str())])),
            plan,
        })
        .collect();

    let faq = AccordionView::build(
        state.catalog_service.panels(PanelSet::SubscriptionFaq),
        false,
        open,
        |open| {
            format!(
                "{}#faq",
                href("/subscription", &[("plan", selected), ("open", open)])
            )
        },
    );

    SubscriptionTemplate {
        page: PageMeta::new(state, "Subscription", "subscription", theme),
        plans,
        form: SignupFormView::from_session(session),
        faq,
        success,
    }
}

/// Renders the plans and an empty sign-up form.
///
/// # Endpoint
///
/// `GET /subscription?plan=<id>&open=<faq ids>`
///
/// An unknown plan id falls back to the default plan.
pub async fn subscription_handler(
    State(state): State<AppState>,
    theme: Theme,
    Query(query): Query<SubscriptionQuery>,
) -> impl IntoResponse {
    let session = state
        .subscription_service
        .new_session(query.plan.as_deref());

    render(&state, theme, &session, query.open.as_deref(), None)
}

/// Validates a submitted sign-up form.
///
/// # Endpoint
///
/// `POST /subscription` (form-encoded)
///
/// # Response Codes
///
/// - **200 OK**: Valid; the page renders the success dialog. Nothing is stored.
/// - **422 Unprocessable Entity**: Invalid; every field error is shown.
pub async fn subscribe_handler(
    State(state): State<AppState>,
    theme: Theme,
    Form(body): Form<SignupFormBody>,
) -> Response {
    let mut session = state
        .subscription_service
        .restore_session(body.into(), Default::default());

    match session.submit() {
        SubmitOutcome::Accepted => {
            let form = session.form();
            let plan_summary = state
                .catalog_service
                .plan(&form.plan_id)
                .map(|plan| plan_summary(&plan))
                .unwrap_or_default();
            tracing::info!(plan_id = %form.plan_id, "Sign-up accepted");

            let success = SuccessView {
                modal: ModalView {
                    id: "signup-success",
                    title: "Subscription created".to_string(),
                    close_href: href("/subscription", &[("plan", form.plan_id.as_str())]),
                },
                full_name: form.full_name.trim().to_string(),
                email: form.email.trim().to_string(),
                plan_summary,
            };

            render(&state, theme, &session, None, Some(success)).into_response()
        }
        SubmitOutcome::Rejected(errors) => {
            tracing::debug!(errors = errors.len(), "Sign-up rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                render(&state, theme, &session, None, None),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_summary() {
        let mut plan = SubscriptionPlan {
            id: "plan-plus".to_string(),
            name: "Plus".to_string(),
            price: 7.0,
            currency: "USD".to_string(),
            period: "month".to_string(),
            description: String::new(),
            features: vec![],
            highlighted: true,
            badge: String::new(),
        };
        assert_eq!(plan_summary(&plan), "Plus ($7.00 / month)");

        plan.price = 0.0;
        assert_eq!(plan_summary(&plan), "Plus (Free)");
    }
}
