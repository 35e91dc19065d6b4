//! DTOs for the sign-up validation endpoint and the subscription page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::api::dto::catalog::{PlanResponse, is_checked};
use crate::application::signup::{FieldErrors, FormField, SubscriptionForm};

/// Body of `POST /api/subscription/validate`.
///
/// `touched` lists the fields the visitor has interacted with; only their
/// errors are reported as visible. `submit` marks every field touched.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(flatten)]
    pub form: SubscriptionForm,

    #[serde(default)]
    pub touched: BTreeSet<FormField>,

    #[serde(default)]
    pub submit: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: FieldErrors,
    pub visible_errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanResponse>,
}

/// Sign-up form as posted by the HTML page.
///
/// An unchecked checkbox is simply missing from the body, so `consent`
/// arrives as an optional string.
#[derive(Debug, Default, Deserialize)]
pub struct SignupFormBody {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub plan_id: String,
    #[serde(default)]
    pub consent: Option<String>,
}

impl From<SignupFormBody> for SubscriptionForm {
    fn from(body: SignupFormBody) -> Self {
        Self {
            full_name: body.full_name,
            email: body.email,
            plan_id: body.plan_id.trim().to_string(),
            consent: is_checked(body.consent.as_deref()),
        }
    }
}

/// Query parameters of `GET /subscription`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct SubscriptionQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub plan: Option<String>,

    /// Open FAQ panels, comma separated.
    #[serde(default)]
    pub open: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_request_defaults() {
        let request: ValidateRequest =
            serde_json::from_value(json!({ "email": "a@b.co" })).unwrap();

        assert_eq!(request.form.email, "a@b.co");
        assert_eq!(request.form.plan_id, "");
        assert!(!request.form.consent);
        assert!(request.touched.is_empty());
        assert!(!request.submit);
    }

    #[test]
    fn test_validate_request_touched_fields() {
        let request: ValidateRequest = serde_json::from_value(json!({
            "full_name": "J",
            "touched": ["full_name", "plan_id"],
        }))
        .unwrap();

        assert_eq!(
            request.touched,
            BTreeSet::from([FormField::FullName, FormField::PlanId])
        );
    }

    #[test]
    fn test_missing_checkbox_means_no_consent() {
        let form: SubscriptionForm = SignupFormBody {
            full_name: "Jo".to_string(),
            ..SignupFormBody::default()
        }
        .into();
        assert!(!form.consent);

        let form: SubscriptionForm = SignupFormBody {
            consent: Some("on".to_string()),
            ..SignupFormBody::default()
        }
        .into();
        assert!(form.consent);
    }

    #[test]
    fn test_form_body_trims_plan_id() {
        let form: SubscriptionForm = SignupFormBody {
            plan_id: " plan-green\n".to_string(),
            ..SignupFormBody::default()
        }
        .into();
        assert_eq!(form.plan_id, "plan-green");
    }
}
