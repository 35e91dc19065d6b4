//! Subscription sign-up form: validation rules and the per-visitor session.
//!
//! Validation runs eagerly on every change, but an error is only *visible*
//! once its field has been touched or a submission was attempted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

/// local@domain.tld with no whitespace and exactly one `@`.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const DEFAULT_PLAN_ID: &str = "plan-plus";

pub const MSG_NAME_REQUIRED: &str = "Please enter your name.";
pub const MSG_NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MSG_PLAN_REQUIRED: &str = "Please select a plan.";
pub const MSG_CONSENT_REQUIRED: &str =
    "Please confirm you agree to be contacted about your plan.";

/// Fields of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Email,
    PlanId,
    Consent,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FullName,
        FormField::Email,
        FormField::PlanId,
        FormField::Consent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "full_name",
            FormField::Email => "email",
            FormField::PlanId => "plan_id",
            FormField::Consent => "consent",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// One field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Machine-readable rule: `required`, `too_short` or `invalid_format`.
    pub code: String,
    pub message: String,
}

/// Field name to error. Empty means the form is valid.
pub type FieldErrors = BTreeMap<FormField, FieldError>;

/// Raw sign-up input as entered by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SubscriptionForm {
    #[validate(custom(function = "validate_full_name"))]
    #[serde(default)]
    pub full_name: String,

    #[validate(custom(function = "validate_email"))]
    #[serde(default)]
    pub email: String,

    /// Checked against the catalog by [`validate_form`], not by the derive.
    #[serde(default)]
    pub plan_id: String,

    #[validate(custom(function = "validate_consent"))]
    #[serde(default)]
    pub consent: bool,
}

impl SubscriptionForm {
    /// Empty form with the given plan preselected.
    pub fn with_plan(plan_id: impl Into<String>) -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            plan_id: plan_id.into(),
            consent: false,
        }
    }
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self::with_plan(DEFAULT_PLAN_ID)
    }
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    let name = value.trim();
    if name.is_empty() {
        Err(rule("required", MSG_NAME_REQUIRED))
    } else if name.chars().count() < 2 {
        Err(rule("too_short", MSG_NAME_TOO_SHORT))
    } else {
        Ok(())
    }
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    let email = value.trim();
    if email.is_empty() {
        Err(rule("required", MSG_EMAIL_REQUIRED))
    } else if !EMAIL_REGEX.is_match(email) {
        Err(rule("invalid_format", MSG_EMAIL_INVALID))
    } else {
        Ok(())
    }
}

fn validate_consent(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(rule("required", MSG_CONSENT_REQUIRED))
    }
}

/// Converts derive-level errors into the per-field mapping.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();

    for (field, errs) in errors.field_errors() {
        let name: &str = field.as_ref();
        let (Some(field), Some(first)) = (FormField::from_name(name), errs.first()) else {
            continue;
        };
        out.insert(
            field,
            FieldError {
                code: first.code.to_string(),
                message: first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string()),
            },
        );
    }

    out
}

/// Validates every field of `form`.
///
/// `plan_exists` answers whether a plan id resolves to a known plan.
pub fn validate_form(form: &SubscriptionForm, plan_exists: impl Fn(&str) -> bool) -> FieldErrors {
    let mut errors = match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => field_errors(&e),
    };

    if !plan_exists(&form.plan_id) {
        errors.insert(
            FormField::PlanId,
            FieldError {
                code: "required".to_string(),
                message: MSG_PLAN_REQUIRED.to_string(),
            },
        );
    }

    errors
}

/// Where a sign-up session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Editing,
    Succeeded,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No errors: the session moved to [`Phase::Succeeded`].
    Accepted,
    /// Errors remain; every field is now touched.
    Rejected(FieldErrors),
}

/// A single edit to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Consent(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::FullName(_) => FormField::FullName,
            FieldUpdate::Email(_) => FormField::Email,
            FieldUpdate::Consent(_) => FormField::Consent,
        }
    }
}

/// Returned by [`SignupSession::pick_plan`] for an id that is not a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan '{0}'")]
pub struct UnknownPlan(pub String);

/// Sign-up state owned by one visitor for the lifetime of the page.
///
/// Holds the form, the touched set, the current errors and the phase.
/// Nothing is persisted; acknowledging success discards the entered data.
#[derive(Debug, Clone)]
pub struct SignupSession {
    known_plans: Vec<String>,
    form: SubscriptionForm,
    touched: BTreeSet<FormField>,
    errors: FieldErrors,
    phase: Phase,
}

impl SignupSession {
    /// Fresh session with `default_plan` preselected.
    pub fn new(known_plans: Vec<String>, default_plan: &str) -> Self {
        Self::restore(
            known_plans,
            SubscriptionForm::with_plan(default_plan),
            BTreeSet::new(),
        )
    }

    /// Rebuilds a session from previously entered values.
    ///
    /// The plan id is stored trimmed so later lookups see the same id the
    /// validator checked.
    pub fn restore(
        known_plans: Vec<String>,
        mut form: SubscriptionForm,
        touched: BTreeSet<FormField>,
    ) -> Self {
        form.plan_id = form.plan_id.trim().to_string();

        let mut session = Self {
            known_plans,
            form,
            touched,
            errors: FieldErrors::new(),
            phase: Phase::Editing,
        };
        session.revalidate();
        session
    }

    pub fn form(&self) -> &SubscriptionForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All current errors, touched or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Applies an edit and re-validates.
    pub fn update(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FullName(v) => self.form.full_name = v,
            FieldUpdate::Email(v) => self.form.email = v,
            FieldUpdate::Consent(v) => self.form.consent = v,
        }
        self.revalidate();
    }

    /// Marks a field as interacted with (blur).
    pub fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Selects a plan. Unknown ids leave the form unchanged.
    pub fn pick_plan(&mut self, plan_id: &str) -> Result<(), UnknownPlan> {
        if !self.plan_exists(plan_id) {
            return Err(UnknownPlan(plan_id.to_string()));
        }
        self.form.plan_id = plan_id.to_string();
        self.revalidate();
        Ok(())
    }

    /// Errors that should be shown: touched fields only.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.contains(field))
            .map(|(field, error)| (*field, error.clone()))
            .collect()
    }

    /// Attempts submission. Every field becomes touched either way.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.touched.extend(FormField::ALL);
        self.revalidate();

        if self.errors.is_empty() {
            self.phase = Phase::Succeeded;
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }

    /// Dismisses the success state: resets the form but keeps the plan.
    pub fn acknowledge(&mut self) {
        let plan_id = std::mem::take(&mut self.form.plan_id);
        self.form = SubscriptionForm::with_plan(plan_id);
        self.touched.clear();
        self.phase = Phase::Editing;
        self.revalidate();
    }

    fn plan_exists(&self, plan_id: &str) -> bool {
        self.known_plans.iter().any(|p| p == plan_id)
    }

    fn revalidate(&mut self) {
        let known = &self.known_plans;
        self.errors = validate_form(&self.form, |id| known.iter().any(|p| p == id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plans() -> Vec<String> {
        vec![
            "plan-starter".to_string(),
            "plan-plus".to_string(),
            "plan-green".to_string(),
        ]
    }

    fn validate(form: &SubscriptionForm) -> FieldErrors {
        let known = plans();
        validate_form(form, |id| known.iter().any(|p| p == id))
    }

    fn form(full_name: &str, email: &str, plan_id: &str, consent: bool) -> SubscriptionForm {
        SubscriptionForm {
            full_name: full_name.to_string(),
            email: email.to_string(),
            plan_id: plan_id.to_string(),
            consent,
        }
    }

    #[test]
    fn test_empty_name_is_the_only_error() {
        let errors = validate(&form("", "a@b.com", "plan-plus", true));

        assert_eq!(errors.len(), 1);
        let err = &errors[&FormField::FullName];
        assert_eq!(err.code, "required");
        assert_eq!(err.message, MSG_NAME_REQUIRED);
    }

    #[test]
    fn test_bad_email_is_the_only_error() {
        let errors = validate(&form("Jo", "not-an-email", "plan-plus", true));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FormField::Email].code, "invalid_format");
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&form("Jo Park", " jo@example.org ", "plan-green", true)).is_empty());
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(
            validate(&form("   ", "a@b.co", "plan-plus", true))[&FormField::FullName].code,
            "required"
        );
        assert_eq!(
            validate(&form(" J ", "a@b.co", "plan-plus", true))[&FormField::FullName].message,
            MSG_NAME_TOO_SHORT
        );
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["a@b", "@b.com", "a b@c.com", "a@@b.com", "a@b .com"] {
            let errors = validate(&form("Jo", bad, "plan-plus", true));
            assert!(errors.contains_key(&FormField::Email), "{bad} should fail");
        }
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(validate(&form("Jo", good, "plan-plus", true)).is_empty());
        }
        assert_eq!(
            validate(&form("Jo", "  ", "plan-plus", true))[&FormField::Email].message,
            MSG_EMAIL_REQUIRED
        );
    }

    #[test]
    fn test_unknown_plan_and_missing_consent() {
        let errors = validate(&form("Jo", "a@b.co", "plan-gold", false));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&FormField::PlanId].message, MSG_PLAN_REQUIRED);
        assert_eq!(errors[&FormField::Consent].message, MSG_CONSENT_REQUIRED);
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut session = SignupSession::new(plans(), DEFAULT_PLAN_ID);

        assert!(!session.errors().is_empty());
        assert!(session.visible_errors().is_empty());

        session.update(FieldUpdate::FullName("J".to_string()));
        assert!(session.visible_errors().is_empty());

        session.touch(FormField::FullName);
        let visible = session.visible_errors();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[&FormField::FullName].message, MSG_NAME_TOO_SHORT);
    }

    #[test]
    fn test_rejected_submit_reveals_all_errors() {
        let mut session = SignupSession::new(plans(), DEFAULT_PLAN_ID);

        let outcome = session.submit();

        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.len() == 3));
        assert_eq!(session.phase(), Phase::Editing);
        assert_eq!(session.visible_errors().len(), 3);
        assert!(FormField::ALL.iter().all(|f| session.is_touched(*f)));
    }

    #[test]
    fn test_accepted_submit_then_acknowledge_keeps_plan() {
        let mut session = SignupSession::new(plans(), DEFAULT_PLAN_ID);
        session.pick_plan("plan-green").unwrap();
        session.update(FieldUpdate::FullName("Jo".to_string()));
        session.update(FieldUpdate::Email("jo@example.com".to_string()));
        session.update(FieldUpdate::Consent(true));

        assert_eq!(session.submit(), SubmitOutcome::Accepted);
        assert_eq!(session.phase(), Phase::Succeeded);

        session.acknowledge();

        assert_eq!(session.phase(), Phase::Editing);
        assert_eq!(session.form(), &SubscriptionForm::with_plan("plan-green"));
        assert!(session.visible_errors().is_empty());
    }

    #[test]
    fn test_pick_unknown_plan_is_rejected() {
        let mut session = SignupSession::new(plans(), DEFAULT_PLAN_ID);

        let err = session.pick_plan("plan-gold").unwrap_err();

        assert_eq!(err, UnknownPlan("plan-gold".to_string()));
        assert_eq!(session.form().plan_id, DEFAULT_PLAN_ID);
    }

    #[test]
    fn test_pick_plan_clears_plan_error() {
        let mut session = SignupSession::restore(
            plans(),
            SubscriptionForm::with_plan("gone"),
            BTreeSet::from([FormField::PlanId]),
        );
        assert!(session.visible_errors().contains_key(&FormField::PlanId));

        session.pick_plan("plan-starter").unwrap();

        assert!(!session.errors().contains_key(&FormField::PlanId));
    }

    #[test]
    fn test_padded_plan_id_is_stored_trimmed() {
        let session = SignupSession::restore(
            plans(),
            form("Jo Park", "jo@example.com", " plan-plus ", true),
            BTreeSet::new(),
        );

        assert_eq!(session.form().plan_id, "plan-plus");
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_validator_compares_plan_id_exactly() {
        let errors = validate(&form("Jo Park", "jo@example.com", " plan-plus ", true));
        assert!(errors.contains_key(&FormField::PlanId));
    }

    #[test]
    fn test_form_field_names() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("nickname"), None);
    }
}
