//! Subscription sign-up service.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::signup::{
    DEFAULT_PLAN_ID, FieldErrors, FormField, SignupSession, SubscriptionForm, validate_form,
};
use crate::domain::entities::SubscriptionPlan;
use crate::domain::repositories::CatalogRepository;

/// Service backing the subscription page.
///
/// Validates sign-up input against the current plan list and builds
/// [`SignupSession`]s for the page handlers. Submitted data is never stored.
pub struct SubscriptionService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> SubscriptionService<R> {
    /// Creates a new subscription service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Plan preselected on first visit: `plan-plus`, or the first plan when
    /// the catalog has no such plan.
    pub fn default_plan_id(&self) -> String {
        let plans = self.repository.plans();
        if plans.iter().any(|p| p.id == DEFAULT_PLAN_ID) {
            DEFAULT_PLAN_ID.to_string()
        } else {
            plans
                .first()
                .map(|p| p.id.clone())
                .unwrap_or_else(|| DEFAULT_PLAN_ID.to_string())
        }
    }

    /// Resolves a requested plan id, falling back to the default plan.
    pub fn resolve_plan(&self, requested: Option<&str>) -> Option<SubscriptionPlan> {
        requested
            .and_then(|id| self.repository.plan_by_id(id))
            .or_else(|| self.repository.plan_by_id(&self.default_plan_id()))
    }

    /// Runs every validation rule against `form`.
    pub fn validate(&self, form: &SubscriptionForm) -> FieldErrors {
        validate_form(form, |id| self.repository.plan_by_id(id).is_some())
    }

    /// Fresh session with `plan_id` preselected when it names a plan.
    pub fn new_session(&self, plan_id: Option<&str>) -> SignupSession {
        let mut session = SignupSession::new(self.plan_ids(), &self.default_plan_id());
        if let Some(id) = plan_id
            && let Err(e) = session.pick_plan(id)
        {
            tracing::debug!(error = %e, "Ignoring requested plan");
        }
        session
    }

    /// Session rebuilt from submitted values and the fields the visitor has
    /// already interacted with.
    pub fn restore_session(
        &self,
        form: SubscriptionForm,
        touched: BTreeSet<FormField>,
    ) -> SignupSession {
        SignupSession::restore(self.plan_ids(), form, touched)
    }

    fn plan_ids(&self) -> Vec<String> {
        self.repository.plans().into_iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::signup::{Phase, SubmitOutcome};
    use crate::domain::repositories::MockCatalogRepository;

    fn create_test_plan(id: &str) -> SubscriptionPlan {
        SubscriptionPlan {
            id: id.to_string(),
            name: id.to_string(),
            price: 0.0,
            currency: "USD".to_string(),
            period: "month".to_string(),
            description: String::new(),
            features: vec![],
            highlighted: false,
            badge: String::new(),
        }
    }

    fn mock_with_plans(ids: &'static [&'static str]) -> MockCatalogRepository {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_plans()
            .returning(move || ids.iter().map(|id| create_test_plan(id)).collect());
        mock_repo.expect_plan_by_id().returning(move |wanted| {
            ids.iter()
                .find(|id| **id == wanted)
                .map(|id| create_test_plan(id))
        });
        mock_repo
    }

    #[test]
    fn test_default_plan_prefers_plus() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&[
            "plan-starter",
            "plan-plus",
        ])));
        assert_eq!(service.default_plan_id(), "plan-plus");
    }

    #[test]
    fn test_default_plan_falls_back_to_first() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&["plan-basic"])));
        assert_eq!(service.default_plan_id(), "plan-basic");
    }

    #[test]
    fn test_validate_uses_catalog_plans() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&["plan-plus"])));

        let mut form = SubscriptionForm {
            full_name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            plan_id: "plan-plus".to_string(),
            consent: true,
        };
        assert!(service.validate(&form).is_empty());

        form.plan_id = "plan-green".to_string();
        let errors = service.validate(&form);
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![FormField::PlanId]);
    }

    #[test]
    fn test_new_session_ignores_unknown_plan() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&[
            "plan-plus",
            "plan-green",
        ])));

        assert_eq!(
            service.new_session(Some("plan-green")).form().plan_id,
            "plan-green"
        );
        assert_eq!(
            service.new_session(Some("plan-gold")).form().plan_id,
            "plan-plus"
        );
    }

    #[test]
    fn test_restored_session_can_succeed() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&["plan-plus"])));
        let mut session = service.restore_session(
            SubscriptionForm {
                full_name: "Sam Lee".to_string(),
                email: "sam@example.com".to_string(),
                plan_id: "plan-plus".to_string(),
                consent: true,
            },
            BTreeSet::new(),
        );

        assert_eq!(session.submit(), SubmitOutcome::Accepted);
        assert_eq!(session.phase(), Phase::Succeeded);
    }

    #[test]
    fn test_restored_session_shows_only_touched_errors() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&["plan-plus"])));
        let session = service.restore_session(
            SubscriptionForm::default(),
            BTreeSet::from([FormField::Email]),
        );

        assert_eq!(session.errors().len(), 3);
        assert_eq!(
            session.visible_errors().keys().copied().collect::<Vec<_>>(),
            vec![FormField::Email]
        );
    }

    #[test]
    fn test_resolve_plan_falls_back_to_default() {
        let service = SubscriptionService::new(Arc::new(mock_with_plans(&[
            "plan-starter",
            "plan-plus",
        ])));

        assert_eq!(
            service.resolve_plan(Some("plan-starter")).unwrap().id,
            "plan-starter"
        );
        assert_eq!(service.resolve_plan(Some("nope")).unwrap().id, "plan-plus");
        assert_eq!(service.resolve_plan(None).unwrap().id, "plan-plus");
    }
}
