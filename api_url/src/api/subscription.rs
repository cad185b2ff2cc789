use serde::Serialize;

use crate::{api::Route, client::ApiRoutes, error::ApiUrlError};

#[derive(Debug, Serialize)]
struct EmailQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// URLs of the subscription controller.
pub trait SubscriptionRoutes {
    /// Subscription status, for `email` or for the authenticated user.
    fn subscription_check_url(&self, email: Option<&str>) -> Result<String, ApiUrlError>;

    fn subscription_grant_url(&self) -> String;

    /// Multipart renewal request with a supporting document.
    fn subscription_request_renewal_url(&self) -> String;

    fn subscription_revoke_url(&self, email: &str) -> Result<String, ApiUrlError>;

    fn subscription_trial_info_url(&self) -> String;
}

impl SubscriptionRoutes for ApiRoutes {
    fn subscription_check_url(&self, email: Option<&str>) -> Result<String, ApiUrlError> {
        self.url_with_query(Route::SubscriptionCheck.path(), &EmailQuery { email })
    }

    fn subscription_grant_url(&self) -> String {
        self.route_url(Route::SubscriptionGrant)
    }

    fn subscription_request_renewal_url(&self) -> String {
        self.route_url(Route::SubscriptionRequestRenewal)
    }

    fn subscription_revoke_url(&self, email: &str) -> Result<String, ApiUrlError> {
        self.url_with_query(
            Route::SubscriptionRevoke.path(),
            &EmailQuery { email: Some(email) },
        )
    }

    fn subscription_trial_info_url(&self) -> String {
        self.route_url(Route::SubscriptionTrialInfo)
    }
}
