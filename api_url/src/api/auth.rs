use crate::{api::Route, client::ApiRoutes};

/// URLs of the authentication controller.
pub trait AuthRoutes {
    /// Register a new client account.
    fn register_url(&self) -> String;

    /// Log in with phone and password.
    fn login_url(&self) -> String;

    /// Exchange a refresh token for a new access token.
    fn refresh_url(&self) -> String;

    /// Check a taxpayer number (INN) before registration.
    fn validate_inn_url(&self) -> String;
}

impl AuthRoutes for ApiRoutes {
    fn register_url(&self) -> String {
        self.route_url(Route::AuthRegister)
    }

    fn login_url(&self) -> String {
        self.route_url(Route::AuthLogin)
    }

    fn refresh_url(&self) -> String {
        self.route_url(Route::AuthRefresh)
    }

    fn validate_inn_url(&self) -> String {
        self.route_url(Route::AuthValidateInn)
    }
}
