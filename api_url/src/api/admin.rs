use crate::{api::Route, client::ApiRoutes};

/// URLs of the admin controller.
pub trait AdminRoutes {
    /// File upload history across all users.
    fn file_upload_history_url(&self) -> String;

    /// Every subscription with its status.
    fn subscriptions_url(&self) -> String;
}

impl AdminRoutes for ApiRoutes {
    fn file_upload_history_url(&self) -> String {
        self.route_url(Route::AdminFileUploadHistory)
    }

    fn subscriptions_url(&self) -> String {
        self.route_url(Route::AdminSubscriptions)
    }
}
