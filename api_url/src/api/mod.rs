//! Catalogue of the backend's endpoints.
//!
//! Paths are relative to the base URL, which already carries the `/api`
//! prefix the backend mounts its controllers under.

pub mod admin;
pub mod auth;
pub mod data;
pub mod subscription;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use http::Method;
use serde::Serialize;

use crate::error::ApiUrlError;

pub use admin::AdminRoutes;
pub use auth::AuthRoutes;
pub use data::DataRoutes;
pub use subscription::SubscriptionRoutes;

/// Controller a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteArea {
    Auth,
    Data,
    Subscription,
    Admin,
}

impl RouteArea {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteArea::Auth => "auth",
            RouteArea::Data => "data",
            RouteArea::Subscription => "subscription",
            RouteArea::Admin => "admin",
        }
    }
}

impl Display for RouteArea {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    AuthRegister,
    AuthLogin,
    AuthRefresh,
    AuthValidateInn,
    DataUploadSupplierData,
    DataAnalyzePrices,
    DataDownloadDatabase,
    DataExportResults,
    DataExportSupplierResults,
    DataExportHistoryToExcel,
    DataExportInvoice,
    SubscriptionCheck,
    SubscriptionGrant,
    SubscriptionRequestRenewal,
    SubscriptionRevoke,
    SubscriptionTrialInfo,
    AdminFileUploadHistory,
    AdminSubscriptions,
}

impl Route {
    pub const ALL: [Route; 18] = [
        Route::AuthRegister,
        Route::AuthLogin,
        Route::AuthRefresh,
        Route::AuthValidateInn,
        Route::DataUploadSupplierData,
        Route::DataAnalyzePrices,
        Route::DataDownloadDatabase,
        Route::DataExportResults,
        Route::DataExportSupplierResults,
        Route::DataExportHistoryToExcel,
        Route::DataExportInvoice,
        Route::SubscriptionCheck,
        Route::SubscriptionGrant,
        Route::SubscriptionRequestRenewal,
        Route::SubscriptionRevoke,
        Route::SubscriptionTrialInfo,
        Route::AdminFileUploadHistory,
        Route::AdminSubscriptions,
    ];

    /// Endpoint path relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Route::AuthRegister => "/auth/register",
            Route::AuthLogin => "/auth/login",
            Route::AuthRefresh => "/auth/refresh",
            Route::AuthValidateInn => "/auth/validate-inn",
            Route::DataUploadSupplierData => "/data/upload-supplier-data",
            Route::DataAnalyzePrices => "/data/analyze-prices",
            Route::DataDownloadDatabase => "/data/download-database",
            Route::DataExportResults => "/data/export-results",
            Route::DataExportSupplierResults => "/data/export-supplier-results",
            Route::DataExportHistoryToExcel => "/data/export-history-to-excel",
            Route::DataExportInvoice => "/data/export-invoice",
            Route::SubscriptionCheck => "/subscription/check",
            Route::SubscriptionGrant => "/subscription/grant",
            Route::SubscriptionRequestRenewal => "/subscription/request-renewal",
            Route::SubscriptionRevoke => "/subscription/revoke",
            Route::SubscriptionTrialInfo => "/subscription/trial-info",
            Route::AdminFileUploadHistory => "/admin/file-upload-history",
            Route::AdminSubscriptions => "/admin/subscriptions",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Route::DataDownloadDatabase
            | Route::SubscriptionCheck
            | Route::SubscriptionTrialInfo
            | Route::AdminFileUploadHistory
            | Route::AdminSubscriptions => Method::GET,
            Route::SubscriptionRevoke => Method::DELETE,
            _ => Method::POST,
        }
    }

    pub fn area(self) -> RouteArea {
        match self {
            Route::AuthRegister | Route::AuthLogin | Route::AuthRefresh | Route::AuthValidateInn => {
                RouteArea::Auth
            }
            Route::DataUploadSupplierData
            | Route::DataAnalyzePrices
            | Route::DataDownloadDatabase
            | Route::DataExportResults
            | Route::DataExportSupplierResults
            | Route::DataExportHistoryToExcel
            | Route::DataExportInvoice => RouteArea::Data,
            Route::SubscriptionCheck
            | Route::SubscriptionGrant
            | Route::SubscriptionRequestRenewal
            | Route::SubscriptionRevoke
            | Route::SubscriptionTrialInfo => RouteArea::Subscription,
            Route::AdminFileUploadHistory | Route::AdminSubscriptions => RouteArea::Admin,
        }
    }

    /// Kebab-case name: the area followed by the last path segment,
    /// e.g. `auth-login`.
    pub fn name(self) -> String {
        let last = self.path().rsplit('/').next().unwrap_or_default();
        format!("{}-{}", self.area(), last)
    }

    /// Whether the backend expects a `multipart/form-data` body.
    pub fn is_multipart(self) -> bool {
        matches!(
            self,
            Route::DataUploadSupplierData
                | Route::DataAnalyzePrices
                | Route::SubscriptionRequestRenewal
        )
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Route {
    type Err = ApiUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Route::ALL
            .into_iter()
            .find(|route| route.name() == wanted)
            .ok_or_else(|| ApiUrlError::UnknownRoute(wanted.to_string()))
    }
}
