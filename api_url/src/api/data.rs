use crate::{api::Route, client::ApiRoutes};

/// URLs of the supplier data and price analysis controller.
pub trait DataRoutes {
    /// Multipart upload of a supplier spreadsheet.
    fn upload_supplier_data_url(&self) -> String;

    /// Multipart upload of a barcode/quantity sheet to price.
    fn analyze_prices_url(&self) -> String;

    fn download_database_url(&self) -> String;
    fn export_results_url(&self) -> String;
    fn export_supplier_results_url(&self) -> String;
    fn export_history_to_excel_url(&self) -> String;
    fn export_invoice_url(&self) -> String;
}

impl DataRoutes for ApiRoutes {
    fn upload_supplier_data_url(&self) -> String {
        self.route_url(Route::DataUploadSupplierData)
    }

    fn analyze_prices_url(&self) -> String {
        self.route_url(Route::DataAnalyzePrices)
    }

    fn download_database_url(&self) -> String {
        self.route_url(Route::DataDownloadDatabase)
    }

    fn export_results_url(&self) -> String {
        self.route_url(Route::DataExportResults)
    }

    fn export_supplier_results_url(&self) -> String {
        self.route_url(Route::DataExportSupplierResults)
    }

    fn export_history_to_excel_url(&self) -> String {
        self.route_url(Route::DataExportHistoryToExcel)
    }

    fn export_invoice_url(&self) -> String {
        self.route_url(Route::DataExportInvoice)
    }
}
