use crate::domain::model::{PricingModel, ReportFormat};
use crate::utils::error::Result;

/// Write-only sink for report files.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Location of `path` as shown to the user.
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn pricing(&self) -> &PricingModel;
    fn output_path(&self) -> &str;
    fn report_formats(&self) -> &[ReportFormat];
    fn compression_enabled(&self) -> bool;
}
