use crate::core::estimator::CostEstimator;
use crate::core::report::{self, ReportDocument, ReportFormat, REPORT_BASENAME};
use crate::core::{ConfigProvider, Estimate, ProjectSpec, Storage};
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// Result of one request. The estimate is always present; only the report
/// export can fail.
#[derive(Debug)]
pub struct EstimationOutcome {
    pub estimate: Estimate,
    pub report: Result<Vec<String>>,
}

pub struct EstimationEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    estimator: CostEstimator,
}

impl<S: Storage, C: ConfigProvider> EstimationEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let estimator = CostEstimator::new(config.pricing().clone());
        Self {
            storage,
            config,
            estimator,
        }
    }

    pub fn estimate(&self, spec: &ProjectSpec) -> Estimate {
        if !spec.material.is_known() {
            tracing::warn!(
                "⚠️ Unrecognized material '{}', using fallback multiplier {}",
                spec.material,
                self.config.pricing().materials.fallback
            );
        }

        let (total_cost, breakdown) = self.estimator.estimate(spec);
        let recommendations = self
            .config
            .pricing()
            .bands
            .recommend(i64::from(spec.complexity));

        Estimate {
            total_cost,
            breakdown,
            recommendations,
        }
    }

    pub fn build_report(&self, spec: &ProjectSpec, estimate: &Estimate) -> ReportDocument {
        report::build_report(
            spec,
            estimate.total_cost,
            &estimate.breakdown,
            &estimate.recommendations,
        )
    }

    /// Writes the report in every configured format and returns the written
    /// locations.
    pub async fn export_report(&self, doc: &ReportDocument) -> Result<Vec<String>> {
        let formats = self.formats();
        let generated_at = Utc::now();
        tracing::debug!(
            "Exporting report to {} as {:?}",
            self.config.output_path(),
            formats
        );

        let mut rendered = Vec::with_capacity(formats.len());
        for format in &formats {
            rendered.push((format.file_name(), report::render(doc, *format, generated_at)?));
        }

        if self.config.compression_enabled() {
            let archive_name = format!("{}.zip", REPORT_BASENAME);
            tracing::debug!("Creating ZIP report with {} files", rendered.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, content) in &rendered {
                    zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                    zip.write_all(content.as_bytes())?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing ZIP report ({} bytes) to storage", zip_data.len());
            self.storage.write_file(&archive_name, &zip_data).await?;
            return Ok(vec![self.storage.display_path(&archive_name)]);
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (name, content) in &rendered {
            self.storage.write_file(name, content.as_bytes()).await?;
            tracing::debug!("Report written: {}", name);
            written.push(self.storage.display_path(name));
        }
        Ok(written)
    }

    pub async fn run(&self, spec: &ProjectSpec) -> EstimationOutcome {
        let estimate = self.estimate(spec);
        tracing::info!("💰 Estimated total cost: {}", report::format_money(estimate.total_cost));

        let doc = self.build_report(spec, &estimate);
        let report = self.export_report(&doc).await;
        if let Err(e) = &report {
            tracing::error!(
                "❌ Report generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
        }

        EstimationOutcome { estimate, report }
    }

    fn formats(&self) -> Vec<ReportFormat> {
        let mut formats: Vec<ReportFormat> = Vec::new();
        for format in self.config.report_formats() {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        if formats.is_empty() {
            formats.push(ReportFormat::Txt);
        }
        formats
    }
}
