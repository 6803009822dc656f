use crate::domain::model::{CostBreakdown, ProjectSpec};
use crate::utils::error::{EstimatorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::domain::model::ReportFormat;

pub const REPORT_TITLE: &str = "3D Model Cost Estimator Report";
pub const REPORT_BASENAME: &str = "3d_model_cost_report";
pub const NO_RECOMMENDATIONS: &str = "No specific recommendations for the selected complexity.";
pub const TIPS_INTRO: &str = "To reduce costs and optimize your project, consider the following tips:";

impl ReportFormat {
    pub fn file_name(self) -> String {
        format!("{}.{}", REPORT_BASENAME, self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    /// Lead-in sentence shown on screen only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub lines: Vec<String>,
}

/// Presentation-independent report. Built without any I/O so formatting can be
/// checked on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<ReportSection>,
    pub project: ProjectSpec,
    pub total_cost: f64,
    pub breakdown: CostBreakdown,
    pub recommendations: Vec<String>,
}

impl ReportDocument {
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

pub fn format_money(amount: f64) -> String {
    format!("$ {:.2}", amount)
}

pub fn build_report(
    spec: &ProjectSpec,
    total_cost: f64,
    breakdown: &CostBreakdown,
    recommendations: &[String],
) -> ReportDocument {
    let details = ReportSection {
        heading: "Project Details".to_string(),
        intro: Some("Here's a summary of your project:".to_string()),
        lines: vec![
            format!("- Dimensions: {} cm x {} cm", spec.width, spec.length),
            format!("- Material: {}", spec.material),
            format!("- Complexity: {} (1 = Simple, 10 = Complex)", spec.complexity),
        ],
    };

    let estimated = ReportSection {
        heading: "Estimated Cost".to_string(),
        intro: None,
        lines: vec![format!(
            "- The estimated cost for your project is {}",
            format_money(total_cost)
        )],
    };

    let costs = ReportSection {
        heading: "Cost Breakdown".to_string(),
        intro: Some("Here's the breakdown of the estimated cost:".to_string()),
        lines: vec![
            format!("- Base Cost: {}", format_money(breakdown.base_cost)),
            format!("- Material Cost: {}", format_money(breakdown.material_cost)),
            format!("- Complexity Cost: {}", format_money(breakdown.complexity_cost)),
        ],
    };

    let (tips_intro, tips) = if recommendations.is_empty() {
        (None, vec![NO_RECOMMENDATIONS.to_string()])
    } else {
        let lines = recommendations
            .iter()
            .enumerate()
            .map(|(i, tip)| format!("{}. {}", i + 1, tip))
            .collect();
        (Some(TIPS_INTRO.to_string()), lines)
    };

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        sections: vec![
            details,
            estimated,
            costs,
            ReportSection {
                heading: "Cost-Saving Tips".to_string(),
                intro: tips_intro,
                lines: tips,
            },
        ],
        project: spec.clone(),
        total_cost,
        breakdown: *breakdown,
        recommendations: recommendations.to_vec(),
    }
}

pub fn render_text(doc: &ReportDocument) -> String {
    let mut out = String::new();
    out.push_str(&doc.title);
    out.push('\n');

    for section in &doc.sections {
        out.push('\n');
        out.push_str(&section.heading);
        out.push_str(":\n");
        for line in &section.lines {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

/// Terminal rendering of the same sections, with each section's intro line.
pub fn render_screen(doc: &ReportDocument) -> String {
    let mut out = String::new();

    for section in &doc.sections {
        out.push_str(&section.heading);
        out.push_str(":\n");
        if let Some(intro) = &section.intro {
            out.push_str("  ");
            out.push_str(intro);
            out.push('\n');
        }
        for line in &section.lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_at: DateTime<Utc>,
    project: &'a ProjectSpec,
    total_cost: f64,
    breakdown: &'a CostBreakdown,
    recommendations: &'a [String],
    sections: &'a [ReportSection],
}

pub fn render_json(doc: &ReportDocument, generated_at: DateTime<Utc>) -> Result<String> {
    let report = JsonReport {
        title: &doc.title,
        generated_at,
        project: &doc.project,
        total_cost: doc.total_cost,
        breakdown: &doc.breakdown,
        recommendations: &doc.recommendations,
        sections: &doc.sections,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_csv(doc: &ReportDocument) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["component", "amount"])?;

    let rows = [
        ("base", doc.breakdown.base_cost),
        ("material", doc.breakdown.material_cost),
        ("complexity", doc.breakdown.complexity_cost),
        ("total", doc.total_cost),
    ];
    for (component, amount) in rows {
        let amount = format!("{:.2}", amount);
        writer.write_record([component, amount.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| EstimatorError::ReportError {
        message: format!("Failed to flush CSV report: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EstimatorError::ReportError {
        message: format!("CSV report is not valid UTF-8: {}", e),
    })
}

pub fn render(
    doc: &ReportDocument,
    format: ReportFormat,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        ReportFormat::Txt => Ok(render_text(doc)),
        ReportFormat::Json => render_json(doc, generated_at),
        ReportFormat::Csv => render_csv(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::estimate;
    use crate::core::recommendations::recommend;

    fn sample_document() -> ReportDocument {
        let spec = ProjectSpec::new(50.0, 20.0, "Metal", 2);
        let (total, breakdown) = estimate(&spec);
        build_report(&spec, total, &breakdown, &recommend(2))
    }

    #[test]
    fn test_report_sections_in_order() {
        let doc = sample_document();
        let headings: Vec<&str> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec!["Project Details", "Estimated Cost", "Cost Breakdown", "Cost-Saving Tips"]
        );
        assert_eq!(doc.title, REPORT_TITLE);
    }

    #[test]
    fn test_report_lines() {
        let doc = sample_document();

        let details = doc.section("Project Details").unwrap();
        assert_eq!(details.lines[0], "- Dimensions: 50 cm x 20 cm");
        assert_eq!(details.lines[1], "- Material: Metal");
        assert_eq!(details.lines[2], "- Complexity: 2 (1 = Simple, 10 = Complex)");

        let estimated = doc.section("Estimated Cost").unwrap();
        assert_eq!(
            estimated.lines,
            vec!["- The estimated cost for your project is $ 145.00"]
        );

        let costs = doc.section("Cost Breakdown").unwrap();
        assert_eq!(
            costs.lines,
            vec![
                "- Base Cost: $ 50.00",
                "- Material Cost: $ 75.00",
                "- Complexity Cost: $ 20.00"
            ]
        );

        let tips = doc.section("Cost-Saving Tips").unwrap();
        assert_eq!(tips.lines.len(), 2);
        assert!(tips.lines[0].starts_with("1. Simplify your design"));
        assert!(tips.lines[1].starts_with("2. Consider using standard materials"));
    }

    #[test]
    fn test_empty_recommendations_placeholder() {
        let spec = ProjectSpec::new(10.0, 10.0, "Plastic", 5);
        let (total, breakdown) = estimate(&spec);
        let doc = build_report(&spec, total, &breakdown, &[]);

        let tips = doc.section("Cost-Saving Tips").unwrap();
        assert_eq!(tips.lines, vec![NO_RECOMMENDATIONS]);
    }

    #[test]
    fn test_fractional_dimensions_are_kept() {
        let spec = ProjectSpec::new(12.5, 3.0, "Wood", 4);
        let (total, breakdown) = estimate(&spec);
        let doc = build_report(&spec, total, &breakdown, &recommend(4));
        assert_eq!(
            doc.section("Project Details").unwrap().lines[0],
            "- Dimensions: 12.5 cm x 3 cm"
        );
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_document());
        assert!(text.starts_with("3D Model Cost Estimator Report\n\nProject Details:\n"));
        assert!(text.contains("\nCost Breakdown:\n- Base Cost: $ 50.00\n"));
        assert!(text.ends_with("2. Consider using standard materials to lower material expenses.\n"));
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&sample_document()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "component,amount",
                "base,50.00",
                "material,75.00",
                "complexity,20.00",
                "total,145.00"
            ]
        );
    }

    #[test]
    fn test_render_json() {
        let generated_at = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = render_json(&sample_document(), generated_at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], REPORT_TITLE);
        assert_eq!(value["project"]["material"], "Metal");
        assert_eq!(value["total_cost"], 145.0);
        assert_eq!(value["breakdown"]["material_cost"], 75.0);
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 2);
        assert!(value["generated_at"].as_str().unwrap().starts_with("2024-01-02T03:04:05"));
    }

    #[test]
    fn test_report_file_names() {
        assert_eq!(ReportFormat::Txt.file_name(), "3d_model_cost_report.txt");
        assert_eq!(ReportFormat::Csv.file_name(), "3d_model_cost_report.csv");
    }

    #[test]
    fn test_material_is_echoed_as_entered() {
        let spec = ProjectSpec::new(10.0, 10.0, "metal", 5);
        let (total, breakdown) = estimate(&spec);
        let doc = build_report(&spec, total, &breakdown, &recommend(5));

        let details = doc.section("Project Details").unwrap();
        assert_eq!(details.lines[1], "- Material: metal");
        let costs = doc.section("Cost Breakdown").unwrap();
        assert_eq!(costs.lines[1], "- Material Cost: $ 5.00");
    }

    #[test]
    fn test_render_screen_shares_report_lines() {
        let doc = sample_document();
        let screen = render_screen(&doc);

        assert!(screen.contains(&format!("Cost-Saving Tips:\n  {}\n  1. ", TIPS_INTRO)));
        for section in &doc.sections {
            for line in &section.lines {
                assert!(screen.contains(&format!("  {}\n", line)), "missing {}", line);
            }
        }
        // 檔案輸出不含螢幕引言
        assert!(!render_text(&doc).contains(TIPS_INTRO));
    }

    #[test]
    fn test_no_tips_intro_without_recommendations() {
        let spec = ProjectSpec::new(10.0, 10.0, "Plastic", 5);
        let (total, breakdown) = estimate(&spec);
        let doc = build_report(&spec, total, &breakdown, &[]);

        let tips = doc.section("Cost-Saving Tips").unwrap();
        assert_eq!(tips.intro, None);
        assert!(render_screen(&doc).contains(&format!("  {}\n", NO_RECOMMENDATIONS)));
    }
}
