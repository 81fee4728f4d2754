// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering
//!
//! HTML output is a single self-contained page (inline CSS and script, no
//! external assets). Values are HTML-escaped by the template engine.

use chrono::{DateTime, Utc};
use minijinja::{Environment, context};

use crate::error::RenderError;
use crate::report::Report;

const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("../templates/report.html");

/// Metadata shown alongside the report
#[derive(Debug, Clone)]
pub struct RenderMeta {
    /// Repository the report was generated from
    pub repository: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

/// Render a report as an HTML page
///
/// # Errors
///
/// Returns `RenderError::Template` if the template fails to render.
pub fn render_html(report: &Report, meta: &RenderMeta) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;
    let template = env.get_template(REPORT_TEMPLATE_NAME)?;

    let html = template.render(context! {
        groups => &report.groups,
        tag_count => report.tag_count(),
        commit_count => report.commit_count(),
        repository => &meta.repository,
        generated_at => meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })?;
    Ok(html)
}

/// Render a report as pretty-printed JSON
///
/// # Errors
///
/// Returns `RenderError::Json` if serialization fails.
pub fn render_json(report: &Report) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;
    use crate::options::ReportOptions;
    use crate::report::{GroupEntry, TagEntry, build_report};
    use chrono::TimeZone;

    fn meta() -> RenderMeta {
        RenderMeta {
            repository: "/srv/app".to_string(),
            generated_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
        }
    }

    fn sample_report() -> Report {
        let source = MemorySource::linear(&[("v1.0.1", 2), ("prd-v1", 3), ("prd-v2", 60)]);
        build_report(&source, &ReportOptions::default()).unwrap()
    }

    #[test]
    fn test_html_contains_groups_tags_and_commits() {
        let html = render_html(&sample_report(), &meta()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(">prd-v<"));
        assert!(html.contains(">stg<"));
        assert!(html.contains("prd-v2"));
        assert!(html.contains("change 65"));
        assert!(html.contains("showing at most 50 commits"));
        assert!(html.contains("/srv/app"));
        assert!(html.contains("2026-03-01 08:30:00 UTC"));
    }

    #[test]
    fn test_html_escapes_commit_subjects() {
        let report = Report {
            groups: vec![GroupEntry {
                display_name: "prd-v".to_string(),
                prefix: "prd-v".to_string(),
                tags: vec![TagEntry {
                    name: "prd-v<1>".to_string(),
                    commits: vec![crate::report::CommitRecord {
                        short_hash: "abcdef0".to_string(),
                        date: chrono::NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
                        subject: "<script>alert('x')</script>".to_string(),
                    }],
                    truncated: false,
                    truncation_note: String::new(),
                }],
            }],
        };

        let html = render_html(&report, &meta()).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("prd-v&lt;1&gt;"));
    }

    #[test]
    fn test_html_for_empty_report() {
        let html = render_html(&Report::default(), &meta()).unwrap();
        assert!(html.contains("No tags matched"));
    }

    #[test]
    fn test_json_matches_serde_output() {
        let report = sample_report();
        let json = render_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
