//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use truthlens_domain::{RiskLevel, ScoreResult};
use truthlens_verifier::VerificationReport;

/// Claims longer than this are shortened in table output
const CLAIM_DISPLAY_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a whole-text score.
    pub fn format_score(&self, result: &ScoreResult) -> Result<String> {
        let result = result.rounded();
        match self.format {
            OutputFormat::Json => self.format_score_json(&result),
            OutputFormat::Table => Ok(self.format_score_table(&result)),
            OutputFormat::Quiet => Ok(format!("{:.3} {}", result.confidence, result.risk)),
        }
    }

    /// Format a verification report.
    pub fn format_report(&self, report: &VerificationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(format!(
                "{:.1} {}",
                report.overall_score, report.hallucination_risk
            )),
        }
    }

    fn format_score_json(&self, result: &ScoreResult) -> Result<String> {
        let features: serde_json::Map<String, serde_json::Value> = result
            .features
            .pairs()
            .into_iter()
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();

        let json = serde_json::json!({
            "confidence": result.confidence,
            "risk": result.risk.as_str(),
            "linguistic_score": result.linguistic_score,
            "semantic_score": result.semantic_score,
            "factual_score": result.factual_score,
            "features": features,
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_score_table(&self, result: &ScoreResult) -> String {
        let mut scores = Builder::default();
        scores.push_record(["Model", "Score"]);
        for (model, score) in [
            ("linguistic", result.linguistic_score),
            ("semantic", result.semantic_score),
            ("factual", result.factual_score),
            ("ensemble", result.confidence),
        ] {
            scores.push_record([model.to_string(), format!("{:.3}", score)]);
        }

        let mut features = Builder::default();
        features.push_record(["Feature", "Value"]);
        for (name, value) in result.features.pairs() {
            features.push_record([name.to_string(), format_feature(value)]);
        }

        format!(
            "{}\n{}\n{}",
            self.styled(scores),
            self.styled(features),
            self.risk_line("Risk", result.risk),
        )
    }

    fn format_report_json(&self, report: &VerificationReport) -> Result<String> {
        let claims: Vec<serde_json::Value> = report
            .claims
            .iter()
            .map(|c| {
                serde_json::json!({
                    "claim": c.claim,
                    "verified": c.verified,
                    "confidence": c.confidence,
                    "sources": c.sources,
                    "risk_level": c.risk_level.as_str(),
                })
            })
            .collect();

        let json = serde_json::json!({
            "overall_score": report.overall_score,
            "confidence": report.confidence,
            "hallucination_risk": report.hallucination_risk.as_str(),
            "claims": claims,
            "processing_time": report.processing_time,
            "timestamp": report.timestamp,
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_report_table(&self, report: &VerificationReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Claim", "Verified", "Confidence", "Sources", "Risk"]);

        for (i, claim) in report.claims.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                truncate(&claim.claim, CLAIM_DISPLAY_CHARS),
                if claim.verified { "yes" } else { "no" }.to_string(),
                format!("{:.1}%", claim.confidence),
                claim.sources.to_string(),
                claim.risk_level.to_string(),
            ]);
        }

        let mut out = self.styled(builder);
        if report.used_fallback {
            out.push('\n');
            out.push_str(
                &self.warning("No sentence qualified as a claim; scored the text as a whole"),
            );
        }

        format!(
            "{}\n{}\n{}",
            out,
            self.info(&format!(
                "Overall score: {:.1}% ({} of {} claims verified, {:.3}s)",
                report.overall_score,
                report.verified_count(),
                report.claims.len(),
                report.processing_time,
            )),
            self.risk_line("Hallucination risk", report.hallucination_risk),
        )
    }

    fn styled(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn risk_line(&self, label: &str, risk: RiskLevel) -> String {
        let color = match risk {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High => "red",
        };
        format!("{}: {}", label, self.colorize(risk.as_str(), color))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Whole numbers print without decimals, ratios with three
fn format_feature(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.3}", value)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", head)
}
