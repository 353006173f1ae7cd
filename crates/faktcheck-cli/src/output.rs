//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use faktcheck_domain::{
    Candidate, CheckReport, ReferenceFact, Source, TemporalAssessment, TrustTier, Verdict, VerdictStatus,
};
use std::fmt::Write as _;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

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

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a check report.
    pub fn format_report(&self, report: &CheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
            OutputFormat::Html => Ok(format_report_html(report)),
        }
    }

    /// Format a report as JSON.
    fn format_report_json(&self, report: &CheckReport) -> Result<String> {
        let verdicts: Vec<serde_json::Value> = report.verdicts.iter().map(verdict_json).collect();

        let json = serde_json::json!({
            "id": report.id.to_string(),
            "current_year": report.current_year,
            "summary": {
                "total": report.summary.total,
                "verified": report.summary.verified,
                "disputed": report.summary.disputed,
                "false": report.summary.false_claims
            },
            "verdicts": verdicts
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Format a report as a summary table followed by per-claim details.
    fn format_report_table(&self, report: &CheckReport) -> String {
        let mut out = String::new();

        let mut builder = Builder::default();
        builder.push_record(["Aussagen geprüft", "Verifiziert", "Umstritten", "Falsch"]);
        builder.push_record([
            report.summary.total.to_string(),
            report.summary.verified.to_string(),
            report.summary.disputed.to_string(),
            report.summary.false_claims.to_string(),
        ]);
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let _ = writeln!(out, "Zusammenfassung der Überprüfung");
        let _ = writeln!(out, "{}", table);
        let _ = writeln!(out);
        let _ = writeln!(out, "Detaillierte Analyse");

        for (idx, verdict) in report.verdicts.iter().enumerate() {
            let _ = writeln!(out);
            self.write_verdict(&mut out, idx + 1, verdict);
        }

        out.trim_end().to_string()
    }

    fn write_verdict(&self, out: &mut String, position: usize, verdict: &Verdict) {
        let _ = writeln!(out, "[{}] {}", position, self.status_badge(verdict.status));
        let _ = writeln!(out, "    \"{}\"", verdict.claim);

        if let Some(temporal) = &verdict.temporal {
            let _ = writeln!(out, "    Zeitliche Einordnung: {}", temporal.message);
            if let Some(recommendation) = temporal.recommendation() {
                let _ = writeln!(out, "    {}", self.warning(&format!("Empfehlung: {}", recommendation)));
            }
        }

        let _ = writeln!(out, "    Kontext-Analyse: {}", verdict.interpretation);
        if let Some(correction) = &verdict.correction {
            let _ = writeln!(out, "    Korrektur: {}", correction);
        }

        if verdict.has_sources() {
            let _ = writeln!(out, "    Quellen-Bewertung:");
            for source in &verdict.sources {
                let _ = writeln!(
                    out,
                    "      - {} ({} • Stand: {}) {}",
                    source.name,
                    source.url,
                    source.year,
                    self.trust_rating(source)
                );
            }
        }
    }

    /// Format a report in quiet mode (status and claim per line).
    fn format_report_quiet(&self, report: &CheckReport) -> String {
        report
            .verdicts
            .iter()
            .map(|v| format!("{}\t{}", v.status, v.claim))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format extracted candidates.
    pub fn format_candidates(&self, candidates: &[Candidate]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = candidates
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "text": c.text,
                            "start": c.span.start,
                            "end": c.span.end
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(candidates
                .iter()
                .map(|c| c.text.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Html => {
                let mut out = String::from("<ol class=\"candidates\">\n");
                for candidate in candidates {
                    let _ = writeln!(out, "  <li>{}</li>", escape_html(&candidate.text));
                }
                out.push_str("</ol>");
                Ok(out)
            }
            OutputFormat::Table => {
                if candidates.is_empty() {
                    return Ok(self.colorize("Keine überprüfbaren Fakten gefunden.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Aussage", "Position"]);
                for (idx, candidate) in candidates.iter().enumerate() {
                    builder.push_record([
                        (idx + 1).to_string(),
                        candidate.text.clone(),
                        format!("{}..{}", candidate.span.start, candidate.span.end),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the reference fact table.
    pub fn format_facts(&self, facts: &[ReferenceFact]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = facts
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "key": f.key,
                            "value": f.value,
                            "year": f.year,
                            "source": f.source,
                            "trust_score": f.trust_score,
                            "rating": f.trust_tier().as_str()
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(facts.iter().map(|f| f.key).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table | OutputFormat::Html => {
                let mut builder = Builder::default();
                builder.push_record(["Schlüssel", "Wert", "Stand", "Quelle", "Bewertung"]);
                for fact in facts {
                    builder.push_record([
                        fact.key.to_string(),
                        fact.value.to_string(),
                        fact.year.to_string(),
                        fact.source.to_string(),
                        format!("{} ({:.2})", fact.trust_tier().label(), fact.trust_score),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Badge for a verdict status.
    pub fn status_badge(&self, status: VerdictStatus) -> String {
        match status {
            VerdictStatus::Verified => self.colorize(&format!("✓ {}", status.label()), "green"),
            VerdictStatus::Disputed => self.colorize(&format!("⚠ {}", status.label()), "yellow"),
            VerdictStatus::False => self.colorize(&format!("✗ {}", status.label()), "red"),
        }
    }

    fn trust_rating(&self, source: &Source) -> String {
        let tier = source.trust_tier();
        let color = match tier {
            TrustTier::High => "green",
            TrustTier::Medium => "cyan",
            TrustTier::Low => "yellow",
        };
        self.colorize(&format!("[{}]", tier.label()), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
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
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn verdict_json(verdict: &Verdict) -> serde_json::Value {
    serde_json::json!({
        "claim": verdict.claim,
        "status": verdict.status.as_str(),
        "temporal": verdict.temporal.as_ref().map(temporal_json),
        "interpretation": verdict.interpretation,
        "correction": verdict.correction,
        "sources": verdict.sources.iter().map(source_json).collect::<Vec<_>>()
    })
}

fn temporal_json(temporal: &TemporalAssessment) -> serde_json::Value {
    serde_json::json!({
        "data_year": temporal.data_year,
        "age": temporal.age,
        "is_outdated": temporal.is_outdated,
        "message": temporal.message
    })
}

fn source_json(source: &Source) -> serde_json::Value {
    let tier = source.trust_tier();
    serde_json::json!({
        "name": source.name,
        "url": source.url,
        "trust_score": source.trust_score,
        "year": source.year,
        "rating": tier.label(),
        "rating_class": tier.as_str()
    })
}

/// Render a report as an HTML fragment.
///
/// All free text is escaped before it is embedded.
pub fn format_report_html(report: &CheckReport) -> String {
    let mut html = String::new();
    let summary = &report.summary;

    let _ = writeln!(html, "<div class=\"summary-box\">");
    let _ = writeln!(html, "  <h2 class=\"summary-title\">Zusammenfassung der Überprüfung</h2>");
    let _ = writeln!(html, "  <div class=\"summary-stats\">");
    for (value, label) in [
        (summary.total, "Aussagen geprüft"),
        (summary.verified, "Verifiziert"),
        (summary.disputed, "Umstritten"),
        (summary.false_claims, "Falsch"),
    ] {
        let _ = writeln!(
            html,
            "    <div class=\"stat-item\"><div class=\"stat-value\">{}</div><div class=\"stat-label\">{}</div></div>",
            value, label
        );
    }
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "</div>");
    let _ = writeln!(html, "<h2>Detaillierte Analyse</h2>");

    for verdict in &report.verdicts {
        let status = verdict.status.as_str();
        let _ = writeln!(html, "<div class=\"fact-item {}\">", status);
        let _ = writeln!(
            html,
            "  <div class=\"status-badge {}\">{}</div>",
            status,
            verdict.status.label()
        );
        let _ = writeln!(html, "  <div class=\"fact-text\">\"{}\"</div>", escape_html(&verdict.claim));

        if let Some(temporal) = &verdict.temporal {
            let _ = write!(
                html,
                "  <div class=\"feature-box\"><div class=\"feature-title\">Zeitliche Einordnung</div><div class=\"feature-content\">{}",
                escape_html(&temporal.message)
            );
            if let Some(recommendation) = temporal.recommendation() {
                let _ = write!(html, "<br><strong>Empfehlung:</strong> {}", escape_html(recommendation));
            }
            let _ = writeln!(html, "</div></div>");
        }

        let _ = write!(
            html,
            "  <div class=\"feature-box\"><div class=\"feature-title\">Kontext-Analyse</div><div class=\"feature-content\">{}",
            escape_html(&verdict.interpretation)
        );
        if let Some(correction) = &verdict.correction {
            let _ = write!(html, "<br><strong>Korrektur:</strong> {}", escape_html(correction));
        }
        let _ = writeln!(html, "</div></div>");

        if verdict.has_sources() {
            let _ = writeln!(
                html,
                "  <div class=\"feature-box\"><div class=\"feature-title\">Quellen-Bewertung</div><div class=\"source-list\">"
            );
            for source in &verdict.sources {
                let tier = source.trust_tier();
                let _ = writeln!(
                    html,
                    "    <div class=\"source-item\"><strong>{}</strong> <small>{} • Stand: {}</small> <span class=\"source-score {}\">{}</span></div>",
                    escape_html(&source.name),
                    escape_html(&source.url),
                    source.year,
                    tier.as_str(),
                    tier.label()
                );
            }
            let _ = writeln!(html, "  </div></div>");
        }

        let _ = writeln!(html, "</div>");
    }

    html.trim_end().to_string()
}

/// Escape text for embedding in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format an integer with German thousands separators (83200000 → "83.200.000").
pub fn format_number_de(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
