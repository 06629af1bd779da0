use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::artifact::SourceArtifact;
use crate::checks::CheckResult;

pub const SOURCE_HEADER: &str = "=== Functions Source Code ===";
pub const ANALYSIS_HEADER: &str = "=== Code Analysis ===";

const MARKER: &str = "\u{2705}";

/// Styles `text` only when `color` is set; the caller decides for its writer.
fn paint(text: &str, color: bool, style: Style) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

pub fn print_artifact(out: &mut impl Write, artifact: &SourceArtifact, color: bool) {
    writeln!(out, "{}", paint(SOURCE_HEADER, color, Style::new().bold())).ok();
    writeln!(out, "{}", artifact.text()).ok();
}

/// One line per outcome, same marker regardless of the value.
pub fn print_results(out: &mut impl Write, results: &CheckResult, color: bool) {
    writeln!(out).ok();
    writeln!(out, "{}", paint(ANALYSIS_HEADER, color, Style::new().bold())).ok();
    for outcome in results.outcomes() {
        let value = if outcome.passed {
            paint("true", color, Style::new().green())
        } else {
            paint("false", color, Style::new().red())
        };
        writeln!(out, "{} {}: {}", MARKER, outcome.label, value).ok();
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    artifact: String,
    checks: &'a CheckResult,
}

pub fn render_json(artifact_path: &Path, results: &CheckResult) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        artifact: artifact_path.display().to_string(),
        checks: results,
    };
    serde_json::to_string_pretty(&report)
}

pub fn print_json(
    out: &mut impl Write,
    artifact_path: &Path,
    results: &CheckResult,
) -> Result<(), serde_json::Error> {
    let rendered = render_json(artifact_path, results)?;
    writeln!(out, "{}", rendered).ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{evaluate_checks, CHECK_DEFINITIONS};

    fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn artifact_is_printed_verbatim_after_header() {
        let artifact = SourceArtifact::new("a.js", "line one\n  line two");
        let out = render(|buf| print_artifact(buf, &artifact, false));
        let header_at = out.find(SOURCE_HEADER).unwrap();
        let body_at = out.find("line one\n  line two").unwrap();
        assert!(header_at < body_at);
        assert!(out.ends_with("line two\n"));
    }

    #[test]
    fn results_print_one_line_per_check_in_order() {
        let artifact = SourceArtifact::new("a.js", "APCA-API-KEY-ID");
        let results = evaluate_checks(&artifact, CHECK_DEFINITIONS);
        let out = render(|buf| print_results(buf, &results, false));

        let lines: Vec<&str> = out.lines().filter(|l| l.starts_with(MARKER)).collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Secrets validation: ") && lines[0].contains("false"));
        assert!(lines[2].contains("Headers setup: ") && lines[2].contains("true"));
        assert!(lines[4].contains("Error handling: "));
    }

    #[test]
    fn analysis_header_is_preceded_by_blank_line() {
        let out = render(|buf| print_results(buf, &CheckResult::default(), false));
        assert!(out.starts_with('\n'));
        assert!(out.contains(ANALYSIS_HEADER));
    }

    #[test]
    fn printing_does_not_alter_inputs() {
        let artifact = SourceArtifact::new("a.js", "response.error");
        let before = artifact.clone();
        let results = evaluate_checks(&artifact, CHECK_DEFINITIONS);
        let results_before = results.clone();

        render(|buf| {
            print_artifact(buf, &artifact, true);
            print_results(buf, &results, true);
            print_json(buf, artifact.path(), &results).unwrap();
        });

        assert_eq!(artifact, before);
        assert_eq!(results, results_before);
    }

    #[test]
    fn plain_mode_writes_no_escape_codes() {
        let artifact = SourceArtifact::new("a.js", "secrets.alpacaKey");
        let results = evaluate_checks(&artifact, CHECK_DEFINITIONS);
        let out = render(|buf| {
            print_artifact(buf, &artifact, false);
            print_results(buf, &results, false);
        });
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn color_mode_styles_header_and_values() {
        let artifact = SourceArtifact::new("a.js", "secrets.alpacaKey");
        let results = evaluate_checks(&artifact, CHECK_DEFINITIONS);
        let out = render(|buf| print_results(buf, &results, true));
        assert!(out.contains('\x1b'));
        assert!(out.contains(ANALYSIS_HEADER));
        assert!(out.contains("Secrets validation: "));
    }

    #[test]
    fn json_lists_checks_in_order() {
        let artifact = SourceArtifact::new("functions/sources/alpacaBalance.js", "secrets.alpacaKey");
        let results = evaluate_checks(&artifact, CHECK_DEFINITIONS);
        let json: serde_json::Value =
            serde_json::from_str(&render_json(artifact.path(), &results).unwrap()).unwrap();

        assert_eq!(json["artifact"], "functions/sources/alpacaBalance.js");
        let checks = json["checks"].as_array().unwrap();
        assert_eq!(checks.len(), 5);
        assert_eq!(checks[0]["label"], "Secrets validation");
        assert_eq!(checks[0]["passed"], true);
        assert_eq!(checks[1]["passed"], false);
    }
}
