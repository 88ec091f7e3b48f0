//! Text rendering of validation findings

use radiocfg_core::{Field, FieldGroup, Finding, Severity, ValidationReport};

fn group_of(finding: &Finding) -> Option<FieldGroup> {
    finding.fields.first().map(Field::group)
}

fn render_finding(finding: &Finding) -> String {
    let names: Vec<&str> = finding.fields.iter().map(Field::as_str).collect();
    let labels: Vec<&str> = finding.fields.iter().map(Field::display_name).collect();
    format!(
        "  {} [{}] {}: {}\n",
        finding.severity,
        names.join(", "),
        labels.join(", "),
        finding.message
    )
}

/// Findings under a heading per field group, followed by a totals line
pub fn render(report: &ValidationReport) -> String {
    let mut out = String::new();
    for group in FieldGroup::ALL {
        let mut findings = report
            .findings
            .iter()
            .filter(|f| group_of(f) == Some(group))
            .peekable();
        if findings.peek().is_none() {
            continue;
        }
        out.push_str(&format!("{}\n", group.display_name()));
        for finding in findings {
            out.push_str(&render_finding(finding));
        }
    }
    for finding in report.findings.iter().filter(|f| group_of(f).is_none()) {
        out.push_str(&format!("{finding}\n"));
    }
    out.push_str(&summary(report));
    out.push('\n');
    out
}

pub fn summary(report: &ValidationReport) -> String {
    let count = |severity: Severity| {
        report
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    };
    format!(
        "{} error(s), {} warning(s), {} notice(s)",
        count(Severity::Error),
        count(Severity::Warning),
        count(Severity::Info)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let report = ValidationReport {
            findings: vec![
                Finding {
                    severity: Severity::Error,
                    fields: vec![Field::MinBe, Field::MaxBe],
                    message: "Max must be more than min".to_string(),
                },
                Finding {
                    severity: Severity::Warning,
                    fields: vec![Field::TransmitPowerSubG],
                    message: "Requires Force VDDR".to_string(),
                },
                Finding {
                    severity: Severity::Info,
                    fields: vec![Field::MacBeaconOrder],
                    message: "Optimal value is 8".to_string(),
                },
                Finding {
                    severity: Severity::Error,
                    fields: vec![Field::PhyType],
                    message: "PHY type not supported by frequency band".to_string(),
                },
            ],
        };
        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Radio",
                "  error [phyType] Phy Type: PHY type not supported by frequency band",
                "Network",
                "  error [minBe, maxBe] Min Back-off Exponent, Max Back-off Exponent: Max must be more than min",
                "  info [macBeaconOrder] MAC Beacon Order: Optimal value is 8",
                "Power Management",
                "  warning [transmitPowerSubG] Transmit Power: Requires Force VDDR",
                "2 error(s), 1 warning(s), 1 notice(s)",
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(
            render(&ValidationReport::default()),
            "0 error(s), 0 warning(s), 0 notice(s)\n"
        );
    }
}
