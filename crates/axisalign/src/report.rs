//! Plain-text surgical planning report.

use std::fmt::Write;

use crate::plan::SurgicalPlan;

pub const REPORT_TITLE: &str = "AxisAlign: Surgical Planning Report";

/// Render `plan` as the printable planning summary.
pub fn render_text(plan: &SurgicalPlan) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, plan);
    out
}

fn write_report(out: &mut String, plan: &SurgicalPlan) -> std::fmt::Result {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "Analysis Mode: {}", plan.mode)?;
    writeln!(out)?;

    writeln!(out, "Pre-Operative Metrics:")?;
    for (metric, deg) in plan.metrics.iter() {
        writeln!(out, "- {metric}: {deg:.2} degrees")?;
    }
    writeln!(out)?;

    writeln!(out, "Simulated Plan:")?;
    writeln!(out, "- Correction: {:+.2} degrees", plan.correction_deg)?;
    match plan.simulated_hka {
        Some(hka) => writeln!(out, "- Predicted HKA: {hka:.2} degrees")?,
        None => writeln!(out, "- Predicted HKA: n/a")?,
    }
    match plan.wedge_height_mm {
        Some(h) => writeln!(out, "- Opening Wedge Height: {h:.2} mm")?,
        None => writeln!(out, "- Opening Wedge Height: n/a")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Metric, Mode};

    fn plan() -> SurgicalPlan {
        SurgicalPlan {
            mode: Mode::FullLeg,
            metrics: [(Metric::Hka, 6.4), (Metric::Mldfa, 88.126), (Metric::Mmpta, 84.0)]
                .into_iter()
                .collect(),
            correction_deg: -6.0,
            simulated_hka: Some(0.4),
            hinge_index: 1,
            simulated_landmarks: Vec::new(),
            bone_width_px: Some(120.0),
            wedge_height_mm: Some(6.3064),
        }
    }

    #[test]
    fn lists_metrics_and_plan() {
        let text = render_text(&plan());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_TITLE);
        assert_eq!(lines[1], "Analysis Mode: Full Leg (HKA)");
        assert!(lines.contains(&"- HKA: 6.40 degrees"));
        assert!(lines.contains(&"- mLDFA: 88.13 degrees"));
        assert!(lines.contains(&"- Predicted HKA: 0.40 degrees"));
        assert!(lines.contains(&"- Opening Wedge Height: 6.31 mm"));
        assert!(lines.contains(&"- Correction: -6.00 degrees"));
    }

    #[test]
    fn missing_values_print_na() {
        let mut p = plan();
        p.simulated_hka = None;
        p.wedge_height_mm = None;
        let text = render_text(&p);
        assert!(text.contains("- Predicted HKA: n/a"));
        assert!(text.contains("- Opening Wedge Height: n/a"));
    }
}
