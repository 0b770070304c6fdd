use std::fmt;

use colored::Colorize;

use crate::bench::BenchReport;

/// Tab-indented text report: holder name, then `K = n` with its insert (`I`)
/// and remove (`R`) times in seconds.
pub fn write_text(report: &BenchReport, color: bool, out: &mut dyn fmt::Write) -> fmt::Result {
    for holder in &report.holders {
        if color {
            writeln!(out, "{}", holder.name.bold().cyan())?;
        } else {
            writeln!(out, "{}", holder.name)?;
        }

        for round in &holder.rounds {
            writeln!(out, "\tK = {}", round.k)?;
            writeln!(out, "\t\tI = {}", round.insert.as_secs_f64())?;
            writeln!(out, "\t\tR = {}", round.remove.as_secs_f64())?;
            if round.leftover {
                let msg = format!("{} is not empty", holder.name);
                if color {
                    writeln!(out, "{}", msg.red())?;
                } else {
                    writeln!(out, "{msg}")?;
                }
            }
        }
    }
    Ok(())
}

/// One line per holder with the summed insert/remove time.
pub fn write_summary(report: &BenchReport, color: bool, out: &mut dyn fmt::Write) -> fmt::Result {
    let header = format!("Summary ({} words available, nwords = {})", report.words_available, report.nwords);
    if color {
        writeln!(out, "{}", header.bold())?;
    } else {
        writeln!(out, "{header}")?;
    }
    for holder in &report.holders {
        writeln!(
            out,
            "\t{}: I = {:.6}s, R = {:.6}s",
            holder.name,
            holder.total_insert().as_secs_f64(),
            holder.total_remove().as_secs_f64()
        )?;
    }
    Ok(())
}

pub fn render_text(report: &BenchReport, color: bool) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns an error
    write_text(report, color, &mut out).expect("writing to a String cannot fail");
    out
}

pub fn render_summary(report: &BenchReport, color: bool) -> String {
    let mut out = String::new();
    write_summary(report, color, &mut out).expect("writing to a String cannot fail");
    out
}

pub fn render_json(report: &BenchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{HolderReport, RoundTiming};
    use std::time::Duration;

    fn sample_report(leftover: bool) -> BenchReport {
        BenchReport {
            nwords: 10,
            words_available: 10,
            holders: vec![HolderReport {
                name: "LS",
                rounds: vec![RoundTiming {
                    k: 1,
                    words: 1,
                    insert: Duration::from_millis(500),
                    remove: Duration::from_millis(250),
                    leftover,
                }],
            }],
        }
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample_report(false), false);
        assert_eq!(text, "LS\n\tK = 1\n\t\tI = 0.5\n\t\tR = 0.25\n");
    }

    #[test]
    fn test_render_text_flags_leftover() {
        let text = render_text(&sample_report(true), false);
        assert!(text.ends_with("LS is not empty\n"));
    }

    #[test]
    fn test_write_text_propagates_sink_errors() {
        struct FailingSink;

        impl fmt::Write for FailingSink {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        assert!(write_text(&sample_report(false), false, &mut FailingSink).is_err());
        assert!(write_summary(&sample_report(false), false, &mut FailingSink).is_err());
    }

    #[test]
    fn test_render_summary() {
        let text = render_summary(&sample_report(false), false);
        assert!(text.starts_with("Summary (10 words available, nwords = 10)"));
        assert!(text.contains("LS: I = 0.500000s, R = 0.250000s"));
    }

    #[test]
    fn test_render_json_round_trips_to_value() {
        let json = render_json(&sample_report(false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["holders"][0]["name"], "LS");
        assert_eq!(value["holders"][0]["rounds"][0]["k"], 1);
    }
}
