//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI. Results go to stdout, diagnostics to
//! stderr.

use crate::capability::CapabilityFlags;
use crate::driver::Report;
use crate::error::BenchError;
use crate::registry::{self, VariantDescriptor};
use crate::utils::bench::unit_name;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the capability banner
pub fn print_banner(capability: CapabilityFlags) {
    println!("{}", capability.banner());
}

/// The line reporting the average time, e.g. `Average time (us): 12.5`
pub fn average_line(report: &Report) -> String {
    format!(
        "Average time ({}): {}",
        unit_name(),
        report.timing.average_micros()
    )
}

/// Print the outcome of a timed run
pub fn print_report(report: &Report, verbose: bool) {
    if verbose {
        let term_width = get_term_width().min(80);
        let rule = "─".repeat(term_width);
        println!("{}", rule);
        println!("  Variant:      {} ({})", report.variant, report.convention);
        println!("  Capability:   {}", report.capability);
        println!(
            "  Corpus:       {} pairs x {} bases (seed {})",
            report.pairs, report.length, report.seed
        );
        println!("  Workers:      {}", report.workers);
        println!("  Invocations:  {}", report.timing.count);
        println!(
            "  Total time:   {:.3} {}",
            crate::utils::bench::to_micros(report.timing.elapsed),
            unit_name()
        );
        println!("  Checksum:     {}", report.timing.checksum);
        println!("{}", rule);
    }
    println!("{}", average_line(report));
}

/// Lines of a fatal diagnostic, followed by the valid names when the variant was unknown
pub fn error_lines(err: &BenchError) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    if matches!(err, BenchError::UnknownVariant(_)) {
        lines.push(format!("Available: {}", registry::list_names().join(", ")));
    }
    lines
}

/// Print a fatal diagnostic to stderr
pub fn print_error(err: &BenchError) {
    for line in error_lines(err) {
        eprintln!("{}", line);
    }
}

/// Print the list of available variants
pub fn print_available_variants() {
    let term_width = get_term_width();
    let desc_width = term_width.saturating_sub(42).max(20);

    println!("Available variants:");
    println!();
    for VariantDescriptor {
        variant,
        description,
        ..
    } in registry::all()
    {
        println!(
            "  {:<20} [{:<11}] - {}",
            variant.name(),
            variant.convention().to_string(),
            truncate(description, desc_width)
        );
    }
}

/// Print one verification line
pub fn print_verified(descriptor: &VariantDescriptor, score: crate::alignment::Score) {
    println!("  ✅ {:<20} {}", descriptor.variant.name(), score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlignError;
    use crate::registry::{CallingConvention, Variant};
    use crate::utils::timer::TimingResult;
    use std::time::Duration;

    fn report(elapsed: Duration, count: usize) -> Report {
        Report {
            variant: Variant::Base,
            convention: CallingConvention::PerElement,
            capability: CapabilityFlags::None,
            pairs: count,
            length: 8,
            seed: 0,
            workers: 1,
            timing: TimingResult {
                elapsed,
                count,
                checksum: 0,
            },
        }
    }

    #[test]
    fn test_average_line_format() {
        let report = report(Duration::from_micros(50), 4);
        assert_eq!(average_line(&report), "Average time (us): 12.5");
        assert_eq!(
            average_line(&report),
            format!("Average time (us): {}", report.timing.average_micros())
        );
    }

    #[test]
    fn test_average_line_empty_run() {
        assert_eq!(average_line(&report(Duration::ZERO, 0)), "Average time (us): 0");
    }

    #[test]
    fn test_unknown_variant_lists_names() {
        let lines = error_lines(&BenchError::UnknownVariant("bogus".to_string()));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Incorrect version provided: bogus");
        assert!(lines[1].starts_with("Available: "));
        for name in registry::list_names() {
            assert!(lines[1].contains(name), "{}", name);
        }
    }

    #[test]
    fn test_other_errors_have_no_listing() {
        let err = BenchError::Invocation {
            variant: Variant::Bithacked,
            source: AlignError::InvalidSymbol {
                symbol: 'N',
                position: 0,
            },
        };
        assert_eq!(error_lines(&err).len(), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 8), "a lon...");
    }
}
