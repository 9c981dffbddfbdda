//! Terminal rendering of live matches and the end-of-run summary.

use trackscan_core::prelude::*;

use crate::ui::{self, colors, indicators, risk_style};

/// Prints one live match line.
///
/// Detailed mode appends the matched value, trimmed to a single line.
pub fn print_match(raw: &RawMatch, detailed: bool) {
    let found = colors::success().apply_to(indicators::FOUND);
    let category = risk_style(raw.category.risk_level()).apply_to(raw.category.as_str());
    let name = colors::secondary().apply_to(raw.rule_name.as_ref());
    let line = colors::muted().apply_to(format!("line {}", raw.line));

    if detailed {
        println!(
            "{found} Found {category} ({name}) at {line}: {}",
            colors::secondary().apply_to(raw.text.trim())
        );
    } else {
        println!("{found} Found {category} ({name}) at {line}");
    }
}

/// Prints the end-of-run statistics block.
pub fn print_summary(snapshot: &StatsSnapshot) {
    println!();
    ui::print_info(&format!("Scan completed in {:.2}s", snapshot.elapsed.as_secs_f64()));
    println!();
    println!("  {}", colors::secondary().apply_to("Scan statistics"));
    print_stat("Targets scanned", &snapshot.targets_scanned.to_string());
    print_stat("Elements found", &snapshot.total_matches().to_string());
    print_stat("Data processed", &format!("{:.2} MB", megabytes(snapshot.bytes_processed)));

    if !snapshot.matches_by_category.is_empty() {
        println!();
        println!("  {}", colors::secondary().apply_to("Elements by category"));
        for category in Category::ALL {
            if let Some(&count) = snapshot.matches_by_category.get(&category) {
                print_stat(category.as_str(), &count.to_string());
            }
        }
    }
}

fn print_stat(label: &str, value: &str) {
    const LABEL_WIDTH: usize = 18;

    println!(
        "  {}  {}",
        colors::muted().apply_to(format!("{label:<LABEL_WIDTH$}")),
        colors::secondary().apply_to(value)
    );
}

#[expect(
    clippy::cast_precision_loss,
    reason = "byte-to-float conversion is display-only; precision loss is acceptable"
)]
fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megabytes_converts_binary_units() {
        assert!((megabytes(1_048_576) - 1.0).abs() < f64::EPSILON);
        assert!((megabytes(0)).abs() < f64::EPSILON);
        assert!((megabytes(524_288) - 0.5).abs() < f64::EPSILON);
    }
}
