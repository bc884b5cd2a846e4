//! Utility functions for Easeplot.

use arboard::Clipboard;

use crate::curve::Curve;
use crate::error::Result;

/// Format evenly spaced samples of a curve as tab-separated `progress value` rows.
pub fn format_samples_tsv(curve: Curve, steps: usize) -> String {
    let samples = curve.sample(steps);
    let mut out = String::with_capacity(samples.len() * 20 + 32);
    out.push_str(&format!("# {}\nprogress\tvalue\n", curve.name()));
    for (t, v) in samples {
        out.push_str(&format!("{:.6}\t{:.6}\n", t, v));
    }
    out
}

/// Copy samples of a curve to the clipboard.
pub fn copy_samples(curve: Curve, steps: usize) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(format_samples_tsv(curve, steps))?;
    tracing::info!(curve = curve.name(), steps, "Copied samples to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_has_header_and_one_row_per_sample() {
        let tsv = format_samples_tsv(Curve::Linear, 4);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines[0], "# linear");
        assert_eq!(lines[1], "progress\tvalue");
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[2], "0.000000\t0.000000");
        assert_eq!(lines[6], "1.000000\t1.000000");
    }
}
