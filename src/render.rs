use crate::config::SWATCH;
use crate::error::AppError;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Hex token plus the plain numeric palette index.
    Plain,
    /// Hex token plus a foreground-colored swatch block.
    Swatch,
}

/// Writes one classification outcome to `out`. Invalid tokens render a
/// "not recognized" line instead of a numeric index.
pub fn render<W: Write>(
    out: &mut W,
    token: &str,
    outcome: &Result<u8, AppError>,
    mode: RenderMode,
) -> Result<(), AppError> {
    match mode {
        RenderMode::Plain => render_plain(out, token, outcome),
        RenderMode::Swatch => render_swatch(out, token, outcome),
    }
    .map_err(|e| AppError::Io {
        source: e,
        context: Some("write output".to_string()),
    })
}

fn render_plain<W: Write>(
    out: &mut W,
    token: &str,
    outcome: &Result<u8, AppError>,
) -> Result<(), std::io::Error> {
    writeln!(out, "Hex: #{} ", token)?;
    match outcome {
        Ok(index) => writeln!(out, "256: {:>7}\n", index),
        Err(_) => writeln!(out, "256: not recognized\n"),
    }
}

fn render_swatch<W: Write>(
    out: &mut W,
    token: &str,
    outcome: &Result<u8, AppError>,
) -> Result<(), std::io::Error> {
    queue!(out, Print(format!("#{} ", token)))?;
    match outcome {
        Ok(index) => queue!(
            out,
            SetForegroundColor(Color::AnsiValue(*index)),
            Print(SWATCH),
            ResetColor,
            Print(format!(" {}\n", index))
        )?,
        Err(_) => queue!(out, Print("not recognized\n"))?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(token: &str, outcome: Result<u8, AppError>, mode: RenderMode) -> String {
        let mut out = Vec::new();
        render(&mut out, token, &outcome, mode).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_prints_token_and_aligned_index() {
        let output = rendered("1A2B3C", Ok(102), RenderMode::Plain);
        assert_eq!(output, "Hex: #1A2B3C \n256:     102\n\n");
    }

    #[test]
    fn plain_reports_unrecognized_tokens() {
        let error = AppError::InvalidHexDigit("GGGGGG".into());
        let output = rendered("GGGGGG", Err(error), RenderMode::Plain);
        assert_eq!(output, "Hex: #GGGGGG \n256: not recognized\n\n");
    }

    #[test]
    fn swatch_sets_the_foreground_palette_index() {
        let output = rendered("808080", Ok(244), RenderMode::Swatch);
        assert!(output.contains("\x1b[38;5;244m"));
        assert!(output.contains(SWATCH));
        assert!(output.contains("\x1b[0m"));
        assert!(output.ends_with(" 244\n"));
    }

    #[test]
    fn swatch_reports_unrecognized_tokens_without_escapes() {
        let error = AppError::InvalidHexDigit("12345".into());
        let output = rendered("12345", Err(error), RenderMode::Swatch);
        assert_eq!(output, "#12345 not recognized\n");
    }
}
