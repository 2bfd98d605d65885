//! Terminal swatches and clipboard access.
//!
//! This is the display side of palette generation: it receives colors that
//! are already ordered, deduplicated and formatted, and only draws them.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    queue,
    style::{Print, ResetColor, SetBackgroundColor},
    tty::IsTty,
};

use crate::models::RgbColor;

/// Width of a swatch block in terminal cells.
const SWATCH_WIDTH: usize = 6;

/// Writes one line per color.
///
/// With `swatches` each line starts with a block painted in the color,
/// followed by its label. Without, lines hold the label only.
pub fn write_palette<W: Write>(
    out: &mut W,
    colors: &[RgbColor],
    labels: &[String],
    swatches: bool,
) -> io::Result<()> {
    for (color, label) in colors.iter().zip(labels) {
        if swatches {
            queue!(
                out,
                SetBackgroundColor(color.to_crossterm_color()),
                Print(" ".repeat(SWATCH_WIDTH)),
                ResetColor,
                Print("  ")
            )?;
        }
        queue!(out, Print(label), Print("\n"))?;
    }
    out.flush()
}

/// Prints a palette to stdout, drawing swatches only when stdout is a terminal.
pub fn print_palette(colors: &[RgbColor], labels: &[String], swatches: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let swatches = swatches && stdout.is_tty();
    write_palette(&mut stdout.lock(), colors, labels, swatches)
}

/// Picks the 1-based `index`th label for copying.
#[must_use]
pub fn select_for_copy(labels: &[String], index: usize) -> Option<&str> {
    index
        .checked_sub(1)
        .and_then(|i| labels.get(i))
        .map(String::as_str)
}

/// Places `text` on the system clipboard.
///
/// On Linux the selection is owned by this process, so the call blocks until
/// another application takes the clipboard over.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to copy to clipboard")?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;

        tracing::info!("Holding {text} on the clipboard until it is replaced");
        clipboard
            .set()
            .wait()
            .text(text.to_string())
            .context("Failed to copy to clipboard")
    }

    #[cfg(not(target_os = "linux"))]
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")
}

/// Places `text` on the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let _ = text;
    Err(anyhow::anyhow!("Clipboard support is disabled in this build"))
        .context("Failed to copy to clipboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(colors: &[RgbColor]) -> Vec<String> {
        colors.iter().map(RgbColor::to_hex).collect()
    }

    #[test]
    fn test_plain_output_is_one_label_per_line() {
        let colors = [RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 255)];
        let mut out = Vec::new();
        write_palette(&mut out, &colors, &labels(&colors), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#ff0000\n#0000ff\n");
    }

    #[test]
    fn test_swatch_output_contains_escape_codes() {
        let colors = [RgbColor::new(255, 0, 0)];
        let mut out = Vec::new();
        write_palette(&mut out, &colors, &labels(&colors), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("255;0;0"));
        assert!(text.trim_end().ends_with("#ff0000"));
    }

    #[test]
    fn test_select_for_copy_is_one_based() {
        let labels = vec!["#000000".to_string(), "#ffffff".to_string()];
        assert_eq!(select_for_copy(&labels, 1), Some("#000000"));
        assert_eq!(select_for_copy(&labels, 2), Some("#ffffff"));
        assert_eq!(select_for_copy(&labels, 0), None);
        assert_eq!(select_for_copy(&labels, 3), None);
    }

    #[cfg(all(feature = "clipboard", target_os = "linux"))]
    #[test]
    #[ignore = "requires an X11 or Wayland display"]
    fn test_copied_text_outlives_clipboard_handle() {
        let owner = std::thread::spawn(|| copy_to_clipboard("#3366cc"));

        let mut reader = arboard::Clipboard::new().unwrap();
        let mut copied = String::new();
        for _ in 0..50 {
            copied = reader.get_text().unwrap_or_default();
            if copied == "#3366cc" {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert_eq!(copied, "#3366cc");

        reader.set_text("released".to_string()).unwrap();
        owner.join().unwrap().unwrap();
    }
}
