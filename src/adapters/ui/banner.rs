//! Startup banner: "NEWSTRAIL" in the figlet standard font, shaded left to right.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    /// Colour at `step` of `steps` evenly spaced stops from `self` to `to`.
    fn towards(self, to: Rgb, step: usize, steps: usize) -> Rgb {
        if steps <= 1 {
            return to;
        }
        let mix = |a: u8, b: u8| {
            let (a, b) = (i32::from(a), i32::from(b));
            let last = (steps - 1) as i32;
            (a + (b - a) * step.min(steps - 1) as i32 / last) as u8
        };
        Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

/// Ink blue (#1d3557).
const INK_BLUE: Rgb = Rgb(0x1d, 0x35, 0x57);
/// Paper amber (#e9c46a).
const PAPER_AMBER: Rgb = Rgb(0xe9, 0xc4, 0x6a);

/// Render the banner text. `None` if the embedded font cannot be loaded.
fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert("NEWSTRAIL")?;
    Some(figure.to_string())
}

/// Prints the banner followed by the version line. Falls back to plain text.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art().unwrap_or_else(|| "NEWSTRAIL\n".to_string());
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    for line in art.lines().filter(|l| !l.trim().is_empty()) {
        for (col, ch) in line.chars().enumerate() {
            let shade = INK_BLUE.towards(PAPER_AMBER, col, width);
            let _ = out.execute(SetForegroundColor(shade.into()));
            let _ = out.execute(Print(ch));
        }
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print("\n"));
    }

    let _ = out.execute(Print(format!(
        "v{}  neutral composite articles\n\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(INK_BLUE.towards(PAPER_AMBER, 0, 10), INK_BLUE);
        assert_eq!(INK_BLUE.towards(PAPER_AMBER, 9, 10), PAPER_AMBER);
        assert_eq!(INK_BLUE.towards(PAPER_AMBER, 0, 1), PAPER_AMBER);
    }

    #[test]
    fn test_banner_art_renders() {
        let art = banner_art().expect("standard font is bundled");
        assert!(art.lines().count() > 1);
    }
}
