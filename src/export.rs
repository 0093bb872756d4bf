//! This module renders colors, palettes and gradients as snippets ready to paste into a
//! stylesheet, a Tailwind config, a design tool or source code.

use regex::Regex;
use serde_json;

use color::Color;
use gradient::Gradient;
use hsl::rgb_to_hsl;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s").unwrap();
}

/// Text formats for a single color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// `#3B82F6`
    Hex,
    /// `color: #3B82F6;`
    CssColor,
    /// `background-color: #3B82F6;`
    CssBackground,
    /// `text-[#3B82F6]`
    TailwindText,
    /// `bg-[#3B82F6]`
    TailwindBackground,
    /// `rgb(59, 130, 246)`
    Rgb,
    /// `hsl(217, 91%, 60%)`
    Hsl,
    /// `3B82F6`, the form Figma's hex field takes.
    Figma,
}

/// Every single-color format, in menu order.
pub static COLOR_FORMATS: [ColorFormat; 8] = [
    ColorFormat::Hex,
    ColorFormat::CssColor,
    ColorFormat::CssBackground,
    ColorFormat::TailwindText,
    ColorFormat::TailwindBackground,
    ColorFormat::Rgb,
    ColorFormat::Hsl,
    ColorFormat::Figma,
];

/// Renders one color in the given format.
pub fn export_color(color: Color, format: ColorFormat) -> String {
    let hex = color.to_hex();
    match format {
        ColorFormat::Hex => hex,
        ColorFormat::CssColor => format!("color: {};", hex),
        ColorFormat::CssBackground => format!("background-color: {};", hex),
        ColorFormat::TailwindText => format!("text-[{}]", hex),
        ColorFormat::TailwindBackground => format!("bg-[{}]", hex),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", color.r, color.g, color.b),
        ColorFormat::Hsl => rgb_to_hsl(color).to_css(),
        ColorFormat::Figma => hex.trim_start_matches('#').to_string(),
    }
}

/// Text formats for a palette of several colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteFormat {
    /// A `:root` block declaring `--color-1`, `--color-2`, ...
    CssVariables,
    /// A Tailwind `colors` entry naming `custom-1`, `custom-2`, ...
    TailwindConfig,
    /// A pretty-printed JSON array of hex strings.
    Json,
    /// A JavaScript array literal of single-quoted hex strings.
    Array,
}

/// Renders a palette in the given format. Colors are numbered from 1.
/// # Errors
/// Only the JSON format can fail, and only if serialization itself does.
pub fn export_palette(colors: &[Color], format: PaletteFormat) -> Result<String, serde_json::Error> {
    let hexes: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
    Ok(match format {
        PaletteFormat::CssVariables => {
            let lines: Vec<String> = hexes
                .iter()
                .enumerate()
                .map(|(i, hex)| format!("  --color-{}: {};", i + 1, hex))
                .collect();
            format!(":root {{\n{}\n}}", lines.join("\n"))
        }
        PaletteFormat::TailwindConfig => {
            let lines: Vec<String> = hexes
                .iter()
                .enumerate()
                .map(|(i, hex)| format!("  'custom-{}': '{}',", i + 1, hex))
                .collect();
            format!("colors: {{\n{}\n}}", lines.join("\n"))
        }
        PaletteFormat::Json => serde_json::to_string_pretty(&hexes)?,
        PaletteFormat::Array => {
            let quoted: Vec<String> = hexes.iter().map(|hex| format!("'{}'", hex)).collect();
            format!("[{}]", quoted.join(", "))
        }
    })
}

/// Text formats for a gradient.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientFormat {
    /// `background: <gradient>;`
    Css,
    /// A Tailwind arbitrary value, `bg-[<gradient>]`, with whitespace replaced by underscores.
    Tailwind,
    /// A `--gradient` custom property plus a rule using it.
    CssVariable,
}

/// Renders a gradient in the given format.
pub fn export_gradient(gradient: &Gradient, format: GradientFormat) -> String {
    let css = gradient.to_css();
    match format {
        GradientFormat::Css => format!("background: {};", css),
        GradientFormat::Tailwind => format!("bg-[{}]", WHITESPACE.replace_all(&css, "_")),
        GradientFormat::CssVariable => format!(
            ":root {{\n  --gradient: {};\n}}\n\n.element {{\n  background: var(--gradient);\n}}",
            css
        ),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use gradient::{GradientKind, GradientStop};

    fn blue() -> Color {
        Color::from_hex_code("#3b82f6").unwrap()
    }

    #[test]
    fn test_color_formats() {
        let expected = vec![
            "#3B82F6",
            "color: #3B82F6;",
            "background-color: #3B82F6;",
            "text-[#3B82F6]",
            "bg-[#3B82F6]",
            "rgb(59, 130, 246)",
            "hsl(217, 91%, 60%)",
            "3B82F6",
        ];
        let rendered: Vec<String> = COLOR_FORMATS.iter().map(|&f| export_color(blue(), f)).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_palette_formats() {
        let palette = vec![Color::BLACK, blue()];
        assert_eq!(export_palette(&palette, PaletteFormat::CssVariables).unwrap(),
                   ":root {\n  --color-1: #000000;\n  --color-2: #3B82F6;\n}");
        assert_eq!(export_palette(&palette, PaletteFormat::TailwindConfig).unwrap(),
                   "colors: {\n  'custom-1': '#000000',\n  'custom-2': '#3B82F6',\n}");
        assert_eq!(export_palette(&palette, PaletteFormat::Json).unwrap(),
                   "[\n  \"#000000\",\n  \"#3B82F6\"\n]");
        assert_eq!(export_palette(&palette, PaletteFormat::Array).unwrap(),
                   "['#000000', '#3B82F6']");
    }

    #[test]
    fn test_empty_palette_json() {
        assert_eq!(export_palette(&[], PaletteFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_gradient_formats() {
        let stops = [GradientStop::new(Color::WHITE, 100.), GradientStop::new(Color::BLACK, 0.)];
        let grad = Gradient::new(&stops, GradientKind::Linear, 90.).unwrap();
        assert_eq!(export_gradient(&grad, GradientFormat::Css),
                   "background: linear-gradient(90deg, #000000 0%, #FFFFFF 100%);");
        assert_eq!(export_gradient(&grad, GradientFormat::Tailwind),
                   "bg-[linear-gradient(90deg,_#000000_0%,_#FFFFFF_100%)]");
        assert_eq!(export_gradient(&grad, GradientFormat::CssVariable),
                   ":root {\n  --gradient: linear-gradient(90deg, #000000 0%, #FFFFFF 100%);\n}\n\n\
                    .element {\n  background: var(--gradient);\n}");
    }
}
