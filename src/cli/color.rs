//! Color conversion commands.
//!
//! Converts a color given as hex, RGB or HSV into all three representations,
//! and wraps hue values into the 0-360 range.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{wrap_hue, HsvColor, RgbColor};
use clap::{ArgGroup, Args, Subcommand};
use serde::Serialize;

/// Convert and normalize color values
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color subcommand
    #[command(subcommand)]
    pub command: ColorCommand,
}

/// Color subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ColorCommand {
    /// Convert a color between hex, RGB and HSV
    Convert(ConvertArgs),
    /// Wrap a hue angle into [0, 360)
    WrapHue(WrapHueArgs),
}

/// Convert a color between hex, RGB and HSV
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["hex", "rgb", "hsv"])))]
pub struct ConvertArgs {
    /// Hex color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// RGB channels, comma separated (out-of-range values are clamped)
    #[arg(long, value_name = "R,G,B", allow_hyphen_values = true)]
    pub rgb: Option<String>,

    /// HSV components, comma separated: hue degrees, saturation %, value %
    #[arg(long, value_name = "H,S,V", allow_hyphen_values = true)]
    pub hsv: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Wrap a hue angle into [0, 360)
#[derive(Debug, Clone, Args)]
pub struct WrapHueArgs {
    /// Hue in degrees, may be negative or fractional
    #[arg(value_name = "DEGREES", allow_hyphen_values = true)]
    pub degrees: f64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ConvertResponse {
    hex: String,
    rgb: RgbColor,
    hsv: HsvColor,
}

#[derive(Debug, Serialize)]
struct WrapHueResponse {
    input: f64,
    hue: f64,
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ColorCommand::Convert(args) => args.execute(),
            ColorCommand::WrapHue(args) => args.execute(),
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let rgb = self.resolve_rgb()?;

        let response = ConvertResponse {
            hex: rgb.to_hex(),
            rgb,
            hsv: rgb.to_hsv(),
        };

        if self.json {
            print_json(&response)?;
        } else {
            println!("hex: {}", response.hex);
            println!("rgb: {}, {}, {}", rgb.red, rgb.green, rgb.blue);
            println!(
                "hsv: {}, {}%, {}%",
                response.hsv.hue, response.hsv.sat, response.hsv.val
            );
        }

        Ok(())
    }

    fn resolve_rgb(&self) -> CliResult<RgbColor> {
        if let Some(hex) = &self.hex {
            return RgbColor::from_hex(hex).map_err(|e| CliError::validation(e.to_string()));
        }
        if let Some(rgb) = &self.rgb {
            let [red, green, blue] = parse_triple(rgb, "R,G,B")?;
            return Ok(RgbColor::from_unclamped(red, green, blue));
        }
        if let Some(hsv) = &self.hsv {
            let [hue, sat, val] = parse_triple(hsv, "H,S,V")?;
            return Ok(HsvColor::new(hue, sat, val).to_rgb());
        }
        Err(CliError::validation(
            "One of --hex, --rgb or --hsv must be specified",
        ))
    }
}

impl WrapHueArgs {
    /// Execute the wrap-hue command
    pub fn execute(&self) -> CliResult<()> {
        let hue = wrap_hue(self.degrees);

        if self.json {
            print_json(&WrapHueResponse {
                input: self.degrees,
                hue,
            })?;
        } else {
            println!("{hue}");
        }

        Ok(())
    }
}

/// Parses "a,b,c" into three numbers.
fn parse_triple(input: &str, shape: &str) -> CliResult<[f64; 3]> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(CliError::validation(format!(
            "Invalid value '{input}'. Expected three comma-separated numbers ({shape})"
        )));
    };

    let number = |part: &str| {
        part.parse::<f64>().map_err(|_| {
            CliError::validation(format!("Invalid number '{part}' in '{input}' ({shape})"))
        })
    };

    Ok([number(*a)?, number(*b)?, number(*c)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(hex: Option<&str>, rgb: Option<&str>, hsv: Option<&str>) -> ConvertArgs {
        ConvertArgs {
            hex: hex.map(String::from),
            rgb: rgb.map(String::from),
            hsv: hsv.map(String::from),
            json: false,
        }
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1, 2.5,-3", "R,G,B").unwrap(), [1.0, 2.5, -3.0]);
        assert!(parse_triple("1,2", "R,G,B").is_err());
        assert!(parse_triple("1,2,x", "R,G,B").is_err());
    }

    #[test]
    fn test_resolve_from_each_input() {
        assert_eq!(
            convert(Some("#FF00ff"), None, None).resolve_rgb().unwrap(),
            RgbColor::new(255, 0, 255)
        );
        assert_eq!(
            convert(None, Some("255,255,275"), None).resolve_rgb().unwrap(),
            RgbColor::new(255, 255, 255)
        );
        assert_eq!(
            convert(None, None, Some("240,100,100")).resolve_rgb().unwrap(),
            RgbColor::new(0, 0, 255)
        );
    }

    #[test]
    fn test_resolve_invalid_hex_is_validation_error() {
        let err = convert(Some("#aaa"), None, None).resolve_rgb().unwrap_err();
        assert_eq!(err.exit_code(), crate::cli::ExitCode::ValidationError);
        assert!(err.message.contains("#aaa"));
    }
}
