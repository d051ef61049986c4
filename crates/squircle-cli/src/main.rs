use std::process::ExitCode;
use std::str::FromStr;

use serde::Serialize;
use squircle::{
    DEFAULT_SMOOTHNESS, MaskDocument, StyleCache, effective_radii, mask_style, size,
    squircle_path_svg,
};

const USAGE: &str = "\
Usage: squircle-cli <command> --width <px> --height <px> [--radius <px>] [--smoothness <ratio>]

Commands:
  path    print the squircle outline as an SVG path `d` string
  svg     print the mask SVG document
  uri     print the mask as a data URI
  style   print the CSS mask style fragment
  dump    print all derived artifacts as JSON";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    InvalidNumber { flag: &'static str, value: String },
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::InvalidNumber { flag, value } => {
                write!(f, "invalid number for {flag}: {value}")
            }
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Path,
    Svg,
    Uri,
    Style,
    Dump,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(Self::Path),
            "svg" => Ok(Self::Svg),
            "uri" => Ok(Self::Uri),
            "style" => Ok(Self::Style),
            "dump" => Ok(Self::Dump),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    width: Option<f64>,
    height: Option<f64>,
    radius: Option<f64>,
    smoothness: Option<f64>,
}

fn parse_number(flag: &'static str, value: Option<String>) -> Result<f64, CliError> {
    let value = value.ok_or(CliError::Usage("missing value after flag"))?;
    value
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber { flag, value })
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut args = Args::default();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--width" => args.width = Some(parse_number("--width", raw.next())?),
            "--height" => args.height = Some(parse_number("--height", raw.next())?),
            "--radius" => args.radius = Some(parse_number("--radius", raw.next())?),
            "--smoothness" => args.smoothness = Some(parse_number("--smoothness", raw.next())?),
            other => {
                if args.command.is_some() {
                    return Err(CliError::Usage("unexpected argument"));
                }
                args.command = Some(
                    Command::from_str(other).map_err(|_| CliError::Usage("unknown command"))?,
                );
            }
        }
    }
    Ok(args)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dump {
    width: f64,
    height: f64,
    radius: f64,
    inner_radius: f64,
    smoothness: f64,
    path: String,
    svg: String,
    data_uri: String,
    style: String,
}

fn run(raw: impl Iterator<Item = String>) -> Result<(), CliError> {
    let args = parse_args(raw)?;
    let command = args.command.ok_or(CliError::Usage("missing command"))?;
    let width = args.width.ok_or(CliError::Usage("missing --width"))?;
    let height = args.height.ok_or(CliError::Usage("missing --height"))?;
    let smoothness = args.smoothness.unwrap_or(DEFAULT_SMOOTHNESS);

    let dims = size(width, height);
    let radii = effective_radii(dims, args.radius, smoothness);
    let document = MaskDocument::new(width, height, radii.inner, radii.outer);

    match command {
        Command::Path => println!(
            "{}",
            squircle_path_svg(width, height, radii.inner, radii.outer)
        ),
        Command::Svg => println!("{}", document.to_svg()),
        Command::Uri => println!("{}", document.to_data_uri()),
        Command::Style => println!(
            "{}",
            mask_style(&StyleCache::new(), dims, args.radius, smoothness)
        ),
        Command::Dump => {
            let dump = Dump {
                width,
                height,
                radius: radii.outer,
                inner_radius: radii.inner,
                smoothness,
                path: squircle_path_svg(width, height, radii.inner, radii.outer),
                svg: document.to_svg(),
                data_uri: document.to_data_uri(),
                style: mask_style(&StyleCache::new(), dims, args.radius, smoothness).to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
