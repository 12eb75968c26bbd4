use crate::config::load_config;
use crate::render::render_preview;
use crate::request::{RouteRequest, RouteResponse, parse_point, parse_rect, parse_requests};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "orr", version, about = "Orthogonal connector router for diagram editors")]
pub struct Args {
    /// Request document (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Config file (JSON/JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Start anchor as 'x,y' (alternative to --input)
    #[arg(long = "start")]
    pub start: Option<String>,

    /// End anchor as 'x,y' (alternative to --input)
    #[arg(long = "end")]
    pub end: Option<String>,

    /// Start obstacle box as 'x1,y1,x2,y2'
    #[arg(long = "start-box")]
    pub start_box: Option<String>,

    /// End obstacle box as 'x1,y1,x2,y2'
    #[arg(long = "end-box")]
    pub end_box: Option<String>,

    /// Override the escape distance from the config
    #[arg(long = "escape")]
    pub escape: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Svg,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(escape) = args.escape {
        config.router.escape_distance = escape;
    }

    let requests = collect_requests(&args)?;
    let routed: Vec<(RouteRequest, Vec<crate::geometry::Point>)> = requests
        .into_iter()
        .map(|request| {
            let points = request.route(&config.router);
            (request, points)
        })
        .collect();

    let output = match args.format {
        OutputFormat::Json => {
            let responses: Vec<RouteResponse> = routed
                .iter()
                .map(|(_, points)| RouteResponse {
                    points: points.clone(),
                })
                .collect();
            let mut rendered = serde_json::to_string_pretty(&responses)?;
            rendered.push('\n');
            rendered
        }
        OutputFormat::Svg => render_preview(&routed, &config.preview),
    };

    write_output(&output, args.output.as_deref())?;
    Ok(())
}

fn collect_requests(args: &Args) -> Result<Vec<RouteRequest>> {
    if let (Some(start), Some(end)) = (args.start.as_deref(), args.end.as_deref()) {
        let request = RouteRequest {
            start: parse_point(start)?,
            end: parse_point(end)?,
            start_box: args.start_box.as_deref().map(parse_rect).transpose()?,
            end_box: args.end_box.as_deref().map(parse_rect).transpose()?,
        };
        return Ok(vec![request]);
    }
    if args.start.is_some() || args.end.is_some() {
        return Err(anyhow::anyhow!(
            "--start and --end must be supplied together"
        ));
    }

    let input = read_input(args.input.as_deref())?;
    Ok(parse_requests(&input)?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => io::stdout().write_all(content.as_bytes())?,
    }
    Ok(())
}
