use std::fs;
use std::path::{Path, PathBuf};

use path_track::path::presets::{PRESETS, preset};
use path_track::{
    Conversion, GeoPoint, TrackOptions, TrackRequest, convert_path_to_track, convert_svg_to_track,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const USAGE: &str = r#"path_track

USAGE:
  path_track presets
  path_track convert <source> --lat <deg> --lon <deg> [options]

SOURCE (exactly one):
  --path <d>            Path description, e.g. "M 50 10 L 90 90 L 10 90 Z"
  --svg <file>          Every outline of an SVG document
  --preset <name>       Built-in shape (see `path_track presets`)

OPTIONS (convert):
  --lat <deg>           Center latitude  [-90, 90]
  --lon <deg>           Center longitude [-180, 180]
  --scale <meters>      Size of the larger side of the shape
  --points <n>          Number of track points per outline
  --duration <seconds>  Time between the first and the last point
  --start <rfc3339>     Start time (default: now)
  --name <text>         Track name
  --description <text>  Track description
  --config <file>       JSON file with default options
  --out <file>          Write GPX here instead of stdout
  --overwrite           Overwrite an existing --out file
  -h, --help            Show this help

Set RUST_LOG=debug for pipeline details.
"#;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("path_track error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args::new(args);

    let Some(command) = args.next() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "presets" => {
            for (name, _) in PRESETS {
                println!("{name}");
            }
            Ok(())
        }
        "convert" => cmd_convert(&mut args),
        "-h" | "--help" | "help" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
    }
}

fn print_usage() {
    println!("{USAGE}");
}

enum Source {
    Path(String),
    Svg(PathBuf),
    Preset(String),
}

fn cmd_convert(args: &mut Args) -> Result<(), String> {
    let mut source: Option<Source> = None;
    let mut lat: Option<f64> = None;
    let mut lon: Option<f64> = None;
    let mut scale: Option<f64> = None;
    let mut points: Option<usize> = None;
    let mut duration: Option<u32> = None;
    let mut start: Option<OffsetDateTime> = None;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut config: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut overwrite = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--path" => set_source(&mut source, Source::Path(args.value("--path")?))?,
            "--svg" => set_source(&mut source, Source::Svg(PathBuf::from(args.value("--svg")?)))?,
            "--preset" => set_source(&mut source, Source::Preset(args.value("--preset")?))?,
            "--lat" => lat = Some(args.parsed("--lat")?),
            "--lon" => lon = Some(args.parsed("--lon")?),
            "--scale" => scale = Some(args.parsed("--scale")?),
            "--points" => points = Some(args.parsed("--points")?),
            "--duration" => duration = Some(args.parsed("--duration")?),
            "--start" => {
                let value = args.value("--start")?;
                let parsed = OffsetDateTime::parse(&value, &Rfc3339)
                    .map_err(|e| format!("invalid --start `{value}`: {e}"))?;
                start = Some(parsed);
            }
            "--name" => name = Some(args.value("--name")?),
            "--description" => description = Some(args.value("--description")?),
            "--config" => config = Some(PathBuf::from(args.value("--config")?)),
            "--out" => out = Some(PathBuf::from(args.value("--out")?)),
            "--overwrite" => overwrite = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
        }
    }

    let source = source.ok_or("missing source (--path, --svg or --preset)")?;
    let center = GeoPoint::new(
        lat.ok_or("missing --lat")?,
        lon.ok_or("missing --lon")?,
    );

    let mut options = match config {
        Some(path) => TrackOptions::from_json_file(&path).map_err(|e| e.to_string())?,
        None => TrackOptions::default(),
    };
    if let Some(scale) = scale {
        options.scale_meters = scale;
    }
    if let Some(points) = points {
        options.target_point_count = points;
    }
    if let Some(duration) = duration {
        options.duration_seconds = duration;
    }
    if let Some(name) = name {
        options.name = name;
    }
    if let Some(description) = description {
        options.description = description;
    }

    let request = TrackRequest::from_options(
        &options,
        center,
        start.unwrap_or_else(OffsetDateTime::now_utc),
    );

    let conversion = match source {
        Source::Path(d) => convert_path_to_track(&d, &request),
        Source::Preset(preset_name) => {
            let d = preset(&preset_name).ok_or_else(|| format!("unknown preset `{preset_name}`"))?;
            convert_path_to_track(d, &request)
        }
        Source::Svg(path) => {
            let svg = fs::read_to_string(&path)
                .map_err(|e| format!("read {}: {e}", path.display()))?;
            convert_svg_to_track(&svg, &request, options.min_svg_path_length)
        }
    }
    .map_err(|e| e.to_string())?;

    report(&conversion);
    let gpx = conversion.to_gpx().map_err(|e| e.to_string())?;

    match out {
        Some(path) => write_text_file(&path, &gpx, overwrite),
        None => {
            print!("{gpx}");
            Ok(())
        }
    }
}

fn set_source(slot: &mut Option<Source>, source: Source) -> Result<(), String> {
    if slot.is_some() {
        return Err("use exactly one of --path, --svg or --preset".to_string());
    }
    *slot = Some(source);
    Ok(())
}

fn report(conversion: &Conversion) {
    for warning in &conversion.warnings {
        eprintln!("warning: {warning}");
    }
    let points = &conversion.document.points;
    eprintln!("{} track point(s)", points.len());
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        eprintln!("first point: {}", first.position);
        eprintln!("last point:  {}", last.position);
    }
}

fn write_text_file(path: &Path, contents: &str, overwrite: bool) -> Result<(), String> {
    if path.exists() && !overwrite {
        return Err(format!(
            "{} already exists (use --overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("create {}: {e}", parent.display()))?;
    }
    fs::write(path, contents).map_err(|e| format!("write {}: {e}", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> Result<String, String> {
        self.next()
            .ok_or_else(|| format!("missing value for {flag}"))
    }

    fn parsed<T>(&mut self, flag: &str) -> Result<T, String>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.value(flag)?;
        value
            .parse()
            .map_err(|e| format!("invalid value `{value}` for {flag}: {e}"))
    }
}
