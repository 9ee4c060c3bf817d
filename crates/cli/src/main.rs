mod provenance;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use planar::io::{read_polygon, write_polygon};
use planar::{Intersection, Polygon, PopulateCfg, Segment, Tolerance, Vec2};
use polars::prelude::*;
use provenance::{current_git_rev, Sidecar};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon classification, area and sampling runner")]
struct Cmd {
    /// Field delimiter used by polygon and point files
    #[arg(long, default_value_t = ',', global = true)]
    delimiter: char,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct TolArgs {
    #[arg(long, default_value_t = 1e-5)]
    rtol: f64,
    #[arg(long, default_value_t = 1e-8)]
    atol: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Print the area of a polygon file
    Area {
        #[arg(long)]
        polygon: PathBuf,
    },
    /// Split a point file into inside/outside indices (CSV without header, or Parquet with x/y)
    Classify {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long)]
        points: PathBuf,
        /// Treat boundary points as outside
        #[arg(long)]
        open: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Intersect two segments given as x0,y0,x1,y1
    Intersect {
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        seg0: Segment,
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        seg1: Segment,
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Draw uniform points inside a polygon and write them in polygon-file format
    Populate {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Polygon files whose interiors must stay empty (repeatable)
        #[arg(long)]
        exclude: Vec<PathBuf>,
        /// Consecutive misses before giving up; 0 disables the cap
        #[arg(long, default_value_t = 1_000_000)]
        max_rejections: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let delim = cmd.delimiter;
    match cmd.action {
        Action::Area { polygon } => area(&polygon, delim),
        Action::Classify {
            polygon,
            points,
            open,
            out,
        } => classify(&polygon, &points, !open, &out, delim),
        Action::Intersect { seg0, seg1, tol } => intersect(seg0, seg1, tol),
        Action::Populate {
            polygon,
            count,
            seed,
            exclude,
            max_rejections,
            out,
        } => populate(&polygon, count, seed, &exclude, max_rejections, &out, delim),
        Action::Report => report(),
    }
}

fn load_polygon(path: &Path, delim: char) -> Result<Polygon> {
    let vertices =
        read_polygon(path, delim).with_context(|| format!("reading polygon {}", path.display()))?;
    Polygon::new(vertices).with_context(|| format!("polygon {}", path.display()))
}

fn area(polygon: &Path, delim: char) -> Result<()> {
    let poly = load_polygon(polygon, delim)?;
    let area = poly.area();
    tracing::info!(polygon = %polygon.display(), vertices = poly.len(), area, "area");
    println!("{area}");
    Ok(())
}

#[derive(Serialize)]
struct Classified {
    closed: bool,
    inside: Vec<usize>,
    outside: Vec<usize>,
}

fn classify(polygon: &Path, points: &Path, closed: bool, out: &Path, delim: char) -> Result<()> {
    let poly = load_polygon(polygon, delim)?;
    let pts = read_points(points, delim)?;
    let sep = planar::separate(&pts, &poly, closed);
    tracing::info!(
        points = pts.len(),
        inside = sep.inside_count,
        outside = sep.outside_count(),
        closed,
        "classify"
    );

    let doc = Classified {
        closed,
        inside: sep.inside().to_vec(),
        outside: sep.outside(),
    };
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)?;
    Sidecar::new(serde_json::json!({ "closed": closed, "points": pts.len() }))
        .input(polygon)
        .input(points)
        .write(out)?;
    Ok(())
}

/// Load `(x, y)` rows. Parquet files need `x`/`y` columns; anything else is read
/// as headerless CSV with the first two columns taken as coordinates.
fn read_points(path: &Path, delim: char) -> Result<Vec<Vec2<f64>>> {
    let lf = if path.extension().is_some_and(|e| e == "parquet") {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?.select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
    } else {
        let sep = u8::try_from(delim).map_err(|_| anyhow!("delimiter {delim:?} is not a single byte"))?;
        LazyCsvReader::new(path)
            .with_has_header(false)
            .with_separator(sep)
            .finish()?
            .select([
                col("column_1").cast(DataType::Float64).alias("x"),
                col("column_2").cast(DataType::Float64).alias("y"),
            ])
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading points {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("{}: row {row} has a missing coordinate", path.display())),
        })
        .collect()
}

fn parse_segment(s: &str) -> std::result::Result<Segment, String> {
    let vals = s
        .split(',')
        .map(|f| f.trim().parse::<f64>().map_err(|e| format!("{f:?}: {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match vals.as_slice() {
        [x0, y0, x1, y1] => Ok(Segment::new(Vec2::new(*x0, *y0), Vec2::new(*x1, *y1))),
        _ => Err(format!("expected x0,y0,x1,y1, got {} value(s)", vals.len())),
    }
}

fn intersect(seg0: Segment, seg1: Segment, tol: TolArgs) -> Result<()> {
    let tol = Tolerance::new(tol.rtol, tol.atol)?;
    let hit = planar::intersect(&seg0, &seg1, tol)?;
    let status = hit.status();
    tracing::info!(status = status.name(), code = status.code(), "intersect");
    println!("{}", serde_json::to_string_pretty(&intersection_json(&hit))?);
    Ok(())
}

fn intersection_json(hit: &Intersection) -> serde_json::Value {
    let status = hit.status();
    let geometry = match hit {
        Intersection::Point(p) => serde_json::json!([p.x, p.y]),
        Intersection::CollinearOverlap(s) => serde_json::json!([[s.p0.x, s.p0.y], [s.p1.x, s.p1.y]]),
        _ => serde_json::Value::Null,
    };
    serde_json::json!({
        "status": status.name(),
        "code": status.code(),
        "geometry": geometry
    })
}

fn populate(
    polygon: &Path,
    count: usize,
    seed: Option<u64>,
    exclude: &[PathBuf],
    max_rejections: u64,
    out: &Path,
    delim: char,
) -> Result<()> {
    let poly = load_polygon(polygon, delim)?;
    let holes = exclude
        .iter()
        .map(|p| load_polygon(p, delim))
        .collect::<Result<Vec<_>>>()?;
    let cfg = PopulateCfg {
        max_consecutive_rejections: (max_rejections > 0).then_some(max_rejections),
    };
    let pts = planar::populate(&poly, count, seed, &holes, cfg)?;
    tracing::info!(count, seed = ?seed, excludes = holes.len(), out = %out.display(), "populate");

    ensure_parent(out)?;
    write_polygon(out, &pts)?;
    Sidecar::new(serde_json::json!({
        "count": count,
        "seed": seed,
        "max_rejections": max_rejections
    }))
    .input(polygon)
    .inputs(exclude)
    .write(out)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
