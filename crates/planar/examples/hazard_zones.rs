//! Scatter points over a study area and assign each a zone value.
//!
//! Usage:
//!   cargo run -p planar --example hazard_zones -- [count] [seed]
//!
//! The study area is a 10x10 square with a lake (excluded), a low zone and a
//! high zone overlapping it. Prints the per-zone counts.

use planar::{populate, Polygon, PopulateCfg, Region, RegionFunction, RegionValue};

fn main() -> Result<(), planar::Error> {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1_000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let area = Polygon::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])?;
    let lake = Polygon::from_xy(&[[7.0, 7.0], [9.5, 7.5], [9.0, 9.5], [7.5, 9.0]])?;
    let low = Polygon::from_xy(&[[0.0, 0.0], [6.0, 0.0], [6.0, 6.0], [0.0, 6.0]])?;
    let high = Polygon::from_xy(&[[3.0, 3.0], [8.0, 3.0], [5.5, 8.0]])?;

    let pts = populate(&area, count, Some(seed), &[lake], PopulateCfg::default())?;
    let zones = RegionFunction::new(
        vec![
            Region::new(low, 1.0),
            Region::new(high, RegionValue::function(|x, _| 2.0 + x / 10.0)),
        ],
        0.0,
    );
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let z = zones.evaluate(&xs, &ys)?;

    let none = z.iter().filter(|&&v| v == 0.0).count();
    let low_n = z.iter().filter(|&&v| v == 1.0).count();
    let high_n = z.iter().filter(|&&v| v >= 2.0).count();
    println!("points={count} seed={seed} none={none} low={low_n} high={high_n}");
    Ok(())
}
