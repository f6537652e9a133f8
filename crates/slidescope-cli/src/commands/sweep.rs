use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use slidescope_core::geometry::Point;
use slidescope_core::session::{ViewerEvent, ViewerSession};

use super::SlideArgs;
use crate::summary::print_layout;

#[derive(Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub slide: SlideArgs,

    /// Grid spacing in container pixels
    #[arg(long, default_value = "50")]
    pub step: f64,
}

/// Aggregated magnifier hits over all sampled pointer positions.
#[derive(Debug, Default, PartialEq)]
struct SweepStats {
    positions: usize,
    positions_with_hits: usize,
    total_hits: usize,
    busiest: Option<(Point, usize)>,
    /// Positions at which each label was visible, in first-seen order.
    label_hits: Vec<(String, usize)>,
}

impl SweepStats {
    fn record(&mut self, pointer: Point, labels: &[&str]) {
        self.positions += 1;
        self.total_hits += labels.len();
        if labels.is_empty() {
            return;
        }
        self.positions_with_hits += 1;
        if self.busiest.map_or(true, |(_, n)| labels.len() > n) {
            self.busiest = Some((pointer, labels.len()));
        }
        for label in labels {
            match self.label_hits.iter_mut().find(|(l, _)| l.as_str() == *label) {
                Some((_, n)) => *n += 1,
                None => self.label_hits.push((label.to_string(), 1)),
            }
        }
    }
}

/// Upper bound on sampled positions along one axis.
const MAX_SAMPLES_PER_AXIS: f64 = 10_000.0;

fn grid(extent: f64, step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        bail!("--step must be a positive number");
    }
    let count = (extent / step).floor();
    if count > MAX_SAMPLES_PER_AXIS {
        bail!(
            "--step {step} is too fine for a {extent} px axis (at most {MAX_SAMPLES_PER_AXIS} samples)"
        );
    }
    Ok((0..=count as usize).map(|i| i as f64 * step).collect())
}

pub fn run(args: &SweepArgs) -> Result<()> {
    let config = args.slide.viewer_config()?;
    let intrinsic = args.slide.intrinsic_size()?;
    let payload = args.slide.payload()?;
    let container = args.slide.container;

    let base = ViewerSession::new(config).apply_all([
        ViewerEvent::DetectionsLoaded(payload.detections),
        ViewerEvent::ImageLoaded {
            container,
            intrinsic,
        },
    ]);
    let Some(geometry) = base.geometry().copied() else {
        bail!("Image geometry could not be resolved");
    };

    let xs = grid(container.width, args.step)?;
    let ys = grid(container.height, args.step)?;
    let total = xs.len() * ys.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Sweeping pointer");

    let mut stats = SweepStats::default();
    let mut session = base.clone();
    for &y in &ys {
        for &x in &xs {
            let pointer = Point::new(x, y);
            session = session.apply(ViewerEvent::PointerMoved(pointer));
            let frame = session.frame();
            let labels: Vec<&str> = frame
                .magnifier
                .visible_boxes()
                .iter()
                .map(|b| b.label.as_str())
                .collect();
            stats.record(pointer, &labels);
            pb.inc(1);
        }
    }
    pb.finish_with_message("Sweep complete");

    print_layout(base.config(), container, intrinsic, &geometry);
    print_stats(&stats);
    Ok(())
}

fn print_stats(stats: &SweepStats) {
    println!();
    println!("Positions sampled:    {}", stats.positions);
    println!("Positions with boxes: {}", stats.positions_with_hits);
    if stats.positions > 0 {
        println!(
            "Mean boxes in view:   {:.2}",
            stats.total_hits as f64 / stats.positions as f64
        );
    }
    if let Some((p, n)) = stats.busiest {
        println!("Busiest position:     ({:.0}, {:.0}) with {n} boxes", p.x, p.y);
    }
    if !stats.label_hits.is_empty() {
        println!("\n{:<20}  {:>10}", "Label", "Positions");
        println!("{}", "-".repeat(32));
        for (label, n) in &stats.label_hits {
            println!("{:<20}  {:>10}", label, n);
        }
    }
}
