use anyhow::{bail, Result};
use clap::Args;
use slidescope_core::geometry::Point;
use slidescope_core::session::{ViewerEvent, ViewerSession};

use super::{parse_point, SlideArgs};
use crate::summary::{print_cursor, print_layout, print_magnifier, print_overlay};

#[derive(Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub slide: SlideArgs,

    /// Pointer position in container space as X,Y; omit to show the hover-off state
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub pointer: Option<Point>,

    /// Maximum number of overlay boxes to list
    #[arg(long, default_value = "20")]
    pub limit: usize,
}

pub fn run(args: &ProjectArgs) -> Result<()> {
    let config = args.slide.viewer_config()?;
    let intrinsic = args.slide.intrinsic_size()?;
    let payload = args.slide.payload()?;
    let container = args.slide.container;

    let mut events = vec![
        ViewerEvent::DetectionsLoaded(payload.detections),
        ViewerEvent::ImageLoaded {
            container,
            intrinsic,
        },
    ];
    events.extend(args.pointer.map(ViewerEvent::PointerMoved));

    let session = ViewerSession::new(config).apply_all(events);
    let frame = session.frame();
    let Some(geometry) = frame.geometry else {
        bail!("Image geometry could not be resolved");
    };

    print_layout(session.config(), container, intrinsic, &geometry);
    print_cursor(session.cursor());
    print_overlay(&frame.overlay, args.limit);
    print_magnifier(&frame.magnifier);
    Ok(())
}
