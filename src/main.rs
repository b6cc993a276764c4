use anyhow::Context;
use pixfmt_rs::logger;
use pixfmt_rs::{PixelFormat, PixelImage, RasterImage, Rect, Rgb48Image};

use tracing::{debug, info};

const WIDTH: i32 = 16;
const HEIGHT: i32 = 16;

fn main() -> anyhow::Result<()> {
    logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "3xuint8".to_string());
    let format: PixelFormat = arg
        .parse()
        .with_context(|| format!("invalid pixel format {:?}, expected e.g. 3xuint16", arg))?;
    format.validate()?;

    info!("Starting pixfmt round trip through {}", format);

    let mut source = Rgb48Image::new(Rect::new(0, 0, WIDTH, HEIGHT));
    for p in source.bounds().points() {
        let r = (p.x as u32 * 0xffff / (WIDTH as u32 - 1)) as u16;
        let g = (p.y as u32 * 0xffff / (HEIGHT as u32 - 1)) as u16;
        let b = r ^ g;
        source.set_rgb48(p.x, p.y, [r, g, b]);
    }
    debug!("Source gradient ready: {} bytes", source.pix().len());

    let converted = PixelImage::from_image(&source, format);
    info!(
        bytes = converted.pix().len(),
        opaque = converted.opaque(),
        "Converted to {}",
        format
    );

    let restored = Rgb48Image::from_image(&converted);
    let worst = source
        .bounds()
        .points()
        .flat_map(|p| {
            let a = source.rgb48_at(p.x, p.y);
            let b = restored.rgb48_at(p.x, p.y);
            (0..3).map(move |i| a[i].abs_diff(b[i]))
        })
        .max()
        .unwrap_or(0);

    info!("Worst channel error after round trip: {:#06x}", worst);
    Ok(())
}
