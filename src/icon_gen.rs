use crate::geometry::{IconGeometry, Rect, MIN_ICON_SIZE};
use anyhow::{anyhow, Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

/// Background disc and front square fill
pub const ACCENT_COLOR: &str = "#0e639c";
/// Outline of both squares
pub const OUTLINE_COLOR: &str = "white";

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// One icon the driver produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// Icons written by `generate_icons`, in order
pub const ICON_SPECS: [IconSpec; 3] = [
    IconSpec {
        size: 16,
        filename: "icon16.png",
    },
    IconSpec {
        size: 48,
        filename: "icon48.png",
    },
    IconSpec {
        size: 128,
        filename: "icon128.png",
    },
];

/// Render every icon in `ICON_SPECS` into `out_dir`.
///
/// Stops at the first failure: icons already written stay on disk and the
/// remaining ones are skipped.
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    for spec in ICON_SPECS {
        render_icon(spec.size, &out_dir.join(spec.filename))?;
    }

    println!("Icons created!");
    Ok(())
}

/// Draw the icon at `size` and write it to `path` as an RGBA PNG,
/// replacing any existing file.
pub fn render_icon(size: u32, path: &Path) -> Result<()> {
    let canvas = draw_icon(size)?;
    save_png(&canvas, path)
}

/// Draw the icon in memory
///
/// Layers, bottom to top: accent disc, white outline of the back square,
/// accent fill of the front square, white outline of the front square.
pub fn draw_icon(size: u32) -> Result<RgbaImage> {
    if size < MIN_ICON_SIZE {
        anyhow::bail!("Icon size must be at least {MIN_ICON_SIZE}px, got {size}px");
    }

    let accent = parse_color(ACCENT_COLOR)?;
    let outline = parse_color(OUTLINE_COLOR)?;
    let geometry = IconGeometry::new(size);

    let mut canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);

    fill_ellipse(&mut canvas, geometry.circle, accent);
    draw_rectangle(
        &mut canvas,
        geometry.back,
        None,
        Some((outline, geometry.stroke_width)),
    );
    draw_rectangle(
        &mut canvas,
        geometry.front,
        Some(accent),
        Some((outline, geometry.stroke_width)),
    );

    Ok(canvas)
}

/// Parse a CSS color into an opaque 8-bit pixel
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow!("Invalid color: {}", color))?;

    Ok(Rgba([
        (srgb.red * 255.).round() as u8,
        (srgb.green * 255.).round() as u8,
        (srgb.blue * 255.).round() as u8,
        255,
    ]))
}

/// Fill the ellipse inscribed in `bounds`
///
/// A pixel is painted when its center falls inside the ellipse spanning the
/// whole inclusive box.
fn fill_ellipse(canvas: &mut RgbaImage, bounds: Rect, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let center_x = (bounds.x0 + bounds.x1 + 1) as f32 / 2.0;
    let center_y = (bounds.y0 + bounds.y1 + 1) as f32 / 2.0;
    let radius_x = (bounds.x1 - bounds.x0 + 1) as f32 / 2.0;
    let radius_y = (bounds.y1 - bounds.y0 + 1) as f32 / 2.0;

    for y in bounds.y0..=bounds.y1.min(height - 1) {
        for x in bounds.x0..=bounds.x1.min(width - 1) {
            let dx = (x as f32 + 0.5 - center_x) / radius_x;
            let dy = (y as f32 + 0.5 - center_y) / radius_y;

            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Draw `rect` with an optional fill and an optional `(color, width)` outline
///
/// The outline grows inward from the box edge, so the shape never exceeds
/// `rect`. A stroke wider than half the box covers it completely.
fn draw_rectangle(
    canvas: &mut RgbaImage,
    rect: Rect,
    fill: Option<Rgba<u8>>,
    outline: Option<(Rgba<u8>, u32)>,
) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let interior = match outline {
        Some((_, stroke)) => rect.inset(stroke),
        None => Some(rect),
    };

    for y in rect.y0..=rect.y1.min(height - 1) {
        for x in rect.x0..=rect.x1.min(width - 1) {
            let inside = interior.map_or(false, |inner| inner.contains(x, y));

            match (inside, outline, fill) {
                (false, Some((color, _)), _) => canvas.put_pixel(x, y, color),
                (true, _, Some(color)) => canvas.put_pixel(x, y, color),
                _ => {}
            }
        }
    }
}

fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(canvas.as_raw(), &mut out_file, canvas.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode square RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
