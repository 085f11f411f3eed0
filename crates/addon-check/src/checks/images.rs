//! Icon and fanart dimension policy.

use std::path::Path;

use addon_manifest::MODULE_POINT;

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

const ICON_SIZE: (u32, u32) = (256, 256);
const FANART_SIZES: [(u32, u32); 2] = [(1280, 720), (1920, 1080)];

/// Validates icon and fanart dimensions.
///
/// Library modules are never visible in the UI and are skipped entirely.
/// A missing file reads as 0x0, which fails the icon check (icons are
/// mandatory) and passes the fanart check (fanart is optional).
pub struct ImageSizes;

impl Check for ImageSizes {
    fn name(&self) -> &'static str {
        "images"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        if ctx.addon.extension_points().contains(&MODULE_POINT) {
            tracing::debug!(addon = %ctx.addon.id, "module addon, skipping image checks");
            return Ok(());
        }

        let (width, height) = image_size(&ctx.addon_path.join("icon.png"));
        if (width, height) != ICON_SIZE {
            report.fail(format!("incorrect icon.png size: {width}x{height}"));
        }

        let (width, height) = image_size(&ctx.addon_path.join("fanart.jpg"));
        if (width, height) != (0, 0) && !FANART_SIZES.contains(&(width, height)) {
            report.fail(format!("incorrect fanart.jpg resolution: {width}x{height}"));
        }

        Ok(())
    }
}

/// Pixel dimensions of an image, or 0x0 when it is missing or unreadable.
fn image_size(path: &Path) -> (u32, u32) {
    match image::image_dimensions(path) {
        Ok(size) => size,
        Err(e) => {
            tracing::debug!(file = %path.display(), error = %e, "no readable image");
            (0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::{context_from_xml, context_in};

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::new(width, height).save(path).unwrap();
    }

    fn write_jpg(path: &Path, width: u32, height: u32) {
        image::RgbImage::new(width, height).save(path).unwrap();
    }

    #[test]
    fn test_missing_icon_reads_as_zero_and_fails() {
        let (_dir, ctx) = context_from_xml("frodo", "1.0.0", &[]);
        let mut report = Report::new();
        ImageSizes.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 1));
    }

    #[test]
    fn test_correct_icon_passes_without_fanart() {
        let (dir, _) = context_from_xml("frodo", "1.0.0", &[]);
        write_png(&dir.path().join("icon.png"), 256, 256);
        let ctx = context_in(dir.path(), "frodo");

        let mut report = Report::new();
        ImageSizes.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 0));
    }

    #[test]
    fn test_wrong_icon_size_fails() {
        let (dir, _) = context_from_xml("frodo", "1.0.0", &[]);
        write_png(&dir.path().join("icon.png"), 128, 128);
        let ctx = context_in(dir.path(), "frodo");

        let mut report = Report::new();
        ImageSizes.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 1));
    }

    #[test]
    fn test_fanart_resolutions() {
        for (width, height, errors) in [(1280, 720, 0), (1920, 1080, 0), (1024, 576, 1)] {
            let (dir, _) = context_from_xml("frodo", "1.0.0", &[]);
            write_png(&dir.path().join("icon.png"), 256, 256);
            write_jpg(&dir.path().join("fanart.jpg"), width, height);
            let ctx = context_in(dir.path(), "frodo");

            let mut report = Report::new();
            ImageSizes.run(&ctx, &mut report).unwrap();
            assert_eq!(report.errors(), errors, "{width}x{height}");
        }
    }

    #[test]
    fn test_module_addons_skip_image_checks() {
        let (_dir, ctx) = context_from_xml("frodo", "1.0.0", &["xbmc.python.module"]);
        let mut report = Report::new();
        ImageSizes.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 0));
    }
}
