//! Screen/document coordinate projection.

use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Rounding step for document-space values (hundredths of a point).
const DOC_PRECISION: f64 = 100.0;

/// A rectangle in document space: 72-DPI points, origin at the bottom-left
/// of the page.
///
/// Kept distinct from screen-space [`kurbo::Rect`] so the two coordinate
/// spaces cannot be mixed up at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DocRect {
    pub const ZERO: DocRect = DocRect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new document rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Intrinsic geometry of a rendered page, fixed for the lifetime of one
/// document session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Page size in document points (72 DPI).
    pub page_size: Size,
    /// Pixel size of the rasterized page surface.
    pub surface_size: Size,
}

impl PageMetrics {
    /// Create page metrics from the rasterizer's output.
    pub fn new(page_size: Size, surface_size: Size) -> Self {
        Self {
            page_size,
            surface_size,
        }
    }
}

/// Projection between on-screen pixel space and the document's intrinsic
/// point space.
///
/// Screen space has its origin at the top-left and scales with the
/// container; document space is fixed per page with its origin at the
/// bottom-left. The document rectangle is always the authoritative
/// geometry; screen rectangles are derived through this projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Ratio of the container's displayed width to the surface's native
    /// pixel width. Recomputed on every container resize.
    pub scale: f64,
    /// Immutable page geometry.
    pub metrics: PageMetrics,
}

impl Projection {
    /// Create a projection for a page displayed in a container of the
    /// given width.
    pub fn new(metrics: PageMetrics, container_width: f64) -> Self {
        Self {
            scale: container_width / metrics.surface_size.width,
            metrics,
        }
    }

    /// Document points per surface pixel, horizontal.
    fn points_per_px_x(&self) -> f64 {
        self.metrics.page_size.width / self.metrics.surface_size.width
    }

    /// Document points per surface pixel, vertical.
    fn points_per_px_y(&self) -> f64 {
        self.metrics.page_size.height / self.metrics.surface_size.height
    }

    /// Convert a screen rectangle to document space.
    ///
    /// Flips the origin from top-left to bottom-left and reports values at
    /// hundredths-of-a-point precision.
    pub fn to_document(&self, screen: Rect) -> DocRect {
        let sx = self.points_per_px_x();
        let sy = self.points_per_px_y();

        let width = round2(screen.width() / self.scale * sx);
        let height = round2(screen.height() / self.scale * sy);
        let x = round2(screen.x0 / self.scale * sx);
        let y = round2(self.metrics.page_size.height - screen.y0 / self.scale * sy - height);

        DocRect::new(x, y, width, height)
    }

    /// Convert a document rectangle back to screen space.
    ///
    /// Exact inverse of [`Projection::to_document`]. Screen space is
    /// pixel-rendered, so no rounding is applied.
    pub fn to_screen(&self, doc: DocRect) -> Rect {
        let sx = self.points_per_px_x();
        let sy = self.points_per_px_y();

        let x = doc.x / sx * self.scale;
        let y = (self.metrics.page_size.height - doc.y - doc.height) / sy * self.scale;
        let width = doc.width / sx * self.scale;
        let height = doc.height / sy * self.scale;

        Rect::new(x, y, x + width, y + height)
    }
}

/// Round to hundredths of a point.
fn round2(value: f64) -> f64 {
    (value * DOC_PRECISION).round() / DOC_PRECISION
}
