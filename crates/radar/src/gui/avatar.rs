use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use sweep::Point;

const BORDER_WIDTH: f64 = 2.0;

/// Round picture at the center of the sweep. Rings grow out from its edge.
#[derive(Clone)]
pub struct Avatar {
    pub source: Option<PathBuf>,
    pub pixbuf: Option<Pixbuf>,
    pub size: u32,
}

impl Avatar {
    pub fn placeholder(size: u32) -> Self {
        Self {
            source: None,
            pixbuf: None,
            size,
        }
    }

    pub fn load(path: &Path, size: u32) -> Result<Self, glib::Error> {
        let side = size.max(1) as i32;
        let pixbuf = Pixbuf::from_file_at_scale(path, side, side, true)?;
        Ok(Self {
            source: Some(path.to_path_buf()),
            pixbuf: Some(pixbuf),
            size,
        })
    }

    /// Same picture at a new size; placeholders just change size.
    pub fn resized(&self, size: u32) -> Result<Self, glib::Error> {
        match &self.source {
            Some(path) => Self::load(path, size),
            None => Ok(Self::placeholder(size)),
        }
    }

    pub fn radius(&self) -> f64 {
        self.size as f64 / 2.0
    }

    pub fn draw(
        &self,
        cr: &Context,
        center: Point,
        colors: &ThemeColors,
    ) -> Result<(), cairo::Error> {
        let radius = self.radius();
        if radius <= 0.0 {
            return Ok(());
        }

        cr.save()?;
        cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        cr.clip();
        match &self.pixbuf {
            Some(pixbuf) => self.draw_image(cr, pixbuf, center)?,
            None => {
                let (r, g, b, a) = colors.placeholder.into_components();
                cr.set_source_rgba(r, g, b, a);
                cr.paint()?;
            }
        }
        cr.restore()?;

        let (r, g, b, a) = colors.avatar_border.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.set_line_width(BORDER_WIDTH);
        cr.arc(center.x, center.y, radius - BORDER_WIDTH / 2.0, 0.0, 2.0 * PI);
        cr.stroke()
    }

    fn draw_image(
        &self,
        cr: &Context,
        pixbuf: &Pixbuf,
        center: Point,
    ) -> Result<(), cairo::Error> {
        // cover the circle, cropping the long side
        let (w, h) = (pixbuf.width() as f64, pixbuf.height() as f64);
        let scale = self.size as f64 / w.min(h).max(1.0);
        cr.translate(center.x - w * scale / 2.0, center.y - h * scale / 2.0);
        cr.scale(scale, scale);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()
    }
}
