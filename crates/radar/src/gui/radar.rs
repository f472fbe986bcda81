use cairo::Context;
use std::f64::consts::PI;
use sweep::CirclePaint;

/// Fill first, outline on top, for every ring in order.
pub fn draw(cr: &Context, paints: &[CirclePaint]) -> Result<(), cairo::Error> {
    for paint in paints {
        draw_ring(cr, paint)?;
    }
    Ok(())
}

fn draw_ring(cr: &Context, paint: &CirclePaint) -> Result<(), cairo::Error> {
    let (r, g, b, a) = paint.fill.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.arc(paint.center.x, paint.center.y, paint.radius, 0.0, 2.0 * PI);
    cr.fill()?;

    let (r, g, b, a) = paint.stroke.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(paint.stroke_width);
    cr.arc(paint.center.x, paint.center.y, paint.radius, 0.0, 2.0 * PI);
    cr.stroke()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};
    use palette::Srgb;
    use std::time::Duration;
    use sweep::{Bounds, RingAnimator, RingStyle, SweepSettings, ring_paints};

    const SIZE: i32 = 200;

    fn render(paints: &[CirclePaint]) -> ImageSurface {
        let surface = ImageSurface::create(Format::ARgb32, SIZE, SIZE).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            draw(&cr, paints).unwrap();
        }
        surface.flush();
        surface
    }

    fn is_painted(surface: &mut ImageSurface, x: i32, y: i32) -> bool {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y as usize * stride + x as usize * 4;
        data[offset..offset + 4].iter().any(|&b| b != 0)
    }

    fn animator() -> RingAnimator {
        let mut animator = RingAnimator::new(SweepSettings {
            duration_ms: 2000,
            ring_count: 2,
            stroke_alpha: 255,
            fill_alpha: 30,
            stroke_width: 2.0,
        });
        animator.set_min_radius(20.0);
        animator.on_bounds_changed(SIZE as f64, SIZE as f64);
        animator
    }

    fn style() -> RingStyle {
        RingStyle {
            accent: Srgb::new(0.0, 1.0, 0.0),
            stroke_width: 2.0,
        }
    }

    #[test]
    fn test_running_sweep_paints_rings() {
        let mut animator = animator();
        animator.start();
        animator.tick(Duration::ZERO);

        let bounds = Bounds::from_size(SIZE as f64, SIZE as f64);
        let mut surface = render(&ring_paints(&animator, bounds, &style()));

        // inside the first ring's disc, and on the second ring's outline (r = 60)
        assert!(is_painted(&mut surface, 100, 100));
        assert!(is_painted(&mut surface, 160, 100));
        // outside every ring
        assert!(!is_painted(&mut surface, 2, 2));
    }

    #[test]
    fn test_stopped_sweep_paints_nothing() {
        let mut animator = animator();
        animator.start();
        animator.stop();

        let bounds = Bounds::from_size(SIZE as f64, SIZE as f64);
        let paints = ring_paints(&animator, bounds, &style());
        let mut surface = render(&paints);

        assert!(!is_painted(&mut surface, 100, 100));
        assert!(!is_painted(&mut surface, 160, 100));
    }
}
