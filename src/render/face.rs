/// Clock face layout — turns a wall-clock time into a display list of
/// hands and tick marks.
use chrono::{Local, Timelike};

use crate::config::Theme;
use crate::render::display::DisplayList;
use crate::render::painter::Painter;

/// Side length of the logical design grid all shape constants live in.
const DESIGN_SIDE: f32 = 200.0;

/// Hand polygons, y-up toward 12 o'clock.
const HOUR_HAND: [(i32, i32); 4] = [(5, 14), (-5, 14), (-4, -71), (4, -71)];
const MINUTE_HAND: [(i32, i32); 4] = [(4, 14), (-4, 14), (-3, -89), (3, -89)];
const SECONDS_HAND: [(i32, i32); 4] = [(1, 14), (-1, 14), (-1, -89), (1, -89)];

/// Time of day as read from the host clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTime {
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
    /// 0-59
    pub second: u32,
}

impl FaceTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Read the live local time. Called fresh on every tick, never cached.
    pub fn now() -> Self {
        let now = Local::now().time();
        Self::new(now.hour(), now.minute(), now.second())
    }
}

/// Hour-hand angle in degrees clockwise from 12 o'clock, normalized to
/// [0, 360). The minute term advances the hand continuously.
pub fn hour_hand_angle(time: FaceTime) -> f32 {
    (30.0 * (time.hour as f32 + time.minute as f32 / 60.0)).rem_euclid(360.0)
}

pub fn minute_hand_angle(time: FaceTime) -> f32 {
    6.0 * time.minute as f32
}

pub fn second_hand_angle(time: FaceTime) -> f32 {
    6.0 * time.second as f32
}

/// Stateless face renderer. Each call lays out a complete frame for the
/// given time and surface size.
pub struct FaceRenderer;

impl FaceRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, time: FaceTime, width: u32, height: u32, theme: &Theme) -> DisplayList {
        let side = width.min(height) as f32;

        let mut p = Painter::new();
        p.translate(width as f32 / 2.0, height as f32 / 2.0);
        p.scale(side / DESIGN_SIDE, side / DESIGN_SIDE);

        p.set_pen(None);
        p.set_brush(Some(theme.foreground));

        // Hour hand
        p.save();
        p.rotate(hour_hand_angle(time));
        p.fill_convex_polygon(&HOUR_HAND);
        p.restore();

        // 12 hour marks; the rotation accumulates around the dial
        for _ in 0..12 {
            p.draw_rect(73, -3, 16, 6);
            p.rotate(30.0);
        }

        // Minute hand
        p.save();
        p.rotate(minute_hand_angle(time));
        p.fill_convex_polygon(&MINUTE_HAND);
        p.restore();

        p.set_brush(Some(theme.accent));

        // Second hand, with a pivot dot and an accent dot near the tip
        p.save();
        p.rotate(second_hand_angle(time));
        p.fill_convex_polygon(&SECONDS_HAND);
        p.fill_ellipse(-3, -3, 6, 6);
        p.fill_ellipse(-5, -68, 10, 10);
        p.restore();

        p.set_pen(Some(theme.foreground));

        // 60 minute marks
        for _ in 0..60 {
            p.draw_line(92, 0, 96, 0);
            p.rotate(6.0);
        }

        p.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::display::{DrawCmd, Shape};
    use tiny_skia::Transform;

    fn rotation_deg(t: Transform) -> f32 {
        t.ky.atan2(t.sx).to_degrees().rem_euclid(360.0)
    }

    fn render(time: FaceTime, w: u32, h: u32) -> DisplayList {
        FaceRenderer::new().render(time, w, h, &Theme::default())
    }

    #[test]
    fn test_hand_angles_at_three_oclock() {
        let t = FaceTime::new(3, 0, 0);
        assert_eq!(hour_hand_angle(t), 90.0);
        assert_eq!(minute_hand_angle(t), 0.0);
        assert_eq!(second_hand_angle(t), 0.0);
    }

    #[test]
    fn test_hour_hand_advances_with_minutes() {
        let t = FaceTime::new(0, 30, 0);
        assert_eq!(hour_hand_angle(t), 15.0);
        assert_eq!(minute_hand_angle(t), 180.0);
    }

    #[test]
    fn test_hand_angles_wrap_past_noon() {
        let t = FaceTime::new(12, 15, 45);
        assert_eq!(hour_hand_angle(t), 7.5);
        assert_eq!(minute_hand_angle(t), 90.0);
        assert_eq!(second_hand_angle(t), 270.0);
    }

    #[test]
    fn test_twelve_hour_ticks_at_30_degree_steps() {
        let list = render(FaceTime::new(0, 0, 0), 200, 200);
        let ticks: Vec<&DrawCmd> = list
            .commands
            .iter()
            .filter(|c| matches!(c.shape, Shape::Rect { .. }))
            .collect();
        assert_eq!(ticks.len(), 12);
        for (i, cmd) in ticks.iter().enumerate() {
            let angle = rotation_deg(cmd.transform);
            let expected = 30.0 * i as f32;
            assert!(
                (angle - expected).abs() < 0.01,
                "tick {i}: {angle} != {expected}"
            );
        }
    }

    #[test]
    fn test_sixty_minute_ticks_at_6_degree_steps() {
        let list = render(FaceTime::new(0, 0, 0), 200, 200);
        let ticks: Vec<&DrawCmd> = list
            .commands
            .iter()
            .filter(|c| matches!(c.shape, Shape::Line { .. }))
            .collect();
        assert_eq!(ticks.len(), 60);
        for (i, cmd) in ticks.iter().enumerate() {
            let angle = rotation_deg(cmd.transform);
            let expected = 6.0 * i as f32;
            assert!(
                (angle - expected).abs() < 0.01,
                "tick {i}: {angle} != {expected}"
            );
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let t = FaceTime::new(10, 8, 37);
        assert_eq!(render(t, 128, 64), render(t, 128, 64));
    }

    #[test]
    fn test_scale_uses_short_side() {
        let list = render(FaceTime::new(0, 0, 0), 100, 200);
        // side = 100, so every command carries translate(50, 100) * scale(0.5)
        let t = list.commands[0].transform;
        assert!((t.sx - 0.5).abs() < 1e-6);
        assert!((t.sy - 0.5).abs() < 1e-6);
        assert!((t.tx - 50.0).abs() < 1e-6);
        assert!((t.ty - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_hour_hand_points_right_at_three() {
        let list = render(FaceTime::new(3, 0, 0), 200, 200);
        let cmd = &list.commands[0];
        assert!(matches!(cmd.shape, Shape::Polygon(_)));
        // the design-grid 12 o'clock direction (0,-1) lands on the +x side
        let t = cmd.transform;
        let (x, y) = (t.kx * -1.0 + t.tx, t.sy * -1.0 + t.ty);
        assert!(x > 100.0, "x = {x}");
        assert!((y - 100.0).abs() < 1e-3, "y = {y}");
    }

    #[test]
    fn test_second_hand_uses_accent_color() {
        let theme = Theme::default();
        let list = FaceRenderer::new().render(FaceTime::new(3, 0, 0), 200, 200, &theme);
        let fills: Vec<_> = list.commands.iter().filter_map(|c| c.fill).collect();
        assert_eq!(fills[0], theme.foreground); // hour hand
        // seconds polygon plus its two dots
        let accents = fills.iter().filter(|&&c| c == theme.accent).count();
        assert_eq!(accents, 3);
    }
}
