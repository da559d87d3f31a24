use crate::obstacle::Obstacle;
use crate::rect::Rect;
use crate::units::Pt;

/// One contiguous horizontally free run of a line's band
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub start_x: Pt,
    pub end_x: Pt,
}

impl LineSegment {
    pub fn new(start_x: Pt, end_x: Pt) -> LineSegment {
        LineSegment { start_x, end_x }
    }

    pub fn width(&self) -> Pt {
        self.end_x - self.start_x
    }

    pub fn contains(&self, x: Pt) -> bool {
        self.start_x <= x && x <= self.end_x
    }
}

/// Computes the free segments of the band `[line_y, line_y + line_height)` across a
/// surface `surface_width` wide, ordered left to right. Segments never overlap and always
/// have a positive width; a band blocked from edge to edge has none.
pub fn segments_for_line(
    obstacles: &[Obstacle],
    line_y: Pt,
    line_height: Pt,
    surface_width: Pt,
) -> Vec<LineSegment> {
    let band = Rect {
        x: Pt::ZERO,
        y: line_y,
        width: surface_width,
        height: line_height,
    };

    let mut blocking: Vec<Rect> = obstacles
        .iter()
        .map(Obstacle::footprint)
        .filter(|footprint| footprint.overlaps(&band))
        .collect();
    blocking.sort_by(|a, b| a.x.0.total_cmp(&b.x.0));

    let mut segments: Vec<LineSegment> = Vec::with_capacity(blocking.len() + 1);
    let mut cursor = Pt::ZERO;
    for footprint in blocking.iter() {
        let end = footprint.x.min(surface_width);
        if end > cursor {
            segments.push(LineSegment::new(cursor, end));
        }
        cursor = cursor.max(footprint.right());
    }
    if cursor < surface_width {
        segments.push(LineSegment::new(cursor, surface_width));
    }

    segments.retain(|segment| segment.width().is_positive());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, y: f32, width: f32, height: f32, margin: f32) -> Obstacle {
        Obstacle::new("o", Rect::new(x, y, width, height), Pt(margin))
    }

    #[test]
    fn unobstructed_band_spans_full_width() {
        let segments = segments_for_line(&[], Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(segments, vec![LineSegment::new(Pt(0.0), Pt(300.0))]);
    }

    #[test]
    fn obstacle_splits_band_in_two() {
        let obstacles = [obstacle(100.0, 0.0, 50.0, 20.0, 0.0)];
        let segments = segments_for_line(&obstacles, Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(
            segments,
            vec![
                LineSegment::new(Pt(0.0), Pt(100.0)),
                LineSegment::new(Pt(150.0), Pt(300.0)),
            ]
        );
    }

    #[test]
    fn obstacles_outside_the_band_are_ignored() {
        let obstacles = [obstacle(100.0, 20.0, 50.0, 20.0, 0.0)];
        let segments = segments_for_line(&obstacles, Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn margin_widens_the_blocked_span() {
        let obstacles = [obstacle(100.0, 25.0, 50.0, 20.0, 10.0)];
        let segments = segments_for_line(&obstacles, Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(
            segments,
            vec![
                LineSegment::new(Pt(0.0), Pt(90.0)),
                LineSegment::new(Pt(160.0), Pt(300.0)),
            ]
        );
    }

    #[test]
    fn full_width_obstacle_blocks_the_band() {
        let obstacles = [obstacle(0.0, 0.0, 300.0, 40.0, 10.0)];
        assert!(segments_for_line(&obstacles, Pt(20.0), Pt(20.0), Pt(300.0)).is_empty());
    }

    #[test]
    fn overlapping_obstacles_merge() {
        let obstacles = [
            obstacle(120.0, 0.0, 100.0, 20.0, 0.0),
            obstacle(50.0, 0.0, 100.0, 20.0, 0.0),
            obstacle(60.0, 0.0, 10.0, 20.0, 0.0),
        ];
        let segments = segments_for_line(&obstacles, Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(
            segments,
            vec![
                LineSegment::new(Pt(0.0), Pt(50.0)),
                LineSegment::new(Pt(220.0), Pt(300.0)),
            ]
        );
    }

    #[test]
    fn obstacles_at_the_edges_leave_no_slivers() {
        let obstacles = [
            obstacle(-20.0, 0.0, 40.0, 20.0, 0.0),
            obstacle(280.0, 0.0, 60.0, 20.0, 0.0),
        ];
        let segments = segments_for_line(&obstacles, Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(segments, vec![LineSegment::new(Pt(20.0), Pt(280.0))]);
    }

    #[test]
    fn adjacent_obstacles_leave_no_zero_width_gap() {
        let obstacles = [
            obstacle(50.0, 0.0, 50.0, 20.0, 0.0),
            obstacle(100.0, 0.0, 50.0, 20.0, 0.0),
        ];
        let segments = segments_for_line(&obstacles, Pt(0.0), Pt(20.0), Pt(300.0));
        assert_eq!(
            segments,
            vec![
                LineSegment::new(Pt(0.0), Pt(50.0)),
                LineSegment::new(Pt(150.0), Pt(300.0)),
            ]
        );
    }
}
