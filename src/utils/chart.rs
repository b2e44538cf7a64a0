//! SVG geometry for the hand-drawn charts.
//!
//! Everything here is plain math on `f32` coordinates and returns path data
//! strings; the components only place them.

/// Maps a value domain onto a pixel range (the range may be inverted for y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f32,
    d1: f32,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, v: f32) -> f32 {
        let span = self.d1 - self.d0;
        if span.abs() < f32::EPSILON {
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }
}

/// Min and max of the present values, `None` when there are none.
pub fn extent<I: IntoIterator<Item = f32>>(values: I) -> Option<(f32, f32)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Pads `(lo, hi)` to whole `step` multiples so lines never touch the frame.
pub fn padded_extent(lo: f32, hi: f32, step: f32) -> (f32, f32) {
    let lo = (lo / step).floor() * step;
    let mut hi = (hi / step).ceil() * step;
    if hi <= lo {
        hi = lo + step;
    }
    (lo, hi)
}

/// `count` evenly spaced ticks from `lo` to `hi` inclusive.
pub fn ticks(lo: f32, hi: f32, count: usize) -> Vec<f32> {
    match count {
        0 => vec![],
        1 => vec![lo],
        n => (0..n)
            .map(|i| lo + (hi - lo) * (i as f32) / ((n - 1) as f32))
            .collect(),
    }
}

/// Runs of consecutive present values as `(index, value)` pairs.
/// A `None` breaks the line, so padded series draw only where they have data.
pub fn segments(values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for (i, v) in values.iter().enumerate() {
        match v {
            Some(v) => run.push((i, *v)),
            None if !run.is_empty() => out.push(std::mem::take(&mut run)),
            None => {}
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

pub fn line_path(points: &[(f32, f32)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd} {x:.2} {y:.2} "));
    }
    d.trim_end().to_string()
}

/// Catmull-Rom spline through the points, as cubic Bézier segments.
pub fn smooth_path(points: &[(f32, f32)]) -> String {
    if points.len() < 3 {
        return line_path(points);
    }
    let mut d = format!("M {:.2} {:.2}", points[0].0, points[0].1);
    for i in 0..points.len() - 1 {
        let p0 = if i == 0 { points[i] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() { points[i + 2] } else { p2 };
        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
        d.push_str(&format!(
            " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        ));
    }
    d
}

/// Closed area under a line down to `baseline`.
pub fn area_path(points: &[(f32, f32)], baseline: f32, smooth: bool) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let top = if smooth {
        smooth_path(points)
    } else {
        line_path(points)
    };
    format!(
        "{top} L {:.2} {baseline:.2} L {:.2} {baseline:.2} Z",
        last.0, first.0
    )
}

pub fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Open arc from `a0` to `a1` degrees (0° = 3 o'clock, clockwise).
pub fn arc_path(cx: f32, cy: f32, r: f32, a0: f32, a1: f32) -> String {
    let (x0, y0) = polar(cx, cy, r, a0);
    let (x1, y1) = polar(cx, cy, r, a1);
    let delta = (a1 - a0).abs();
    let large_arc = if delta >= 180.0 { 1 } else { 0 };
    let sweep = if a1 >= a0 { 1 } else { 0 };
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} {sweep} {x1:.3} {y1:.3}")
}

/// Start and end angle (degrees) of one donut slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub end: f32,
}

impl Slice {
    pub fn mid(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Splits 360° proportionally to `values`, clockwise from `start_deg`.
/// Negative values count as zero; an all-zero input yields zero-width slices.
pub fn slices(values: &[f64], start_deg: f32) -> Vec<Slice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut at = start_deg;
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 {
                (v.max(0.0) / total * 360.0) as f32
            } else {
                0.0
            };
            let s = Slice {
                start: at,
                end: at + sweep,
            };
            at += sweep;
            s
        })
        .collect()
}

/// Filled ring segment between radii `r0 < r1`.
pub fn ring_segment(cx: f32, cy: f32, r0: f32, r1: f32, slice: Slice) -> String {
    // A full circle cannot be drawn as one arc; stop just short of it
    let end = if slice.end - slice.start >= 360.0 {
        slice.start + 359.99
    } else {
        slice.end
    };
    let large_arc = if end - slice.start > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, r1, slice.start);
    let (ox1, oy1) = polar(cx, cy, r1, end);
    let (ix1, iy1) = polar(cx, cy, r0, end);
    let (ix0, iy0) = polar(cx, cy, r0, slice.start);
    format!(
        "M {ox0:.3} {oy0:.3} A {r1:.3} {r1:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {r0:.3} {r0:.3} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
    )
}

/// Evenly spaced x positions for `n` categories inside `[left, right]`.
/// With `boundary_gap` each category gets a band and sits in its centre,
/// otherwise the first and last categories sit on the edges.
pub fn category_positions(n: usize, left: f32, right: f32, boundary_gap: bool) -> Vec<f32> {
    if n == 0 {
        return vec![];
    }
    let width = right - left;
    if boundary_gap {
        let band = width / n as f32;
        (0..n).map(|i| left + band * (i as f32 + 0.5)).collect()
    } else if n == 1 {
        vec![left + width / 2.0]
    } else {
        let step = width / (n - 1) as f32;
        (0..n).map(|i| left + step * i as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn scale_maps_and_inverts() {
        let y = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        assert!(close(y.map(0.0), 200.0));
        assert!(close(y.map(25.0), 150.0));
        assert!(close(y.map(100.0), 0.0));
        // Degenerate domain lands mid-range
        let flat = LinearScale::new((5.0, 5.0), (0.0, 10.0));
        assert!(close(flat.map(5.0), 5.0));
    }

    #[test]
    fn extents_and_ticks() {
        assert_eq!(extent(Vec::<f32>::new()), None);
        assert_eq!(extent([3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(padded_extent(31.0, 39.0, 5.0), (30.0, 40.0));
        assert_eq!(padded_extent(30.0, 30.0, 5.0), (30.0, 35.0));
        assert_eq!(ticks(0.0, 40.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn segments_break_on_gaps() {
        let v = [None, Some(1.0), Some(2.0), None, Some(3.0)];
        assert_eq!(
            segments(&v),
            vec![vec![(1, 1.0), (2, 2.0)], vec![(4, 3.0)]]
        );
        assert!(segments(&[None, None]).is_empty());
    }

    #[test]
    fn paths() {
        assert_eq!(line_path(&[(0.0, 1.0), (2.0, 3.0)]), "M 0.00 1.00 L 2.00 3.00");
        assert_eq!(line_path(&[]), "");
        let s = smooth_path(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert!(s.starts_with("M 0.00 0.00 C"));
        assert_eq!(s.matches(" C ").count(), 2);
        assert!(s.ends_with("2.00 0.00"));
        let a = area_path(&[(0.0, 1.0), (2.0, 3.0)], 10.0, false);
        assert_eq!(a, "M 0.00 1.00 L 2.00 3.00 L 2.00 10.00 L 0.00 10.00 Z");
        assert_eq!(area_path(&[], 10.0, true), "");
    }

    #[test]
    fn arcs() {
        let (x, y) = polar(10.0, 10.0, 5.0, 90.0);
        assert!(close(x, 10.0) && close(y, 15.0));
        let d = arc_path(50.0, 50.0, 40.0, 0.0, 270.0);
        assert!(d.contains(" 0 1 1 "));
        let d = arc_path(50.0, 50.0, 40.0, 0.0, 90.0);
        assert!(d.contains(" 0 0 1 "));
    }

    #[test]
    fn slices_cover_the_circle() {
        let s = slices(&[85.0, 15.0], -90.0);
        assert_eq!(s.len(), 2);
        assert!(close(s[0].start, -90.0));
        assert!(close(s[0].end, 216.0));
        assert!(close(s[1].end, 270.0));
        assert!(close(s[1].mid(), 243.0));

        let zero = slices(&[0.0, 0.0], 0.0);
        assert!(zero.iter().all(|s| s.start == s.end));
    }

    #[test]
    fn full_ring_segment_is_drawable() {
        let d = ring_segment(0.0, 0.0, 5.0, 10.0, Slice { start: 0.0, end: 360.0 });
        assert!(d.starts_with("M 10.000 0.000"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn category_layout() {
        assert_eq!(category_positions(2, 0.0, 100.0, true), vec![25.0, 75.0]);
        assert_eq!(category_positions(3, 0.0, 100.0, false), vec![0.0, 50.0, 100.0]);
        assert_eq!(category_positions(1, 0.0, 100.0, false), vec![50.0]);
        assert!(category_positions(0, 0.0, 100.0, true).is_empty());
    }
}
