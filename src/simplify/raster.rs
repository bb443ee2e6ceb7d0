//! 3D integer line rasterization.

use crate::core::Waypoint;

/// Rasterize the straight segment between two waypoints into integer
/// lattice steps.
///
/// Endpoints are truncated to the lattice. The dominant axis (largest
/// absolute delta) advances one unit per step while doubled error terms
/// accumulate for the other two axes, stepping them when the error crosses
/// zero. Every visited cell is emitted, both endpoints included; the
/// emitted waypoints carry the stepped integer coordinates.
pub fn rasterize(from: Waypoint, to: Waypoint) -> Vec<Waypoint> {
    let (mut x, mut y, mut e) = (from.x as i32, from.y as i32, from.elevation as i32);
    let (x1, y1, e1) = (to.x as i32, to.y as i32, to.elevation as i32);

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let de = (e1 - e).abs();

    let sx = if x1 > x { 1 } else { -1 };
    let sy = if y1 > y { 1 } else { -1 };
    let se = if e1 > e { 1 } else { -1 };

    let mut cells = Vec::with_capacity((dx.max(dy).max(de) + 1) as usize);
    cells.push(Waypoint::new(x as f32, y as f32, e as f32));

    if dx >= dy && dx >= de {
        // Driving axis is X
        let mut p1 = 2 * dy - dx;
        let mut p2 = 2 * de - dx;
        while x != x1 {
            x += sx;
            if p1 >= 0 {
                y += sy;
                p1 -= 2 * dx;
            }
            if p2 >= 0 {
                e += se;
                p2 -= 2 * dx;
            }
            p1 += 2 * dy;
            p2 += 2 * de;
            cells.push(Waypoint::new(x as f32, y as f32, e as f32));
        }
    } else if dy >= dx && dy >= de {
        // Driving axis is Y
        let mut p1 = 2 * dx - dy;
        let mut p2 = 2 * de - dy;
        while y != y1 {
            y += sy;
            if p1 >= 0 {
                x += sx;
                p1 -= 2 * dy;
            }
            if p2 >= 0 {
                e += se;
                p2 -= 2 * dy;
            }
            p1 += 2 * dx;
            p2 += 2 * de;
            cells.push(Waypoint::new(x as f32, y as f32, e as f32));
        }
    } else {
        // Driving axis is elevation
        let mut p1 = 2 * dy - de;
        let mut p2 = 2 * dx - de;
        while e != e1 {
            e += se;
            if p1 >= 0 {
                y += sy;
                p1 -= 2 * de;
            }
            if p2 >= 0 {
                x += sx;
                p2 -= 2 * de;
            }
            p1 += 2 * dy;
            p2 += 2 * dx;
            cells.push(Waypoint::new(x as f32, y as f32, e as f32));
        }
    }

    cells
}
