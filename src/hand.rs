//! Places clock hands around the dial without per-frame trigonometry.
//!
//! A hand position is an index into the circle formed by sweeping one
//! eighth-arc point list through eight reflected/transposed images. The
//! sweep starts at twelve o'clock, which is (0, -radius) with y growing
//! downwards, and advances one arc point per index step.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Clockwise,
    Counterclockwise,
}

type Transform = fn(i32, i32) -> (i32, i32);

// One entry per eighth of the dial. Even eighths consume the arc list
// forwards, odd eighths consume its mirror; the transform then flips
// signs and swaps axes so consecutive indices stay adjacent across every
// boundary. The two directions are separate exhaustive tables on purpose.
const CLOCKWISE: [Transform; 8] = [
    |x, y| (x, -y),
    |x, y| (y, -x),
    |x, y| (y, x),
    |x, y| (x, y),
    |x, y| (-x, y),
    |x, y| (-y, x),
    |x, y| (-y, -x),
    |x, y| (-x, -y),
];

const COUNTERCLOCKWISE: [Transform; 8] = [
    |x, y| (-x, -y),
    |x, y| (-y, -x),
    |x, y| (-y, x),
    |x, y| (-x, y),
    |x, y| (x, y),
    |x, y| (y, x),
    |x, y| (y, -x),
    |x, y| (x, -y),
];

/// Absolute offset from the dial centre for position `p` around the full
/// circle. Periodic with period 8 * (len - 1). A single-point list has no
/// sweep at all and maps everything to the centre.
pub(crate) fn hand_point(points: &[(i32, i32)], position: usize, dir: Direction) -> (i32, i32) {
    let span = points.len().saturating_sub(1);
    if span == 0 {
        return (0, 0);
    }
    let p = position % (8 * span);
    let point_on = p % span;
    let eighth = p / span;
    let (x, y) = if eighth % 2 == 0 {
        points[point_on]
    } else {
        points[span - point_on]
    };
    let table = match dir {
        Direction::Clockwise => &CLOCKWISE,
        Direction::Counterclockwise => &COUNTERCLOCKWISE,
    };
    table[eighth](x, y)
}

/// Position index for a time unit: `unit` out of `units_per_turn` per
/// revolution, over an arc of the given span. Integer form of
/// floor(unit * span / (units_per_turn / 8)); 60 units per turn puts 7.5
/// on each eighth, the 12-hour dial puts 1.5.
pub(crate) fn hand_index(unit: u32, units_per_turn: u32, span: usize) -> usize {
    unit as usize * span * 8 / units_per_turn as usize
}
