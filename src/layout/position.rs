//! The geometric reading-order relation between two words. This is a
//! hand-built heuristic, not a strict weak ordering: rotated text,
//! multi-column pages, and overlapping lines can break transitivity. It is
//! deliberately kept as-is; tightening it would change output on real
//! documents. Layouts rotated beyond roughly 45 degrees are a known
//! limitation.

use std::cmp::Ordering;

use crate::core::geometry::Quad;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub same_line: bool,
    /// Reading order of the two inputs; never `Equal`.
    pub order: Ordering,
}

/// Judges whether `b` lies on `a`'s text line and which comes first in
/// reading order. `b` is on `a`'s line iff `b`'s vertical extent straddles
/// the midpoint of `a`'s; same-line order is by left edge, otherwise the
/// higher word reads first.
pub fn relate(a: &Quad, b: &Quad) -> Relation {
    let a_mid = (a.top_left.y + a.bottom_right.y) / 2.0;
    if b.bottom_right.y > a_mid {
        if b.top_left.y < a_mid {
            if a.top_left.x < b.top_left.x {
                Relation {
                    same_line: true,
                    order: Ordering::Less,
                }
            } else {
                Relation {
                    same_line: true,
                    order: Ordering::Greater,
                }
            }
        } else {
            // b starts below a's midpoint: a's line comes first.
            Relation {
                same_line: false,
                order: Ordering::Less,
            }
        }
    } else {
        // b ends at or above a's midpoint: b's line comes first.
        Relation {
            same_line: false,
            order: Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(left: f64, top: f64, right: f64, bottom: f64) -> Quad {
        Quad::from_bounds(left, top, right, bottom)
    }

    #[test]
    fn same_line_ordered_by_left_edge() {
        let a = quad(100.0, 10.0, 150.0, 30.0);
        let b = quad(10.0, 12.0, 60.0, 28.0);
        let relation = relate(&a, &b);
        assert!(relation.same_line);
        assert_eq!(relation.order, Ordering::Greater);

        let relation = relate(&b, &a);
        assert!(relation.same_line);
        assert_eq!(relation.order, Ordering::Less);
    }

    #[test]
    fn lower_word_reads_after() {
        let a = quad(10.0, 10.0, 60.0, 30.0);
        let b = quad(10.0, 50.0, 60.0, 70.0);
        let relation = relate(&a, &b);
        assert!(!relation.same_line);
        assert_eq!(relation.order, Ordering::Less);
    }

    #[test]
    fn higher_word_reads_first() {
        let a = quad(10.0, 50.0, 60.0, 70.0);
        let b = quad(10.0, 10.0, 60.0, 30.0);
        let relation = relate(&a, &b);
        assert!(!relation.same_line);
        assert_eq!(relation.order, Ordering::Greater);
    }

    #[test]
    fn straddling_the_midpoint_is_required_on_both_sides() {
        // b dips below a's midpoint but starts beneath it as well: not
        // the same line even though the extents overlap.
        let a = quad(10.0, 10.0, 60.0, 30.0); // midpoint y = 20
        let b = quad(70.0, 20.0, 120.0, 40.0);
        let relation = relate(&a, &b);
        assert!(!relation.same_line);
        assert_eq!(relation.order, Ordering::Less);
    }

    #[test]
    fn equal_left_edges_fall_to_greater() {
        // The relation never reports equality; a tie on the left edge
        // keeps the comparison's second operand first.
        let a = quad(10.0, 10.0, 60.0, 30.0);
        let b = quad(10.0, 12.0, 40.0, 28.0);
        let relation = relate(&a, &b);
        assert!(relation.same_line);
        assert_eq!(relation.order, Ordering::Greater);
    }
}
