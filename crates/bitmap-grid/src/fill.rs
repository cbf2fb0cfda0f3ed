//! Flood fill over a row-major cell buffer.

use bitmap_types::Colour;

/// Repaint the 4-connected region around `seed` with `colour`.
///
/// The region is every cell reachable from `seed` through orthogonal steps
/// over cells matching the seed's colour at call time. Pending cells live on
/// a heap-allocated stack, so depth is bounded by the cell count rather than
/// the call stack. A visited mask keeps the walk finite when `colour` equals
/// the seed colour. Returns the number of cells painted.
pub(crate) fn flood(cells: &mut [Colour], width: usize, seed: usize, colour: Colour) -> usize {
    let target = cells[seed];
    let mut visited = vec![false; cells.len()];
    let mut pending = vec![seed];
    visited[seed] = true;
    let mut painted = 0;

    while let Some(idx) = pending.pop() {
        cells[idx] = colour;
        painted += 1;

        let col = idx % width;
        let mut visit = |n: usize| {
            if !visited[n] && cells[n] == target {
                visited[n] = true;
                pending.push(n);
            }
        };
        if col > 0 {
            visit(idx - 1);
        }
        if col + 1 < width {
            visit(idx + 1);
        }
        if idx >= width {
            visit(idx - width);
        }
        if idx + width < cells.len() {
            visit(idx + width);
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(s: &str) -> Vec<Colour> {
        s.chars().map(|c| Colour::new(c).unwrap()).collect()
    }

    fn text(cells: &[Colour]) -> String {
        cells.iter().map(|c| c.as_char()).collect()
    }

    #[test]
    fn single_cell_buffer() {
        let mut buf = cells("O");
        assert_eq!(flood(&mut buf, 1, 0, Colour::new('A').unwrap()), 1);
        assert_eq!(text(&buf), "A");
    }

    #[test]
    fn does_not_wrap_across_rows() {
        // 3x2: the right edge of row 0 must not reach the left edge of row 1.
        let mut buf = cells("XXOOXX");
        assert_eq!(flood(&mut buf, 3, 2, Colour::new('B').unwrap()), 2);
        assert_eq!(text(&buf), "XXBBXX");
    }

    #[test]
    fn column_region() {
        let mut buf = cells("XOXXOXXOX");
        assert_eq!(flood(&mut buf, 3, 7, Colour::new('C').unwrap()), 3);
        assert_eq!(text(&buf), "XCXXCXXCX");
    }
}
