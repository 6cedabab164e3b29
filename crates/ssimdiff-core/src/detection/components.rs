use std::collections::{HashMap, VecDeque};

use ndarray::Array2;

use crate::frame::Region;

/// Outer boundary of one 8-connected foreground region.
#[derive(Clone, Debug, Default)]
pub struct Boundary {
    /// Boundary pixels as `(row, col)`, in raster order.
    pub points: Vec<(usize, usize)>,
}

/// Find the outer boundaries of all 8-connected non-zero regions of a mask.
///
/// Regions lying inside a hole of another region are skipped, so only the
/// outermost boundaries are reported. Background connectivity is 4 (the dual
/// of 8-connected foreground) and the area outside the image counts as
/// background. Boundaries are returned ordered by their first pixel in raster
/// order.
pub fn find_external_boundaries(mask: &Array2<u8>) -> Vec<Boundary> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let labels = label_components(mask);
    let outside = outer_background(mask);

    let is_outer_edge = |row: usize, col: usize| -> bool {
        if row == 0 || col == 0 || row == h - 1 || col == w - 1 {
            return true;
        }
        outside[[row - 1, col]]
            || outside[[row + 1, col]]
            || outside[[row, col - 1]]
            || outside[[row, col + 1]]
    };

    let mut order: Vec<u32> = Vec::new();
    let mut boundaries = HashMap::<u32, Boundary>::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 || !is_outer_edge(row, col) {
                continue;
            }
            boundaries
                .entry(lbl)
                .or_insert_with(|| {
                    order.push(lbl);
                    Boundary::default()
                })
                .points
                .push((row, col));
        }
    }

    order
        .into_iter()
        .filter_map(|lbl| boundaries.remove(&lbl))
        .collect()
}

/// Axis-aligned rectangle enclosing every point of a boundary.
pub fn bounding_rect(boundary: &Boundary) -> Region {
    let Some(&(first_row, first_col)) = boundary.points.first() else {
        return Region {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    };

    let (mut min_row, mut max_row, mut min_col, mut max_col) =
        (first_row, first_row, first_col, first_col);
    for &(row, col) in &boundary.points {
        min_row = min_row.min(row);
        max_row = max_row.max(row);
        min_col = min_col.min(col);
        max_col = max_col.max(col);
    }

    Region {
        x: min_col as u32,
        y: min_row as u32,
        width: (max_col - min_col + 1) as u32,
        height: (max_row - min_row + 1) as u32,
    }
}

/// Two-pass 8-connected labeling with union-find.
///
/// Returns a label plane where 0 is background and every connected region
/// shares one root label.
fn label_components(mask: &Array2<u8>) -> Array2<u32> {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: assign provisional labels from the already-visited neighbors
    // (up-left, up, up-right, left).
    for row in 0..h {
        for col in 0..w {
            if mask[[row, col]] == 0 {
                continue;
            }

            let mut neighbors = [0u32; 4];
            if row > 0 {
                if col > 0 {
                    neighbors[0] = labels[[row - 1, col - 1]];
                }
                neighbors[1] = labels[[row - 1, col]];
                if col + 1 < w {
                    neighbors[2] = labels[[row - 1, col + 1]];
                }
            }
            if col > 0 {
                neighbors[3] = labels[[row, col - 1]];
            }

            let smallest = neighbors.iter().copied().filter(|&l| l > 0).min();
            match smallest {
                None => {
                    if next_label as usize >= parent.len() {
                        parent.resize(parent.len() * 2, 0);
                    }
                    parent[next_label as usize] = next_label;
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                Some(smallest) => {
                    labels[[row, col]] = smallest;
                    for &other in neighbors.iter().filter(|&&l| l > 0 && l != smallest) {
                        union(&mut parent, smallest, other);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve every label to its root.
    labels.mapv_inplace(|lbl| if lbl == 0 { 0 } else { parent[lbl as usize] });
    labels
}

/// Background pixels 4-connected to the image border.
fn outer_background(mask: &Array2<u8>) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut outside = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();

    let mut seed = |row: usize, col: usize, outside: &mut Array2<bool>| {
        if mask[[row, col]] == 0 && !outside[[row, col]] {
            outside[[row, col]] = true;
            queue.push_back((row, col));
        }
    };
    for col in 0..w {
        seed(0, col, &mut outside);
        seed(h - 1, col, &mut outside);
    }
    for row in 0..h {
        seed(row, 0, &mut outside);
        seed(row, w - 1, &mut outside);
    }

    while let Some((row, col)) = queue.pop_front() {
        let mut visit = |r: usize, c: usize| {
            if mask[[r, c]] == 0 && !outside[[r, c]] {
                outside[[r, c]] = true;
                queue.push_back((r, c));
            }
        };
        if row > 0 {
            visit(row - 1, col);
        }
        if row + 1 < h {
            visit(row + 1, col);
        }
        if col > 0 {
            visit(row, col - 1);
        }
        if col + 1 < w {
            visit(row, col + 1);
        }
    }

    outside
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
