//! Path search
//!
//! Randomized depth-first search for a self-avoiding walk of a fixed length
//! on a 4-connected grid.

use rand::seq::SliceRandom;
use rand::Rng;

/// Grid cell as `(row, col)`
pub type Cell = (usize, usize);

struct Frame {
    /// Unvisited neighbours at expansion time, in shuffled order
    neighbors: Vec<Cell>,
    next: usize,
}

fn shuffled_neighbors(cell: Cell, rows: usize, cols: usize, visited: &[bool], rng: &mut impl Rng) -> Vec<Cell> {
    let (row, col) = cell;
    let mut neighbors = Vec::with_capacity(4);
    if row + 1 < rows {
        neighbors.push((row + 1, col));
    }
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if col + 1 < cols {
        neighbors.push((row, col + 1));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    neighbors.retain(|&(r, c)| !visited[r * cols + c]);
    neighbors.shuffle(rng);
    neighbors
}

/// One search attempt from a random start.
///
/// Cells are committed before their neighbours are explored and popped when
/// every neighbour fails. Gives up after `max_steps` cell expansions.
pub fn search_path(
    rows: usize,
    cols: usize,
    path_length: usize,
    max_steps: u64,
    rng: &mut impl Rng,
) -> Option<Vec<Cell>> {
    let start = (rng.gen_range(0..rows), rng.gen_range(0..cols));
    let mut visited = vec![false; rows * cols];
    let mut path = vec![start];
    visited[start.0 * cols + start.1] = true;
    if path.len() >= path_length {
        return Some(path);
    }

    let mut frames = vec![Frame {
        neighbors: shuffled_neighbors(start, rows, cols, &visited, rng),
        next: 0,
    }];
    let mut steps: u64 = 0;

    while let Some(frame) = frames.last_mut() {
        let candidate = frame.neighbors.get(frame.next).copied();
        frame.next += 1;

        match candidate {
            Some((r, c)) => {
                if visited[r * cols + c] {
                    continue;
                }
                steps += 1;
                if steps > max_steps {
                    return None;
                }
                visited[r * cols + c] = true;
                path.push((r, c));
                if path.len() >= path_length {
                    return Some(path);
                }
                frames.push(Frame {
                    neighbors: shuffled_neighbors((r, c), rows, cols, &visited, rng),
                    next: 0,
                });
            }
            None => {
                frames.pop();
                if let Some((r, c)) = path.pop() {
                    visited[r * cols + c] = false;
                }
            }
        }
    }
    None
}

/// Row-major boustrophedon over the first `path_length` cells
pub fn serpentine_path(cols: usize, path_length: usize) -> Vec<Cell> {
    (0..path_length)
        .map(|i| {
            let row = i / cols;
            let offset = i % cols;
            let col = if row % 2 == 0 { offset } else { cols - 1 - offset };
            (row, col)
        })
        .collect()
}

/// Whether `path` is a simple 4-connected walk inside the grid
pub fn is_simple_path(path: &[Cell], rows: usize, cols: usize) -> bool {
    let mut seen = vec![false; rows * cols];
    for (i, &(r, c)) in path.iter().enumerate() {
        if r >= rows || c >= cols || seen[r * cols + c] {
            return false;
        }
        seen[r * cols + c] = true;
        if i > 0 {
            let (pr, pc) = path[i - 1];
            if pr.abs_diff(r) + pc.abs_diff(c) != 1 {
                return false;
            }
        }
    }
    true
}
