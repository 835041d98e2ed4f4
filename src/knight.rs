//! Shortest knight paths on a chess board.
//!
//! A breadth-first search fans out from the starting square over the
//! eight knight offsets until it reaches the target, then walks the
//! predecessor links back to recover the route. Breadth-first order
//! makes the first visit to any square a shortest one.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::errors::{check_argument, Result};

/// A board coordinate as `(column, row)`, both in `0..BOARD_SIZE`.
pub type Square = (i8, i8);

/// Squares per side of the board.
pub const BOARD_SIZE: i8 = 8;

/// The eight relative moves a knight may make.
const KNIGHT_MOVES: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Finds a shortest sequence of knight moves from `start` to `end`,
/// inclusive of both endpoints.
///
/// # Errors
///
/// Rejects squares outside the board with
/// [`InvalidArgument`](crate::errors::Error::InvalidArgument).
///
/// # Examples
///
/// ```
/// use treekit::knight;
///
/// let path = knight::shortest_path((0, 0), (3, 3)).unwrap();
///
/// assert_eq!(path.first(), Some(&(0, 0)));
/// assert_eq!(path.last(), Some(&(3, 3)));
/// assert_eq!(path.len(), 3); // two moves
/// ```
pub fn shortest_path(start: Square, end: Square) -> Result<Vec<Square>> {
    check_argument(on_board(start), "start square is outside the board")?;
    check_argument(on_board(end), "end square is outside the board")?;

    if start == end {
        return Ok(vec![start]);
    }

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut came_from: HashMap<Square, Square> = HashMap::new();

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in KNIGHT_MOVES {
            let next = (x + dx, y + dy);
            if !on_board(next) || !visited.insert(next) {
                continue;
            }
            came_from.insert(next, (x, y));
            if next == end {
                return Ok(walk_back(&came_from, start, end));
            }
            queue.push_back(next);
        }
    }

    unreachable!("a knight reaches every square of a {BOARD_SIZE}x{BOARD_SIZE} board");
}

fn on_board((x, y): Square) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

/// Rebuilds the start-to-end route from the predecessor links laid down
/// by the search.
fn walk_back(came_from: &HashMap<Square, Square>, start: Square, end: Square) -> Vec<Square> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}
