//! Facelet permutations for clockwise quarter turns.
//!
//! A quarter turn rotates the turning face's own grid and cycles four strips
//! of three facelets on the neighbouring faces. Each strip lists its cells in
//! traversal order; the contents of strip `k` move into strip `k + 1` (and the
//! last strip wraps around to the first), cell by cell.

use crate::FaceId::{self, *};

/// Location of one facelet: face, row, column.
pub(crate) type Cell = (FaceId, usize, usize);
/// Three facelets along the edge of a neighbouring face.
pub(crate) type Strip = [Cell; 3];

const fn row(face: FaceId, row: usize) -> Strip {
    [(face, row, 0), (face, row, 1), (face, row, 2)]
}
const fn row_rev(face: FaceId, row: usize) -> Strip {
    [(face, row, 2), (face, row, 1), (face, row, 0)]
}
const fn col(face: FaceId, col: usize) -> Strip {
    [(face, 0, col), (face, 1, col), (face, 2, col)]
}
const fn col_rev(face: FaceId, col: usize) -> Strip {
    [(face, 2, col), (face, 1, col), (face, 0, col)]
}

/// Returns the four neighbour strips cycled by a clockwise turn of `face`.
pub(crate) const fn neighbour_strips(face: FaceId) -> [Strip; 4] {
    match face {
        U => [row(F, 0), row(L, 0), row(B, 0), row(R, 0)],
        D => [row(F, 2), row(R, 2), row(B, 2), row(L, 2)],
        R => [col(F, 2), col(U, 2), col_rev(B, 0), col(D, 2)],
        L => [col(U, 0), col(F, 0), col(D, 0), col_rev(B, 2)],
        F => [row(U, 2), col(R, 0), row_rev(D, 0), col_rev(L, 2)],
        B => [row(U, 0), col_rev(L, 0), row_rev(D, 2), col(R, 2)],
    }
}
