//! Piece tests - factory shapes, colors and rotation

use blockfall::core::{create_piece, Shape};
use blockfall::types::{PieceKind, RotationDirection, EMPTY};

#[test]
fn test_factory_shapes_match_canonical_layouts() {
    let expected: [(PieceKind, Vec<Vec<u8>>); 7] = [
        (PieceKind::T, vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 1, 0]]),
        (PieceKind::O, vec![vec![2, 2], vec![2, 2]]),
        (PieceKind::L, vec![vec![0, 3, 0], vec![0, 3, 0], vec![0, 3, 3]]),
        (PieceKind::J, vec![vec![0, 4, 0], vec![0, 4, 0], vec![4, 4, 0]]),
        (
            PieceKind::I,
            vec![
                vec![0, 5, 0, 0],
                vec![0, 5, 0, 0],
                vec![0, 5, 0, 0],
                vec![0, 5, 0, 0],
            ],
        ),
        (PieceKind::S, vec![vec![0, 6, 6], vec![6, 6, 0], vec![0, 0, 0]]),
        (PieceKind::Z, vec![vec![7, 7, 0], vec![0, 7, 7], vec![0, 0, 0]]),
    ];

    for (kind, rows) in expected {
        assert_eq!(create_piece(kind).to_rows(), rows, "{:?}", kind);
    }
}

#[test]
fn test_every_piece_has_four_cells_of_one_color() {
    for kind in PieceKind::ALL {
        let shape = create_piece(kind);
        let cells: Vec<_> = shape.occupied().collect();
        assert_eq!(cells.len(), 4, "{:?}", kind);
        assert!(cells.iter().all(|&(_, _, c)| c == kind.color_id()));
        assert_eq!(shape.color_id(), Some(kind.color_id()));
    }
}

#[test]
fn test_color_ids_are_distinct() {
    let mut ids: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color_id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_four_rotations_restore_every_piece() {
    for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
        for kind in PieceKind::ALL {
            let original = create_piece(kind);
            let mut shape = original;
            for _ in 0..4 {
                shape.rotate(direction);
            }
            assert_eq!(shape, original, "{:?} {:?}", kind, direction);
        }
    }
}

#[test]
fn test_opposite_rotations_cancel() {
    for kind in PieceKind::ALL {
        let original = create_piece(kind);
        let mut shape = original;
        shape.rotate(RotationDirection::Clockwise);
        shape.rotate(RotationDirection::CounterClockwise);
        assert_eq!(shape, original, "{:?}", kind);
    }
}

#[test]
fn test_rotating_i_lies_it_flat() {
    let mut shape = create_piece(PieceKind::I);
    shape.rotate(RotationDirection::Clockwise);
    assert_eq!(
        shape.to_rows(),
        vec![
            vec![0, 0, 0, 0],
            vec![5, 5, 5, 5],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_rotation_keeps_cell_count() {
    let mut shape = Shape::from_rows(&[&[0, 6, 6], &[6, 6, 0], &[EMPTY, EMPTY, EMPTY]]);
    for _ in 0..3 {
        shape.rotate(RotationDirection::CounterClockwise);
        assert_eq!(shape.occupied().count(), 4);
    }
}
