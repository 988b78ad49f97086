//! Unit tests for grid_layout module.

use pagegrid::grid_layout::{
    GridConfig, LayoutError, cell_size_for, index_of, position_of, row_count_for,
};

#[test]
fn test_row_count_is_ceiling_division() {
    for column_count in 1..=12 {
        for page_count in 0..=100 {
            let expected = (page_count + column_count - 1) / column_count;
            assert_eq!(
                row_count_for(page_count, column_count),
                Ok(expected),
                "page_count={page_count} column_count={column_count}"
            );
        }
    }
}

#[test]
fn test_row_count_examples() {
    assert_eq!(row_count_for(17, 8), Ok(3));
    assert_eq!(row_count_for(16, 8), Ok(2));
    assert_eq!(row_count_for(1, 8), Ok(1));
    assert_eq!(row_count_for(0, 8), Ok(0));
}

#[test]
fn test_row_count_rejects_zero_columns() {
    assert!(matches!(
        row_count_for(10, 0),
        Err(LayoutError::InvalidConfig(_))
    ));
}

#[test]
fn test_position_of_boundaries() {
    assert_eq!(position_of(0, 20, 8), Ok((0, 0)));
    assert_eq!(position_of(7, 20, 8), Ok((0, 7)));
    assert_eq!(position_of(8, 20, 8), Ok((1, 0)));
    assert_eq!(position_of(19, 20, 8), Ok((2, 3)));
}

#[test]
fn test_position_of_single_column() {
    assert_eq!(position_of(4, 5, 1), Ok((4, 0)));
}

#[test]
fn test_position_of_rejects_page_count() {
    let err = position_of(17, 17, 8).unwrap_err();
    assert_eq!(
        err,
        LayoutError::OutOfRange {
            what: "page index",
            value: 17,
            limit: 17,
        }
    );
    assert!(position_of(100, 17, 8).is_err());
}

#[test]
fn test_position_of_empty_document() {
    assert!(matches!(
        position_of(0, 0, 8),
        Err(LayoutError::OutOfRange { .. })
    ));
}

#[test]
fn test_position_of_rejects_zero_columns() {
    assert!(matches!(
        position_of(0, 5, 0),
        Err(LayoutError::InvalidConfig(_))
    ));
}

#[test]
fn test_index_of_round_trip() {
    for column_count in 1..=10 {
        for page_count in 1..=40 {
            let row_count = row_count_for(page_count, column_count).unwrap();
            for page_index in 0..page_count {
                let (row, col) = position_of(page_index, page_count, column_count).unwrap();
                assert_eq!(
                    index_of(row, col, column_count, row_count),
                    Ok(page_index),
                    "page_index={page_index} page_count={page_count} column_count={column_count}"
                );
            }
        }
    }
}

#[test]
fn test_index_of_trailing_cell_exceeds_page_count() {
    // 17 pages in 8 columns: last row holds only page 16.
    let row_count = row_count_for(17, 8).unwrap();
    assert_eq!(index_of(2, 0, 8, row_count), Ok(16));
    assert_eq!(index_of(2, 7, 8, row_count), Ok(23));
}

#[test]
fn test_index_of_rejects_out_of_range_coordinates() {
    assert_eq!(
        index_of(3, 0, 8, 3),
        Err(LayoutError::OutOfRange {
            what: "row",
            value: 3,
            limit: 3,
        })
    );
    assert_eq!(
        index_of(0, 8, 8, 3),
        Err(LayoutError::OutOfRange {
            what: "column",
            value: 8,
            limit: 8,
        })
    );
    assert!(index_of(0, 0, 8, 0).is_err());
}

#[test]
fn test_index_of_rejects_overflowing_index() {
    // Both coordinates are in range but row * column_count wraps.
    let column_count = usize::MAX / 2 + 1;
    assert!(matches!(
        index_of(2, 0, column_count, 3),
        Err(LayoutError::InvalidConfig(_))
    ));
    assert!(matches!(
        index_of(1, column_count - 1, column_count, 3),
        Ok(index) if index == usize::MAX
    ));
}

#[test]
fn test_cell_size_a_series() {
    let (width, height) = cell_size_for(100, 0.7071).unwrap();
    assert_eq!(width, 100);
    assert_eq!(height, 141);

    let (_, height) = cell_size_for(100, std::f32::consts::FRAC_1_SQRT_2).unwrap();
    assert_eq!(height, 141);
}

#[test]
fn test_cell_size_rounds_to_nearest() {
    // 5 / 2.0 = 2.5 rounds away from zero
    assert_eq!(cell_size_for(5, 2.0), Ok((5, 3)));
    assert_eq!(cell_size_for(10, 3.0), Ok((10, 3)));
    assert_eq!(cell_size_for(240, 1.0), Ok((240, 240)));
}

#[test]
fn test_cell_size_rejects_invalid_input() {
    assert!(matches!(cell_size_for(100, 0.0), Err(LayoutError::InvalidConfig(_))));
    assert!(matches!(cell_size_for(100, -0.7), Err(LayoutError::InvalidConfig(_))));
    assert!(matches!(cell_size_for(100, f32::NAN), Err(LayoutError::InvalidConfig(_))));
    assert!(matches!(cell_size_for(0, 0.7071), Err(LayoutError::InvalidConfig(_))));
    // Height would round to zero
    assert!(matches!(cell_size_for(1, 1000.0), Err(LayoutError::InvalidConfig(_))));
    // Height would exceed u32::MAX
    assert!(matches!(cell_size_for(u32::MAX, 0.5), Err(LayoutError::InvalidConfig(_))));
}

#[test]
fn test_grid_config_derives_fields_together() {
    let grid = GridConfig::new(17, 8, 240, std::f32::consts::FRAC_1_SQRT_2).unwrap();
    assert_eq!(grid.page_count, 17);
    assert_eq!(grid.row_count, 3);
    assert_eq!(grid.column_count, 8);
    assert_eq!((grid.cell_width, grid.cell_height), (240, 339));
    assert_eq!(grid.cell_count(), Ok(24));
    assert_eq!(grid.content_size(), (1920, 1017));
}

#[test]
fn test_grid_config_page_at_filters_trailing_cells() {
    let grid = GridConfig::new(17, 8, 100, 0.7071).unwrap();
    assert_eq!(grid.page_at(0, 0), Ok(Some(0)));
    assert_eq!(grid.page_at(2, 0), Ok(Some(16)));
    assert_eq!(grid.page_at(2, 1), Ok(None));
    assert!(grid.page_at(3, 0).is_err());
}

#[test]
fn test_grid_config_rejects_overflowing_cells() {
    let grid = GridConfig {
        page_count: usize::MAX,
        column_count: usize::MAX / 2 + 1,
        row_count: 3,
        cell_width: 100,
        cell_height: 141,
    };
    assert!(matches!(grid.cell_count(), Err(LayoutError::InvalidConfig(_))));
    assert!(matches!(grid.page_at(2, 0), Err(LayoutError::InvalidConfig(_))));
    assert_eq!(grid.page_at(0, 1), Ok(Some(1)));
    assert_eq!(grid.content_size().1, 3 * 141);
}

#[test]
fn test_grid_config_position_matches_free_function() {
    let grid = GridConfig::new(30, 7, 100, 0.7071).unwrap();
    for page_index in 0..30 {
        assert_eq!(grid.position_of(page_index), position_of(page_index, 30, 7));
    }
    assert!(grid.position_of(30).is_err());
}

#[test]
fn test_grid_config_rejects_invalid_config() {
    assert!(GridConfig::new(10, 0, 100, 0.7071).is_err());
    assert!(GridConfig::new(10, 8, 0, 0.7071).is_err());
    assert!(GridConfig::new(10, 8, 100, 0.0).is_err());
}
