//! Unit tests for session module.

use crate::helpers::{FAKE_PAGE_SIZE, FakeLoader, test_options};
use pagegrid::grid_layout::LayoutError;
use pagegrid::pdf::PdfError;
use pagegrid::session::{DocumentSession, LoadOptions, SessionError};
use std::path::Path;

#[test]
fn test_new_session_is_unloaded() {
    let session = DocumentSession::<crate::helpers::FakeDocument>::new();
    assert!(!session.is_loaded());
    assert_eq!(session.page_count(), None);
    assert!(session.grid().is_none());
    assert!(session.cells().is_empty());
    assert_eq!(session.cell_at(0, 0).unwrap().map(|c| c.page_index), None);
}

#[test]
fn test_load_builds_grid_and_cells() {
    let loader = FakeLoader::builder().with_document("a.pdf", 17).build();
    let mut session = DocumentSession::new();

    let report = session
        .load(&loader, Path::new("a.pdf"), &test_options())
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.page_count, 17);
    assert_eq!(report.rendered, 17);
    assert_eq!(report.render_timings.count(), 17);

    let grid = session.grid().unwrap();
    assert_eq!(grid.row_count, 3);
    assert_eq!(grid.column_count, 8);
    assert_eq!((grid.cell_width, grid.cell_height), (100, 141));
    assert_eq!(session.page_count(), Some(17));
    assert_eq!(session.path(), Some(Path::new("a.pdf")));

    let cells = session.cells();
    assert_eq!(cells.len(), 17);
    for (index, cell) in cells.iter().enumerate() {
        assert_eq!(cell.page_index, index);
        assert_eq!((cell.row, cell.col), (index / 8, index % 8));
        let image = cell.image.as_ref().unwrap();
        assert_eq!((image.width(), image.height()), FAKE_PAGE_SIZE);
        assert_eq!(image.pixels()[0], index as u8);
    }
}

#[test]
fn test_render_scale_is_passed_to_renderer() {
    let loader = FakeLoader::builder().with_document("a.pdf", 1).build();
    let mut session = DocumentSession::new();
    let options = LoadOptions {
        render_scale: 2.0,
        ..test_options()
    };

    session.load(&loader, Path::new("a.pdf"), &options).unwrap();

    let image = session.cells()[0].image.as_ref().unwrap();
    assert_eq!(
        (image.width(), image.height()),
        (FAKE_PAGE_SIZE.0 * 2, FAKE_PAGE_SIZE.1 * 2)
    );
}

#[test]
fn test_open_failure_leaves_session_unloaded() {
    let loader = FakeLoader::builder().with_document("a.pdf", 3).build();
    let mut session = DocumentSession::new();
    session
        .load(&loader, Path::new("a.pdf"), &test_options())
        .unwrap();

    let err = session
        .load(&loader, Path::new("missing.pdf"), &test_options())
        .unwrap_err();

    assert!(matches!(err, SessionError::Pdf(PdfError::Open { .. })));
    assert!(!session.is_loaded());
    assert_eq!(session.page_count(), None);
    assert!(session.cells().is_empty());
    assert_eq!(loader.live_documents(), 0);
}

#[test]
fn test_empty_document_is_rejected() {
    let loader = FakeLoader::builder().with_document("empty.pdf", 0).build();
    let mut session = DocumentSession::new();

    let err = session
        .load(&loader, Path::new("empty.pdf"), &test_options())
        .unwrap_err();

    assert!(matches!(err, SessionError::EmptyDocument { .. }));
    assert!(!session.is_loaded());
    assert_eq!(loader.live_documents(), 0);
}

#[test]
fn test_invalid_options_surface_layout_error() {
    let loader = FakeLoader::builder().with_document("a.pdf", 4).build();
    let mut session = DocumentSession::new();
    let options = LoadOptions {
        column_count: 0,
        ..test_options()
    };

    let err = session
        .load(&loader, Path::new("a.pdf"), &options)
        .unwrap_err();

    assert!(matches!(
        err,
        SessionError::Layout(LayoutError::InvalidConfig(_))
    ));
    assert!(!session.is_loaded());
}

#[test]
fn test_render_failure_is_attributed_to_page() {
    let loader = FakeLoader::builder()
        .with_document("a.pdf", 10)
        .with_failing_page("a.pdf", 3)
        .with_failing_page("a.pdf", 9)
        .build();
    let mut session = DocumentSession::new();

    let report = session
        .load(&loader, Path::new("a.pdf"), &test_options())
        .unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.rendered, 8);
    let failed: Vec<usize> = report.failures.iter().map(|f| f.page_index).collect();
    assert_eq!(failed, vec![3, 9]);
    assert!(matches!(
        report.failures[0].error,
        PdfError::Render { page_index: 3, .. }
    ));

    // The grid still covers every page; only the failed cells lack images.
    assert_eq!(session.cells().len(), 10);
    assert!(session.cells()[3].image.is_none());
    assert!(session.cells()[4].image.is_some());
}

#[test]
fn test_cell_at_checks_page_count() {
    let loader = FakeLoader::builder().with_document("a.pdf", 17).build();
    let mut session = DocumentSession::new();
    session
        .load(&loader, Path::new("a.pdf"), &test_options())
        .unwrap();

    assert_eq!(session.cell_at(2, 0).unwrap().map(|c| c.page_index), Some(16));
    assert!(session.cell_at(2, 1).unwrap().is_none());
    assert!(session.cell_at(2, 7).unwrap().is_none());
    assert!(matches!(
        session.cell_at(3, 0),
        Err(LayoutError::OutOfRange { what: "row", .. })
    ));
    assert!(session.cell_at(0, 8).is_err());
}

#[test]
fn test_close_releases_document() {
    let loader = FakeLoader::builder().with_document("a.pdf", 2).build();
    let mut session = DocumentSession::new();
    session
        .load(&loader, Path::new("a.pdf"), &test_options())
        .unwrap();
    assert_eq!(loader.live_documents(), 1);

    session.close();

    assert_eq!(loader.live_documents(), 0);
    assert!(!session.is_loaded());
}
