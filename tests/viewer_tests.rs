mod common;

use common::{TestResult, export_pdf, record};
use folio::{
    ActionOutcome, DisplayList, DocViewer, DocumentSource, DrawCall, PageFormat, PreviewSession,
    Size, ToolbarAction, ViewerConfig, VisualNode,
};

#[test]
fn test_zoom_is_clamped_and_idempotent() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut viewer = DocViewer::new();
    viewer.add_page(VisualNode::styled_text("x", 14.0));

    for requested in [-5.0, 0.0, 0.05, 0.1, 0.75, 3.0] {
        viewer.set_zoom(requested);
        let once = viewer.pages().to_vec();
        let zoom = viewer.zoom();
        viewer.set_zoom(requested);
        assert_eq!(viewer.zoom(), zoom);
        assert_eq!(viewer.zoom(), f32::max(requested, 0.1));
        assert_eq!(viewer.pages(), once.as_slice());
    }
}

#[test]
fn test_zoom_resizes_existing_pages() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut viewer = DocViewer::new();
    viewer.add_page(VisualNode::label("a"));
    viewer.add_page(VisualNode::label("b"));
    viewer.set_zoom(0.5);

    for page in viewer.pages() {
        assert_eq!(page.paper().size, Size::new(297.5, 421.0));
        assert_eq!(page.theme_scale(), 0.5);
    }
    assert_eq!(viewer.zoom_label(), "50%");
}

#[test]
fn test_label_font_follows_current_zoom_on_export() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut viewer = DocViewer::new();
    viewer.add_page(VisualNode::label("zoomed").sized(200.0, 20.0));
    viewer.set_zoom(0.5);
    let backend = record(&viewer)?;

    assert!(backend.calls().contains(&DrawCall::SetFont {
        family: "Helvetica".to_string(),
        size: 7.0
    }));
    match backend.drawing_calls().next() {
        Some(DrawCall::MultiCell { line_height, .. }) => {
            assert!((line_height - 2.8).abs() < 1e-4)
        }
        other => panic!("expected MultiCell, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_letter_pages_export_at_letter_size() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut viewer = DocViewer::with_config(ViewerConfig::default().with_page_format(PageFormat::Letter));
    viewer.add_page(VisualNode::label("letter"));
    let pdf = export_pdf(&viewer)?;

    let (_, page_id) = pdf.doc.get_pages().into_iter().next().ok_or("no pages")?;
    let page = pdf.doc.get_object(page_id)?.as_dict()?;
    let media_box = page.get(b"MediaBox")?.as_array()?;
    let width = media_box[2].as_float()?;
    let height = media_box[3].as_float()?;
    assert!((width - 612.0).abs() < 0.5, "width = {}", width);
    assert!((height - 792.0).abs() < 0.5, "height = {}", height);
    Ok(())
}

#[test]
fn test_document_file_to_pdf() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let doc_path = dir.path().join("doc.json");
    std::fs::write(
        &doc_path,
        r#"{"pages": [
            {"type": "container", "children": [
                {"type": "styledText", "text": "Invoice", "fontSize": 18,
                 "position": {"x": 20, "y": 20}, "size": {"width": 300, "height": 30}},
                {"type": "separator", "position": {"x": 20, "y": 60}, "size": {"width": 555, "height": 4}}
            ]},
            {"type": "textLabel", "text": "Terms and conditions", "size": {"width": 555, "height": 100}}
        ]}"#,
    )?;

    let viewer = DocumentSource::from_path(&doc_path)?.into_viewer(ViewerConfig::default());
    assert_eq!(viewer.page_count(), 2);
    assert_eq!(DisplayList::build(&viewer).item_count(), 3);

    let pdf = export_pdf(&viewer)?;
    assert_eq!(pdf.page_count(), 2);
    Ok(())
}

#[test]
fn test_session_dispatches_toolbar_actions() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let mut viewer = DocViewer::new();
    viewer.add_page(VisualNode::label("hello"));
    let mut session = PreviewSession::new(viewer);

    assert_eq!(
        session.dispatch(ToolbarAction::ZoomIn)?,
        ActionOutcome::Zoomed { label: "110%".to_string() }
    );
    assert_eq!(session.display_list().pages[0].paper.width, 595.0 * session.viewer().zoom());

    let path = dir.path().join("session.pdf");
    let outcome = session.dispatch(ToolbarAction::ExportPdf(Some(path.clone())))?;
    assert_eq!(outcome, ActionOutcome::Exported { path: path.clone() });
    assert_eq!(lopdf::Document::load_mem(&std::fs::read(&path)?)?.get_pages().len(), 1);
    Ok(())
}
