use crate::utils::*;
use pagify::error::Result;
use pagify::{CHOOSE_FILE_PLACEHOLDER, Error, PageFixture};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(crate::trials!(
        test_single_selection_shows_file_name,
        test_no_selection_shows_placeholder,
        test_multiple_selection_shows_first_name,
        test_preview_is_idempotent,
        test_preview_recomputes_after_selection_change,
        test_missing_label_is_diagnosed,
        test_preview_from_fixture_page,
    ));
}

fn label_text(page: &pagify::Page) -> String {
    let label = page.element_by_id("notes-file-label").unwrap();
    page.text_of(label).to_string()
}

fn test_single_selection_shows_file_name() -> Result<()> {
    let mut page = upload_form_page(&["report.pdf"]);
    page.preview_file("notes-file", "notes-file-label")?;
    assert_eq!(label_text(&page), "report.pdf");
    Ok(())
}

fn test_no_selection_shows_placeholder() -> Result<()> {
    let mut page = upload_form_page(&[]);
    page.preview_file("notes-file", "notes-file-label")?;
    assert_eq!(label_text(&page), CHOOSE_FILE_PLACEHOLDER);
    Ok(())
}

fn test_multiple_selection_shows_first_name() -> Result<()> {
    let mut page = upload_form_page(&["slides.pptx", "notes.pdf", "extra.ppt"]);
    page.preview_file("notes-file", "notes-file-label")?;
    assert_eq!(label_text(&page), "slides.pptx");
    Ok(())
}

fn test_preview_is_idempotent() -> Result<()> {
    let mut page = upload_form_page(&["report.pdf"]);
    page.preview_file("notes-file", "notes-file-label")?;
    page.preview_file("notes-file", "notes-file-label")?;
    assert_eq!(label_text(&page), "report.pdf");
    Ok(())
}

// Each invocation recomputes from the current selection
fn test_preview_recomputes_after_selection_change() -> Result<()> {
    let mut page = upload_form_page(&["report.pdf"]);
    page.preview_file("notes-file", "notes-file-label")?;

    let input = page.element_by_id("notes-file").unwrap();
    page.dom_mut().set_selected_files(input, vec![]);
    page.preview_file("notes-file", "notes-file-label")?;
    assert_eq!(label_text(&page), CHOOSE_FILE_PLACEHOLDER);
    Ok(())
}

fn test_missing_label_is_diagnosed() -> Result<()> {
    let mut page = upload_form_page(&["report.pdf"]);
    let err = page
        .preview_file("notes-file", "no-such-label")
        .unwrap_err();
    assert!(matches!(err, Error::ElementNotFound { id } if id == "no-such-label"));
    Ok(())
}

// End to end through the fixture format
fn test_preview_from_fixture_page() -> Result<()> {
    let fixture: PageFixture = r#"{
        "title": "Upload notes",
        "elements": [
            { "tag": "input", "id": "notes-file", "files": ["report.pdf"] },
            { "tag": "span", "id": "notes-file-label", "text": "Choose file..." }
        ]
    }"#
    .parse()?;

    let mut page = pagify::Page::from_fixture(fixture);
    page.preview_file("notes-file", "notes-file-label")?;
    assert_eq!(label_text(&page), "report.pdf");
    Ok(())
}
