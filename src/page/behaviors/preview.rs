use crate::dom::Dom;
use crate::error::{Error, Result};

/// Label text shown while no file is selected.
pub const CHOOSE_FILE_PLACEHOLDER: &str = "Choose file...";

/// Reflect the current file selection of `input_id` into `label_id`.
///
/// Missing elements are reported instead of crashing: either id failing to
/// resolve is an [`Error::ElementNotFound`]. Each call recomputes from the
/// current selection; there is no memory of prior state.
pub(crate) fn preview_file(dom: &mut Dom, input_id: &str, label_id: &str) -> Result<()> {
    let input = dom
        .element_by_id(input_id)
        .ok_or_else(|| Error::ElementNotFound {
            id: input_id.to_string(),
        })?;
    let label = dom
        .element_by_id(label_id)
        .ok_or_else(|| Error::ElementNotFound {
            id: label_id.to_string(),
        })?;

    if !dom.tag(input).eq_ignore_ascii_case("input") {
        return Err(Error::NotAFileInput {
            id: input_id.to_string(),
            tag: dom.tag(input).to_string(),
        });
    }

    let text = dom
        .selected_files(input)
        .first()
        .cloned()
        .unwrap_or_else(|| CHOOSE_FILE_PLACEHOLDER.to_string());
    log::debug!("preview '{input_id}' -> '{label_id}': {text}");
    dom.set_text_content(label, text);
    Ok(())
}
