use crate::utils::*;
use pagify::error::Result;
use pagify::{Display, Element, FLASH_CLASS, FLASH_HIDE_DELAY_MS, Page};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(crate::trials!(
        test_flash_hidden_after_delay,
        test_flash_visible_before_delay,
        test_init_without_flash_is_noop,
        test_init_hides_only_first_flash,
        test_teardown_before_delay_drops_timer,
    ));
}

// Verify the banner is hidden once the configured delay has elapsed
fn test_flash_hidden_after_delay() -> Result<()> {
    let (mut page, flash) = page_with_flash();
    page.init();
    assert_eq!(page.pending_timers(), 1);

    page.advance_time(FLASH_HIDE_DELAY_MS)?;
    assert_eq!(page.display_of(flash), Display::None);
    assert_eq!(page.pending_timers(), 0);
    Ok(())
}

// Verify the banner stays visible strictly before the delay elapses
fn test_flash_visible_before_delay() -> Result<()> {
    let (mut page, flash) = page_with_flash();
    page.init();

    page.advance_time(FLASH_HIDE_DELAY_MS - 1)?;
    assert_eq!(page.display_of(flash), Display::Block);
    page.advance_time(1)?;
    assert_eq!(page.display_of(flash), Display::None);
    Ok(())
}

// Absence of the banner is the common case and must not schedule anything
fn test_init_without_flash_is_noop() -> Result<()> {
    let mut page = page_without_flash();
    page.init();
    assert_eq!(page.pending_timers(), 0);
    page.advance_time(FLASH_HIDE_DELAY_MS * 2)?;
    Ok(())
}

fn test_init_hides_only_first_flash() -> Result<()> {
    let (mut page, first) = page_with_flash();
    let second = page
        .dom_mut()
        .push(Element::new("div").with_class(FLASH_CLASS).with_text("Second"));

    page.init();
    page.advance_time(FLASH_HIDE_DELAY_MS)?;
    assert_eq!(page.display_of(first), Display::None);
    assert_eq!(page.display_of(second), Display::Block);
    Ok(())
}

// Unloading the page before the delay must silently drop the hide task
fn test_teardown_before_delay_drops_timer() -> Result<()> {
    let (mut page, _) = page_with_flash();
    page.init();
    page.advance_time(FLASH_HIDE_DELAY_MS - 1)?;
    drop(page);

    // A fresh page is unaffected by the dropped task.
    let mut page = Page::new(pagify::Dom::new());
    page.init();
    assert_eq!(page.pending_timers(), 0);
    Ok(())
}
