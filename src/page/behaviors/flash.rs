use crate::dom::{Display, Dom};
use crate::scheduler::Scheduler;

/// Marker class carried by the transient notification banner.
pub const FLASH_CLASS: &str = "flash-message";

/// Delay before an on-page flash banner is hidden.
pub const FLASH_HIDE_DELAY_MS: i64 = 3000;

/// Schedule the one-shot hide for the first flash banner on the page.
///
/// Pages without a banner are the common case; they are skipped silently.
/// No cancellation handle is retained: the task fires once, or never if the
/// page is torn down before the delay elapses.
pub(crate) fn schedule_auto_hide(dom: &Dom, scheduler: &mut Scheduler) {
    let Some(flash) = dom.first_by_class(FLASH_CLASS) else {
        log::debug!("no '{FLASH_CLASS}' element on page; auto-hide skipped");
        return;
    };

    log::debug!("flash banner found; hiding in {FLASH_HIDE_DELAY_MS}ms");
    scheduler.set_timeout(FLASH_HIDE_DELAY_MS, move |dom| {
        dom.set_display(flash, Display::None);
    });
}
