use crate::dom::fixture::PageFixture;
use crate::dom::{Display, Dom, ElementId};
use crate::error::Result;
use crate::scheduler::Scheduler;

pub mod behaviors;

use self::behaviors::Confirmer;

/// A loaded host page: the element model plus the page's timer queue.
///
/// Dropping the page drops any still-pending deferred actions without running
/// them, matching teardown-before-delay semantics.
pub struct Page {
    dom: Dom,
    scheduler: Scheduler,
}

impl Page {
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            scheduler: Scheduler::new(),
        }
    }

    pub fn from_fixture(fixture: PageFixture) -> Self {
        Self::new(fixture.into_dom())
    }

    /// Page-ready entry point, invoked once by the host at startup.
    ///
    /// Registers the flash auto-hide: if the page carries a flash banner, a
    /// one-shot hide is queued at +[`behaviors::flash::FLASH_HIDE_DELAY_MS`];
    /// otherwise this is a no-op.
    pub fn init(&mut self) {
        behaviors::flash::schedule_auto_hide(&self.dom, &mut self.scheduler);
    }

    /// Ask the user to confirm deleting `subject`.
    ///
    /// Blocks the page (single-threaded cooperative model) until the
    /// confirmer answers. `Ok(true)` means the user accepted; the caller must
    /// abstain from the destructive action on `Ok(false)`.
    pub fn confirm_delete(&mut self, confirmer: &mut dyn Confirmer, subject: &str) -> Result<bool> {
        behaviors::confirm::confirm_delete(confirmer, subject)
    }

    /// Reflect the file selection of `input_id` into the text of `label_id`.
    pub fn preview_file(&mut self, input_id: &str, label_id: &str) -> Result<()> {
        behaviors::preview::preview_file(&mut self.dom, input_id, label_id)
    }

    /// Advance the page's virtual clock, running any deferred actions that
    /// come due. Returns how many ran.
    pub fn advance_time(&mut self, delta_ms: i64) -> Result<usize> {
        self.scheduler.advance(delta_ms, &mut self.dom)
    }

    pub fn now_ms(&self) -> i64 {
        self.scheduler.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.dom.element_by_id(id)
    }

    pub fn display_of(&self, element: ElementId) -> Display {
        self.dom.display(element)
    }

    pub fn text_of(&self, element: ElementId) -> &str {
        self.dom.text_content(element)
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }
}
