use crate::model::ScrapingResult;
use crate::store::Store;

/// Admin-triggered scraper run status. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapingState {
    pub is_scraping_active: bool,
    pub last_scraping_result: Option<ScrapingResult>,
}

pub type ScrapingStore = Store<ScrapingState>;

impl Store<ScrapingState> {
    pub fn set_scraping_active(&self, active: bool) {
        self.update(|s| s.is_scraping_active = active);
    }

    /// Recording a result also ends the active run.
    pub fn set_scraping_result(&self, result: ScrapingResult) {
        self.update(|s| {
            s.last_scraping_result = Some(result);
            s.is_scraping_active = false;
        });
    }

    pub fn clear_scraping_result(&self) {
        self.update(|s| s.last_scraping_result = None);
    }
}
