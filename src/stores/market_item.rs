use crate::model::RatingData;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketItemState {
    pub rating_data: RatingData,
}

/// Rating summary shown on a market list item. Never persisted.
pub type MarketItemStore = Store<MarketItemState>;

impl Store<MarketItemState> {
    pub fn set_rating_data(&self, data: RatingData) {
        self.update(|s| s.rating_data = data);
    }
}
