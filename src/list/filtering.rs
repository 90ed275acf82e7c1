//! Filter and sort derivation for the list state.
//!
//! Every input change funnels through `refresh`, which rebuilds the display
//! order from the full record set:
//! 1. keep records whose filter value contains the lowercased query
//! 2. stable-sort the survivors by the current key
//! 3. resize the paginator, pulling the page back into range

use super::types::Item;
use super::ListState;

impl<I: Item> ListState<I> {
    /// Rebuilds the filtered, sorted display order and re-clamps the page.
    pub(super) fn refresh(&mut self) {
        let query = self.search_text.to_lowercase();

        let mut keyed: Vec<(usize, String)> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| query.is_empty() || item.filter_value().contains(&query))
            .map(|(index, item)| (index, item.sort_value()))
            .collect();

        // `sort_by` is stable, so equal keys keep their load order.
        let key = self.sort_key;
        keyed.sort_by(|(_, a), (_, b)| key.compare(a, b));

        self.ordered = keyed.into_iter().map(|(index, _)| index).collect();
        self.paginator.set_total_items(self.ordered.len());
    }
}
