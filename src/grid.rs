use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::page;
use foliogrid_core::{matches_query, normalize_query, sort_order, CardData, SortMode};

const GRID_SELECTOR: &str = "[data-grid]";
const CARD_SELECTOR: &str = "[data-card]";

struct CardSlot {
    element: Element,
    data: CardData,
}

pub(crate) struct CardGrid {
    container: Option<Element>,
    cards: Vec<CardSlot>,
}

impl CardGrid {
    pub(crate) fn locate(document: &Document) -> Self {
        match page::query(document, GRID_SELECTOR) {
            Some(container) => Self::from_container(container),
            None => Self {
                container: None,
                cards: Vec::new(),
            },
        }
    }

    pub(crate) fn from_container(container: Element) -> Self {
        let cards = page::query_all_in(&container, CARD_SELECTOR)
            .into_iter()
            .map(|element| {
                let data = CardData::from_attributes(
                    element.get_attribute("data-name").as_deref(),
                    element.get_attribute("data-minutes").as_deref(),
                );
                CardSlot { element, data }
            })
            .collect();
        Self {
            container: Some(container),
            cards,
        }
    }

    // re-appending a child moves it, so one pass over the permutation
    pub(crate) fn sort(&self, mode: SortMode) {
        let Some(container) = &self.container else {
            return;
        };
        if self.cards.is_empty() {
            return;
        }
        let data: Vec<CardData> = self.cards.iter().map(|slot| slot.data.clone()).collect();
        for index in sort_order(&data, mode) {
            let _ = container.append_child(&self.cards[index].element);
        }
    }

    pub(crate) fn filter(&self, query: &str) {
        if self.container.is_none() || self.cards.is_empty() {
            return;
        }
        let needle = normalize_query(query);
        for slot in &self.cards {
            let Some(html) = slot.element.dyn_ref::<HtmlElement>() else {
                continue;
            };
            let style = html.style();
            if matches_query(&slot.data.name, &needle) {
                let _ = style.remove_property("display");
            } else {
                let _ = style.set_property("display", "none");
            }
        }
    }
}
