use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::debounce::debounce;
use crate::grid::CardGrid;
use crate::lazy::LazyLoader;
use crate::{page, url_state};
use foliogrid_core::{SortMode, UiState, PARAM_QUERY, PARAM_SORT};

const SORT_SELECTOR: &str = "[data-sort]";
const SEARCH_SELECTOR: &str = "[data-search]";
const SYNC_SELECTOR: &str = "[data-sync]";
const SEARCH_DEBOUNCE_MS: u32 = 150;

thread_local! {
    static ENHANCEMENT: RefCell<Option<Enhancement>> = RefCell::new(None);
}

struct Enhancement {
    listeners: Vec<EventListener>,
    _lazy: Option<LazyLoader>,
}

pub(crate) fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| enhance()).forget();
    } else {
        enhance();
    }
}

fn enhance() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    gloo::console::log!("foliogrid: page enhancement active");

    let state = UiState::from_params(
        url_state::get_param(&window, PARAM_SORT).as_deref(),
        url_state::get_param(&window, PARAM_QUERY).as_deref(),
    );
    let grid = Rc::new(CardGrid::locate(&document));
    let lazy = LazyLoader::watch(&window, &document);

    let mut listeners = Vec::new();
    if let Some(listener) = wire_sort_select(&window, &document, &grid, &state) {
        listeners.push(listener);
    }
    if let Some(listener) = wire_search_input(&window, &document, &grid, &state) {
        listeners.push(listener);
    }
    if let Some(listener) = wire_sync_button(&document) {
        listeners.push(listener);
    }

    ENHANCEMENT.with(|slot| {
        *slot.borrow_mut() = Some(Enhancement {
            listeners,
            _lazy: lazy,
        });
    });
}

// initial mode: URL parameter, then the select's server-rendered value
fn wire_sort_select(
    window: &Window,
    document: &Document,
    grid: &Rc<CardGrid>,
    state: &UiState,
) -> Option<EventListener> {
    let select = page::query(document, SORT_SELECTOR)?
        .dyn_into::<HtmlSelectElement>()
        .ok()?;

    let initial = match url_state::get_param(window, PARAM_SORT) {
        Some(param) if !param.trim().is_empty() => state.sort,
        _ => SortMode::parse(&select.value()),
    };
    select.set_value(initial.as_param());
    grid.sort(initial);

    let window = window.clone();
    let grid = grid.clone();
    let select_in_handler = select.clone();
    let listener = EventListener::new(&select, "change", move |_event| {
        let mode = SortMode::parse(&select_in_handler.value());
        url_state::set_param(&window, PARAM_SORT, mode.as_param());
        grid.sort(mode);
    });
    Some(listener)
}

fn wire_search_input(
    window: &Window,
    document: &Document,
    grid: &Rc<CardGrid>,
    state: &UiState,
) -> Option<EventListener> {
    let input = page::query(document, SEARCH_SELECTOR)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;

    if !state.query.is_empty() {
        input.set_value(&state.query);
        grid.filter(&state.query);
    }

    let window = window.clone();
    let grid = grid.clone();
    let apply = debounce(
        move |query: String| {
            url_state::set_param(&window, PARAM_QUERY, &query);
            grid.filter(&query);
        },
        SEARCH_DEBOUNCE_MS,
    );
    let input_in_handler = input.clone();
    let listener = EventListener::new(&input, "input", move |_event| {
        apply(input_in_handler.value());
    });
    Some(listener)
}

// no reset path here; the actual sync ends in a full reload
fn wire_sync_button(document: &Document) -> Option<EventListener> {
    let button = page::query(document, SYNC_SELECTOR)?;
    let button_in_handler = button.clone();
    let listener = EventListener::new(&button, "click", move |_event| {
        let _ = button_in_handler.class_list().add_1("is-loading");
        let _ = button_in_handler.set_attribute("aria-busy", "true");
        if let Some(html) = button_in_handler.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("pointer-events", "none");
        }
    });
    Some(listener)
}
