use console_error_panic_hook::set_once as set_panic_hook;

mod app;
mod debounce;
mod grid;
mod lazy;
mod page;
mod url_state;

fn main() {
    set_panic_hook();
    app::boot();
}
