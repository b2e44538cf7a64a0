use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// Wall-clock time once the client has hydrated. `None` on the server render
/// and on the first client render, so both produce the same markup.
pub fn use_client_now() -> Option<DateTime<Utc>> {
    let mut now = use_signal(|| Option::<DateTime<Utc>>::None);
    use_effect(move || {
        now.set(Some(Utc::now()));
    });
    now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static SEEN: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
    }

    #[allow(non_snake_case)]
    fn Recorder() -> Element {
        let now = use_client_now();
        SEEN.with(|s| s.borrow_mut().push(now.is_some()));
        rsx! { div {} }
    }

    #[test]
    fn first_render_has_no_client_time() {
        let mut dom = VirtualDom::new(Recorder);
        dom.rebuild_in_place();
        SEEN.with(|s| assert_eq!(*s.borrow(), vec![false]));
    }
}
