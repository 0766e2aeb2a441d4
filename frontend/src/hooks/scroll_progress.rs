use yew::prelude::*;
use yew_hooks::use_window_scroll;

/// Share of the page scrolled so far, in `[0, 1]`.
pub fn scroll_fraction(scroll_y: f64, scrollable: f64) -> f64 {
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

fn scrollable_height() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let document = window
        .document()
        .and_then(|document| document.document_element())
        .map(|element| element.scroll_height() as f64)
        .unwrap_or(0.0);
    document - viewport
}

/// Page scroll progress, recomputed on every window scroll.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    scroll_fraction(scroll_y, scrollable_height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(scroll_fraction(0.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(250.0, 1000.0), 0.25);
        assert_eq!(scroll_fraction(1200.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(-40.0, 1000.0), 0.0);
    }

    #[test]
    fn short_pages_report_no_progress() {
        assert_eq!(scroll_fraction(10.0, 0.0), 0.0);
        assert_eq!(scroll_fraction(10.0, -300.0), 0.0);
    }
}
