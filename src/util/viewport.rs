//! Browser measurements used by pane layout. Require a browser environment.

/// Inner width of the browser window in CSS pixels.
///
/// Falls back to the document element's client width, then 0.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        if let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) {
            if width > 0.0 {
                return width;
            }
        }
        window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |el| f64::from(el.client_width()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Client width of a rendered element in CSS pixels.
#[cfg(feature = "hydrate")]
pub fn element_width(el: &web_sys::Element) -> f64 {
    f64::from(el.client_width())
}
