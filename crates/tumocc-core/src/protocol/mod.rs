//! Wire format of the library occupancy backend.
//!
//! - request: the `{"location": ...}` document sent inside a form field
//! - response: the `{"usage": ...}` document returned by the backend

pub mod request;
pub mod response;

/// Form field the backend reads the location query from.
pub const DEFAULT_FORM_FIELD: &str = "loadGraphiteData";

/// Backend endpoint of the occupancy display.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://auslastungsanzeige.ub.tum.de/backend/FrontController.php";

/// Marker header value the backend expects on AJAX calls.
pub const AJAX_HEADER_NAME: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";
