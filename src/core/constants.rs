//! Fixed sizes, margins, endpoint details, and user-facing strings.
//!
//! Panel bounds are the cell-unit translation of the widget's original
//! pixel constraints: width stays within [minimum, viewport − margin] and
//! height within [minimum, viewport − margin], with the minimum winning when
//! the viewport is smaller than the minimum.

/// Smallest width the panel can be dragged to, in columns.
pub const MIN_PANEL_WIDTH: u16 = 30;

/// Columns kept free between the panel's maximum width and the viewport.
pub const PANEL_WIDTH_MARGIN: u16 = 4;

/// Smallest height the panel can be dragged to, in rows.
pub const MIN_PANEL_HEIGHT: u16 = 10;

/// Rows kept free between the panel's maximum height and the viewport.
pub const PANEL_HEIGHT_MARGIN: u16 = 6;

/// Panel size before the user has resized it.
pub const DEFAULT_PANEL_WIDTH: u16 = 42;
pub const DEFAULT_PANEL_HEIGHT: u16 = 15;

/// Path appended to the endpoint base URL.
pub const CHAT_PATH: &str = "chat";

/// Endpoint base used when neither the CLI nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Header marking the request as programmatic, matching what the backend
/// expects from the widget.
pub const REQUESTED_WITH_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Bot bubble shown when the response parsed but carried no reply.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request. Please try again.";

/// Bot bubble shown when the request failed outright.
pub const ERROR_REPLY: &str = "Sorry, there was an error connecting to the server. Please try again.";
