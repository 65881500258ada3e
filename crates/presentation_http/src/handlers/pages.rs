//! Static pages

use axum::response::Html;

const INDEX_PAGE: &str = concat!(
    "<!doctype html><html><head><title>/dock: Capital Bikeshare in Slack</title></head>",
    "<body><h1>/dock</h1>",
    "<p>Find the closest Capital Bikeshare dock with bikes, right from Slack.</p>",
    "<p>Type <code>/dock in 1600 Pennsylvania Avenue NW, Washington, DC</code> ",
    "and get back the nearest station with available bikes, a walking route ",
    "and live bike/dock counts.</p>",
    "</body></html>"
);

const PRIVACY_PAGE: &str = concat!(
    "<!doctype html><html><head><title>/dock privacy policy</title></head>",
    "<body><h1>Privacy</h1>",
    "<p>Queries are forwarded to the geocoder to find your address and are ",
    "not stored. No message content is persisted.</p>",
    "</body></html>"
);

const SUPPORT_PAGE: &str = concat!(
    "<!doctype html><html><head><title>/dock support</title></head>",
    "<body><h1>Support</h1>",
    "<p>Questions? Open an issue on the project repository.</p>",
    "</body></html>"
);

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Privacy policy page
pub async fn privacy() -> Html<&'static str> {
    Html(PRIVACY_PAGE)
}

/// Support page
pub async fn support() -> Html<&'static str> {
    Html(SUPPORT_PAGE)
}
