//! Landing page handler.

use actix_web::HttpResponse;
use chrono::{Datelike, Utc};

const LANDING_TEMPLATE: &str = include_str!("../../static/landing.html");

/// Static marketing page: animated hero plus a footer stamped with the
/// current calendar year. No request inputs, no external data.
pub async fn landing_page() -> HttpResponse {
    let year = Utc::now().year();
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LANDING_TEMPLATE.replace("{{year}}", &year.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[actix_web::test]
    async fn hero_links_to_api_fragment() {
        let resp = landing_page().await;
        let body = resp.into_body().try_into_bytes().expect("body bytes");
        let html = std::str::from_utf8(&body).expect("utf-8 body");

        assert!(html.contains("href=\"#api\""));
        assert!(html.contains("Ola Digital Health API Documentation"));
    }

    #[actix_web::test]
    async fn footer_carries_current_year() {
        let resp = landing_page().await;
        let body = resp.into_body().try_into_bytes().expect("body bytes");
        let html = std::str::from_utf8(&body).expect("utf-8 body");

        let expected = format!(
            "&copy; {} OlaDigital Health Docs. All rights reserved.",
            Utc::now().year()
        );
        assert!(html.contains(&expected));
        assert!(!html.contains("{{year}}"));
    }
}
