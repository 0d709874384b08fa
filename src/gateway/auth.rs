use axum::http::HeaderMap;
use axum_extra::headers::{self, HeaderMapExt};

pub fn authenticated_headers(secret_key: &str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.typed_insert(
        headers::Authorization::bearer(secret_key).expect("secret key is a valid header value"),
    );
    map.typed_insert(headers::ContentType::json());
    map
}
