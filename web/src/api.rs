use jeopardy_core::{CategoryDetails, CategoryId, CategorySummary, LoadError, TriviaSource};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub(crate) const DEFAULT_API_URL: &str = "http://jservice.io/api/";

/// jService HTTP API, reached through the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JserviceSource {
    base_url: String,
}

impl JserviceSource {
    pub(crate) fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    fn categories_url(&self, count: usize) -> String {
        format!("{}categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}category?id={}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        log::debug!("GET {}", url);
        let body = fetch_text(url).await.map_err(|reason| {
            log::warn!("request to {} failed: {}", url, reason);
            LoadError::SourceUnavailable(reason)
        })?;
        decode(url, &body)
    }
}

impl TriviaSource for JserviceSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, LoadError> {
        self.get_json(&self.categories_url(count)).await
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetails, LoadError> {
        self.get_json(&self.category_url(id)).await
    }
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &init).map_err(js_reason)?;
    let response = JsFuture::from(gloo::utils::window().fetch_with_request(&request))
        .await
        .map_err(js_reason)?;
    let response: Response = response.dyn_into().map_err(js_reason)?;
    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), url));
    }

    let body = JsFuture::from(response.text().map_err(js_reason)?)
        .await
        .map_err(js_reason)?;
    body.as_string()
        .ok_or_else(|| format!("non-text body from {}", url))
}

fn js_reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|err| {
        log::warn!("malformed response from {}: {}", url, err);
        LoadError::SourceUnavailable(format!("malformed response from {}: {}", url, err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_jservice_endpoints() {
        let source = JserviceSource::new(DEFAULT_API_URL);

        assert_eq!(
            source.categories_url(100),
            "http://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            source.category_url(CategoryId(11531)),
            "http://jservice.io/api/category?id=11531"
        );
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let source = JserviceSource::new(" https://trivia.example/api ");

        assert_eq!(
            source.categories_url(6),
            "https://trivia.example/api/categories?count=6"
        );
    }

    #[test]
    fn decode_reads_category_listing() {
        let body = r#"[{"id":11531,"title":"mixed bag","clues_count":5},{"id":11532,"title":"let's \"ch\"at","clues_count":5}]"#;

        let listing: Vec<CategorySummary> = decode("test", body).unwrap();

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[1].id, CategoryId(11532));
        assert_eq!(listing[1].title, "let's \"ch\"at");
    }

    #[test]
    fn decode_failure_is_source_unavailable() {
        let result: Result<CategoryDetails, _> = decode("test", "<html>502</html>");

        assert!(matches!(result, Err(LoadError::SourceUnavailable(_))));
    }
}
