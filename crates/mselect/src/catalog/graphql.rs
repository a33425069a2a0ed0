//! GraphQL client for the Rick and Morty catalog.

use super::{CatalogSource, FetchError, FilterQuery, Page, ResultItem};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

const CHARACTERS_QUERY: &str = "\
query Characters($page: Int, $filter: FilterCharacter) {
  characters(page: $page, filter: $filter) {
    info { count pages }
    results { id name image episode { name } }
  }
}";

// The catalog answers an unmatched filter with an error instead of an empty
// result list.
const NOT_FOUND_PREFIX: &str = "404";

#[derive(Debug, Serialize)]
struct Request {
    query: &'static str,
    variables: Variables,
}

#[derive(Debug, Serialize)]
struct Variables {
    page: u32,
    filter: NameFilter,
}

#[derive(Debug, Serialize)]
struct NameFilter {
    name: String,
}

impl Request {
    fn characters(query: &FilterQuery) -> Self {
        Self {
            query: CHARACTERS_QUERY,
            variables: Variables {
                page: query.page,
                filter: NameFilter {
                    name: query.name.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    data: Option<Data>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Data {
    characters: Option<Characters>,
}

#[derive(Debug, Deserialize)]
struct Characters {
    info: Info,
    results: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct Info {
    #[allow(dead_code)]
    count: u32,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Character {
    id: String,
    name: String,
    image: String,
    episode: Vec<IgnoredAny>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Decode a response body into a [`Page`].
fn decode_page(body: &[u8]) -> Result<Page, FetchError> {
    let response: Response =
        serde_json::from_slice(body).map_err(|err| FetchError::Malformed(err.to_string()))?;

    if let Some(error) = response.errors.into_iter().next() {
        if error.message.starts_with(NOT_FOUND_PREFIX) {
            return Ok(Page::empty());
        }
        return Err(FetchError::Api(error.message));
    }

    let characters = response
        .data
        .and_then(|data| data.characters)
        .ok_or_else(|| FetchError::Malformed("missing data.characters".to_string()))?;

    Ok(Page {
        total_pages: characters.info.pages,
        items: characters
            .results
            .into_iter()
            .map(|c| ResultItem {
                id: c.id,
                name: c.name,
                image: c.image,
                episode_count: c.episode.len(),
            })
            .collect(),
    })
}

/// [`CatalogSource`] backed by the catalog's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlCatalog {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mselect/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CatalogSource for GraphqlCatalog {
    fn fetch_page(&self, query: &FilterQuery) -> BoxFuture<'static, Result<Page, FetchError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let request = Request::characters(query);

        async move {
            let response = client
                .post(&endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|err| FetchError::Transport(err.to_string()))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|err| FetchError::Transport(err.to_string()))?;

            if status.is_success() {
                return decode_page(&body);
            }
            // Some deployments send the no-match error with a 404 status.
            match decode_page(&body) {
                Ok(page) if page.items.is_empty() => Ok(page),
                _ => Err(FetchError::Http(status.as_u16())),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).expect("serialize fixture")
    }

    #[test]
    fn request_carries_page_and_name() {
        let request = Request::characters(&FilterQuery::new(2, "Rick"));
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["variables"], json!({"page": 2, "filter": {"name": "Rick"}}));
        assert!(value["query"].as_str().unwrap_or("").contains("characters(page: $page"));
    }

    #[test]
    fn decodes_results_and_counts_episodes() {
        let page = decode_page(&body(json!({
            "data": {"characters": {
                "info": {"count": 107, "pages": 6},
                "results": [
                    {"id": "1", "name": "Rick Sanchez", "image": "https://x/1.jpeg",
                     "episode": [{"name": "Pilot"}, {"name": "Lawnmower Dog"}]},
                    {"id": "8", "name": "Adjudicator Rick", "image": "https://x/8.jpeg",
                     "episode": [{"name": "Close Rick-counters of the Rick Kind"}]}
                ]
            }}
        })))
        .expect("page");

        assert_eq!(page.total_pages, 6);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.items[0].episode_count, 2);
        assert_eq!(page.items[1].name, "Adjudicator Rick");
    }

    #[test]
    fn not_found_error_is_an_empty_page() {
        let page = decode_page(&body(json!({
            "errors": [{"message": "404: Not Found", "path": ["characters"]}],
            "data": {"characters": null}
        })))
        .expect("empty page");
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn other_errors_are_reported() {
        let err = decode_page(&body(json!({
            "errors": [{"message": "Variable \"$page\" got invalid value"}],
            "data": null
        })))
        .unwrap_err();
        assert!(matches!(err, FetchError::Api(msg) if msg.starts_with("Variable")));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = decode_page(&body(json!({
            "data": {"characters": {
                "info": {"count": 1, "pages": 1},
                "results": [{"id": "1", "name": "Rick Sanchez", "image": "x"}]
            }}
        })))
        .unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));

        let err = decode_page(&body(json!({"data": {}}))).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));

        let err = decode_page(b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn mistyped_fields_are_malformed() {
        let err = decode_page(&body(json!({
            "data": {"characters": {
                "info": {"count": 1, "pages": "one"},
                "results": []
            }}
        })))
        .unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
