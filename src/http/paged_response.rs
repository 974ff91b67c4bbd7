use crate::utils::page::Page;
use crate::utils::page_info::PageInfo;
use crate::utils::pager::Pageable;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Response body of every list endpoint: `{"data": [...], "pageInfo": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    data: Vec<T>,
    page_info: PageInfo,
}

impl<T> Paged<T> {
    pub fn new(pageable: &impl Pageable, page: Page<T>) -> Self {
        let page_info = PageInfo::of(pageable, &page);
        Self {
            data: page.into_content(),
            page_info,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }
}

impl<T: Serialize> IntoResponse for Paged<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::page::PageResult;
    use crate::utils::pager::Pager;
    use axum::http::{header, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_new_takes_info_from_request_and_page() {
        let pager = Pager::new(2, 10);
        let page = Page::new((11..=20).map(|id| Item { id }).collect(), &pager, 77);
        let expected = PageInfo::of(&pager, &page);
        assert_eq!(page.total_pages(), 8);

        let paged = Paged::new(&pager, page);
        assert_eq!(paged.data().len(), 10);
        assert_eq!(*paged.page_info(), expected);
        assert_eq!(paged.page_info().current_page(), 2);
        assert_eq!(paged.page_info().page_limit(), 10);
        assert_eq!(paged.page_info().total_pages(), 8);
        assert_eq!(paged.page_info().total_elements(), 77);
    }

    #[test]
    fn test_serialized_shape() {
        let pager = Pager::new(1, 2);
        let paged = Paged::new(&pager, Page::new(vec![Item { id: 1 }, Item { id: 2 }], &pager, 3));
        assert_eq!(
            serde_json::to_value(&paged).unwrap(),
            json!({
                "data": [{"id": 1}, {"id": 2}],
                "pageInfo": {
                    "currentPage": 1,
                    "pageLimit": 2,
                    "totalPages": 2,
                    "totalElements": 3,
                },
            })
        );
    }

    #[tokio::test]
    async fn test_into_response_is_json() {
        let pager = Pager::default();
        let response = Paged::new(&pager, Page::<Item>::empty(&pager)).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pageInfo"]["totalPages"], json!(0));
    }
}
