use crate::utils::config::PagingConfig;
use crate::utils::http_error_handler::ErrorResponse;
use crate::utils::pager::{Pageable, Pager};
use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
struct PagerParams {
    #[serde(rename = "pageNum")]
    page_num: Option<u32>,
    #[serde(rename = "pageSize")]
    page_size: Option<u32>,
}

/// `?pageNum=..&pageSize=..`, missing parameters taken from the router's
/// [`PagingConfig`], rejected with a 400 when out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidPager(pub Pager);

#[async_trait]
impl<S> FromRequestParts<S> for ValidPager
where
    PagingConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PagerParams>::from_request_parts(parts, state).await?;
        let config = PagingConfig::from_ref(state);
        let default = config.default_pager();
        let pager = Pager::new(
            params.page_num.unwrap_or(default.page_num),
            params.page_size.unwrap_or(default.page_size),
        );
        pager.validate()?;
        config
            .check(&pager)
            .map_err(|e| ErrorResponse::new_with_message(&e.to_string()))?;
        Ok(Self(pager))
    }
}

impl Pageable for ValidPager {
    fn page_number(&self) -> u32 {
        self.0.page_number()
    }

    fn page_size(&self) -> u32 {
        self.0.page_size()
    }
}
