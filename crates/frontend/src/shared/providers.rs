//! Remote data providers
//!
//! The search combobox and the filtered list depend only on these traits;
//! the HTTP adapters below are the panel's default implementation.

use super::api_utils::api_url;
use async_trait::async_trait;
use contracts::shared::{Filters, ListPage, SearchPage};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::rc::Rc;
use thiserror::Error;

/// Ошибка провайдера данных. Never fatal for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// `search(term, filters) -> page of items`. No results is an empty page, not an error.
#[async_trait(?Send)]
pub trait SearchProvider {
    type Item;

    async fn search(
        &self,
        term: &str,
        filters: &Filters,
    ) -> Result<SearchPage<Self::Item>, ProviderError>;
}

/// `list(page, filters) -> {items, currentPage, totalPages}`
#[async_trait(?Send)]
pub trait ListProvider {
    type Item;

    async fn list(
        &self,
        page: u32,
        filters: &Filters,
    ) -> Result<ListPage<Self::Item>, ProviderError>;
}

#[async_trait(?Send)]
impl<P: SearchProvider + ?Sized> SearchProvider for Rc<P> {
    type Item = P::Item;

    async fn search(
        &self,
        term: &str,
        filters: &Filters,
    ) -> Result<SearchPage<Self::Item>, ProviderError> {
        (**self).search(term, filters).await
    }
}

#[async_trait(?Send)]
impl<P: ListProvider + ?Sized> ListProvider for Rc<P> {
    type Item = P::Item;

    async fn list(
        &self,
        page: u32,
        filters: &Filters,
    ) -> Result<ListPage<Self::Item>, ProviderError> {
        (**self).list(page, filters).await
    }
}

/// Поиск через `GET {path}?q=...&<filters>`
pub struct HttpSearchProvider<T> {
    path: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpSearchProvider<T> {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            _item: PhantomData,
        }
    }
}

impl<T> Clone for HttpSearchProvider<T> {
    fn clone(&self) -> Self {
        Self::new(self.path)
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> SearchProvider for HttpSearchProvider<T> {
    type Item = T;

    async fn search(&self, term: &str, filters: &Filters) -> Result<SearchPage<T>, ProviderError> {
        let mut params = vec![("q".to_string(), term.to_string())];
        params.extend(filters.to_query_pairs());
        get_json(&api_url(self.path, &params)).await
    }
}

/// Постраничный список через `GET {path}?page=N&<filters>`
pub struct HttpListProvider<T> {
    path: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpListProvider<T> {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            _item: PhantomData,
        }
    }
}

impl<T> Clone for HttpListProvider<T> {
    fn clone(&self) -> Self {
        Self::new(self.path)
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> ListProvider for HttpListProvider<T> {
    type Item = T;

    async fn list(&self, page: u32, filters: &Filters) -> Result<ListPage<T>, ProviderError> {
        let mut params = vec![("page".to_string(), page.to_string())];
        params.extend(filters.to_query_pairs());
        get_json(&api_url(self.path, &params)).await
    }
}

async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, ProviderError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ProviderError::Status(response.status()));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| ProviderError::Decode(e.to_string()))
}
