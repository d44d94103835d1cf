// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Iterate over the results of list RPCs.
//!
//! List RPCs return their results in pages, as described in [AIP-4233]. A
//! [Paginator] streams the pages, and an [ItemPaginator] streams the items
//! across all pages. Both are lazy and single-pass: each page is requested
//! when the previous one is consumed, and iteration stops after the first
//! page with an empty `next_page_token`. Pages without items do not stop
//! the iteration.
//!
//! [AIP-4233]: https://google.aip.dev/client-libraries/4233

use futures::Stream;
use futures::future::BoxFuture;

/// A page of results from a list RPC.
pub trait PageableResponse {
    /// The type of the items in the page.
    type PageItem: Send;

    /// Consumes the page, returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to request the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

type Execute<T, E> = Box<dyn FnMut(String) -> BoxFuture<'static, Result<T, E>> + Send>;

enum State {
    Next(String),
    Done,
}

/// Streams the pages of a list RPC.
pub struct Paginator<T, E> {
    execute: Execute<T, E>,
    state: State,
    next_page_token: Option<String>,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Fetches the next page.
    ///
    /// Returns `None` once the last page was returned, or after an error.
    ///
    /// # Example
    /// ```
    /// # use vertex_gax::paginator::{PageableResponse, internal::new_paginator};
    /// struct Page(Vec<i32>, String);
    /// impl PageableResponse for Page {
    ///     type PageItem = i32;
    ///     fn items(self) -> Vec<i32> { self.0 }
    ///     fn next_page_token(&self) -> String { self.1.clone() }
    /// }
    /// # tokio_test::block_on(async {
    /// let mut pages = new_paginator(String::new(), |token: String| async move {
    ///     let next = if token.is_empty() { "p2" } else { "" };
    ///     Ok::<_, std::io::Error>(Page(vec![1, 2], next.to_string()))
    /// });
    /// let mut count = 0;
    /// while let Some(page) = pages.next().await {
    ///     count += page?.items().len();
    /// }
    /// assert_eq!(count, 4);
    /// # Ok::<(), std::io::Error>(()) });
    /// ```
    pub async fn next(&mut self) -> Option<Result<T, E>> {
        let token = match std::mem::replace(&mut self.state, State::Done) {
            State::Next(token) => token,
            State::Done => return None,
        };
        match (self.execute)(token).await {
            Ok(page) => {
                let token = page.next_page_token();
                if !token.is_empty() {
                    self.state = State::Next(token.clone());
                }
                self.next_page_token = Some(token);
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// The `next_page_token` of the last page returned.
    ///
    /// `None` until the first page is returned.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    /// Converts the paginator into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator {
            pages: self,
            current: Vec::new().into_iter(),
        }
    }

    /// Converts the paginator into a [Stream] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Unpin
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Box::pin(futures::stream::unfold(self, |mut pages| async move {
            pages.next().await.map(|page| (page, pages))
        }))
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("done", &matches!(self.state, State::Done))
            .field("next_page_token", &self.next_page_token)
            .finish()
    }
}

/// Streams the items of a list RPC, across all its pages.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: std::vec::IntoIter<T::PageItem>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse,
{
    /// Returns the next item, fetching more pages as needed.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => self.current = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// The `next_page_token` of the last page fetched.
    pub fn next_page_token(&self) -> Option<&str> {
        self.pages.next_page_token()
    }

    /// Converts the paginator into a [Stream] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Unpin
    where
        T: Send + 'static,
        T::PageItem: 'static,
        E: Send + 'static,
    {
        Box::pin(futures::stream::unfold(self, |mut items| async move {
            items.next().await.map(|item| (item, items))
        }))
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator")
            .field("pages", &self.pages)
            .field("buffered", &self.current.len())
            .finish()
    }
}

/// Blocking iterators over the paginators.
///
/// These adapters drive the asynchronous paginators on a runtime owned by a
/// blocking client. They must not be used from within an asynchronous
/// context.
pub mod blocking {
    use super::{ItemPaginator, PageableResponse, Paginator};
    use std::sync::Arc;
    use tokio::runtime::Runtime;

    /// An [Iterator] over the pages of a list RPC.
    #[derive(Debug)]
    pub struct PageIter<T, E> {
        runtime: Arc<Runtime>,
        pages: Paginator<T, E>,
    }

    impl<T, E> PageIter<T, E> {
        pub fn new(runtime: Arc<Runtime>, pages: Paginator<T, E>) -> Self {
            Self { runtime, pages }
        }
    }

    impl<T: PageableResponse, E> PageIter<T, E> {
        /// The `next_page_token` of the last page returned.
        pub fn next_page_token(&self) -> Option<&str> {
            self.pages.next_page_token()
        }
    }

    impl<T: PageableResponse, E> Iterator for PageIter<T, E> {
        type Item = Result<T, E>;
        fn next(&mut self) -> Option<Self::Item> {
            self.runtime.block_on(self.pages.next())
        }
    }

    /// An [Iterator] over the items of a list RPC.
    #[derive(Debug)]
    pub struct ItemIter<T: PageableResponse, E> {
        runtime: Arc<Runtime>,
        items: ItemPaginator<T, E>,
    }

    impl<T: PageableResponse, E> ItemIter<T, E> {
        pub fn new(runtime: Arc<Runtime>, items: ItemPaginator<T, E>) -> Self {
            Self { runtime, items }
        }
    }

    impl<T: PageableResponse, E> Iterator for ItemIter<T, E> {
        type Item = Result<T::PageItem, E>;
        fn next(&mut self) -> Option<Self::Item> {
            self.runtime.block_on(self.items.next())
        }
    }
}

#[doc(hidden)]
pub mod internal {
    use super::{Paginator, State};
    use std::future::Future;

    /// Creates a paginator starting at `seed_token`.
    ///
    /// `execute` fetches the page for a given token. The generated clients
    /// clone the initial request, set its page token, and send it.
    pub fn new_paginator<T, E, F, Fut>(seed_token: String, mut execute: F) -> Paginator<T, E>
    where
        F: FnMut(String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Paginator {
            execute: Box::new(move |token| Box::pin(execute(token))),
            state: State::Next(seed_token),
            next_page_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::new_paginator;
    use super::*;
    use futures::StreamExt;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestPage {
        items: Vec<&'static str>,
        next_page_token: String,
    }

    impl PageableResponse for TestPage {
        type PageItem = &'static str;
        fn items(self) -> Vec<&'static str> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&'static str], token: &str) -> TestPage {
        TestPage {
            items: items.to_vec(),
            next_page_token: token.to_string(),
        }
    }

    type Tokens = Arc<Mutex<Vec<String>>>;

    fn fake(pages: Vec<TestPage>) -> (Paginator<TestPage, String>, Tokens) {
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let captured = tokens.clone();
        let paginator = new_paginator(String::new(), move |token: String| {
            captured.lock().expect("tokens").push(token);
            let next = pages.lock().expect("pages").pop_front();
            async move { next.ok_or_else(|| "no more pages".to_string()) }
        });
        (paginator, tokens)
    }

    fn four_pages() -> Vec<TestPage> {
        vec![
            page(&["a", "b", "c"], "abc"),
            page(&[], "def"),
            page(&["d"], "ghi"),
            page(&["e", "f"], ""),
        ]
    }

    #[tokio::test]
    async fn pages() {
        let (mut paginator, tokens) = fake(four_pages());
        assert_eq!(paginator.next_page_token(), None);
        let mut got = Vec::new();
        while let Some(page) = paginator.next().await {
            let page = page.expect("fake never fails");
            got.push(page.next_page_token.clone());
            assert_eq!(paginator.next_page_token(), Some(page.next_page_token.as_str()));
        }
        assert_eq!(got, vec!["abc", "def", "ghi", ""]);
        assert_eq!(*tokens.lock().expect("tokens"), vec!["", "abc", "def", "ghi"]);
        assert!(paginator.next().await.is_none());
    }

    #[tokio::test]
    async fn items_skip_empty_pages() {
        let (paginator, _) = fake(four_pages());
        let mut items = paginator.items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.expect("fake never fails"));
        }
        assert_eq!(got, vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(items.next_page_token(), Some(""));
    }

    #[tokio::test]
    async fn last_page_with_items() {
        let (paginator, tokens) = fake(vec![page(&["a", "b"], "")]);
        let got: Vec<_> = paginator.items().into_stream().collect().await;
        assert_eq!(got, vec![Ok("a"), Ok("b")]);
        assert_eq!(tokens.lock().expect("tokens").len(), 1);
    }

    #[tokio::test]
    async fn error_stops_iteration() {
        let (paginator, _) = fake(vec![page(&["a"], "abc")]);
        let got: Vec<_> = paginator.into_stream().map(|p| p.map(|p| p.items)).collect().await;
        assert_eq!(got, vec![Ok(vec!["a"]), Err("no more pages".to_string())]);
    }

    #[test]
    fn blocking() {
        let runtime = Arc::new(
            tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("runtime"),
        );
        let (paginator, _) = fake(four_pages());
        let pages = blocking::PageIter::new(runtime.clone(), paginator);
        assert_eq!(pages.count(), 4);

        let (paginator, _) = fake(four_pages());
        let items = blocking::ItemIter::new(runtime, paginator.items());
        let got: Result<Vec<_>, _> = items.collect();
        assert_eq!(got, Ok(vec!["a", "b", "c", "d", "e", "f"]));
    }
}
