//! Lazy continuation over single-page fetches.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use super::CloudControlError;
use crate::domain::{Page, PaginationOptions, next_options};

/// Every item of a listing, fetched page by page as the consumer polls.
///
/// Dropping the stream stops further fetches.
pub type PagedStream<T, E = CloudControlError> = BoxStream<'static, Result<T, E>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single-page fetch issued by [`paginate`].
pub enum PageRequest {
    /// The first page of a sequence; not-found fallbacks apply here only.
    First(PaginationOptions),
    /// A page derived from the previous page's marker.
    Next(PaginationOptions),
}

impl PageRequest {
    pub fn options(&self) -> &PaginationOptions {
        match self {
            Self::First(options) | Self::Next(options) => options,
        }
    }
}

/// Turn a single-page fetch into a stream over all items of all pages.
///
/// Nothing is fetched before the first poll, and at most one fetch is in flight.
/// The sequence ends after a page without a marker or an empty page; an error
/// is yielded once and ends it as well.
pub fn paginate<T, E, F, Fut>(initial: PaginationOptions, mut fetch: F) -> PagedStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnMut(PageRequest) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Page<T>, E>> + Send + 'static,
{
    stream::try_unfold(Some(PageRequest::First(initial)), move |request| {
        let pending = request.map(|request| (request.options().clone(), fetch(request)));
        async move {
            let Some((options, fetching)) = pending else {
                return Ok::<_, E>(None);
            };
            let page = fetching.await?;
            if page.is_empty() {
                return Ok(None);
            }
            let next = next_options(&options, &page).map(PageRequest::Next);
            Ok(Some((page.into_items(), next)))
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, E>)))
    .try_flatten()
    .boxed()
}
