//! Offset/limit pagination.

use crate::error::ApiError;
use std::future::Future;
use tracing::debug;

/// Default page size for offset/limit endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Fetch every page from an offset/limit endpoint.
///
/// Calls `fetch_page` with offsets 0, `page_size`, 2×`page_size`, … until a
/// page comes back with fewer than `page_size` records (including zero),
/// concatenating pages in arrival order. Any page error aborts the whole
/// fetch with that error. `page_size` must be at least 1.
pub async fn fetch_all_pages<T, F, Fut>(
    page_size: usize,
    mut fetch_page: F,
) -> Result<Vec<T>, ApiError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    if page_size == 0 {
        return Err(ApiError::InvalidConfig("page size must be at least 1".into()));
    }

    let mut all = Vec::new();
    let mut offset = 0;
    loop {
        let page = fetch_page(offset).await?;
        let fetched = page.len();
        all.extend(page);
        debug!(offset, fetched, total = all.len(), "fetched page");
        if fetched < page_size {
            break;
        }
        offset += page_size;
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn pager(
        data: Vec<u32>,
        page_size: usize,
        offsets: Arc<Mutex<Vec<usize>>>,
    ) -> impl FnMut(usize) -> std::pin::Pin<Box<dyn Future<Output = Result<Vec<u32>, ApiError>>>>
    {
        move |offset| {
            let data = data.clone();
            let offsets = offsets.clone();
            Box::pin(async move {
                offsets.lock().unwrap().push(offset);
                let end = (offset + page_size).min(data.len());
                Ok(data.get(offset..end).unwrap_or(&[]).to_vec())
            })
        }
    }

    #[tokio::test]
    async fn test_concatenates_pages_until_short_page() {
        let data: Vec<u32> = (0..250).collect();
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let result = fetch_all_pages(100, pager(data.clone(), 100, offsets.clone()))
            .await
            .unwrap();
        assert_eq!(result, data);
        assert_eq!(*offsets.lock().unwrap(), vec![0, 100, 200]);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_one_empty_page() {
        let data: Vec<u32> = (0..200).collect();
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let result = fetch_all_pages(100, pager(data.clone(), 100, offsets.clone()))
            .await
            .unwrap();
        assert_eq!(result.len(), 200);
        assert_eq!(*offsets.lock().unwrap(), vec![0, 100, 200]);
    }

    #[tokio::test]
    async fn test_short_first_page_stops_immediately() {
        let data: Vec<u32> = (0..7).collect();
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let result = fetch_all_pages(100, pager(data.clone(), 100, offsets.clone()))
            .await
            .unwrap();
        assert_eq!(result, data);
        assert_eq!(*offsets.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn test_empty_first_page_yields_empty_result() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let result = fetch_all_pages(100, pager(Vec::new(), 100, offsets.clone()))
            .await
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(*offsets.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn test_page_error_aborts_whole_fetch() {
        let calls = Arc::new(Mutex::new(0usize));
        let result: Result<Vec<u32>, _> = fetch_all_pages(2, |offset| {
            let calls = calls.clone();
            async move {
                *calls.lock().unwrap() += 1;
                if offset == 0 {
                    Ok(vec![1, 2])
                } else {
                    Err(ApiError::Status {
                        status: 500,
                        body: "boom".into(),
                    })
                }
            }
        })
        .await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let result: Result<Vec<u32>, _> =
            fetch_all_pages(0, |_offset| async { Ok(Vec::new()) }).await;
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }
}
