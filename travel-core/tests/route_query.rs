use std::sync::Arc;

use travel_core::prelude::*;

mod common;

use common::catalog;

fn service(page_size: u64, domestic_count: i32) -> RouteService<InMemoryRouteRepo> {
    RouteService::new(catalog::repo(domestic_count), PageSize::new(page_size).unwrap())
}

fn rids(page: &PageBean<Route>) -> Vec<i32> {
    page.items.iter().map(|r| r.rid.value()).collect()
}

#[tokio::test]
async fn pages_partition_the_category() {
    for page_size in 1..=12 {
        let service = service(page_size, 23);
        let first = service.get_page(CategoryId::from(1), 1).await.unwrap();
        let total_pages = first.total_pages();
        assert_eq!(first.total_items, 23);

        let mut seen = vec![];
        for page_number in 1..=(total_pages as i64) {
            let page = service.get_page(CategoryId::from(1), page_number).await.unwrap();
            assert!(!page.is_empty());
            assert!((page.items.len() as u64) <= page_size);
            seen.extend(rids(&page));
        }

        let mut expected = (0..23).map(|i| i * 10 + 1).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(seen, expected);

        let past_end = service
            .get_page(CategoryId::from(1), total_pages as i64 + 1)
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }
}

#[tokio::test]
async fn seven_routes_with_page_size_five() {
    let service = service(5, 4);
    let cid = CategoryId::from(catalog::OUTBOUND);

    let expected = [(1, 5), (2, 2), (3, 0)];
    for (page_number, len) in expected {
        let page = service.get_page(cid, page_number).await.unwrap();
        assert_eq!(page.items.len(), len);
        assert_eq!(page.total_items, 7);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.current_page, page_number as u64);
    }
}

#[tokio::test]
async fn empty_and_unknown_categories() {
    let service = service(5, 4);

    let empty = service.get_page(CategoryId::from(catalog::EMPTY), 1).await.unwrap();
    assert!(empty.is_empty());
    assert!(!empty.has_next());

    let unknown = service.get_page(CategoryId::from(404), 1).await;
    assert!(matches!(unknown, Err(QueryError::NotFound { .. })));
}

#[tokio::test]
async fn shared_service_is_usable_from_many_tasks() {
    let service: Arc<dyn RouteQueryService + Send + Sync> = Arc::new(service(5, 40));
    let baseline = service.get_page(CategoryId::from(1), 3).await.unwrap();

    let handles = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.get_page(CategoryId::from(1), 3).await })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let page = handle.await.unwrap().unwrap();
        assert_eq!(page, baseline);
    }
}
