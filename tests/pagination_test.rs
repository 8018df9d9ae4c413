use pagesmith::pagination::{build_navigation, page_file_name, paginate, PageLink};
use pagesmith::{Context, Value};

fn window(current: usize, total: usize) -> Vec<usize> {
    build_navigation(current, total, "album").page_numbers.iter().map(|p| p.number).collect()
}

#[test]
fn test_paginate_boundaries() {
    let items: Vec<i32> = (1..=10).collect();
    assert_eq!(
        paginate(&items, 3),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
    );
    assert!(paginate::<i32>(&[], 5).is_empty());
    assert_eq!(paginate(&items, 0), vec![items.clone()]);
    assert_eq!(paginate(&items, 20), vec![items]);
}

#[test]
fn test_page_file_name() {
    assert_eq!(page_file_name("album", 1), "album.html");
    assert_eq!(page_file_name("album", 2), "album_page2.html");
}

#[test]
fn test_navigation_middle_page() {
    let nav = build_navigation(5, 10, "album");
    assert!(nav.has_prev);
    assert!(nav.has_next);
    assert_eq!(nav.prev_page_file, "album_page4.html");
    assert_eq!(nav.next_page_file, "album_page6.html");
    assert_eq!(window(5, 10), vec![2, 3, 4, 5, 6, 7, 8]);

    let current: Vec<_> = nav.page_numbers.iter().filter(|p| p.is_current).collect();
    assert_eq!(
        current,
        vec![&PageLink { number: 5, file: "album_page5.html".to_string(), is_current: true }]
    );
}

#[test]
fn test_navigation_edges() {
    let nav = build_navigation(1, 1, "album");
    assert!(!nav.has_prev);
    assert!(!nav.has_next);
    assert_eq!(nav.prev_page_file, "");
    assert_eq!(nav.next_page_file, "");
    assert_eq!(window(1, 1), vec![1]);

    assert_eq!(window(1, 10), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(window(10, 10), vec![4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(window(9, 10), vec![4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(window(2, 3), vec![1, 2, 3]);

    let nav = build_navigation(2, 2, "album");
    assert_eq!(nav.prev_page_file, "album.html");
}

#[test]
fn test_navigation_apply_to_context() {
    let mut context = Context::new();
    build_navigation(2, 3, "album").apply_to(&mut context).unwrap();

    assert_eq!(context.get("currentPage"), Some(&Value::Int(2)));
    assert_eq!(context.get("totalPages"), Some(&Value::Int(3)));
    assert_eq!(context.get("hasPrev"), Some(&Value::Bool(true)));
    assert_eq!(context.get("nextPageFile"), Some(&Value::from("album_page3.html")));

    let pages = context.get("pageNumbers").and_then(Value::as_list).unwrap();
    assert_eq!(pages.len(), 3);
    let first = pages[0].as_map().unwrap();
    assert_eq!(first["file"], Value::from("album.html"));
    assert_eq!(first["isCurrent"], Value::Bool(false));
}
