use proptest::prelude::*;
use reelctl_core::{PagedList, Paginator};

#[derive(Debug, Clone)]
enum Nav {
    Jump(i64),
    Next,
    Prev,
}

fn arb_nav() -> impl Strategy<Value = Nav> {
    prop_oneof![
        any::<i64>().prop_map(Nav::Jump),
        (-5i64..50).prop_map(Nav::Jump),
        Just(Nav::Next),
        Just(Nav::Prev),
    ]
}

fn apply(pager: &mut Paginator, nav: &Nav) {
    match nav {
        Nav::Jump(n) => pager.go_to_page(*n),
        Nav::Next => pager.go_to_next_page(),
        Nav::Prev => pager.go_to_previous_page(),
    }
}

proptest! {
    /// Property: total pages is ceil(len / page_size), zero when empty
    #[test]
    fn prop_total_pages_is_ceiling(len in 0usize..10_000, page_size in 1usize..200) {
        let pager = Paginator::try_new(len, page_size).unwrap();
        let expected = if len == 0 { 0 } else { (len - 1) / page_size + 1 };
        prop_assert_eq!(pager.total_pages(), expected);
    }

    /// Property: navigation never leaves 1..=max(total_pages, 1)
    #[test]
    fn prop_navigation_stays_in_bounds(
        len in 0usize..500,
        page_size in 1usize..40,
        navs in prop::collection::vec(arb_nav(), 0..64),
    ) {
        let mut pager = Paginator::try_new(len, page_size).unwrap();
        for nav in &navs {
            apply(&mut pager, nav);
            let page = pager.current_page();
            prop_assert!(page >= 1);
            prop_assert!(page <= pager.total_pages().max(1));
        }
    }

    /// Property: go_to_page lands exactly on clamp(n, 1, total_pages)
    #[test]
    fn prop_go_to_page_clamps(len in 1usize..500, page_size in 1usize..40, n in any::<i64>()) {
        let mut pager = Paginator::try_new(len, page_size).unwrap();
        pager.go_to_page(n);
        let total = pager.total_pages() as i64;
        prop_assert_eq!(pager.current_page() as i64, n.clamp(1, total));
    }

    /// Property: the visible slice is the expected contiguous window
    #[test]
    fn prop_current_items_matches_window(
        len in 0usize..300,
        page_size in 1usize..25,
        navs in prop::collection::vec(arb_nav(), 0..16),
    ) {
        let items: Vec<usize> = (0..len).collect();
        let mut pager = Paginator::try_new(len, page_size).unwrap();
        for nav in &navs {
            apply(&mut pager, nav);
        }

        let visible = pager.current_items(&items);
        prop_assert!(visible.len() <= page_size);
        if len > 0 {
            let start = (pager.current_page() - 1) * page_size;
            let end = (start + page_size).min(len);
            prop_assert_eq!(visible, &items[start..end]);
            prop_assert!(!visible.is_empty());
        } else {
            prop_assert!(visible.is_empty());
        }
    }

    /// Property: shrinking resets to the new last page only when the old one vanished
    #[test]
    fn prop_reset_after_shrink(
        len in 1usize..400,
        page_size in 1usize..30,
        page in 1i64..40,
        removed in 0usize..400,
    ) {
        let mut pager = Paginator::try_new(len, page_size).unwrap();
        pager.go_to_page(page);
        let before = pager.current_page();

        let new_len = len.saturating_sub(removed);
        pager.reset_to_valid_page(new_len);
        let new_total = pager.total_pages();

        if before > new_total && new_total > 0 {
            prop_assert_eq!(pager.current_page(), new_total);
        } else {
            prop_assert_eq!(pager.current_page(), before);
        }
    }

    /// Property: deleting from a paged list never strands the view on a missing page
    #[test]
    fn prop_paged_list_deletes_keep_page_valid(
        len in 1u32..120,
        page_size in 1usize..15,
        page in 1i64..20,
        deletes in prop::collection::vec(0usize..120, 0..60),
    ) {
        let mut list = PagedList::try_new((0..len).collect::<Vec<_>>(), page_size).unwrap();
        list.go_to_page(page);
        for index in deletes {
            list.remove(index % list.len().max(1));
            if !list.is_empty() {
                prop_assert!(!list.current_items().is_empty());
                prop_assert!(list.snapshot().page <= list.snapshot().total_pages);
            }
        }
    }
}

#[test]
fn twenty_three_items_scenario() {
    let items: Vec<u32> = (0..23).collect();
    let mut pager = Paginator::try_new(items.len(), 10).unwrap();
    assert_eq!(pager.total_pages(), 3);

    pager.go_to_page(5);
    assert_eq!(pager.current_page(), 3);
    assert_eq!(pager.current_items(&items), &items[20..23]);

    let shrunk = &items[..9];
    pager.reset_to_valid_page(shrunk.len());
    assert_eq!(pager.total_pages(), 1);
    assert_eq!(pager.current_page(), 1);
    assert_eq!(pager.current_items(shrunk), shrunk);
}

#[test]
fn empty_sequence_scenario() {
    let items: Vec<u32> = Vec::new();
    let mut pager = Paginator::try_new(0, 5).unwrap();
    assert_eq!(pager.total_pages(), 0);
    assert!(pager.current_items(&items).is_empty());
    pager.go_to_next_page();
    assert_eq!(pager.current_page(), 1);
}
