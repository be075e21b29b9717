//! Property-based tests for the diary stores and reducer
//!
//! Uses proptest to check the store contracts over arbitrary inputs.

use diary_core::{
    Action, DayIndex, DayStore, DiaryState, Mood, PhotoRef, ShelfItemId, ShelfStore,
    DAYS_IN_MONTH,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn day_strategy() -> impl Strategy<Value = DayIndex> {
    (0..DAYS_IN_MONTH).prop_map(|i| DayIndex::new(i).expect("in range"))
}

fn photos_strategy() -> impl Strategy<Value = Vec<PhotoRef>> {
    prop::collection::vec(
        prop::collection::vec(any::<u8>(), 0..64)
            .prop_map(|bytes| PhotoRef::from_bytes(&bytes, "image/png")),
        0..=3,
    )
}

/// Page navigation steps
#[derive(Debug, Clone)]
enum PageOp {
    Next,
    Prev,
    Write(String),
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(PageOp::Next),
            3 => Just(PageOp::Prev),
            2 => "[a-z ]{0,12}".prop_map(PageOp::Write),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Whatever is saved for a day is what comes back
    #[test]
    fn day_save_roundtrip(d in day_strategy(), text in ".{0,200}", photos in photos_strategy()) {
        let mut store = DayStore::new();
        store.save(d, text.clone(), photos.clone());

        let entry = store.get(d).unwrap();
        prop_assert_eq!(&entry.text, &text);
        prop_assert_eq!(&entry.photos, &photos);
        prop_assert_eq!(entry.mood, Mood::for_day(d));
    }

    /// Saving one page never changes another
    #[test]
    fn pages_are_isolated(
        a in 0usize..50,
        b in 0usize..50,
        first in "[a-z]{1,20}",
        second in "[a-z]{1,20}",
    ) {
        prop_assume!(a != b);
        let mut store = ShelfStore::new();
        let id = ShelfItemId::new("1");
        store.save_page(&id, a, first.clone());
        store.save_page(&id, b, second.clone());

        prop_assert_eq!(store.page(&id, a), Some(first.as_str()));
        prop_assert_eq!(store.page(&id, b), Some(second.as_str()));
    }

    /// Page index tracks a counter clamped at zero, and every written page
    /// is in the store once the book is closed
    #[test]
    fn paging_matches_clamped_counter(ops in page_ops_strategy(40)) {
        let mut diary = DiaryState::new();
        let book = ShelfItemId::new("5");
        diary.update(Action::OpenShelfItem(book.clone())).unwrap();

        let mut expected_page = 0usize;
        let mut written = std::collections::HashMap::new();

        for op in ops {
            match op {
                PageOp::Next => {
                    diary.update(Action::NextPage).unwrap();
                    expected_page += 1;
                }
                PageOp::Prev => {
                    diary.update(Action::PrevPage).unwrap();
                    expected_page = expected_page.saturating_sub(1);
                }
                PageOp::Write(text) => {
                    diary.update(Action::EditPageText(text.clone())).unwrap();
                    written.insert(expected_page, text);
                }
            }
            prop_assert_eq!(diary.shelf_dialog().unwrap().page, expected_page);
        }

        diary.update(Action::CloseShelfItem).unwrap();
        for (page, text) in written {
            let stored = diary.shelf().page(&book, page).unwrap_or_default();
            prop_assert_eq!(stored, text.as_str());
        }
    }

    /// Closing a day dialog never changes the store
    #[test]
    fn close_never_writes(d in day_strategy(), saved in ".{0,50}", draft in ".{0,50}") {
        let mut diary = DiaryState::new();
        diary.update(Action::OpenDay(d)).unwrap();
        diary.update(Action::EditDayText(saved.clone())).unwrap();
        diary.update(Action::SaveDay).unwrap();

        diary.update(Action::OpenDay(d)).unwrap();
        diary.update(Action::EditDayText(draft)).unwrap();
        diary.update(Action::CloseDay).unwrap();

        prop_assert_eq!(&diary.days().get(d).unwrap().text, &saved);
    }
}
