//! End-to-end diary scenarios
//!
//! Drives `DiaryState` through the reducer the way the window does and checks
//! what ends up in the stores.

use diary_core::{
    Action, DayIndex, DiaryState, Mood, PhotoRef, PhotoTarget, ShelfItemId,
};

fn day(i: usize) -> DayIndex {
    DayIndex::new(i).unwrap()
}

fn photo(tag: &str) -> PhotoRef {
    PhotoRef::from_bytes(tag.as_bytes(), "image/png")
}

fn add_day_photo(diary: &mut DiaryState, d: DayIndex, p: PhotoRef) {
    let ticket = diary.photo_ticket(PhotoTarget::Day(d)).unwrap();
    diary
        .update(Action::PhotoIngested { ticket, photo: p })
        .unwrap();
}

// ============================================================================
// Day dialog
// ============================================================================

#[test]
fn test_save_and_reopen_day_five() {
    let mut diary = DiaryState::new();

    diary.update(Action::OpenDay(day(5))).unwrap();
    assert_eq!(diary.day_dialog().unwrap().mood(), Mood::Car);

    diary.update(Action::EditDayText("Had coffee".into())).unwrap();
    diary.update(Action::SaveDay).unwrap();

    let entry = diary.days().get(day(5)).unwrap();
    assert_eq!(entry.text, "Had coffee");
    assert_eq!(entry.mood, Mood::Car);

    diary.update(Action::OpenDay(day(5))).unwrap();
    let dialog = diary.day_dialog().unwrap();
    assert_eq!(dialog.text, "Had coffee");
    assert_eq!(dialog.mood().name(), "Car");
}

#[test]
fn test_saved_photos_come_back() {
    let mut diary = DiaryState::new();
    diary.update(Action::OpenDay(day(12))).unwrap();
    add_day_photo(&mut diary, day(12), photo("beach"));
    add_day_photo(&mut diary, day(12), photo("sunset"));
    diary.update(Action::SaveDay).unwrap();

    let entry = diary.days().get(day(12)).unwrap();
    assert_eq!(entry.photos, vec![photo("beach"), photo("sunset")]);

    diary.update(Action::OpenDay(day(12))).unwrap();
    assert_eq!(diary.day_dialog().unwrap().photos.len(), 2);
}

#[test]
fn test_close_discards_unsaved_changes() {
    let mut diary = DiaryState::new();
    diary.update(Action::OpenDay(day(3))).unwrap();
    diary.update(Action::EditDayText("original".into())).unwrap();
    diary.update(Action::SaveDay).unwrap();

    diary.update(Action::OpenDay(day(3))).unwrap();
    diary.update(Action::EditDayText("rewritten".into())).unwrap();
    add_day_photo(&mut diary, day(3), photo("new"));
    diary.update(Action::CloseDay).unwrap();

    assert!(diary.day_dialog().is_none());
    let entry = diary.days().get(day(3)).unwrap();
    assert_eq!(entry.text, "original");
    assert!(entry.photos.is_empty());
}

#[test]
fn test_close_on_new_day_creates_nothing() {
    let mut diary = DiaryState::new();
    diary.update(Action::OpenDay(day(7))).unwrap();
    diary.update(Action::EditDayText("never saved".into())).unwrap();
    diary.update(Action::CloseDay).unwrap();

    assert!(diary.days().get(day(7)).is_none());
    assert!(diary.days().is_empty());
}

#[test]
fn test_saving_empty_day_still_counts_as_activity() {
    let mut diary = DiaryState::new();
    diary.update(Action::OpenDay(day(0))).unwrap();
    diary.update(Action::SaveDay).unwrap();

    assert_eq!(diary.days().len(), 1);
    assert_eq!(diary.days().get(day(0)).unwrap().text, "");
}

// ============================================================================
// Shelf dialog
// ============================================================================

#[test]
fn test_page_change_autosaves() {
    let mut diary = DiaryState::new();
    let book = ShelfItemId::new("1");

    diary.update(Action::OpenShelfItem(book.clone())).unwrap();
    diary.update(Action::EditPageText("A".into())).unwrap();
    assert_eq!(diary.shelf().page(&book, 0), None);

    diary.update(Action::NextPage).unwrap();
    assert_eq!(diary.shelf().page(&book, 0), Some("A"));

    let dialog = diary.shelf_dialog().unwrap();
    assert_eq!(dialog.page, 1);
    assert!(dialog.page_text.is_empty());

    diary.update(Action::EditPageText("B".into())).unwrap();
    diary.update(Action::PrevPage).unwrap();

    assert_eq!(diary.shelf_dialog().unwrap().page_text, "A");
    assert_eq!(diary.shelf().page(&book, 0), Some("A"));
    assert_eq!(diary.shelf().page(&book, 1), Some("B"));
}

#[test]
fn test_page_cannot_go_below_zero() {
    let mut diary = DiaryState::new();
    diary
        .update(Action::OpenShelfItem(ShelfItemId::new("4")))
        .unwrap();

    for _ in 0..5 {
        diary.update(Action::PrevPage).unwrap();
        assert_eq!(diary.shelf_dialog().unwrap().page, 0);
        assert!(!diary.shelf_dialog().unwrap().can_go_back());
    }
}

#[test]
fn test_reopening_shelf_item_starts_at_first_page() {
    let mut diary = DiaryState::new();
    let sketchbook = ShelfItemId::new("4");

    diary.update(Action::OpenShelfItem(sketchbook.clone())).unwrap();
    diary.update(Action::EditPageText("cat doodle".into())).unwrap();
    diary.update(Action::NextPage).unwrap();
    diary.update(Action::NextPage).unwrap();
    diary.update(Action::EditPageText("tree".into())).unwrap();
    diary.update(Action::CloseShelfItem).unwrap();

    assert!(diary.shelf_dialog().is_none());
    assert_eq!(diary.shelf().page(&sketchbook, 2), Some("tree"));

    diary.update(Action::OpenShelfItem(sketchbook)).unwrap();
    let dialog = diary.shelf_dialog().unwrap();
    assert_eq!(dialog.page, 0);
    assert_eq!(dialog.page_text, "cat doodle");
}

#[test]
fn test_album_collects_photos() {
    let mut diary = DiaryState::new();
    let album = ShelfItemId::new("3");
    diary.update(Action::OpenShelfItem(album.clone())).unwrap();

    for tag in ["one", "two", "three", "four", "five"] {
        let ticket = diary
            .photo_ticket(PhotoTarget::Shelf(album.clone()))
            .unwrap();
        diary
            .update(Action::PhotoIngested {
                ticket,
                photo: photo(tag),
            })
            .unwrap();
    }
    diary.update(Action::CloseShelfItem).unwrap();

    assert_eq!(diary.shelf().photos(&album).len(), 5);
    assert_eq!(diary.shelf().photos(&album)[0], photo("one"));
}

#[test]
fn test_dialogs_are_independent() {
    let mut diary = DiaryState::new();
    let book = ShelfItemId::new("5");

    diary.update(Action::OpenDay(day(9))).unwrap();
    diary.update(Action::OpenShelfItem(book.clone())).unwrap();
    assert!(diary.day_dialog().is_some());
    assert!(diary.shelf_dialog().is_some());

    diary.update(Action::EditDayText("reading".into())).unwrap();
    diary.update(Action::EditPageText("notes".into())).unwrap();

    diary.update(Action::CloseShelfItem).unwrap();
    assert_eq!(diary.day_dialog().unwrap().text, "reading");

    diary.update(Action::SaveDay).unwrap();
    assert_eq!(diary.days().get(day(9)).unwrap().text, "reading");
    assert_eq!(diary.shelf().page(&book, 0), Some("notes"));
}
