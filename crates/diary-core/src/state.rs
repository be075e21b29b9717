//! Diary state and its reducer
//!
//! [`DiaryState`] owns both stores, the catalog, and the two independent
//! dialogs. Every change goes through [`DiaryState::update`].
//!
//! ## Dialog semantics
//!
//! - The day dialog edits a copy of the entry. `SaveDay` writes it back,
//!   `CloseDay` throws it away.
//! - The shelf dialog edits one page at a time. Turning the page or closing
//!   the item writes the page back first.
//!
//! ## Photo results
//!
//! Reading a photo is asynchronous. The caller takes an [`IngestTicket`]
//! before the read starts and hands it back with the result. Each dialog
//! opening has its own [`SessionId`], so a result whose dialog was closed or
//! reopened in the meantime is dropped instead of landing in the wrong place.

use crate::catalog::Catalog;
use crate::error::{DiaryError, DiaryResult};
use crate::store::{DayStore, ShelfStore};
use crate::types::{DayIndex, Mood, PhotoRef, ShelfItem, ShelfItemId, MAX_DAY_PHOTOS};

/// One opening of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

/// Where a photo is headed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoTarget {
    /// Edit buffer of the open day dialog
    Day(DayIndex),
    /// Photo list of the open shelf item
    Shelf(ShelfItemId),
}

/// Proof that a photo read was started for a specific dialog session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestTicket {
    pub target: PhotoTarget,
    pub session: SessionId,
}

/// Open day dialog and its edit buffers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDialog {
    pub day: DayIndex,
    pub text: String,
    pub photos: Vec<PhotoRef>,
    /// Last failed photo read, cleared by the next success or a dismiss
    pub photo_error: Option<String>,
    session: SessionId,
}

impl DayDialog {
    pub fn mood(&self) -> Mood {
        Mood::for_day(self.day)
    }

    pub fn can_add_photo(&self) -> bool {
        self.photos.len() < MAX_DAY_PHOTOS
    }

    pub fn session(&self) -> SessionId {
        self.session
    }
}

/// Open shelf dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfDialog {
    pub item: ShelfItem,
    /// Current page; only meaningful for paged kinds
    pub page: usize,
    /// Edit buffer for the current page
    pub page_text: String,
    pub photo_error: Option<String>,
    session: SessionId,
}

impl ShelfDialog {
    /// Printed page numbers of the open spread (1 and 2 on the first page)
    pub fn spread(&self) -> (usize, usize) {
        (self.page * 2 + 1, self.page * 2 + 2)
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 0
    }

    pub fn session(&self) -> SessionId {
        self.session
    }
}

/// Everything the user can do to the diary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenDay(DayIndex),
    EditDayText(String),
    RemoveDayPhoto(usize),
    SaveDay,
    CloseDay,
    OpenShelfItem(ShelfItemId),
    EditPageText(String),
    NextPage,
    PrevPage,
    CloseShelfItem,
    PhotoIngested { ticket: IngestTicket, photo: PhotoRef },
    PhotoFailed { ticket: IngestTicket, reason: String },
    DismissPhotoError(PhotoTarget),
    EditNotes(String),
}

/// Complete in-memory diary
#[derive(Debug, Clone, Default)]
pub struct DiaryState {
    days: DayStore,
    shelf: ShelfStore,
    catalog: Catalog,
    notes: String,
    day_dialog: Option<DayDialog>,
    shelf_dialog: Option<ShelfDialog>,
    last_session: u64,
}

impl DiaryState {
    /// Empty diary with the default shelf
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty diary with a custom shelf
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn days(&self) -> &DayStore {
        &self.days
    }

    pub fn shelf(&self) -> &ShelfStore {
        &self.shelf
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn day_dialog(&self) -> Option<&DayDialog> {
        self.day_dialog.as_ref()
    }

    pub fn shelf_dialog(&self) -> Option<&ShelfDialog> {
        self.shelf_dialog.as_ref()
    }

    /// Apply one action.
    ///
    /// On error the state is left exactly as it was.
    pub fn update(&mut self, action: Action) -> DiaryResult<()> {
        match action {
            Action::OpenDay(day) => {
                self.open_day(day);
                Ok(())
            }
            Action::EditDayText(text) => {
                self.day_dialog_mut()?.text = text;
                Ok(())
            }
            Action::RemoveDayPhoto(index) => {
                let dialog = self.day_dialog_mut()?;
                if index < dialog.photos.len() {
                    dialog.photos.remove(index);
                }
                Ok(())
            }
            Action::SaveDay => {
                let dialog = self.day_dialog.take().ok_or(DiaryError::NoDayOpen)?;
                tracing::info!(day = %dialog.day, "Day entry saved");
                self.days.save(dialog.day, dialog.text, dialog.photos);
                Ok(())
            }
            Action::CloseDay => {
                if let Some(dialog) = self.day_dialog.take() {
                    tracing::debug!(day = %dialog.day, "Day dialog closed without saving");
                }
                Ok(())
            }
            Action::OpenShelfItem(id) => self.open_shelf_item(&id),
            Action::EditPageText(text) => {
                self.paged_dialog_mut()?.page_text = text;
                Ok(())
            }
            Action::NextPage => self.turn_page(true),
            Action::PrevPage => self.turn_page(false),
            Action::CloseShelfItem => {
                if let Some(dialog) = self.shelf_dialog.take() {
                    commit_page(&mut self.shelf, &dialog);
                    tracing::debug!(item = %dialog.item.id, "Shelf item closed");
                }
                Ok(())
            }
            Action::PhotoIngested { ticket, photo } => self.apply_photo(ticket, photo),
            Action::PhotoFailed { ticket, reason } => self.record_photo_failure(ticket, reason),
            Action::DismissPhotoError(target) => {
                match target {
                    PhotoTarget::Day(day) => {
                        if let Some(dialog) = self.day_dialog.as_mut().filter(|d| d.day == day) {
                            dialog.photo_error = None;
                        }
                    }
                    PhotoTarget::Shelf(id) => {
                        if let Some(dialog) = self.shelf_dialog.as_mut().filter(|d| d.item.id == id) {
                            dialog.photo_error = None;
                        }
                    }
                }
                Ok(())
            }
            Action::EditNotes(text) => {
                self.notes = text;
                Ok(())
            }
        }
    }

    /// Reserve a photo read for the dialog that `target` names.
    ///
    /// Fails when that dialog is not open, when a day already holds the
    /// maximum number of photos, or when the shelf item has no photo list.
    pub fn photo_ticket(&self, target: PhotoTarget) -> DiaryResult<IngestTicket> {
        let session = match &target {
            PhotoTarget::Day(day) => {
                let dialog = self
                    .day_dialog
                    .as_ref()
                    .filter(|d| d.day == *day)
                    .ok_or(DiaryError::NoDayOpen)?;
                if !dialog.can_add_photo() {
                    return Err(DiaryError::PhotoLimitReached(MAX_DAY_PHOTOS));
                }
                dialog.session
            }
            PhotoTarget::Shelf(id) => {
                let dialog = self
                    .shelf_dialog
                    .as_ref()
                    .filter(|d| &d.item.id == id)
                    .ok_or(DiaryError::NoShelfItemOpen)?;
                if !dialog.item.kind.holds_photos() {
                    return Err(DiaryError::NoPhotos(dialog.item.kind));
                }
                dialog.session
            }
        };
        Ok(IngestTicket { target, session })
    }

    fn next_session(&mut self) -> SessionId {
        self.last_session += 1;
        SessionId(self.last_session)
    }

    fn open_day(&mut self, day: DayIndex) {
        let (text, photos) = match self.days.get(day) {
            Some(entry) => (entry.text.clone(), entry.photos.clone()),
            None => (String::new(), Vec::new()),
        };
        let session = self.next_session();
        tracing::debug!(%day, existing = self.days.contains(day), "Day dialog opened");
        self.day_dialog = Some(DayDialog {
            day,
            text,
            photos,
            photo_error: None,
            session,
        });
    }

    fn open_shelf_item(&mut self, id: &ShelfItemId) -> DiaryResult<()> {
        let item = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| DiaryError::UnknownShelfItem(id.to_string()))?;

        if let Some(previous) = self.shelf_dialog.take() {
            commit_page(&mut self.shelf, &previous);
        }

        let page_text = if item.kind.is_paged() {
            self.shelf.page(id, 0).unwrap_or_default().to_string()
        } else {
            String::new()
        };
        let session = self.next_session();
        tracing::debug!(item = %item.id, kind = %item.kind, "Shelf item opened");
        self.shelf_dialog = Some(ShelfDialog {
            item,
            page: 0,
            page_text,
            photo_error: None,
            session,
        });
        Ok(())
    }

    fn turn_page(&mut self, forward: bool) -> DiaryResult<()> {
        let dialog = self
            .shelf_dialog
            .as_mut()
            .ok_or(DiaryError::NoShelfItemOpen)?;
        if !dialog.item.kind.is_paged() {
            return Err(DiaryError::NotPaged(dialog.item.kind));
        }

        commit_page(&mut self.shelf, dialog);

        dialog.page = if forward {
            dialog.page + 1
        } else {
            dialog.page.saturating_sub(1)
        };
        dialog.page_text = self
            .shelf
            .page(&dialog.item.id, dialog.page)
            .unwrap_or_default()
            .to_string();
        Ok(())
    }

    fn apply_photo(&mut self, ticket: IngestTicket, photo: PhotoRef) -> DiaryResult<()> {
        match ticket.target {
            PhotoTarget::Day(day) => {
                let dialog = self
                    .day_dialog
                    .as_mut()
                    .filter(|d| d.day == day && d.session == ticket.session)
                    .ok_or_else(stale)?;
                if !dialog.can_add_photo() {
                    return Err(DiaryError::PhotoLimitReached(MAX_DAY_PHOTOS));
                }
                dialog.photos.push(photo);
                dialog.photo_error = None;
            }
            PhotoTarget::Shelf(id) => {
                let dialog = self
                    .shelf_dialog
                    .as_mut()
                    .filter(|d| d.item.id == id && d.session == ticket.session)
                    .ok_or_else(stale)?;
                if !dialog.item.kind.holds_photos() {
                    return Err(DiaryError::NoPhotos(dialog.item.kind));
                }
                dialog.photo_error = None;
                self.shelf.append_photo(&id, photo);
            }
        }
        Ok(())
    }

    fn record_photo_failure(&mut self, ticket: IngestTicket, reason: String) -> DiaryResult<()> {
        let slot = match &ticket.target {
            PhotoTarget::Day(day) => self
                .day_dialog
                .as_mut()
                .filter(|d| d.day == *day && d.session == ticket.session)
                .map(|d| &mut d.photo_error),
            PhotoTarget::Shelf(id) => self
                .shelf_dialog
                .as_mut()
                .filter(|d| &d.item.id == id && d.session == ticket.session)
                .map(|d| &mut d.photo_error),
        };
        let slot = slot.ok_or_else(stale)?;
        tracing::warn!(reason = %reason, "Photo could not be added");
        *slot = Some(reason);
        Ok(())
    }

    fn day_dialog_mut(&mut self) -> DiaryResult<&mut DayDialog> {
        self.day_dialog.as_mut().ok_or(DiaryError::NoDayOpen)
    }

    fn paged_dialog_mut(&mut self) -> DiaryResult<&mut ShelfDialog> {
        let dialog = self
            .shelf_dialog
            .as_mut()
            .ok_or(DiaryError::NoShelfItemOpen)?;
        if dialog.item.kind.is_paged() {
            Ok(dialog)
        } else {
            Err(DiaryError::NotPaged(dialog.item.kind))
        }
    }
}

/// Write the page buffer back when it differs from what is stored
fn commit_page(store: &mut ShelfStore, dialog: &ShelfDialog) {
    if !dialog.item.kind.is_paged() {
        return;
    }
    let saved = store.page(&dialog.item.id, dialog.page).unwrap_or_default();
    if saved != dialog.page_text {
        store.save_page(&dialog.item.id, dialog.page, dialog.page_text.clone());
    }
}

fn stale() -> DiaryError {
    tracing::debug!("Dropping photo result for a dialog that is no longer open");
    DiaryError::StaleIngest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(i: usize) -> DayIndex {
        DayIndex::new(i).unwrap()
    }

    fn photo(tag: &[u8]) -> PhotoRef {
        PhotoRef::from_bytes(tag, "image/png")
    }

    #[test]
    fn test_open_day_loads_saved_entry() {
        let mut diary = DiaryState::new();
        diary.update(Action::OpenDay(day(2))).unwrap();
        diary.update(Action::EditDayText("walk".into())).unwrap();
        diary.update(Action::SaveDay).unwrap();
        assert!(diary.day_dialog().is_none());

        diary.update(Action::OpenDay(day(2))).unwrap();
        let dialog = diary.day_dialog().unwrap();
        assert_eq!(dialog.text, "walk");
        assert_eq!(dialog.mood(), Mood::Film);
    }

    #[test]
    fn test_open_empty_day_resets_buffers() {
        let mut diary = DiaryState::new();
        diary.update(Action::OpenDay(day(1))).unwrap();
        diary.update(Action::EditDayText("draft".into())).unwrap();
        diary.update(Action::OpenDay(day(4))).unwrap();

        let dialog = diary.day_dialog().unwrap();
        assert_eq!(dialog.day, day(4));
        assert!(dialog.text.is_empty());
        assert!(dialog.photos.is_empty());
    }

    #[test]
    fn test_edit_without_dialog_is_rejected() {
        let mut diary = DiaryState::new();
        assert!(matches!(
            diary.update(Action::EditDayText("x".into())),
            Err(DiaryError::NoDayOpen)
        ));
        assert!(matches!(diary.update(Action::SaveDay), Err(DiaryError::NoDayOpen)));
        assert!(matches!(
            diary.update(Action::NextPage),
            Err(DiaryError::NoShelfItemOpen)
        ));
    }

    #[test]
    fn test_close_without_dialog_is_noop() {
        let mut diary = DiaryState::new();
        assert!(diary.update(Action::CloseDay).is_ok());
        assert!(diary.update(Action::CloseShelfItem).is_ok());
    }

    #[test]
    fn test_remove_day_photo() {
        let mut diary = DiaryState::new();
        diary.update(Action::OpenDay(day(0))).unwrap();
        for tag in [b"a", b"b"] {
            let ticket = diary.photo_ticket(PhotoTarget::Day(day(0))).unwrap();
            diary
                .update(Action::PhotoIngested {
                    ticket,
                    photo: photo(tag),
                })
                .unwrap();
        }

        diary.update(Action::RemoveDayPhoto(0)).unwrap();
        diary.update(Action::RemoveDayPhoto(7)).unwrap();
        assert_eq!(diary.day_dialog().unwrap().photos, vec![photo(b"b")]);
    }

    #[test]
    fn test_vinyl_has_no_pages() {
        let mut diary = DiaryState::new();
        diary
            .update(Action::OpenShelfItem(ShelfItemId::new("2")))
            .unwrap();
        assert!(matches!(
            diary.update(Action::NextPage),
            Err(DiaryError::NotPaged(_))
        ));
        assert!(matches!(
            diary.update(Action::EditPageText("x".into())),
            Err(DiaryError::NotPaged(_))
        ));
        assert_eq!(diary.shelf_dialog().unwrap().page, 0);
    }

    #[test]
    fn test_unknown_shelf_item() {
        let mut diary = DiaryState::new();
        let err = diary
            .update(Action::OpenShelfItem(ShelfItemId::new("nope")))
            .unwrap_err();
        assert!(matches!(err, DiaryError::UnknownShelfItem(id) if id == "nope"));
        assert!(diary.shelf_dialog().is_none());
    }

    #[test]
    fn test_spread_numbers() {
        let mut diary = DiaryState::new();
        diary
            .update(Action::OpenShelfItem(ShelfItemId::new("1")))
            .unwrap();
        assert_eq!(diary.shelf_dialog().unwrap().spread(), (1, 2));
        diary.update(Action::NextPage).unwrap();
        diary.update(Action::NextPage).unwrap();
        assert_eq!(diary.shelf_dialog().unwrap().spread(), (5, 6));
    }

    #[test]
    fn test_blank_pages_create_no_records() {
        let mut diary = DiaryState::new();
        let id = ShelfItemId::new("5");
        diary.update(Action::OpenShelfItem(id.clone())).unwrap();
        diary.update(Action::NextPage).unwrap();
        diary.update(Action::NextPage).unwrap();
        diary.update(Action::CloseShelfItem).unwrap();
        assert!(diary.shelf().content(&id).is_none());
    }

    #[test]
    fn test_switching_shelf_items_commits_page() {
        let mut diary = DiaryState::new();
        let book = ShelfItemId::new("1");
        diary.update(Action::OpenShelfItem(book.clone())).unwrap();
        diary.update(Action::EditPageText("chapter one".into())).unwrap();
        diary
            .update(Action::OpenShelfItem(ShelfItemId::new("4")))
            .unwrap();

        assert_eq!(diary.shelf().page(&book, 0), Some("chapter one"));
        assert!(diary.shelf_dialog().unwrap().page_text.is_empty());
    }

    #[test]
    fn test_notes() {
        let mut diary = DiaryState::new();
        diary.update(Action::EditNotes("buy paint".into())).unwrap();
        assert_eq!(diary.notes(), "buy paint");
    }

    #[test]
    fn test_sessions_increase() {
        let mut diary = DiaryState::new();
        diary.update(Action::OpenDay(day(0))).unwrap();
        let first = diary.day_dialog().unwrap().session();
        diary.update(Action::OpenDay(day(0))).unwrap();
        let second = diary.day_dialog().unwrap().session();
        assert!(second > first);
    }
}
