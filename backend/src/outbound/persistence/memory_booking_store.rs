//! In-memory `BookingStore` implementation.
//!
//! Status writes are compare-and-swap under the write lock; list queries
//! filter the arena with [`BookingSelection::matches`], sort by start
//! descending and apply the page window last.

use std::cmp::Reverse;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageRequest;

use crate::domain::ports::{BookingStore, BookingStoreError, NewBooking};
use crate::domain::{Booking, BookingId, BookingSelection, BookingStatus, ItemId, UserId};

/// Arena-backed booking store with versioned status writes.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collect<F>(&self, filter: F, page: PageRequest) -> Result<Vec<Booking>, BookingStoreError>
    where
        F: Fn(&Booking) -> bool,
    {
        let bookings = self.bookings.read().map_err(poisoned)?;
        let mut matched: Vec<Booking> = bookings
            .iter()
            .filter(|booking| filter(booking))
            .cloned()
            .collect();
        matched.sort_by_key(|booking| Reverse(booking.start));

        let offset = usize::try_from(page.offset()).unwrap_or_default();
        let limit = usize::try_from(page.limit()).unwrap_or_default();
        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }
}

fn poisoned(_: impl std::fmt::Debug) -> BookingStoreError {
    BookingStoreError::connection("booking store lock poisoned")
}

fn next_id(len: usize) -> Result<i64, BookingStoreError> {
    let len =
        i64::try_from(len).map_err(|_| BookingStoreError::query("booking arena exhausted"))?;
    Ok(len.saturating_add(1))
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingStoreError> {
        let mut bookings = self.bookings.write().map_err(poisoned)?;
        let id = BookingId(next_id(bookings.len())?);
        let stored = Booking {
            id,
            item_id: booking.item_id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
            status: BookingStatus::Waiting,
            version: 0,
        };
        bookings.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingStoreError> {
        let bookings = self.bookings.read().map_err(poisoned)?;
        Ok(bookings.iter().find(|booking| booking.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: BookingId,
        expected_version: u64,
        status: BookingStatus,
    ) -> Result<Booking, BookingStoreError> {
        let mut bookings = self.bookings.write().map_err(poisoned)?;
        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(BookingStoreError::Missing { booking_id: id })?;
        if booking.version != expected_version {
            return Err(BookingStoreError::StaleVersion {
                booking_id: id,
                expected: expected_version,
            });
        }
        booking.status = status;
        booking.version = booking.version.saturating_add(1);
        Ok(booking.clone())
    }

    async fn list_for_booker(
        &self,
        booker: UserId,
        selection: BookingSelection,
        page: PageRequest,
    ) -> Result<Vec<Booking>, BookingStoreError> {
        self.collect(
            |booking| booking.booker_id == booker && selection.matches(booking),
            page,
        )
    }

    async fn list_for_items(
        &self,
        items: &[ItemId],
        selection: BookingSelection,
        page: PageRequest,
    ) -> Result<Vec<Booking>, BookingStoreError> {
        self.collect(
            |booking| items.contains(&booking.item_id) && selection.matches(booking),
            page,
        )
    }

    async fn last_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingStoreError> {
        let bookings = self.bookings.read().map_err(poisoned)?;
        Ok(bookings
            .iter()
            .filter(|booking| {
                booking.item_id == item
                    && booking.status == BookingStatus::Approved
                    && booking.start < now
            })
            .max_by_key(|booking| booking.start)
            .cloned())
    }

    async fn next_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingStoreError> {
        let bookings = self.bookings.read().map_err(poisoned)?;
        Ok(bookings
            .iter()
            .filter(|booking| {
                booking.item_id == item
                    && booking.status == BookingStatus::Approved
                    && booking.start > now
            })
            .min_by_key(|booking| booking.start)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const BOOKER: UserId = UserId(2);
    const ITEM: ItemId = ItemId(10);

    async fn seed(store: &MemoryBookingStore, start_offset_hours: i64) -> Booking {
        let now = Utc::now();
        store
            .create(NewBooking {
                item_id: ITEM,
                booker_id: BOOKER,
                start: now + Duration::hours(start_offset_hours),
                end: now + Duration::hours(start_offset_hours + 1),
            })
            .await
            .expect("booking stored")
    }

    #[tokio::test]
    async fn create_starts_waiting_at_version_zero() {
        let store = MemoryBookingStore::new();
        let stored = seed(&store, 1).await;

        assert_eq!(stored.id, BookingId(1));
        assert_eq!(stored.status, BookingStatus::Waiting);
        assert_eq!(stored.version, 0);
    }

    #[tokio::test]
    async fn update_status_increments_the_version() {
        let store = MemoryBookingStore::new();
        let stored = seed(&store, 1).await;

        let updated = store
            .update_status(stored.id, 0, BookingStatus::Approved)
            .await
            .expect("status updated");

        assert_eq!(updated.status, BookingStatus::Approved);
        assert_eq!(updated.version, 1);
    }

    #[tokio::test]
    async fn stale_version_writes_fail_and_change_nothing() {
        let store = MemoryBookingStore::new();
        let stored = seed(&store, 1).await;
        store
            .update_status(stored.id, 0, BookingStatus::Approved)
            .await
            .expect("first decision");

        let error = store
            .update_status(stored.id, 0, BookingStatus::Rejected)
            .await
            .expect_err("stale write");

        assert_eq!(
            error,
            BookingStoreError::StaleVersion {
                booking_id: stored.id,
                expected: 0
            }
        );
        let current = store
            .find_by_id(stored.id)
            .await
            .expect("lookup")
            .expect("booking exists");
        assert_eq!(current.status, BookingStatus::Approved);
        assert_eq!(current.version, 1);
    }

    #[tokio::test]
    async fn updating_a_missing_booking_fails() {
        let store = MemoryBookingStore::new();

        let error = store
            .update_status(BookingId(9), 0, BookingStatus::Approved)
            .await
            .expect_err("missing booking");

        assert_eq!(
            error,
            BookingStoreError::Missing {
                booking_id: BookingId(9)
            }
        );
    }

    #[tokio::test]
    async fn listings_are_ordered_start_descending() {
        let store = MemoryBookingStore::new();
        seed(&store, 1).await;
        seed(&store, 5).await;
        seed(&store, 3).await;

        let listed = store
            .list_for_booker(BOOKER, BookingSelection::All, PageRequest::first())
            .await
            .expect("listing");

        let ids: Vec<BookingId> = listed.iter().map(|booking| booking.id).collect();
        assert_eq!(ids, vec![BookingId(2), BookingId(3), BookingId(1)]);
    }

    #[tokio::test]
    async fn page_window_snaps_to_whole_pages() {
        let store = MemoryBookingStore::new();
        for offset in 1..=7 {
            seed(&store, offset).await;
        }

        // from=5, size=2 serves page 2, records at offsets 4 and 5.
        let page = PageRequest::new(5, 2).expect("valid page");
        let listed = store
            .list_for_booker(BOOKER, BookingSelection::All, page)
            .await
            .expect("listing");

        let ids: Vec<BookingId> = listed.iter().map(|booking| booking.id).collect();
        assert_eq!(ids, vec![BookingId(3), BookingId(2)]);
    }

    #[tokio::test]
    async fn temporal_selections_partition_the_arena() {
        let store = MemoryBookingStore::new();
        let now = Utc::now();
        let past = store
            .create(NewBooking {
                item_id: ITEM,
                booker_id: BOOKER,
                start: now - Duration::hours(3),
                end: now - Duration::hours(2),
            })
            .await
            .expect("past booking");
        let current = store
            .create(NewBooking {
                item_id: ITEM,
                booker_id: BOOKER,
                start: now - Duration::hours(1),
                end: now + Duration::hours(1),
            })
            .await
            .expect("current booking");
        let future = seed(&store, 2).await;

        let ended = store
            .list_for_booker(BOOKER, BookingSelection::EndedBefore { now }, PageRequest::first())
            .await
            .expect("past listing");
        let running = store
            .list_for_booker(BOOKER, BookingSelection::Current { now }, PageRequest::first())
            .await
            .expect("current listing");
        let upcoming = store
            .list_for_booker(BOOKER, BookingSelection::StartsAfter { now }, PageRequest::first())
            .await
            .expect("future listing");

        assert_eq!(ended.first().map(|booking| booking.id), Some(past.id));
        assert_eq!(running.first().map(|booking| booking.id), Some(current.id));
        assert_eq!(upcoming.first().map(|booking| booking.id), Some(future.id));
    }

    #[tokio::test]
    async fn last_and_next_consider_only_approved_bookings() {
        let store = MemoryBookingStore::new();
        let now = Utc::now();
        let past = store
            .create(NewBooking {
                item_id: ITEM,
                booker_id: BOOKER,
                start: now - Duration::hours(2),
                end: now - Duration::hours(1),
            })
            .await
            .expect("past booking");
        store
            .update_status(past.id, 0, BookingStatus::Approved)
            .await
            .expect("past approved");
        // Waiting future booking must not surface as next.
        seed(&store, 2).await;
        let far_future = seed(&store, 6).await;
        store
            .update_status(far_future.id, 0, BookingStatus::Approved)
            .await
            .expect("future approved");

        let last = store.last_for_item(ITEM, now).await.expect("last lookup");
        let next = store.next_for_item(ITEM, now).await.expect("next lookup");

        assert_eq!(last.map(|booking| booking.id), Some(past.id));
        assert_eq!(next.map(|booking| booking.id), Some(far_future.id));
    }
}
