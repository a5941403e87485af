// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are generic over the [`Store`] backend and take it by
//! exclusive reference. Holding the store exclusively across a handler
//! call is what makes the check-then-write sequences (overlap check
//! before booking insert, open-request check before resolution) atomic.

use std::str::FromStr;

use campstay::{
    ApprovalOutcome, BookingCreated, BookingRequest, calculate_listing_analytics,
};
use campstay_domain::{
    ApprovalRequest, Booking, BookingId, BookingStatus, CampgroundKind, DomainError, Listing,
    ListingId, Location, NewApprovalRequest, NewListing, NewLocation, NewReview, Notification,
    NotificationId, RequestId, Review, booking_status, display_amount, validate_listing_fields,
    validate_location_fields,
};
use campstay_store::Store;
use time::OffsetDateTime;

use crate::auth::{Caller, require_admin};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddReviewRequest, AddReviewResponse, BookingInfo, CancelBookingResponse,
    CreateBookingRequest, CreateBookingResponse, GetListingAnalyticsResponse, NotificationInfo,
    PendingRequestInfo, RejectRequestRequest, ResolveRequestResponse, SubmitListingRequest,
    SubmitListingResponse,
};

/// Submits a new campground listing for approval.
///
/// Creates the location record, the unapproved listing, and its pending
/// approval request in one step. All field validation happens before the
/// first write.
///
/// # Arguments
///
/// * `store` - The storage backend
/// * `caller` - The authenticated caller, who becomes the listing owner
/// * `request` - The submitted listing fields
///
/// # Errors
///
/// Returns an error if:
/// - The campground kind string is not a recognized category
/// - The title, capacity, price, or coordinates fail validation
/// - A write fails
pub fn submit_listing<S: Store>(
    store: &mut S,
    caller: &Caller,
    request: SubmitListingRequest,
) -> Result<SubmitListingResponse, ApiError> {
    let kind: CampgroundKind =
        CampgroundKind::from_str(&request.kind).map_err(translate_domain_error)?;

    let location: NewLocation = NewLocation {
        place: request.place,
        latitude: request.latitude,
        longitude: request.longitude,
    };

    validate_listing_fields(&request.title, request.capacity, request.price)
        .map_err(translate_domain_error)?;
    validate_location_fields(&location).map_err(translate_domain_error)?;

    let stored_location: Location = store.insert_location(location)?;

    let listing: Listing = store.insert_listing(NewListing {
        owner_id: caller.user_id,
        title: request.title,
        description: request.description,
        capacity: request.capacity,
        kind,
        price: request.price,
        location_id: stored_location.location_id,
    })?;

    let approval: ApprovalRequest = store.insert_request(NewApprovalRequest {
        listing_id: listing.listing_id,
        requested_by: caller.user_id,
    })?;

    tracing::info!(
        listing_id = %listing.listing_id,
        request_id = %approval.request_id,
        owner_id = %caller.user_id,
        "listing submitted for approval"
    );

    Ok(SubmitListingResponse {
        listing_id: listing.listing_id,
        location_id: stored_location.location_id,
        request_id: approval.request_id,
        message: format!(
            "Listing '{}' submitted and awaiting approval",
            listing.title
        ),
    })
}

/// Approves a pending listing request. Admin only.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an administrator
/// - The request or its listing does not exist
/// - The request has already been resolved
pub fn approve_request<S: Store>(
    store: &mut S,
    caller: &Caller,
    request_id: RequestId,
) -> Result<ResolveRequestResponse, ApiError> {
    require_admin(caller, "approve_request")?;

    let request: ApprovalRequest = store.request(request_id)?;
    let listing: Listing = store.listing(request.listing_id)?;

    let outcome: ApprovalOutcome =
        campstay::approve_request(&request, &listing).map_err(translate_core_error)?;

    store.update_request(&outcome.request)?;
    store.set_listing_approved(listing.listing_id, outcome.listing_approved)?;
    store.insert_notification(outcome.owner_notice)?;

    tracing::info!(
        request_id = %request_id,
        listing_id = %listing.listing_id,
        admin_id = %caller.user_id,
        "approval request approved"
    );

    Ok(ResolveRequestResponse {
        request_id,
        listing_id: listing.listing_id,
        status: outcome.request.status.to_string(),
        message: format!("Listing '{}' approved", listing.title),
    })
}

/// Rejects a pending listing request with a reason. Admin only.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an administrator
/// - The reason is empty or whitespace-only
/// - The request or its listing does not exist
/// - The request has already been resolved
pub fn reject_request<S: Store>(
    store: &mut S,
    caller: &Caller,
    request: RejectRequestRequest,
) -> Result<ResolveRequestResponse, ApiError> {
    require_admin(caller, "reject_request")?;

    let stored: ApprovalRequest = store.request(request.request_id)?;
    let listing: Listing = store.listing(stored.listing_id)?;

    let outcome: ApprovalOutcome =
        campstay::reject_request(&stored, &listing, &request.reason)
            .map_err(translate_core_error)?;

    store.update_request(&outcome.request)?;
    store.set_listing_approved(listing.listing_id, outcome.listing_approved)?;
    store.insert_notification(outcome.owner_notice)?;

    tracing::info!(
        request_id = %request.request_id,
        listing_id = %listing.listing_id,
        admin_id = %caller.user_id,
        "approval request rejected"
    );

    Ok(ResolveRequestResponse {
        request_id: request.request_id,
        listing_id: listing.listing_id,
        status: outcome.request.status.to_string(),
        message: format!("Listing '{}' rejected", listing.title),
    })
}

/// Lists all pending approval requests, oldest first. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an administrator or a read
/// fails.
pub fn list_pending_requests<S: Store>(
    store: &mut S,
    caller: &Caller,
) -> Result<Vec<PendingRequestInfo>, ApiError> {
    require_admin(caller, "list_pending_requests")?;

    let pending: Vec<ApprovalRequest> = store.list_pending_requests()?;
    let mut infos: Vec<PendingRequestInfo> = Vec::with_capacity(pending.len());
    for request in pending {
        let listing: Listing = store.listing(request.listing_id)?;
        infos.push(PendingRequestInfo {
            request_id: request.request_id,
            listing_id: request.listing_id,
            listing_title: listing.title,
            requested_by: request.requested_by,
        });
    }
    Ok(infos)
}

/// Books a listing for the caller.
///
/// The caller becomes the booking guest; the listing owner receives a
/// notification. The response carries the status derived from `now`.
///
/// # Errors
///
/// Returns an error if:
/// - The listing does not exist
/// - The listing is not open for bookings
/// - The caller owns the listing
/// - The guest count or date range fails validation
/// - The dates overlap an existing non-cancelled booking
pub fn create_booking<S: Store>(
    store: &mut S,
    caller: &Caller,
    request: CreateBookingRequest,
    now: OffsetDateTime,
) -> Result<CreateBookingResponse, ApiError> {
    let listing: Listing = store.listing(request.listing_id)?;
    let existing: Vec<Booking> = store.bookings_for_listing(request.listing_id)?;

    let booking_request: BookingRequest = BookingRequest {
        guest_id: caller.user_id,
        guest_name: caller.name.clone(),
        listing_id: request.listing_id,
        check_in: request.check_in,
        check_out: request.check_out,
        guest_count: request.guest_count,
    };

    let created: BookingCreated =
        campstay::create_booking(&listing, &existing, &booking_request, now)
            .map_err(translate_core_error)?;

    let booking: Booking = store.insert_booking(created.booking)?;
    store.insert_notification(created.owner_notice)?;

    tracing::info!(
        booking_id = %booking.booking_id,
        listing_id = %listing.listing_id,
        guest_id = %caller.user_id,
        "booking created"
    );

    Ok(CreateBookingResponse {
        booking_id: booking.booking_id,
        listing_id: booking.listing_id,
        check_in: booking.check_in,
        check_out: booking.check_out,
        guest_count: booking.guest_count,
        amount: display_amount(booking.amount),
        status: booking_status(&booking, now.date()).to_string(),
        message: format!("Booked '{}'", listing.title),
    })
}

/// Cancels one of the caller's bookings.
///
/// The booking is marked cancelled rather than deleted, so listing
/// history and analytics stay intact.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The caller is not the booking's guest
/// - The booking has already been cancelled
pub fn cancel_booking<S: Store>(
    store: &mut S,
    caller: &Caller,
    booking_id: BookingId,
    now: OffsetDateTime,
) -> Result<CancelBookingResponse, ApiError> {
    let booking: Booking = store.booking(booking_id)?;

    let cancelled: Booking = campstay::cancel_booking(&booking, caller.user_id, now)
        .map_err(translate_core_error)?;
    store.update_booking(&cancelled)?;

    tracing::info!(
        booking_id = %booking_id,
        guest_id = %caller.user_id,
        "booking cancelled"
    );

    Ok(CancelBookingResponse {
        booking_id,
        status: BookingStatus::Cancelled.to_string(),
        message: String::from("Booking cancelled"),
    })
}

/// Lists the caller's bookings, newest first, with derived statuses.
///
/// # Errors
///
/// Returns an error if a read fails.
pub fn get_user_bookings<S: Store>(
    store: &mut S,
    caller: &Caller,
    now: OffsetDateTime,
) -> Result<Vec<BookingInfo>, ApiError> {
    let mut bookings: Vec<Booking> = store.bookings_for_user(caller.user_id)?;
    bookings.sort_by_key(|b| std::cmp::Reverse((b.created_at, b.booking_id)));

    let mut infos: Vec<BookingInfo> = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let listing: Listing = store.listing(booking.listing_id)?;
        infos.push(BookingInfo {
            booking_id: booking.booking_id,
            listing_id: booking.listing_id,
            listing_title: listing.title,
            check_in: booking.check_in,
            check_out: booking.check_out,
            guest_count: booking.guest_count,
            amount: display_amount(booking.amount),
            status: booking_status(&booking, now.date()).to_string(),
        });
    }
    Ok(infos)
}

/// Reviews a listing the caller has completed a stay at.
///
/// # Errors
///
/// Returns an error if:
/// - The listing does not exist
/// - The caller has no completed, non-cancelled stay on the listing
/// - The rating is outside 1 through 5
pub fn add_review<S: Store>(
    store: &mut S,
    caller: &Caller,
    request: AddReviewRequest,
    now: OffsetDateTime,
) -> Result<AddReviewResponse, ApiError> {
    let listing: Listing = store.listing(request.listing_id)?;
    let bookings: Vec<Booking> = store.bookings_for_listing(request.listing_id)?;

    let review: NewReview = campstay::add_review(
        caller.user_id,
        listing.listing_id,
        &bookings,
        request.rating,
        &request.content,
        now.date(),
        now,
    )
    .map_err(translate_core_error)?;

    let stored: Review = store.insert_review(review)?;

    tracing::info!(
        review_id = %stored.review_id,
        listing_id = %listing.listing_id,
        reviewer_id = %caller.user_id,
        "review added"
    );

    Ok(AddReviewResponse {
        review_id: stored.review_id,
        listing_id: listing.listing_id,
        rating: stored.rating,
        message: format!("Review added for '{}'", listing.title),
    })
}

/// Returns a listing's derived statistics. Owner only.
///
/// # Errors
///
/// Returns an error if:
/// - The listing does not exist
/// - The caller does not own the listing
pub fn get_listing_analytics<S: Store>(
    store: &mut S,
    caller: &Caller,
    listing_id: ListingId,
    now: OffsetDateTime,
) -> Result<GetListingAnalyticsResponse, ApiError> {
    let listing: Listing = store.listing(listing_id)?;

    // Rule: analytics are visible to the owner alone
    if listing.owner_id != caller.user_id {
        tracing::warn!(
            listing_id = %listing_id,
            user_id = %caller.user_id,
            "analytics request refused for non-owner"
        );
        return Err(translate_domain_error(DomainError::NotListingOwner {
            listing_id,
        }));
    }

    let bookings: Vec<Booking> = store.bookings_for_listing(listing_id)?;
    let reviews: Vec<Review> = store.reviews_for_listing(listing_id)?;

    Ok(GetListingAnalyticsResponse {
        listing_id,
        analytics: calculate_listing_analytics(
            &bookings,
            &reviews,
            listing.capacity,
            now.date(),
        ),
    })
}

/// Lists the caller's notifications, newest first.
///
/// # Errors
///
/// Returns an error if a read fails.
pub fn list_notifications<S: Store>(
    store: &mut S,
    caller: &Caller,
) -> Result<Vec<NotificationInfo>, ApiError> {
    let mut notifications: Vec<Notification> = store.notifications_for_user(caller.user_id)?;
    notifications.sort_by_key(|n| std::cmp::Reverse(n.notification_id));

    Ok(notifications
        .into_iter()
        .map(|n| NotificationInfo {
            notification_id: n.notification_id,
            content: n.content,
            viewed: n.viewed,
        })
        .collect())
}

/// Marks one of the caller's notifications as viewed.
///
/// # Errors
///
/// Returns an error if:
/// - The notification does not exist
/// - The notification is addressed to someone else
pub fn mark_notification_viewed<S: Store>(
    store: &mut S,
    caller: &Caller,
    notification_id: NotificationId,
) -> Result<NotificationInfo, ApiError> {
    let notification: Notification = store.notification(notification_id)?;

    // Rule: only the recipient may touch a notification
    if notification.recipient_id != caller.user_id {
        return Err(ApiError::Forbidden {
            action: String::from("mark_notification_viewed"),
            message: format!(
                "Notification {notification_id} is not addressed to the caller"
            ),
        });
    }

    store.mark_notification_viewed(notification_id)?;

    Ok(NotificationInfo {
        notification_id,
        content: notification.content,
        viewed: true,
    })
}
