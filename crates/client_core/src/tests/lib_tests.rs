use super::*;
use anyhow::anyhow;
use async_trait::async_trait;
use shared::domain::{SessionKind, StoryCategory, StoryId, TimeSlot};
use std::sync::atomic::{AtomicUsize, Ordering};
use storage::SeedStore;

fn client() -> Arc<MentorHubClient> {
    MentorHubClient::new(Arc::new(SeedStore::builtin().expect("seed")))
}

struct BrokenRecords;

#[async_trait]
impl RecordSource for BrokenRecords {
    async fn list_mentors(&self) -> anyhow::Result<Vec<Mentor>> {
        Err(anyhow!("disk went away"))
    }
    async fn list_stories(&self) -> anyhow::Result<Vec<Story>> {
        Err(anyhow!("disk went away"))
    }
    async fn get_mentor(&self, _mentor_id: MentorId) -> anyhow::Result<Option<Mentor>> {
        Err(anyhow!("disk went away"))
    }
    async fn profile_details(
        &self,
        _mentor_id: MentorId,
    ) -> anyhow::Result<Option<ProfileDetails>> {
        Ok(None)
    }
}

#[derive(Default)]
struct CountingBooking {
    calls: AtomicUsize,
}

#[async_trait]
impl BookingService for CountingBooking {
    async fn book(&self, _request: &BookingRequest) -> Result<BookingConfirmation, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ServiceError::new(ErrorCode::Unavailable, "booking desk closed"))
    }
}

#[tokio::test]
async fn login_with_complete_credentials_yields_identity() {
    let identity = client()
        .login(&Credentials::new(" jamie@example.org ", "pw"))
        .await
        .expect("login");
    assert_eq!(identity.identifier, "jamie@example.org");
    assert_eq!(identity.display_name, "jamie");
}

#[tokio::test]
async fn login_with_missing_password_is_unauthorized() {
    let err = client()
        .login(&Credentials::new("jamie", ""))
        .await
        .expect_err("missing password");
    assert_eq!(err.code, ErrorCode::Unauthorized);
}

#[tokio::test]
async fn catalog_lists_seed_records_in_source_order() {
    let catalog = client().load_catalog().await.expect("catalog");
    let mentor_ids: Vec<i64> = catalog.mentors.iter().map(|m| m.id.0).collect();
    let story_ids: Vec<i64> = catalog.stories.iter().map(|s| s.id.0).collect();
    assert_eq!(mentor_ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(story_ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn record_failures_surface_as_unavailable() {
    let client = MentorHubClient::new(Arc::new(BrokenRecords));
    let err = client.load_catalog().await.expect_err("broken");
    assert_eq!(err.code, ErrorCode::Unavailable);
    assert!(err.message.contains("disk went away"));

    let err = client.profile_details(MentorId(1)).await.expect_err("none");
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn unknown_mentor_is_not_found() {
    let client = client();
    assert_eq!(
        client.mentor(MentorId(42)).await.expect_err("missing").code,
        ErrorCode::NotFound
    );
    assert_eq!(
        client.mentor(MentorId(6)).await.expect("mentor").name,
        "Robert Thompson"
    );
}

#[tokio::test]
async fn booking_and_sharing_leave_the_catalog_untouched() {
    let client = client();
    let details = client.profile_details(MentorId(2)).await.expect("details");
    let mut form = BookingForm::default();
    form.open(&details);
    let request = form.request(MentorId(2), &details).expect("request");
    let confirmation = client.book(&request).await.expect("booked");
    assert_eq!(confirmation.notice, BOOKING_CONFIRMED_NOTICE);

    let author = UserIdentity::from_identifier("jamie");
    let story = client
        .share_story(
            &author,
            &StoryDraft {
                title: "Week one".into(),
                content: "Still here.".into(),
                category: StoryCategory::Recovery,
                is_anonymous: false,
                tags: Vec::new(),
            },
        )
        .await
        .expect("shared");
    assert_eq!(story.id, StoryId(6));

    let catalog = client.load_catalog().await.expect("catalog");
    assert_eq!(catalog.stories.len(), 5);
    assert!(catalog.stories.iter().all(|s| s.title != "Week one"));
}

#[tokio::test]
async fn injected_booking_service_is_used() {
    let records: Arc<dyn RecordSource> = Arc::new(SeedStore::builtin().expect("seed"));
    let booking = Arc::new(CountingBooking::default());
    let client = MentorHubClient::new_with_dependencies(
        records.clone(),
        Arc::new(MockAuthProvider),
        booking.clone(),
        Arc::new(MockStorySubmission::new(records)),
    );
    let err = client
        .book(&BookingRequest {
            mentor_id: MentorId(1),
            session: SessionKind::Video,
            slot: TimeSlot {
                day: "Today".into(),
                time: "2:00 PM".into(),
                available: true,
            },
        })
        .await
        .expect_err("desk closed");
    assert_eq!(err.code, ErrorCode::Unavailable);
    assert_eq!(booking.calls.load(Ordering::SeqCst), 1);
}
