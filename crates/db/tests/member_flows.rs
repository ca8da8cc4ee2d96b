//! Upserts, toggles and joined reads behind the member pages.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use salle_core::equipment_loadout::build_loadout;
use salle_core::statistics::FencerTotals;
use salle_db::models::event::CreateEvent;
use salle_db::models::event_participation::UpsertParticipation;
use salle_db::models::event_reaction::UpsertEventReaction;
use salle_db::models::gallery::CreateEventPhoto;
use salle_db::models::payment_status::UpdatePaymentStatus;
use salle_db::models::user::CreateUser;
use salle_db::repositories::{
    EquipmentItemRepo, EventParticipationRepo, EventPhotoRepo, EventReactionRepo, EventRepo,
    PaymentStatusRepo, PhotoLikeRepo, UserEquipmentRepo, UserRepo,
};
use sqlx::PgPool;

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.cz"),
        first_name: String::new(),
        last_name: String::new(),
        password_hash: "not-a-real-hash".to_string(),
        role_id: 2,
    }
}

fn event_in(days: i64) -> CreateEvent {
    CreateEvent {
        title: format!("Event {days}"),
        description: None,
        start_date: Utc::now() + Duration::days(days),
        end_date: None,
        location: None,
        external_link: None,
        event_type: None,
        gender_scope: None,
    }
}

fn featured_photo(title: &str) -> CreateEventPhoto {
    CreateEventPhoto {
        title: title.to_string(),
        description: String::new(),
        photo_path: format!("photos/{title}.jpg"),
        event_date: None,
        is_featured: true,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_like_toggle_round_trip(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("a")).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("b")).await.unwrap();
    let photo = EventPhotoRepo::create(&pool, None, a.id, &featured_photo("salut"))
        .await
        .unwrap();

    let state = PhotoLikeRepo::toggle(&pool, photo.id, a.id).await.unwrap();
    assert!(state.liked);
    assert_eq!(state.like_count, 1);

    let state = PhotoLikeRepo::toggle(&pool, photo.id, b.id).await.unwrap();
    assert_eq!(state.like_count, 2);

    let state = PhotoLikeRepo::toggle(&pool, photo.id, a.id).await.unwrap();
    assert!(!state.liked);
    assert_eq!(state.like_count, 1);

    let seen_by_b = EventPhotoRepo::find_with_likes(&pool, photo.id, b.id)
        .await
        .unwrap()
        .unwrap();
    assert!(seen_by_b.liked_by_me);
    assert_eq!(seen_by_b.like_count, 1);

    let seen_by_a = EventPhotoRepo::list_featured(&pool, a.id, None, None)
        .await
        .unwrap();
    assert_eq!(seen_by_a.len(), 1);
    assert!(!seen_by_a[0].liked_by_me);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reaction_upsert_and_calendar(pool: PgPool) {
    let me = UserRepo::create(&pool, &new_user("me")).await.unwrap();
    let other = UserRepo::create(&pool, &new_user("other")).await.unwrap();
    let upcoming = EventRepo::create(&pool, &event_in(7)).await.unwrap();
    EventRepo::create(&pool, &event_in(-7)).await.unwrap();

    let going = UpsertEventReaction {
        will_attend: true,
        comment: "Jedu autem".to_string(),
    };
    let first = EventReactionRepo::upsert(&pool, upcoming.id, me.id, &going)
        .await
        .unwrap();
    let second = EventReactionRepo::upsert(
        &pool,
        upcoming.id,
        me.id,
        &UpsertEventReaction {
            will_attend: true,
            comment: "Jedu vlakem".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.comment, "Jedu vlakem");

    EventReactionRepo::upsert(
        &pool,
        upcoming.id,
        other.id,
        &UpsertEventReaction {
            will_attend: false,
            comment: String::new(),
        },
    )
    .await
    .unwrap();

    let now = Utc::now();
    let calendar = EventRepo::list_upcoming_for_user(&pool, me.id, now)
        .await
        .unwrap();
    assert_eq!(calendar.len(), 1);
    assert_eq!(calendar[0].attending_count, 1);
    assert_eq!(calendar[0].my_will_attend, Some(true));
    assert_eq!(calendar[0].my_comment.as_deref(), Some("Jedu vlakem"));

    let past = EventRepo::list_past(&pool, now, 10).await.unwrap();
    assert_eq!(past.len(), 1);

    let reactions = EventReactionRepo::list_for_event(&pool, upcoming.id)
        .await
        .unwrap();
    assert_eq!(reactions.len(), 2);
    assert_eq!(reactions[0].username, "me");
    assert_eq!(
        EventReactionRepo::count_attending(&pool, upcoming.id)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_payment_get_or_create_is_idempotent(pool: PgPool) {
    let (_, profile) = UserRepo::create_with_profile(&pool, &new_user("platic"), None)
        .await
        .unwrap();

    let first = PaymentStatusRepo::get_or_create(&pool, profile.id).await.unwrap();
    let second = PaymentStatusRepo::get_or_create(&pool, profile.id).await.unwrap();
    assert_eq!(first.id, second.id);
    assert!(!first.is_paid);
    assert_eq!(first.amount, None);

    let paid = PaymentStatusRepo::update_for_fencer(
        &pool,
        profile.id,
        &UpdatePaymentStatus {
            is_paid: Some(true),
            amount: Some(Decimal::new(250000, 2)),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(paid.id, first.id);
    assert!(paid.is_paid);
    assert_eq!(paid.amount, Some(Decimal::new(250000, 2)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_equipment_ownership_feeds_loadout(pool: PgPool) {
    let (_, profile) = UserRepo::create_with_profile(&pool, &new_user("vybava"), None)
        .await
        .unwrap();

    let catalog = EquipmentItemRepo::list(&pool).await.unwrap();
    let mask = catalog.iter().find(|i| i.name == "Maska na kord").unwrap();

    UserEquipmentRepo::set_owned(&pool, profile.id, mask.id, true)
        .await
        .unwrap();
    let flipped = UserEquipmentRepo::set_owned(&pool, profile.id, mask.id, true)
        .await
        .unwrap();
    assert!(flipped.is_owned);
    assert_eq!(
        UserEquipmentRepo::list_for_fencer(&pool, profile.id)
            .await
            .unwrap()
            .len(),
        1
    );

    let owned = EquipmentItemRepo::list_for_fencer(&pool, profile.id)
        .await
        .unwrap();
    assert_eq!(owned.len(), 9);
    assert_eq!(owned[0].item.category, "Elektronika");

    let board = build_loadout(&owned);
    let mask_slot = board.top.iter().find(|s| s.id == "mask").unwrap();
    assert_eq!(mask_slot.equipment_id, Some(mask.id));
    assert!(mask_slot.is_owned);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_participations_aggregate_to_totals(pool: PgPool) {
    let (_, profile) = UserRepo::create_with_profile(&pool, &new_user("sermir"), None)
        .await
        .unwrap();
    let older = EventRepo::create(&pool, &event_in(-30)).await.unwrap();
    let newer = EventRepo::create(&pool, &event_in(-3)).await.unwrap();

    for (event_id, wins, losses) in [(older.id, 3, 2), (newer.id, 5, 1)] {
        EventParticipationRepo::upsert(
            &pool,
            event_id,
            &UpsertParticipation {
                fencer_id: profile.id,
                position: None,
                wins,
                losses,
                touches_scored: 20,
                touches_received: 10,
            },
        )
        .await
        .unwrap();
    }

    let rows = EventParticipationRepo::list_for_fencer(&pool, profile.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].participation.event_id, newer.id);

    let totals = FencerTotals::from_records(rows.iter().map(|r| r.participation.bout_record()));
    assert_eq!(totals.events, 2);
    assert_eq!(totals.wins, 8);
    assert_eq!(totals.losses, 3);
    assert_eq!(totals.touch_difference, 20);
    assert_eq!(totals.win_rate, 72.7);

    let club_rows = EventParticipationRepo::list_for_fencers(&pool, &[profile.id])
        .await
        .unwrap();
    assert_eq!(club_rows.len(), 2);
}
