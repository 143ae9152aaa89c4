use crate::modules::events::core::event::{EVENT_DURATION, EventStatus};
use crate::modules::events::core::input::EventInput;
use crate::modules::events::event_store::EventStoreError;
use crate::tests::fixtures::{EventInputBuilder, T0, make_event_store};

#[tokio::test]
async fn walks_an_event_through_its_whole_lifecycle() {
    let (store, clock) = make_event_store();

    let car = store
        .create_event(EventInputBuilder::new().build())
        .await
        .unwrap();
    let boat = store
        .create_event(
            EventInputBuilder::new()
                .asset_type("boat")
                .asset_description("sloop")
                .owner_name("Bob")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(car.start_date, T0);
    assert_eq!(car.end_date, T0 + EVENT_DURATION);
    assert_ne!(car.owner_id, boat.owner_id);

    clock.advance(1_000);
    let car = store
        .update_event(
            &car.id,
            &car.owner_id,
            EventInput {
                asset_description: "estate".into(),
                ..EventInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(car.asset_description, "estate");
    assert_eq!(car.start_date, T0);

    assert_eq!(
        store.end_event(&car.id, &car.owner_id).await,
        Err(EventStoreError::AlreadyEnded(car.id.clone()))
    );

    clock.set(car.end_date + 1);
    let car = store.end_event(&car.id, &car.owner_id).await.unwrap();
    assert_eq!(car.status, EventStatus::Inactive);
    assert_eq!(car.end_date, T0 + EVENT_DURATION + 1);

    assert_eq!(store.get_events_by_status("inactive").await, Ok(vec![car.clone()]));
    assert_eq!(store.get_events_by_status("active").await, Ok(vec![boat.clone()]));
    assert_eq!(store.get_owners_events(&boat.owner_id).await, Ok(vec![boat.clone()]));

    assert_eq!(
        store.delete_event(&boat.id, &car.owner_id).await,
        Err(EventStoreError::Forbidden { action: "delete" })
    );
    assert_eq!(store.delete_event(&car.id, &car.owner_id).await, Ok(car.clone()));
    assert_eq!(store.get_all_events().await, Ok(vec![]));
}
