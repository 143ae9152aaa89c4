use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::events::core::event::Event;
use crate::modules::events::core::input::EventInput;
use crate::modules::events::event_store::EventStoreError;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub owner_id: String,
    pub owner_name: String,
    pub asset_type: String,
    pub asset_description: String,
    pub status: String,
    pub start_date: u64,
    pub end_date: u64,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            owner_id: e.owner_id,
            owner_name: e.owner_name,
            asset_type: e.asset_type,
            asset_description: e.asset_description,
            status: e.status.to_string(),
            start_date: e.start_date,
            end_date: e.end_date,
        }
    }
}

#[derive(InputObject, Default)]
pub struct GqlEventInput {
    #[graphql(default)]
    pub asset_type: String,
    #[graphql(default)]
    pub asset_description: String,
    #[graphql(default)]
    pub owner_name: String,
    #[graphql(default)]
    pub status: String,
}

impl From<GqlEventInput> for EventInput {
    fn from(i: GqlEventInput) -> Self {
        Self {
            asset_type: i.asset_type,
            asset_description: i.asset_description,
            owner_name: i.owner_name,
            status: i.status,
        }
    }
}

fn gql_error(e: EventStoreError) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

fn many(events: Vec<Event>) -> Vec<GqlEvent> {
    events.into_iter().map(Into::into).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn all_events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state.events.get_all_events().await.map_err(gql_error)?;
        Ok(many(events))
    }

    async fn event_by_id(&self, context: &Context<'_>, id: String) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state.events.get_event_by_id(&id).await.map_err(gql_error)?;
        Ok(event.into())
    }

    async fn owners_events(
        &self,
        context: &Context<'_>,
        owner_id: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .events
            .get_owners_events(&owner_id)
            .await
            .map_err(gql_error)?;
        Ok(many(events))
    }

    async fn events_by_status(
        &self,
        context: &Context<'_>,
        status: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .events
            .get_events_by_status(&status)
            .await
            .map_err(gql_error)?;
        Ok(many(events))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_event(
        &self,
        context: &Context<'_>,
        input: GqlEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .create_event(input.into())
            .await
            .map_err(gql_error)?;
        Ok(event.into())
    }

    async fn update_event(
        &self,
        context: &Context<'_>,
        id: String,
        owner_id: String,
        #[graphql(default)] input: GqlEventInput,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .update_event(&id, &owner_id, input.into())
            .await
            .map_err(gql_error)?;
        Ok(event.into())
    }

    async fn end_event(
        &self,
        context: &Context<'_>,
        id: String,
        owner_id: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .end_event(&id, &owner_id)
            .await
            .map_err(gql_error)?;
        Ok(event.into())
    }

    async fn delete_event(
        &self,
        context: &Context<'_>,
        id: String,
        owner_id: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .delete_event(&id, &owner_id)
            .await
            .map_err(gql_error)?;
        Ok(event.into())
    }
}
