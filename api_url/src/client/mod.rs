mod client;

pub use client::ApiRoutes;

pub use crate::{
    api::{AdminRoutes, AuthRoutes, DataRoutes, SubscriptionRoutes},
    error::ApiUrlError,
};
