//! Banner-aware API calls used by the use case handlers.
//!
//! Failures never escape: they are shown in the banner and the caller gets
//! `None`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_client::ApiClient;
use crate::shared::banner::Banner;
use crate::shared::request_tracker::RequestTracker;

/// POST `payload` to `endpoint`, driving the banner for the whole call.
///
/// Loading is shown and the previous error cleared before the request;
/// loading is released when it settles, whatever the outcome.
pub async fn call_api<Req, Resp, B>(
    client: &ApiClient,
    banner: &B,
    endpoint: &str,
    payload: &Req,
) -> Option<Resp>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
    B: Banner + ?Sized,
{
    dispatch(client, banner, None, endpoint, payload).await
}

/// Same as [`call_api`], but a response is dropped when `tracker` issued a
/// newer ticket while it was in flight: neither its result nor its error
/// reach the caller or the banner.
pub async fn call_api_latest<Req, Resp, B>(
    client: &ApiClient,
    banner: &B,
    tracker: &RequestTracker,
    endpoint: &str,
    payload: &Req,
) -> Option<Resp>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
    B: Banner + ?Sized,
{
    dispatch(client, banner, Some(tracker), endpoint, payload).await
}

async fn dispatch<Req, Resp, B>(
    client: &ApiClient,
    banner: &B,
    tracker: Option<&RequestTracker>,
    endpoint: &str,
    payload: &Req,
) -> Option<Resp>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
    B: Banner + ?Sized,
{
    let ticket = tracker.map(RequestTracker::issue);

    banner.show_loading(true);
    banner.hide_error();
    log::debug!("POST {} started", endpoint);

    let result = client.post::<Req, Resp>(endpoint, payload).await;

    banner.show_loading(false);

    if let (Some(tracker), Some(ticket)) = (tracker, ticket) {
        if !tracker.is_current(ticket) {
            log::debug!("POST {} superseded by a newer request, dropped", endpoint);
            return None;
        }
    }

    match result {
        Ok(response) => {
            log::debug!("POST {} succeeded", endpoint);
            Some(response)
        }
        Err(err) => {
            log::error!("POST {} failed: {}", endpoint, err);
            banner.show_error(err.user_message());
            None
        }
    }
}
