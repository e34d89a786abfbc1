//! Test doubles for the API client and the banner.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::shared::api_client::{HttpTransport, RawResponse};
use crate::shared::banner::{Banner, BannerState};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    /// `None` for GET
    pub body: Option<String>,
}

struct Step {
    outcome: Result<RawResponse, String>,
    /// Times the call yields to the executor before settling
    yields: usize,
}

/// Transport replaying queued outcomes in order and recording every call
#[derive(Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.respond_after(0, status, body);
    }

    /// Like `respond`, but the call settles only after `yields` executor turns
    pub fn respond_after(&self, yields: usize, status: u16, body: &str) {
        self.push(Step {
            outcome: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            yields,
        });
    }

    pub fn fail(&self, message: &str) {
        self.push(Step {
            outcome: Err(message.to_string()),
            yields: 0,
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, step: Step) {
        self.steps.lock().unwrap().push_back(step);
    }

    async fn settle(&self, call: RecordedCall) -> Result<RawResponse, String> {
        self.calls.lock().unwrap().push(call);
        let step = self.steps.lock().unwrap().pop_front();
        let Some(step) = step else {
            return Err("no scripted response left".to_string());
        };
        for _ in 0..step.yields {
            tokio::task::yield_now().await;
        }
        step.outcome
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, String> {
        self.settle(RecordedCall {
            url: url.to_string(),
            body: Some(body),
        })
        .await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, String> {
        self.settle(RecordedCall {
            url: url.to_string(),
            body: None,
        })
        .await
    }
}

/// Non-reactive banner for driving handlers outside a Leptos owner
impl Banner for RefCell<BannerState> {
    fn show_loading(&self, show: bool) {
        self.borrow_mut().show_loading(show);
    }

    fn show_error(&self, message: String) {
        self.borrow_mut().show_error(message);
    }

    fn hide_error(&self) {
        self.borrow_mut().hide_error();
    }
}
