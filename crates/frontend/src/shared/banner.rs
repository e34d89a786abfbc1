//! Shared loading/error banner.
//!
//! `BannerState` is the plain state; `Banner` is the seam handlers write
//! through, implemented for the reactive signal the UI renders from.

use leptos::prelude::*;

/// Состояние баннера: счётчик запросов в полёте и текст ошибки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    in_flight: u32,
    error: Option<String>,
}

impl BannerState {
    /// `true` starts one more request, `false` settles one.
    ///
    /// The spinner stays visible while any request is in flight.
    pub fn show_loading(&mut self, show: bool) {
        if show {
            self.in_flight += 1;
        } else {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
    }

    /// Replaces any previous message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

pub trait Banner {
    fn show_loading(&self, show: bool);
    fn show_error(&self, message: String);
    fn hide_error(&self);
}

impl Banner for RwSignal<BannerState> {
    fn show_loading(&self, show: bool) {
        self.update(|state| state.show_loading(show));
    }

    fn show_error(&self, message: String) {
        self.update(|state| state.show_error(message));
    }

    fn hide_error(&self) {
        self.update(|state| state.hide_error());
    }
}
