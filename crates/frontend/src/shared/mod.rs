pub mod api_call;
pub mod api_client;
pub mod api_utils;
pub mod banner;
pub mod components;
pub mod number_format;
pub mod request_tracker;

#[cfg(test)]
pub mod testing;
