//! Wire types shared between the NLP Studio frontend and the inference API.
//!
//! Each use case module carries its request/response DTOs and the endpoint
//! path it is served on. `shared` holds documents common to every endpoint.

pub mod shared;
pub mod usecases;
