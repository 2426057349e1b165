//! HTTP surface of the vakfinder matching engine.
//!
//! | Route                              | Operation                 |
//! |------------------------------------|---------------------------|
//! | `GET /match`, `POST /match`        | request matching          |
//! | `GET /companies/{anchor}/similar`  | similar companies         |
//! | `GET /companies/{anchor}/context`  | other providers nearby    |
//! | `GET /health`                      | liveness                  |
//!
//! Errors are `{ "ok": false, "message": ... }` with 400 for missing
//! criteria, 404 for an unknown anchor and 503 when the store is down.

pub mod rest;

pub use rest::RestApi;
