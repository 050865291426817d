//! Path and query extractors whose rejections render as the crate's JSON error.

use axum::extract::FromRequestParts;

use crate::error::Error;

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);
