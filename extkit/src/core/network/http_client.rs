// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_MULTIPART, MultipartFormData, ok};
use miette::IntoDiagnostic;
use reqwest::header::CONTENT_TYPE;

mod constants {
    pub const USER_AGENT: &str = "extkit/0.1";
}

/// # Errors
///
/// Returns an error if:
/// - The HTTP client builder fails to build
/// - TLS backend initialization fails
pub fn create_client_with_user_agent(
    user_agent: Option<&str>,
) -> miette::Result<reqwest::Client> {
    let it = reqwest::Client::builder()
        .user_agent(user_agent.map_or_else(
            /* none */ || constants::USER_AGENT.to_owned(),
            /* some */ ToOwned::to_owned,
        ))
        .build();
    it.into_diagnostic()
}

/// A `POST` request to `url` whose `Content-Type` carries the boundary of `form`, and
/// whose body is the encoded form. Nothing is sent.
///
/// # Errors
///
/// Returns an error if `url` can't be parsed.
pub fn build_multipart_request(
    client: &reqwest::Client,
    url: &str,
    form: &MultipartFormData,
) -> miette::Result<reqwest::Request> {
    let it = client
        .post(url)
        .header(CONTENT_TYPE, form.content_type())
        .body(form.body.clone())
        .build()
        .into_diagnostic()?;
    ok!(it)
}

/// Sends `form` to `url` as a `POST` request.
///
/// # Errors
///
/// Returns an error if:
/// - The request can't be built, see [`build_multipart_request()`]
/// - The network request fails
/// - The server responds with an error status
pub async fn try_post_multipart(
    client: &reqwest::Client,
    url: &str,
    form: &MultipartFormData,
) -> miette::Result<reqwest::Response> {
    let request = build_multipart_request(client, url, form)?;

    DEBUG_MULTIPART.then(|| {
        tracing::debug!(
            message = "Posting multipart/form-data",
            url = %url,
            body_len = form.body.len()
        );
    });

    let response = client.execute(request).await.into_diagnostic()?;
    let response = response.error_for_status().into_diagnostic()?;
    ok!(response)
}
