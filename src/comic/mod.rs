//! Comic records and the hook that loads them.

use crate::config::Config;
use crate::fetch::{use_fetch, FetchState};
use dioxus::prelude::*;
use serde::Deserialize;
use std::fmt;

/// One strip as returned by the comic API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Comic {
    pub num: u32,
    pub safe_title: String,
    pub alt: String,
    pub img: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub news: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicRequest {
    Id(u32),
    Latest,
}

impl ComicRequest {
    /// `Id` for a positive search value, `Latest` otherwise.
    pub fn from_search(search: Option<i64>) -> Self {
        match search.and_then(|s| u32::try_from(s).ok()) {
            Some(id) if id > 0 => ComicRequest::Id(id),
            _ => ComicRequest::Latest,
        }
    }
}

impl fmt::Display for ComicRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComicRequest::Id(id) => write!(f, "{id}"),
            ComicRequest::Latest => f.write_str("latest"),
        }
    }
}

pub fn comic_url(base: &str, request: ComicRequest) -> String {
    format!("{}/?comic={}", base.trim_end_matches('/'), request)
}

/// Load the comic selected by `request` from the configured API.
pub fn use_comic(request: Memo<ComicRequest>) -> Memo<FetchState<Comic>> {
    let config = use_context::<Config>();
    let url = use_memo(move || Some(comic_url(&config.api_url, *request.read())));
    use_fetch::<Comic>(url)
}
