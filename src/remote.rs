// Copyright (C) 2024 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

//! Parsing of the `remote.origin.url` string into an (owner, repo) pair.
//!
//! Only github remotes are supported, in their HTTPS and SSH forms:
//! `https://github.com/<owner>/<repo>(.git)` and
//! `git@github.com:<owner>/<repo>(.git)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::RepoInfoError;

static REMOTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https://github\.com/|git@github\.com:)(?P<path>.*?)(?:\.git)?$")
        .expect("remote url regex")
});

/// Parse a remote URL, returning the owner and repository names.
///
/// Case is preserved; a single trailing `.git` is stripped.
pub fn parse_remote_url(url: &str) -> Result<(String, String), RepoInfoError> {
    let caps = REMOTE_URL_RE
        .captures(url)
        .ok_or_else(|| RepoInfoError::UnsupportedRemoteFormat(url.to_string()))?;
    let path = &caps["path"];
    let mut segments = path.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(RepoInfoError::MalformedRepoPath(path.to_string())),
    }
}
