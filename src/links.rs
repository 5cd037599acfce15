// Copyright (C) 2024 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

//! The link template engine: pure string formatting, no I/O.

use crate::RepoRef;

/// The kinds of shareable link generated for a file, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    View,
    Raw,
    Pages,
    Cdn,
    DevMirror,
    ProdMirror,
}

impl LinkKind {
    pub const ALL: [LinkKind; 6] = [
        LinkKind::View,
        LinkKind::Raw,
        LinkKind::Pages,
        LinkKind::Cdn,
        LinkKind::DevMirror,
        LinkKind::ProdMirror,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::View => "GitHub File View",
            LinkKind::Raw => "Raw GitHub Link",
            LinkKind::Pages => "GitHub Pages",
            LinkKind::Cdn => "jsdelivr CDN",
            LinkKind::DevMirror => "GitHack (Development)",
            LinkKind::ProdMirror => "GitHack (Production)",
        }
    }
}

/// One URL per [`LinkKind`], generated once and only read afterwards.
#[derive(Debug, Clone)]
pub struct LinkSet {
    urls: [String; 6],
}

impl LinkSet {
    pub fn generate(info: &RepoRef, filename: &str) -> LinkSet {
        LinkSet {
            urls: LinkKind::ALL.map(|kind| url_for(kind, info, filename)),
        }
    }

    pub fn get(&self, kind: LinkKind) -> &str {
        &self.urls[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        LinkKind::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }
}

fn url_for(kind: LinkKind, info: &RepoRef, filename: &str) -> String {
    let RepoRef {
        owner,
        repo,
        branch,
    } = info;
    match kind {
        LinkKind::View => {
            format!("https://github.com/{owner}/{repo}/blob/{branch}/{filename}")
        }
        LinkKind::Raw => {
            format!("https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{filename}")
        }
        // Pages hostnames are always lowercase; only the owner is folded.
        LinkKind::Pages => {
            format!("https://{}.github.io/{repo}/{filename}", owner.to_lowercase())
        }
        LinkKind::Cdn => {
            format!("https://cdn.jsdelivr.net/gh/{owner}/{repo}@{branch}/{filename}")
        }
        LinkKind::DevMirror => {
            format!("https://raw.githack.com/{owner}/{repo}/{branch}/{filename}")
        }
        LinkKind::ProdMirror => {
            format!("https://rawcdn.githack.com/{owner}/{repo}/{branch}/{filename}")
        }
    }
}
