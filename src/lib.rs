// Copyright (C) 2024 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

pub mod git;
pub mod links;
pub mod remote;

use std::path::Path;

use crate::links::LinkKind;
use crate::links::LinkSet;

const RULE: &str = "======================================================================";

const RECOMMENDATIONS: &str = "💡 RECOMMENDATIONS:

   • For HTML files: Use GitHub Pages or GitHack
   • For downloads: Use Raw GitHub Link
   • For production: Use jsdelivr CDN
   • For code review: Use GitHub File View";

/// Why repository information could not be determined.
#[derive(Debug, thiserror::Error)]
pub enum RepoInfoError {
    #[error("no origin remote configured: {0}")]
    NoRemoteConfigured(String),
    #[error("remote is not a github URL: {0}")]
    UnsupportedRemoteFormat(String),
    #[error("remote path is not owner/repo: {0}")]
    MalformedRepoPath(String),
}

/// The repository coordinates all links are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepoRef {
    /// Build a [`RepoRef`] from the git repository at `dir`.
    ///
    /// A failed branch lookup is not an error; the branch defaults to
    /// `main`. Everything else maps to a [`RepoInfoError`] variant.
    pub fn from_workspace<P: AsRef<Path>>(dir: P) -> Result<RepoRef, RepoInfoError> {
        let url = git::remote_origin_url(&dir)
            .map_err(|e| RepoInfoError::NoRemoteConfigured(e.to_string()))?;
        let (owner, repo) = remote::parse_remote_url(&url)?;
        let branch = git::current_branch(&dir).unwrap_or_else(|_| "main".to_string());
        Ok(RepoRef {
            owner,
            repo,
            branch,
        })
    }
}

/// Render the full stdout report: repository banner, the links in display
/// order, the recommendation block, and the HTML quick-start when the
/// filename calls for it.
pub fn render_report(filename: &str, info: &RepoRef, links: &LinkSet) -> String {
    let mut out = format!(
        "\n📦 Repository: {}/{}\n🌿 Branch: {}\n\n{RULE}\n📎 SHAREABLE LINKS FOR: {}\n{RULE}\n\n",
        info.owner, info.repo, info.branch, filename
    );
    for (kind, url) in links.iter() {
        out.push_str(&format!("🔗 {}:\n   {}\n\n", kind.label(), url));
    }
    out.push_str(&format!("{RULE}\n\n{RECOMMENDATIONS}\n\n{RULE}\n\n"));
    if filename.ends_with(".html") {
        out.push_str(&format!(
            "📄 HTML FILE DETECTED\n{RULE}\n\n\
             🚀 Quick Start for HTML:\n\
             \x20  1. Instant use: {}\n\n\
             \x20  2. Best option (requires setup):\n\
             \x20     - Enable GitHub Pages in repository settings\n\
             \x20     - Then use: {}\n\n{RULE}\n\n",
            links.get(LinkKind::DevMirror),
            links.get(LinkKind::Pages),
        ));
    }
    out
}

/// Generate and print the links for `filename`, reading repository
/// information from the git repository at `dir`.
///
/// A missing file is only a warning; link generation proceeds.
pub fn run<P: AsRef<Path>>(dir: P, filename: &str) -> Result<(), RepoInfoError> {
    if !dir.as_ref().join(filename).exists() {
        println!("⚠️  Warning: File '{}' not found in current directory.", filename);
        println!("   Links will still be generated, but verify the filename is correct.");
        println!();
    }
    let info = RepoRef::from_workspace(&dir)?;
    let links = LinkSet::generate(&info, filename);
    print!("{}", render_report(filename, &info, &links));
    Ok(())
}
