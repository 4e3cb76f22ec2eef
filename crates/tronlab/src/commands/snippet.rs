//! Snippet command - print built-in template skeletons

use anyhow::{Result, anyhow};
use colored::Colorize;
use tronlab_host::Snippet;

pub fn run(kind: Option<&str>, list: bool) -> Result<i32> {
    if list {
        for snippet in Snippet::ALL {
            let keyword = format!("{:<8}", snippet.keyword());
            println!("{} {}", keyword.bold(), snippet.description());
        }
        return Ok(0);
    }

    let keyword = kind.ok_or_else(|| anyhow!("Missing snippet kind"))?;
    let snippet = Snippet::from_keyword(keyword).ok_or_else(|| {
        let known: Vec<_> = Snippet::ALL.iter().map(|s| s.keyword()).collect();
        anyhow!(
            "Unknown snippet '{}' (expected one of: {})",
            keyword,
            known.join(", ")
        )
    })?;

    println!("{}", snippet.expand());
    Ok(0)
}
