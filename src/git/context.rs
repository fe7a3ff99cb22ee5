//! Heuristic project-context tags inferred from touched file paths.
//!
//! The tags only enrich the prompt; nothing branches on them.

use super::commits::CommitRecord;

/// Framework cues. Only the first matching framework is reported.
const FRAMEWORKS: &[(&str, fn(&str) -> bool)] = &[
    ("Next.js app", |f| {
        f.contains("next.config") || f.contains("app/page") || f.contains("pages/")
    }),
    ("Vite app", |f| f.contains("vite.config")),
    ("JavaScript/Node.js project", |f| f.contains("package.json")),
];

/// Independent cues; every one that matches is reported, in this order.
const CUES: &[(&str, fn(&str) -> bool)] = &[
    ("React", |f| f.contains(".tsx") || f.contains(".jsx")),
    ("Vue", |f| f.contains(".vue")),
    ("Svelte", |f| f.contains(".svelte")),
    ("Tailwind CSS", |f| f.to_lowercase().contains("tailwind")),
    ("Vercel deployment", |f| f.to_lowercase().contains("vercel")),
    ("Docker", |f| f.to_lowercase().contains("docker")),
    ("authentication features", |f| {
        let lower = f.to_lowercase();
        lower.contains("auth") || lower.contains("login")
    }),
    ("API endpoints", |f| f.contains("api/") || f.contains("routes/")),
    ("database layer", |f| {
        let lower = f.to_lowercase();
        lower.contains("db") || lower.contains("database") || lower.contains("prisma")
    }),
];

/// Infer context tags from the union of changed paths across the batch.
pub fn infer_project_context(commits: &[CommitRecord]) -> Vec<&'static str> {
    let files: Vec<&str> = commits
        .iter()
        .flat_map(|c| c.changed_files.iter().map(String::as_str))
        .collect();

    infer_from_paths(&files)
}

/// Same as [`infer_project_context`], over a plain list of paths.
pub fn infer_from_paths(files: &[&str]) -> Vec<&'static str> {
    let any = |predicate: fn(&str) -> bool| files.iter().any(|f| predicate(f));

    let mut tags = Vec::new();

    if let Some((tag, _)) = FRAMEWORKS.iter().find(|(_, predicate)| any(*predicate)) {
        tags.push(*tag);
    }

    tags.extend(
        CUES.iter()
            .filter(|(_, predicate)| any(*predicate))
            .map(|(tag, _)| *tag),
    );

    tags
}
