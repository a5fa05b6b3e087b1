// src/main.rs
//
// Composition root: wires in-memory collaborators and creates one category.
//
// Usage: movie-catalog <name> [description] [--inactive]

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use movie_catalog::application::{
    AppState, CreateCategory, CreateCategoryInput, ErrorResponse,
};
use movie_catalog::domain::SystemClock;
use movie_catalog::repositories::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryStore, InMemoryUnitOfWork,
    UnitOfWork,
};

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<CreateCategoryInput> {
    let mut positional = Vec::new();
    let mut is_active = true;

    for arg in args {
        if arg == "--inactive" {
            is_active = false;
        } else {
            positional.push(arg);
        }
    }

    if positional.len() > 2 {
        anyhow::bail!(
            "unexpected arguments: {}\nusage: movie-catalog <name> [description] [--inactive]",
            positional[2..].join(" ")
        );
    }

    let mut positional = positional.into_iter();
    Ok(CreateCategoryInput {
        name: positional.next(),
        description: Some(positional.next().unwrap_or_default()),
        is_active,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. INFRASTRUCTURE
    let store = InMemoryStore::new();

    // 2. COLLABORATORS
    let repository: Arc<dyn CategoryRepository> =
        Arc::new(InMemoryCategoryRepository::new(store.clone()));
    let unit_of_work: Arc<dyn UnitOfWork> = Arc::new(InMemoryUnitOfWork::new(store.clone()));

    // 3. APPLICATION STATE
    let state = AppState {
        create_category: Arc::new(CreateCategory::new(
            repository,
            unit_of_work,
            Arc::new(SystemClock),
        )),
    };

    // 4. RUN
    let cancellation = CancellationToken::new();
    let ctrl_c = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let input = parse_args(std::env::args().skip(1))?;
    match state.create_category.handle(input, cancellation).await {
        Ok(output) => {
            let json = serde_json::to_string_pretty(&output)
                .context("failed to serialize category output")?;
            println!("{}", json);
            Ok(())
        }
        Err(error) => {
            let response = ErrorResponse::from_app_error(error);
            let json = serde_json::to_string_pretty(&response)
                .context("failed to serialize error response")?;
            eprintln!("{}", json);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_name_and_description() {
        let input = parse_args(args(&["Drama", "Serious films"])).unwrap();
        assert_eq!(input.name.as_deref(), Some("Drama"));
        assert_eq!(input.description.as_deref(), Some("Serious films"));
        assert!(input.is_active);
    }

    #[test]
    fn test_missing_description_is_empty() {
        let input = parse_args(args(&["Drama", "--inactive"])).unwrap();
        assert_eq!(input.description.as_deref(), Some(""));
        assert!(!input.is_active);
    }

    #[test]
    fn test_no_arguments_leaves_name_missing() {
        let input = parse_args(args(&[])).unwrap();
        assert!(input.name.is_none());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        let error = parse_args(args(&["Drama", "Serious films", "oops"])).unwrap_err();
        assert!(error.to_string().contains("unexpected arguments: oops"));
    }
}
