use anyhow::Context;
use catalog_application::UseCase;
use catalog_application::category::{
    CreateCategoryCommand, CreateCategoryUseCase, GetCategoryByIdQuery, GetCategoryByIdUseCase,
    UpdateCategoryCommand, UpdateCategoryUseCase,
};
use catalog_domain::config::{DEFAULT_NAME_MAX_LENGTH, DEFAULT_NAME_MIN_LENGTH, ValidationConfig};
use catalog_domain::persist::InMemoryCategoryGateway;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn env_usize(key: &str, default: usize) -> anyhow::Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a positive integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn load_config() -> anyhow::Result<ValidationConfig> {
    let config = ValidationConfig::builder()
        .name_min_length(env_usize("CATALOG_NAME_MIN_LENGTH", DEFAULT_NAME_MIN_LENGTH)?)
        .name_max_length(env_usize("CATALOG_NAME_MAX_LENGTH", DEFAULT_NAME_MAX_LENGTH)?)
        .build();
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CATALOG_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    info!(?config, "validation config loaded");

    let gateway = Arc::new(InMemoryCategoryGateway::new());
    let create = CreateCategoryUseCase::with_config(gateway.clone(), config);
    let update = UpdateCategoryUseCase::with_config(gateway.clone(), config);
    let get = GetCategoryByIdUseCase::new(gateway.clone());

    // 1. 创建
    let created = create
        .execute(CreateCategoryCommand::with(
            Some("Filmes".into()),
            Some("A categoria mais assistida".into()),
            true,
        ))
        .await?;
    println!("created: {}", created.id);

    // 2. 非法名称被拒绝，错误全部收集
    match create
        .execute(CreateCategoryCommand::with(Some("  ".into()), None, true))
        .await
    {
        Ok(output) => warn!(id = %output.id, "blank name unexpectedly accepted"),
        Err(notification) => println!("rejected: {notification}"),
    }

    // 3. 停用
    update
        .execute(UpdateCategoryCommand::with(
            created.id.value(),
            Some("Filmes".into()),
            None,
            false,
        ))
        .await?;

    // 4. 读取
    let category = get
        .execute(GetCategoryByIdQuery::with(created.id.value()))
        .await?;
    println!(
        "category {} name={:?} active={} deleted_at={:?}",
        category.id, category.name, category.is_active, category.deleted_at
    );

    // 5. 不存在的标识
    if let Err(notification) = get.execute(GetCategoryByIdQuery::with("missing")).await {
        println!("lookup failed: {notification}");
    }

    info!(stored = gateway.len(), "demo finished");
    Ok(())
}
