mod common;

use anyhow::Result as AnyResult;
use catalog_application::UseCase;
use catalog_application::category::{
    CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase,
};
use catalog_domain::entity::Entity;
use catalog_domain::validation::ValidationHandler;
use common::RecordingGateway;
use std::sync::Arc;

#[tokio::test]
async fn valid_command_creates_active_category() -> AnyResult<()> {
    let gateway = Arc::new(RecordingGateway::new());
    let use_case = CreateCategoryUseCase::new(gateway.clone());

    let command = CreateCategoryCommand::with(
        Some("Filmes".into()),
        Some("A categoria mais assistida".into()),
        true,
    );
    let output = use_case.execute(command).await?;

    let created = gateway.created();
    assert_eq!(created.len(), 1);
    let category = &created[0];
    assert_eq!(category.id(), &output.id);
    assert_eq!(category.name(), Some("Filmes"));
    assert_eq!(category.description(), Some("A categoria mais assistida"));
    assert!(category.is_active());
    assert_eq!(category.created_at(), category.updated_at());
    assert!(category.deleted_at().is_none());
    Ok(())
}

#[tokio::test]
async fn valid_inactive_command_creates_soft_deleted_category() -> AnyResult<()> {
    let gateway = Arc::new(RecordingGateway::new());
    let use_case = CreateCategoryUseCase::new(gateway.clone());

    let command = CreateCategoryCommand::with(
        Some("categoria".into()),
        Some("A categoria mais assistida".into()),
        false,
    );
    let output = use_case.execute(command).await?;

    let created = gateway.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id(), &output.id);
    assert!(!created[0].is_active());
    assert!(created[0].deleted_at().is_some());
    Ok(())
}

#[tokio::test]
async fn null_name_is_rejected_without_touching_the_gateway() {
    let gateway = Arc::new(RecordingGateway::new());
    let use_case = CreateCategoryUseCase::new(gateway.clone());

    let command = CreateCategoryCommand::with(None, Some("A categoria mais assistida".into()), true);
    let notification = use_case.execute(command).await.unwrap_err();

    assert_eq!(notification.len(), 1);
    assert_eq!(
        notification.first_error().map(|e| e.message()),
        Some("'name' should not be null")
    );
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn short_name_is_rejected_without_touching_the_gateway() {
    let gateway = Arc::new(RecordingGateway::new());
    let use_case = CreateCategoryUseCase::new(gateway.clone());

    let command = CreateCategoryCommand::with(Some("ab ".into()), None, true);
    let notification = use_case.execute(command).await.unwrap_err();

    assert_eq!(notification.len(), 1);
    assert_eq!(
        notification.first_error().map(|e| e.message()),
        Some("'name' must be between 3 and 255 character")
    );
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn gateway_fault_is_returned_as_single_error() {
    let gateway = Arc::new(RecordingGateway::failing_writes("Gateway Error"));
    let use_case = CreateCategoryUseCase::new(gateway.clone());

    let command = CreateCategoryCommand::with(
        Some("categoria".into()),
        Some("A categoria mais assistida".into()),
        false,
    );
    let notification = use_case.execute(command).await.unwrap_err();

    assert_eq!(notification.len(), 1);
    assert_eq!(
        notification.first_error().map(|e| e.message()),
        Some("Gateway Error")
    );

    let created = gateway.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name(), Some("categoria"));
    assert!(!created[0].is_active());
    assert!(created[0].deleted_at().is_some());
}

#[tokio::test]
async fn use_case_works_behind_a_trait_object() -> AnyResult<()> {
    let gateway: Arc<dyn catalog_domain::category::CategoryGateway> =
        Arc::new(RecordingGateway::new());
    let use_case: Box<dyn UseCase<Input = CreateCategoryCommand, Output = CreateCategoryOutput>> =
        Box::new(CreateCategoryUseCase::new(gateway));

    let output = use_case
        .execute(CreateCategoryCommand::with(Some("Séries".into()), None, true))
        .await?;
    assert!(!output.id.value().is_empty());
    Ok(())
}
