// ABOUTME: Integration tests for roadmap, step, resource and category actions
// ABOUTME: Covers validation, referential tolerance, templates and settings

mod common;

use chrono::{Duration, NaiveDate};
use common::{roadmap_input, setup_empty_store, setup_store, start};
use learnpath_core::{
    AppState, CategoryColor, CategoryCreateInput, CategoryUpdateInput, ResourceCreateInput,
    ResourceType, RoadmapCreateInput, RoadmapUpdateInput, StepCreateInput, StepUpdateInput,
    ValidationError,
};
use learnpath_roadmaps::StoreError;
use learnpath_settings::{ProfileUpdate, SettingsUpdate};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[tokio::test]
async fn test_add_roadmap_with_steps() {
    let ctx = setup_empty_store();
    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("  Rust  ", "programming", 3))
        .await
        .unwrap();

    assert!(roadmap.id.starts_with("rm-"));
    assert_eq!(roadmap.title, "Rust");
    assert_eq!(roadmap.steps.len(), 3);
    assert_eq!(roadmap.created_at, start());
    assert_eq!(roadmap.total_study_time, 0);
    assert_eq!(ctx.store.roadmap_progress(&roadmap.id).await, Some(0));
    assert!(ctx.storage.raw().await.is_some());
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn test_blank_roadmap_title_rejected(#[case] title: &str) {
    let ctx = setup_empty_store();
    let result = ctx
        .store
        .add_roadmap(RoadmapCreateInput {
            title: title.to_string(),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::Empty(_)))
    ));
    assert!(ctx.store.snapshot().await.roadmaps.is_empty());
    assert!(ctx.storage.raw().await.is_none());
}

#[tokio::test]
async fn test_blank_step_title_rejects_whole_roadmap() {
    let ctx = setup_empty_store();
    let mut input = roadmap_input("Rust", "programming", 2);
    input.steps[1].title = " ".to_string();

    assert!(ctx.store.add_roadmap(input).await.is_err());
    assert!(ctx.store.snapshot().await.roadmaps.is_empty());
}

#[tokio::test]
async fn test_update_roadmap_stamps_updated_at() {
    let ctx = setup_empty_store();
    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("Rust", "programming", 1))
        .await
        .unwrap();

    ctx.clock.advance(Duration::minutes(5));
    let updated = ctx
        .store
        .update_roadmap(
            &roadmap.id,
            RoadmapUpdateInput {
                title: Some("Rust in Action".to_string()),
                description: Some(Some("Book club".to_string())),
                category_id: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Rust in Action");
    assert_eq!(updated.description.as_deref(), Some("Book club"));
    assert_eq!(updated.category_id, "programming");
    assert_eq!(updated.created_at, start());
    assert_eq!(updated.updated_at, start() + Duration::minutes(5));
}

#[tokio::test]
async fn test_unknown_ids_are_rejected() {
    let ctx = setup_empty_store();

    assert!(matches!(
        ctx.store.delete_roadmap("missing").await,
        Err(StoreError::RoadmapNotFound(_))
    ));
    assert!(matches!(
        ctx.store.toggle_step("missing", "step").await,
        Err(StoreError::RoadmapNotFound(_))
    ));

    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("Rust", "programming", 1))
        .await
        .unwrap();
    assert!(matches!(
        ctx.store.toggle_step(&roadmap.id, "missing").await,
        Err(StoreError::StepNotFound(_))
    ));
    assert!(matches!(
        ctx.store.delete_category("missing").await,
        Err(StoreError::CategoryNotFound(_))
    ));
    assert_eq!(ctx.store.snapshot().await.total_xp, 0);
}

#[tokio::test]
async fn test_step_lifecycle() {
    let ctx = setup_empty_store();
    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("Rust", "programming", 0))
        .await
        .unwrap();

    let due = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    let step = ctx
        .store
        .add_step(
            &roadmap.id,
            StepCreateInput {
                title: "Traits".to_string(),
                description: Some("Generics too".to_string()),
                due_date: Some(due),
            },
        )
        .await
        .unwrap();
    assert_eq!(step.due_date, Some(due));

    let updated = ctx
        .store
        .update_step(
            &roadmap.id,
            &step.id,
            StepUpdateInput {
                title: Some("Traits and generics".to_string()),
                description: Some(None),
                due_date: Some(None),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Traits and generics");
    assert!(updated.description.is_none());
    assert!(updated.due_date.is_none());
    assert!(!updated.completed);

    let removed = ctx.store.delete_step(&roadmap.id, &step.id).await.unwrap();
    assert_eq!(removed.id, step.id);
    assert!(ctx.store.roadmap(&roadmap.id).await.unwrap().steps.is_empty());
}

#[tokio::test]
async fn test_resources() {
    let ctx = setup_empty_store();
    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("Rust", "programming", 1))
        .await
        .unwrap();
    let step_id = roadmap.steps[0].id.clone();

    let resource = ctx
        .store
        .add_resource(
            &roadmap.id,
            &step_id,
            ResourceCreateInput {
                resource_type: ResourceType::Link,
                title: "The Book".to_string(),
                content: "https://doc.rust-lang.org/book/".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(resource.id.starts_with("res-"));

    let stored = ctx.store.roadmap(&roadmap.id).await.unwrap();
    assert_eq!(stored.steps[0].resources, vec![resource.clone()]);

    ctx.store
        .remove_resource(&roadmap.id, &step_id, &resource.id)
        .await
        .unwrap();
    assert!(matches!(
        ctx.store
            .remove_resource(&roadmap.id, &step_id, &resource.id)
            .await,
        Err(StoreError::ResourceNotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_category_uncategorizes_roadmaps() {
    let ctx = setup_empty_store();
    for title in ["Physics", "Chemistry", "Biology"] {
        ctx.store
            .add_roadmap(roadmap_input(title, "science", 1))
            .await
            .unwrap();
    }
    ctx.store
        .add_roadmap(roadmap_input("Rust", "programming", 1))
        .await
        .unwrap();

    let removed = ctx.store.delete_category("science").await.unwrap();
    assert_eq!(removed.name, "Science");

    let state = ctx.store.snapshot().await;
    assert_eq!(state.roadmaps.len(), 4);
    let uncategorized: Vec<_> = state
        .roadmaps
        .iter()
        .filter(|r| r.category_id.is_empty())
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(uncategorized, vec!["Physics", "Chemistry", "Biology"]);
    assert!(state.category("science").is_none());

    let markdown = ctx.store.export_markdown().await;
    assert_eq!(markdown.matches("**Category:** Uncategorized").count(), 3);
}

#[tokio::test]
async fn test_category_crud() {
    let ctx = setup_empty_store();
    let category = ctx
        .store
        .add_category(CategoryCreateInput {
            name: "Music".to_string(),
            color: CategoryColor::Pink,
            icon: "🎵".to_string(),
        })
        .await
        .unwrap();
    assert!(category.id.starts_with("cat-"));

    let updated = ctx
        .store
        .update_category(
            &category.id,
            CategoryUpdateInput {
                color: Some(CategoryColor::Purple),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Music");
    assert_eq!(updated.color, CategoryColor::Purple);

    let blank = ctx
        .store
        .update_category(
            &category.id,
            CategoryUpdateInput {
                name: Some("".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(blank.is_err());
}

#[tokio::test]
async fn test_overall_progress_ignores_empty_roadmaps() {
    let ctx = setup_empty_store();
    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("Rust", "programming", 4))
        .await
        .unwrap();
    ctx.store
        .toggle_step(&roadmap.id, &roadmap.steps[0].id)
        .await
        .unwrap();
    assert_eq!(ctx.store.overall_progress().await, 25);

    ctx.store
        .add_roadmap(roadmap_input("Empty", "programming", 0))
        .await
        .unwrap();
    assert_eq!(ctx.store.overall_progress().await, 25);
    assert_eq!(ctx.store.category_progress("programming").await, 25);
}

#[tokio::test]
async fn test_upcoming_and_overdue() {
    let ctx = setup_empty_store();
    let roadmap = ctx
        .store
        .add_roadmap(roadmap_input("Rust", "programming", 0))
        .await
        .unwrap();
    let today = ctx.store.today();
    for (title, offset) in [("Late", -2), ("Today", 0), ("Soon", 1), ("Later", 7)] {
        ctx.store
            .add_step(
                &roadmap.id,
                StepCreateInput {
                    title: title.to_string(),
                    description: None,
                    due_date: Some(today + Duration::days(offset)),
                },
            )
            .await
            .unwrap();
    }

    let upcoming: Vec<_> = ctx
        .store
        .upcoming_steps()
        .await
        .into_iter()
        .map(|s| s.step.title)
        .collect();
    assert_eq!(upcoming, vec!["Today", "Soon", "Later"]);

    let overdue = ctx.store.overdue_steps().await;
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].roadmap_title, "Rust");
    assert_eq!(ctx.store.due_soon_count().await, 3);
}

#[tokio::test]
async fn test_templates() {
    let ctx = setup_empty_store();
    let found = ctx.store.search_templates("react", Some("programming"));
    assert_eq!(found.len(), 1);

    let roadmap = ctx
        .store
        .add_roadmap_from_template(&found[0].id)
        .await
        .unwrap();
    assert_eq!(roadmap.title, "React Fundamentals");
    assert_eq!(roadmap.steps.len(), 10);
    assert_eq!(ctx.store.snapshot().await.roadmaps.len(), 1);

    assert!(matches!(
        ctx.store.add_roadmap_from_template("missing").await,
        Err(StoreError::TemplateNotFound(_))
    ));
}

#[tokio::test]
async fn test_update_settings() {
    let ctx = setup_empty_store();
    let settings = ctx
        .store
        .update_settings(SettingsUpdate {
            profile: Some(ProfileUpdate {
                display_name: Some("Ada".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(settings.profile.display_name, "Ada");

    let rejected = ctx
        .store
        .update_settings(SettingsUpdate {
            profile: Some(ProfileUpdate {
                display_name: Some(" ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await;
    assert!(matches!(rejected, Err(StoreError::Settings(_))));
    assert_eq!(
        ctx.store.snapshot().await.settings.profile.display_name,
        "Ada"
    );
}

#[tokio::test]
async fn test_seeded_store_queries() {
    let ctx = setup_store(AppState::seeded(start()));
    assert_eq!(ctx.store.total_study_time().await, 255);

    let stats = ctx.store.statistics().await;
    assert_eq!(stats.total_roadmaps, 3);
    assert_eq!(stats.total_steps, 12);
    assert_eq!(stats.completed_steps, 6);
    assert_eq!(ctx.store.level().await.level, 1);
}
