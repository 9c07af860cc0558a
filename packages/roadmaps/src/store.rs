// ABOUTME: The single owner of application state and the full action API
// ABOUTME: Validates, mutates, runs post-mutation effects and persists after every action

use chrono::NaiveDate;
use learnpath_core::{
    generate_id, level_from_xp, validate_description, validate_title, ActivityKind, AppState,
    Category, CategoryCreateInput, CategoryUpdateInput, LevelInfo, PomodoroSession, Resource,
    ResourceCreateInput, Roadmap, RoadmapCreateInput, RoadmapTemplate, RoadmapUpdateInput, Step,
    StepCreateInput, StepUpdateInput, UserSettings, ValidationError, POMODORO_XP_PER_MINUTE,
    STEP_COMPLETION_XP,
};
use learnpath_gamification::{
    add_xp, reset_daily_quests, reset_weekly_quests, unlock_quest, Clock, EffectPipeline,
    QualifyingAction, SystemClock, XpGrant,
};
use learnpath_settings::{apply_settings_update, SettingsUpdate};
use learnpath_storage::{compress_data, decode_import, encode_snapshot, SnapshotStore};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::{ImportError, StoreError, StoreResult};
use crate::templates::{find_template, roadmap_from_template, search_templates};
use crate::types::{ActionOutcome, ImportSummary, PomodoroInput, ScheduledStep};

fn find_roadmap<'a>(state: &'a mut AppState, roadmap_id: &str) -> StoreResult<&'a mut Roadmap> {
    state
        .roadmap_mut(roadmap_id)
        .ok_or_else(|| StoreError::RoadmapNotFound(roadmap_id.to_string()))
}

fn find_step<'a>(roadmap: &'a mut Roadmap, step_id: &str) -> StoreResult<&'a mut Step> {
    roadmap
        .step_mut(step_id)
        .ok_or_else(|| StoreError::StepNotFound(step_id.to_string()))
}

fn build_step(input: &StepCreateInput, now: chrono::DateTime<chrono::Utc>) -> StoreResult<Step> {
    let mut step = Step::new(validate_title("step title", &input.title)?, now);
    step.description = validate_description(input.description.as_deref())?;
    step.due_date = input.due_date;
    Ok(step)
}

/// Owns the one [`AppState`]. Every action takes the lock, so actions are
/// applied one at a time and each one persists the snapshot it produced.
pub struct RoadmapStore {
    state: Mutex<AppState>,
    storage: Arc<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    pipeline: EffectPipeline,
}

impl RoadmapStore {
    pub fn new(state: AppState, storage: Arc<dyn SnapshotStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(state),
            storage,
            clock,
            pipeline: EffectPipeline::standard(),
        }
    }

    /// Load the persisted snapshot, falling back to the first-run seed when
    /// nothing is stored or the stored snapshot cannot be read
    pub async fn load(storage: Arc<dyn SnapshotStore>, clock: Arc<dyn Clock>) -> Self {
        let state = match storage.load().await {
            Ok(Some(state)) => {
                info!(
                    "Loaded {} roadmaps from {}",
                    state.roadmaps.len(),
                    storage.location()
                );
                state
            }
            Ok(None) => {
                info!("No saved data at {}, starting fresh", storage.location());
                AppState::seeded(clock.now())
            }
            Err(e) => {
                error!("Failed to read snapshot from {}: {}", storage.location(), e);
                warn!("Using default seed state");
                AppState::seeded(clock.now())
            }
        };
        Self::new(state, storage, clock)
    }

    /// Load using the wall clock
    pub async fn open(storage: Arc<dyn SnapshotStore>) -> Self {
        Self::load(storage, Arc::new(SystemClock)).await
    }

    pub fn with_pipeline(mut self, pipeline: EffectPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    async fn persist(&self, state: &AppState) {
        if let Err(e) = self.storage.save(state).await {
            error!(
                "Failed to persist snapshot to {}: {}",
                self.storage.location(),
                e
            );
        }
    }

    // Roadmaps

    pub async fn add_roadmap(&self, input: RoadmapCreateInput) -> StoreResult<Roadmap> {
        let now = self.clock.now();
        let title = validate_title("roadmap title", &input.title)?;
        let description = validate_description(input.description.as_deref())?;
        let steps = input
            .steps
            .iter()
            .map(|s| build_step(s, now))
            .collect::<StoreResult<Vec<_>>>()?;

        let mut roadmap = Roadmap::new(title, input.category_id.unwrap_or_default(), now);
        roadmap.description = description;
        roadmap.steps = steps;

        let mut guard = self.state.lock().await;
        guard.roadmaps.push(roadmap.clone());
        self.persist(&guard).await;

        info!("Created roadmap '{}' with ID {}", roadmap.title, roadmap.id);
        Ok(roadmap)
    }

    pub async fn update_roadmap(
        &self,
        roadmap_id: &str,
        input: RoadmapUpdateInput,
    ) -> StoreResult<Roadmap> {
        let now = self.clock.now();
        let title = input
            .title
            .as_deref()
            .map(|t| validate_title("roadmap title", t))
            .transpose()?;
        let description = input
            .description
            .map(|d| validate_description(d.as_deref()))
            .transpose()?;

        let mut guard = self.state.lock().await;
        let roadmap = find_roadmap(&mut guard, roadmap_id)?;
        if let Some(title) = title {
            roadmap.title = title;
        }
        if let Some(description) = description {
            roadmap.description = description;
        }
        if let Some(category_id) = input.category_id {
            roadmap.category_id = category_id;
        }
        roadmap.touch(now);
        let updated = roadmap.clone();
        self.persist(&guard).await;

        info!("Updated roadmap '{}'", updated.title);
        Ok(updated)
    }

    pub async fn delete_roadmap(&self, roadmap_id: &str) -> StoreResult<Roadmap> {
        let mut guard = self.state.lock().await;
        let index = guard
            .roadmaps
            .iter()
            .position(|r| r.id == roadmap_id)
            .ok_or_else(|| StoreError::RoadmapNotFound(roadmap_id.to_string()))?;
        let removed = guard.roadmaps.remove(index);
        self.persist(&guard).await;

        info!("Deleted roadmap '{}'", removed.title);
        Ok(removed)
    }

    pub async fn add_roadmap_from_template(&self, template_id: &str) -> StoreResult<Roadmap> {
        let template = find_template(template_id)
            .ok_or_else(|| StoreError::TemplateNotFound(template_id.to_string()))?;
        let roadmap = roadmap_from_template(&template, self.clock.now());

        let mut guard = self.state.lock().await;
        guard.roadmaps.push(roadmap.clone());
        self.persist(&guard).await;

        info!("Created roadmap '{}' from template {}", roadmap.title, template.id);
        Ok(roadmap)
    }

    pub fn search_templates(&self, query: &str, category: Option<&str>) -> Vec<RoadmapTemplate> {
        search_templates(query, category)
    }

    // Steps

    pub async fn add_step(&self, roadmap_id: &str, input: StepCreateInput) -> StoreResult<Step> {
        let now = self.clock.now();
        let step = build_step(&input, now)?;

        let mut guard = self.state.lock().await;
        let roadmap = find_roadmap(&mut guard, roadmap_id)?;
        roadmap.steps.push(step.clone());
        roadmap.touch(now);
        self.persist(&guard).await;

        debug!("Added step '{}' to roadmap {}", step.title, roadmap_id);
        Ok(step)
    }

    pub async fn update_step(
        &self,
        roadmap_id: &str,
        step_id: &str,
        input: StepUpdateInput,
    ) -> StoreResult<Step> {
        let now = self.clock.now();
        let title = input
            .title
            .as_deref()
            .map(|t| validate_title("step title", t))
            .transpose()?;
        let description = input
            .description
            .map(|d| validate_description(d.as_deref()))
            .transpose()?;

        let mut guard = self.state.lock().await;
        let roadmap = find_roadmap(&mut guard, roadmap_id)?;
        let step = find_step(roadmap, step_id)?;
        if let Some(title) = title {
            step.title = title;
        }
        if let Some(description) = description {
            step.description = description;
        }
        if let Some(due_date) = input.due_date {
            step.due_date = due_date;
        }
        let updated = step.clone();
        roadmap.touch(now);
        self.persist(&guard).await;

        Ok(updated)
    }

    pub async fn delete_step(&self, roadmap_id: &str, step_id: &str) -> StoreResult<Step> {
        let now = self.clock.now();
        let mut guard = self.state.lock().await;
        let roadmap = find_roadmap(&mut guard, roadmap_id)?;
        let index = roadmap
            .steps
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| StoreError::StepNotFound(step_id.to_string()))?;
        let removed = roadmap.steps.remove(index);
        roadmap.touch(now);
        self.persist(&guard).await;

        debug!("Deleted step '{}' from roadmap {}", removed.title, roadmap_id);
        Ok(removed)
    }

    /// Flip a step's completion. Completing grants step XP and runs the effect
    /// pipeline; un-completing only clears the flag and revokes nothing.
    pub async fn toggle_step(
        &self,
        roadmap_id: &str,
        step_id: &str,
    ) -> StoreResult<ActionOutcome<Step>> {
        let now = self.clock.now();
        let today = self.clock.today();

        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let xp_before = state.total_xp;

        let roadmap = find_roadmap(state, roadmap_id)?;
        let roadmap_title = roadmap.title.clone();
        let step = find_step(roadmap, step_id)?;
        let completing = !step.completed;
        step.set_completed(completing, now);
        let step = step.clone();
        roadmap.touch(now);
        let roadmap_finished = roadmap.is_complete();

        if !completing {
            self.persist(state).await;
            info!("Step '{}' marked incomplete", step.title);
            return Ok(ActionOutcome::plain(step));
        }

        let grant = XpGrant::new(
            ActivityKind::StepCompleted,
            STEP_COMPLETION_XP,
            format!("Completed: {}", step.title),
        )
        .description(format!("From {}", roadmap_title))
        .related(step.id.clone());
        add_xp(state, grant, now);

        let action = QualifyingAction::StepCompleted {
            roadmap_id: roadmap_id.to_string(),
            roadmap_finished,
        };
        let report = self.pipeline.run(state, &action, now, today);
        let xp_awarded = state.total_xp - xp_before;
        self.persist(state).await;

        info!("Step '{}' completed (+{} XP)", step.title, xp_awarded);
        Ok(ActionOutcome {
            value: step,
            xp_awarded,
            report: Some(report),
        })
    }

    // Resources

    pub async fn add_resource(
        &self,
        roadmap_id: &str,
        step_id: &str,
        input: ResourceCreateInput,
    ) -> StoreResult<Resource> {
        let now = self.clock.now();
        let resource = Resource {
            id: generate_id("res"),
            resource_type: input.resource_type,
            title: validate_title("resource title", &input.title)?,
            content: input.content.trim().to_string(),
            created_at: now,
        };

        let mut guard = self.state.lock().await;
        let roadmap = find_roadmap(&mut guard, roadmap_id)?;
        find_step(roadmap, step_id)?.resources.push(resource.clone());
        roadmap.touch(now);
        self.persist(&guard).await;

        debug!("Added resource '{}' to step {}", resource.title, step_id);
        Ok(resource)
    }

    pub async fn remove_resource(
        &self,
        roadmap_id: &str,
        step_id: &str,
        resource_id: &str,
    ) -> StoreResult<Resource> {
        let now = self.clock.now();
        let mut guard = self.state.lock().await;
        let roadmap = find_roadmap(&mut guard, roadmap_id)?;
        let step = find_step(roadmap, step_id)?;
        let index = step
            .resources
            .iter()
            .position(|r| r.id == resource_id)
            .ok_or_else(|| StoreError::ResourceNotFound(resource_id.to_string()))?;
        let removed = step.resources.remove(index);
        roadmap.touch(now);
        self.persist(&guard).await;

        Ok(removed)
    }

    // Pomodoro

    /// Record a pomodoro run. Always qualifying: adds study time, grants
    /// XP per minute and runs the effect pipeline.
    pub async fn add_pomodoro_session(
        &self,
        input: PomodoroInput,
    ) -> StoreResult<ActionOutcome<PomodoroSession>> {
        if input.duration == 0 {
            return Err(ValidationError::NotPositive { field: "duration" }.into());
        }
        let now = self.clock.now();
        let today = self.clock.today();

        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let xp_before = state.total_xp;

        let roadmap = find_roadmap(state, &input.roadmap_id)?;
        roadmap.total_study_time = roadmap.total_study_time.saturating_add(input.duration);
        roadmap.touch(now);

        let session = PomodoroSession {
            id: generate_id("pom"),
            roadmap_id: input.roadmap_id.clone(),
            start_time: input.start_time,
            end_time: input.end_time,
            duration: input.duration,
            completed: input.completed,
        };
        state.pomodoro_sessions.push(session.clone());

        let grant = XpGrant::new(
            ActivityKind::PomodoroCompleted,
            u64::from(input.duration) * POMODORO_XP_PER_MINUTE,
            "Pomodoro Session Complete",
        )
        .description(format!("{} minutes of focused study", input.duration))
        .related(input.roadmap_id.clone());
        add_xp(state, grant, now);

        let action = QualifyingAction::PomodoroCompleted {
            roadmap_id: input.roadmap_id,
            minutes: input.duration,
        };
        let report = self.pipeline.run(state, &action, now, today);
        let xp_awarded = state.total_xp - xp_before;
        self.persist(state).await;

        info!(
            "Recorded {} minute pomodoro (+{} XP)",
            session.duration, xp_awarded
        );
        Ok(ActionOutcome {
            value: session,
            xp_awarded,
            report: Some(report),
        })
    }

    // Categories

    pub async fn add_category(&self, input: CategoryCreateInput) -> StoreResult<Category> {
        let category = Category {
            id: generate_id("cat"),
            name: validate_title("category name", &input.name)?,
            color: input.color,
            icon: input.icon,
        };

        let mut guard = self.state.lock().await;
        guard.categories.push(category.clone());
        self.persist(&guard).await;

        info!("Created category '{}'", category.name);
        Ok(category)
    }

    pub async fn update_category(
        &self,
        category_id: &str,
        input: CategoryUpdateInput,
    ) -> StoreResult<Category> {
        let name = input
            .name
            .as_deref()
            .map(|n| validate_title("category name", n))
            .transpose()?;

        let mut guard = self.state.lock().await;
        let category = guard
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| StoreError::CategoryNotFound(category_id.to_string()))?;
        if let Some(name) = name {
            category.name = name;
        }
        if let Some(color) = input.color {
            category.color = color;
        }
        if let Some(icon) = input.icon {
            category.icon = icon;
        }
        let updated = category.clone();
        self.persist(&guard).await;

        Ok(updated)
    }

    /// Remove a category. Roadmaps that referenced it become uncategorized.
    pub async fn delete_category(&self, category_id: &str) -> StoreResult<Category> {
        let now = self.clock.now();
        let mut guard = self.state.lock().await;
        let index = guard
            .categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(|| StoreError::CategoryNotFound(category_id.to_string()))?;
        let removed = guard.categories.remove(index);

        let mut orphaned = 0;
        for roadmap in guard
            .roadmaps
            .iter_mut()
            .filter(|r| r.category_id == category_id)
        {
            roadmap.category_id.clear();
            roadmap.touch(now);
            orphaned += 1;
        }
        self.persist(&guard).await;

        info!(
            "Deleted category '{}', {} roadmaps now uncategorized",
            removed.name, orphaned
        );
        Ok(removed)
    }

    // Settings

    pub async fn update_settings(&self, update: SettingsUpdate) -> StoreResult<UserSettings> {
        let mut guard = self.state.lock().await;
        let next = apply_settings_update(&guard.settings, update)?;
        guard.settings = next.clone();
        self.persist(&guard).await;

        debug!("Settings updated");
        Ok(next)
    }

    // XP and quests

    /// Grant XP directly. Zero is ignored and returns `false`.
    pub async fn add_xp(
        &self,
        kind: ActivityKind,
        amount: u64,
        reason: &str,
        related_id: Option<&str>,
    ) -> bool {
        let mut grant = XpGrant::new(kind, amount, reason);
        if let Some(id) = related_id {
            grant = grant.related(id);
        }

        let mut guard = self.state.lock().await;
        let granted = add_xp(&mut guard, grant, self.clock.now());
        if granted {
            self.persist(&guard).await;
        }
        granted
    }

    pub async fn reset_daily_quests(&self) -> usize {
        let mut guard = self.state.lock().await;
        let reset = reset_daily_quests(&mut guard);
        self.persist(&guard).await;
        reset
    }

    pub async fn reset_weekly_quests(&self) -> usize {
        let mut guard = self.state.lock().await;
        let reset = reset_weekly_quests(&mut guard);
        self.persist(&guard).await;
        reset
    }

    pub async fn unlock_quest(&self, quest_id: &str) -> bool {
        let mut guard = self.state.lock().await;
        let unlocked = unlock_quest(&mut guard, quest_id);
        if unlocked {
            self.persist(&guard).await;
        }
        unlocked
    }

    // Import / export

    /// Replace the whole state with an imported snapshot (plain or gzip JSON).
    /// On failure the current state is left untouched.
    pub async fn import_json(&self, data: &[u8]) -> Result<ImportSummary, ImportError> {
        let imported = match decode_import(data) {
            Ok(state) => state,
            Err(e) => {
                warn!("Rejected import: {}", e);
                return Err(e.into());
            }
        };
        let summary = ImportSummary {
            roadmaps: imported.roadmaps.len(),
            categories: imported.categories.len(),
        };

        let mut guard = self.state.lock().await;
        *guard = imported;
        self.persist(&guard).await;

        info!(
            "Imported {} roadmaps and {} categories",
            summary.roadmaps, summary.categories
        );
        Ok(summary)
    }

    /// Full-fidelity JSON snapshot
    pub async fn export_json(&self) -> StoreResult<Vec<u8>> {
        let guard = self.state.lock().await;
        Ok(encode_snapshot(&guard)?)
    }

    /// JSON snapshot, gzip-compressed when `compress` is set
    pub async fn export_backup(&self, compress: bool) -> StoreResult<Vec<u8>> {
        let data = self.export_json().await?;
        if compress {
            Ok(compress_data(&data)?)
        } else {
            Ok(data)
        }
    }

    pub async fn export_markdown(&self) -> String {
        let guard = self.state.lock().await;
        learnpath_formatter::export_markdown(&guard)
    }

    // Queries

    /// Run a read-only query against the current state
    pub async fn read<R>(&self, query: impl FnOnce(&AppState) -> R) -> R {
        let guard = self.state.lock().await;
        query(&guard)
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    pub async fn roadmap(&self, roadmap_id: &str) -> Option<Roadmap> {
        self.read(|s| s.roadmap(roadmap_id).cloned()).await
    }

    pub async fn roadmap_progress(&self, roadmap_id: &str) -> Option<u8> {
        self.read(|s| s.roadmap(roadmap_id).map(learnpath_progress::roadmap_progress))
            .await
    }

    pub async fn overall_progress(&self) -> u8 {
        self.read(learnpath_progress::overall_progress).await
    }

    pub async fn category_progress(&self, category_id: &str) -> u8 {
        self.read(|s| learnpath_progress::category_progress(s, category_id))
            .await
    }

    pub async fn upcoming_steps(&self) -> Vec<ScheduledStep> {
        let today = self.today();
        self.read(|s| {
            learnpath_progress::upcoming_steps(s, today)
                .into_iter()
                .map(ScheduledStep::from)
                .collect()
        })
        .await
    }

    pub async fn overdue_steps(&self) -> Vec<ScheduledStep> {
        let today = self.today();
        self.read(|s| {
            learnpath_progress::overdue_steps(s, today)
                .into_iter()
                .map(ScheduledStep::from)
                .collect()
        })
        .await
    }

    pub async fn due_soon_count(&self) -> usize {
        let today = self.today();
        self.read(|s| learnpath_progress::due_soon_count(s, today))
            .await
    }

    pub async fn total_study_time(&self) -> u64 {
        self.read(learnpath_progress::total_study_time).await
    }

    pub async fn statistics(&self) -> learnpath_progress::Statistics {
        let today = self.today();
        self.read(|s| learnpath_progress::compute_statistics(s, today))
            .await
    }

    pub async fn level(&self) -> LevelInfo {
        self.read(|s| level_from_xp(s.total_xp)).await
    }
}
