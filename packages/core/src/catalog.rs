// ABOUTME: Seed catalogs created on first run
// ABOUTME: Default categories, achievements, quests, templates and sample roadmaps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rewards::{
    Achievement, AchievementCategory, AchievementKind, AchievementRequirement, Quest, QuestKind,
    QuestRequirement, QuestStatus, QuestType,
};
use crate::types::{Category, CategoryColor, Roadmap, Step};

fn category(id: &str, name: &str, color: CategoryColor, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color,
        icon: icon.to_string(),
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category("programming", "Programming", CategoryColor::Cyan, "💻"),
        category("mathematics", "Mathematics", CategoryColor::Purple, "📐"),
        category("languages", "Languages", CategoryColor::Yellow, "🌍"),
        category("science", "Science", CategoryColor::Green, "🔬"),
        category("arts", "Arts & Design", CategoryColor::Pink, "🎨"),
        category("business", "Business", CategoryColor::Orange, "📊"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn achievement(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    xp: u64,
    category: AchievementCategory,
    kind: AchievementKind,
    value: u64,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        xp,
        category,
        requirement: AchievementRequirement { kind, value },
        unlocked_at: None,
        progress: 0,
    }
}

/// Fixed achievement catalog; scan order follows this order
#[rustfmt::skip]
pub fn default_achievements() -> Vec<Achievement> {
    use AchievementCategory::*;
    use AchievementKind::*;

    vec![
        achievement("first_step", "First Step", "Complete your first learning step", "👣", 50, Milestone, StepsCompleted, 1),
        achievement("step_master_10", "Getting Started", "Complete 10 learning steps", "📚", 100, Completion, StepsCompleted, 10),
        achievement("step_master_50", "Knowledge Seeker", "Complete 50 learning steps", "🎯", 250, Completion, StepsCompleted, 50),
        achievement("step_master_100", "Step Master", "Complete 100 learning steps", "🏆", 500, Completion, StepsCompleted, 100),
        achievement("roadmap_first", "Road Warrior", "Complete your first roadmap", "🗺️", 200, Milestone, RoadmapsCompleted, 1),
        achievement("roadmap_5", "Pathfinder", "Complete 5 roadmaps", "🧭", 500, Completion, RoadmapsCompleted, 5),
        achievement("roadmap_10", "Grand Explorer", "Complete 10 roadmaps", "🌟", 1000, Completion, RoadmapsCompleted, 10),
        achievement("streak_3", "Consistent Learner", "Maintain a 3-day learning streak", "🔥", 75, Streak, StreakDays, 3),
        achievement("streak_7", "Week Warrior", "Maintain a 7-day learning streak", "⚡", 200, Streak, StreakDays, 7),
        achievement("streak_30", "Monthly Master", "Maintain a 30-day learning streak", "💎", 1000, Streak, StreakDays, 30),
        achievement("study_60", "Focused Mind", "Study for 60 minutes total", "🧠", 100, Study, StudyMinutes, 60),
        achievement("study_300", "Deep Focus", "Study for 5 hours total", "🎧", 300, Study, StudyMinutes, 300),
        achievement("study_1000", "Marathon Learner", "Study for 1000 minutes total", "🏅", 750, Study, StudyMinutes, 1000),
        achievement("speed_learner", "Speed Learner", "Complete 5 steps in a single day", "⚡", 150, Special, StepsCompleted, 5),
        achievement("quest_hunter", "Quest Hunter", "Complete 10 quests", "🗡️", 300, Special, QuestsCompleted, 10),
    ]
}

#[allow(clippy::too_many_arguments)]
fn quest(
    id: &str,
    title: &str,
    description: &str,
    xp: u64,
    quest_type: QuestType,
    kind: QuestKind,
    value: u64,
    status: QuestStatus,
) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        xp,
        quest_type,
        requirement: QuestRequirement {
            kind,
            value,
            current: 0,
        },
        status,
        expires_at: None,
        completed_at: None,
    }
}

#[rustfmt::skip]
pub fn default_quests() -> Vec<Quest> {
    use QuestKind::*;
    use QuestStatus::*;
    use QuestType::*;

    vec![
        quest("daily_steps_3", "Daily Learner", "Complete 3 learning steps today", 50, Daily, CompleteSteps, 3, Available),
        quest("daily_pomodoro_2", "Focus Time", "Complete 2 Pomodoro sessions today", 75, Daily, PomodoroSessions, 2, Available),
        quest("daily_study_30", "Study Session", "Study for 30 minutes today", 60, Daily, StudyMinutes, 30, Available),
        quest("weekly_steps_15", "Weekly Progress", "Complete 15 steps this week", 200, Weekly, CompleteSteps, 15, Available),
        quest("weekly_roadmap", "Finish Strong", "Complete a roadmap this week", 300, Weekly, CompleteRoadmap, 1, Available),
        quest("weekly_streak_5", "Streak Builder", "Maintain a 5-day streak this week", 150, Weekly, LoginStreak, 5, Available),
        quest("special_marathon", "Study Marathon", "Study for 2 hours in one day", 250, Special, StudyMinutes, 120, Locked),
        quest("special_perfectionist", "Perfectionist", "Complete all daily quests in a single day", 400, Special, CompleteSteps, 10, Locked),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub steps: Vec<String>,
    pub author: String,
    pub downloads: u32,
    pub rating: f32,
    pub tags: Vec<String>,
    pub is_official: bool,
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    title: &str,
    description: &str,
    category_id: &str,
    steps: &[&str],
    downloads: u32,
    rating: f32,
    tags: &[&str],
) -> RoadmapTemplate {
    RoadmapTemplate {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category_id: category_id.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        author: "LearnPath".to_string(),
        downloads,
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_official: true,
    }
}

pub fn roadmap_templates() -> Vec<RoadmapTemplate> {
    vec![
        template(
            "react-fundamentals",
            "React Fundamentals",
            "Master React from basics to advanced concepts",
            "programming",
            &[
                "Understanding JSX and React Elements",
                "Components and Props",
                "State and Lifecycle",
                "Handling Events",
                "Conditional Rendering",
                "Lists and Keys",
                "Forms and Controlled Components",
                "Lifting State Up",
                "Composition vs Inheritance",
                "React Hooks Basics",
            ],
            1250,
            4.8,
            &["react", "javascript", "frontend"],
        ),
        template(
            "typescript-essentials",
            "TypeScript Essentials",
            "Learn TypeScript for better JavaScript development",
            "programming",
            &[
                "TypeScript Setup and Configuration",
                "Basic Types and Type Annotations",
                "Interfaces and Type Aliases",
                "Functions and Parameters",
                "Classes and OOP",
                "Generics",
                "Enums and Literal Types",
                "Type Guards and Narrowing",
            ],
            890,
            4.7,
            &["typescript", "javascript", "programming"],
        ),
        template(
            "spanish-basics",
            "Spanish for Beginners",
            "Start your Spanish language journey",
            "languages",
            &[
                "Alphabet and Pronunciation",
                "Greetings and Introductions",
                "Numbers 1-100",
                "Common Verbs (Ser, Estar, Tener)",
                "Present Tense Conjugation",
                "Days, Months, and Time",
                "Food and Restaurant Vocabulary",
                "Basic Conversation Practice",
            ],
            720,
            4.6,
            &["spanish", "language", "beginner"],
        ),
        template(
            "calculus-1",
            "Calculus I",
            "Foundation of differential calculus",
            "mathematics",
            &[
                "Limits and Continuity",
                "Definition of Derivative",
                "Differentiation Rules",
                "Chain Rule",
                "Implicit Differentiation",
                "Applications of Derivatives",
                "Related Rates",
                "Optimization Problems",
            ],
            560,
            4.5,
            &["math", "calculus", "university"],
        ),
        template(
            "ui-design-basics",
            "UI Design Fundamentals",
            "Learn the principles of great UI design",
            "arts",
            &[
                "Color Theory",
                "Typography Basics",
                "Layout and Spacing",
                "Visual Hierarchy",
                "Consistency and Patterns",
                "Responsive Design Principles",
                "Accessibility Basics",
            ],
            430,
            4.7,
            &["design", "ui", "ux"],
        ),
    ]
}

fn sample_roadmap(
    title: &str,
    description: &str,
    category_id: &str,
    study_minutes: u32,
    steps: &[(&str, bool)],
    now: DateTime<Utc>,
) -> Roadmap {
    let mut roadmap = Roadmap::new(title, category_id, now);
    roadmap.description = Some(description.to_string());
    roadmap.total_study_time = study_minutes;
    roadmap.steps = steps
        .iter()
        .map(|(title, completed)| {
            let mut step = Step::new(*title, now);
            step.set_completed(*completed, now);
            step
        })
        .collect();
    roadmap
}

/// Example roadmaps shown on first run
pub fn sample_roadmaps(now: DateTime<Utc>) -> Vec<Roadmap> {
    vec![
        sample_roadmap(
            "Learn React Fundamentals",
            "Master the core concepts of React including components, hooks, and state management.",
            "programming",
            120,
            &[
                ("Understand JSX syntax", true),
                ("Learn useState and useEffect hooks", true),
                ("Build reusable components", false),
                ("Implement context API", false),
                ("Master React Router", false),
            ],
            now,
        ),
        sample_roadmap(
            "Spanish Language Basics",
            "Learn conversational Spanish for travel and everyday communication.",
            "languages",
            90,
            &[
                ("Learn basic greetings", true),
                ("Master numbers and time", true),
                ("Study common verbs", true),
                ("Practice conversations", false),
            ],
            now,
        ),
        sample_roadmap(
            "Linear Algebra Essentials",
            "Build a strong foundation in linear algebra for machine learning.",
            "mathematics",
            45,
            &[
                ("Vectors and vector spaces", true),
                ("Matrix operations", false),
                ("Eigenvalues and eigenvectors", false),
            ],
            now,
        ),
    ]
}
