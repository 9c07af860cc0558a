// ABOUTME: Completion percentages over a roadmap, a category or the whole collection
// ABOUTME: Pure functions, recomputed on demand from the live steps

use learnpath_core::{AppState, Roadmap, Step};

/// Integer percentage rounded half-up: `round(100 * completed / total)`, 0 when `total` is 0
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u8
}

pub fn step_completion_ratio<'a>(steps: impl IntoIterator<Item = &'a Step>) -> u8 {
    let (completed, total) = steps
        .into_iter()
        .fold((0, 0), |(done, all), step| (done + step.completed as usize, all + 1));
    percentage(completed, total)
}

pub fn roadmap_progress(roadmap: &Roadmap) -> u8 {
    step_completion_ratio(&roadmap.steps)
}

/// Ratio over every step of every roadmap; large roadmaps weigh proportionally more
pub fn overall_progress(state: &AppState) -> u8 {
    step_completion_ratio(state.roadmaps.iter().flat_map(|r| r.steps.iter()))
}

pub fn category_progress(state: &AppState, category_id: &str) -> u8 {
    step_completion_ratio(
        state
            .roadmaps
            .iter()
            .filter(|r| r.category_id == category_id)
            .flat_map(|r| r.steps.iter()),
    )
}

/// Completed step count across every roadmap
pub fn completed_step_count(state: &AppState) -> usize {
    state.roadmaps.iter().map(Roadmap::completed_steps).sum()
}

/// Roadmaps with at least one step where every step is done
pub fn completed_roadmap_count(state: &AppState) -> usize {
    state.roadmaps.iter().filter(|r| r.is_complete()).count()
}

/// Study minutes summed across roadmaps
pub fn total_study_time(state: &AppState) -> u64 {
    state
        .roadmaps
        .iter()
        .map(|r| u64::from(r.total_study_time))
        .sum()
}


#[cfg(test)]
mod tests {
    use super::test_support::roadmap;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 5, 20)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)]
    #[case(1, 200, 1)]
    #[case(1, 201, 0)]
    #[case(5, 5, 100)]
    fn test_percentage_rounds_half_up(
        #[case] completed: usize,
        #[case] total: usize,
        #[case] expected: u8,
    ) {
        assert_eq!(percentage(completed, total), expected);
    }

    #[test]
    fn test_roadmap_progress() {
        assert_eq!(roadmap_progress(&roadmap("programming", 5, 1)), 20);
        assert_eq!(roadmap_progress(&roadmap("programming", 0, 0)), 0);
        assert_eq!(roadmap_progress(&roadmap("programming", 4, 4)), 100);
    }

    #[test]
    fn test_overall_progress_weights_by_step_count() {
        let mut state = AppState::empty();
        state.roadmaps.push(roadmap("programming", 99, 0));
        state.roadmaps.push(roadmap("languages", 1, 1));

        // An average of per-roadmap percentages would give 50
        assert_eq!(overall_progress(&state), 1);
    }

    #[test]
    fn test_empty_roadmap_leaves_overall_unchanged() {
        let mut state = AppState::empty();
        state.roadmaps.push(roadmap("programming", 3, 2));
        let before = overall_progress(&state);

        state.roadmaps.push(roadmap("languages", 0, 0));
        assert_eq!(overall_progress(&state), before);
    }

    #[test]
    fn test_category_progress() {
        let mut state = AppState::empty();
        state.roadmaps.push(roadmap("programming", 4, 1));
        state.roadmaps.push(roadmap("programming", 4, 3));
        state.roadmaps.push(roadmap("languages", 2, 0));

        assert_eq!(category_progress(&state, "programming"), 50);
        assert_eq!(category_progress(&state, "languages"), 0);
        assert_eq!(category_progress(&state, "missing"), 0);
    }

    #[test]
    fn test_counts() {
        let mut state = AppState::empty();
        state.roadmaps.push(roadmap("programming", 2, 2));
        state.roadmaps.push(roadmap("programming", 3, 1));
        state.roadmaps.push(roadmap("languages", 0, 0));
        state.roadmaps[0].total_study_time = 30;
        state.roadmaps[1].total_study_time = 15;

        assert_eq!(completed_step_count(&state), 3);
        assert_eq!(completed_roadmap_count(&state), 1);
        assert_eq!(total_study_time(&state), 45);
    }
}
