use thiserror::Error;

use crate::model::code::ChapterCode;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("chapter index {index} is out of bounds for a plan of {len} chapters")]
    ChapterOutOfBounds { index: usize, len: usize },

    #[error("weight must be between 0 and 100, got {provided}")]
    WeightOutOfRange { provided: u32 },
}

//
// ─── CHAPTER ───────────────────────────────────────────────────────────────────
//

/// One chapter row in a weightage plan: an integer percentage share of the
/// question budget, and whether the chapter participates at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    name: String,
    code: ChapterCode,
    weight: u32,
    enabled: bool,
}

impl Chapter {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> ChapterCode {
        self.code
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Estimated number of questions this chapter contributes to a test with
    /// the given budget: `round(weight/100 * total)`, or 0 when disabled.
    ///
    /// Rounding is half-up, done in integer arithmetic. The per-chapter
    /// estimates are display hints and their sum may differ from
    /// `total_questions`.
    #[must_use]
    pub fn estimated_questions(&self, total_questions: u32) -> u32 {
        if !self.enabled {
            return 0;
        }
        (self.weight * total_questions + 50) / 100
    }
}

//
// ─── WEIGHTAGE PLAN ────────────────────────────────────────────────────────────
//

/// Ordered chapter weights for one subject.
///
/// Enabled weights are expected to total 100; the plan tolerates any total
/// while it is being edited (callers surface `total_weight() != 100` as a
/// warning) and only `is_balanced()` gates submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeightagePlan {
    chapters: Vec<Chapter>,
}

impl WeightagePlan {
    /// Creates a plan with an even split across all chapters.
    ///
    /// Every chapter gets `floor(100 / n)` percent except the last, which
    /// receives the remainder so the initial total is exactly 100. All
    /// chapters start enabled. An empty chapter list yields an empty plan;
    /// callers must treat that as "no chapters configured" rather than an
    /// error.
    #[must_use]
    pub fn initialize<I>(chapters: I) -> Self
    where
        I: IntoIterator<Item = (String, ChapterCode)>,
    {
        let chapters: Vec<(String, ChapterCode)> = chapters.into_iter().collect();
        let n = chapters.len();
        if n == 0 {
            return Self::default();
        }

        let base = (100 / n) as u32;
        let chapters = chapters
            .into_iter()
            .enumerate()
            .map(|(index, (name, code))| Chapter {
                name,
                code,
                weight: if index == n - 1 {
                    100 - base * (n as u32 - 1)
                } else {
                    base
                },
                enabled: true,
            })
            .collect();

        Self { chapters }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Iterates the enabled chapters in order.
    pub fn enabled(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter().filter(|c| c.enabled)
    }

    /// Overwrites one chapter's weight without normalizing the others.
    ///
    /// The running total becomes whatever the enabled weights now sum to;
    /// observing `total_weight() != 100` as a warning is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` if the index is out of bounds or the weight
    /// exceeds 100.
    pub fn set_weight(&mut self, index: usize, weight: u32) -> Result<(), PlanError> {
        if weight > 100 {
            return Err(PlanError::WeightOutOfRange { provided: weight });
        }
        let len = self.chapters.len();
        let chapter = self
            .chapters
            .get_mut(index)
            .ok_or(PlanError::ChapterOutOfBounds { index, len })?;
        chapter.weight = weight;
        Ok(())
    }

    /// Flips one chapter's enabled flag.
    ///
    /// Disabling a chapter sheds its weight: each remaining enabled chapter
    /// gains `floor(w / k)` where `k` is the remaining enabled count, and the
    /// disabled chapter's weight drops to 0. The integer remainder `w mod k`
    /// is lost, so the total can fall below 100. When the last enabled
    /// chapter is disabled there is no redistribution target; its raw weight
    /// is left in place but stops counting toward the total.
    ///
    /// Re-enabling performs no redistribution: the chapter comes back at
    /// whatever weight it last held (usually 0) and the user adjusts from
    /// there.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::ChapterOutOfBounds` if the index is out of bounds.
    pub fn toggle(&mut self, index: usize) -> Result<(), PlanError> {
        let len = self.chapters.len();
        let chapter = self
            .chapters
            .get_mut(index)
            .ok_or(PlanError::ChapterOutOfBounds { index, len })?;
        chapter.enabled = !chapter.enabled;
        if chapter.enabled {
            return Ok(());
        }

        let freed = chapter.weight;
        let remaining = self.enabled().count() as u32;
        if remaining > 0 {
            let share = freed / remaining;
            for other in self.chapters.iter_mut().filter(|c| c.enabled) {
                other.weight += share;
            }
            self.chapters[index].weight = 0;
        }
        Ok(())
    }

    /// Sum of weights over enabled chapters only.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.enabled().map(|c| c.weight).sum()
    }

    /// True iff the enabled weights total exactly 100. Submission is gated
    /// on this.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_weight() == 100
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_of(n: usize) -> WeightagePlan {
        WeightagePlan::initialize((0..n).map(|i| {
            (
                format!("Chapter {}", i + 1),
                ChapterCode::new(1, 1, (i + 1) as u8).unwrap(),
            )
        }))
    }

    fn weights(plan: &WeightagePlan) -> Vec<u32> {
        plan.chapters().iter().map(Chapter::weight).collect()
    }

    #[test]
    fn initialize_empty_yields_empty_plan() {
        let plan = WeightagePlan::initialize(Vec::new());
        assert!(plan.is_empty());
        assert_eq!(plan.total_weight(), 0);
        assert!(!plan.is_balanced());
    }

    #[test]
    fn initialize_four_chapters_splits_evenly() {
        let plan = plan_of(4);
        assert_eq!(weights(&plan), vec![25, 25, 25, 25]);
        assert!(plan.is_balanced());
    }

    #[test]
    fn initialize_three_chapters_gives_remainder_to_last() {
        let plan = plan_of(3);
        assert_eq!(weights(&plan), vec![33, 33, 34]);
        assert!(plan.is_balanced());
    }

    #[test]
    fn initialize_sums_to_100_for_any_count() {
        for n in 1..=20 {
            let plan = plan_of(n);
            assert_eq!(plan.total_weight(), 100, "n = {n}");

            let base = (100 / n) as u32;
            for chapter in &plan.chapters()[..n - 1] {
                assert_eq!(chapter.weight(), base, "n = {n}");
            }
            assert!(plan.chapters().iter().all(Chapter::is_enabled));
        }
    }

    #[test]
    fn set_weight_overwrites_without_normalizing() {
        let mut plan = plan_of(4);
        plan.set_weight(0, 60).unwrap();
        assert_eq!(weights(&plan), vec![60, 25, 25, 25]);
        assert_eq!(plan.total_weight(), 135);
        assert!(!plan.is_balanced());
    }

    #[test]
    fn set_weight_rejects_out_of_bounds_index() {
        let mut plan = plan_of(2);
        let err = plan.set_weight(2, 10).unwrap_err();
        assert_eq!(err, PlanError::ChapterOutOfBounds { index: 2, len: 2 });
    }

    #[test]
    fn set_weight_rejects_weight_above_100() {
        let mut plan = plan_of(2);
        let err = plan.set_weight(0, 101).unwrap_err();
        assert_eq!(err, PlanError::WeightOutOfRange { provided: 101 });
    }

    #[test]
    fn disable_redistributes_floor_share_to_remaining() {
        let mut plan = plan_of(3);
        // [33, 33, 34]: disabling the last chapter frees 34 across 2.
        plan.toggle(2).unwrap();

        assert_eq!(weights(&plan), vec![50, 50, 0]);
        assert!(!plan.chapter(2).unwrap().is_enabled());
        assert_eq!(plan.total_weight(), 100);
    }

    #[test]
    fn disable_loses_integer_remainder() {
        let mut plan = plan_of(3);
        // Disabling chapter 0 frees 33 across 2: each gains 16, 1 is lost.
        plan.toggle(0).unwrap();

        assert_eq!(weights(&plan), vec![0, 49, 50]);
        assert_eq!(plan.total_weight(), 99);
        assert!(!plan.is_balanced());
    }

    #[test]
    fn disable_follows_general_rule_for_arbitrary_weights() {
        for disable in 0..4 {
            let mut plan = plan_of(4);
            plan.set_weight(0, 10).unwrap();
            plan.set_weight(1, 20).unwrap();
            plan.set_weight(2, 30).unwrap();
            plan.set_weight(3, 40).unwrap();

            let before = weights(&plan);
            let freed = before[disable];
            let old_total = plan.total_weight();

            plan.toggle(disable).unwrap();

            let k = 3u32;
            let share = freed / k;
            for (index, chapter) in plan.chapters().iter().enumerate() {
                if index == disable {
                    assert_eq!(chapter.weight(), 0);
                } else {
                    assert_eq!(chapter.weight(), before[index] + share);
                }
            }
            assert_eq!(plan.total_weight(), old_total - freed % k);
        }
    }

    #[test]
    fn disabling_last_enabled_chapter_keeps_raw_weight() {
        let mut plan = plan_of(1);
        assert_eq!(weights(&plan), vec![100]);

        plan.toggle(0).unwrap();
        assert_eq!(plan.total_weight(), 0);
        // No redistribution target, so the raw weight stays behind.
        assert_eq!(plan.chapter(0).unwrap().weight(), 100);

        plan.toggle(0).unwrap();
        assert_eq!(plan.total_weight(), 100);
        assert!(plan.is_balanced());
    }

    #[test]
    fn disable_redistributes_and_enable_does_not() {
        // Disabling sheds weight to the others; re-enabling reclaims nothing.
        // This asymmetry is deliberate: changing it would silently alter how
        // totals drift, so it is pinned here.
        let mut plan = plan_of(3);
        plan.toggle(0).unwrap();
        assert_eq!(weights(&plan), vec![0, 49, 50]);

        plan.toggle(0).unwrap();
        assert!(plan.chapter(0).unwrap().is_enabled());
        assert_eq!(weights(&plan), vec![0, 49, 50]);
        assert_eq!(plan.total_weight(), 99);
    }

    #[test]
    fn toggle_rejects_out_of_bounds_index() {
        let mut plan = plan_of(2);
        let err = plan.toggle(5).unwrap_err();
        assert_eq!(err, PlanError::ChapterOutOfBounds { index: 5, len: 2 });
    }

    #[test]
    fn total_weight_counts_enabled_only() {
        let mut plan = plan_of(4);
        plan.toggle(1).unwrap();
        plan.set_weight(1, 80).unwrap();

        // A disabled chapter can hold weight without contributing.
        assert_eq!(plan.chapter(1).unwrap().weight(), 80);
        assert_eq!(
            plan.total_weight(),
            plan.enabled().map(Chapter::weight).sum::<u32>()
        );
    }

    #[test]
    fn estimated_questions_rounds_half_up() {
        let mut plan = plan_of(2);
        plan.set_weight(0, 33).unwrap();
        plan.set_weight(1, 25).unwrap();

        // 33% of 50 = 16.5 -> 17; 25% of 50 = 12.5 -> 13.
        assert_eq!(plan.chapter(0).unwrap().estimated_questions(50), 17);
        assert_eq!(plan.chapter(1).unwrap().estimated_questions(50), 13);
    }

    #[test]
    fn estimated_questions_zero_when_disabled() {
        let mut plan = plan_of(2);
        plan.toggle(0).unwrap();
        assert_eq!(plan.chapter(0).unwrap().estimated_questions(100), 0);
    }

    #[test]
    fn estimated_questions_monotonic_in_weight() {
        let mut plan = plan_of(2);
        for total in [1, 37, 50, 100, 200] {
            let mut previous = 0;
            for weight in 0..=100 {
                plan.set_weight(0, weight).unwrap();
                let estimate = plan.chapter(0).unwrap().estimated_questions(total);
                assert!(estimate >= previous, "total = {total}, weight = {weight}");
                previous = estimate;
            }
        }
    }

    #[test]
    fn four_chapters_hundred_questions_scenario() {
        let plan = plan_of(4);
        let estimates: Vec<u32> = plan
            .chapters()
            .iter()
            .map(|c| c.estimated_questions(100))
            .collect();
        assert_eq!(estimates, vec![25, 25, 25, 25]);
    }

    #[test]
    fn is_balanced_tracks_total_through_arbitrary_edits() {
        let mut plan = plan_of(5);
        assert!(plan.is_balanced());

        plan.set_weight(0, 10).unwrap();
        assert_eq!(plan.is_balanced(), plan.total_weight() == 100);

        plan.toggle(3).unwrap();
        assert_eq!(plan.is_balanced(), plan.total_weight() == 100);

        plan.toggle(3).unwrap();
        plan.set_weight(3, 0).unwrap();
        assert_eq!(plan.is_balanced(), plan.total_weight() == 100);

        // Steer the total back to exactly 100 and confirm the gate opens.
        let total = plan.total_weight();
        let first = plan.chapter(0).unwrap().weight();
        if total < 100 {
            plan.set_weight(0, first + (100 - total)).unwrap();
        } else {
            plan.set_weight(0, first - (total - 100)).unwrap();
        }
        assert!(plan.is_balanced());
    }
}
