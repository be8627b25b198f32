use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::partition::{NameFormat, TimeWindow, WindowError};
use crate::tmsl::RefreshMode;

use super::policy::RolloverPolicy;

/// January days during which the previous year is still recreated to
/// absorb late-arriving rows.
const GRACE_DAYS: u32 = 7;

/// Year-policy state for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YearPhase {
    /// Only the current year is touched.
    Normal,
    /// First seven days of January, inclusive.
    GraceWindow,
}

/// Computes the Year-policy phase from today's date.
pub fn year_phase(today: NaiveDate) -> YearPhase {
    if today.month() == 1 && today.day() <= GRACE_DAYS {
        YearPhase::GraceWindow
    } else {
        YearPhase::Normal
    }
}

/// One planned action against a single partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "action")]
pub enum PlanStep {
    /// Create-or-replace the window's partition and, when `process` is
    /// set, refresh it.
    Ensure {
        window: TimeWindow,
        name_format: NameFormat,
        process: bool,
        /// Replaces the policy's refresh mode when set.
        refresh_override: Option<RefreshMode>,
    },
    /// Safe-delete the window's partition: recreate it first so the
    /// delete never targets a missing object.
    Retire {
        window: TimeWindow,
        name_format: NameFormat,
    },
}

/// Ordered steps of one rollover evaluation. Executed strictly in
/// sequence, one remote call at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolloverPlan {
    pub steps: Vec<PlanStep>,
}

impl RolloverPlan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Computes the Year-policy plan for `today`.
///
/// The current year is always (re)created. During the grace window the
/// previous year is recreated as well.
pub fn plan_year(today: NaiveDate, policy: &RolloverPolicy) -> Result<RolloverPlan, WindowError> {
    let process = !policy.create_only;
    let mut steps = vec![PlanStep::Ensure {
        window: TimeWindow::year(today.year())?,
        name_format: NameFormat::Year,
        process,
        refresh_override: None,
    }];
    if year_phase(today) == YearPhase::GraceWindow {
        steps.push(PlanStep::Ensure {
            window: TimeWindow::year(today.year() - 1)?,
            name_format: NameFormat::Year,
            process,
            refresh_override: None,
        });
    }
    Ok(RolloverPlan { steps })
}

/// Computes the Year+Month-policy plan for `today`.
///
/// The current month is always (re)created. On the 1st of an ordinary
/// month the just-closed month gets its authoritative reprocess; on the
/// 1st of January the previous year is consolidated instead: one
/// forced-full yearly partition, then the twelve superseded monthly
/// partitions retired in ascending order.
pub fn plan_year_month(
    today: NaiveDate,
    policy: &RolloverPolicy,
) -> Result<RolloverPlan, WindowError> {
    let process = !policy.create_only;
    let mut steps = vec![PlanStep::Ensure {
        window: TimeWindow::month(today.year(), today.month())?,
        name_format: NameFormat::MonthYear,
        process,
        refresh_override: None,
    }];

    if today.day() == 1 {
        if today.month() == 1 {
            let previous_year = today.year() - 1;
            // The yearly partition must be in place before any monthly
            // partition is retired.
            steps.push(PlanStep::Ensure {
                window: TimeWindow::year(previous_year)?,
                name_format: NameFormat::Year,
                process,
                refresh_override: Some(RefreshMode::full()),
            });
            for month in 1..=12 {
                steps.push(PlanStep::Retire {
                    window: TimeWindow::month(previous_year, month)?,
                    name_format: NameFormat::MonthYear,
                });
            }
        } else {
            steps.push(PlanStep::Ensure {
                window: TimeWindow::month(today.year(), today.month() - 1)?,
                name_format: NameFormat::MonthYear,
                process,
                refresh_override: None,
            });
        }
    }
    Ok(RolloverPlan { steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy() -> RolloverPolicy {
        RolloverPolicy {
            database: "Sales".to_string(),
            table: "Fact".to_string(),
            data_source: "SqlServer".to_string(),
            partition_prefix: "Fact_".to_string(),
            sql_template: "SELECT * FROM T WHERE {0}".to_string(),
            placeholder: "{0}".to_string(),
            date_column: "Date".to_string(),
            refresh_mode: RefreshMode::new("automatic"),
            create_only: false,
        }
    }

    #[test]
    fn test_year_phase_grace_window_bounds() {
        assert_eq!(year_phase(date(2020, 1, 1)), YearPhase::GraceWindow);
        assert_eq!(year_phase(date(2020, 1, 7)), YearPhase::GraceWindow);
        assert_eq!(year_phase(date(2020, 1, 8)), YearPhase::Normal);
        assert_eq!(year_phase(date(2020, 2, 5)), YearPhase::Normal);
    }

    #[test]
    fn test_plan_year_inside_grace_window() {
        let plan = plan_year(date(2020, 1, 5), &policy()).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.steps[0],
            PlanStep::Ensure {
                window: TimeWindow::year(2020).unwrap(),
                name_format: NameFormat::Year,
                process: true,
                refresh_override: None,
            }
        );
        assert_eq!(
            plan.steps[1],
            PlanStep::Ensure {
                window: TimeWindow::year(2019).unwrap(),
                name_format: NameFormat::Year,
                process: true,
                refresh_override: None,
            }
        );
    }

    #[test]
    fn test_plan_year_outside_grace_window() {
        let plan = plan_year(date(2020, 1, 8), &policy()).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.steps[0],
            PlanStep::Ensure {
                window: TimeWindow::year(2020).unwrap(),
                name_format: NameFormat::Year,
                process: true,
                refresh_override: None,
            }
        );
    }

    #[test]
    fn test_plan_year_create_only_suppresses_processing() {
        let mut policy = policy();
        policy.create_only = true;
        let plan = plan_year(date(2020, 1, 5), &policy).unwrap();
        assert!(plan
            .steps
            .iter()
            .all(|step| matches!(step, PlanStep::Ensure { process: false, .. })));
    }

    #[test]
    fn test_plan_year_month_midmonth_touches_only_current_month() {
        let plan = plan_year_month(date(2020, 6, 15), &policy()).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.steps[0],
            PlanStep::Ensure {
                window: TimeWindow::month(2020, 6).unwrap(),
                name_format: NameFormat::MonthYear,
                process: true,
                refresh_override: None,
            }
        );
    }

    #[test]
    fn test_plan_year_month_first_of_ordinary_month_reprocesses_previous() {
        let plan = plan_year_month(date(2020, 7, 1), &policy()).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.steps[1],
            PlanStep::Ensure {
                window: TimeWindow::month(2020, 6).unwrap(),
                name_format: NameFormat::MonthYear,
                process: true,
                refresh_override: None,
            }
        );
    }

    #[test]
    fn test_plan_year_month_january_first_consolidates_previous_year() {
        let plan = plan_year_month(date(2020, 1, 1), &policy()).unwrap();
        // Current month + yearly consolidation + 12 monthly retirements.
        assert_eq!(plan.len(), 14);

        assert_eq!(
            plan.steps[0],
            PlanStep::Ensure {
                window: TimeWindow::month(2020, 1).unwrap(),
                name_format: NameFormat::MonthYear,
                process: true,
                refresh_override: None,
            }
        );
        // The consolidated year is forced to a full reprocess and comes
        // before any retirement.
        assert_eq!(
            plan.steps[1],
            PlanStep::Ensure {
                window: TimeWindow::year(2019).unwrap(),
                name_format: NameFormat::Year,
                process: true,
                refresh_override: Some(RefreshMode::full()),
            }
        );
        for (index, month) in (1..=12).enumerate() {
            assert_eq!(
                plan.steps[2 + index],
                PlanStep::Retire {
                    window: TimeWindow::month(2019, month).unwrap(),
                    name_format: NameFormat::MonthYear,
                }
            );
        }
    }

    #[test]
    fn test_plan_year_month_ordinary_first_is_not_a_consolidation() {
        let plan = plan_year_month(date(2020, 2, 1), &policy()).unwrap();
        assert_eq!(plan.len(), 2);
        assert!(plan
            .steps
            .iter()
            .all(|step| matches!(step, PlanStep::Ensure { .. })));
    }

    #[test]
    fn test_plans_are_deterministic() {
        let today = date(2020, 1, 1);
        assert_eq!(
            plan_year_month(today, &policy()).unwrap(),
            plan_year_month(today, &policy()).unwrap()
        );
        assert_eq!(
            plan_year(today, &policy()).unwrap(),
            plan_year(today, &policy()).unwrap()
        );
    }
}
