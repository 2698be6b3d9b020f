//! Planner state container.
//!
//! Owns the goal list and allocation tables. All mutation flows through
//! named transitions that validate fully before touching state; a rejected
//! transition leaves the data exactly as it was.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::allocation_model::{
    validate_allocation, validate_asset_mix, AllocationEntry, AssetSplit, TermKeyed,
};
use crate::allocation::catalog::default_asset_mix;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalSelector, NewGoal, TermType};
use crate::goals::term_policy::TermPolicy;

/// The aggregate root: every goal and every allocation table, in display
/// order. Derived summaries are always recomputed from this, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerData {
    pub financial_goals: Vec<Goal>,
    /// Asset-class split per term bucket.
    pub assets: TermKeyed<Vec<AssetSplit>>,
    /// Instrument allocation per term bucket.
    pub allocations: TermKeyed<Vec<AllocationEntry>>,
}

impl Default for PlannerData {
    fn default() -> Self {
        PlannerData {
            financial_goals: Vec::new(),
            assets: TermKeyed {
                short_term: default_asset_mix(TermType::ShortTerm),
                medium_term: default_asset_mix(TermType::MediumTerm),
                long_term: default_asset_mix(TermType::LongTerm),
            },
            allocations: TermKeyed::default(),
        }
    }
}

/// Named mutation, as dispatched by the interface layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum PlannerAction {
    AddGoal(NewGoal),
    #[serde(rename_all = "camelCase")]
    UpdateGoal { id: String, goal: NewGoal },
    RemoveGoal(GoalSelector),
    #[serde(rename_all = "camelCase")]
    UpdateAssets {
        term_type: TermType,
        splits: Vec<AssetSplit>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateInvestmentAllocation {
        term_type: TermType,
        entries: Vec<AllocationEntry>,
    },
}

/// State container over [`PlannerData`].
#[derive(Debug, Clone, Default)]
pub struct PlannerStore {
    data: PlannerData,
    term_policy: TermPolicy,
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(term_policy: TermPolicy) -> Self {
        PlannerStore {
            data: PlannerData::default(),
            term_policy,
        }
    }

    pub fn data(&self) -> &PlannerData {
        &self.data
    }

    pub fn term_policy(&self) -> TermPolicy {
        self.term_policy
    }

    /// Append a goal. Rejects a blank name, a non-positive target amount, or
    /// a target date not after the start date.
    pub fn add_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        let goal = self.build_goal(new_goal)?;
        debug!("added goal '{}' ({})", goal.name, goal.term_type);
        self.data.financial_goals.push(goal.clone());
        Ok(goal)
    }

    /// Replace the goal with the given id wholesale. The id and creation
    /// timestamp survive the edit; everything else is rebuilt.
    pub fn update_goal(&mut self, id: &str, new_goal: NewGoal) -> Result<Goal> {
        let replacement = self.build_goal(new_goal)?;
        let existing = self
            .data
            .financial_goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| Error::NotFound(format!("goal '{}' not found", id)))?;

        let goal = Goal {
            id: existing.id.clone(),
            created_at: existing.created_at,
            ..replacement
        };
        *existing = goal.clone();
        debug!("updated goal '{}' ({})", goal.name, goal.term_type);
        Ok(goal)
    }

    /// Remove a goal by index or id/name key, returning the removed record.
    pub fn remove_goal(&mut self, selector: &GoalSelector) -> Result<Goal> {
        let position = match selector {
            GoalSelector::Index(index) if *index < self.data.financial_goals.len() => Some(*index),
            GoalSelector::Index(_) => None,
            GoalSelector::Key(key) => self
                .data
                .financial_goals
                .iter()
                .position(|goal| goal.id == *key || goal.name == *key),
        };

        match position {
            Some(index) => {
                let goal = self.data.financial_goals.remove(index);
                debug!("removed goal '{}'", goal.name);
                Ok(goal)
            }
            None => Err(Error::NotFound(format!("goal '{}' not found", selector))),
        }
    }

    /// Replace a term bucket's instrument allocation. All-or-nothing: on a
    /// failed validation the stored entries are untouched.
    pub fn set_allocation(
        &mut self,
        term_type: TermType,
        entries: Vec<AllocationEntry>,
    ) -> Result<()> {
        match validate_allocation(&entries) {
            Ok(active) => {
                debug!("allocation for {} set to {} entries", term_type, active.len());
                *self.data.allocations.get_mut(term_type) = active;
                Ok(())
            }
            Err(error) => {
                warn!("rejected allocation update for {}: {}", term_type, error);
                Err(error)
            }
        }
    }

    /// Replace a term bucket's asset-class mix, with the same all-or-nothing
    /// contract as [`PlannerStore::set_allocation`].
    pub fn set_asset_mix(&mut self, term_type: TermType, splits: Vec<AssetSplit>) -> Result<()> {
        match validate_asset_mix(&splits) {
            Ok(validated) => {
                debug!("asset mix for {} set to {} splits", term_type, validated.len());
                *self.data.assets.get_mut(term_type) = validated;
                Ok(())
            }
            Err(error) => {
                warn!("rejected asset mix update for {}: {}", term_type, error);
                Err(error)
            }
        }
    }

    /// Reducer-style entry point: dispatch a named action to its transition.
    pub fn apply(&mut self, action: PlannerAction) -> Result<()> {
        match action {
            PlannerAction::AddGoal(new_goal) => self.add_goal(new_goal).map(|_| ()),
            PlannerAction::UpdateGoal { id, goal } => self.update_goal(&id, goal).map(|_| ()),
            PlannerAction::RemoveGoal(selector) => self.remove_goal(&selector).map(|_| ()),
            PlannerAction::UpdateAssets { term_type, splits } => {
                self.set_asset_mix(term_type, splits)
            }
            PlannerAction::UpdateInvestmentAllocation { term_type, entries } => {
                self.set_allocation(term_type, entries)
            }
        }
    }

    fn build_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let name = new_goal.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::InvalidInput("goal name must not be empty".to_string()).into());
        }
        if new_goal.target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "target amount must be positive, got {}",
                new_goal.target_amount
            ))
            .into());
        }

        let investment_start_date = new_goal
            .investment_start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        if new_goal.target_date <= investment_start_date {
            return Err(ValidationError::InvalidInput(format!(
                "target date {} must be after the investment start date {}",
                new_goal.target_date, investment_start_date
            ))
            .into());
        }

        let term_type = self
            .term_policy
            .classify(investment_start_date, new_goal.target_date)?;

        Ok(Goal {
            id: Uuid::new_v4().to_string(),
            name,
            target_amount: new_goal.target_amount,
            target_date: new_goal.target_date,
            investment_start_date,
            term_type,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}
