//! Planning session state machine.
//!
//! A session moves through seven phases, driven by the conversation
//! layer outside this crate. Transitions are guarded: the pricing core
//! is consumed only on entry to `Searching` (price + rank) and during
//! `FineTuning` (re-price), and a plan must be selected before the
//! session can finalize.

use serde::{Deserialize, Serialize};

use crate::domain::TripPlan;
use crate::preferences::TravelPreferences;

/// The phases of one planning conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionPhase {
    #[default]
    PointsInput,
    PreferenceGathering,
    Searching,
    OptionsPresented,
    FineTuning,
    Finalizing,
    Complete,
}

impl SessionPhase {
    /// Whether the state machine permits moving to `next` from here.
    pub fn can_advance_to(self, next: SessionPhase) -> bool {
        use SessionPhase::*;
        matches!(
            (self, next),
            (PointsInput, PreferenceGathering)
                | (PreferenceGathering, Searching)
                | (Searching, OptionsPresented)
                | (OptionsPresented, FineTuning)
                | (OptionsPresented, Finalizing)
                | (FineTuning, OptionsPresented)
                | (Finalizing, Complete)
        )
    }
}

/// Errors from guarded session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The state machine has no edge between the two phases
    #[error("cannot advance from {from:?} to {to:?}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },

    /// Searching requires fully specified preferences
    #[error("travel preferences are not fully specified")]
    IncompletePreferences,

    /// Finalizing requires a selected plan
    #[error("no plan has been selected")]
    NoPlanSelected,

    /// A plan index outside the presented list
    #[error("plan index {0} is out of range")]
    PlanIndexOutOfRange(usize),
}

/// One traveler's planning session.
#[derive(Debug, Clone, Default)]
pub struct PlanningSession {
    phase: SessionPhase,
    pub preferences: TravelPreferences,
    plans: Vec<TripPlan>,
    selected: Option<usize>,
}

impl PlanningSession {
    /// Start a new session at the points-input phase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The currently presented plans.
    pub fn plans(&self) -> &[TripPlan] {
        &self.plans
    }

    /// The selected plan, once one has been chosen.
    pub fn selected_plan(&self) -> Option<&TripPlan> {
        self.selected.and_then(|i| self.plans.get(i))
    }

    /// Advance to the next phase, enforcing transition guards.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the edge does not exist, when moving to
    /// `Searching` with incomplete preferences, or when moving to
    /// `Finalizing` without a selected plan.
    pub fn advance(&mut self, next: SessionPhase) -> Result<(), SessionError> {
        if !self.phase.can_advance_to(next) {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        if next == SessionPhase::Searching && !self.preferences.is_fully_specified() {
            return Err(SessionError::IncompletePreferences);
        }
        if next == SessionPhase::Finalizing && self.selected.is_none() {
            return Err(SessionError::NoPlanSelected);
        }
        self.phase = next;
        Ok(())
    }

    /// Record the ranked plans produced by a search. Clears any earlier
    /// selection, since the old indices no longer mean anything.
    pub fn present_plans(&mut self, plans: Vec<TripPlan>) {
        self.plans = plans;
        self.selected = None;
    }

    /// Choose one of the presented plans.
    pub fn select_plan(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.plans.len() {
            return Err(SessionError::PlanIndexOutOfRange(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Supersede a presented plan with a re-priced replacement.
    pub fn replace_plan(&mut self, index: usize, plan: TripPlan) -> Result<(), SessionError> {
        if index >= self.plans.len() {
            return Err(SessionError::PlanIndexOutOfRange(index));
        }
        self.plans[index] = plan;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        FlightOffer, FlightSegment, HotelFunding, Issuer, Program, UsdCents,
    };
    use std::collections::BTreeMap;

    fn plan(label: &str) -> TripPlan {
        TripPlan {
            flight: FlightOffer::new(
                Program::UnitedMileageplus,
                25_000,
                UsdCents::new(1120),
                vec![FlightSegment {
                    origin: "JFK".into(),
                    destination: "HNL".into(),
                    departure: "2026-04-15T08:00:00".into(),
                    arrival: "2026-04-15T14:00:00".into(),
                    airline: "UA".into(),
                    flight_number: "UA101".into(),
                }],
                vec![],
            )
            .unwrap(),
            hotel: None,
            flight_issuer: Issuer::ChaseUr,
            hotel_funding: HotelFunding::None,
            points_by_issuer: BTreeMap::from([(Issuer::ChaseUr, 25_000)]),
            total_points: 25_000,
            total_cash: UsdCents::new(1120),
            cpp: Some(1.35),
            label: label.into(),
        }
    }

    fn session_at_options() -> PlanningSession {
        let mut session = PlanningSession::new();
        session.preferences.destination = "HNL".into();
        session.preferences.origin_airport = "JFK".into();
        session.preferences.departure_date = Some("2026-04-15".parse().unwrap());
        session.preferences.return_date = Some("2026-04-22".parse().unwrap());
        session.advance(SessionPhase::PreferenceGathering).unwrap();
        session.advance(SessionPhase::Searching).unwrap();
        session.present_plans(vec![plan("a"), plan("b")]);
        session.advance(SessionPhase::OptionsPresented).unwrap();
        session
    }

    #[test]
    fn happy_path_through_all_phases() {
        let mut session = session_at_options();
        session.select_plan(0).unwrap();
        session.advance(SessionPhase::Finalizing).unwrap();
        session.advance(SessionPhase::Complete).unwrap();
        assert_eq!(session.phase(), SessionPhase::Complete);
        assert_eq!(session.selected_plan().unwrap().label, "a");
    }

    #[test]
    fn fine_tune_loops_back_to_options() {
        let mut session = session_at_options();
        session.advance(SessionPhase::FineTuning).unwrap();
        session.replace_plan(1, plan("b2")).unwrap();
        session.advance(SessionPhase::OptionsPresented).unwrap();
        assert_eq!(session.plans()[1].label, "b2");
    }

    #[test]
    fn illegal_jumps_are_rejected() {
        let mut session = PlanningSession::new();
        let err = session.advance(SessionPhase::Finalizing).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { .. }));

        let err = session.advance(SessionPhase::Complete).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { .. }));
    }

    #[test]
    fn searching_requires_complete_preferences() {
        let mut session = PlanningSession::new();
        session.advance(SessionPhase::PreferenceGathering).unwrap();
        assert_eq!(
            session.advance(SessionPhase::Searching),
            Err(SessionError::IncompletePreferences)
        );
    }

    #[test]
    fn finalizing_requires_a_selection() {
        let mut session = session_at_options();
        assert_eq!(
            session.advance(SessionPhase::Finalizing),
            Err(SessionError::NoPlanSelected)
        );
    }

    #[test]
    fn selecting_out_of_range_plan_fails() {
        let mut session = session_at_options();
        assert_eq!(
            session.select_plan(7),
            Err(SessionError::PlanIndexOutOfRange(7))
        );
    }

    #[test]
    fn presenting_new_plans_clears_selection() {
        let mut session = session_at_options();
        session.select_plan(1).unwrap();
        session.present_plans(vec![plan("fresh")]);
        assert!(session.selected_plan().is_none());
    }
}
