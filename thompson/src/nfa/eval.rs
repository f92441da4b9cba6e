//! The simulator: tracks the set of states an NFA could currently be in
//! while consuming a string one character at a time.
//!
//! This is the iterative ε-closure walk of spec §4.4. The original source
//! this engine is descended from stepped a single "current state" by
//! following one ε-transition at a time in a `while` loop with no visited
//! set, which loops forever the moment a pattern compiles to an ε-cycle
//! (trivially reachable via nested stars, e.g. `(a*)*`). Tracking the whole
//! reachable *set* and only ever adding to it during closure expansion
//! makes the loop monotonic: it has at most `states.len()` iterations
//! before it must reach a fixed point.

use crate::nfa::{Label, Nfa, NfaState, StateId};
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct NfaEvaluator<'a> {
    nfa: &'a Nfa,
    current_states: HashSet<StateId>,
}

impl<'a> NfaEvaluator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        let mut states = HashSet::new();
        states.insert(nfa.initial_state());
        let mut evaluator = NfaEvaluator {
            nfa,
            current_states: states,
        };
        evaluator.include_closure();
        evaluator
    }

    pub fn is_accepting(&self) -> bool {
        self.current_states().iter().any(|s| s.accepting)
    }

    pub fn current_states(&self) -> Vec<&NfaState> {
        self.current_states
            .iter()
            .map(|&s| &self.nfa.states()[s])
            .collect()
    }

    pub fn current_states_idx(&self) -> &HashSet<StateId> {
        &self.current_states
    }

    /// The distinct characters that would move this evaluator forward from
    /// its current state set, sorted ascending. Used by the CLI's
    /// test-generation mode to guide a random walk toward strings the
    /// pattern actually accepts, rather than guessing over the whole
    /// alphabet.
    pub fn available_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .current_states()
            .iter()
            .flat_map(|s| {
                s.transitions().iter().filter_map(|&(label, _)| match label {
                    Label::Char(c) => Some(c),
                    Label::Epsilon => None,
                })
            })
            .collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }

    /// Advances by one character of input. Returns `None` if the resulting
    /// state set is empty, meaning no further input can ever be accepted.
    pub fn step(&mut self, c: char) -> Option<()> {
        self.current_states = self
            .current_states
            .iter()
            .flat_map(|&state| {
                self.nfa.states()[state]
                    .transitions()
                    .iter()
                    .filter_map(move |&(label, target)| match label {
                        Label::Char(lc) if lc == c => Some(target),
                        _ => None,
                    })
            })
            .collect();
        self.include_closure();
        if self.current_states.is_empty() {
            None
        } else {
            Some(())
        }
    }

    pub fn step_multiple(&mut self, input: &str) -> Option<()> {
        input.chars().try_for_each(|c| self.step(c))
    }

    /// Expands `current_states` to its ε-closure: repeatedly follows every
    /// ε-transition reachable from the current set until no new state is
    /// added. Each iteration only adds states, never removes them, so this
    /// always terminates in at most one pass per state in the NFA.
    fn include_closure(&mut self) {
        let mut frontier: Vec<StateId> = self.current_states.iter().copied().collect();
        while let Some(state) = frontier.pop() {
            for &(label, target) in self.nfa.states()[state].transitions() {
                if label == Label::Epsilon && self.current_states.insert(target) {
                    frontier.push(target);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::Builder;

    #[test]
    fn evaluator_tracks_multiple_live_branches() {
        let mut b = Builder::new();
        let a = b.literal('a');
        let bb = b.literal('b');
        let frag = b.alternate(a, bb);
        let nfa = b.finish(frag);
        let mut eval = NfaEvaluator::new(&nfa);
        assert_eq!(eval.current_states_idx().len(), 2);
        assert!(eval.step('a').is_some());
        assert!(eval.is_accepting());
    }

    #[test]
    fn dead_end_reports_none() {
        let mut b = Builder::new();
        let f = b.literal('a');
        let nfa = b.finish(f);
        let mut eval = NfaEvaluator::new(&nfa);
        assert!(eval.step('z').is_none());
    }
}
