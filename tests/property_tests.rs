//! Property-based tests for the rule store, evaluator and state machine.
//!
//! These tests use proptest to verify invariants hold across
//! many randomly generated inputs and operation sequences.

use proptest::prelude::*;
use ruleflow::core::Value;
use ruleflow::fsm::{derive_states, StateMachine, Transition};
use ruleflow::rules::{evaluate, Facts, NewRule, Operator, RuleStore};

fn arbitrary_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-20i32..20).prop_map(Value::from),
        "[a-c]{0,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::List)
    })
}

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    (0..Operator::ALL.len()).prop_map(|i| Operator::ALL[i])
}

fn state_name() -> impl Strategy<Value = String> {
    "[A-D]"
}

fn event_name() -> impl Strategy<Value = String> {
    "(go|back|stop)"
}

#[derive(Clone, Debug)]
enum FsmOp {
    Add(String, String, String),
    Delete(String, String),
    DeleteAll,
    Trigger(String, Option<String>),
    ClearHistory,
    Reset,
}

fn arbitrary_op() -> impl Strategy<Value = FsmOp> {
    prop_oneof![
        4 => (state_name(), event_name(), state_name()).prop_map(|(f, e, t)| FsmOp::Add(f, e, t)),
        2 => (state_name(), event_name()).prop_map(|(f, e)| FsmOp::Delete(f, e)),
        1 => Just(FsmOp::DeleteAll),
        4 => (event_name(), prop::option::of(state_name())).prop_map(|(e, f)| FsmOp::Trigger(e, f)),
        1 => Just(FsmOp::ClearHistory),
        1 => Just(FsmOp::Reset),
    ]
}

fn apply(machine: &mut StateMachine, op: &FsmOp) -> bool {
    match op {
        FsmOp::Add(f, e, t) => {
            machine.add_transition(Transition::new(f.as_str(), e.as_str(), t.as_str()));
            true
        }
        FsmOp::Delete(f, e) => machine.delete_transition(f, e).is_ok(),
        FsmOp::DeleteAll => {
            machine.delete_all_transitions();
            true
        }
        FsmOp::Trigger(e, f) => machine.trigger_event(e, f.as_deref()).is_ok(),
        FsmOp::ClearHistory => {
            machine.clear_history();
            true
        }
        FsmOp::Reset => {
            machine.reset();
            true
        }
    }
}

proptest! {
    #[test]
    fn list_is_sorted_and_stable(priorities in prop::collection::vec(-3i64..3, 0..20)) {
        let mut store = RuleStore::new();
        for (i, priority) in priorities.iter().enumerate() {
            store.add(NewRule {
                name: i.to_string(),
                field: "x".to_string(),
                operator: Operator::Eq,
                value: Value::Null,
                priority: Some(*priority),
            });
        }

        let listed = store.list();
        prop_assert_eq!(listed.len(), priorities.len());
        for pair in listed.windows(2) {
            prop_assert!(pair[0].priority <= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                let a: usize = pair[0].name.parse().unwrap();
                let b: usize = pair[1].name.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn evaluation_never_fails_and_counts_consistently(
        rules in prop::collection::vec((arbitrary_operator(), arbitrary_value()), 0..10),
        fact in prop::option::of(arbitrary_value()),
    ) {
        let mut store = RuleStore::new();
        for (operator, value) in rules.iter().cloned() {
            store.add(NewRule {
                name: "r".to_string(),
                field: "x".to_string(),
                operator,
                value,
                priority: None,
            });
        }

        let mut facts = Facts::new();
        if let Some(fact) = fact {
            facts.insert("x".to_string(), fact);
        }

        let evaluation = evaluate(&store.list(), &facts);
        prop_assert_eq!(evaluation.total_rules, rules.len());
        prop_assert_eq!(evaluation.results.len(), rules.len());
        prop_assert_eq!(
            evaluation.matched_rules,
            evaluation.results.iter().filter(|r| r.matched).count()
        );
    }

    #[test]
    fn eq_and_ne_are_complementary(left in arbitrary_value(), right in arbitrary_value()) {
        let eq = ruleflow::rules::apply(Operator::Eq, &left, &right).unwrap();
        let ne = ruleflow::rules::apply(Operator::Ne, &left, &right).unwrap();
        prop_assert_ne!(eq, ne);
    }

    #[test]
    fn state_set_always_matches_table(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new();

        for op in &ops {
            apply(&mut machine, op);

            prop_assert_eq!(machine.states(), &derive_states(machine.transitions()));
            match machine.current_state() {
                None => prop_assert!(machine.states().is_empty()),
                Some(current) => prop_assert!(machine.states().contains(current)),
            }
        }
    }

    #[test]
    fn failed_operations_leave_machine_unchanged(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new();

        for op in &ops {
            let before = machine.snapshot(usize::MAX);
            if !apply(&mut machine, op) {
                prop_assert_eq!(machine.snapshot(usize::MAX), before);
            }
        }
    }

    #[test]
    fn history_sequence_is_contiguous(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new();

        for op in &ops {
            apply(&mut machine, op);
        }

        for (i, entry) in machine.history().entries().iter().enumerate() {
            prop_assert_eq!(entry.seq, i as u64 + 1);
            prop_assert_eq!(&entry.state, &entry.to_state);
        }
    }
}
