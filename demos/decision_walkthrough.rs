//! Decision Walkthrough
//!
//! Drives both engines through the service facade: a small fraud-style
//! rule set is evaluated against two fact mappings, then an order
//! workflow is built at runtime and pushed through its states.
//!
//! Run with: RUST_LOG=ruleflow=debug cargo run --example decision_walkthrough

use ruleflow::validation::{EvaluateRequest, RuleInput, TransitionInput, TriggerInput};
use ruleflow::{DecisionService, EngineConfig, Value};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ruleflow=info")),
        )
        .init();

    let service = DecisionService::new(EngineConfig::default().with_service_name("walkthrough"));

    println!("=== Rule Engine ===\n");

    let rules = [
        ("high amount", "amount", ">", Value::from(1000), Some(10)),
        ("risky country", "country", "in", Value::from(vec!["XX", "YY"]), Some(20)),
        ("flagged", "tags", "contains", Value::from("chargeback"), None),
    ];
    for (name, field, operator, value, priority) in rules {
        let added = service.add_rule(RuleInput {
            name: name.to_string(),
            field: field.to_string(),
            operator: operator.to_string(),
            value,
            priority,
        })?;
        println!("  added '{}' (priority {})", added.rule.name, added.rule.priority);
    }

    for facts in [
        r#"{"facts": {"amount": 2500, "country": "XX", "tags": ["new"]}}"#,
        r#"{"facts": {"amount": "unknown"}}"#,
    ] {
        let request: EvaluateRequest = serde_json::from_str(facts)?;
        let evaluation = service.evaluate(&request);
        println!(
            "\n  {} of {} rules matched",
            evaluation.matched_rules, evaluation.total_rules
        );
        for outcome in &evaluation.results {
            println!("    [{}] {}", if outcome.matched { "x" } else { " " }, outcome.detail);
        }
    }

    println!("\n=== State Machine ===\n");

    for (from, event, to) in [
        ("Pending", "pay", "Paid"),
        ("Paid", "ship", "Shipped"),
        ("Shipped", "deliver", "Delivered"),
        ("Pending", "cancel", "Cancelled"),
    ] {
        service.add_transition(TransitionInput {
            from_state: from.to_string(),
            event: event.to_string(),
            to_state: to.to_string(),
        })?;
    }

    for event in ["pay", "ship", "cancel", "deliver"] {
        match service.trigger_event(TriggerInput {
            event: event.to_string(),
            from_state: None,
        }) {
            Ok(applied) => println!("  {} --{}--> {}", applied.from_state, event, applied.to_state),
            Err(err) => println!("  '{event}' rejected: {err}"),
        }
    }

    let fsm = service.get_fsm();
    println!("\n  states: {:?}", fsm.states);
    println!("  current: {:?}", fsm.current_state);
    println!("  history:");
    for entry in &fsm.history {
        println!(
            "    #{} {} -> {} on '{}'",
            entry.seq, entry.from_state, entry.to_state, entry.event
        );
    }

    println!("\n{}", serde_json::to_string_pretty(&service.reset_fsm())?);
    Ok(())
}
