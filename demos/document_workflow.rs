//! Document Approval Workflow
//!
//! This example declares a multi-stage publishing workflow.
//!
//! Key concepts:
//! - Restricted transition map (Draft -> Review -> Approved -> Published)
//! - Named transitions tied to specific source states
//! - Named checkers for domain-specific predicates
//! - `force_set` as an auditable administrative override
//!
//! Run with: cargo run --example document_workflow

use statecraft::builder::MachineBuilder;
use statecraft::machine::TransitionError;
use statecraft::state_catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Approval Workflow ===\n");

    let documents = MachineBuilder::new()
        .states(state_catalog! {
            DRAFT => "draft",
            REVIEW => "review",
            APPROVED => "approved",
            PUBLISHED => "published",
        })
        .initial("draft")
        .transition("review", ["draft"])
        .named_transition_from("submit", "review", "draft")
        .named_transition_from("approve", "approved", "review")
        .named_transition_from("publish", "published", "approved")
        .named_checker("is_live", "published")
        .build()?;

    println!("Machine type built");
    println!("  complete: {}", documents.is_complete());
    println!("  methods:  {}\n", documents.method_names().count());

    let mut doc = documents.instantiate();
    println!("Initial state: {}", doc.actual_state());

    // Publishing a draft is not a legal move
    match doc.call("publish") {
        Err(TransitionError::InvalidTransition { from, to }) => {
            println!("Rejected: {from} -> {to}");
        }
        other => println!("Unexpected outcome: {other:?}"),
    }

    doc.call("submit")?;
    println!("After submit:  {}", doc.actual_state());

    // Reviewer sends it back
    doc.set("draft")?;
    println!("Sent back to:  {}", doc.actual_state());

    doc.call("submit")?;
    doc.call("approve")?;
    doc.call("publish")?;
    println!("Published:     {}", doc.call("is_live")?.as_bool().unwrap_or(false));

    // Administrative takedown bypasses the graph
    doc.force_set("draft")?;
    println!("Forced back to {}\n", doc.actual_state());

    let path: Vec<_> = doc.path().iter().map(|s| s.value()).collect();
    println!("Path: {}", path.join(" -> "));
    println!("Forced transitions: {}", doc.history().forced_count());

    println!("\n=== Example Complete ===");
    Ok(())
}
