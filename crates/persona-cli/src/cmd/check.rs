use crate::input;
use crate::output::print_json;
use persona_core::assessment::Assessment;
use persona_core::catalog::GROUPS;
use std::path::Path;

/// Report how far through the assessment a responses file is and which
/// traits still need the clarification slider.
pub fn run(input_path: &Path, json: bool) -> anyhow::Result<()> {
    let file = input::load(input_path)?;
    let mut assessment = Assessment::new();
    input::apply(&file, &mut assessment)?;

    let pending = assessment.pending_clarifications();

    if json {
        let groups: Vec<_> = GROUPS
            .iter()
            .map(|g| {
                serde_json::json!({
                    "title": g.title,
                    "complete": assessment.is_group_complete(g),
                })
            })
            .collect();
        let value = serde_json::json!({
            "progress": assessment.progress(),
            "groups": groups,
            "ambiguous": assessment.ambiguous_traits(),
            "pendingClarifications": pending,
        });
        return print_json(&value);
    }

    println!("Progress: {}%", assessment.progress());
    for group in &GROUPS {
        let mark = if assessment.is_group_complete(group) {
            "done"
        } else {
            "incomplete"
        };
        println!("  {:<18} {}", group.title, mark);
    }

    if pending.is_empty() {
        println!("No clarifications pending.");
    } else {
        println!("Needs clarification:");
        for key in pending {
            println!("  {key}");
        }
    }
    Ok(())
}
