use itertools::Itertools;

use crate::avatar::{AnimLayer, AvatarDescriptor};
use crate::controller::{BlendTreeType, Motion, StateMachine};

/// Builds the write defaults report for an avatar, one entry per line.
/// Regenerated from scratch on every call, nothing is cached.
pub fn generate_report(avatar: Option<&AvatarDescriptor>) -> Vec<String> {
    let mut lines = Vec::new();

    let Some(avatar) = avatar else {
        lines.push(String::from("No VRC Avatar Descriptor selected"));
        return lines;
    };

    for layer in avatar.all_layers() {
        scan_layer(layer, &mut lines);
        lines.push(String::new());
    }

    lines
}

pub fn report_text(lines: &[String]) -> String {
    lines.iter().join("\n")
}

fn scan_layer(layer: &AnimLayer, lines: &mut Vec<String>) {
    let Some(controller) = layer.animator_controller.as_ref() else {
        lines.push(format!("Layer \"{}\" - No controller assigned", layer.layer_type));
        return;
    };

    lines.push(format!("Layer \"{}\" - Controller: {}", layer.layer_type, controller.name));

    for ctrl_layer in controller.layers.iter() {
        lines.push(format!("  Layer: {}", ctrl_layer.name));

        if !scan_state_machine(&ctrl_layer.state_machine, "", lines) {
            lines.push(String::from("    - No WD found"));
        }
    }
}

/// Walks a state machine tree and reports every state with write defaults
/// on, prefixed with the dot joined chain of machine names below the root.
/// Returns whether anything in the subtree was flagged.
fn scan_state_machine(machine: &StateMachine, path: &str, lines: &mut Vec<String>) -> bool {
    let mut result = false;

    for state in machine.states.iter() {
        if !state.write_default_values {
            continue;
        }

        // Skip Direct blend trees. Turning write defaults off on those
        // causes side effects in game, so they aren't flagged.
        let direct_tree = matches!(
            &state.motion,
            Some(Motion::BlendTree(tree)) if tree.blend_type == BlendTreeType::Direct);

        if !direct_tree {
            lines.push(format!("    - WD ON > {path}{}", state.name));
            result = true;
        }
    }

    // Nested machines keep their declared order in the report.
    for child in machine.state_machines.iter() {
        if scan_state_machine(child, &format!("{path}{}.", child.name), lines) {
            result = true;
        }
    }

    result
}
