use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatorController {
    pub name: String,
    #[serde(default)]
    pub layers: Vec<ControllerLayer>,
}

impl Default for AnimatorController {
    fn default() -> AnimatorController {
        AnimatorController {
            name: String::default(),
            layers: Vec::new(),
        }
    }
}

// Controller-level layer, not to be confused with the avatar-level
// playable layers in the avatar module.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerLayer {
    pub name: String,
    pub state_machine: StateMachine,
}

impl Default for ControllerLayer {
    fn default() -> ControllerLayer {
        ControllerLayer {
            name: String::default(),
            state_machine: StateMachine::default(),
        }
    }
}

/// A state machine node. Child machines are owned, so the tree can't
/// contain cycles and plain recursion over it always terminates.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMachine {
    pub name: String,
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub state_machines: Vec<StateMachine>,
}

impl Default for StateMachine {
    fn default() -> StateMachine {
        StateMachine {
            name: String::default(),
            states: Vec::new(),
            state_machines: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub name: String,
    #[serde(default)]
    pub write_default_values: bool,
    #[serde(default)]
    pub motion: Option<Motion>,
}

impl Default for State {
    fn default() -> State {
        State {
            name: String::default(),
            write_default_values: false,
            motion: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Motion {
    Clip(Clip),
    BlendTree(BlendTree),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub name: String,
}

/// Snapshots keep the child motions of a blend tree, though only the
/// tree's own blend type matters when auditing the owning state.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendTree {
    pub name: String,
    pub blend_type: BlendTreeType,
    #[serde(default)]
    pub children: Vec<Motion>,
}

impl Default for BlendTree {
    fn default() -> BlendTree {
        BlendTree {
            name: String::default(),
            blend_type: BlendTreeType::Simple1D,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum BlendTreeType {
    Simple1D,
    SimpleDirectional2D,
    FreeformDirectional2D,
    FreeformCartesian2D,
    Direct,
}
