mod io;

use std::fmt;

use serde::Deserialize;

use crate::controller::AnimatorController;
pub use io::*;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDescriptor {
    pub name: String,
    #[serde(default)]
    pub base_animation_layers: Vec<AnimLayer>,
    #[serde(default)]
    pub special_animation_layers: Vec<AnimLayer>,
}

impl AvatarDescriptor {
    /// Base layers followed by special layers, both in declared order.
    pub fn all_layers(&self) -> impl Iterator<Item = &AnimLayer> {
        self.base_animation_layers
            .iter()
            .chain(self.special_animation_layers.iter())
    }
}

impl Default for AvatarDescriptor {
    fn default() -> AvatarDescriptor {
        AvatarDescriptor {
            name: String::default(),
            base_animation_layers: Vec::new(),
            special_animation_layers: Vec::new(),
        }
    }
}

// Avatar-level playable layer. A non-controller asset assigned in the
// editor is captured as a missing controller.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimLayer {
    #[serde(rename = "type")]
    pub layer_type: AnimLayerType,
    #[serde(default)]
    pub animator_controller: Option<AnimatorController>,
}

impl Default for AnimLayer {
    fn default() -> AnimLayer {
        AnimLayer {
            layer_type: AnimLayerType::Base,
            animator_controller: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum AnimLayerType {
    Base,
    Additive,
    Gesture,
    Action,
    FX,
    Sitting,
    TPose,
    IKPose,
}

impl fmt::Display for AnimLayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnimLayerType::Base => "Base",
            AnimLayerType::Additive => "Additive",
            AnimLayerType::Gesture => "Gesture",
            AnimLayerType::Action => "Action",
            AnimLayerType::FX => "FX",
            AnimLayerType::Sitting => "Sitting",
            AnimLayerType::TPose => "TPose",
            AnimLayerType::IKPose => "IKPose",
        };

        write!(f, "{name}")
    }
}
