use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error as ThisError;

use crate::avatar::AvatarDescriptor;

#[derive(Debug, ThisError)]
pub enum SnapshotLoadError {
    #[error("Snapshot version {version} is not supported")]
    SnapshotVersionNotSupported {
        version: u32
    },
    #[error("Can't read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Can't parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

fn is_version_supported(version: u32) -> bool {
    match version {
        1 => true,
        _ => false
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    version: u32,
    #[serde(flatten)]
    avatar: AvatarDescriptor,
}

/// Loads an avatar snapshot exported as JSON.
pub fn load_snapshot_file<T>(snapshot_path: T) -> Result<AvatarDescriptor, SnapshotLoadError> where T: AsRef<Path> {
    let text = fs::read_to_string(snapshot_path)?;
    load_snapshot_str(&text)
}

pub fn load_snapshot_str(text: &str) -> Result<AvatarDescriptor, SnapshotLoadError> {
    let snapshot: Snapshot = serde_json::from_str(text)?;

    if !is_version_supported(snapshot.version) {
        return Err(SnapshotLoadError::SnapshotVersionNotSupported {
            version: snapshot.version
        });
    }

    log::debug!(
        "Loaded avatar \"{}\" with {} base and {} special layers",
        snapshot.avatar.name,
        snapshot.avatar.base_animation_layers.len(),
        snapshot.avatar.special_animation_layers.len());

    Ok(snapshot.avatar)
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use super::*;
    use crate::avatar::AnimLayerType;
    use crate::controller::{BlendTreeType, Motion};

    #[rstest]
    fn load_full_snapshot() {
        let text = r#"{
            "version": 1,
            "name": "Test Avatar",
            "baseAnimationLayers": [
                {
                    "type": "FX",
                    "animatorController": {
                        "name": "FX Controller",
                        "layers": [
                            {
                                "name": "Toggles",
                                "stateMachine": {
                                    "name": "Toggles",
                                    "states": [
                                        {
                                            "name": "On",
                                            "writeDefaultValues": true,
                                            "motion": { "blendTree": { "name": "Tree", "blendType": "Direct" } }
                                        },
                                        {
                                            "name": "Off",
                                            "motion": { "clip": { "name": "Off Anim" } }
                                        }
                                    ],
                                    "stateMachines": [
                                        { "name": "Nested" }
                                    ]
                                }
                            }
                        ]
                    }
                }
            ],
            "specialAnimationLayers": [
                { "type": "Sitting", "animatorController": null }
            ]
        }"#;

        let avatar = load_snapshot_str(text).unwrap();

        assert_eq!("Test Avatar", avatar.name);
        assert_eq!(1, avatar.base_animation_layers.len());
        assert_eq!(1, avatar.special_animation_layers.len());

        let fx = &avatar.base_animation_layers[0];
        assert_eq!(AnimLayerType::FX, fx.layer_type);

        let controller = fx.animator_controller.as_ref().unwrap();
        assert_eq!("FX Controller", controller.name);

        let machine = &controller.layers[0].state_machine;
        assert_eq!(2, machine.states.len());
        assert_eq!(1, machine.state_machines.len());

        let on = &machine.states[0];
        assert!(on.write_default_values);
        assert!(matches!(
            on.motion.as_ref().unwrap(),
            Motion::BlendTree(tree) if tree.blend_type == BlendTreeType::Direct));

        let off = &machine.states[1];
        assert!(!off.write_default_values);
        assert!(matches!(off.motion.as_ref().unwrap(), Motion::Clip(clip) if clip.name == "Off Anim"));

        // Layer with a null controller falls through to "not assigned"
        assert!(avatar.special_animation_layers[0].animator_controller.is_none());
    }

    #[rstest]
    fn reject_unsupported_version() {
        let text = r#"{ "version": 2, "name": "Test Avatar" }"#;

        let result = load_snapshot_str(text);

        assert!(matches!(
            result,
            Err(SnapshotLoadError::SnapshotVersionNotSupported { version: 2 })));
    }

    #[rstest]
    fn reject_malformed_snapshot() {
        let result = load_snapshot_str("not json");

        assert!(matches!(result, Err(SnapshotLoadError::Parse(_))));
    }

    #[rstest]
    fn missing_file_is_io_error() {
        let result = load_snapshot_file("does/not/exist.json");

        assert!(matches!(result, Err(SnapshotLoadError::Io(_))));
    }
}
