use crate::launch::{AccessMode, ContainerConfig, ImageFormat, ImageRef, RuntimeType, VolumeConfig};
use crate::types::{Application, Container, Volume, VolumeMode};

/// Translate the application's container settings, or `None` when it runs bare.
#[must_use]
pub fn container_config(app: &Application) -> Option<ContainerConfig> {
    match &app.container {
        Container::None => None,
        Container::Docker(docker) => Some(ContainerConfig {
            runtime_type: RuntimeType::Native,
            image: ImageRef {
                format: ImageFormat::Docker,
                reference: docker.image.clone(),
            },
            volumes: docker.volumes.iter().map(volume_config).collect(),
        }),
    }
}

fn volume_config(volume: &Volume) -> VolumeConfig {
    VolumeConfig {
        container_path: volume.container_path.clone(),
        volume_name: volume.name.clone(),
        driver: volume.driver.clone(),
        mode: access_mode(volume.mode),
        driver_options: (!volume.options.is_empty()).then(|| volume.options.clone()),
    }
}

fn access_mode(mode: VolumeMode) -> AccessMode {
    match mode {
        VolumeMode::ReadWrite => AccessMode::Rw,
        VolumeMode::ReadOnly => AccessMode::Ro,
    }
}
