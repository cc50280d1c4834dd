use crate::launch::{EnvVar, FetchSpec, ProcessConfig};
use crate::types::{Application, Job, PortRange};

/// Build the process half of the launch descriptor.
///
/// The application's own user wins over `fallback_user`. Plain files are
/// fetched uncached and come before the cached large files. Job properties
/// are exported first, then one `PORT{n}` per assigned port.
#[must_use]
pub fn process_config(
    app: &Application,
    job: &Job,
    ranges: &[PortRange],
    fallback_user: &str,
) -> ProcessConfig {
    let user = app.user.as_deref().unwrap_or(fallback_user).to_string();

    let fetch = app
        .files
        .iter()
        .map(|uri| FetchSpec::new(uri.as_str(), false))
        .chain(app.large_files.iter().map(|uri| FetchSpec::new(uri.as_str(), true)))
        .collect();

    let mut env: Vec<EnvVar> = job
        .properties
        .iter()
        .map(|(name, value)| EnvVar::new(name, value))
        .collect();
    env.extend(expand_ports(ranges));

    ProcessConfig {
        user,
        fetch,
        env,
        command_line: job.command.clone(),
        shell: true,
    }
}

/// Expand ranges into `PORT0`, `PORT1`, ... in list order.
///
/// The index runs across all ranges, so `[(5000,5001),(6000,6000)]` gives
/// `PORT0=5000 PORT1=5001 PORT2=6000`.
#[must_use]
pub fn expand_ports(ranges: &[PortRange]) -> Vec<EnvVar> {
    ranges
        .iter()
        .flat_map(|range| {
            debug_assert!(range.min() <= range.max(), "port range {range} is inverted");
            range.min()..=range.max()
        })
        .enumerate()
        .map(|(index, port)| EnvVar::new(format!("PORT{index}"), port.to_string()))
        .collect()
}
