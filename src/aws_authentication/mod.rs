use crate::configuration::Configuration;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_types::region::Region;
use tracing::debug;

pub fn region_for(configuration: &Configuration) -> Region {
    Region::new(configuration.region().to_owned())
}

pub async fn get_config(configuration: &Configuration, profile: Option<&str>) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(region_for(configuration));

    if let Some(profile_name) = profile {
        debug!(profile = profile_name, "using named AWS profile");
        loader = loader.profile_name(profile_name);
    }

    loader.load().await
}
