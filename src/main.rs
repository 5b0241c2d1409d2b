use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use log::info;
use structopt::StructOpt;

use squire_map_drawer::api::client::ApiClient;
use squire_map_drawer::api::models::ZoneTable;
use squire_map_drawer::MapDrawer;

#[derive(StructOpt)]
#[structopt(
    name = "squire-map-drawer",
    about = "Draws a grind profile's waypoints onto a zone map"
)]
struct Flags {
    /// Grind profile (xml) to draw
    #[structopt(long = "profile", parse(from_os_str), required_unless = "list-zones")]
    profile: Option<PathBuf>,

    /// Zone whose map to draw on
    #[structopt(long = "zone", required_unless = "list-zones")]
    zone: Option<String>,

    /// Json object mapping zone names to map image urls
    #[structopt(long = "zones", parse(from_os_str), default_value = "zones.json")]
    zones: PathBuf,

    /// Where to write <profile>.jpg
    #[structopt(long = "output-dir", parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    /// Write the /way macro lines here instead of stdout
    #[structopt(long = "addon", parse(from_os_str))]
    addon: Option<PathBuf>,

    /// Print the known zones and exit
    #[structopt(long = "list-zones")]
    list_zones: bool,

    /// Always download maps, skipping the http cache
    #[structopt(long = "no-cache")]
    no_cache: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = Flags::from_args();
    let zones = ZoneTable::load(&flags.zones)?;

    if flags.list_zones {
        for name in zones.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let (Some(profile), Some(zone)) = (flags.profile, flags.zone) else {
        anyhow::bail!("--profile and --zone are required");
    };

    let client = ApiClient::new(!flags.no_cache)?;
    let mut drawer = MapDrawer::new(client, zones);

    let loaded = drawer
        .load_profile(&profile)
        .with_context(|| format!("loading {}", profile.display()))?;
    match flags.addon {
        Some(path) => {
            std::fs::write(&path, &loaded.profile.addon)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote addon macros to {}", path.display());
        }
        None => {
            std::io::stdout().write_all(loaded.profile.addon.as_bytes())?;
        }
    }

    let output = drawer.draw(&zone, &flags.output_dir)?;
    println!("{}", output.display());
    Ok(())
}
